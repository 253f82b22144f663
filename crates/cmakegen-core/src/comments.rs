//! Comment removal for C++ sources.
//!
//! This is a textual pass, not a lexer: a `//` or `/*` inside a string
//! literal still starts a comment. Callers only use the result for substring
//! searches, where that approximation is acceptable.

/// Remove `//` line comments and `/* */` block comments from `text`.
///
/// A line comment is removed up to, but not including, the newline that ends
/// it. A block comment is removed entirely, leaving no placeholder. Block
/// comments do not nest, and an unterminated block comment swallows the rest
/// of the text.
pub fn strip_comments(text: &str) -> String {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    let mut kept_from = 0;
    let mut i = 0;

    while i + 1 < bytes.len() {
        if bytes[i] != b'/' {
            i += 1;
            continue;
        }
        match bytes[i + 1] {
            b'/' => {
                out.push_str(&text[kept_from..i]);
                match text[i..].find('\n') {
                    Some(offset) => {
                        i += offset;
                        kept_from = i;
                    }
                    None => return out,
                }
            }
            b'*' => {
                out.push_str(&text[kept_from..i]);
                match text[i + 2..].find("*/") {
                    Some(offset) => {
                        i += 2 + offset + 2;
                        kept_from = i;
                    }
                    None => return out,
                }
            }
            _ => i += 1,
        }
    }

    out.push_str(&text[kept_from..]);
    out
}
