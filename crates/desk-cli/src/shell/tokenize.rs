//! Split a shell line into words.
//!
//! Words are separated by whitespace. Single quotes keep their content
//! verbatim; double quotes allow `\"` and `\\` escapes. A backslash outside
//! quotes escapes the next character.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenizeError {
    #[error("unterminated {0} quote")]
    UnterminatedQuote(char),
    #[error("trailing backslash")]
    TrailingEscape,
}

pub fn tokenize(line: &str) -> Result<Vec<String>, TokenizeError> {
    let mut words = Vec::new();
    let mut current = String::new();
    // Distinguishes `''` (an empty word) from no word at all.
    let mut in_word = false;
    let mut chars = line.chars();

    while let Some(ch) = chars.next() {
        match ch {
            c if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            '\'' => {
                in_word = true;
                loop {
                    match chars.next() {
                        Some('\'') => break,
                        Some(c) => current.push(c),
                        None => return Err(TokenizeError::UnterminatedQuote('\'')),
                    }
                }
            }
            '"' => {
                in_word = true;
                loop {
                    match chars.next() {
                        Some('"') => break,
                        Some('\\') => match chars.next() {
                            Some(c @ ('"' | '\\')) => current.push(c),
                            Some(c) => {
                                current.push('\\');
                                current.push(c);
                            }
                            None => return Err(TokenizeError::UnterminatedQuote('"')),
                        },
                        Some(c) => current.push(c),
                        None => return Err(TokenizeError::UnterminatedQuote('"')),
                    }
                }
            }
            '\\' => {
                in_word = true;
                current.push(chars.next().ok_or(TokenizeError::TrailingEscape)?);
            }
            c => {
                in_word = true;
                current.push(c);
            }
        }
    }

    if in_word {
        words.push(current);
    }
    Ok(words)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::{TokenizeError, tokenize};

    #[rstest]
    #[case("", &[])]
    #[case("   ", &[])]
    #[case("add monday", &["add", "monday"])]
    #[case("set 3 --time '09:00 - 11:00'", &["set", "3", "--time", "09:00 - 11:00"])]
    #[case(r#"ask "what is \"big O\"?""#, &["ask", r#"what is "big O"?"#])]
    #[case(r"note a\ b", &["note", "a b"])]
    #[case("set 1 --location ''", &["set", "1", "--location", ""])]
    #[case("draft --title=\"Lab 2\"", &["draft", "--title=Lab 2"])]
    fn splits_words(#[case] line: &str, #[case] want: &[&str]) {
        assert_eq!(tokenize(line).unwrap(), want);
    }

    #[test]
    fn unterminated_quote_is_an_error() {
        assert_eq!(
            tokenize("note 'half").unwrap_err(),
            TokenizeError::UnterminatedQuote('\'')
        );
        assert_eq!(
            tokenize("note \"half").unwrap_err(),
            TokenizeError::UnterminatedQuote('"')
        );
    }

    #[test]
    fn trailing_backslash_is_an_error() {
        assert_eq!(tokenize("note \\").unwrap_err(), TokenizeError::TrailingEscape);
    }
}
