use crate::core::error::{Error, ErrorKind, Result};

/// Splits text on runs of ASCII space and rejects tokens containing a byte
/// below 0x20. The space itself is a delimiter, never a character of a token.
pub fn split_into_words(text: &str) -> Result<Vec<&str>> {
    let mut words = Vec::new();
    for word in text.split(' ').filter(|w| !w.is_empty()) {
        if !is_valid_word(word) {
            return Err(Error::new(
                ErrorKind::InvalidCharacter,
                format!("word {:?} contains a control character", word),
            ));
        }
        words.push(word);
    }
    Ok(words)
}

/// A word is valid if none of its bytes fall in `[0x00, 0x20)`.
pub fn is_valid_word(word: &str) -> bool {
    word.bytes().all(|b| b >= 0x20)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_ascii_space() {
        assert_eq!(split_into_words("cat in the city").unwrap(), vec!["cat", "in", "the", "city"]);
    }

    #[test]
    fn collapses_runs_of_spaces() {
        assert_eq!(split_into_words("  big   grey  ").unwrap(), vec!["big", "grey"]);
    }

    #[test]
    fn empty_text_yields_no_words() {
        assert!(split_into_words("").unwrap().is_empty());
        assert!(split_into_words("    ").unwrap().is_empty());
    }

    #[test]
    fn rejects_control_characters() {
        let err = split_into_words("big\tgrey").unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidCharacter);
    }

    #[test]
    fn tab_is_a_control_character_not_a_delimiter() {
        assert!(split_into_words("a\tb").is_err());
    }
}
