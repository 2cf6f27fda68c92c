use crate::analysis::stopwords::StopWordSet;
use crate::analysis::tokenizer::{is_valid_word, split_into_words};
use crate::core::error::{Error, ErrorKind, Result};

/// A parsed query: de-duplicated, sorted plus- and minus-words (unless
/// `skip_sort` was requested, in which case order and duplicates survive).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub plus_words: Vec<String>,
    pub minus_words: Vec<String>,
}

struct QueryWord {
    text: String,
    is_minus: bool,
}

fn parse_query_word(token: &str) -> Result<QueryWord> {
    if token.is_empty() {
        return Err(Error::new(ErrorKind::EmptyQueryWord, "query word is empty"));
    }
    let (is_minus, rest) = match token.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, token),
    };
    if rest.is_empty() {
        return Err(Error::new(ErrorKind::EmptyQueryWord, "query word is empty"));
    }
    if rest.starts_with('-') || !is_valid_word(rest) {
        return Err(Error::new(
            ErrorKind::InvalidQueryWord,
            format!("query word {:?} is invalid", token),
        ));
    }
    Ok(QueryWord { text: rest.to_string(), is_minus })
}

/// Parses a raw query string into plus- and minus-word sequences.
///
/// `skip_sort` preserves token order and duplicates, for the parallel matcher;
/// callers that rely on set semantics must leave it `false`.
pub fn parse_query(raw_query: &str, stop_words: &StopWordSet, skip_sort: bool) -> Result<Query> {
    let mut plus_words = Vec::new();
    let mut minus_words = Vec::new();

    for token in split_into_words(raw_query).map_err(|e| {
        Error::new(ErrorKind::InvalidQueryWord, e.context)
    })? {
        let word = parse_query_word(token)?;
        if stop_words.contains(&word.text) {
            continue;
        }
        if word.is_minus {
            minus_words.push(word.text);
        } else {
            plus_words.push(word.text);
        }
    }

    if !skip_sort {
        plus_words.sort();
        plus_words.dedup();
        minus_words.sort();
        minus_words.dedup();
    }

    Ok(Query { plus_words, minus_words })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stop_words(text: &str) -> StopWordSet {
        StopWordSet::from_text(text).unwrap()
    }

    #[test]
    fn separates_plus_and_minus_words() {
        let q = parse_query("big grey -wolf", &stop_words(""), false).unwrap();
        assert_eq!(q.plus_words, vec!["big", "grey"]);
        assert_eq!(q.minus_words, vec!["wolf"]);
    }

    #[test]
    fn sorts_and_dedupes() {
        let q = parse_query("grey big grey big", &stop_words(""), false).unwrap();
        assert_eq!(q.plus_words, vec!["big", "grey"]);
    }

    #[test]
    fn skip_sort_preserves_order_and_duplicates() {
        let q = parse_query("grey big grey", &stop_words(""), true).unwrap();
        assert_eq!(q.plus_words, vec!["grey", "big", "grey"]);
    }

    #[test]
    fn discards_stop_words() {
        let q = parse_query("in the cat", &stop_words("in the"), false).unwrap();
        assert_eq!(q.plus_words, vec!["cat"]);
    }

    #[test]
    fn bare_minus_is_empty_query_word() {
        let err = parse_query("big -", &stop_words(""), false).unwrap_err();
        assert_eq!(err.kind, ErrorKind::EmptyQueryWord);
    }

    #[test]
    fn double_minus_is_invalid() {
        let err = parse_query("big --wolf", &stop_words(""), false).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidQueryWord);
    }

    #[test]
    fn control_character_is_invalid() {
        let err = parse_query("big\u{1}wolf", &stop_words(""), false).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidQueryWord);
    }
}
