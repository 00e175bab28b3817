//! # Token Splitters

use core::fmt::Debug;

use regex::Regex;

use crate::errors::{Result, SeqBatchError};

/// Splits one side of a record into tokens.
pub trait TokenSplitter: Debug + Send + Sync {
    /// Split `text` into tokens.
    fn split_tokens(
        &self,
        text: &str,
    ) -> Vec<String>;
}

/// Splits on runs of unicode whitespace.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WhitespaceSplitter;

impl TokenSplitter for WhitespaceSplitter {
    fn split_tokens(
        &self,
        text: &str,
    ) -> Vec<String> {
        text.split_whitespace().map(str::to_string).collect()
    }
}

/// Every non-overlapping match of a regex is a token.
#[derive(Debug, Clone)]
pub struct RegexSplitter {
    regex: Regex,
}

impl RegexSplitter {
    /// Compile a new regex splitter.
    ///
    /// ## Errors
    /// [`SeqBatchError::Pattern`] if the pattern does not compile.
    pub fn new(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern).map_err(|e| SeqBatchError::Pattern(e.to_string()))?;
        Ok(Self { regex })
    }

    /// The source pattern.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

impl TokenSplitter for RegexSplitter {
    fn split_tokens(
        &self,
        text: &str,
    ) -> Vec<String> {
        self.regex
            .find_iter(text)
            .map(|mat| mat.as_str().to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_splitter() {
        assert_eq!(
            WhitespaceSplitter.split_tokens("  Je suis\tgras \n"),
            vec!["Je", "suis", "gras"]
        );
        assert!(WhitespaceSplitter.split_tokens("   ").is_empty());
    }

    #[test]
    fn test_regex_splitter() {
        let splitter = RegexSplitter::new(r"\w+|[^\w\s]").unwrap();
        assert_eq!(splitter.as_str(), r"\w+|[^\w\s]");
        assert_eq!(
            splitter.split_tokens("I'm calm."),
            vec!["I", "'", "m", "calm", "."]
        );
    }

    #[test]
    fn test_bad_pattern() {
        assert!(matches!(
            RegexSplitter::new("(unclosed"),
            Err(SeqBatchError::Pattern(_))
        ));
    }
}
