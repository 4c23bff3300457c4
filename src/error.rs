use thiserror::Error;

/// A vendor prefix that could not be inserted into the trie.
///
/// Every variant except [`PrefixError::Empty`] carries the offending prefix so
/// callers building from a large data set can log the record and move on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PrefixError {
  #[error("empty MAC prefix")]
  Empty,

  #[error("MAC prefix {prefix:?} has {count} tokens, at most 6 are allowed")]
  TooManyTokens { prefix: String, count: usize },

  #[error("MAC prefix {prefix:?} has token {token:?} whose length is not 1 or 2")]
  InvalidTokenLength { prefix: String, token: String },

  #[error("MAC prefix {prefix:?} has non-hex token {token:?}")]
  InvalidHexDigit { prefix: String, token: String },

  #[error("half-octet token {token:?} is not the last token of MAC prefix {prefix:?}")]
  MisplacedHalfOctet { prefix: String, token: String },

  #[error("MAC prefix {prefix:?} starts with a half-octet token")]
  HalfOctetWithoutParent { prefix: String },
}

impl PrefixError {
  /// The prefix string that was rejected.
  pub fn prefix(&self) -> &str {
    match self {
      PrefixError::Empty => "",
      PrefixError::TooManyTokens { prefix, .. }
      | PrefixError::InvalidTokenLength { prefix, .. }
      | PrefixError::InvalidHexDigit { prefix, .. }
      | PrefixError::MisplacedHalfOctet { prefix, .. }
      | PrefixError::HalfOctetWithoutParent { prefix } => prefix,
    }
  }
}
