use std::fmt;
use std::str::FromStr;

use crate::error::PrefixError;

/// Maximum number of `:`-separated tokens in a vendor prefix.
pub const MAX_TOKENS: usize = 6;

/// A validated vendor prefix: one or more full octets, optionally followed by
/// a single hex digit selecting the upper nibble of the next octet.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Prefix {
  octets: Vec<u8>,
  half_octet: Option<u8>,
}

impl Prefix {
  /// Parses every token before returning, so a malformed prefix never reaches the trie.
  pub fn parse(prefix: &str) -> Result<Prefix, PrefixError> {
    if prefix.is_empty() {
      return Err(PrefixError::Empty);
    };
    let tokens: Vec<&str> = prefix.split(':').collect();
    if tokens.len() > MAX_TOKENS {
      return Err(PrefixError::TooManyTokens { prefix: prefix.to_string(), count: tokens.len() });
    };

    let last = tokens.len() - 1;
    let mut octets = Vec::with_capacity(tokens.len());
    let mut half_octet = None;
    for (i, &token) in tokens.iter().enumerate() {
      match token.len() {
        2 => {
          let octet = parse_octet(token).ok_or_else(|| PrefixError::InvalidHexDigit {
            prefix: prefix.to_string(),
            token: token.to_string(),
          })?;
          octets.push(octet);
        }
        1 => {
          if i == 0 {
            return Err(PrefixError::HalfOctetWithoutParent { prefix: prefix.to_string() });
          };
          if i != last {
            return Err(PrefixError::MisplacedHalfOctet {
              prefix: prefix.to_string(),
              token: token.to_string(),
            });
          };
          let digit = parse_nibble(token).ok_or_else(|| PrefixError::InvalidHexDigit {
            prefix: prefix.to_string(),
            token: token.to_string(),
          })?;
          half_octet = Some(digit);
        }
        _ => {
          return Err(PrefixError::InvalidTokenLength {
            prefix: prefix.to_string(),
            token: token.to_string(),
          });
        }
      };
    };

    Ok(Prefix { octets, half_octet })
  }

  // Never empty.
  pub fn octets(&self) -> &[u8] {
    &self.octets
  }

  pub fn half_octet(&self) -> Option<u8> {
    self.half_octet
  }

  pub fn token_count(&self) -> usize {
    self.octets.len() + self.half_octet.is_some() as usize
  }
}

impl FromStr for Prefix {
  type Err = PrefixError;

  fn from_str(s: &str) -> Result<Prefix, PrefixError> {
    Prefix::parse(s)
  }
}

impl fmt::Display for Prefix {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for (i, octet) in self.octets.iter().enumerate() {
      if i > 0 {
        f.write_str(":")?;
      };
      write!(f, "{:02X}", octet)?;
    };
    if let Some(digit) = self.half_octet {
      write!(f, ":{:X}", digit)?;
    };
    Ok(())
  }
}

// `u8::from_str_radix` alone would also accept a sign.
pub(crate) fn parse_octet(token: &str) -> Option<u8> {
  let bytes = token.as_bytes();
  if bytes.len() != 2 || !bytes.iter().all(u8::is_ascii_hexdigit) {
    return None;
  };
  u8::from_str_radix(token, 16).ok()
}

pub(crate) fn parse_nibble(token: &str) -> Option<u8> {
  match token.as_bytes() {
    [c] => leading_nibble(*c),
    _ => None,
  }
}

pub(crate) fn leading_nibble(c: u8) -> Option<u8> {
  (c as char).to_digit(16).map(|d| d as u8)
}
