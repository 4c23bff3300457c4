use crate::mapping::{sort_by_specificity, VendorMapping};
use crate::prefix::Prefix;

/// Vendor lookup by scanning every prefix, longest first.
///
/// This is the straightforward O(prefixes) lookup the trie replaces. It is
/// kept as the reference the trie's answers are checked against.
#[derive(Debug, Clone, Default)]
pub struct LinearMatcher {
  mappings: Vec<VendorMapping>,
}

impl LinearMatcher {
  /// Keeps only mappings the trie would accept, so both answer from the same records.
  pub fn new(mut mappings: Vec<VendorMapping>) -> LinearMatcher {
    mappings.retain(|m| Prefix::parse(&m.mac_prefix).is_ok());
    sort_by_specificity(&mut mappings);
    LinearMatcher { mappings }
  }

  /// First mapping whose prefix starts `address`, ignoring ASCII case.
  pub fn find(&self, address: &str) -> Option<&str> {
    self.mappings
      .iter()
      .find(|m| starts_with_ignore_case(address, &m.mac_prefix))
      .map(|m| m.vendor_name.as_str())
  }

  pub fn len(&self) -> usize {
    self.mappings.len()
  }

  pub fn is_empty(&self) -> bool {
    self.mappings.is_empty()
  }
}

fn starts_with_ignore_case(text: &str, prefix: &str) -> bool {
  text.len() >= prefix.len() && text.as_bytes()[..prefix.len()].eq_ignore_ascii_case(prefix.as_bytes())
}
