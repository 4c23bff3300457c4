#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::PrefixError;
use crate::PrefixTrie;

/// One record of a vendor database: a MAC prefix and the vendor owning it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VendorMapping {
  pub mac_prefix: String,
  pub vendor_name: String,
}

impl VendorMapping {
  pub fn new<P: Into<String>, V: Into<String>>(mac_prefix: P, vendor_name: V) -> VendorMapping {
    VendorMapping { mac_prefix: mac_prefix.into(), vendor_name: vendor_name.into() }
  }
}

/// Orders mappings longest prefix first. Equal lengths keep their input order.
pub fn sort_by_specificity(mappings: &mut [VendorMapping]) -> () {
  mappings.sort_by(|a, b| b.mac_prefix.len().cmp(&a.mac_prefix.len()));
}

/// Outcome of building a trie from a vendor database.
#[derive(Debug)]
pub struct BuildReport {
  pub trie: PrefixTrie,
  /// Records that were skipped, in the order they were encountered.
  pub rejected: Vec<PrefixError>,
}

impl PrefixTrie {
  /// Builds a trie from a whole vendor database, most specific prefixes first.
  ///
  /// Malformed records are logged and reported instead of aborting the build.
  pub fn from_mappings<I>(mappings: I) -> BuildReport
  where
    I: IntoIterator<Item = VendorMapping>,
  {
    let mut mappings: Vec<VendorMapping> = mappings.into_iter().collect();
    sort_by_specificity(&mut mappings);

    let mut trie = PrefixTrie::new();
    let mut rejected = Vec::new();
    for VendorMapping { mac_prefix, vendor_name } in &mappings {
      if let Err(err) = trie.insert(mac_prefix, vendor_name) {
        warn!(vendor = %vendor_name, "skipping vendor mapping: {}", err);
        rejected.push(err);
      };
    };
    debug!(
      inserted = trie.insertions(),
      rejected = rejected.len(),
      nodes = trie.node_count(),
      "built MAC vendor trie"
    );

    BuildReport { trie, rejected }
  }
}
