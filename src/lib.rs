//! Longest-prefix resolution of MAC addresses to hardware vendors.
//!
//! Vendor ranges are given as `:`-separated hex prefixes such as `00:1B:63` or,
//! for ranges narrower than an octet, `70:B3:D5:2` where the last token is a
//! single hex digit. [`PrefixTrie`] answers a lookup in at most one step per
//! address octet, returning the same vendor a linear scan over the prefixes
//! (longest first) would return.

use std::collections::HashMap;

pub use crate::error::PrefixError;
pub use crate::linear::LinearMatcher;
pub use crate::mapping::{sort_by_specificity, BuildReport, VendorMapping};
pub use crate::prefix::{Prefix, MAX_TOKENS};

use crate::prefix::{leading_nibble, parse_octet};

mod error;
mod linear;
mod mapping;
mod prefix;

/// Matching state after consuming some number of full octets.
#[derive(Debug, Default)]
pub struct TrieNode {
  vendor_name: Option<String>,
  children: HashMap<u8, TrieNode>,
  // Keyed by nibble value. Half matches are always leaves.
  half_matches: HashMap<u8, String>,
}

impl TrieNode {
  pub fn new() -> TrieNode {
    TrieNode::default()
  }

  pub fn set_vendor_name(&mut self, name: String) -> () {
    self.vendor_name = Some(name);
  }

  pub fn add_child(&mut self, octet: u8, node: TrieNode) -> () {
    self.children.insert(octet, node);
  }

  // Replaces any earlier terminal for the same digit.
  pub fn add_half_match(&mut self, digit: u8, vendor_name: String) -> () {
    debug_assert!(digit <= 0xF);
    self.half_matches.insert(digit, vendor_name);
  }

  pub fn vendor_name(&self) -> Option<&str> {
    self.vendor_name.as_deref()
  }

  pub fn child(&self, octet: u8) -> Option<&TrieNode> {
    self.children.get(&octet)
  }

  pub fn half_match(&self, digit: u8) -> Option<&str> {
    self.half_matches.get(&digit).map(String::as_str)
  }

  pub fn node_count(&self) -> usize {
    1 + self.children.values().map(TrieNode::node_count).sum::<usize>()
  }
}

/// MAC vendor prefixes keyed first by the address's leading octet.
///
/// Built by repeated [`insert`](PrefixTrie::insert) calls, then queried with
/// [`search`](PrefixTrie::search). Searching only borrows the trie, so a built
/// trie can be shared between threads.
#[derive(Debug, Default)]
pub struct PrefixTrie {
  roots: HashMap<u8, TrieNode>,
  insertions: usize,
}

impl PrefixTrie {
  pub fn new() -> PrefixTrie {
    PrefixTrie::default()
  }

  /// Parses `prefix` and records it as owned by `vendor_name`.
  ///
  /// A malformed prefix is rejected as a whole and leaves the trie untouched.
  pub fn insert(&mut self, prefix: &str, vendor_name: &str) -> Result<(), PrefixError> {
    let prefix = Prefix::parse(prefix)?;
    self.insert_prefix(&prefix, vendor_name);
    Ok(())
  }

  /// Records an already parsed prefix.
  ///
  /// A terminal that already names a vendor keeps it; a node that so far was
  /// only an intermediate step of longer prefixes takes `vendor_name`.
  pub fn insert_prefix(&mut self, prefix: &Prefix, vendor_name: &str) -> () {
    let (first, rest) = match prefix.octets().split_first() {
      Some(split) => split,
      None => return,
    };
    let mut current: &mut TrieNode = self.roots.entry(*first).or_insert_with(TrieNode::new);
    for octet in rest {
      current = current.children.entry(*octet).or_insert_with(TrieNode::new);
    };
    match prefix.half_octet() {
      Some(digit) => {
        if current.half_match(digit).is_none() {
          current.add_half_match(digit, vendor_name.to_string());
        };
      }
      None => {
        if current.vendor_name.is_none() {
          current.set_vendor_name(vendor_name.to_string());
        };
      }
    };
    self.insertions += 1;
  }

  /// Finds the vendor owning the longest inserted prefix of `address`.
  ///
  /// `address` is `:`-separated two-digit hex octets. Returns `None` when no
  /// inserted prefix matches; malformed tokens simply fail to match.
  pub fn search(&self, address: &str) -> Option<&str> {
    let mut tokens = address.split(':');
    let mut node = tokens.next().and_then(parse_octet).and_then(|octet| self.roots.get(&octet))?;
    // Deepest terminal passed so far, used if descent runs into a dead end.
    let mut passed: Option<&str> = None;
    for token in tokens {
      let half = token.bytes().next().and_then(leading_nibble).and_then(|digit| node.half_match(digit));
      // A half match at this depth is more specific than this node's own name.
      let here = half.or_else(|| node.vendor_name());
      match parse_octet(token).and_then(|octet| node.child(octet)) {
        Some(child) => {
          if here.is_some() {
            passed = here;
          };
          node = child;
        }
        None => return here.or(passed),
      };
    };
    node.vendor_name().or(passed)
  }

  // Misses stay as `None` in their position.
  pub fn search_many<I>(&self, addresses: I) -> Vec<Option<&str>>
  where
    I: IntoIterator,
    I::Item: AsRef<str>,
  {
    addresses.into_iter().map(|address| self.search(address.as_ref())).collect()
  }

  /// Number of prefixes accepted so far, repeats included.
  pub fn insertions(&self) -> usize {
    self.insertions
  }

  pub fn is_empty(&self) -> bool {
    self.roots.is_empty()
  }

  pub fn node_count(&self) -> usize {
    self.roots.values().map(TrieNode::node_count).sum()
  }

  pub fn root(&self, octet: u8) -> Option<&TrieNode> {
    self.roots.get(&octet)
  }
}
