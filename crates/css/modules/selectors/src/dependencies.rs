//! Dependency table recorded while matching.
//!
//! Matching notes, per element, which volatile inputs a result depended on.
//! After a hover, focus or sibling change the caller consults the table to
//! decide how much of the tree needs rematching.

use bitflags::bitflags;
use std::collections::HashMap;

bitflags! {
    /// Kinds of volatile input a match result depended on.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct DependencyKinds: u8 {
        /// Forward sibling structure of the element's children
        /// (`+`, `~`, `:first-child`, `:nth-child`, …).
        const STRUCTURAL = 1 << 0;
        /// Structure after a child (`:last-child`, `:only-child`, `:nth-last-*`, `:empty`).
        const BACKWARDS_STRUCTURAL = 1 << 1;
        const HOVER = 1 << 2;
        const ACTIVE = 1 << 3;
        const FOCUS = 1 << 4;
        /// Any other state bit (checked, disabled, link, …).
        const OTHER_STATE = 1 << 5;
    }
}

/// Element key to the union of dependency kinds recorded against it.
#[derive(Default, Debug)]
pub struct DependencyTable {
    entries: HashMap<u64, DependencyKinds>,
}

impl DependencyTable {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that a match result depended on `kinds` of the element `element_key`.
    #[inline]
    pub fn record(&mut self, element_key: u64, kinds: DependencyKinds) {
        if kinds.is_empty() {
            return;
        }
        *self.entries.entry(element_key).or_default() |= kinds;
    }

    /// Everything recorded for an element.
    #[inline]
    pub fn kinds(&self, element_key: u64) -> DependencyKinds {
        self.entries
            .get(&element_key)
            .copied()
            .unwrap_or_default()
    }

    /// True if any of `kinds` was recorded for the element.
    #[inline]
    pub fn depends_on(&self, element_key: u64, kinds: DependencyKinds) -> bool {
        self.kinds(element_key).intersects(kinds)
    }

    /// Drop the entries of an element about to be rematched or removed.
    #[inline]
    pub fn forget(&mut self, element_key: u64) {
        self.entries.remove(&element_key);
    }

    #[inline]
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
