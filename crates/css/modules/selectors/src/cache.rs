//! Per-pass selector match cache.
//!
//! Results for non-subject compounds are memoised by element, selector and
//! compound position. A result covers the compound and everything left of
//! it. Entries live for one style pass: `begin_pass` moves to a new epoch
//! and anything stamped with an older epoch reads as a miss.

use crate::SelectorMatch;
use std::collections::HashMap;

/// Stable identity of a selector inside a rule index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SelectorId {
    pub rule: u32,
    pub selector: u16,
}

impl SelectorId {
    #[inline]
    pub const fn new(rule: u32, selector: u16) -> Self {
        Self { rule, selector }
    }
}

/// Entries beyond this are dropped at the start of the next pass.
const MAX_RETAINED_ENTRIES: usize = 1 << 16;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct CacheKey {
    element: u64,
    selector: SelectorId,
    compound: u16,
}

/// Memoised compound match results, valid for one style pass.
#[derive(Default, Debug)]
pub struct MatchCache {
    store: HashMap<CacheKey, (u32, SelectorMatch)>,
    epoch: u32,
    hits: u64,
    misses: u64,
}

impl MatchCache {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new pass. Results from earlier passes stop being visible.
    pub fn begin_pass(&mut self) {
        self.epoch = self.epoch.wrapping_add(1);
        if self.epoch == 0 || self.store.len() > MAX_RETAINED_ENTRIES {
            self.store.clear();
        }
        log::trace!(target: "css_selectors", "begin pass epoch={}", self.epoch);
    }

    /// Cache a result for the current pass.
    #[inline]
    pub fn set(
        &mut self,
        element_key: u64,
        selector: SelectorId,
        compound: usize,
        result: SelectorMatch,
    ) {
        let Ok(compound) = u16::try_from(compound) else {
            return;
        };
        self.store.insert(
            CacheKey {
                element: element_key,
                selector,
                compound,
            },
            (self.epoch, result),
        );
    }

    /// Cached result of the current pass, if any.
    #[inline]
    pub fn get(
        &mut self,
        element_key: u64,
        selector: SelectorId,
        compound: usize,
    ) -> Option<SelectorMatch> {
        let compound = u16::try_from(compound).ok()?;
        let key = CacheKey {
            element: element_key,
            selector,
            compound,
        };
        match self.store.get(&key) {
            Some(&(epoch, result)) if epoch == self.epoch => {
                self.hits = self.hits.saturating_add(1);
                Some(result)
            }
            _ => {
                self.misses = self.misses.saturating_add(1);
                None
            }
        }
    }

    #[inline]
    pub fn clear(&mut self) {
        self.store.clear();
    }

    /// (hits, misses) since creation.
    #[inline]
    pub const fn stats(&self) -> (u64, u64) {
        (self.hits, self.misses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn results_expire_with_the_pass() {
        let mut cache = MatchCache::new();
        let selector = SelectorId::new(3, 0);
        cache.begin_pass();
        cache.set(1, selector, 1, SelectorMatch::Matches);
        assert_eq!(cache.get(1, selector, 1), Some(SelectorMatch::Matches));
        assert_eq!(cache.get(1, selector, 2), None);
        cache.begin_pass();
        assert_eq!(cache.get(1, selector, 1), None);
        assert_eq!(cache.stats(), (1, 2));
    }
}
