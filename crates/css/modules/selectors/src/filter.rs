//! Ancestor filter: a counted set of the tags, ids and classes on the
//! current element's ancestor chain.
//!
//! It answers "might an ancestor carry these?" and can only reject. Keys are
//! ASCII-lowercased hashes, so collisions and quirks-mode case folding both
//! err on the side of "might".

use crate::{Combinator, ComplexSelector, CompoundSelector, ElementAdapter};
use core::hash::{Hash as _, Hasher as _};
use std::collections::HashMap;
use std::collections::hash_map::DefaultHasher;

const TAG_SALT: u8 = b't';
const ID_SALT: u8 = b'i';
const CLASS_SALT: u8 = b'c';

fn filter_key(salt: u8, text: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    salt.hash(&mut hasher);
    for byte in text.bytes() {
        byte.to_ascii_lowercase().hash(&mut hasher);
    }
    hasher.finish()
}

#[derive(Default, Debug)]
pub struct AncestorFilter {
    counts: HashMap<u64, u32>,
}

impl AncestorFilter {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    fn each_key<A: ElementAdapter, F: FnMut(u64)>(adapter: &A, element: A::Handle, mut visit: F) {
        visit(filter_key(TAG_SALT, adapter.tag_name(element)));
        if let Some(id) = adapter.element_id(element) {
            visit(filter_key(ID_SALT, id));
        }
        adapter.for_each_class(element, |class| visit(filter_key(CLASS_SALT, class)));
    }

    /// Enter `element`: it becomes an ancestor of everything matched until `pop`.
    pub fn push<A: ElementAdapter>(&mut self, adapter: &A, element: A::Handle) {
        Self::each_key(adapter, element, |key| {
            let count = self.counts.entry(key).or_insert(0);
            *count = count.saturating_add(1);
        });
    }

    /// Leave `element`; must mirror the matching `push`.
    pub fn pop<A: ElementAdapter>(&mut self, adapter: &A, element: A::Handle) {
        Self::each_key(adapter, element, |key| {
            if let Some(count) = self.counts.get_mut(&key) {
                *count = count.saturating_sub(1);
                if *count == 0 {
                    self.counts.remove(&key);
                }
            }
        });
    }

    /// Reset to hold exactly the ancestors of `element`.
    pub fn rebuild_for<A: ElementAdapter>(&mut self, adapter: &A, element: A::Handle) {
        self.clear();
        let mut chain = Vec::new();
        let mut current = adapter.parent(element);
        while let Some(ancestor) = current {
            chain.push(ancestor);
            current = adapter.parent(ancestor);
        }
        for ancestor in chain.into_iter().rev() {
            self.push(adapter, ancestor);
        }
    }

    #[inline]
    pub fn clear(&mut self) {
        self.counts.clear();
    }

    #[inline]
    fn contains(&self, salt: u8, text: &str) -> bool {
        self.counts.contains_key(&filter_key(salt, text))
    }

    /// False only if no ancestor can satisfy the tag, id and class parts of `compound`.
    pub fn might_have_ancestor(&self, compound: &CompoundSelector) -> bool {
        compound
            .tag_name()
            .is_none_or(|tag| self.contains(TAG_SALT, tag))
            && compound
                .id_value()
                .is_none_or(|id| self.contains(ID_SALT, id))
            && compound
                .class_names()
                .all(|class| self.contains(CLASS_SALT, class))
    }

    /// False only if some compound that must match an ancestor cannot.
    pub fn may_match(&self, selector: &ComplexSelector) -> bool {
        (1..selector.compound_count()).all(|index| {
            let is_ancestor = matches!(
                selector.combinator_left_of(index - 1),
                Some(Combinator::Descendant | Combinator::Child)
            );
            !is_ancestor
                || selector
                    .compound_from_right(index)
                    .is_none_or(|compound| self.might_have_ancestor(compound))
        })
    }
}
