//! Style sharing between siblings.
//!
//! Two siblings whose selector matching inputs agree get identical computed
//! styles. After the second one is computed its groups are swapped for the
//! first one's allocations, so the pair costs one set of groups.

use css_cascade::CascadeAdapter;
use css_properties::DeclarationBlock;
use css_selectors::{ElementState, SelectorId};
use std::collections::VecDeque;

/// Everything about an element that selector matching and the cascade read,
/// apart from its position among its siblings.
#[derive(Clone, Debug, PartialEq)]
pub struct SharingSignature {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    state: ElementState,
    inline: Option<DeclarationBlock>,
    hints: Option<DeclarationBlock>,
    matched: Vec<SelectorId>,
}

impl SharingSignature {
    /// Signature of `element`, whose matched selectors are `matched`.
    pub fn of<A: CascadeAdapter>(adapter: &A, element: A::Handle, matched: &[SelectorId]) -> Self {
        let mut classes = Vec::new();
        adapter.for_each_class(element, |class| classes.push(class.to_owned()));
        classes.sort_unstable();
        Self {
            tag: adapter.tag_name(element).to_ascii_lowercase(),
            id: adapter.element_id(element).map(str::to_owned),
            classes,
            state: adapter.state(element),
            inline: adapter.inline_style(element).cloned(),
            hints: adapter.presentational_hints(element).cloned(),
            matched: matched.to_vec(),
        }
    }
}

/// Recently styled siblings under the parent currently being walked.
#[derive(Debug)]
pub struct SiblingHistory {
    limit: usize,
    /// Most recent last.
    entries: VecDeque<(u64, SharingSignature)>,
}

impl SiblingHistory {
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            entries: VecDeque::with_capacity(limit),
        }
    }

    /// The most recent sibling with the same signature.
    pub fn find(&self, signature: &SharingSignature) -> Option<u64> {
        self.entries
            .iter()
            .rev()
            .find(|(_, candidate)| candidate == signature)
            .map(|(key, _)| *key)
    }

    /// Remember a styled sibling, forgetting the oldest past the limit.
    pub fn remember(&mut self, key: u64, signature: SharingSignature) {
        if self.limit == 0 {
            return;
        }
        if self.entries.len() == self.limit {
            self.entries.pop_front();
        }
        self.entries.push_back((key, signature));
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

#[cfg(test)]
mod tests {
    use super::*;

    fn signature(tag: &str, matched: &[SelectorId]) -> SharingSignature {
        SharingSignature {
            tag: tag.to_owned(),
            id: None,
            classes: Vec::new(),
            state: ElementState::empty(),
            inline: None,
            hints: None,
            matched: matched.to_vec(),
        }
    }

    #[test]
    fn finds_latest_equal_signature_within_limit() {
        let rule = SelectorId::new(0, 0);
        let mut history = SiblingHistory::new(2);
        history.remember(1, signature("p", &[rule]));
        history.remember(2, signature("p", &[rule]));
        assert_eq!(history.find(&signature("p", &[rule])), Some(2));
        assert_eq!(history.find(&signature("p", &[])), None);

        history.remember(3, signature("div", &[]));
        history.remember(4, signature("div", &[]));
        assert_eq!(history.len(), 2);
        assert_eq!(history.find(&signature("p", &[rule])), None);
    }

    #[test]
    fn zero_limit_disables_history() {
        let mut history = SiblingHistory::new(0);
        history.remember(1, signature("p", &[]));
        assert!(history.is_empty());
    }
}
