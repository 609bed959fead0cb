//! Rule index: selectors bucketed by the most selective key of their subject.
//!
//! Every selector lands in exactly one bucket, chosen from its rightmost
//! compound in the order id, class, tag. Selectors with none of those go to
//! the residual bucket, which every lookup returns. Keys are interned and
//! ASCII-lowercased, so a lookup may over-return in standards mode but never
//! misses a selector that could match.

use crate::stylesheet::{DocumentMode, MediaEvaluator, Origin, StylesheetSet};
use css_properties::DeclarationBlock;
use css_selectors::{
    ComplexSelector, CompoundSelector, ElementAdapter, SelectorId, SelectorList, Specificity,
    specificity_of_complex,
};
use lasso::{Rodeo, Spur};
use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::Arc;

/// A rule as stored in the index.
#[derive(Debug)]
pub struct IndexedRule {
    pub origin: Origin,
    pub selectors: SelectorList,
    /// Specificity of each selector, in list order.
    pub specificities: Vec<Specificity>,
    pub declarations: Arc<DeclarationBlock>,
    /// Position across all active stylesheets, in document order.
    pub source_order: u32,
}

type Bucket = Vec<SelectorId>;

#[derive(Debug)]
pub struct RuleIndex {
    mode: DocumentMode,
    rules: Vec<IndexedRule>,
    interner: Rodeo,
    by_id: HashMap<Spur, Bucket>,
    by_class: HashMap<Spur, Bucket>,
    by_tag: HashMap<Spur, Bucket>,
    residual: Bucket,
}

#[inline]
fn fold(text: &str) -> Cow<'_, str> {
    if text.bytes().any(|byte| byte.is_ascii_uppercase()) {
        Cow::Owned(text.to_ascii_lowercase())
    } else {
        Cow::Borrowed(text)
    }
}

enum BucketKey<'sel> {
    Id(&'sel str),
    Class(&'sel str),
    Tag(&'sel str),
    Residual,
}

fn bucket_key(subject: &CompoundSelector) -> BucketKey<'_> {
    if let Some(id) = subject.id_value() {
        return BucketKey::Id(id);
    }
    if let Some(class) = subject.class_names().next() {
        return BucketKey::Class(class);
    }
    subject.tag_name().map_or(BucketKey::Residual, BucketKey::Tag)
}

impl Default for RuleIndex {
    fn default() -> Self {
        Self {
            mode: DocumentMode::Standards,
            rules: Vec::new(),
            interner: Rodeo::default(),
            by_id: HashMap::new(),
            by_class: HashMap::new(),
            by_tag: HashMap::new(),
            residual: Vec::new(),
        }
    }
}

impl RuleIndex {
    /// Index the rules of every sheet in `set` that applies to the medium
    /// accepted by `evaluator`.
    pub fn build<M: MediaEvaluator + ?Sized>(set: &StylesheetSet, evaluator: &M) -> Self {
        let mut index = Self {
            mode: set.mode,
            ..Self::default()
        };
        for sheet in set.active_sheets(evaluator) {
            for rule in &sheet.rules {
                index.insert(sheet.origin, &rule.selectors, &rule.declarations);
            }
        }
        log::debug!(
            target: "css_cascade",
            "rule index built: rules={} ids={} classes={} tags={} residual={}",
            index.rules.len(),
            index.by_id.len(),
            index.by_class.len(),
            index.by_tag.len(),
            index.residual.len()
        );
        index
    }

    fn insert(
        &mut self,
        origin: Origin,
        selectors: &SelectorList,
        declarations: &Arc<DeclarationBlock>,
    ) {
        let rule_index = self.rules.len() as u32;
        for (position, selector) in selectors.selectors.iter().enumerate() {
            let id = SelectorId::new(rule_index, position as u16);
            let bucket = match bucket_key(selector.subject()) {
                BucketKey::Id(key) => {
                    let spur = self.interner.get_or_intern(fold(key));
                    self.by_id.entry(spur).or_default()
                }
                BucketKey::Class(key) => {
                    let spur = self.interner.get_or_intern(fold(key));
                    self.by_class.entry(spur).or_default()
                }
                BucketKey::Tag(key) => {
                    let spur = self.interner.get_or_intern(fold(key));
                    self.by_tag.entry(spur).or_default()
                }
                BucketKey::Residual => &mut self.residual,
            };
            bucket.push(id);
        }
        self.rules.push(IndexedRule {
            origin,
            selectors: selectors.clone(),
            specificities: selectors.selectors.iter().map(specificity_of_complex).collect(),
            declarations: Arc::clone(declarations),
            source_order: rule_index,
        });
    }

    fn bucket<'index>(
        &'index self,
        map: &'index HashMap<Spur, Bucket>,
        key: &str,
    ) -> &'index [SelectorId] {
        self.interner
            .get(fold(key))
            .and_then(|spur| map.get(&spur))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Candidate selectors for `element`, in document order. A superset of
    /// the selectors that match it.
    pub fn lookup<A: ElementAdapter>(&self, adapter: &A, element: A::Handle) -> Vec<SelectorId> {
        let mut found = Vec::with_capacity(self.residual.len());
        if let Some(id) = adapter.element_id(element) {
            found.extend_from_slice(self.bucket(&self.by_id, id));
        }
        adapter.for_each_class(element, |class| {
            found.extend_from_slice(self.bucket(&self.by_class, class));
        });
        found.extend_from_slice(self.bucket(&self.by_tag, adapter.tag_name(element)));
        found.extend_from_slice(&self.residual);
        found.sort_unstable();
        found.dedup();
        found
    }

    /// The rule, selector and specificity behind `id`.
    pub fn selector(
        &self,
        id: SelectorId,
    ) -> Option<(&IndexedRule, &ComplexSelector, Specificity)> {
        let rule = self.rules.get(id.rule as usize)?;
        let position = usize::from(id.selector);
        let selector = rule.selectors.selectors.get(position)?;
        let specificity = rule.specificities.get(position).copied().unwrap_or_default();
        Some((rule, selector, specificity))
    }

    #[inline]
    pub fn rule(&self, index: u32) -> Option<&IndexedRule> {
        self.rules.get(index as usize)
    }

    /// Every indexed selector, in document order.
    pub fn all_selectors(&self) -> impl Iterator<Item = SelectorId> + '_ {
        self.rules.iter().enumerate().flat_map(|(rule, indexed)| {
            (0..indexed.selectors.selectors.len())
                .map(move |position| SelectorId::new(rule as u32, position as u16))
        })
    }

    #[inline]
    pub const fn mode(&self) -> DocumentMode {
        self.mode
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    #[inline]
    pub fn residual_len(&self) -> usize {
        self.residual.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stylesheet::{MediumEvaluator, Rule, Stylesheet};
    use css_selectors::{AttributeSelector, Combinator, PseudoClass};

    fn index_of(rules: Vec<Rule>) -> RuleIndex {
        let mut sheet = Stylesheet::new(Origin::Author);
        sheet.rules = rules;
        let set = StylesheetSet::new(DocumentMode::Standards).with_sheet(sheet);
        RuleIndex::build(&set, &MediumEvaluator::screen())
    }

    #[test]
    fn subjects_pick_the_most_selective_bucket() {
        let index = index_of(vec![
            Rule::new(CompoundSelector::tag("p").with_id("Main"), DeclarationBlock::new()),
            Rule::new(CompoundSelector::tag("p").with_class("note"), DeclarationBlock::new()),
            Rule::new(CompoundSelector::tag("DIV"), DeclarationBlock::new()),
            Rule::new(
                ComplexSelector::compound(CompoundSelector::id("outer")).then(
                    Combinator::Descendant,
                    CompoundSelector::universal().with_attr(AttributeSelector::exists("href")),
                ),
                DeclarationBlock::new(),
            ),
            Rule::new(
                CompoundSelector::universal().with_pseudo_class(PseudoClass::Hover),
                DeclarationBlock::new(),
            ),
        ]);
        assert_eq!(index.len(), 5);
        assert_eq!(index.by_id.len(), 1);
        assert_eq!(index.by_class.len(), 1);
        assert_eq!(index.by_tag.len(), 1);
        assert_eq!(index.residual_len(), 2);
        assert!(index.interner.get("main").is_some());
        assert!(index.interner.get("div").is_some());
    }

    #[test]
    fn empty_index_has_nothing() {
        let index = index_of(Vec::new());
        assert!(index.is_empty());
        assert_eq!(index.all_selectors().count(), 0);
        assert!(index.selector(SelectorId::new(0, 0)).is_none());
    }
}
