//! Cascade builder: matched declarations for one element, in cascade order.

use crate::priority::{CascadeLevel, CascadePriority};
use crate::rule_index::RuleIndex;
use crate::stylesheet::Origin;
use css_properties::{Declaration, DeclarationBlock};
use css_selectors::{
    ElementAdapter, MatchingContext, PseudoElement, SelectorId, Specificity, match_selector,
};
use smallvec::SmallVec;

/// Element access needed by the cascade on top of selector matching.
pub trait CascadeAdapter: ElementAdapter {
    /// Declarations of the element's `style` attribute.
    fn inline_style(&self, element: Self::Handle) -> Option<&DeclarationBlock>;

    /// Declarations mapped from presentational attributes.
    fn presentational_hints(&self, _element: Self::Handle) -> Option<&DeclarationBlock> {
        None
    }
}

/// One declaration taking part in the cascade for an element.
#[derive(Clone, Copy, Debug)]
pub struct CascadeEntry<'data> {
    pub declaration: &'data Declaration,
    /// The selector that matched; `None` for inline styles and hints.
    pub selector: Option<SelectorId>,
    /// True for the first declaration of its block.
    pub first_in_rule: bool,
    pub origin: Origin,
    pub priority: CascadePriority,
}

impl CascadeEntry<'_> {
    #[inline]
    pub const fn level(&self) -> CascadeLevel {
        self.priority.level
    }

    #[inline]
    pub const fn specificity(&self) -> Specificity {
        self.priority.specificity
    }

    /// Font properties are applied before everything else.
    #[inline]
    pub const fn is_early(&self) -> bool {
        self.declaration.property.is_early()
    }
}

type Entries<'data> = Vec<CascadeEntry<'data>>;

/// Declarations that apply to an element and its pseudo-elements, each list
/// sorted so that later entries win.
#[derive(Debug, Default)]
pub struct MatchedDeclarations<'data> {
    pub entries: Entries<'data>,
    pseudo: SmallVec<(PseudoElement, Entries<'data>), 2>,
    /// Selectors that matched, in document order.
    pub matched_selectors: Vec<SelectorId>,
}

impl<'data> MatchedDeclarations<'data> {
    /// Declarations for `pseudo`; empty when no selector targets it.
    pub fn for_pseudo(&self, pseudo: PseudoElement) -> &[CascadeEntry<'data>] {
        self.pseudo
            .iter()
            .find(|(target, _)| *target == pseudo)
            .map(|(_, entries)| entries.as_slice())
            .unwrap_or_default()
    }

    /// Pseudo-elements with at least one declaration, in a fixed order.
    pub fn pseudo_elements(&self) -> impl Iterator<Item = PseudoElement> + '_ {
        PseudoElement::ALL
            .into_iter()
            .filter(|pseudo| !self.for_pseudo(*pseudo).is_empty())
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty() && self.pseudo.is_empty()
    }

    /// The list a matched selector targeting `pseudo` feeds.
    fn target_mut(&mut self, pseudo: Option<PseudoElement>) -> &mut Entries<'data> {
        let Some(pseudo) = pseudo else {
            return &mut self.entries;
        };
        if let Some(found) = self.pseudo.iter().position(|(target, _)| *target == pseudo) {
            return &mut self.pseudo[found].1;
        }
        self.pseudo.push((pseudo, Vec::new()));
        let last = self.pseudo.len() - 1;
        &mut self.pseudo[last].1
    }

    fn sort(&mut self) {
        self.entries.sort_by_key(|entry| entry.priority);
        for (_, entries) in self.pseudo.iter_mut() {
            entries.sort_by_key(|entry| entry.priority);
        }
    }
}

fn push_block<'data>(
    target: &mut Entries<'data>,
    block: &'data DeclarationBlock,
    origin: Origin,
    selector: Option<SelectorId>,
    specificity: Specificity,
    source_order: u32,
) {
    target.extend(block.iter().enumerate().map(|(position, declaration)| CascadeEntry {
        declaration,
        selector,
        first_in_rule: position == 0,
        origin,
        priority: CascadePriority::new(
            CascadeLevel::new(origin, declaration.important),
            specificity,
            source_order,
        ),
    }));
}

/// Collect every declaration that applies to `element`, sorted into cascade
/// order: applying the list front to back leaves the winner of every
/// property in place. Declarations of selectors ending in a pseudo-element
/// go to that pseudo-element's list.
///
/// `ctx` carries the quirks mode, cache, ancestor filter and dependency
/// table used for matching.
pub fn collect<'data, A: CascadeAdapter>(
    index: &'data RuleIndex,
    adapter: &'data A,
    element: A::Handle,
    ctx: &mut MatchingContext<'_>,
) -> MatchedDeclarations<'data> {
    let mut matched = MatchedDeclarations::default();
    if let Some(hints) = adapter.presentational_hints(element) {
        push_block(
            &mut matched.entries,
            hints,
            Origin::PresentationalHint,
            None,
            Specificity::default(),
            0,
        );
    }

    let candidates = index.lookup(adapter, element);
    for id in &candidates {
        let Some((rule, selector, specificity)) = index.selector(*id) else {
            continue;
        };
        if !match_selector(adapter, element, selector, Some(*id), ctx).is_match() {
            continue;
        }
        matched.matched_selectors.push(*id);
        push_block(
            matched.target_mut(ctx.dynamic_pseudo()),
            &rule.declarations,
            rule.origin,
            Some(*id),
            specificity,
            rule.source_order,
        );
    }

    if let Some(inline) = adapter.inline_style(element) {
        push_block(
            &mut matched.entries,
            inline,
            Origin::Inline,
            None,
            Specificity::default(),
            u32::MAX,
        );
    }

    matched.sort();
    log::trace!(
        target: "css_cascade",
        "collected element={} candidates={} matched={} declarations={}",
        adapter.unique_key(element),
        candidates.len(),
        matched.matched_selectors.len(),
        matched.entries.len()
    );
    matched
}
