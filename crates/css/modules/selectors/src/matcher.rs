//! Selector matching engine.
//! Reference: <https://www.w3.org/TR/selectors-3/>
//!
//! Complex selectors are evaluated right to left. Each step reports one of
//! three outcomes so that a failing ancestor walk can stop early: a
//! `FailsSubtree` result means no element further up can satisfy the rest
//! of the selector either.

use crate::{
    AncestorFilter, AttrOperator, AttributeSelector, Combinator, ComplexSelector,
    CompoundSelector, DependencyKinds, DependencyTable, ElementAdapter, ElementState, MatchCache,
    PseudoClass, PseudoElement, SelectorId, SimpleSelector,
};

/// Outcome of matching (part of) a selector at an element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SelectorMatch {
    Matches,
    /// Fails here; another candidate element may still match.
    FailsLocal,
    /// Fails here and for every ancestor of this element.
    FailsSubtree,
}

impl SelectorMatch {
    #[inline]
    pub const fn is_match(self) -> bool {
        matches!(self, Self::Matches)
    }
}

/// Document compatibility mode as far as matching is concerned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Hash)]
pub enum QuirksMode {
    #[default]
    NoQuirks,
    /// Ids and classes compare ASCII case-insensitively, and a bare
    /// `:hover`/`:active` only matches links and focusable elements.
    Quirks,
}

/// Mutable state threaded through one or more selector matches.
#[derive(Default)]
pub struct MatchingContext<'ctx> {
    pub quirks_mode: QuirksMode,
    dependencies: Option<&'ctx mut DependencyTable>,
    cache: Option<&'ctx mut MatchCache>,
    ancestor_filter: Option<&'ctx AncestorFilter>,
    dynamic_pseudo: Option<PseudoElement>,
}

impl<'ctx> MatchingContext<'ctx> {
    #[inline]
    pub fn new(quirks_mode: QuirksMode) -> Self {
        Self {
            quirks_mode,
            ..Self::default()
        }
    }

    /// Record volatile inputs of every match into `table`.
    #[must_use]
    pub fn with_dependencies(mut self, table: &'ctx mut DependencyTable) -> Self {
        self.dependencies = Some(table);
        self
    }

    /// Memoise non-subject results in `cache`. The cache must be on the
    /// current pass (see [`MatchCache::begin_pass`]).
    #[must_use]
    pub fn with_cache(mut self, cache: &'ctx mut MatchCache) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Reject early using `filter`, which must hold the ancestors of the
    /// element being matched.
    #[must_use]
    pub fn with_ancestor_filter(mut self, filter: &'ctx AncestorFilter) -> Self {
        self.ancestor_filter = Some(filter);
        self
    }

    /// Pseudo-element targeted by the last successful match, if any.
    #[inline]
    pub const fn dynamic_pseudo(&self) -> Option<PseudoElement> {
        self.dynamic_pseudo
    }

    #[inline]
    fn record<A: ElementAdapter>(&mut self, adapter: &A, element: A::Handle, kinds: DependencyKinds) {
        if let Some(table) = self.dependencies.as_deref_mut() {
            table.record(adapter.unique_key(element), kinds);
        }
    }

    #[inline]
    fn record_on_parent<A: ElementAdapter>(
        &mut self,
        adapter: &A,
        element: A::Handle,
        kinds: DependencyKinds,
    ) {
        if let Some(parent) = adapter.parent(element) {
            self.record(adapter, parent, kinds);
        }
    }
}

/// Match a complex selector against an element without caching or
/// dependency tracking. A selector ending in a pseudo-element matches its
/// originating element.
pub fn matches_complex<A: ElementAdapter>(
    adapter: &A,
    element: A::Handle,
    sel: &ComplexSelector,
) -> bool {
    let mut ctx = MatchingContext::new(QuirksMode::NoQuirks);
    match_selector(adapter, element, sel, None, &mut ctx).is_match()
}

/// Match a compound selector against a single element.
pub fn matches_compound<A: ElementAdapter>(
    adapter: &A,
    element: A::Handle,
    compound: &CompoundSelector,
) -> bool {
    let mut ctx = MatchingContext::new(QuirksMode::NoQuirks);
    compound_matches(adapter, element, compound, true, &mut ctx)
}

/// Match `selector` with `element` as its subject.
///
/// `id` enables the match cache for this selector; it must be unique among
/// the selectors matched during the current pass. On success the targeted
/// pseudo-element, if any, is available from [`MatchingContext::dynamic_pseudo`].
pub fn match_selector<A: ElementAdapter>(
    adapter: &A,
    element: A::Handle,
    selector: &ComplexSelector,
    id: Option<SelectorId>,
    ctx: &mut MatchingContext<'_>,
) -> SelectorMatch {
    ctx.dynamic_pseudo = None;
    if let Some(filter) = ctx.ancestor_filter
        && !filter.may_match(selector)
    {
        return SelectorMatch::FailsSubtree;
    }
    let result = match_from(adapter, element, selector, id, 0, ctx);
    if result.is_match() {
        ctx.dynamic_pseudo = selector.pseudo_element();
    }
    result
}

/// Match the compound at `index` (counted from the subject) and everything
/// left of it, consulting the cache for non-subject compounds.
fn match_cached<A: ElementAdapter>(
    adapter: &A,
    element: A::Handle,
    selector: &ComplexSelector,
    id: Option<SelectorId>,
    index: usize,
    ctx: &mut MatchingContext<'_>,
) -> SelectorMatch {
    let Some(selector_id) = id else {
        return match_from(adapter, element, selector, id, index, ctx);
    };
    let element_key = adapter.unique_key(element);
    if let Some(cache) = ctx.cache.as_deref_mut()
        && let Some(hit) = cache.get(element_key, selector_id, index)
    {
        return hit;
    }
    let result = match_from(adapter, element, selector, id, index, ctx);
    if let Some(cache) = ctx.cache.as_deref_mut() {
        cache.set(element_key, selector_id, index, result);
    }
    result
}

fn match_from<A: ElementAdapter>(
    adapter: &A,
    element: A::Handle,
    selector: &ComplexSelector,
    id: Option<SelectorId>,
    index: usize,
    ctx: &mut MatchingContext<'_>,
) -> SelectorMatch {
    let Some(compound) = selector.compound_from_right(index) else {
        return SelectorMatch::FailsLocal;
    };
    if !compound_matches(adapter, element, compound, index == 0, ctx) {
        return SelectorMatch::FailsLocal;
    }
    let Some(combinator) = selector.combinator_left_of(index) else {
        return SelectorMatch::Matches;
    };
    let next = index.saturating_add(1);
    match combinator {
        Combinator::Descendant => {
            let mut current = adapter.parent(element);
            while let Some(ancestor) = current {
                match match_cached(adapter, ancestor, selector, id, next, ctx) {
                    SelectorMatch::FailsLocal => current = adapter.parent(ancestor),
                    decided => return decided,
                }
            }
            SelectorMatch::FailsSubtree
        }
        Combinator::Child => adapter
            .parent(element)
            .map_or(SelectorMatch::FailsSubtree, |parent| {
                match_cached(adapter, parent, selector, id, next, ctx)
            }),
        Combinator::AdjacentSibling => {
            ctx.record_on_parent(adapter, element, DependencyKinds::STRUCTURAL);
            adapter
                .previous_sibling_element(element)
                .map_or(SelectorMatch::FailsLocal, |sibling| {
                    match_cached(adapter, sibling, selector, id, next, ctx)
                })
        }
        Combinator::GeneralSibling => {
            ctx.record_on_parent(adapter, element, DependencyKinds::STRUCTURAL);
            let mut current = adapter.previous_sibling_element(element);
            while let Some(sibling) = current {
                match match_cached(adapter, sibling, selector, id, next, ctx) {
                    SelectorMatch::FailsLocal => {
                        current = adapter.previous_sibling_element(sibling);
                    }
                    decided => return decided,
                }
            }
            SelectorMatch::FailsLocal
        }
    }
}

/// Match every simple selector of `compound` against `element`.
/// Pseudo-elements only match in the subject position.
fn compound_matches<A: ElementAdapter>(
    adapter: &A,
    element: A::Handle,
    compound: &CompoundSelector,
    is_subject: bool,
    ctx: &mut MatchingContext<'_>,
) -> bool {
    let quirks = ctx.quirks_mode == QuirksMode::Quirks;
    for simple in &compound.simples {
        let matched = match simple {
            SimpleSelector::Universal => true,
            SimpleSelector::Type(type_name) => {
                adapter.tag_name(element).eq_ignore_ascii_case(type_name)
            }
            SimpleSelector::Id(id_value) => adapter.element_id(element).is_some_and(|value| {
                if quirks {
                    value.eq_ignore_ascii_case(id_value)
                } else {
                    value == id_value
                }
            }),
            SimpleSelector::Class(class_name) => {
                if quirks {
                    let mut found = false;
                    adapter.for_each_class(element, |candidate| {
                        found |= candidate.eq_ignore_ascii_case(class_name);
                    });
                    found
                } else {
                    adapter.has_class(element, class_name)
                }
            }
            SimpleSelector::Attribute(attr) => attribute_matches(adapter, element, attr),
            SimpleSelector::PseudoClass(pseudo) => {
                pseudo_class_matches(adapter, element, pseudo, compound, ctx)
            }
            SimpleSelector::PseudoElement(_) => is_subject,
            SimpleSelector::Negation(inner) => {
                !compound_matches(adapter, element, inner, false, ctx)
            }
        };
        if !matched {
            return false;
        }
    }
    true
}

fn attribute_matches<A: ElementAdapter>(
    adapter: &A,
    element: A::Handle,
    attr: &AttributeSelector,
) -> bool {
    let Some(actual) = adapter.attr(element, &attr.name) else {
        return false;
    };
    if attr.operator == AttrOperator::Exists {
        return true;
    }
    let (actual, expected) = if attr.case_insensitive {
        (actual.to_ascii_lowercase(), attr.value.to_ascii_lowercase())
    } else {
        (actual.to_owned(), attr.value.clone())
    };
    match attr.operator {
        AttrOperator::Exists => true,
        AttrOperator::Equals => actual == expected,
        AttrOperator::Includes => {
            !expected.is_empty()
                && !expected.contains(|ch: char| ch.is_ascii_whitespace())
                && actual.split_ascii_whitespace().any(|token| token == expected)
        }
        AttrOperator::DashMatch => {
            actual == expected
                || actual
                    .strip_prefix(expected.as_str())
                    .is_some_and(|rest| rest.starts_with('-'))
        }
        AttrOperator::Prefix => !expected.is_empty() && actual.starts_with(expected.as_str()),
        AttrOperator::Suffix => !expected.is_empty() && actual.ends_with(expected.as_str()),
        AttrOperator::Substring => !expected.is_empty() && actual.contains(expected.as_str()),
    }
}

/// True when a quirks-mode `:hover`/`:active` has nothing else to narrow it.
fn is_bare_user_action(compound: &CompoundSelector) -> bool {
    compound.simples.iter().all(|simple| {
        matches!(
            simple,
            SimpleSelector::Universal
                | SimpleSelector::PseudoClass(PseudoClass::Hover | PseudoClass::Active)
                | SimpleSelector::PseudoElement(_)
        )
    })
}

fn user_action_matches<A: ElementAdapter>(
    adapter: &A,
    element: A::Handle,
    flag: ElementState,
    dependency: DependencyKinds,
    compound: &CompoundSelector,
    ctx: &mut MatchingContext<'_>,
) -> bool {
    ctx.record(adapter, element, dependency);
    let state = adapter.state(element);
    if !state.contains(flag) {
        return false;
    }
    ctx.quirks_mode == QuirksMode::NoQuirks
        || !is_bare_user_action(compound)
        || state.intersects(ElementState::LINK | ElementState::FOCUSABLE)
}

fn state_matches<A: ElementAdapter>(
    adapter: &A,
    element: A::Handle,
    ctx: &mut MatchingContext<'_>,
    test: impl FnOnce(ElementState) -> bool,
) -> bool {
    ctx.record(adapter, element, DependencyKinds::OTHER_STATE);
    test(adapter.state(element))
}

fn count_siblings<A: ElementAdapter>(
    adapter: &A,
    element: A::Handle,
    forward: bool,
    same_type: bool,
) -> usize {
    let step = |candidate: A::Handle| {
        if forward {
            adapter.next_sibling_element(candidate)
        } else {
            adapter.previous_sibling_element(candidate)
        }
    };
    let tag = adapter.tag_name(element);
    let mut count = 0usize;
    let mut current = step(element);
    while let Some(sibling) = current {
        if !same_type || adapter.tag_name(sibling) == tag {
            count = count.saturating_add(1);
        }
        current = step(sibling);
    }
    count
}

fn pseudo_class_matches<A: ElementAdapter>(
    adapter: &A,
    element: A::Handle,
    pseudo: &PseudoClass,
    compound: &CompoundSelector,
    ctx: &mut MatchingContext<'_>,
) -> bool {
    let forward = DependencyKinds::STRUCTURAL;
    let backward = DependencyKinds::BACKWARDS_STRUCTURAL;
    match pseudo {
        PseudoClass::FirstChild => {
            ctx.record_on_parent(adapter, element, forward);
            adapter.previous_sibling_element(element).is_none()
        }
        PseudoClass::LastChild => {
            ctx.record_on_parent(adapter, element, backward);
            adapter.next_sibling_element(element).is_none()
        }
        PseudoClass::OnlyChild => {
            ctx.record_on_parent(adapter, element, forward | backward);
            adapter.previous_sibling_element(element).is_none()
                && adapter.next_sibling_element(element).is_none()
        }
        PseudoClass::NthChild(nth) => {
            ctx.record_on_parent(adapter, element, forward);
            nth.matches(count_siblings(adapter, element, false, false).saturating_add(1))
        }
        PseudoClass::NthLastChild(nth) => {
            ctx.record_on_parent(adapter, element, backward);
            nth.matches(count_siblings(adapter, element, true, false).saturating_add(1))
        }
        PseudoClass::FirstOfType => {
            ctx.record_on_parent(adapter, element, forward);
            count_siblings(adapter, element, false, true) == 0
        }
        PseudoClass::LastOfType => {
            ctx.record_on_parent(adapter, element, backward);
            count_siblings(adapter, element, true, true) == 0
        }
        PseudoClass::OnlyOfType => {
            ctx.record_on_parent(adapter, element, forward | backward);
            count_siblings(adapter, element, false, true) == 0
                && count_siblings(adapter, element, true, true) == 0
        }
        PseudoClass::NthOfType(nth) => {
            ctx.record_on_parent(adapter, element, forward);
            nth.matches(count_siblings(adapter, element, false, true).saturating_add(1))
        }
        PseudoClass::NthLastOfType(nth) => {
            ctx.record_on_parent(adapter, element, backward);
            nth.matches(count_siblings(adapter, element, true, true).saturating_add(1))
        }
        PseudoClass::Empty => {
            ctx.record(adapter, element, backward);
            adapter.is_empty(element)
        }
        PseudoClass::Root => adapter.is_root(element),
        PseudoClass::Hover => user_action_matches(
            adapter,
            element,
            ElementState::HOVER,
            DependencyKinds::HOVER,
            compound,
            ctx,
        ),
        PseudoClass::Active => user_action_matches(
            adapter,
            element,
            ElementState::ACTIVE,
            DependencyKinds::ACTIVE,
            compound,
            ctx,
        ),
        PseudoClass::Focus => {
            ctx.record(adapter, element, DependencyKinds::FOCUS);
            adapter.state(element).contains(ElementState::FOCUS)
        }
        PseudoClass::Link => state_matches(adapter, element, ctx, |state| {
            state.contains(ElementState::LINK) && !state.contains(ElementState::VISITED)
        }),
        PseudoClass::Visited => state_matches(adapter, element, ctx, |state| {
            state.contains(ElementState::VISITED)
        }),
        PseudoClass::Enabled => state_matches(adapter, element, ctx, |state| {
            state.contains(ElementState::ENABLED)
        }),
        PseudoClass::Disabled => state_matches(adapter, element, ctx, |state| {
            state.contains(ElementState::DISABLED)
        }),
        PseudoClass::Checked => state_matches(adapter, element, ctx, |state| {
            state.contains(ElementState::CHECKED)
        }),
        PseudoClass::Target => state_matches(adapter, element, ctx, |state| {
            state.contains(ElementState::TARGET)
        }),
        PseudoClass::Lang(range) => lang_matches(adapter, element, range),
    }
}

/// `:lang()` uses the nearest `lang` attribute on the element or its ancestors.
fn lang_matches<A: ElementAdapter>(adapter: &A, element: A::Handle, range: &str) -> bool {
    let mut current = Some(element);
    while let Some(candidate) = current {
        if let Some(lang) = adapter.attr(candidate, "lang") {
            let prefixed = lang
                .get(..range.len())
                .is_some_and(|head| head.eq_ignore_ascii_case(range))
                && lang.as_bytes().get(range.len()) == Some(&b'-');
            return prefixed || lang.eq_ignore_ascii_case(range);
        }
        current = adapter.parent(candidate);
    }
    false
}
