//! Selectors Level 3: selector model, specificity and element matching.
//! Reference: <https://www.w3.org/TR/selectors-3/>
//!
//! Selectors arrive pre-parsed; this crate only models and evaluates them:
//! - Type, universal, id, class and attribute selectors (all seven operators)
//! - Structural, user-action and form-state pseudo-classes, `:lang()` and `:not()`
//! - Pseudo-elements on the subject compound
//! - Combinators: descendant, child, adjacent sibling, general sibling
//! - Specificity calculation
//! - A per-pass match cache, an ancestor filter and a dependency table for
//!   scoped rematching after volatile state changes

#![forbid(unsafe_code)]

mod cache;
mod dependencies;
mod filter;
mod matcher;
mod nth;
mod specificity;
mod state;

pub use cache::{MatchCache, SelectorId};
pub use dependencies::{DependencyKinds, DependencyTable};
pub use filter::AncestorFilter;
pub use matcher::{
    MatchingContext, QuirksMode, SelectorMatch, match_selector, matches_complex,
    matches_compound,
};
pub use nth::Nth;
pub use specificity::{Specificity, specificity_of_complex, specificity_of_compound};
pub use state::ElementState;

/// An adapter that abstracts DOM access for selector matching.
/// Implement this for your DOM layer.
pub trait ElementAdapter {
    type Handle: Copy + Eq;

    /// Unique, stable key for caching and dependency tracking per element.
    fn unique_key(&self, element: Self::Handle) -> u64;

    /// Parent element if any. Document and fragment nodes are not elements.
    fn parent(&self, element: Self::Handle) -> Option<Self::Handle>;

    /// Previous sibling element (skip non-elements if your DOM has mixed nodes).
    fn previous_sibling_element(&self, element: Self::Handle) -> Option<Self::Handle>;

    /// Next sibling element (skip non-elements if your DOM has mixed nodes).
    fn next_sibling_element(&self, element: Self::Handle) -> Option<Self::Handle>;

    /// Tag name in ASCII lowercase (per HTML parsing conventions).
    fn tag_name(&self, element: Self::Handle) -> &str;

    /// Returns Some(id) if the element has a non-empty id attribute, else None.
    fn element_id(&self, element: Self::Handle) -> Option<&str>;

    /// Visit every class token of the element, in attribute order.
    fn for_each_class<F: FnMut(&str)>(&self, element: Self::Handle, callback: F);

    /// True if the element has the given class token (exact comparison).
    #[inline]
    fn has_class(&self, element: Self::Handle, class: &str) -> bool {
        let mut found = false;
        self.for_each_class(element, |candidate| found |= candidate == class);
        found
    }

    /// Returns the attribute value if present.
    fn attr(&self, element: Self::Handle, name: &str) -> Option<&str>;

    /// Dynamic state flags (hover, focus, checked, …).
    fn state(&self, element: Self::Handle) -> ElementState;

    /// True if the element has no element children and no non-empty text.
    fn is_empty(&self, element: Self::Handle) -> bool;

    /// True for the document element.
    #[inline]
    fn is_root(&self, element: Self::Handle) -> bool {
        self.parent(element).is_none()
    }
}

/// Attribute selector operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AttrOperator {
    /// `[name]`
    Exists,
    /// `[name=value]`
    Equals,
    /// `[name~=value]`: whitespace separated list contains value
    Includes,
    /// `[name|=value]`: equals value or starts with `value-`
    DashMatch,
    /// `[name^=value]`
    Prefix,
    /// `[name$=value]`
    Suffix,
    /// `[name*=value]`
    Substring,
}

/// One attribute test of a compound selector.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AttributeSelector {
    pub name: String,
    pub operator: AttrOperator,
    pub value: String,
    pub case_insensitive: bool,
}

impl AttributeSelector {
    /// `[name]`
    #[inline]
    pub fn exists(name: &str) -> Self {
        Self {
            name: name.to_ascii_lowercase(),
            operator: AttrOperator::Exists,
            value: String::new(),
            case_insensitive: false,
        }
    }

    /// `[name <op> value]`
    #[inline]
    pub fn new(name: &str, operator: AttrOperator, value: &str) -> Self {
        Self {
            name: name.to_ascii_lowercase(),
            operator,
            value: value.to_owned(),
            case_insensitive: false,
        }
    }
}

/// Pseudo-classes understood by the matcher.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum PseudoClass {
    FirstChild,
    LastChild,
    OnlyChild,
    NthChild(Nth),
    NthLastChild(Nth),
    FirstOfType,
    LastOfType,
    OnlyOfType,
    NthOfType(Nth),
    NthLastOfType(Nth),
    Empty,
    Root,
    Link,
    Visited,
    Hover,
    Active,
    Focus,
    Enabled,
    Disabled,
    Checked,
    Target,
    /// `:lang(tag)`; the tag is compared ASCII case-insensitively.
    Lang(String),
}

/// Pseudo-elements. Each one gets its own side-style on the originating element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PseudoElement {
    FirstLine,
    FirstLetter,
    Selection,
    Before,
    After,
    Replaced,
    Marker,
}

impl PseudoElement {
    pub const ALL: [Self; 7] = [
        Self::FirstLine,
        Self::FirstLetter,
        Self::Selection,
        Self::Before,
        Self::After,
        Self::Replaced,
        Self::Marker,
    ];

    /// Generated pseudo-elements create boxes of their own.
    #[inline]
    pub const fn is_generated(self) -> bool {
        matches!(
            self,
            Self::Before | Self::After | Self::Marker | Self::Replaced
        )
    }
}

/// Simple selectors.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum SimpleSelector {
    /// Universal selector '*'. Always matches.
    Universal,
    /// Type selector, stored in ASCII lowercase.
    Type(String),
    Id(String),
    Class(String),
    Attribute(AttributeSelector),
    PseudoClass(PseudoClass),
    PseudoElement(PseudoElement),
    /// `:not(...)`: matches when the inner compound does not.
    Negation(Box<CompoundSelector>),
}

impl SimpleSelector {
    /// Evaluation rank; cheap and selective tests run first.
    const fn rank(&self) -> u8 {
        match self {
            Self::Universal | Self::Type(_) => 0,
            Self::Id(_) => 1,
            Self::Class(_) => 2,
            Self::Attribute(_) => 3,
            Self::PseudoClass(_) => 4,
            Self::Negation(_) => 5,
            Self::PseudoElement(_) => 6,
        }
    }
}

/// A compound selector is a sequence of simple selectors (no combinators).
#[derive(Clone, Debug, PartialEq, Eq, Default, Hash)]
pub struct CompoundSelector {
    pub simples: Vec<SimpleSelector>,
}

impl CompoundSelector {
    /// Build a compound, ordering its parts so matching short-circuits on
    /// tag, then id, classes, attributes, pseudo-classes and negations.
    pub fn from_simples(mut simples: Vec<SimpleSelector>) -> Self {
        simples.sort_by_key(SimpleSelector::rank);
        Self { simples }
    }

    /// `*`
    #[inline]
    pub fn universal() -> Self {
        Self {
            simples: vec![SimpleSelector::Universal],
        }
    }

    /// A compound holding only a type selector.
    #[inline]
    pub fn tag(name: &str) -> Self {
        Self::default().with_tag(name)
    }

    /// A compound holding only an id selector.
    #[inline]
    pub fn id(value: &str) -> Self {
        Self::default().with_id(value)
    }

    /// A compound holding only a class selector.
    #[inline]
    pub fn class(value: &str) -> Self {
        Self::default().with_class(value)
    }

    #[must_use]
    pub fn with_tag(self, name: &str) -> Self {
        self.with(SimpleSelector::Type(name.to_ascii_lowercase()))
    }

    #[must_use]
    pub fn with_id(self, value: &str) -> Self {
        self.with(SimpleSelector::Id(value.to_owned()))
    }

    #[must_use]
    pub fn with_class(self, value: &str) -> Self {
        self.with(SimpleSelector::Class(value.to_owned()))
    }

    #[must_use]
    pub fn with_attr(self, attr: AttributeSelector) -> Self {
        self.with(SimpleSelector::Attribute(attr))
    }

    #[must_use]
    pub fn with_pseudo_class(self, pseudo: PseudoClass) -> Self {
        self.with(SimpleSelector::PseudoClass(pseudo))
    }

    #[must_use]
    pub fn with_pseudo_element(self, pseudo: PseudoElement) -> Self {
        self.with(SimpleSelector::PseudoElement(pseudo))
    }

    #[must_use]
    pub fn with_negation(self, inner: Self) -> Self {
        self.with(SimpleSelector::Negation(Box::new(inner)))
    }

    /// Append a simple selector, keeping evaluation order.
    #[must_use]
    pub fn with(mut self, simple: SimpleSelector) -> Self {
        let rank = simple.rank();
        let at = self
            .simples
            .iter()
            .position(|existing| existing.rank() > rank)
            .unwrap_or(self.simples.len());
        self.simples.insert(at, simple);
        self
    }

    /// The type selector of this compound, if any.
    pub fn tag_name(&self) -> Option<&str> {
        self.simples.iter().find_map(|simple| match simple {
            SimpleSelector::Type(name) => Some(name.as_str()),
            _ => None,
        })
    }

    /// The first id selector of this compound, if any.
    pub fn id_value(&self) -> Option<&str> {
        self.simples.iter().find_map(|simple| match simple {
            SimpleSelector::Id(value) => Some(value.as_str()),
            _ => None,
        })
    }

    /// All class selectors of this compound.
    pub fn class_names(&self) -> impl Iterator<Item = &str> {
        self.simples.iter().filter_map(|simple| match simple {
            SimpleSelector::Class(value) => Some(value.as_str()),
            _ => None,
        })
    }

    /// The pseudo-element of this compound, if any.
    pub fn pseudo_element(&self) -> Option<PseudoElement> {
        self.simples.iter().find_map(|simple| match simple {
            SimpleSelector::PseudoElement(pseudo) => Some(*pseudo),
            _ => None,
        })
    }
}

/// Combinators between compounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Combinator {
    Descendant,
    Child,
    AdjacentSibling,
    GeneralSibling,
}

/// A complex selector is one or more compounds separated by combinators,
/// stored left to right: `first (c1 C1) (c2 C2) ...`.
#[derive(Clone, Debug, PartialEq, Eq, Default, Hash)]
pub struct ComplexSelector {
    pub first: CompoundSelector,
    pub rest: Vec<(Combinator, CompoundSelector)>,
}

impl ComplexSelector {
    /// A selector made of one compound.
    #[inline]
    pub fn compound(first: CompoundSelector) -> Self {
        Self {
            first,
            rest: Vec::new(),
        }
    }

    /// Extend the selector to the right: `self <combinator> compound`.
    #[must_use]
    pub fn then(mut self, combinator: Combinator, compound: CompoundSelector) -> Self {
        self.rest.push((combinator, compound));
        self
    }

    /// Number of compounds; at least one.
    #[inline]
    pub fn compound_count(&self) -> usize {
        self.rest.len().saturating_add(1)
    }

    /// Compound at `index`, counting from the subject (index 0) leftwards.
    pub fn compound_from_right(&self, index: usize) -> Option<&CompoundSelector> {
        let rest_len = self.rest.len();
        if index < rest_len {
            self.rest
                .get(rest_len - 1 - index)
                .map(|(_, compound)| compound)
        } else if index == rest_len {
            Some(&self.first)
        } else {
            None
        }
    }

    /// The combinator joining the compound at `index` (from the right) to
    /// its left neighbour; None for the leftmost compound.
    pub fn combinator_left_of(&self, index: usize) -> Option<Combinator> {
        let rest_len = self.rest.len();
        if index < rest_len {
            self.rest
                .get(rest_len - 1 - index)
                .map(|(combinator, _)| *combinator)
        } else {
            None
        }
    }

    /// The rightmost compound, which must match the element itself.
    #[inline]
    pub fn subject(&self) -> &CompoundSelector {
        self.rest
            .last()
            .map_or(&self.first, |(_, compound)| compound)
    }

    /// Pseudo-element targeted by this selector, if any.
    #[inline]
    pub fn pseudo_element(&self) -> Option<PseudoElement> {
        self.subject().pseudo_element()
    }
}

/// A selector list separated by commas.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct SelectorList {
    pub selectors: Vec<ComplexSelector>,
}

impl SelectorList {
    #[inline]
    pub fn single(selector: ComplexSelector) -> Self {
        Self {
            selectors: vec![selector],
        }
    }
}

impl From<ComplexSelector> for SelectorList {
    #[inline]
    fn from(selector: ComplexSelector) -> Self {
        Self::single(selector)
    }
}

impl From<CompoundSelector> for SelectorList {
    #[inline]
    fn from(compound: CompoundSelector) -> Self {
        Self::single(ComplexSelector::compound(compound))
    }
}
