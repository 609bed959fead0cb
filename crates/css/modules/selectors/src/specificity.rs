//! Selector specificity calculation.
//! Reference: <https://www.w3.org/TR/selectors-3/#specificity>

use crate::{ComplexSelector, CompoundSelector, SimpleSelector};

/// Specificity triple (ids, classes/attributes/pseudo-classes, types/pseudo-elements).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub struct Specificity(pub u16, pub u16, pub u16);

impl Specificity {
    /// Component-wise saturating sum.
    #[inline]
    #[must_use]
    pub const fn saturating_add(self, other: Self) -> Self {
        Self(
            self.0.saturating_add(other.0),
            self.1.saturating_add(other.1),
            self.2.saturating_add(other.2),
        )
    }

    /// Pack into one integer that orders the same way as the triple.
    #[inline]
    pub const fn packed(self) -> u64 {
        ((self.0 as u64) << 32) | ((self.1 as u64) << 16) | (self.2 as u64)
    }
}

/// Compute the specificity of a compound selector.
pub fn specificity_of_compound(compound: &CompoundSelector) -> Specificity {
    compound
        .simples
        .iter()
        .fold(Specificity::default(), |total, simple| {
            let part = match simple {
                SimpleSelector::Universal => Specificity::default(),
                SimpleSelector::Id(_) => Specificity(1, 0, 0),
                SimpleSelector::Class(_)
                | SimpleSelector::Attribute(_)
                | SimpleSelector::PseudoClass(_) => Specificity(0, 1, 0),
                SimpleSelector::Type(_) | SimpleSelector::PseudoElement(_) => {
                    Specificity(0, 0, 1)
                }
                // The negation pseudo-class itself does not count; its argument does.
                SimpleSelector::Negation(inner) => specificity_of_compound(inner),
            };
            total.saturating_add(part)
        })
}

/// Compute the specificity of a complex selector (sum of its compounds).
pub fn specificity_of_complex(sel: &ComplexSelector) -> Specificity {
    sel.rest
        .iter()
        .fold(specificity_of_compound(&sel.first), |total, (_, compound)| {
            total.saturating_add(specificity_of_compound(compound))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AttributeSelector, Combinator, PseudoClass, PseudoElement};

    #[test]
    fn counts_each_column() {
        // ul#nav li.active a[href]:hover::before
        let sel = ComplexSelector::compound(CompoundSelector::tag("ul").with_id("nav"))
            .then(
                Combinator::Descendant,
                CompoundSelector::tag("li").with_class("active"),
            )
            .then(
                Combinator::Descendant,
                CompoundSelector::tag("a")
                    .with_attr(AttributeSelector::exists("href"))
                    .with_pseudo_class(PseudoClass::Hover)
                    .with_pseudo_element(PseudoElement::Before),
            );
        assert_eq!(specificity_of_complex(&sel), Specificity(1, 3, 4));
    }

    #[test]
    fn negation_counts_its_argument() {
        let compound = CompoundSelector::universal().with_negation(CompoundSelector::class("x"));
        assert_eq!(specificity_of_compound(&compound), Specificity(0, 1, 0));
    }

    #[test]
    fn packed_preserves_order() {
        let low = Specificity(0, 5, 9);
        let high = Specificity(1, 0, 0);
        assert!(low < high);
        assert!(low.packed() < high.packed());
    }
}
