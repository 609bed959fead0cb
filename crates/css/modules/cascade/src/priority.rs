//! Cascade ordering.
//! Reference: <https://www.w3.org/TR/css-cascade-4/#cascade-sort>

use crate::stylesheet::Origin;
use css_selectors::Specificity;

/// Origin and importance folded into one rank, lowest first.
///
/// Important declarations reverse the origin order, so user and user agent
/// `!important` outrank the author's.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CascadeLevel {
    UserAgent,
    UserAgentQuirks,
    User,
    PresentationalHint,
    Author,
    Inline,
    AuthorImportant,
    InlineImportant,
    UserImportant,
    UserAgentImportant,
}

impl CascadeLevel {
    /// Level of a declaration from `origin`. Presentational hints cannot be
    /// important.
    pub const fn new(origin: Origin, important: bool) -> Self {
        match (origin, important) {
            (Origin::UserAgent, false) => Self::UserAgent,
            (Origin::UserAgentQuirks, false) => Self::UserAgentQuirks,
            (Origin::User, false) => Self::User,
            (Origin::PresentationalHint, _) => Self::PresentationalHint,
            (Origin::Author, false) => Self::Author,
            (Origin::Inline, false) => Self::Inline,
            (Origin::Author, true) => Self::AuthorImportant,
            (Origin::Inline, true) => Self::InlineImportant,
            (Origin::User, true) => Self::UserImportant,
            (Origin::UserAgent | Origin::UserAgentQuirks, true) => Self::UserAgentImportant,
        }
    }

    #[inline]
    pub const fn is_important(self) -> bool {
        matches!(
            self,
            Self::AuthorImportant
                | Self::InlineImportant
                | Self::UserImportant
                | Self::UserAgentImportant
        )
    }
}

/// Sort key of one declaration. Field order is significance order, so the
/// derived `Ord` is the cascade order: the greater key wins.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CascadePriority {
    pub level: CascadeLevel,
    pub specificity: Specificity,
    /// Document position of the rule; the final tie-break.
    pub source_order: u32,
}

impl CascadePriority {
    #[inline]
    pub const fn new(level: CascadeLevel, specificity: Specificity, source_order: u32) -> Self {
        Self {
            level,
            specificity,
            source_order,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn importance_reverses_origins() {
        let ladder = [
            CascadeLevel::new(Origin::UserAgent, false),
            CascadeLevel::new(Origin::UserAgentQuirks, false),
            CascadeLevel::new(Origin::User, false),
            CascadeLevel::new(Origin::PresentationalHint, true),
            CascadeLevel::new(Origin::Author, false),
            CascadeLevel::new(Origin::Inline, false),
            CascadeLevel::new(Origin::Author, true),
            CascadeLevel::new(Origin::Inline, true),
            CascadeLevel::new(Origin::User, true),
            CascadeLevel::new(Origin::UserAgent, true),
        ];
        assert!(ladder.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(!ladder[3].is_important());
        assert!(ladder[6].is_important());
    }

    #[test]
    fn specificity_then_order_break_ties() {
        let author = CascadeLevel::Author;
        let id = CascadePriority::new(author, Specificity(1, 0, 0), 0);
        let many_classes = CascadePriority::new(author, Specificity(0, 40, 9), 9);
        let later_id = CascadePriority::new(author, Specificity(1, 0, 0), 1);
        assert!(id > many_classes);
        assert!(later_id > id);
        let inline = CascadePriority::new(CascadeLevel::Inline, Specificity::default(), 0);
        assert!(inline > later_id);
    }
}
