//! Pre-parsed stylesheets as handed over by the parser.

use css_properties::DeclarationBlock;
use css_selectors::{QuirksMode, SelectorList};
use std::sync::Arc;

/// Provenance tier of a stylesheet or declaration block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Origin {
    /// The user agent's default sheet.
    UserAgent,
    /// User agent rules that only apply in quirks mode.
    UserAgentQuirks,
    User,
    /// Non-CSS presentational attributes such as `bgcolor`.
    PresentationalHint,
    Author,
    /// An element's `style` attribute.
    Inline,
}

/// Document compatibility mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DocumentMode {
    #[default]
    Standards,
    Quirks,
}

impl DocumentMode {
    #[inline]
    pub const fn quirks_mode(self) -> QuirksMode {
        match self {
            Self::Standards => QuirksMode::NoQuirks,
            Self::Quirks => QuirksMode::Quirks,
        }
    }
}

/// One style rule: a selector list and the declarations it applies.
#[derive(Clone, Debug)]
pub struct Rule {
    pub selectors: SelectorList,
    pub declarations: Arc<DeclarationBlock>,
}

impl Rule {
    pub fn new(selectors: impl Into<SelectorList>, declarations: DeclarationBlock) -> Self {
        Self {
            selectors: selectors.into(),
            declarations: Arc::new(declarations),
        }
    }
}

/// Media queries a stylesheet is restricted to, kept as parsed text.
/// Interpreting them is the evaluator's job.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MediaList {
    pub queries: Vec<String>,
}

impl MediaList {
    pub fn new<I, S>(queries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            queries: queries.into_iter().map(Into::into).collect(),
        }
    }
}

/// Decides whether a media list applies to the active medium.
pub trait MediaEvaluator {
    fn evaluate(&self, media: &MediaList) -> bool;
}

/// Evaluator for a single named medium. Matches lists naming that medium
/// or `all`; an empty list always matches.
#[derive(Clone, Debug)]
pub struct MediumEvaluator {
    medium: String,
}

impl MediumEvaluator {
    pub fn new(medium: &str) -> Self {
        Self {
            medium: medium.to_ascii_lowercase(),
        }
    }

    pub fn screen() -> Self {
        Self::new("screen")
    }
}

impl MediaEvaluator for MediumEvaluator {
    fn evaluate(&self, media: &MediaList) -> bool {
        media.queries.is_empty()
            || media.queries.iter().any(|query| {
                let query = query.trim();
                query.eq_ignore_ascii_case("all") || query.eq_ignore_ascii_case(&self.medium)
            })
    }
}

/// Rules from one source, in document order.
#[derive(Clone, Debug)]
pub struct Stylesheet {
    pub origin: Origin,
    pub rules: Vec<Rule>,
    /// `None` applies to every medium.
    pub media: Option<MediaList>,
}

impl Stylesheet {
    pub const fn new(origin: Origin) -> Self {
        Self {
            origin,
            rules: Vec::new(),
            media: None,
        }
    }

    #[must_use]
    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    #[must_use]
    pub fn with_media(mut self, media: MediaList) -> Self {
        self.media = Some(media);
        self
    }
}

/// Every stylesheet that applies to one document.
#[derive(Clone, Debug, Default)]
pub struct StylesheetSet {
    pub mode: DocumentMode,
    pub sheets: Vec<Stylesheet>,
}

impl StylesheetSet {
    pub fn new(mode: DocumentMode) -> Self {
        Self {
            mode,
            sheets: Vec::new(),
        }
    }

    pub fn push(&mut self, sheet: Stylesheet) {
        self.sheets.push(sheet);
    }

    #[must_use]
    pub fn with_sheet(mut self, sheet: Stylesheet) -> Self {
        self.push(sheet);
        self
    }

    /// Sheets that take part in the cascade: the medium matches, and quirks
    /// sheets only count in quirks mode.
    pub fn active_sheets<'set, M: MediaEvaluator + ?Sized>(
        &'set self,
        evaluator: &'set M,
    ) -> impl Iterator<Item = &'set Stylesheet> + 'set {
        let mode = self.mode;
        self.sheets.iter().filter(move |sheet| {
            if sheet.origin == Origin::UserAgentQuirks && mode != DocumentMode::Quirks {
                return false;
            }
            sheet
                .media
                .as_ref()
                .is_none_or(|media| evaluator.evaluate(media))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quirks_sheets_and_media_are_filtered() {
        let print_only = Stylesheet::new(Origin::Author).with_media(MediaList::new(["print"]));
        let mut set = StylesheetSet::new(DocumentMode::Standards)
            .with_sheet(Stylesheet::new(Origin::UserAgent))
            .with_sheet(Stylesheet::new(Origin::UserAgentQuirks))
            .with_sheet(print_only)
            .with_sheet(Stylesheet::new(Origin::Author).with_media(MediaList::new(["all"])));
        let screen = MediumEvaluator::screen();
        let origins: Vec<Origin> = set.active_sheets(&screen).map(|sheet| sheet.origin).collect();
        assert_eq!(origins, vec![Origin::UserAgent, Origin::Author]);

        set.mode = DocumentMode::Quirks;
        assert_eq!(set.active_sheets(&screen).count(), 3);
        assert_eq!(set.active_sheets(&MediumEvaluator::new("PRINT")).count(), 4);
    }
}
