//! CSS Cascading and Inheritance Level 4: origins, rule index and cascade order.
//! Reference: <https://www.w3.org/TR/css-cascade-4/>
//!
//! Stylesheets arrive pre-parsed. [`RuleIndex::build`] filters them by
//! medium and document mode and buckets their selectors; [`collect`] then
//! matches an element against its candidate selectors and returns the
//! applicable declarations sorted so that the winner of each property is
//! applied last.

#![forbid(unsafe_code)]

mod collector;
mod priority;
mod rule_index;
mod stylesheet;

pub use collector::{CascadeAdapter, CascadeEntry, MatchedDeclarations, collect};
pub use priority::{CascadeLevel, CascadePriority};
pub use rule_index::{IndexedRule, RuleIndex};
pub use stylesheet::{
    DocumentMode, MediaEvaluator, MediaList, MediumEvaluator, Origin, Rule, Stylesheet,
    StylesheetSet,
};
