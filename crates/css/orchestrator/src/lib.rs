//! Orchestrator of the style engine.
//!
//! [`StyleComputer`] walks a [`StyleTree`], runs every element through the
//! rule index, selector matcher and cascade of the module crates, applies
//! the result against the parent style and reports how each element's style
//! changed since the previous pass.

#![forbid(unsafe_code)]

mod config;
mod font;
mod style;
mod tree;

pub use config::StyleConfig;
pub use font::{ApproximateFontMetrics, FontMetricsProvider};
pub use style::ua_stylesheet::{
    create_quirks_stylesheet, create_ua_stylesheet, stylesheet_set_with_defaults,
};
pub use style::{
    ApplyContext, LengthContext, RestyleScope, SharingSignature, SiblingHistory, StyleComputer,
    StylePass, adjust_style, apply, font_weight, keyword_font_size, length_font_size,
};
pub use tree::{StyleTree, child_elements};

pub use css_selectors::DependencyKinds;
