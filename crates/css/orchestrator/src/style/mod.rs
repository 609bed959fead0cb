//! Style computation: applying cascaded declarations, cross-property
//! adjustments, sibling sharing and the tree walk that ties them together.

mod adjust;
mod apply;
mod computer;
mod sharing;
pub mod ua_stylesheet;
mod units;

pub use adjust::adjust_style;
pub use apply::{ApplyContext, apply};
pub use computer::{RestyleScope, StyleComputer, StylePass};
pub use sharing::{SharingSignature, SiblingHistory};
pub use units::{LengthContext, font_weight, keyword_font_size, length_font_size};
