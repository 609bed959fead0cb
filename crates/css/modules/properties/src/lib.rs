//! Property model of the style engine.
//!
//! - [`PropertyId`] names every supported property.
//! - [`Value`], [`Declaration`] and [`DeclarationBlock`] carry specified values.
//! - [`ComputedStyle`] is the copy-on-write computed style, with per
//!   pseudo-element side styles, built from an explicit [`DefaultStyle`].
//! - [`diff`] classifies the change between two computed styles.

#![forbid(unsafe_code)]

mod diff;
mod groups;
mod property;
mod specified;
mod style;
mod values;

pub use diff::{Difference, diff};
pub use groups::{
    BackgroundData, BorderData, BoxData, DataRef, ExtendedData, ExtendedInheritedData, FontData,
    GeneratedData, InheritedData, InheritedFlags, LineHeight, NonInheritedFlags, SurroundData,
    VisualData,
};
pub use property::PropertyId;
pub use specified::{
    Declaration, DeclarationBlock, FontSizeKeyword, FontWeight, LengthUnit, SpecifiedLength,
    SpecifiedShadow, Value, VerticalAlignKeyword,
};
pub use style::{ComputedStyle, DefaultStyle};
pub use values::*;

/// Pseudo-elements own a side style each; re-exported for convenience.
pub use css_selectors::PseudoElement;
