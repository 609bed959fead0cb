//! Copy-on-write property groups.
//!
//! A computed style is a handful of reference-counted groups. Styles that
//! share a group hold the same allocation; the only way to write to a group
//! is [`DataRef::access`], which clones it first when it is shared.

use crate::values::{
    BorderCollapse, BorderStyle, BoxSizing, CaptionSide, Clear, ClipRect, Color, ContentItem,
    CounterDirective, Cursor, Direction, Display, Edges, EmptyCells, Float, FontStyle,
    FontVariant, Length, ListStylePosition, ListStyleType, Overflow, Position, Rgba, Shadow,
    TableLayout, TextAlign, TextDecorationLine, TextTransform, VerticalAlign, Visibility,
    WhiteSpace, WordWrap,
};
use core::fmt;
use core::ops::Deref;
use css_selectors::PseudoElement;
use std::sync::Arc;

/// Shared, copy-on-write handle to one property group.
pub struct DataRef<T> {
    inner: Arc<T>,
}

impl<T: Clone> DataRef<T> {
    #[inline]
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(value),
        }
    }

    #[inline]
    pub fn get(&self) -> &T {
        &self.inner
    }

    /// Mutable access; clones the group first if another style shares it.
    #[inline]
    pub fn access(&mut self) -> &mut T {
        Arc::make_mut(&mut self.inner)
    }

    /// True if both handles point at the same allocation.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// True if other styles hold this allocation too.
    #[inline]
    pub fn is_shared(&self) -> bool {
        Arc::strong_count(&self.inner) > 1
    }
}

impl<T> Clone for DataRef<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Deref for DataRef<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.inner
    }
}

impl<T: PartialEq> PartialEq for DataRef<T> {
    /// Value equality, short-circuiting on identity.
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner) || *self.inner == *other.inner
    }
}

impl<T: fmt::Debug> fmt::Debug for DataRef<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.inner.fmt(formatter)
    }
}

/// Sizing and stacking.
#[derive(Clone, Debug, PartialEq)]
pub struct BoxData {
    pub width: Length,
    pub height: Length,
    pub min_width: Length,
    pub min_height: Length,
    pub max_width: Length,
    pub max_height: Length,
    pub vertical_align: VerticalAlign,
    pub box_sizing: BoxSizing,
    /// `None` is `auto`.
    pub z_index: Option<i32>,
}

impl Default for BoxData {
    fn default() -> Self {
        Self {
            width: Length::Auto,
            height: Length::Auto,
            min_width: Length::ZERO,
            min_height: Length::ZERO,
            max_width: Length::None,
            max_height: Length::None,
            vertical_align: VerticalAlign::Baseline,
            box_sizing: BoxSizing::ContentBox,
            z_index: None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct VisualData {
    /// `None` is `clip: auto`.
    pub clip: Option<ClipRect>,
    /// Lines set on this element; see `text_decorations_in_effect` for propagation.
    pub text_decoration: TextDecorationLine,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BackgroundData {
    pub color: Color,
    pub image: Option<String>,
    pub outline_width: f32,
    pub outline_style: BorderStyle,
    pub outline_color: Color,
}

impl Default for BackgroundData {
    fn default() -> Self {
        Self {
            color: Color::Rgba(Rgba::TRANSPARENT),
            image: None,
            outline_width: 3.0,
            outline_style: BorderStyle::None,
            outline_color: Color::CurrentColor,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BorderData {
    /// Widths as specified; a side without a visible style computes to zero.
    pub widths: Edges<f32>,
    pub styles: Edges<BorderStyle>,
    pub colors: Edges<Color>,
}

impl Default for BorderData {
    fn default() -> Self {
        Self {
            widths: Edges::uniform(3.0),
            styles: Edges::uniform(BorderStyle::None),
            colors: Edges::uniform(Color::CurrentColor),
        }
    }
}

/// Offsets, margins, padding and borders.
#[derive(Clone, Debug, PartialEq)]
pub struct SurroundData {
    pub offset: Edges<Length>,
    pub margin: Edges<Length>,
    pub padding: Edges<Length>,
    pub border: BorderData,
}

impl Default for SurroundData {
    fn default() -> Self {
        Self {
            offset: Edges::uniform(Length::Auto),
            margin: Edges::uniform(Length::ZERO),
            padding: Edges::uniform(Length::ZERO),
            border: BorderData::default(),
        }
    }
}

impl SurroundData {
    /// Padding, borders and margins are identical (offsets may differ).
    pub fn has_same_pbm(&self, other: &Self) -> bool {
        self.padding == other.padding && self.margin == other.margin && self.border == other.border
    }
}

/// Generated content and counters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GeneratedData {
    /// `None` is `normal`.
    pub content: Option<Vec<ContentItem>>,
    pub counter_increment: Vec<CounterDirective>,
    pub counter_reset: Vec<CounterDirective>,
}

/// Rarely set non-inherited properties.
#[derive(Clone, Debug, PartialEq)]
pub struct ExtendedData {
    pub opacity: f32,
    pub box_shadow: Vec<Shadow>,
}

impl Default for ExtendedData {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            box_shadow: Vec::new(),
        }
    }
}

/// Rarely set inherited properties.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExtendedInheritedData {
    pub text_shadow: Vec<Shadow>,
    pub word_wrap: WordWrap,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FontData {
    pub families: Vec<String>,
    /// Size before the minimum font size was enforced.
    pub specified_size: f32,
    pub computed_size: f32,
    pub weight: u16,
    pub style: FontStyle,
    pub variant: FontVariant,
}

impl Default for FontData {
    fn default() -> Self {
        Self {
            families: Vec::new(),
            specified_size: 16.0,
            computed_size: 16.0,
            weight: 400,
            style: FontStyle::Normal,
            variant: FontVariant::Normal,
        }
    }
}

/// Computed `line-height`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum LineHeight {
    #[default]
    Normal,
    /// Unitless multiplier, inherited as a number.
    Number(f32),
    Fixed(f32),
}

/// Inherited text, font and list data.
#[derive(Clone, Debug, PartialEq)]
pub struct InheritedData {
    pub color: Rgba,
    pub font: FontData,
    pub line_height: LineHeight,
    pub text_indent: Length,
    pub letter_spacing: f32,
    pub word_spacing: f32,
    pub border_spacing_horizontal: f32,
    pub border_spacing_vertical: f32,
    pub list_style_image: Option<String>,
    /// `None` is the user agent's quotes.
    pub quotes: Option<Vec<(String, String)>>,
    pub widows: u16,
    pub orphans: u16,
}

impl Default for InheritedData {
    fn default() -> Self {
        Self {
            color: Rgba::BLACK,
            font: FontData::default(),
            line_height: LineHeight::Normal,
            text_indent: Length::ZERO,
            letter_spacing: 0.0,
            word_spacing: 0.0,
            border_spacing_horizontal: 0.0,
            border_spacing_vertical: 0.0,
            list_style_image: None,
            quotes: None,
            widows: 2,
            orphans: 2,
        }
    }
}

/// Inherited keyword properties, stored by value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InheritedFlags {
    pub visibility: Visibility,
    pub white_space: WhiteSpace,
    pub text_align: TextAlign,
    pub text_transform: TextTransform,
    pub direction: Direction,
    pub list_style_type: ListStyleType,
    pub list_style_position: ListStylePosition,
    pub border_collapse: BorderCollapse,
    pub caption_side: CaptionSide,
    pub empty_cells: EmptyCells,
    pub cursor: Cursor,
    /// Decorations drawn on this element's text, including those propagated
    /// from block ancestors.
    pub text_decorations_in_effect: TextDecorationLine,
}

/// Non-inherited keyword properties, stored by value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NonInheritedFlags {
    pub display: Display,
    /// `display` before adjustments such as blockification.
    pub original_display: Display,
    pub position: Position,
    pub float: Float,
    pub clear: Clear,
    pub overflow_x: Overflow,
    pub overflow_y: Overflow,
    pub table_layout: TableLayout,
    /// The pseudo-element this style describes, if any.
    pub style_type: Option<PseudoElement>,
}
