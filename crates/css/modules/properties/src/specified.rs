//! Specified values and declaration blocks, as produced by an upstream parser.

use crate::property::PropertyId;
use crate::values::{
    BorderCollapse, BorderStyle, BoxSizing, CaptionSide, Clear, Color, ContentItem,
    CounterDirective, Cursor, Direction, Display, EmptyCells, Float, FontStyle, FontVariant,
    ListStylePosition, ListStyleType, Overflow, Position, TableLayout, TextAlign,
    TextDecorationLine, TextTransform, Visibility, WhiteSpace, WordWrap,
};
use core::slice::Iter;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LengthUnit {
    Px,
    Em,
    Ex,
    Rem,
    Pt,
    Pc,
    In,
    Cm,
    Mm,
    Percent,
}

/// A number with a unit, not yet resolved to pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpecifiedLength {
    pub value: f32,
    pub unit: LengthUnit,
}

impl SpecifiedLength {
    #[inline]
    pub const fn new(value: f32, unit: LengthUnit) -> Self {
        Self { value, unit }
    }

    #[inline]
    pub const fn px(value: f32) -> Self {
        Self::new(value, LengthUnit::Px)
    }

    #[inline]
    pub const fn em(value: f32) -> Self {
        Self::new(value, LengthUnit::Em)
    }

    #[inline]
    pub const fn percent(value: f32) -> Self {
        Self::new(value, LengthUnit::Percent)
    }

    /// Font-relative units need the element's font before they can resolve.
    #[inline]
    pub const fn is_font_relative(self) -> bool {
        matches!(self.unit, LengthUnit::Em | LengthUnit::Ex | LengthUnit::Rem)
    }
}

/// `font-size` keywords.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FontSizeKeyword {
    XxSmall,
    XSmall,
    Small,
    Medium,
    Large,
    XLarge,
    XxLarge,
    /// Relative to the parent size.
    Larger,
    /// Relative to the parent size.
    Smaller,
}

/// Specified `font-weight`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FontWeight {
    /// 100..=900; `normal` is 400 and `bold` is 700.
    Weight(u16),
    Bolder,
    Lighter,
}

/// Specified `vertical-align` keyword.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VerticalAlignKeyword {
    Baseline,
    Sub,
    Super,
    Top,
    TextTop,
    Middle,
    Bottom,
    TextBottom,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpecifiedShadow {
    pub offset_x: SpecifiedLength,
    pub offset_y: SpecifiedLength,
    pub blur: SpecifiedLength,
    pub color: Color,
}

/// A specified value. Which variants a property accepts is fixed by the
/// property; a mismatch is a programming error upstream.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Inherit,
    Initial,
    Auto,
    None,
    Normal,
    Length(SpecifiedLength),
    Number(f32),
    Integer(i32),
    Color(Color),
    Url(String),
    Display(Display),
    Position(Position),
    Float(Float),
    Clear(Clear),
    Overflow(Overflow),
    Visibility(Visibility),
    WhiteSpace(WhiteSpace),
    TextAlign(TextAlign),
    TextTransform(TextTransform),
    Direction(Direction),
    BorderStyle(BorderStyle),
    BoxSizing(BoxSizing),
    VerticalAlign(VerticalAlignKeyword),
    ListStyleType(ListStyleType),
    ListStylePosition(ListStylePosition),
    TableLayout(TableLayout),
    BorderCollapse(BorderCollapse),
    CaptionSide(CaptionSide),
    EmptyCells(EmptyCells),
    Cursor(Cursor),
    WordWrap(WordWrap),
    TextDecoration(TextDecorationLine),
    FontStyle(FontStyle),
    FontVariant(FontVariant),
    FontWeight(FontWeight),
    FontSize(FontSizeKeyword),
    FontFamily(Vec<String>),
    Shadows(Vec<SpecifiedShadow>),
    /// `rect(top, right, bottom, left)`; `None` sides are `auto`.
    Rect([Option<SpecifiedLength>; 4]),
    Content(Vec<ContentItem>),
    Counters(Vec<CounterDirective>),
    Quotes(Vec<(String, String)>),
}

impl Value {
    #[inline]
    pub const fn px(value: f32) -> Self {
        Self::Length(SpecifiedLength::px(value))
    }

    #[inline]
    pub const fn em(value: f32) -> Self {
        Self::Length(SpecifiedLength::em(value))
    }

    #[inline]
    pub const fn percent(value: f32) -> Self {
        Self::Length(SpecifiedLength::percent(value))
    }
}

/// `property: value [!important]`
#[derive(Clone, Debug, PartialEq)]
pub struct Declaration {
    pub property: PropertyId,
    pub value: Value,
    pub important: bool,
}

impl Declaration {
    #[inline]
    pub const fn new(property: PropertyId, value: Value) -> Self {
        Self {
            property,
            value,
            important: false,
        }
    }

    #[inline]
    pub const fn important(property: PropertyId, value: Value) -> Self {
        Self {
            property,
            value,
            important: true,
        }
    }
}

/// The declarations of one rule or one inline `style` attribute, in source order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DeclarationBlock {
    declarations: Vec<Declaration>,
}

impl DeclarationBlock {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn push(&mut self, declaration: Declaration) {
        self.declarations.push(declaration);
    }

    /// Builder form of `push` for a normal declaration.
    #[must_use]
    pub fn with(mut self, property: PropertyId, value: Value) -> Self {
        self.push(Declaration::new(property, value));
        self
    }

    /// Builder form of `push` for an `!important` declaration.
    #[must_use]
    pub fn with_important(mut self, property: PropertyId, value: Value) -> Self {
        self.push(Declaration::important(property, value));
        self
    }

    #[inline]
    pub fn iter(&self) -> Iter<'_, Declaration> {
        self.declarations.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}

impl<'block> IntoIterator for &'block DeclarationBlock {
    type Item = &'block Declaration;
    type IntoIter = Iter<'block, Declaration>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.declarations.iter()
    }
}

impl FromIterator<Declaration> for DeclarationBlock {
    fn from_iter<I: IntoIterator<Item = Declaration>>(iter: I) -> Self {
        Self {
            declarations: iter.into_iter().collect(),
        }
    }
}
