//! Style application: fold a cascaded declaration list into a computed style.
//!
//! Font properties are applied first so that `em` and `ex` in every other
//! declaration resolve against the element's own font. `inherit` copies the
//! parent's computed value and `initial` copies the initial style's.

use crate::config::StyleConfig;
use crate::font::FontMetricsProvider;
use crate::style::adjust::adjust_style;
use crate::style::units::{LengthContext, font_weight, keyword_font_size, length_font_size};
use css_cascade::CascadeEntry;
use css_properties::{
    BorderStyle, Clear, ClipRect, ComputedStyle, Cursor, Declaration, DefaultStyle, Edges, Float,
    Length, LineHeight, ListStyleType, PropertyId, PseudoElement, Shadow, Side, SpecifiedLength,
    SpecifiedShadow, TableLayout, TextDecorationLine, Value, VerticalAlign, VerticalAlignKeyword,
};

/// Everything besides the declarations that a computed style depends on.
#[derive(Clone, Copy)]
pub struct ApplyContext<'ctx> {
    pub defaults: &'ctx DefaultStyle,
    pub config: &'ctx StyleConfig,
    pub fonts: &'ctx dyn FontMetricsProvider,
    /// Parent element's style, or the originating element's for a pseudo-element.
    pub parent: Option<&'ctx ComputedStyle>,
    pub pseudo: Option<PseudoElement>,
    pub is_root: bool,
    /// Computed font size of the root element; `rem` resolves against it.
    pub root_font_size: f32,
}

impl<'ctx> ApplyContext<'ctx> {
    /// Style that inherited values come from. The root inherits initial values.
    fn inherited(&self) -> &'ctx ComputedStyle {
        self.parent.unwrap_or_else(|| self.defaults.initial())
    }

    fn fresh_style(&self) -> ComputedStyle {
        match (self.pseudo, self.parent) {
            (Some(pseudo), Some(originating)) => self.defaults.fresh_pseudo(pseudo, originating),
            (Some(pseudo), None) => {
                let mut style = self.defaults.fresh();
                style.set_style_type(Some(pseudo));
                style
            }
            (None, parent) => self.defaults.fresh_for(parent),
        }
    }

    /// Lengths in font properties are relative to the parent's font.
    fn font_lengths(&self) -> LengthContext {
        let parent = self.inherited();
        LengthContext {
            font_size: parent.font_size(),
            x_height: self.fonts.x_height(parent.font()),
            root_font_size: self.root_font_size,
        }
    }

    fn lengths_for(&self, style: &ComputedStyle) -> LengthContext {
        LengthContext {
            font_size: style.font_size(),
            x_height: self.fonts.x_height(style.font()),
            root_font_size: if self.is_root {
                style.font_size()
            } else {
                self.root_font_size
            },
        }
    }
}

/// Compute a style from `entries`, which must be in cascade order (later
/// entries win). Cross-property adjustments run last.
pub fn apply(entries: &[CascadeEntry<'_>], ctx: &ApplyContext<'_>) -> ComputedStyle {
    let mut style = ctx.fresh_style();

    let font_lengths = ctx.font_lengths();
    for entry in entries.iter().filter(|entry| entry.is_early()) {
        apply_declaration(entry.declaration, &mut style, ctx, &font_lengths);
    }

    let lengths = ctx.lengths_for(&style);
    for entry in entries.iter().filter(|entry| !entry.is_early()) {
        apply_declaration(entry.declaration, &mut style, ctx, &lengths);
    }

    adjust_style(&mut style, ctx.is_root);
    style
}

fn apply_declaration(
    declaration: &Declaration,
    style: &mut ComputedStyle,
    ctx: &ApplyContext<'_>,
    lengths: &LengthContext,
) {
    let property = declaration.property;
    if let PropertyId::Unknown(raw) = property {
        log::trace!(target: "css_orchestrator", "skipping unknown property {raw}");
        return;
    }
    let accepted = match &declaration.value {
        Value::Inherit => {
            copy_property(property, ctx.inherited(), style);
            true
        }
        Value::Initial => {
            copy_property(property, ctx.defaults.initial(), style);
            true
        }
        value => {
            if let Some((kind, side)) = SideProperty::of(property) {
                apply_side_value(kind, side, value, style, lengths)
            } else if property.is_inherited() {
                apply_inherited_value(property, value, style, ctx, lengths)
            } else {
                apply_non_inherited_value(property, value, style, lengths)
            }
        }
    };
    if !accepted {
        log::warn!(
            target: "css_orchestrator",
            "value {:?} does not fit property {}",
            declaration.value,
            property.name()
        );
        debug_assert!(accepted, "value does not fit {}", property.name());
    }
}

/// The per-side properties, which share one code path per kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SideProperty {
    Offset,
    Margin,
    Padding,
    BorderWidth,
    BorderStyle,
    BorderColor,
}

impl SideProperty {
    const fn of(property: PropertyId) -> Option<(Self, Side)> {
        let found = match property {
            PropertyId::Top => (Self::Offset, Side::Top),
            PropertyId::Right => (Self::Offset, Side::Right),
            PropertyId::Bottom => (Self::Offset, Side::Bottom),
            PropertyId::Left => (Self::Offset, Side::Left),
            PropertyId::MarginTop => (Self::Margin, Side::Top),
            PropertyId::MarginRight => (Self::Margin, Side::Right),
            PropertyId::MarginBottom => (Self::Margin, Side::Bottom),
            PropertyId::MarginLeft => (Self::Margin, Side::Left),
            PropertyId::PaddingTop => (Self::Padding, Side::Top),
            PropertyId::PaddingRight => (Self::Padding, Side::Right),
            PropertyId::PaddingBottom => (Self::Padding, Side::Bottom),
            PropertyId::PaddingLeft => (Self::Padding, Side::Left),
            PropertyId::BorderTopWidth => (Self::BorderWidth, Side::Top),
            PropertyId::BorderRightWidth => (Self::BorderWidth, Side::Right),
            PropertyId::BorderBottomWidth => (Self::BorderWidth, Side::Bottom),
            PropertyId::BorderLeftWidth => (Self::BorderWidth, Side::Left),
            PropertyId::BorderTopStyle => (Self::BorderStyle, Side::Top),
            PropertyId::BorderRightStyle => (Self::BorderStyle, Side::Right),
            PropertyId::BorderBottomStyle => (Self::BorderStyle, Side::Bottom),
            PropertyId::BorderLeftStyle => (Self::BorderStyle, Side::Left),
            PropertyId::BorderTopColor => (Self::BorderColor, Side::Top),
            PropertyId::BorderRightColor => (Self::BorderColor, Side::Right),
            PropertyId::BorderBottomColor => (Self::BorderColor, Side::Bottom),
            PropertyId::BorderLeftColor => (Self::BorderColor, Side::Left),
            _ => return None,
        };
        Some(found)
    }
}

/// `auto`, `none` or a length.
fn length_value(value: &Value, lengths: &LengthContext) -> Option<Length> {
    match value {
        Value::Auto => Some(Length::Auto),
        Value::None => Some(Length::None),
        Value::Length(length) => Some(lengths.length(*length)),
        _ => None,
    }
}

fn shadows(value: &Value, lengths: &LengthContext) -> Option<Vec<Shadow>> {
    let resolve = |length: SpecifiedLength| lengths.px(length).unwrap_or(0.0);
    match value {
        Value::None => Some(Vec::new()),
        Value::Shadows(list) => Some(
            list.iter()
                .map(|shadow: &SpecifiedShadow| Shadow {
                    offset_x: resolve(shadow.offset_x),
                    offset_y: resolve(shadow.offset_y),
                    blur: resolve(shadow.blur),
                    color: shadow.color,
                })
                .collect(),
        ),
        _ => None,
    }
}

fn url_or_none(value: &Value) -> Option<Option<String>> {
    match value {
        Value::None => Some(None),
        Value::Url(url) => Some(Some(url.clone())),
        _ => None,
    }
}

fn set_font_size(style: &mut ComputedStyle, config: &StyleConfig, specified_px: f32) {
    style.set_specified_font_size(specified_px);
    style.set_font_size(config.clamp_font_size(specified_px));
}

fn apply_side_value(
    kind: SideProperty,
    side: Side,
    value: &Value,
    style: &mut ComputedStyle,
    lengths: &LengthContext,
) -> bool {
    match (kind, value) {
        (SideProperty::Offset, _) => {
            let Some(length) = length_value(value, lengths) else {
                return false;
            };
            style.set_offset(side, length);
        }
        (SideProperty::Margin, _) => {
            let Some(length) = length_value(value, lengths) else {
                return false;
            };
            style.set_margin(side, length);
        }
        (SideProperty::Padding, Value::Length(length)) => {
            style.set_padding(side, lengths.length(*length));
        }
        (SideProperty::BorderWidth, Value::Length(length)) => {
            let Some(px) = lengths.px(*length) else {
                return false;
            };
            style.set_border_width(side, px.max(0.0));
        }
        (SideProperty::BorderStyle, Value::BorderStyle(border_style)) => {
            style.set_border_style(side, *border_style);
        }
        (SideProperty::BorderStyle, Value::None) => style.set_border_style(side, BorderStyle::None),
        (SideProperty::BorderColor, Value::Color(color)) => style.set_border_color(side, *color),
        _ => return false,
    }
    true
}

fn apply_inherited_value(
    property: PropertyId,
    value: &Value,
    style: &mut ComputedStyle,
    ctx: &ApplyContext<'_>,
    lengths: &LengthContext,
) -> bool {
    let parent = ctx.inherited();
    match (property, value) {
        (PropertyId::Color, Value::Color(color)) => style.set_color(color.resolve(parent.color())),
        (PropertyId::FontFamily, Value::FontFamily(families)) => {
            style.set_font_families(families.clone());
        }
        (PropertyId::FontSize, Value::FontSize(keyword)) => {
            let medium = ctx.config.default_font_size_px;
            let px = keyword_font_size(*keyword, medium, lengths.font_size);
            set_font_size(style, ctx.config, px);
        }
        (PropertyId::FontSize, Value::Length(length)) => {
            set_font_size(style, ctx.config, length_font_size(*length, lengths));
        }
        (PropertyId::FontStyle, Value::FontStyle(font_style)) => style.set_font_style(*font_style),
        (PropertyId::FontVariant, Value::FontVariant(variant)) => style.set_font_variant(*variant),
        (PropertyId::FontWeight, Value::FontWeight(weight)) => {
            style.set_font_weight(font_weight(*weight, parent.font_weight()));
        }
        (PropertyId::FontWeight, Value::Normal) => style.set_font_weight(400),
        (PropertyId::LineHeight, Value::Normal) => style.set_line_height(LineHeight::Normal),
        (PropertyId::LineHeight, Value::Number(factor)) => {
            style.set_line_height(LineHeight::Number(*factor));
        }
        (PropertyId::LineHeight, Value::Length(length)) => {
            let px = lengths
                .px(*length)
                .unwrap_or(lengths.font_size * length.value / 100.0);
            style.set_line_height(LineHeight::Fixed(px));
        }
        (PropertyId::LetterSpacing | PropertyId::WordSpacing, Value::Normal) => {
            set_spacing(property, style, 0.0);
        }
        (PropertyId::LetterSpacing | PropertyId::WordSpacing, Value::Length(length)) => {
            let Some(px) = lengths.px(*length) else {
                return false;
            };
            set_spacing(property, style, px);
        }
        (PropertyId::TextIndent, Value::Length(length)) => {
            style.set_text_indent(lengths.length(*length));
        }
        (PropertyId::TextAlign, Value::TextAlign(align)) => style.set_text_align(*align),
        (PropertyId::TextTransform, Value::TextTransform(transform)) => {
            style.set_text_transform(*transform);
        }
        (PropertyId::TextShadow, _) => {
            let Some(list) = shadows(value, lengths) else {
                return false;
            };
            style.set_text_shadow(list);
        }
        (PropertyId::Direction, Value::Direction(direction)) => style.set_direction(*direction),
        (PropertyId::WhiteSpace, Value::WhiteSpace(white_space)) => {
            style.set_white_space(*white_space);
        }
        (PropertyId::WordWrap, Value::WordWrap(wrap)) => style.set_word_wrap(*wrap),
        (PropertyId::Visibility, Value::Visibility(visibility)) => {
            style.set_visibility(*visibility);
        }
        (PropertyId::ListStyleType, Value::ListStyleType(list_type)) => {
            style.set_list_style_type(*list_type);
        }
        (PropertyId::ListStyleType, Value::None) => style.set_list_style_type(ListStyleType::None),
        (PropertyId::ListStylePosition, Value::ListStylePosition(list_position)) => {
            style.set_list_style_position(*list_position);
        }
        (PropertyId::ListStyleImage, _) => {
            let Some(image) = url_or_none(value) else {
                return false;
            };
            style.set_list_style_image(image);
        }
        (PropertyId::BorderCollapse, Value::BorderCollapse(collapse)) => {
            style.set_border_collapse(*collapse);
        }
        (
            PropertyId::BorderSpacingHorizontal | PropertyId::BorderSpacingVertical,
            Value::Length(length),
        ) => {
            let Some(px) = lengths.px(*length) else {
                return false;
            };
            if property == PropertyId::BorderSpacingHorizontal {
                style.set_border_spacing_horizontal(px);
            } else {
                style.set_border_spacing_vertical(px);
            }
        }
        (PropertyId::CaptionSide, Value::CaptionSide(caption)) => style.set_caption_side(*caption),
        (PropertyId::EmptyCells, Value::EmptyCells(cells)) => style.set_empty_cells(*cells),
        (PropertyId::Cursor, Value::Cursor(cursor)) => style.set_cursor(*cursor),
        (PropertyId::Cursor, Value::Auto) => style.set_cursor(Cursor::Auto),
        (PropertyId::Quotes, Value::Quotes(pairs)) => style.set_quotes(Some(pairs.clone())),
        (PropertyId::Quotes, Value::None) => style.set_quotes(Some(Vec::new())),
        (PropertyId::Widows | PropertyId::Orphans, Value::Integer(count)) => {
            let count = u16::try_from((*count).max(1)).unwrap_or(u16::MAX);
            if property == PropertyId::Widows {
                style.set_widows(count);
            } else {
                style.set_orphans(count);
            }
        }
        _ => return false,
    }
    true
}

fn set_spacing(property: PropertyId, style: &mut ComputedStyle, px: f32) {
    if property == PropertyId::LetterSpacing {
        style.set_letter_spacing(px);
    } else {
        style.set_word_spacing(px);
    }
}

fn clip_rect(sides: &[Option<SpecifiedLength>; 4], lengths: &LengthContext) -> ClipRect {
    let side = |length: Option<SpecifiedLength>| length.map_or(Length::Auto, |len| lengths.length(len));
    ClipRect {
        edges: Edges {
            top: side(sides[0]),
            right: side(sides[1]),
            bottom: side(sides[2]),
            left: side(sides[3]),
        },
    }
}

fn vertical_align(keyword: VerticalAlignKeyword) -> VerticalAlign {
    match keyword {
        VerticalAlignKeyword::Baseline => VerticalAlign::Baseline,
        VerticalAlignKeyword::Sub => VerticalAlign::Sub,
        VerticalAlignKeyword::Super => VerticalAlign::Super,
        VerticalAlignKeyword::Top => VerticalAlign::Top,
        VerticalAlignKeyword::TextTop => VerticalAlign::TextTop,
        VerticalAlignKeyword::Middle => VerticalAlign::Middle,
        VerticalAlignKeyword::Bottom => VerticalAlign::Bottom,
        VerticalAlignKeyword::TextBottom => VerticalAlign::TextBottom,
    }
}

/// Sizes along one axis, keyed by property.
fn set_size(property: PropertyId, style: &mut ComputedStyle, length: Length) {
    match property {
        PropertyId::Width => style.set_width(length),
        PropertyId::Height => style.set_height(length),
        PropertyId::MinWidth => style.set_min_width(length),
        PropertyId::MinHeight => style.set_min_height(length),
        PropertyId::MaxWidth => style.set_max_width(length),
        _ => style.set_max_height(length),
    }
}

fn apply_non_inherited_value(
    property: PropertyId,
    value: &Value,
    style: &mut ComputedStyle,
    lengths: &LengthContext,
) -> bool {
    match (property, value) {
        (PropertyId::Display, Value::Display(display)) => style.set_display(*display),
        (PropertyId::Position, Value::Position(position)) => style.set_position(*position),
        (PropertyId::Float, Value::Float(float)) => style.set_float(*float),
        (PropertyId::Float, Value::None) => style.set_float(Float::None),
        (PropertyId::Clear, Value::Clear(clear)) => style.set_clear(*clear),
        (PropertyId::Clear, Value::None) => style.set_clear(Clear::None),
        (PropertyId::OverflowX, Value::Overflow(overflow)) => style.set_overflow_x(*overflow),
        (PropertyId::OverflowY, Value::Overflow(overflow)) => style.set_overflow_y(*overflow),
        (PropertyId::TableLayout, Value::TableLayout(layout)) => style.set_table_layout(*layout),
        (PropertyId::TableLayout, Value::Auto) => style.set_table_layout(TableLayout::Auto),
        (PropertyId::ZIndex, Value::Auto) => style.set_z_index(None),
        (PropertyId::ZIndex, Value::Integer(z_index)) => style.set_z_index(Some(*z_index)),
        (
            PropertyId::Width
            | PropertyId::Height
            | PropertyId::MinWidth
            | PropertyId::MinHeight
            | PropertyId::MaxWidth
            | PropertyId::MaxHeight,
            _,
        ) => {
            let Some(length) = length_value(value, lengths) else {
                return false;
            };
            set_size(property, style, length);
        }
        (PropertyId::VerticalAlign, Value::VerticalAlign(keyword)) => {
            style.set_vertical_align(vertical_align(*keyword));
        }
        (PropertyId::VerticalAlign, Value::Length(length)) => {
            style.set_vertical_align(VerticalAlign::Length(lengths.length(*length)));
        }
        (PropertyId::BoxSizing, Value::BoxSizing(sizing)) => style.set_box_sizing(*sizing),
        (PropertyId::BackgroundColor, Value::Color(color)) => style.set_background_color(*color),
        (PropertyId::BackgroundImage, _) => {
            let Some(image) = url_or_none(value) else {
                return false;
            };
            style.set_background_image(image);
        }
        (PropertyId::OutlineWidth, Value::Length(length)) => {
            let Some(px) = lengths.px(*length) else {
                return false;
            };
            style.set_outline_width(px.max(0.0));
        }
        (PropertyId::OutlineStyle, Value::BorderStyle(outline)) => style.set_outline_style(*outline),
        (PropertyId::OutlineStyle, Value::None) => style.set_outline_style(BorderStyle::None),
        (PropertyId::OutlineColor, Value::Color(color)) => style.set_outline_color(*color),
        (PropertyId::Clip, Value::Auto) => style.set_clip(None),
        (PropertyId::Clip, Value::Rect(sides)) => style.set_clip(Some(clip_rect(sides, lengths))),
        (PropertyId::TextDecoration, Value::TextDecoration(lines)) => {
            style.set_text_decoration(*lines);
        }
        (PropertyId::TextDecoration, Value::None) => {
            style.set_text_decoration(TextDecorationLine::empty());
        }
        (PropertyId::Content, Value::Normal | Value::None) => style.set_content(None),
        (PropertyId::Content, Value::Content(items)) => {
            style.set_content(Some(items.clone()));
        }
        (PropertyId::CounterIncrement, Value::Counters(counters)) => {
            style.set_counter_increment(counters.clone());
        }
        (PropertyId::CounterIncrement, Value::None) => style.set_counter_increment(Vec::new()),
        (PropertyId::CounterReset, Value::Counters(counters)) => {
            style.set_counter_reset(counters.clone());
        }
        (PropertyId::CounterReset, Value::None) => style.set_counter_reset(Vec::new()),
        (PropertyId::Opacity, Value::Number(opacity)) => style.set_opacity(opacity.clamp(0.0, 1.0)),
        (PropertyId::BoxShadow, _) => {
            let Some(list) = shadows(value, lengths) else {
                return false;
            };
            style.set_box_shadow(list);
        }
        _ => return false,
    }
    true
}

/// Copy the computed value of `property` from `from` into `to`.
fn copy_property(property: PropertyId, from: &ComputedStyle, to: &mut ComputedStyle) {
    if let Some((kind, side)) = SideProperty::of(property) {
        match kind {
            SideProperty::Offset => to.set_offset(side, from.offset(side)),
            SideProperty::Margin => to.set_margin(side, from.margin(side)),
            SideProperty::Padding => to.set_padding(side, from.padding(side)),
            SideProperty::BorderWidth => {
                to.set_border_width(side, from.specified_border_width(side));
            }
            SideProperty::BorderStyle => to.set_border_style(side, from.border_style(side)),
            SideProperty::BorderColor => to.set_border_color(side, from.border_color(side)),
        }
    } else if property.is_inherited() {
        copy_inherited(property, from, to);
    } else {
        copy_non_inherited(property, from, to);
    }
}

fn copy_inherited(property: PropertyId, from: &ComputedStyle, to: &mut ComputedStyle) {
    match property {
        PropertyId::Color => to.set_color(from.color()),
        PropertyId::FontFamily => to.set_font_families(from.font_families().clone()),
        PropertyId::FontSize => {
            to.set_specified_font_size(from.specified_font_size());
            to.set_font_size(from.font_size());
        }
        PropertyId::FontStyle => to.set_font_style(from.font_style()),
        PropertyId::FontVariant => to.set_font_variant(from.font_variant()),
        PropertyId::FontWeight => to.set_font_weight(from.font_weight()),
        PropertyId::LineHeight => to.set_line_height(from.line_height()),
        PropertyId::LetterSpacing => to.set_letter_spacing(from.letter_spacing()),
        PropertyId::WordSpacing => to.set_word_spacing(from.word_spacing()),
        PropertyId::TextIndent => to.set_text_indent(from.text_indent()),
        PropertyId::TextAlign => to.set_text_align(from.text_align()),
        PropertyId::TextTransform => to.set_text_transform(from.text_transform()),
        PropertyId::TextShadow => to.set_text_shadow(from.text_shadow().clone()),
        PropertyId::Direction => to.set_direction(from.direction()),
        PropertyId::WhiteSpace => to.set_white_space(from.white_space()),
        PropertyId::WordWrap => to.set_word_wrap(from.word_wrap()),
        PropertyId::Visibility => to.set_visibility(from.visibility()),
        PropertyId::ListStyleType => to.set_list_style_type(from.list_style_type()),
        PropertyId::ListStylePosition => to.set_list_style_position(from.list_style_position()),
        PropertyId::ListStyleImage => to.set_list_style_image(from.list_style_image().clone()),
        PropertyId::BorderCollapse => to.set_border_collapse(from.border_collapse()),
        PropertyId::BorderSpacingHorizontal => {
            to.set_border_spacing_horizontal(from.border_spacing_horizontal());
        }
        PropertyId::BorderSpacingVertical => {
            to.set_border_spacing_vertical(from.border_spacing_vertical());
        }
        PropertyId::CaptionSide => to.set_caption_side(from.caption_side()),
        PropertyId::EmptyCells => to.set_empty_cells(from.empty_cells()),
        PropertyId::Cursor => to.set_cursor(from.cursor()),
        PropertyId::Quotes => to.set_quotes(from.quotes().clone()),
        PropertyId::Widows => to.set_widows(from.widows()),
        PropertyId::Orphans => to.set_orphans(from.orphans()),
        _ => {}
    }
}

fn copy_non_inherited(property: PropertyId, from: &ComputedStyle, to: &mut ComputedStyle) {
    match property {
        PropertyId::Display => to.set_display(from.display()),
        PropertyId::Position => to.set_position(from.position()),
        PropertyId::Float => to.set_float(from.float()),
        PropertyId::Clear => to.set_clear(from.clear()),
        PropertyId::OverflowX => to.set_overflow_x(from.overflow_x()),
        PropertyId::OverflowY => to.set_overflow_y(from.overflow_y()),
        PropertyId::TableLayout => to.set_table_layout(from.table_layout()),
        PropertyId::ZIndex => to.set_z_index(from.z_index()),
        PropertyId::Width => to.set_width(from.width()),
        PropertyId::Height => to.set_height(from.height()),
        PropertyId::MinWidth => to.set_min_width(from.min_width()),
        PropertyId::MinHeight => to.set_min_height(from.min_height()),
        PropertyId::MaxWidth => to.set_max_width(from.max_width()),
        PropertyId::MaxHeight => to.set_max_height(from.max_height()),
        PropertyId::VerticalAlign => to.set_vertical_align(from.vertical_align()),
        PropertyId::BoxSizing => to.set_box_sizing(from.box_sizing()),
        PropertyId::BackgroundColor => to.set_background_color(from.background_color()),
        PropertyId::BackgroundImage => to.set_background_image(from.background_image().clone()),
        PropertyId::OutlineWidth => to.set_outline_width(from.outline_width_specified()),
        PropertyId::OutlineStyle => to.set_outline_style(from.outline_style()),
        PropertyId::OutlineColor => to.set_outline_color(from.outline_color()),
        PropertyId::Clip => to.set_clip(from.clip()),
        PropertyId::TextDecoration => to.set_text_decoration(from.text_decoration()),
        PropertyId::Content => to.set_content(from.content().clone()),
        PropertyId::CounterIncrement => to.set_counter_increment(from.counter_increment().clone()),
        PropertyId::CounterReset => to.set_counter_reset(from.counter_reset().clone()),
        PropertyId::Opacity => to.set_opacity(from.opacity()),
        PropertyId::BoxShadow => to.set_box_shadow(from.box_shadow().clone()),
        _ => {}
    }
}
