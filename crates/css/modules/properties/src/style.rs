//! The computed style object.

use crate::groups::{
    BackgroundData, BoxData, DataRef, ExtendedData, ExtendedInheritedData, FontData,
    GeneratedData, InheritedData, InheritedFlags, LineHeight, NonInheritedFlags, SurroundData,
    VisualData,
};
use crate::values::{
    BorderCollapse, BorderStyle, BoxSizing, CaptionSide, Clear, ClipRect, Color, ContentItem,
    CounterDirective, Cursor, Direction, Display, EmptyCells, Float, FontStyle, FontVariant,
    Length, ListStylePosition, ListStyleType, Overflow, Position, Rgba, Shadow, Side,
    TableLayout, TextAlign, TextDecorationLine, TextTransform, VerticalAlign, Visibility,
    WhiteSpace, WordWrap,
};
use css_selectors::PseudoElement;
use smallvec::SmallVec;

#[inline]
fn same<T: PartialEq>(current: &T, value: &T) -> bool {
    current == value
}

/// Getter and copy-on-write setter for a `Copy` field of a group.
/// The setter leaves a shared group alone when the value is unchanged.
macro_rules! group_accessors {
    ($($group:ident . $($field:ident).+ => $getter:ident, $setter:ident : $ty:ty;)*) => {
        $(
            #[inline]
            pub fn $getter(&self) -> $ty {
                self.$group.$($field).+
            }

            #[inline]
            pub fn $setter(&mut self, value: $ty) {
                if !same(&self.$group.$($field).+, &value) {
                    self.$group.access().$($field).+ = value;
                }
            }
        )*
    };
}

/// Like `group_accessors!` for owned values; the getter borrows.
macro_rules! group_ref_accessors {
    ($($group:ident . $($field:ident).+ => $getter:ident, $setter:ident : $ty:ty;)*) => {
        $(
            #[inline]
            pub fn $getter(&self) -> &$ty {
                &self.$group.$($field).+
            }

            #[inline]
            pub fn $setter(&mut self, value: $ty) {
                if !same(&self.$group.$($field).+, &value) {
                    self.$group.access().$($field).+ = value;
                }
            }
        )*
    };
}

/// Accessors for fields stored by value in the flag structs.
macro_rules! flag_accessors {
    ($($flags:ident . $field:ident => $getter:ident, $setter:ident : $ty:ty;)*) => {
        $(
            #[inline]
            pub fn $getter(&self) -> $ty {
                self.$flags.$field
            }

            #[inline]
            pub fn $setter(&mut self, value: $ty) {
                self.$flags.$field = value;
            }
        )*
    };
}

/// Pseudo-element side styles; at most one per pseudo-element.
type PseudoStyles = SmallVec<(PseudoElement, Box<ComputedStyle>), 2>;

/// Fully resolved style of one element or pseudo-element.
#[derive(Clone, Debug, PartialEq)]
pub struct ComputedStyle {
    pub(crate) box_data: DataRef<BoxData>,
    pub(crate) visual: DataRef<VisualData>,
    pub(crate) background: DataRef<BackgroundData>,
    pub(crate) surround: DataRef<SurroundData>,
    pub(crate) generated: DataRef<GeneratedData>,
    pub(crate) extended: DataRef<ExtendedData>,
    pub(crate) extended_inherited: DataRef<ExtendedInheritedData>,
    pub(crate) inherited: DataRef<InheritedData>,
    pub(crate) inherited_flags: InheritedFlags,
    pub(crate) non_inherited_flags: NonInheritedFlags,
    pseudo_styles: PseudoStyles,
}

impl Default for ComputedStyle {
    /// Initial values in freshly allocated groups. Prefer
    /// [`crate::DefaultStyle::fresh`], which shares them.
    fn default() -> Self {
        Self {
            box_data: DataRef::new(BoxData::default()),
            visual: DataRef::new(VisualData::default()),
            background: DataRef::new(BackgroundData::default()),
            surround: DataRef::new(SurroundData::default()),
            generated: DataRef::new(GeneratedData::default()),
            extended: DataRef::new(ExtendedData::default()),
            extended_inherited: DataRef::new(ExtendedInheritedData::default()),
            inherited: DataRef::new(InheritedData::default()),
            inherited_flags: InheritedFlags::default(),
            non_inherited_flags: NonInheritedFlags::default(),
            pseudo_styles: SmallVec::new(),
        }
    }
}

impl ComputedStyle {
    group_accessors! {
        box_data.width => width, set_width: Length;
        box_data.height => height, set_height: Length;
        box_data.min_width => min_width, set_min_width: Length;
        box_data.min_height => min_height, set_min_height: Length;
        box_data.max_width => max_width, set_max_width: Length;
        box_data.max_height => max_height, set_max_height: Length;
        box_data.vertical_align => vertical_align, set_vertical_align: VerticalAlign;
        box_data.box_sizing => box_sizing, set_box_sizing: BoxSizing;
        box_data.z_index => z_index, set_z_index: Option<i32>;
        visual.clip => clip, set_clip: Option<ClipRect>;
        visual.text_decoration => text_decoration, set_text_decoration: TextDecorationLine;
        background.color => background_color, set_background_color: Color;
        background.outline_width => outline_width_specified, set_outline_width: f32;
        background.outline_style => outline_style, set_outline_style: BorderStyle;
        background.outline_color => outline_color, set_outline_color: Color;
        extended.opacity => opacity, set_opacity: f32;
        extended_inherited.word_wrap => word_wrap, set_word_wrap: WordWrap;
        inherited.color => color, set_color: Rgba;
        inherited.font.computed_size => font_size, set_font_size: f32;
        inherited.font.specified_size => specified_font_size, set_specified_font_size: f32;
        inherited.font.weight => font_weight, set_font_weight: u16;
        inherited.font.style => font_style, set_font_style: FontStyle;
        inherited.font.variant => font_variant, set_font_variant: FontVariant;
        inherited.line_height => line_height, set_line_height: LineHeight;
        inherited.text_indent => text_indent, set_text_indent: Length;
        inherited.letter_spacing => letter_spacing, set_letter_spacing: f32;
        inherited.word_spacing => word_spacing, set_word_spacing: f32;
        inherited.border_spacing_horizontal => border_spacing_horizontal, set_border_spacing_horizontal: f32;
        inherited.border_spacing_vertical => border_spacing_vertical, set_border_spacing_vertical: f32;
        inherited.widows => widows, set_widows: u16;
        inherited.orphans => orphans, set_orphans: u16;
    }

    group_ref_accessors! {
        background.image => background_image, set_background_image: Option<String>;
        generated.content => content, set_content: Option<Vec<ContentItem>>;
        generated.counter_increment => counter_increment, set_counter_increment: Vec<CounterDirective>;
        generated.counter_reset => counter_reset, set_counter_reset: Vec<CounterDirective>;
        extended.box_shadow => box_shadow, set_box_shadow: Vec<Shadow>;
        extended_inherited.text_shadow => text_shadow, set_text_shadow: Vec<Shadow>;
        inherited.font.families => font_families, set_font_families: Vec<String>;
        inherited.list_style_image => list_style_image, set_list_style_image: Option<String>;
        inherited.quotes => quotes, set_quotes: Option<Vec<(String, String)>>;
    }

    flag_accessors! {
        inherited_flags.visibility => visibility, set_visibility: Visibility;
        inherited_flags.white_space => white_space, set_white_space: WhiteSpace;
        inherited_flags.text_align => text_align, set_text_align: TextAlign;
        inherited_flags.text_transform => text_transform, set_text_transform: TextTransform;
        inherited_flags.direction => direction, set_direction: Direction;
        inherited_flags.list_style_type => list_style_type, set_list_style_type: ListStyleType;
        inherited_flags.list_style_position => list_style_position, set_list_style_position: ListStylePosition;
        inherited_flags.border_collapse => border_collapse, set_border_collapse: BorderCollapse;
        inherited_flags.caption_side => caption_side, set_caption_side: CaptionSide;
        inherited_flags.empty_cells => empty_cells, set_empty_cells: EmptyCells;
        inherited_flags.cursor => cursor, set_cursor: Cursor;
        inherited_flags.text_decorations_in_effect => text_decorations_in_effect, set_text_decorations_in_effect: TextDecorationLine;
        non_inherited_flags.display => display, set_display: Display;
        non_inherited_flags.original_display => original_display, set_original_display: Display;
        non_inherited_flags.position => position, set_position: Position;
        non_inherited_flags.float => float, set_float: Float;
        non_inherited_flags.clear => clear, set_clear: Clear;
        non_inherited_flags.overflow_x => overflow_x, set_overflow_x: Overflow;
        non_inherited_flags.overflow_y => overflow_y, set_overflow_y: Overflow;
        non_inherited_flags.table_layout => table_layout, set_table_layout: TableLayout;
        non_inherited_flags.style_type => style_type, set_style_type: Option<PseudoElement>;
    }

    #[inline]
    pub fn font(&self) -> &FontData {
        &self.inherited.font
    }

    #[inline]
    pub fn set_font(&mut self, font: FontData) {
        if !same(&self.inherited.font, &font) {
            self.inherited.access().font = font;
        }
    }

    /// Positioning offset on one side.
    #[inline]
    pub fn offset(&self, side: Side) -> Length {
        *self.surround.offset.side(side)
    }

    #[inline]
    pub fn set_offset(&mut self, side: Side, value: Length) {
        if !same(self.surround.offset.side(side), &value) {
            *self.surround.access().offset.side_mut(side) = value;
        }
    }

    #[inline]
    pub fn top(&self) -> Length {
        self.offset(Side::Top)
    }

    #[inline]
    pub fn right(&self) -> Length {
        self.offset(Side::Right)
    }

    #[inline]
    pub fn bottom(&self) -> Length {
        self.offset(Side::Bottom)
    }

    #[inline]
    pub fn left(&self) -> Length {
        self.offset(Side::Left)
    }

    #[inline]
    pub fn margin(&self, side: Side) -> Length {
        *self.surround.margin.side(side)
    }

    #[inline]
    pub fn set_margin(&mut self, side: Side, value: Length) {
        if !same(self.surround.margin.side(side), &value) {
            *self.surround.access().margin.side_mut(side) = value;
        }
    }

    #[inline]
    pub fn padding(&self, side: Side) -> Length {
        *self.surround.padding.side(side)
    }

    #[inline]
    pub fn set_padding(&mut self, side: Side, value: Length) {
        if !same(self.surround.padding.side(side), &value) {
            *self.surround.access().padding.side_mut(side) = value;
        }
    }

    /// Used border width: zero when the side's style draws nothing.
    #[inline]
    pub fn border_width(&self, side: Side) -> f32 {
        if self.border_style(side).has_width() {
            *self.surround.border.widths.side(side)
        } else {
            0.0
        }
    }

    /// Border width as specified, whatever the style.
    #[inline]
    pub fn specified_border_width(&self, side: Side) -> f32 {
        *self.surround.border.widths.side(side)
    }

    #[inline]
    pub fn set_border_width(&mut self, side: Side, value: f32) {
        if !same(self.surround.border.widths.side(side), &value) {
            *self.surround.access().border.widths.side_mut(side) = value;
        }
    }

    #[inline]
    pub fn border_style(&self, side: Side) -> BorderStyle {
        *self.surround.border.styles.side(side)
    }

    #[inline]
    pub fn set_border_style(&mut self, side: Side, value: BorderStyle) {
        if !same(self.surround.border.styles.side(side), &value) {
            *self.surround.access().border.styles.side_mut(side) = value;
        }
    }

    #[inline]
    pub fn border_color(&self, side: Side) -> Color {
        *self.surround.border.colors.side(side)
    }

    #[inline]
    pub fn set_border_color(&mut self, side: Side, value: Color) {
        if !same(self.surround.border.colors.side(side), &value) {
            *self.surround.access().border.colors.side_mut(side) = value;
        }
    }

    /// Used outline width: zero when the outline style draws nothing.
    #[inline]
    pub fn outline_width(&self) -> f32 {
        if self.outline_style().has_width() {
            self.outline_width_specified()
        } else {
            0.0
        }
    }

    /// Any box whose `position` is not `static`.
    #[inline]
    pub fn is_positioned(&self) -> bool {
        self.position().is_positioned()
    }

    #[inline]
    pub fn is_floating(&self) -> bool {
        self.float() != Float::None
    }

    /// Share the parent's inherited groups. Generated `::before` and
    /// `::after` content preserves line breaks.
    pub fn inherit_from(&mut self, parent: &Self) {
        self.inherited = parent.inherited.clone();
        self.extended_inherited = parent.extended_inherited.clone();
        self.inherited_flags = parent.inherited_flags;
        if matches!(
            self.style_type(),
            Some(PseudoElement::Before | PseudoElement::After)
        ) {
            self.set_white_space(WhiteSpace::PreLine);
        }
    }

    /// Replace every group that equals `similar`'s by value but is a
    /// different allocation with `similar`'s allocation. Observable values
    /// do not change.
    pub fn compact_with(&mut self, similar: &Self) {
        fn adopt<T: Clone + PartialEq>(mine: &mut DataRef<T>, theirs: &DataRef<T>) {
            if !mine.ptr_eq(theirs) && mine.get() == theirs.get() {
                *mine = theirs.clone();
            }
        }
        adopt(&mut self.box_data, &similar.box_data);
        adopt(&mut self.visual, &similar.visual);
        adopt(&mut self.background, &similar.background);
        adopt(&mut self.surround, &similar.surround);
        adopt(&mut self.generated, &similar.generated);
        adopt(&mut self.extended, &similar.extended);
        adopt(&mut self.extended_inherited, &similar.extended_inherited);
        adopt(&mut self.inherited, &similar.inherited);
    }

    /// Number of groups (out of eight) held in the same allocation as `other`'s.
    pub fn shared_group_count(&self, other: &Self) -> usize {
        [
            self.box_data.ptr_eq(&other.box_data),
            self.visual.ptr_eq(&other.visual),
            self.background.ptr_eq(&other.background),
            self.surround.ptr_eq(&other.surround),
            self.generated.ptr_eq(&other.generated),
            self.extended.ptr_eq(&other.extended),
            self.extended_inherited.ptr_eq(&other.extended_inherited),
            self.inherited.ptr_eq(&other.inherited),
        ]
        .into_iter()
        .filter(|shared| *shared)
        .count()
    }

    /// True if every non-inherited group equals `other`'s by value, so that
    /// `compact_with` could share all of them.
    pub fn non_inherited_groups_equal(&self, other: &Self) -> bool {
        self.box_data == other.box_data
            && self.visual == other.visual
            && self.background == other.background
            && self.surround == other.surround
            && self.generated == other.generated
            && self.extended == other.extended
            && self.non_inherited_flags == other.non_inherited_flags
    }

    /// Attach a pseudo-element style. The style's `style_type` names the
    /// pseudo-element; an existing entry for it is replaced.
    pub fn add_pseudo_style(&mut self, style: Self) {
        debug_assert!(style.style_type().is_some(), "pseudo style without a style type");
        let Some(pseudo) = style.style_type() else {
            return;
        };
        let boxed = Box::new(style);
        if let Some(slot) = self
            .pseudo_styles
            .iter_mut()
            .find(|(existing, _)| *existing == pseudo)
        {
            slot.1 = boxed;
        } else {
            self.pseudo_styles.push((pseudo, boxed));
        }
    }

    pub fn get_pseudo_style(&self, pseudo: PseudoElement) -> Option<&Self> {
        self.pseudo_styles
            .iter()
            .find(|(existing, _)| *existing == pseudo)
            .map(|(_, style)| &**style)
    }

    /// Detach and return the style for `pseudo`.
    pub fn remove_pseudo_style(&mut self, pseudo: PseudoElement) -> Option<Self> {
        let index = self
            .pseudo_styles
            .iter()
            .position(|(existing, _)| *existing == pseudo)?;
        Some(*self.pseudo_styles.remove(index).1)
    }

    #[inline]
    pub fn has_pseudo_style(&self, pseudo: PseudoElement) -> bool {
        self.get_pseudo_style(pseudo).is_some()
    }

    /// All attached pseudo-element styles.
    pub fn pseudo_styles(&self) -> impl Iterator<Item = (PseudoElement, &Self)> {
        self.pseudo_styles
            .iter()
            .map(|(pseudo, style)| (*pseudo, &**style))
    }
}

/// The initial style every fresh computed style starts from. One value is
/// owned by each style-computation context; fresh styles share its groups.
#[derive(Clone, Debug)]
pub struct DefaultStyle {
    initial: ComputedStyle,
}

impl Default for DefaultStyle {
    fn default() -> Self {
        Self::new()
    }
}

impl DefaultStyle {
    /// Initial values with a 16px medium font.
    pub fn new() -> Self {
        Self::with_font_size(16.0)
    }

    /// Initial values with `font-size: medium` mapped to `medium_px`.
    pub fn with_font_size(medium_px: f32) -> Self {
        let mut initial = ComputedStyle::default();
        initial.set_font(FontData {
            specified_size: medium_px,
            computed_size: medium_px,
            ..FontData::default()
        });
        Self { initial }
    }

    #[inline]
    pub const fn initial(&self) -> &ComputedStyle {
        &self.initial
    }

    /// A new style sharing every group with the initial style.
    #[inline]
    pub fn fresh(&self) -> ComputedStyle {
        self.initial.clone()
    }

    /// A new style with initial non-inherited groups and, when given, the
    /// parent's inherited groups.
    pub fn fresh_for(&self, parent: Option<&ComputedStyle>) -> ComputedStyle {
        let mut style = self.fresh();
        if let Some(parent) = parent {
            style.inherit_from(parent);
        }
        style
    }

    /// A new style for `pseudo` inheriting from its originating element.
    pub fn fresh_pseudo(&self, pseudo: PseudoElement, originating: &ComputedStyle) -> ComputedStyle {
        let mut style = self.fresh();
        style.set_style_type(Some(pseudo));
        style.inherit_from(originating);
        style
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setter_clones_only_shared_groups() {
        let defaults = DefaultStyle::new();
        let mut style = defaults.fresh();
        assert_eq!(style.shared_group_count(defaults.initial()), 8);

        // Writing the current value keeps the group shared.
        style.set_width(Length::Auto);
        assert!(style.box_data.ptr_eq(&defaults.initial().box_data));

        style.set_width(Length::Fixed(10.0));
        assert!(!style.box_data.ptr_eq(&defaults.initial().box_data));
        assert_eq!(defaults.initial().width(), Length::Auto);
        assert_eq!(style.width(), Length::Fixed(10.0));
        assert_eq!(style.shared_group_count(defaults.initial()), 7);
    }

    #[test]
    fn inherit_from_shares_by_reference() {
        let defaults = DefaultStyle::new();
        let mut parent = defaults.fresh();
        parent.set_color(Rgba::opaque(1, 2, 3));
        parent.set_white_space(WhiteSpace::Pre);

        let child = defaults.fresh_for(Some(&parent));
        assert!(child.inherited.ptr_eq(&parent.inherited));
        assert_eq!(child.color(), Rgba::opaque(1, 2, 3));
        assert_eq!(child.white_space(), WhiteSpace::Pre);
        assert!(child.box_data.ptr_eq(&defaults.initial().box_data));

        let before = defaults.fresh_pseudo(PseudoElement::Before, &parent);
        assert_eq!(before.white_space(), WhiteSpace::PreLine);
        let first_line = defaults.fresh_pseudo(PseudoElement::FirstLine, &parent);
        assert_eq!(first_line.white_space(), WhiteSpace::Pre);
    }

    #[test]
    fn compact_with_shares_equal_groups() {
        let defaults = DefaultStyle::new();
        let mut first = defaults.fresh();
        let mut second = defaults.fresh();
        first.set_margin(Side::Top, Length::Fixed(4.0));
        second.set_margin(Side::Top, Length::Fixed(4.0));
        second.set_opacity(0.5);
        assert!(!first.surround.ptr_eq(&second.surround));

        second.compact_with(&first);
        assert!(first.surround.ptr_eq(&second.surround));
        assert!(!first.extended.ptr_eq(&second.extended));
        assert!((second.opacity() - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn pseudo_styles_are_unique_per_id() {
        let defaults = DefaultStyle::new();
        let mut style = defaults.fresh();
        let mut after = defaults.fresh_pseudo(PseudoElement::After, &style);
        after.set_color(Rgba::opaque(9, 9, 9));
        style.add_pseudo_style(after);
        style.add_pseudo_style(defaults.fresh_pseudo(PseudoElement::After, &style));
        assert_eq!(style.pseudo_styles().count(), 1);
        assert_eq!(
            style.get_pseudo_style(PseudoElement::After).map(ComputedStyle::color),
            Some(Rgba::BLACK)
        );
        assert!(style.remove_pseudo_style(PseudoElement::After).is_some());
        assert!(!style.has_pseudo_style(PseudoElement::After));
        assert!(style.remove_pseudo_style(PseudoElement::After).is_none());
    }

    #[test]
    fn border_width_is_zero_without_style() {
        let defaults = DefaultStyle::new();
        let mut style = defaults.fresh();
        style.set_border_width(Side::Left, 5.0);
        assert!(style.border_width(Side::Left).abs() < f32::EPSILON);
        style.set_border_style(Side::Left, BorderStyle::Solid);
        assert!((style.border_width(Side::Left) - 5.0).abs() < f32::EPSILON);
    }
}
