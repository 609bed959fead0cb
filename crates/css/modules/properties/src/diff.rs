//! Style difference classification.
//!
//! `diff` tells a layout engine the least work that makes its output match a
//! new style. Classes are ordered by cost, so callers fold many results with
//! `max`.

use crate::style::ComputedStyle;
use crate::values::{Display, Position};
use css_selectors::PseudoElement;

/// Cost of moving from one computed style to another, cheapest first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Difference {
    #[default]
    Equal,
    /// Repaint only.
    Visible,
    /// Only the offset of a positioned box moved.
    Position,
    /// The box itself needs layout.
    Layout,
    /// The containing block needs layout.
    ContainingBlockLayout,
}

impl Difference {
    /// Pseudo-elements that can never trigger layout on their own.
    const fn cap_for(self, pseudo: PseudoElement) -> Self {
        match pseudo {
            PseudoElement::FirstLine | PseudoElement::Selection => {
                if matches!(self, Self::Equal) {
                    Self::Equal
                } else {
                    Self::Visible
                }
            }
            _ => self,
        }
    }
}

/// Classify the change from `old` to `new`, including pseudo-element styles.
pub fn diff(old: &ComputedStyle, new: &ComputedStyle) -> Difference {
    let own = diff_own(old, new);
    if own == Difference::ContainingBlockLayout {
        return own;
    }
    own.max(diff_pseudo_styles(old, new))
}

fn diff_pseudo_styles(old: &ComputedStyle, new: &ComputedStyle) -> Difference {
    PseudoElement::ALL
        .into_iter()
        .map(|pseudo| {
            let raw = match (old.get_pseudo_style(pseudo), new.get_pseudo_style(pseudo)) {
                (None, None) => Difference::Equal,
                (Some(old_pseudo), Some(new_pseudo)) => diff(old_pseudo, new_pseudo),
                // Gaining or losing a generated box is a layout change.
                _ => Difference::Layout,
            };
            raw.cap_for(pseudo)
        })
        .max()
        .unwrap_or_default()
}

fn diff_own(old: &ComputedStyle, new: &ComputedStyle) -> Difference {
    if needs_containing_block_layout(old, new) {
        return Difference::ContainingBlockLayout;
    }
    if needs_layout(old, new) {
        return Difference::Layout;
    }
    if !old.surround.ptr_eq(&new.surround) {
        let geometry_changed = old.surround.offset != new.surround.offset
            || old.surround.margin != new.surround.margin
            || old.surround.padding != new.surround.padding
            || old.surround.border.widths != new.surround.border.widths
            || old.surround.border.styles != new.surround.border.styles;
        if geometry_changed {
            return position_or_layout(old, new);
        }
    }
    if needs_repaint(old, new) {
        return Difference::Visible;
    }
    Difference::Equal
}

fn needs_containing_block_layout(old: &ComputedStyle, new: &ComputedStyle) -> bool {
    let old_box = &*old.box_data;
    let new_box = &*new.box_data;
    let box_changed = !old.box_data.ptr_eq(&new.box_data)
        && (old_box.width != new_box.width
            || old_box.height != new_box.height
            || old_box.min_width != new_box.min_width
            || old_box.min_height != new_box.min_height
            || old_box.max_width != new_box.max_width
            || old_box.max_height != new_box.max_height
            || old_box.box_sizing != new_box.box_sizing);
    if box_changed || old.visual.clip != new.visual.clip {
        return true;
    }
    if old.display() != new.display()
        || old.position() != new.position()
        || old.float() != new.float()
    {
        return true;
    }
    if !old.inherited.ptr_eq(&new.inherited) {
        let old_inh = &*old.inherited;
        let new_inh = &*new.inherited;
        if old_inh.text_indent != new_inh.text_indent
            || old_inh.line_height != new_inh.line_height
            || old_inh.list_style_image != new_inh.list_style_image
            || old_inh.font != new_inh.font
            || (old_inh.letter_spacing, old_inh.word_spacing)
                != (new_inh.letter_spacing, new_inh.word_spacing)
            || (
                old_inh.border_spacing_horizontal,
                old_inh.border_spacing_vertical,
            ) != (
                new_inh.border_spacing_horizontal,
                new_inh.border_spacing_vertical,
            )
        {
            return true;
        }
    }
    new.display().is_table_part()
        && (old.empty_cells() != new.empty_cells()
            || old.caption_side() != new.caption_side()
            || old.border_collapse() != new.border_collapse()
            || old.table_layout() != new.table_layout())
}

fn needs_layout(old: &ComputedStyle, new: &ComputedStyle) -> bool {
    if new.display() == Display::ListItem
        && (old.list_style_type() != new.list_style_type()
            || old.list_style_position() != new.list_style_position())
    {
        return true;
    }
    old.text_align() != new.text_align()
        || old.text_transform() != new.text_transform()
        || old.direction() != new.direction()
        || old.white_space() != new.white_space()
        || old.clear() != new.clear()
        || old.overflow_x() != new.overflow_x()
        || old.overflow_y() != new.overflow_y()
        || old.vertical_align() != new.vertical_align()
        || old.word_wrap() != new.word_wrap()
        || old.widows() != new.widows()
        || old.orphans() != new.orphans()
        || old.quotes() != new.quotes()
        || old.generated != new.generated
}

/// Offsets-only moves of a positioned box are a `Position` change.
fn position_or_layout(old: &ComputedStyle, new: &ComputedStyle) -> Difference {
    if !old.surround.has_same_pbm(&new.surround) || !new.is_positioned() {
        return Difference::Layout;
    }
    let horizontal_definite = !(new.left().is_auto() && new.right().is_auto());
    let vertical_definite = !(new.top().is_auto() && new.bottom().is_auto());
    if new.position() == Position::Relative
        || (horizontal_definite && vertical_definite)
    {
        Difference::Position
    } else {
        Difference::Layout
    }
}

fn needs_repaint(old: &ComputedStyle, new: &ComputedStyle) -> bool {
    old.color() != new.color()
        || old.visibility() != new.visibility()
        || old.text_decorations_in_effect() != new.text_decorations_in_effect()
        || old.text_decoration() != new.text_decoration()
        || old.background != new.background
        || old.surround.border.colors != new.surround.border.colors
        || old.extended != new.extended
        || old.text_shadow() != new.text_shadow()
        || old.z_index() != new.z_index()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::DefaultStyle;
    use crate::values::{Color, Length, Rgba, Side};

    #[test]
    fn identical_and_shared_styles_are_equal() {
        let defaults = DefaultStyle::new();
        let style = defaults.fresh();
        assert_eq!(diff(&style, &style), Difference::Equal);
        let mut copy = defaults.fresh();
        copy.set_width(Length::Fixed(1.0));
        copy.set_width(Length::Auto);
        assert_eq!(diff(&style, &copy), Difference::Equal);
    }

    #[test]
    fn relative_offset_change_is_position() {
        let defaults = DefaultStyle::new();
        let mut old = defaults.fresh();
        old.set_position(Position::Relative);
        let mut new = old.clone();
        new.set_offset(Side::Left, Length::Fixed(10.0));
        assert_eq!(diff(&old, &new), Difference::Position);

        new.set_margin(Side::Left, Length::Fixed(1.0));
        assert_eq!(diff(&old, &new), Difference::Layout);
    }

    #[test]
    fn absolute_offset_needs_both_axes() {
        let defaults = DefaultStyle::new();
        let mut old = defaults.fresh();
        old.set_position(Position::Absolute);
        old.set_offset(Side::Top, Length::Fixed(0.0));
        let mut new = old.clone();
        new.set_offset(Side::Top, Length::Fixed(5.0));
        assert_eq!(diff(&old, &new), Difference::Layout);

        old.set_offset(Side::Left, Length::Fixed(0.0));
        new.set_offset(Side::Left, Length::Fixed(0.0));
        assert_eq!(diff(&old, &new), Difference::Position);
    }

    #[test]
    fn border_color_is_visible_but_border_width_is_layout() {
        let defaults = DefaultStyle::new();
        let old = defaults.fresh();
        let mut new = old.clone();
        new.set_border_color(Side::Top, Color::Rgba(Rgba::opaque(255, 0, 0)));
        assert_eq!(diff(&old, &new), Difference::Visible);
        new.set_border_width(Side::Top, 1.0);
        assert_eq!(diff(&old, &new), Difference::Layout);
    }

    #[test]
    fn first_line_changes_are_capped_at_visible() {
        let defaults = DefaultStyle::new();
        let old = defaults.fresh();
        let mut old_with = old.clone();
        let mut first_line = defaults.fresh_pseudo(PseudoElement::FirstLine, &old);
        old_with.add_pseudo_style(first_line.clone());
        first_line.set_font_size(40.0);
        let mut new_with = old.clone();
        new_with.add_pseudo_style(first_line);
        assert_eq!(diff(&old_with, &new_with), Difference::Visible);
        assert_eq!(diff(&old, &old_with), Difference::Visible);

        let mut with_before = old.clone();
        with_before.add_pseudo_style(defaults.fresh_pseudo(PseudoElement::Before, &old));
        assert_eq!(diff(&old, &with_before), Difference::Layout);
    }
}
