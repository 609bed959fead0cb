//! Cross-property fixups run after all declarations are applied.
//! Reference: <https://www.w3.org/TR/CSS21/visuren.html#dis-pos-flo>

use css_properties::{ComputedStyle, Display, Float, Overflow, Position};

/// Adjust `style` for combinations that constrain each other.
pub fn adjust_style(style: &mut ComputedStyle, is_root: bool) {
    style.set_original_display(style.display());

    if style.display() != Display::None {
        let out_of_flow = style.position().is_out_of_flow();
        if out_of_flow {
            style.set_float(Float::None);
        }
        if is_root || out_of_flow || style.is_floating() {
            style.set_display(style.display().blockified());
        }
    }

    if style.position() == Position::Relative
        && matches!(
            style.display(),
            Display::TableRow
                | Display::TableRowGroup
                | Display::TableHeaderGroup
                | Display::TableFooterGroup
        )
    {
        style.set_position(Position::Static);
    }

    // After the row reset, so demoted rows lose their stacking level too.
    if style.position() == Position::Static {
        style.set_z_index(None);
    }

    adjust_text_decorations(style);
    adjust_overflow(style);
}

/// Decorations propagate from ancestors except into inline-blocks, tables,
/// floats and out-of-flow boxes, which start over with their own.
fn adjust_text_decorations(style: &mut ComputedStyle) {
    let own = style.text_decoration();
    let isolated = matches!(
        style.display(),
        Display::InlineBlock | Display::Table | Display::InlineTable
    ) || style.is_floating()
        || style.position().is_out_of_flow();
    let in_effect = if isolated {
        own
    } else {
        style.text_decorations_in_effect() | own
    };
    style.set_text_decorations_in_effect(in_effect);
}

fn adjust_overflow(style: &mut ComputedStyle) {
    if matches!(style.display(), Display::Table | Display::InlineTable) {
        for (current, set) in [
            (style.overflow_x(), ComputedStyle::set_overflow_x as fn(&mut ComputedStyle, Overflow)),
            (style.overflow_y(), ComputedStyle::set_overflow_y),
        ] {
            if matches!(current, Overflow::Auto | Overflow::Scroll) {
                set(style, Overflow::Visible);
            }
        }
    }

    let horizontal = style.overflow_x();
    let vertical = style.overflow_y();
    if horizontal == Overflow::Visible && vertical != Overflow::Visible {
        style.set_overflow_x(Overflow::Auto);
    } else if vertical == Overflow::Visible && horizontal != Overflow::Visible {
        style.set_overflow_y(Overflow::Auto);
    }
}
