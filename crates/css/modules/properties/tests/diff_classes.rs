#![cfg(test)]

use css_properties::{
    Color, ComputedStyle, DefaultStyle, Difference, Display, Float, Length, LineHeight, Overflow,
    Position, PseudoElement, Rgba, Side, TextAlign, Visibility, diff,
};

/// A style with a bit of everything set, to diff against.
fn busy_style(defaults: &DefaultStyle) -> ComputedStyle {
    let mut style = defaults.fresh();
    style.set_display(Display::Block);
    style.set_width(Length::Fixed(200.0));
    style.set_margin(Side::Top, Length::Fixed(8.0));
    style.set_padding(Side::Left, Length::Percent(5.0));
    style.set_color(Rgba::opaque(10, 20, 30));
    style.set_background_color(Color::Rgba(Rgba::opaque(255, 255, 255)));
    style.set_line_height(LineHeight::Number(1.5));
    let before = defaults.fresh_pseudo(PseudoElement::Before, &style);
    style.add_pseudo_style(before);
    style
}

/// Apply `change` to a copy of `base` and classify it.
fn classify(base: &ComputedStyle, change: impl FnOnce(&mut ComputedStyle)) -> Difference {
    let mut changed = base.clone();
    change(&mut changed);
    diff(base, &changed)
}

#[test]
fn a_style_equals_itself() {
    let _ = env_logger::builder().is_test(true).try_init();
    let defaults = DefaultStyle::new();
    let plain = defaults.fresh();
    let busy = busy_style(&defaults);
    assert_eq!(diff(&plain, &plain), Difference::Equal);
    assert_eq!(diff(&busy, &busy), Difference::Equal);
    // Independently built but equal by value.
    assert_eq!(diff(&busy, &busy_style(&defaults)), Difference::Equal);
}

#[test]
fn paint_only_properties_are_visible() {
    let defaults = DefaultStyle::new();
    let base = busy_style(&defaults);
    let visible = [
        classify(&base, |style| {
            style.set_background_color(Color::Rgba(Rgba::opaque(0, 0, 255)));
        }),
        classify(&base, |style| style.set_color(Rgba::opaque(1, 1, 1))),
        classify(&base, |style| style.set_opacity(0.25)),
        classify(&base, |style| style.set_visibility(Visibility::Hidden)),
        classify(&base, |style| {
            style.set_outline_color(Color::Rgba(Rgba::opaque(9, 9, 9)));
        }),
    ];
    for result in visible {
        assert_eq!(result, Difference::Visible);
    }
}

#[test]
fn geometry_properties_need_layout() {
    let defaults = DefaultStyle::new();
    let base = busy_style(&defaults);
    assert!(classify(&base, |style| style.set_width(Length::Fixed(201.0))) >= Difference::Layout);
    assert!(classify(&base, |style| style.set_font_size(30.0)) >= Difference::Layout);
    assert!(
        classify(&base, |style| style.set_margin(Side::Top, Length::Fixed(9.0)))
            >= Difference::Layout
    );
    assert_eq!(
        classify(&base, |style| style.set_text_align(TextAlign::Center)),
        Difference::Layout
    );
    assert_eq!(
        classify(&base, |style| style.set_overflow_x(Overflow::Hidden)),
        Difference::Layout
    );
    assert_eq!(
        classify(&base, |style| style.set_float(Float::Left)),
        Difference::ContainingBlockLayout
    );
}

#[test]
fn relative_left_move_is_position() {
    let defaults = DefaultStyle::new();
    let mut base = busy_style(&defaults);
    base.set_position(Position::Relative);
    assert_eq!(
        classify(&base, |style| style.set_offset(Side::Left, Length::Fixed(12.0))),
        Difference::Position
    );
}

#[test]
fn pseudo_style_changes_fold_into_the_result() {
    let defaults = DefaultStyle::new();
    let base = busy_style(&defaults);
    let result = classify(&base, |style| {
        if let Some(mut before) = style.remove_pseudo_style(PseudoElement::Before) {
            before.set_width(Length::Fixed(3.0));
            style.add_pseudo_style(before);
        }
    });
    assert_eq!(result, Difference::ContainingBlockLayout);
    assert_eq!(
        classify(&base, |style| {
            style.remove_pseudo_style(PseudoElement::Before);
        }),
        Difference::Layout
    );
}

#[test]
fn independently_built_siblings_can_be_compacted() {
    let defaults = DefaultStyle::new();
    let mut first = busy_style(&defaults);
    let second = busy_style(&defaults);
    assert!(first.non_inherited_groups_equal(&second));
    let shared_before = first.shared_group_count(&second);
    first.compact_with(&second);
    assert!(first.shared_group_count(&second) > shared_before);
    assert_eq!(first.shared_group_count(&second), 8);
    assert_eq!(diff(&first, &second), Difference::Equal);
}
