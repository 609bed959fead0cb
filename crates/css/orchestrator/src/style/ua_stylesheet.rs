//! User-agent stylesheet implementation.
//!
//! Provides default styling rules for HTML elements according to browser defaults
//! and the HTML Standard rendering section, plus the extra rules applied in quirks mode.

use css_cascade::{DocumentMode, Origin, Rule, Stylesheet, StylesheetSet};
use css_properties::{
    BorderStyle, BoxSizing, Declaration, DeclarationBlock, Display, FontSizeKeyword, FontStyle,
    FontWeight, ListStyleType, Overflow, PropertyId, TextDecorationLine, Value,
    VerticalAlignKeyword, WhiteSpace,
};
use css_selectors::{
    AttrOperator, AttributeSelector, ComplexSelector, CompoundSelector, SelectorList,
};

/// Block-level HTML elements.
const BLOCK_LEVEL_ELEMENTS: &[&str] = &[
    "html",
    "body",
    "div",
    "p",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "ul",
    "ol",
    "dl",
    "dt",
    "dd",
    "blockquote",
    "pre",
    "form",
    "fieldset",
    "legend",
    "section",
    "article",
    "aside",
    "header",
    "footer",
    "main",
    "nav",
    "address",
    "figure",
    "figcaption",
    "details",
    "summary",
    "dialog",
    "hr",
    "center",
];

/// Metadata elements that never render.
const HIDDEN_ELEMENTS: &[&str] = &[
    "head", "meta", "title", "link", "style", "script", "base", "template", "noscript",
];

/// Table elements and the internal table display each one gets.
const TABLE_DISPLAYS: &[(&str, Display)] = &[
    ("table", Display::Table),
    ("thead", Display::TableHeaderGroup),
    ("tbody", Display::TableRowGroup),
    ("tfoot", Display::TableFooterGroup),
    ("tr", Display::TableRow),
    ("td", Display::TableCell),
    ("th", Display::TableCell),
    ("col", Display::TableColumn),
    ("colgroup", Display::TableColumnGroup),
    ("caption", Display::TableCaption),
];

/// Heading sizes in `em`, matching common browser defaults.
const HEADING_SIZES: &[(&str, f32)] = &[
    ("h1", 2.0),
    ("h2", 1.5),
    ("h3", 1.17),
    ("h4", 1.0),
    ("h5", 0.83),
    ("h6", 0.67),
];

/// A selector list with one type selector per tag.
fn tags(names: &[&str]) -> SelectorList {
    SelectorList {
        selectors: names
            .iter()
            .map(|name| ComplexSelector::compound(CompoundSelector::tag(name)))
            .collect(),
    }
}

/// Helper to create a UA rule with given selector and declarations.
fn make_ua_rule(selectors: impl Into<SelectorList>, props: &[(PropertyId, Value)]) -> Rule {
    Rule::new(
        selectors,
        props
            .iter()
            .map(|(property, value)| Declaration::new(*property, value.clone()))
            .collect::<DeclarationBlock>(),
    )
}

fn per_side(properties: [PropertyId; 4], value: &Value) -> Vec<(PropertyId, Value)> {
    properties
        .into_iter()
        .map(|property| (property, value.clone()))
        .collect()
}

const PADDING: [PropertyId; 4] = [
    PropertyId::PaddingTop,
    PropertyId::PaddingRight,
    PropertyId::PaddingBottom,
    PropertyId::PaddingLeft,
];

const BORDER_WIDTH: [PropertyId; 4] = [
    PropertyId::BorderTopWidth,
    PropertyId::BorderRightWidth,
    PropertyId::BorderBottomWidth,
    PropertyId::BorderLeftWidth,
];

const BORDER_STYLE: [PropertyId; 4] = [
    PropertyId::BorderTopStyle,
    PropertyId::BorderRightStyle,
    PropertyId::BorderBottomStyle,
    PropertyId::BorderLeftStyle,
];

const MARGIN: [PropertyId; 4] = [
    PropertyId::MarginTop,
    PropertyId::MarginRight,
    PropertyId::MarginBottom,
    PropertyId::MarginLeft,
];

/// Form control defaults.
fn form_control_rules() -> Vec<Rule> {
    let solid = Value::BorderStyle(BorderStyle::Solid);
    let mut input = vec![
        (PropertyId::Display, Value::Display(Display::InlineBlock)),
        (PropertyId::BoxSizing, Value::BoxSizing(BoxSizing::BorderBox)),
    ];
    input.extend(per_side(BORDER_WIDTH, &Value::px(2.0)));
    input.extend(per_side(BORDER_STYLE, &solid));

    let mut button = vec![
        (PropertyId::Display, Value::Display(Display::InlineBlock)),
        (PropertyId::BoxSizing, Value::BoxSizing(BoxSizing::BorderBox)),
        (PropertyId::MinHeight, Value::px(20.0)),
    ];
    button.extend(per_side(BORDER_WIDTH, &Value::px(1.0)));
    button.extend(per_side(BORDER_STYLE, &solid));

    let mut textarea = input.clone();
    textarea.extend(per_side(PADDING, &Value::px(2.0)));
    textarea.push((PropertyId::OverflowX, Value::Overflow(Overflow::Auto)));
    textarea.push((PropertyId::OverflowY, Value::Overflow(Overflow::Auto)));
    textarea.push((PropertyId::WhiteSpace, Value::WhiteSpace(WhiteSpace::PreWrap)));

    let toggle = |kind: &str| {
        CompoundSelector::tag("input").with_attr(AttributeSelector::new(
            "type",
            AttrOperator::Equals,
            kind,
        ))
    };
    let mut toggles = per_side(BORDER_WIDTH, &Value::px(0.0));
    toggles.extend(per_side(PADDING, &Value::px(0.0)));

    vec![
        make_ua_rule(CompoundSelector::tag("input"), &input),
        make_ua_rule(CompoundSelector::tag("button"), &button),
        make_ua_rule(CompoundSelector::tag("textarea"), &textarea),
        make_ua_rule(
            SelectorList {
                selectors: vec![
                    ComplexSelector::compound(toggle("checkbox")),
                    ComplexSelector::compound(toggle("radio")),
                ],
            },
            &toggles,
        ),
    ]
}

/// The user agent's default sheet.
pub fn create_ua_stylesheet() -> Stylesheet {
    let mut sheet = Stylesheet::new(Origin::UserAgent);

    sheet.rules.push(make_ua_rule(
        tags(BLOCK_LEVEL_ELEMENTS),
        &[(PropertyId::Display, Value::Display(Display::Block))],
    ));
    sheet.rules.push(make_ua_rule(
        tags(HIDDEN_ELEMENTS),
        &[(PropertyId::Display, Value::Display(Display::None))],
    ));
    sheet.rules.push(make_ua_rule(
        CompoundSelector::tag("li"),
        &[(PropertyId::Display, Value::Display(Display::ListItem))],
    ));
    for (tag, display) in TABLE_DISPLAYS {
        sheet.rules.push(make_ua_rule(
            CompoundSelector::tag(tag),
            &[(PropertyId::Display, Value::Display(*display))],
        ));
    }
    sheet.rules.push(make_ua_rule(
        tags(&["td", "th"]),
        &per_side(PADDING, &Value::px(1.0)),
    ));
    sheet.rules.push(make_ua_rule(
        tags(&["thead", "tbody", "tfoot", "tr", "td", "th"]),
        &[(
            PropertyId::VerticalAlign,
            Value::VerticalAlign(VerticalAlignKeyword::Middle),
        )],
    ));
    sheet.rules.push(make_ua_rule(
        CompoundSelector::tag("body"),
        &per_side(MARGIN, &Value::px(8.0)),
    ));
    sheet.rules.push(make_ua_rule(
        tags(&["ul", "ol"]),
        &[(PropertyId::PaddingLeft, Value::px(40.0))],
    ));
    sheet.rules.push(make_ua_rule(
        CompoundSelector::tag("ol"),
        &[(
            PropertyId::ListStyleType,
            Value::ListStyleType(ListStyleType::Decimal),
        )],
    ));

    for (tag, size) in HEADING_SIZES {
        sheet.rules.push(make_ua_rule(
            CompoundSelector::tag(tag),
            &[
                (
                    PropertyId::FontWeight,
                    Value::FontWeight(FontWeight::Weight(700)),
                ),
                (PropertyId::FontSize, Value::em(*size)),
            ],
        ));
    }
    sheet.rules.push(make_ua_rule(
        tags(&["b", "strong", "th"]),
        &[(PropertyId::FontWeight, Value::FontWeight(FontWeight::Bolder))],
    ));
    sheet.rules.push(make_ua_rule(
        tags(&["i", "em", "cite", "var", "address"]),
        &[(PropertyId::FontStyle, Value::FontStyle(FontStyle::Italic))],
    ));
    sheet.rules.push(make_ua_rule(
        tags(&["u", "ins"]),
        &[(
            PropertyId::TextDecoration,
            Value::TextDecoration(TextDecorationLine::UNDERLINE),
        )],
    ));
    sheet.rules.push(make_ua_rule(
        tags(&["s", "strike", "del"]),
        &[(
            PropertyId::TextDecoration,
            Value::TextDecoration(TextDecorationLine::LINE_THROUGH),
        )],
    ));
    sheet.rules.push(make_ua_rule(
        tags(&["small"]),
        &[(PropertyId::FontSize, Value::FontSize(FontSizeKeyword::Smaller))],
    ));
    sheet.rules.push(make_ua_rule(
        tags(&["big"]),
        &[(PropertyId::FontSize, Value::FontSize(FontSizeKeyword::Larger))],
    ));
    sheet.rules.push(make_ua_rule(
        tags(&["pre", "xmp", "listing", "plaintext"]),
        &[(PropertyId::WhiteSpace, Value::WhiteSpace(WhiteSpace::Pre))],
    ));

    sheet.rules.extend(form_control_rules());
    sheet
}

/// Rules that only apply to documents in quirks mode.
pub fn create_quirks_stylesheet() -> Stylesheet {
    let aligned_image = |side: &str| {
        CompoundSelector::tag("img").with_attr(AttributeSelector::new(
            "align",
            AttrOperator::Equals,
            side,
        ))
    };
    Stylesheet::new(Origin::UserAgentQuirks)
        // Tables do not inherit text properties in quirks mode.
        .with_rule(make_ua_rule(
            CompoundSelector::tag("table"),
            &[
                (PropertyId::WhiteSpace, Value::WhiteSpace(WhiteSpace::Normal)),
                (PropertyId::LineHeight, Value::Normal),
                (PropertyId::FontWeight, Value::FontWeight(FontWeight::Weight(400))),
                (PropertyId::FontSize, Value::FontSize(FontSizeKeyword::Medium)),
                (PropertyId::FontStyle, Value::FontStyle(FontStyle::Normal)),
            ],
        ))
        .with_rule(make_ua_rule(
            aligned_image("left"),
            &[(PropertyId::MarginRight, Value::px(3.0))],
        ))
        .with_rule(make_ua_rule(
            aligned_image("right"),
            &[(PropertyId::MarginLeft, Value::px(3.0))],
        ))
}

/// A stylesheet set for `mode` holding the user agent sheets followed by `sheets`.
pub fn stylesheet_set_with_defaults(
    mode: DocumentMode,
    sheets: impl IntoIterator<Item = Stylesheet>,
) -> StylesheetSet {
    let mut set = StylesheetSet::new(mode)
        .with_sheet(create_ua_stylesheet())
        .with_sheet(create_quirks_stylesheet());
    set.sheets.extend(sheets);
    set
}
