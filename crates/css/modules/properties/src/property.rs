//! Property identifiers.

macro_rules! define_properties {
    (
        inherited { $($inh_variant:ident => $inh_name:literal,)* }
        non_inherited { $($non_variant:ident => $non_name:literal,)* }
    ) => {
        /// Every property the engine understands, plus a catch-all for the
        /// ones it does not.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum PropertyId {
            $($inh_variant,)*
            $($non_variant,)*
            /// A property this engine does not implement; ignored when applied.
            Unknown(u16),
        }

        impl PropertyId {
            /// All known properties, inherited first.
            pub const ALL: &'static [Self] = &[$(Self::$inh_variant,)* $(Self::$non_variant,)*];

            /// CSS name of the property.
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$inh_variant => $inh_name,)*
                    $(Self::$non_variant => $non_name,)*
                    Self::Unknown(_) => "<unknown>",
                }
            }

            /// Look up a property by its CSS name (ASCII case-insensitive).
            pub fn from_name(name: &str) -> Option<Self> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|property| property.name().eq_ignore_ascii_case(name))
            }

            /// True if the property inherits by default.
            pub const fn is_inherited(self) -> bool {
                matches!(self, $(Self::$inh_variant)|*)
            }
        }
    };
}

define_properties! {
    inherited {
        Color => "color",
        FontFamily => "font-family",
        FontSize => "font-size",
        FontStyle => "font-style",
        FontVariant => "font-variant",
        FontWeight => "font-weight",
        LineHeight => "line-height",
        LetterSpacing => "letter-spacing",
        WordSpacing => "word-spacing",
        TextIndent => "text-indent",
        TextAlign => "text-align",
        TextTransform => "text-transform",
        TextShadow => "text-shadow",
        Direction => "direction",
        WhiteSpace => "white-space",
        WordWrap => "word-wrap",
        Visibility => "visibility",
        ListStyleType => "list-style-type",
        ListStylePosition => "list-style-position",
        ListStyleImage => "list-style-image",
        BorderCollapse => "border-collapse",
        BorderSpacingHorizontal => "-khtml-border-horizontal-spacing",
        BorderSpacingVertical => "-khtml-border-vertical-spacing",
        CaptionSide => "caption-side",
        EmptyCells => "empty-cells",
        Cursor => "cursor",
        Quotes => "quotes",
        Widows => "widows",
        Orphans => "orphans",
    }
    non_inherited {
        Display => "display",
        Position => "position",
        Float => "float",
        Clear => "clear",
        OverflowX => "overflow-x",
        OverflowY => "overflow-y",
        TableLayout => "table-layout",
        ZIndex => "z-index",
        Width => "width",
        Height => "height",
        MinWidth => "min-width",
        MinHeight => "min-height",
        MaxWidth => "max-width",
        MaxHeight => "max-height",
        VerticalAlign => "vertical-align",
        BoxSizing => "box-sizing",
        Top => "top",
        Right => "right",
        Bottom => "bottom",
        Left => "left",
        MarginTop => "margin-top",
        MarginRight => "margin-right",
        MarginBottom => "margin-bottom",
        MarginLeft => "margin-left",
        PaddingTop => "padding-top",
        PaddingRight => "padding-right",
        PaddingBottom => "padding-bottom",
        PaddingLeft => "padding-left",
        BorderTopWidth => "border-top-width",
        BorderRightWidth => "border-right-width",
        BorderBottomWidth => "border-bottom-width",
        BorderLeftWidth => "border-left-width",
        BorderTopStyle => "border-top-style",
        BorderRightStyle => "border-right-style",
        BorderBottomStyle => "border-bottom-style",
        BorderLeftStyle => "border-left-style",
        BorderTopColor => "border-top-color",
        BorderRightColor => "border-right-color",
        BorderBottomColor => "border-bottom-color",
        BorderLeftColor => "border-left-color",
        BackgroundColor => "background-color",
        BackgroundImage => "background-image",
        OutlineWidth => "outline-width",
        OutlineStyle => "outline-style",
        OutlineColor => "outline-color",
        Clip => "clip",
        TextDecoration => "text-decoration",
        Content => "content",
        CounterIncrement => "counter-increment",
        CounterReset => "counter-reset",
        Opacity => "opacity",
        BoxShadow => "box-shadow",
    }
}

impl PropertyId {
    /// Properties applied before all others so that font-relative lengths
    /// resolve against the element's final font.
    pub const fn is_early(self) -> bool {
        matches!(
            self,
            Self::FontFamily
                | Self::FontSize
                | Self::FontStyle
                | Self::FontVariant
                | Self::FontWeight
        )
    }
}

#[cfg(test)]
mod tests {
    use super::PropertyId;

    #[test]
    fn names_round_trip_and_unknown_is_neither() {
        assert_eq!(PropertyId::from_name("Font-Size"), Some(PropertyId::FontSize));
        assert_eq!(PropertyId::from_name("-webkit-nonsense"), None);
        assert!(PropertyId::Color.is_inherited());
        assert!(!PropertyId::Width.is_inherited());
        assert!(!PropertyId::Unknown(7).is_inherited());
        assert!(!PropertyId::Unknown(7).is_early());
        assert!(PropertyId::FontWeight.is_early());
        assert!(!PropertyId::Color.is_early());
    }
}
