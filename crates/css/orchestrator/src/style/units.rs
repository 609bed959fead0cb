//! Specified-to-computed conversions for lengths, font sizes and weights.

use css_properties::{FontSizeKeyword, FontWeight, Length, LengthUnit, SpecifiedLength};

const PX_PER_INCH: f32 = 96.0;

/// Scale of each absolute size keyword relative to `medium`.
const KEYWORD_SCALE: [f32; 7] = [3.0 / 5.0, 3.0 / 4.0, 8.0 / 9.0, 1.0, 6.0 / 5.0, 3.0 / 2.0, 2.0];

/// Ratio between adjacent sizes for `larger` and `smaller`.
const RELATIVE_STEP: f32 = 1.2;

/// Font metrics in effect for the element whose lengths are being resolved.
#[derive(Clone, Copy, Debug)]
pub struct LengthContext {
    pub font_size: f32,
    pub x_height: f32,
    pub root_font_size: f32,
}

impl LengthContext {
    /// Absolute pixels, or `None` for a percentage.
    pub fn px(&self, length: SpecifiedLength) -> Option<f32> {
        let value = length.value;
        let pixels = match length.unit {
            LengthUnit::Px => value,
            LengthUnit::Em => value * self.font_size,
            LengthUnit::Ex => value * self.x_height,
            LengthUnit::Rem => value * self.root_font_size,
            LengthUnit::Pt => value * PX_PER_INCH / 72.0,
            LengthUnit::Pc => value * PX_PER_INCH / 6.0,
            LengthUnit::In => value * PX_PER_INCH,
            LengthUnit::Cm => value * PX_PER_INCH / 2.54,
            LengthUnit::Mm => value * PX_PER_INCH / 25.4,
            LengthUnit::Percent => return None,
        };
        Some(pixels)
    }

    /// Computed length; percentages stay relative.
    pub fn length(&self, length: SpecifiedLength) -> Length {
        self.px(length)
            .map_or(Length::Percent(length.value), Length::Fixed)
    }
}

/// Pixel size of an absolute or relative size keyword.
pub fn keyword_font_size(keyword: FontSizeKeyword, medium: f32, parent_size: f32) -> f32 {
    let scale_index = match keyword {
        FontSizeKeyword::XxSmall => 0,
        FontSizeKeyword::XSmall => 1,
        FontSizeKeyword::Small => 2,
        FontSizeKeyword::Medium => 3,
        FontSizeKeyword::Large => 4,
        FontSizeKeyword::XLarge => 5,
        FontSizeKeyword::XxLarge => 6,
        FontSizeKeyword::Larger => return parent_size * RELATIVE_STEP,
        FontSizeKeyword::Smaller => return parent_size / RELATIVE_STEP,
    };
    medium * KEYWORD_SCALE[scale_index]
}

/// `font-size` given as a length: `em`, `ex` and percentages are relative
/// to the parent's font.
pub fn length_font_size(length: SpecifiedLength, parent: &LengthContext) -> f32 {
    match length.unit {
        LengthUnit::Percent => parent.font_size * length.value / 100.0,
        _ => parent.px(length).unwrap_or(parent.font_size),
    }
}

/// Numeric weight for a specified `font-weight`.
pub const fn font_weight(weight: FontWeight, parent_weight: u16) -> u16 {
    match weight {
        FontWeight::Weight(value) => value,
        FontWeight::Bolder => match parent_weight {
            0..=300 => 400,
            301..=500 => 700,
            _ => 900,
        },
        FontWeight::Lighter => match parent_weight {
            0..=500 => 100,
            501..=700 => 400,
            _ => 700,
        },
    }
}
