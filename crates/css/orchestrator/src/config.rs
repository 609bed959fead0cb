//! Style engine configuration.
//!
//! Values can be built programmatically or read from the environment.

use core::str::FromStr;
use std::env;

/// Runtime configuration for style computation.
#[derive(Clone, Debug, PartialEq)]
pub struct StyleConfig {
    /// Pixel size of `font-size: medium`; the keyword scale derives from it.
    pub default_font_size_px: f32,
    /// Computed font sizes never drop below this. Zero disables the floor.
    pub minimum_font_size_px: f32,
    /// Whether siblings with identical matching inputs share style groups.
    pub style_sharing: bool,
    /// How many previous siblings are considered for sharing.
    pub sharing_scan_limit: usize,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            default_font_size_px: 16.0,
            minimum_font_size_px: 0.0,
            style_sharing: true,
            sharing_scan_limit: 10,
        }
    }
}

fn parse_env<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|raw| raw.trim().parse::<T>().ok())
}

impl StyleConfig {
    /// Load configuration from environment variables, falling back to the
    /// defaults for anything unset or unparsable.
    ///
    /// - `RESTYLE_DEFAULT_FONT_SIZE`: medium font size in px (default: 16)
    /// - `RESTYLE_MINIMUM_FONT_SIZE`: minimum font size in px (default: 0)
    /// - `RESTYLE_SHARING`: set to "0" to disable style sharing
    /// - `RESTYLE_SHARING_SCAN_LIMIT`: siblings scanned for sharing (default: 10)
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let default_font_size_px = parse_env::<f32>("RESTYLE_DEFAULT_FONT_SIZE")
            .filter(|size| size.is_finite() && *size > 0.0)
            .unwrap_or(defaults.default_font_size_px);
        let minimum_font_size_px = parse_env::<f32>("RESTYLE_MINIMUM_FONT_SIZE")
            .filter(|size| size.is_finite() && *size >= 0.0)
            .unwrap_or(defaults.minimum_font_size_px);
        let style_sharing = env::var("RESTYLE_SHARING")
            .map_or(defaults.style_sharing, |raw| raw.trim() != "0");
        let sharing_scan_limit = parse_env::<usize>("RESTYLE_SHARING_SCAN_LIMIT")
            .unwrap_or(defaults.sharing_scan_limit);
        let config = Self {
            default_font_size_px,
            minimum_font_size_px,
            style_sharing,
            sharing_scan_limit,
        };
        log::debug!(target: "css_orchestrator", "style config: {config:?}");
        config
    }

    /// Apply the minimum font size to a specified size.
    #[inline]
    pub fn clamp_font_size(&self, specified_px: f32) -> f32 {
        specified_px.max(self.minimum_font_size_px)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimum_font_size_only_raises() {
        let config = StyleConfig {
            minimum_font_size_px: 9.0,
            ..StyleConfig::default()
        };
        assert!((config.clamp_font_size(6.0) - 9.0).abs() < f32::EPSILON);
        assert!((config.clamp_font_size(12.0) - 12.0).abs() < f32::EPSILON);
        assert!((StyleConfig::default().clamp_font_size(1.0) - 1.0).abs() < f32::EPSILON);
    }
}
