//! Engine configuration
//!
//! Loaded once from the host as camelCase JSON; any key may be omitted and
//! falls back to the stock look. `validate()` is the only gate: the systems
//! downstream assume a config that passed it.

use serde::{Deserialize, Serialize};

use crate::core::Rgba;
use super::error::ConfigError;

pub const DEFAULT_GLYPH_ALPHABET: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!@#$%^&*()_+-=[]{}|;':,./<>?";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineConfig {
    /// Grid cell size in px; line keys are multiples of this
    pub grid_size: u32,
    pub grid_color: Rgba,
    pub particle_count: usize,
    pub particle_speed_min: f64,
    pub particle_speed_max: f64,
    pub particle_colors: Vec<Rgba>,
    /// Trail capacity in points
    pub trail_length: usize,
    pub background_color: Rgba,
    /// Ripple lifetime in ms
    pub ripple_duration: f64,
    pub ripple_max_radius: f64,

    pub trail_dot_radius: f64,
    /// Probes per line allocation before giving up
    pub line_probe_limit: u32,
    pub ripple_color: Rgba,
    pub glyph_font: String,
    pub glyph_alphabet: String,
    pub rng_seed: Option<u32>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            grid_size: 40,
            grid_color: Rgba::rgb(0x33, 0x41, 0x55),
            particle_count: 50,
            particle_speed_min: 0.5,
            particle_speed_max: 5.0,
            particle_colors: vec![
                Rgba::rgb(0x30, 0xB8, 0x52),
                Rgba::rgb(0x00, 0x74, 0x1d),
                Rgba::rgb(0x94, 0xa3, 0xb8),
            ],
            trail_length: 100,
            background_color: Rgba::BLACK,
            ripple_duration: 2000.0,
            ripple_max_radius: 200.0,
            trail_dot_radius: 0.4,
            line_probe_limit: 100,
            ripple_color: Rgba::WHITE,
            glyph_font: "16px monospace".to_string(),
            glyph_alphabet: DEFAULT_GLYPH_ALPHABET.to_string(),
            rng_seed: None,
        }
    }
}

fn finite_positive(v: f64) -> bool {
    v.is_finite() && v > 0.0
}

impl EngineConfig {
    /// Parse a (possibly partial) JSON config and validate it
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        // Every field serializes to a plain JSON value.
        serde_json::to_string(self).unwrap_or_default()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size == 0 {
            return Err(ConfigError::ZeroGridSize);
        }
        let (min, max) = (self.particle_speed_min, self.particle_speed_max);
        if !finite_positive(min) || !finite_positive(max) {
            return Err(ConfigError::InvalidSpeed { min, max });
        }
        if min > max {
            return Err(ConfigError::InvertedSpeedRange { min, max });
        }
        if self.particle_colors.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        if self.trail_length == 0 {
            return Err(ConfigError::ZeroTrailLength);
        }
        if !finite_positive(self.trail_dot_radius) {
            return Err(ConfigError::InvalidTrailDotRadius(self.trail_dot_radius));
        }
        if !finite_positive(self.ripple_duration) {
            return Err(ConfigError::InvalidRippleDuration(self.ripple_duration));
        }
        if !finite_positive(self.ripple_max_radius) {
            return Err(ConfigError::InvalidRippleRadius(self.ripple_max_radius));
        }
        if self.line_probe_limit == 0 {
            return Err(ConfigError::ZeroProbeLimit);
        }
        if self.glyph_alphabet.is_empty() {
            return Err(ConfigError::EmptyGlyphAlphabet);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = EngineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.grid_size, 40);
        assert_eq!(config.particle_colors.len(), 3);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config = EngineConfig::from_json(
            r##"{"gridSize": 20, "particleColors": ["#fff", "rgba(1, 2, 3, 0.5)"], "rngSeed": 7}"##,
        )
        .unwrap();
        assert_eq!(config.grid_size, 20);
        assert_eq!(config.particle_colors[0], Rgba::WHITE);
        assert_eq!(config.particle_colors[1], Rgba::rgba(1, 2, 3, 0.5));
        assert_eq!(config.rng_seed, Some(7));
        assert_eq!(config.trail_length, 100);
    }

    #[test]
    fn bad_color_surfaces_as_json_error() {
        let err = EngineConfig::from_json(r#"{"gridColor": "teal-ish"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn rejects_inverted_speed_range() {
        let err = EngineConfig::from_json(r#"{"particleSpeedMin": 6, "particleSpeedMax": 2}"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvertedSpeedRange { .. }));
    }

    #[test]
    fn rejects_degenerate_values() {
        let cases: Vec<(&str, fn(&ConfigError) -> bool)> = vec![
            (r#"{"gridSize": 0}"#, |e| matches!(e, ConfigError::ZeroGridSize)),
            (r#"{"particleSpeedMin": 0}"#, |e| matches!(e, ConfigError::InvalidSpeed { .. })),
            (r#"{"particleColors": []}"#, |e| matches!(e, ConfigError::EmptyPalette)),
            (r#"{"trailLength": 0}"#, |e| matches!(e, ConfigError::ZeroTrailLength)),
            (r#"{"rippleDuration": -1}"#, |e| matches!(e, ConfigError::InvalidRippleDuration(_))),
            (r#"{"rippleMaxRadius": 0}"#, |e| matches!(e, ConfigError::InvalidRippleRadius(_))),
            (r#"{"lineProbeLimit": 0}"#, |e| matches!(e, ConfigError::ZeroProbeLimit)),
            (r#"{"glyphAlphabet": ""}"#, |e| matches!(e, ConfigError::EmptyGlyphAlphabet)),
        ];
        for (json, check) in cases {
            let err = EngineConfig::from_json(json).unwrap_err();
            assert!(check(&err), "{json}: unexpected {err}");
        }
    }

    #[test]
    fn json_round_trip_keeps_colors() {
        let config = EngineConfig::default();
        let back = EngineConfig::from_json(&config.to_json()).unwrap();
        assert_eq!(back, config);
    }
}
