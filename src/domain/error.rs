use thiserror::Error;

/// Rejected engine configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("gridSize must be greater than zero")]
    ZeroGridSize,

    #[error("particle speeds must be finite and positive (got {min}..{max})")]
    InvalidSpeed { min: f64, max: f64 },

    #[error("particleSpeedMin ({min}) exceeds particleSpeedMax ({max})")]
    InvertedSpeedRange { min: f64, max: f64 },

    #[error("particleColors must not be empty")]
    EmptyPalette,

    #[error("trailLength must be greater than zero")]
    ZeroTrailLength,

    #[error("trailDotRadius must be finite and positive (got {0})")]
    InvalidTrailDotRadius(f64),

    #[error("rippleDuration must be finite and positive (got {0})")]
    InvalidRippleDuration(f64),

    #[error("rippleMaxRadius must be finite and positive (got {0})")]
    InvalidRippleRadius(f64),

    #[error("lineProbeLimit must be greater than zero")]
    ZeroProbeLimit,

    #[error("glyphAlphabet must not be empty")]
    EmptyGlyphAlphabet,
}

/// Line allocation gave up: every probe hit a claimed line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no free grid line after {attempts} probes")]
pub struct Unavailable {
    pub attempts: u32,
}
