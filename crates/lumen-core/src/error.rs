use std::path::PathBuf;

/// Failure to generate a gradient from a palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PaletteError {
    #[error("palette has no color stops")]
    EmptyPalette,
    #[error("can't generate a gradient of {0} px, at least 2 are required")]
    InvalidSize(usize),
}

/// Failure to load a [`GradientConfig`](crate::config::GradientConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid gradient config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("gradient config defines no palettes")]
    NoPalettes,
}
