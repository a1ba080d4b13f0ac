/// Error types for dashboard configuration
use thiserror::Error;

/// Errors raised while loading or validating a dashboard configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration document is not valid JSON for `DashboardConfig`
    #[error("Failed to parse dashboard config: {0}")]
    Parse(#[from] serde_json::Error),

    /// No category labels were configured
    #[error("No category labels configured")]
    NoLabels,

    /// The labels do not reach the last sample of the current period
    #[error("Category labels do not cover the current period (labels: {labels}, samples: {samples})")]
    LabelsTooShort { labels: usize, samples: usize },

    /// The y-axis step must be a positive number
    #[error("Axis step must be positive (got {0})")]
    InvalidStep(f64),
}

/// Type alias for Results using ConfigError
pub type Result<T> = std::result::Result<T, ConfigError>;
