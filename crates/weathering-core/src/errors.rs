use thiserror::Error;

/// Error type for invalid operations.
#[derive(Error, Debug)]
pub enum WeatheringError {
    #[error("step count must be at least 1, got {0}")]
    InvalidStepCount(usize),
    #[error("parameter '{name}' must be finite, got {value}")]
    NonFiniteParameter { name: &'static str, value: f64 },
    #[error("failed to read configuration: {0}")]
    ConfigIo(#[from] std::io::Error),
    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

/// Convenience type for `Result<T, WeatheringError>`.
pub type WeatheringResult<T> = Result<T, WeatheringError>;
