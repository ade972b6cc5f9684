/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised while parsing user-facing values into core types.
///
/// The progression rules themselves never fail: exhausted stock, a reached
/// daily cap, or an unknown mood are ordinary outcomes, not errors.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A mood name, key, or symbol did not match any of the seven moods.
    #[error("unknown mood: \"{0}\"")]
    UnknownMood(String),

    /// An activity tag did not match the tag catalog.
    #[error("unknown activity tag: \"{0}\"")]
    UnknownTag(String),

    /// A fortune level string did not match any tier.
    #[error("unknown fortune level: \"{0}\"")]
    UnknownFortuneLevel(String),

    /// A calendar month was out of range.
    #[error("invalid month: {year}-{month:02}")]
    InvalidMonth {
        /// The requested year.
        year: i32,
        /// The requested month (expected 1-12).
        month: u32,
    },
}
