//! Error type for content lookups and rendering.

/// Errors produced while resolving routes or rendering content.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The path does not map to any page.
    #[error("no page is served at `{0}`")]
    UnknownRoute(String),

    /// JSON-LD could not be serialized.
    #[error("failed to serialize structured data: {0}")]
    Serialize(#[from] serde_json::Error),

    /// A theme token is not a `#RRGGBB` color.
    #[error("theme token `{token}` has invalid color `{value}` (expected #RRGGBB)")]
    InvalidColor {
        /// Token name, e.g. `accent`
        token: &'static str,
        /// The rejected value
        value: String,
    },
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
