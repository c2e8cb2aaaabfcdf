use thiserror::Error;

/// Errors of the fallible operations.
///
/// The conversion engine itself never fails: malformed hex resolves
/// to black.  Only strict parsing, palette editing and persistence
/// report errors.
#[derive(Debug, Error)]
pub enum Error {
    /// A character that is not an ASCII hex digit.
    #[error("invalid hex character '{0}'")]
    InvalidHex(char),
    /// Wrong number of hex digits (6 expected).
    #[error("invalid color length {0}, expected 6 hex digits")]
    InvalidLength(usize),
    /// Unknown harmony name.
    #[error("unknown harmony kind \"{0}\"")]
    UnknownHarmony(String),
    /// Unknown export format name.
    #[error("unknown export format \"{0}\"")]
    UnknownFormat(String),
    /// The palette already holds the maximum number of colors.
    #[error("palette is full ({0} colors)")]
    PaletteFull(usize),
    /// A palette must keep at least one color.
    #[error("cannot remove the last color of a palette")]
    LastColor,
    /// A stored palette with too few or too many colors.
    #[error("invalid palette size {0}, expected 1 to 8 colors")]
    ColorCount(usize),
    #[error("color index {index} out of range (palette has {len} colors)")]
    IndexOutOfRange { index: usize, len: usize },
    /// Key not usable by the storage backend.
    #[error("invalid storage key \"{0}\"")]
    InvalidKey(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
