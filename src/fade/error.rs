//! Fade operation errors.

use crate::color::ColorError;
use crate::terminal::ColorProfile;

/// Errors that can occur while fading text.
#[derive(Debug, thiserror::Error)]
pub enum FadeError {
    #[error(transparent)]
    InvalidFormat(#[from] ColorError),

    /// The terminal cannot show 24-bit color. The input is handed back
    /// untouched so it can still be printed.
    #[error("Fade only supports truecolor terminals (detected: {profile})")]
    CapabilityUnsupported {
        profile: ColorProfile,
        original: String,
    },
}

impl FadeError {
    /// The unmodified input, when the error leaves it usable.
    pub fn original(&self) -> Option<&str> {
        match self {
            Self::CapabilityUnsupported { original, .. } => Some(original),
            Self::InvalidFormat(_) => None,
        }
    }

    pub fn into_original(self) -> Option<String> {
        match self {
            Self::CapabilityUnsupported { original, .. } => Some(original),
            Self::InvalidFormat(_) => None,
        }
    }
}
