//! Escape sequence handlers.
//!
//! - style: SGR (Select Graphic Rendition) handling

pub mod style;
