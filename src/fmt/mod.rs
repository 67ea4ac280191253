//! Rendering vocabulary shared by every backend: colors, text attributes, and the
//! source-location prefix.

mod attribute;
mod color;
mod location;

pub use attribute::Attribute;
pub use color::{Color, colorize, colorize_attributes, colorize_xcode, xcode_level_rgb};
pub use location::{Location, basename, prepend_location};
