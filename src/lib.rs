//! Packed palettes of evenly spaced hues.
//!
//! A palette file is a headerless run of `R, G, B` bytes, one triplet per
//! color, in order of increasing hue. Renderers index into it by iteration
//! count.

mod color;
pub use color::*;

mod error;
pub use error::*;

mod palette;
pub use palette::*;
