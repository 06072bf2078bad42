//! Data models for the color catalog.

mod color;

pub use color::{COLOR_ID_TEXT_LEN, ColorId, ColorRecord};
