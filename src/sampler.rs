//! Picking colors from a reference image.
//!
//! The viewer hands scene coordinates to a [`ColorSampler`], which reports
//! the pixel color under them and can turn a click into a new catalog entry.

use std::fmt;
use std::path::Path;

use image::{DynamicImage, RgbaImage};
use thiserror::Error;

use crate::model::ColorId;
use crate::registry::ColorRegistry;

/// Errors that can occur when loading a reference image.
#[derive(Error, Debug)]
pub enum SampleError {
    /// Image could not be read or decoded
    #[error("Failed to load image: {0}")]
    Image(#[from] image::ImageError),
}

/// Color of a single sampled pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampledColor {
    /// Red channel
    pub red: u8,
    /// Green channel
    pub green: u8,
    /// Blue channel
    pub blue: u8,
}

impl SampledColor {
    /// Status text for this color at the given scene position.
    pub fn describe_at(&self, x: f64, y: f64) -> String {
        format!("{} @ <{}, {}>", self, x, y)
    }
}

impl fmt::Display for SampledColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color <{} {} {}>", self.red, self.green, self.blue)
    }
}

/// A decoded reference image that can be sampled by position.
#[derive(Debug, Clone)]
pub struct ColorSampler {
    pixels: RgbaImage,
}

impl ColorSampler {
    /// Load and decode an image file (PNG, JPEG, BMP, ...).
    pub fn open(path: &Path) -> Result<Self, SampleError> {
        let img = image::open(path)?;
        let sampler = Self::from_image(img);
        log::info!(
            "Loaded reference image {:?} ({}x{})",
            path,
            sampler.width(),
            sampler.height()
        );
        Ok(sampler)
    }

    /// Decode an image from raw bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self, SampleError> {
        Ok(Self::from_image(image::load_from_memory(data)?))
    }

    /// Wrap an already decoded image.
    pub fn from_image(img: DynamicImage) -> Self {
        Self {
            pixels: img.to_rgba8(),
        }
    }

    /// Image width in pixels.
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    /// Image height in pixels.
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Color at scene position `(x, y)`, or `None` outside the image.
    ///
    /// Positions are truncated toward zero to pick a pixel.
    pub fn sample(&self, x: f64, y: f64) -> Option<SampledColor> {
        if !x.is_finite() || !y.is_finite() || x < 0.0 || y < 0.0 {
            return None;
        }
        let (px, py) = (x.trunc() as u32, y.trunc() as u32);
        let pixel = self.pixels.get_pixel_checked(px, py)?;
        Some(SampledColor {
            red: pixel[0],
            green: pixel[1],
            blue: pixel[2],
        })
    }

    /// Add the color under `(x, y)` to `registry` as a new, unnamed entry.
    ///
    /// Returns the new record's id, or `None` if the position is outside
    /// the image.
    pub fn pick_into(&self, registry: &mut ColorRegistry, x: f64, y: f64) -> Option<ColorId> {
        let color = self.sample(x, y)?;
        Some(registry.add_new_color(
            "",
            "",
            i32::from(color.red),
            i32::from(color.green),
            i32::from(color.blue),
        ))
    }
}
