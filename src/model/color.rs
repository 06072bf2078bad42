//! Color swatch data model.
//!
//! A [`ColorRecord`] is one catalog entry: an identifier plus a user-editable
//! name and code, and the RGB channels it was sampled with.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Length of the hyphenated textual form of a [`ColorId`].
pub const COLOR_ID_TEXT_LEN: usize = 36;

/// Unique identifier for a color record.
///
/// Rendered and parsed as a 36-character hyphenated UUID string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorId(Uuid);

impl ColorId {
    /// Generate a fresh random identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse the 36-character hyphenated form (`xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx`).
    ///
    /// Braced, URN and un-hyphenated forms are rejected.
    pub fn parse_hyphenated(text: &str) -> Option<Self> {
        if text.len() != COLOR_ID_TEXT_LEN {
            return None;
        }
        Uuid::parse_str(text).ok().map(Self)
    }

    /// The underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ColorId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for ColorId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl fmt::Display for ColorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

/// One catalog entry.
///
/// Channels are stored as plain integers and are not range-checked; values
/// outside `0..=255` survive lookup and export untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorRecord {
    id: ColorId,
    /// Display name of the swatch
    pub name: String,
    /// Catalog code (SKU or similar)
    pub code: String,
    /// Red channel
    pub red: i32,
    /// Green channel
    pub green: i32,
    /// Blue channel
    pub blue: i32,
}

impl ColorRecord {
    /// Create a record with the given identifier and values.
    pub fn new(
        id: ColorId,
        name: impl Into<String>,
        code: impl Into<String>,
        red: i32,
        green: i32,
        blue: i32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            code: code.into(),
            red,
            green,
            blue,
        }
    }

    /// The record's identifier. Fixed for the record's lifetime.
    pub fn id(&self) -> ColorId {
        self.id
    }

    /// Overwrite every field except the identifier from `other`.
    pub fn copy_from(&mut self, other: &ColorRecord) {
        self.name.clone_from(&other.name);
        self.code.clone_from(&other.code);
        self.red = other.red;
        self.green = other.green;
        self.blue = other.blue;
    }

    /// Whether all three channels lie within `0..=255`.
    pub fn is_in_gamut(&self) -> bool {
        self.rgb8().is_some()
    }

    /// Channels as bytes, or `None` if any channel is out of range.
    pub fn rgb8(&self) -> Option<[u8; 3]> {
        let r = u8::try_from(self.red).ok()?;
        let g = u8::try_from(self.green).ok()?;
        let b = u8::try_from(self.blue).ok()?;
        Some([r, g, b])
    }
}

impl fmt::Display for ColorRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} - <{} {} {}>",
            self.code, self.name, self.red, self.green, self.blue
        )
    }
}
