//! Catalog import/export.
//!
//! The catalog is persisted as flat delimited text, one swatch per line.
//! [`csv`] converts between that text and a [`ColorRegistry`](crate::ColorRegistry);
//! [`file`] wraps it with file access.
//!
//! ## Usage
//!
//! ```rust
//! use catalogmaker::ColorRegistry;
//!
//! let mut registry = ColorRegistry::new();
//! registry.add_new_color("Teal", "T-01", 0, 128, 128);
//!
//! let text = registry.export_as_csv();
//!
//! let mut restored = ColorRegistry::new();
//! let report = restored.load_from_csv_content(&text).unwrap();
//! assert_eq!(report.imported, 1);
//! ```

pub mod csv;
mod error;
pub mod file;

pub use csv::{CsvOptions, DEFAULT_DELIMITER, ImportReport, ParsedCsv, parse_csv, write_csv};
pub use error::FormatError;
pub use file::{DEFAULT_CATALOG_FILENAME, export_to_file, import_from_file};

#[cfg(test)]
mod tests;
