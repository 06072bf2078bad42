//! Catalog Maker - color swatch catalog
//!
//! Pick pixel colors from a reference image and keep an editable catalog of
//! named swatches (name, code, RGB) that can be exported to and re-imported
//! from flat delimited text.
//!
//! The [`ColorRegistry`] owns every record. Reads return detached copies;
//! changes are applied with [`ColorRegistry::commit_change`].

pub mod color_utils;
pub mod config;
pub mod format;
pub mod model;
pub mod registry;
pub mod sampler;

pub use config::{AppConfig, ConfigError, LogLevel, init_logging};
pub use format::{CsvOptions, FormatError, ImportReport};
pub use model::{ColorId, ColorRecord};
pub use registry::{ColorRegistry, RegistryError};
pub use sampler::{ColorSampler, SampleError, SampledColor};
