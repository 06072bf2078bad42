//! Reading and writing catalog files.

use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use super::{CsvOptions, FormatError, ImportReport};
use crate::registry::ColorRegistry;

/// Default file name offered when exporting a catalog.
pub const DEFAULT_CATALOG_FILENAME: &str = "colors.csv";

/// Write the catalog to `path`, replacing any existing file.
///
/// An invalid delimiter is reported before the file is created.
pub fn export_to_file(
    registry: &ColorRegistry,
    path: &Path,
    options: &CsvOptions,
) -> Result<(), FormatError> {
    let text = registry.export_csv(options)?;

    {
        let mut writer = BufWriter::new(File::create(path)?);
        writer.write_all(text.as_bytes())?;
        writer.flush()?;
    }

    log::info!("Exported {} colors to {:?}", registry.len(), path);
    Ok(())
}

/// Replace the catalog with the contents of the file at `path`.
///
/// If the file cannot be read or fails to parse, the registry is unchanged.
pub fn import_from_file(
    registry: &mut ColorRegistry,
    path: &Path,
    options: &CsvOptions,
) -> Result<ImportReport, FormatError> {
    let mut text = String::new();
    {
        let mut file = File::open(path)?;
        file.read_to_string(&mut text)?;
    }

    let report = registry.load_from_csv(&text, options)?;
    if report.is_clean() {
        log::info!("Imported {} colors from {:?}", report.imported, path);
    } else {
        log::warn!(
            "Imported {} colors from {:?} ({} malformed lines skipped, {} duplicate ids dropped)",
            report.imported,
            path,
            report.skipped_lines,
            report.duplicate_ids
        );
    }
    Ok(report)
}
