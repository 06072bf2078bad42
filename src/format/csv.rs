//! Delimited text codec for the color catalog.
//!
//! Each record is one line with six fields:
//!
//! ```text
//! <id>;<name>;<code>;<red>;<green>;<blue>
//! ```
//!
//! There is no header and no quoting. A name or code containing the
//! delimiter or a line break cannot be represented and will not read back.
//! Delimiters that can occur inside an identifier (`-`, hex digits) or
//! that break lines are rejected outright.

use std::collections::HashSet;
use std::fmt::Write;

use serde::{Deserialize, Serialize};

use super::FormatError;
use crate::model::{ColorId, ColorRecord};
use crate::registry::ColorRegistry;

/// Default field delimiter.
pub const DEFAULT_DELIMITER: char = ';';

/// Number of fields in a well-formed record line.
pub const FIELDS_PER_RECORD: usize = 6;

/// Options for reading and writing catalog text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsvOptions {
    /// Field delimiter
    pub delimiter: char,
}

impl CsvOptions {
    /// Create options with the default delimiter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the field delimiter.
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Check that the delimiter cannot collide with identifier text or
    /// line structure.
    pub fn validate(&self) -> Result<(), FormatError> {
        let d = self.delimiter;
        if d == '-' || d == '\n' || d == '\r' || d.is_ascii_hexdigit() {
            return Err(FormatError::InvalidDelimiter { delimiter: d });
        }
        Ok(())
    }
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
        }
    }
}

/// Summary of a successful import.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportReport {
    /// Records installed in the registry
    pub imported: usize,
    /// Non-blank lines dropped for not having exactly six fields
    pub skipped_lines: usize,
    /// Lines dropped because their identifier appeared on an earlier line
    pub duplicate_ids: usize,
}

impl ImportReport {
    /// Whether every non-blank line became a record.
    pub fn is_clean(&self) -> bool {
        self.skipped_lines == 0 && self.duplicate_ids == 0
    }
}

/// Records parsed from catalog text, not yet installed anywhere.
#[derive(Debug, Clone, Default)]
pub struct ParsedCsv {
    /// Records in input order, identifiers unique
    pub records: Vec<ColorRecord>,
    /// Non-blank lines dropped for not having exactly six fields
    pub skipped_lines: usize,
    /// Lines dropped because their identifier was already seen
    pub duplicate_ids: usize,
}

fn parse_channel(field: &str, line: usize, channel: &'static str) -> Result<i32, FormatError> {
    field
        .trim()
        .parse()
        .map_err(|_| FormatError::invalid_channel(line, channel, field))
}

/// Parse catalog text without touching any registry.
///
/// Lines with the wrong number of fields are skipped and counted. A bad
/// identifier or channel fails the whole parse. A leading byte-order mark
/// is ignored.
pub fn parse_csv(text: &str, options: &CsvOptions) -> Result<ParsedCsv, FormatError> {
    options.validate()?;
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut parsed = ParsedCsv::default();
    let mut seen = HashSet::new();

    for (index, line) in text.lines().enumerate() {
        let line_num = index + 1;
        if line.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split(options.delimiter).collect();
        if fields.len() != FIELDS_PER_RECORD {
            parsed.skipped_lines += 1;
            continue;
        }

        let id = ColorId::parse_hyphenated(fields[0])
            .ok_or_else(|| FormatError::invalid_identifier(line_num, fields[0]))?;
        let red = parse_channel(fields[3], line_num, "red")?;
        let green = parse_channel(fields[4], line_num, "green")?;
        let blue = parse_channel(fields[5], line_num, "blue")?;

        if !seen.insert(id) {
            parsed.duplicate_ids += 1;
            continue;
        }

        parsed
            .records
            .push(ColorRecord::new(id, fields[1], fields[2], red, green, blue));
    }

    Ok(parsed)
}

/// Render records as catalog text, one line per record with a trailing newline.
pub fn write_csv<'a>(
    records: impl IntoIterator<Item = &'a ColorRecord>,
    options: &CsvOptions,
) -> Result<String, FormatError> {
    options.validate()?;
    Ok(write_records(records, options.delimiter))
}

fn write_records<'a>(
    records: impl IntoIterator<Item = &'a ColorRecord>,
    delimiter: char,
) -> String {
    let mut out = String::new();

    for record in records {
        if [&record.name, &record.code]
            .iter()
            .any(|field| field.contains(delimiter) || field.contains(['\n', '\r']))
        {
            log::warn!(
                "Color {} has a name or code containing the delimiter or a line break; it will not read back",
                record.id()
            );
        }

        // Writing into a String cannot fail.
        let _ = writeln!(
            out,
            "{id}{d}{name}{d}{code}{d}{r}{d}{g}{d}{b}",
            id = record.id(),
            d = delimiter,
            name = record.name,
            code = record.code,
            r = record.red,
            g = record.green,
            b = record.blue,
        );
    }

    out
}

impl ColorRegistry {
    /// Export all records with the given options.
    pub fn export_csv(&self, options: &CsvOptions) -> Result<String, FormatError> {
        write_csv(self.iter(), options)
    }

    /// Export all records with the default `;` delimiter.
    pub fn export_as_csv(&self) -> String {
        write_records(self.iter(), DEFAULT_DELIMITER)
    }

    /// Replace the whole catalog with the records in `text`.
    ///
    /// The text is fully parsed before anything is changed: on a field
    /// error the registry keeps its previous contents.
    pub fn load_from_csv(
        &mut self,
        text: &str,
        options: &CsvOptions,
    ) -> Result<ImportReport, FormatError> {
        let parsed = parse_csv(text, options)?;
        let report = ImportReport {
            imported: parsed.records.len(),
            skipped_lines: parsed.skipped_lines,
            duplicate_ids: parsed.duplicate_ids,
        };

        self.replace_all(parsed.records);
        Ok(report)
    }

    /// [`load_from_csv`](Self::load_from_csv) with the default `;` delimiter.
    pub fn load_from_csv_content(&mut self, text: &str) -> Result<ImportReport, FormatError> {
        self.load_from_csv(text, &CsvOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_builder() {
        assert_eq!(CsvOptions::new().delimiter, ';');
        assert_eq!(CsvOptions::new().delimiter(',').delimiter, ',');
    }

    #[test]
    fn test_write_single_record() {
        let id = ColorId::new();
        let record = ColorRecord::new(id, "Ochre", "OC-3", 204, 119, 34);

        let text = write_csv([&record], &CsvOptions::default()).unwrap();
        assert_eq!(text, format!("{};Ochre;OC-3;204;119;34\n", id));
    }

    #[test]
    fn test_write_empty() {
        let records: Vec<ColorRecord> = Vec::new();
        assert_eq!(write_csv(&records, &CsvOptions::default()).unwrap(), "");
    }

    #[test]
    fn test_parse_blank_lines_ignored() {
        let id = ColorId::new();
        let text = format!("\n{};a;b;1;2;3\n\n   \n", id);

        let parsed = parse_csv(&text, &CsvOptions::default()).unwrap();
        assert_eq!(parsed.records.len(), 1);
        assert_eq!(parsed.skipped_lines, 0);
    }

    #[test]
    fn test_parse_crlf() {
        let id = ColorId::new();
        let text = format!("{};a;b;1;2;3\r\n", id);

        let parsed = parse_csv(&text, &CsvOptions::default()).unwrap();
        assert_eq!(parsed.records[0].blue, 3);
    }

    #[test]
    fn test_parse_channel_whitespace_and_sign() {
        let id = ColorId::new();
        let text = format!("{};a;b; 7 ;+8;-9\n", id);

        let record = &parse_csv(&text, &CsvOptions::default()).unwrap().records[0];
        assert_eq!((record.red, record.green, record.blue), (7, 8, -9));
    }

    #[test]
    fn test_report_clean() {
        assert!(ImportReport::default().is_clean());
        let lossy = ImportReport {
            imported: 1,
            skipped_lines: 1,
            duplicate_ids: 0,
        };
        assert!(!lossy.is_clean());
    }

    #[test]
    fn test_delimiter_validation() {
        for ok in [';', ',', '\t', '|', ' ', 'g', 'Z'] {
            assert!(CsvOptions::new().delimiter(ok).validate().is_ok(), "{ok:?}");
        }

        // Hyphen, hex digits of either case and line breaks all collide.
        for bad in ['-', '0', '7', 'a', 'F', '\n', '\r'] {
            assert!(
                matches!(
                    CsvOptions::new().delimiter(bad).validate(),
                    Err(FormatError::InvalidDelimiter { delimiter }) if delimiter == bad
                ),
                "{bad:?}"
            );
        }
    }

    #[test]
    fn test_unsafe_delimiter_rejected_by_codec() {
        let record = ColorRecord::new(ColorId::new(), "Moss", "M", 1, 2, 3);
        let options = CsvOptions::new().delimiter('-');

        assert!(matches!(
            write_csv([&record], &options),
            Err(FormatError::InvalidDelimiter { delimiter: '-' })
        ));
        assert!(matches!(
            parse_csv("", &options),
            Err(FormatError::InvalidDelimiter { delimiter: '-' })
        ));
    }

    #[test]
    fn test_parse_strips_byte_order_mark() {
        let id = ColorId::new();
        let text = format!("\u{feff}{id};a;b;1;2;3\n");

        let parsed = parse_csv(&text, &CsvOptions::default()).unwrap();
        assert_eq!(parsed.records.len(), 1);
        assert_eq!(parsed.records[0].id(), id);
    }
}
