//! Machine-readable exports of the log-reference catalog.
//!
//! # Generated Files
//!
//! - `log-ref.schema.json` - JSON Schema of one entry in `show --json` output
//! - `log-ref-catalog.json` - every library log reference with its metadata
//!
//! # Example
//!
//! ```rust
//! use ferr_common::logref::schema::{generate_log_ref_catalog, generate_log_ref_schema};
//!
//! let schema = generate_log_ref_schema();
//! println!("{}", serde_json::to_string_pretty(&schema).unwrap());
//!
//! let catalog = generate_log_ref_catalog();
//! println!("{}", serde_json::to_string_pretty(&catalog).unwrap());
//! ```

use schemars::schema::RootSchema;
use schemars::schema_for;
use serde::{Deserialize, Serialize};

use super::display::LogRefView;
use super::lib_errors::{LIB_ERRORS, LIB_WARNINGS};
use super::range::FerrRange;
use super::{LogRef, LogRefKind};

/// Catalog format version.
pub const CATALOG_SCHEMA_VERSION: &str = "1.0";

/// Generate JSON Schema for a rendered log reference.
#[must_use]
pub fn generate_log_ref_schema() -> RootSchema {
    schema_for!(LogRefView)
}

/// Machine-readable log reference entry.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct LogRefEntry {
    /// Numeric code.
    pub code: u32,
    /// Code in 0x-prefixed hex.
    pub hex: String,
    /// Range owning the code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<FerrRange>,
    /// Table the code is published in.
    pub kind: LogRefKind,
    pub title: String,
    pub description: String,
    pub suggestion: String,
}

impl LogRefEntry {
    fn new(entry: &LogRef, kind: LogRefKind) -> Self {
        Self {
            code: entry.code,
            hex: format!("{:#010x}", entry.code),
            range: entry.range(),
            kind,
            title: entry.title.to_string(),
            description: entry.description.to_string(),
            suggestion: entry.suggestion.to_string(),
        }
    }
}

/// Machine-readable code range entry.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct RangeEntry {
    pub range: FerrRange,
    /// First code, 0x-prefixed hex.
    pub start: String,
    /// Last code, 0x-prefixed hex.
    pub end: String,
}

/// Complete log-reference catalog for machine consumption.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct LogRefCatalog {
    /// Catalog format version.
    pub schema_version: String,
    /// Version of the crate that produced the catalog.
    pub version: String,
    /// Code ranges by owner.
    pub ranges: Vec<RangeEntry>,
    /// Library log references, warnings first, ordered by code within a table.
    pub entries: Vec<LogRefEntry>,
}

/// Build the catalog from the library tables.
#[must_use]
pub fn generate_log_ref_catalog() -> LogRefCatalog {
    let ranges = FerrRange::all()
        .iter()
        .map(|range| RangeEntry {
            range: *range,
            start: format!("{:#010x}", range.start()),
            end: format!("{:#010x}", range.end()),
        })
        .collect();

    let mut entries = Vec::new();
    for (table, kind) in [
        (LIB_WARNINGS, LogRefKind::Warning),
        (LIB_ERRORS, LogRefKind::Error),
    ] {
        let mut rows: Vec<LogRefEntry> = table
            .iter()
            .take_while(|r| !r.is_end())
            .map(|r| LogRefEntry::new(r, kind))
            .collect();
        rows.sort_by_key(|e| e.code);
        entries.extend(rows);
    }

    LogRefCatalog {
        schema_version: CATALOG_SCHEMA_VERSION.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        ranges,
        entries,
    }
}

/// Schema export result containing all generated files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemaExportResult {
    /// Number of files generated.
    pub files_generated: usize,
    /// List of generated file paths.
    pub files: Vec<String>,
    /// Output directory.
    pub output_dir: String,
}

/// Export the schema and catalog to the specified directory.
///
/// # Errors
///
/// Returns error if directory creation or file writing fails.
pub fn export_schemas(output_dir: &std::path::Path) -> std::io::Result<SchemaExportResult> {
    use std::fs;

    fs::create_dir_all(output_dir)?;

    let mut files = Vec::new();

    let schema_path = output_dir.join("log-ref.schema.json");
    fs::write(
        &schema_path,
        serde_json::to_string_pretty(&generate_log_ref_schema())?,
    )?;
    files.push(schema_path.display().to_string());

    let catalog_path = output_dir.join("log-ref-catalog.json");
    fs::write(
        &catalog_path,
        serde_json::to_string_pretty(&generate_log_ref_catalog())?,
    )?;
    files.push(catalog_path.display().to_string());

    Ok(SchemaExportResult {
        files_generated: files.len(),
        files,
        output_dir: output_dir.display().to_string(),
    })
}
