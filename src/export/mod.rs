//! Data export
//!
//! - CSV: the filtered expense view, in the spreadsheet layout
//! - JSON / YAML: the complete store, restorable with `import backup`

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::{export_expenses_csv, expenses_to_csv, CSV_DATE_FORMAT, CSV_HEADER, DEFAULT_EXPORT_FILE};
pub use self::json::{export_full_json, import_from_json, ExportMetadata, FullExport, EXPORT_SCHEMA_VERSION};
pub use self::yaml::{export_full_yaml, import_from_yaml};
