//! Full data export in YAML

use std::io::Write;

use crate::error::{DepensesError, DepensesResult};
use crate::export::json::FullExport;
use crate::storage::Storage;

/// Write the full store as YAML, preceded by a comment header
pub fn export_full_yaml<W: Write>(storage: &Storage, writer: &mut W) -> DepensesResult<()> {
    let export = FullExport::from_storage(storage)?;

    writeln!(writer, "# Mes Dépenses - export complet")
        .and_then(|_| writeln!(writer, "# Generated: {}", export.exported_at))
        .and_then(|_| writeln!(writer, "# App Version: {}", export.app_version))
        .and_then(|_| writeln!(writer, "#"))
        .and_then(|_| writeln!(writer, "# Restore with: depenses import backup <file>"))
        .and_then(|_| writeln!(writer))
        .map_err(|e| DepensesError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| DepensesError::Export(e.to_string()))?;

    Ok(())
}

/// Parse and validate a YAML export
pub fn import_from_yaml(yaml_str: &str) -> DepensesResult<FullExport> {
    let export: FullExport =
        serde_yaml::from_str(yaml_str).map_err(|e| DepensesError::Import(e.to_string()))?;
    export.validate().map_err(DepensesError::Import)?;
    Ok(export)
}
