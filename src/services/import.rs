//! Import service
//!
//! Reads expense CSV files in the export layout (header
//! `Titre,Montant,Catégorie,Date,Planifié`) and restores full JSON/YAML
//! backups.

use std::io::Read;

use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{info, warn};

use crate::error::DepensesResult;
use crate::export::{import_from_json, import_from_yaml, FullExport, CSV_DATE_FORMAT};
use crate::models::{Category, Money, NewExpense};
use crate::services::ExpenseService;
use crate::storage::Storage;

/// Date layouts accepted in the `Date` column, tried in order
const DATE_FORMATS: [&str; 3] = [CSV_DATE_FORMAT, "%Y-%m-%d", "%d-%m-%Y"];

/// Outcome of a CSV import
#[derive(Debug, Clone, Default)]
pub struct ImportResult {
    pub imported: usize,
    /// Rejected rows as (line number in the file, reason)
    pub errors: Vec<(usize, String)>,
}

/// Outcome of a backup restore
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestoreResult {
    pub expenses: usize,
    pub budgets: usize,
}

pub struct ImportService<'a> {
    storage: &'a Storage,
}

impl<'a> ImportService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Add every valid row of a CSV export as a new expense
    ///
    /// Invalid rows are skipped and reported; valid ones are imported.
    pub fn import_csv<R: Read>(&self, reader: R) -> DepensesResult<ImportResult> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(Trim::All)
            .from_reader(reader);

        let service = ExpenseService::new(self.storage);
        let mut result = ImportResult::default();

        for (idx, record) in reader.records().enumerate() {
            // header is line 1
            let line = idx + 2;
            let parsed = record
                .map_err(|e| format!("Error reading CSV record: {}", e))
                .and_then(|r| parse_record(&r));

            match parsed.and_then(|data| service.add(data).map_err(|e| e.to_string())) {
                Ok(_) => result.imported += 1,
                Err(reason) => {
                    warn!(line, %reason, "skipping CSV row");
                    result.errors.push((line, reason));
                }
            }
        }

        info!(imported = result.imported, rejected = result.errors.len(), "CSV import finished");
        Ok(result)
    }

    /// Replace the whole store with the contents of a JSON or YAML backup
    pub fn restore_backup(&self, contents: &str) -> DepensesResult<RestoreResult> {
        let export = parse_backup(contents)?;
        let result = RestoreResult {
            expenses: export.expenses.len(),
            budgets: export.budgets.len(),
        };

        self.storage.expenses.replace_all(export.expenses)?;
        self.storage.budgets.replace_all(export.budgets)?;
        self.storage.preferences.set_theme(export.theme)?;
        self.storage.save_all()?;

        info!(expenses = result.expenses, budgets = result.budgets, "backup restored");
        Ok(result)
    }
}

/// JSON when the document starts with `{`, YAML otherwise
fn parse_backup(contents: &str) -> DepensesResult<FullExport> {
    if contents.trim_start().starts_with('{') {
        import_from_json(contents)
    } else {
        import_from_yaml(contents)
    }
}

fn parse_record(record: &StringRecord) -> Result<NewExpense, String> {
    let title = field(record, 0, "Titre")?;
    let amount = Money::parse(field(record, 1, "Montant")?).map_err(|e| e.to_string())?;
    let category = field(record, 2, "Catégorie")?
        .parse::<Category>()
        .map_err(|e| e.to_string())?;
    let date = parse_date(field(record, 3, "Date")?)?;
    let is_planned = match record.get(4).map(str::to_lowercase).as_deref() {
        None | Some("") | Some("non") | Some("false") | Some("no") => false,
        Some("oui") | Some("true") | Some("yes") => true,
        Some(other) => return Err(format!("Invalid Planifié value: '{}'", other)),
    };

    let mut data = NewExpense::new(title, amount, category, date);
    data.is_planned = is_planned;
    Ok(data)
}

fn field<'r>(record: &'r StringRecord, idx: usize, name: &str) -> Result<&'r str, String> {
    record
        .get(idx)
        .ok_or_else(|| format!("Missing {} column", name))
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(s, format).ok())
        .ok_or_else(|| format!("Could not parse date: '{}'", s))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DepensesError;
    use crate::export::{expenses_to_csv, export_full_json};
    use crate::models::ThemeMode;
    use crate::storage::slots::{BUDGETS_SLOT, EXPENSES_SLOT, THEME_SLOT};
    use crate::storage::MemorySlotStore;
    use std::sync::Arc;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn empty_storage() -> Storage {
        let slots = Arc::new(MemorySlotStore::with_slots([
            (EXPENSES_SLOT, "[]"),
            (BUDGETS_SLOT, "[]"),
            (THEME_SLOT, "light"),
        ]));
        Storage::open(slots, today()).unwrap()
    }

    #[test]
    fn test_import_export_layout() {
        let storage = empty_storage();
        let csv = "Titre,Montant,Catégorie,Date,Planifié\n\
                   \"Essence\",60,\"Transport\",05/03/2024,Non\n\
                   \"Livres \"\"Master\"\"\",85.5,\"Éducation\",31/12/2024,Oui";

        let result = ImportService::new(&storage).import_csv(csv.as_bytes()).unwrap();
        assert_eq!(result.imported, 2);
        assert!(result.errors.is_empty());

        let all = storage.expenses.get_all().unwrap();
        assert_eq!(all[0].title, "Essence");
        assert_eq!(all[0].date, NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
        assert_eq!(all[1].title, "Livres \"Master\"");
        assert_eq!(all[1].amount, Money::from_cents(8550));
        assert!(all[1].is_planned);
    }

    #[test]
    fn test_bad_rows_are_reported() {
        let storage = empty_storage();
        let csv = "Titre,Montant,Catégorie,Date,Planifié\n\
                   \"Essence\",60,\"Voyages\",05/03/2024,Non\n\
                   \"Café\",2,\"Alimentation\",not-a-date,Non\n\
                   \"Pain\",1.2,\"Alimentation\",2024-03-06,Non";

        let result = ImportService::new(&storage).import_csv(csv.as_bytes()).unwrap();
        assert_eq!(result.imported, 1);
        assert_eq!(result.errors.len(), 2);
        assert_eq!(result.errors[0].0, 2);
        assert_eq!(result.errors[1].0, 3);
    }

    #[test]
    fn test_export_reimports() {
        let source = Storage::open(Arc::new(MemorySlotStore::new()), today()).unwrap();
        let csv = expenses_to_csv(&source.expenses.get_all().unwrap());

        let target = empty_storage();
        let result = ImportService::new(&target).import_csv(csv.as_bytes()).unwrap();
        assert_eq!(result.imported, 13);

        let titles = |s: &Storage| -> Vec<String> {
            s.expenses.get_all().unwrap().into_iter().map(|e| e.title).collect()
        };
        assert_eq!(titles(&target), titles(&source));
    }

    #[test]
    fn test_restore_json_backup() {
        let source = Storage::open(Arc::new(MemorySlotStore::new()), today()).unwrap();
        source.preferences.set_theme(ThemeMode::Dark).unwrap();
        let mut buf = Vec::new();
        export_full_json(&source, &mut buf, false).unwrap();

        let target = empty_storage();
        let restored = ImportService::new(&target)
            .restore_backup(&String::from_utf8(buf).unwrap())
            .unwrap();

        assert_eq!(restored, RestoreResult { expenses: 13, budgets: 10 });
        assert_eq!(target.expenses.get_all().unwrap(), source.expenses.get_all().unwrap());
        assert_eq!(target.preferences.theme().unwrap(), ThemeMode::Dark);
    }

    #[test]
    fn test_restore_rejects_garbage() {
        let target = empty_storage();
        let err = ImportService::new(&target).restore_backup("{ \"nope\": 1 }").unwrap_err();
        assert!(matches!(err, DepensesError::Import(_)));
        assert_eq!(target.expenses.count().unwrap(), 0);
    }
}
