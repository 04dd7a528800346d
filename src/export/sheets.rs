use std::collections::BTreeMap;
use std::sync::Mutex;

use super::ExportError;

/// Tabular sink the exporter writes into. Implementations must serialize
/// appends: two concurrent appends to the same sheet may interleave in any
/// order but must never overwrite each other.
pub trait SheetSink: Send + Sync {
    /// Create the sheet with the given headers if it does not exist yet.
    fn ensure_sheet(&self, name: &str, headers: &[&str]) -> Result<(), ExportError>;

    /// Append one row after the last populated row of the sheet.
    fn append_row(&self, name: &str, values: &[String]) -> Result<(), ExportError>;
}

impl<S: SheetSink + ?Sized> SheetSink for std::sync::Arc<S> {
    fn ensure_sheet(&self, name: &str, headers: &[&str]) -> Result<(), ExportError> {
        (**self).ensure_sheet(name, headers)
    }

    fn append_row(&self, name: &str, values: &[String]) -> Result<(), ExportError> {
        (**self).append_row(name, values)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Sheet {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// In-memory sheet store. Appends are serialized behind a mutex, so there is
/// no row-number race between concurrent writers.
#[derive(Debug, Default)]
pub struct MemorySheetStore {
    sheets: Mutex<BTreeMap<String, Sheet>>,
}

impl MemorySheetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of one sheet, for inspection and tests.
    pub fn sheet(&self, name: &str) -> Option<Sheet> {
        self.sheets
            .lock()
            .ok()
            .and_then(|sheets| sheets.get(name).cloned())
    }

    pub fn sheet_names(&self) -> Vec<String> {
        self.sheets
            .lock()
            .map(|sheets| sheets.keys().cloned().collect())
            .unwrap_or_default()
    }
}

impl SheetSink for MemorySheetStore {
    fn ensure_sheet(&self, name: &str, headers: &[&str]) -> Result<(), ExportError> {
        let mut sheets = self.sheets.lock().map_err(|_| ExportError::LockPoisoned)?;
        sheets.entry(name.to_string()).or_insert_with(|| Sheet {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        });
        Ok(())
    }

    fn append_row(&self, name: &str, values: &[String]) -> Result<(), ExportError> {
        let mut sheets = self.sheets.lock().map_err(|_| ExportError::LockPoisoned)?;
        let sheet = sheets
            .get_mut(name)
            .ok_or_else(|| ExportError::UnknownSheet(name.to_string()))?;
        sheet.rows.push(values.to_vec());
        Ok(())
    }
}
