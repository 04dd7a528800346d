use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;

use super::sheets::SheetSink;
use super::ExportError;

/// Sheet store writing one CSV file per sheet into a directory. Appends are
/// serialized behind a mutex so concurrent exports cannot interleave bytes
/// within the files.
pub struct CsvSheetStore {
    dir: PathBuf,
    write_lock: Mutex<()>,
}

impl CsvSheetStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            write_lock: Mutex::new(()),
        }
    }

    fn sheet_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.csv"))
    }
}

impl SheetSink for CsvSheetStore {
    fn ensure_sheet(&self, name: &str, headers: &[&str]) -> Result<(), ExportError> {
        let _guard = self.write_lock.lock().map_err(|_| ExportError::LockPoisoned)?;
        fs::create_dir_all(&self.dir)?;

        let path = self.sheet_path(name);
        if !path.exists() {
            let header_line = csv_line(&headers.iter().map(|h| h.to_string()).collect::<Vec<_>>());
            fs::write(&path, header_line)?;
            tracing::info!(sheet = name, path = %path.display(), "created sheet file");
        }
        Ok(())
    }

    fn append_row(&self, name: &str, values: &[String]) -> Result<(), ExportError> {
        let _guard = self.write_lock.lock().map_err(|_| ExportError::LockPoisoned)?;

        let path = self.sheet_path(name);
        if !path.exists() {
            return Err(ExportError::UnknownSheet(name.to_string()));
        }

        let mut file = OpenOptions::new().append(true).open(&path)?;
        file.write_all(csv_line(values).as_bytes())?;
        Ok(())
    }
}

/// Render one CSV line with RFC 4180 quoting.
fn csv_line(values: &[String]) -> String {
    let mut line = values
        .iter()
        .map(|v| csv_field(v))
        .collect::<Vec<_>>()
        .join(",");
    line.push('\n');
    line
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_file_with_headers_once() {
        let dir = tempfile::tempdir().unwrap();
        let store = CsvSheetStore::new(dir.path());

        store.ensure_sheet("Deal Summary", &["Deal ID", "Buyer"]).unwrap();
        store
            .append_row("Deal Summary", &["DEAL_1".into(), "Acme".into()])
            .unwrap();
        store.ensure_sheet("Deal Summary", &["Deal ID", "Buyer"]).unwrap();

        let content = fs::read_to_string(dir.path().join("Deal Summary.csv")).unwrap();
        assert_eq!(content, "Deal ID,Buyer\nDEAL_1,Acme\n");
    }

    #[test]
    fn append_without_ensure_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = CsvSheetStore::new(dir.path());
        let result = store.append_row("Ghost", &["x".into()]);
        assert!(matches!(result, Err(ExportError::UnknownSheet(_))));
    }

    #[test]
    fn fields_with_commas_and_quotes_are_escaped() {
        assert_eq!(csv_field("plain"), "plain");
        assert_eq!(csv_field("a,b"), "\"a,b\"");
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(csv_field("two\nlines"), "\"two\nlines\"");
    }

    #[test]
    fn rows_accumulate_across_appends() {
        let dir = tempfile::tempdir().unwrap();
        let store = CsvSheetStore::new(dir.path());
        store.ensure_sheet("Financials", &["Deal ID", "Revenue"]).unwrap();
        for i in 0..3 {
            store
                .append_row("Financials", &[format!("DEAL_{i}"), "100".into()])
                .unwrap();
        }
        let content = fs::read_to_string(dir.path().join("Financials.csv")).unwrap();
        assert_eq!(content.lines().count(), 4);
    }
}
