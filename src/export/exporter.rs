use super::rows::{section_rows, SHEETS};
use super::sheets::SheetSink;
use super::ExportError;
use crate::pipeline::structuring::DealRecord;

/// Writes one extracted record into the sheet sink: ensures the five sheets
/// exist with their fixed headers, then appends exactly one row per section.
///
/// Errors propagate to the caller; there is no safe default "write".
pub struct SheetExporter {
    sink: Box<dyn SheetSink>,
}

impl SheetExporter {
    pub fn new(sink: Box<dyn SheetSink>) -> Self {
        Self { sink }
    }

    pub fn export(&self, record: &DealRecord) -> Result<(), ExportError> {
        let _span =
            tracing::info_span!("export_record", deal_id = %record.metadata.deal_id).entered();

        for (name, headers) in SHEETS {
            self.sink.ensure_sheet(name, headers)?;
        }
        for (name, row) in section_rows(record) {
            self.sink.append_row(name, &row)?;
        }

        tracing::info!("record exported");
        Ok(())
    }
}
