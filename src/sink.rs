//! Record persistence sinks.
//!
//! Extraction stays decoupled from storage: the pipeline produces
//! [`ExtractedRecord`]s and a [`RecordSink`] decides where they go.
//! Two writers are provided, CSV for spreadsheets and JSON Lines for
//! downstream tooling; both work over any `io::Write`.

use std::io::Write;

use crate::error::{Error, Result};
use crate::record::ExtractedRecord;

/// Destination for extracted records.
pub trait RecordSink {
    /// Persist one record.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Sink`] when the underlying writer fails.
    fn write_record(&mut self, record: &ExtractedRecord) -> Result<()>;

    /// Flush any buffered output. Called once after the last record.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Sink`] when the underlying writer fails.
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

/// CSV writer with a fixed column set and a header row.
///
/// Empty fields become empty cells; fields containing separators or
/// quotes are quoted with doubled inner quotes.
pub struct CsvSink<W: Write> {
    writer: W,
    header_written: bool,
}

impl<W: Write> CsvSink<W> {
    /// Wrap a writer. The header row is emitted before the first
    /// record.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            header_written: false,
        }
    }

    /// Unwrap the inner writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> RecordSink for CsvSink<W> {
    fn write_record(&mut self, record: &ExtractedRecord) -> Result<()> {
        if !self.header_written {
            writeln!(
                self.writer,
                "source_locator,company_name,contact_person,email,phone,confidence_score"
            )?;
            self.header_written = true;
        }
        writeln!(
            self.writer,
            "{},{},{},{},{},{:.2}",
            escape(&record.source_locator),
            escape(record.company_name.as_deref().unwrap_or("")),
            escape(record.contact_person.as_deref().unwrap_or("")),
            escape(record.email.as_deref().unwrap_or("")),
            escape(record.phone.as_deref().unwrap_or("")),
            record.confidence_score
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// One serialized record per line, trace included.
pub struct JsonLinesSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonLinesSink<W> {
    /// Wrap a writer.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Unwrap the inner writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> RecordSink for JsonLinesSink<W> {
    fn write_record(&mut self, record: &ExtractedRecord) -> Result<()> {
        serde_json::to_writer(&mut self.writer, record)
            .map_err(|e| Error::Sink(std::io::Error::other(e)))?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

fn escape(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
