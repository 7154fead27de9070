//! Record writers.
//!
//! The engine's only contract toward output destinations: a sink consuming
//! [`ResolvedHoliday`] values.  The delimited-text writer is the reference
//! implementation; database or structured-markup destinations implement the
//! same trait elsewhere.

use crate::record::ResolvedHoliday;
use fc_core::errors::Result;
use std::io::Write;

/// A sink for resolved holiday records.
pub trait RecordWriter {
    /// Write one record.
    fn write_record(&mut self, record: &ResolvedHoliday) -> Result<()>;

    /// Flush any buffered output.
    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Writes `date<delim>calendarId<delim>holidayName` lines.
#[derive(Debug)]
pub struct DelimitedWriter<W: Write> {
    out: W,
    delimiter: char,
}

impl<W: Write> DelimitedWriter<W> {
    /// Create a tab-delimited writer over `out`.
    pub fn new(out: W) -> Self {
        Self::with_delimiter(out, '\t')
    }

    /// Create a writer with a custom delimiter.
    pub fn with_delimiter(out: W, delimiter: char) -> Self {
        Self { out, delimiter }
    }

    /// Consume the writer and return the underlying sink.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RecordWriter for DelimitedWriter<W> {
    fn write_record(&mut self, record: &ResolvedHoliday) -> Result<()> {
        writeln!(
            self.out,
            "{}{d}{}{d}{}",
            record.date,
            record.calendar_id,
            record.holiday_name,
            d = self.delimiter
        )?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fc_time::Date;

    fn record(date: Date) -> ResolvedHoliday {
        ResolvedHoliday {
            definition_id: "christmas".into(),
            holiday_name: "Christmas Day".into(),
            calendar_id: "us-federal".into(),
            jurisdiction: "FED".into(),
            date,
        }
    }

    #[test]
    fn writes_three_delimited_columns() {
        let mut writer = DelimitedWriter::new(Vec::new());
        writer
            .write_record(&record(Date::from_ymd(2012, 12, 25).unwrap()))
            .unwrap();
        writer.flush().unwrap();
        let output = String::from_utf8(writer.into_inner()).unwrap();
        assert_eq!(output, "2012-12-25\tus-federal\tChristmas Day\n");
    }

    #[test]
    fn honors_a_custom_delimiter() {
        let mut writer = DelimitedWriter::with_delimiter(Vec::new(), '|');
        writer
            .write_record(&record(Date::from_ymd(2011, 7, 4).unwrap()))
            .unwrap();
        let output = String::from_utf8(writer.into_inner()).unwrap();
        assert_eq!(output, "2011-07-04|us-federal|Christmas Day\n");
    }
}
