use crate::application::engine::FeeSummary;
use crate::error::Result;
use std::io::Write;

/// Writes a fee summary as CSV: one `course,price` row per selected course,
/// followed by a `Total` row.
pub struct FeeWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> FeeWriter<W> {
    /// Creates a new `FeeWriter` over any `Write` sink (e.g. stdout, a file).
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_summary(&mut self, summary: &FeeSummary) -> Result<()> {
        self.writer.write_record(["course", "price"])?;
        for line in &summary.lines {
            self.writer
                .write_record([line.course.as_str(), &line.price.to_string()])?;
        }
        self.writer
            .write_record(["Total", &summary.total.to_string()])?;
        self.writer.flush()?;
        Ok(())
    }
}
