use crate::flatten::error::{FlattenError, FlattenResult};
use crate::flatten::types::OutputFormat;
use serde_json::Value;
use std::io::Write;

/// Writes flattened documents to an output, one per line in compact mode
pub struct DocumentWriter<W: Write> {
    writer: W,
    format: OutputFormat,
}

impl<W: Write> DocumentWriter<W> {
    pub fn new(writer: W, format: OutputFormat) -> Self {
        DocumentWriter { writer, format }
    }

    /// Write an already serialized document followed by a newline
    pub fn write_str(&mut self, document: &str) -> FlattenResult<()> {
        writeln!(self.writer, "{}", document)?;
        Ok(())
    }

    pub fn write_value(&mut self, document: &Value) -> FlattenResult<()> {
        let json = self
            .format
            .render(document)
            .map_err(FlattenError::Serialize)?;
        self.write_str(&json)
    }

    pub fn flush(&mut self) -> FlattenResult<()> {
        self.writer.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_compact_writer() {
        let mut buffer = Vec::new();
        let mut writer = DocumentWriter::new(&mut buffer, OutputFormat::Compact);

        writer.write_value(&json!({"Status": "ok", "AppointmentId": "A1"})).unwrap();
        writer.flush().unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert_eq!(output, "{\"Status\":\"ok\",\"AppointmentId\":\"A1\"}\n");
    }

    #[test]
    fn test_pretty_writer() {
        let mut writer = DocumentWriter::new(Vec::new(), OutputFormat::Pretty);
        writer.write_value(&json!({"Discipline": "Cardiology"})).unwrap();

        let output = String::from_utf8(writer.into_inner()).unwrap();
        assert!(output.contains("\n  \"Discipline\": \"Cardiology\"\n"));
        assert!(output.ends_with("}\n"));
    }
}
