//! # Hoist - lift nested `Data` fields to the top level
//!
//! Takes a JSON document carrying a nested `Data` object, copies
//! `AppointmentId`, `TimestampUtc` and `Discipline` out of it to the top
//! level, removes `Data`, and serializes the result.
//!
//! ## Quick Start
//!
//! ```rust
//! # fn main() -> anyhow::Result<()> {
//! let input = r#"{"Data":{"AppointmentId":"A1","TimestampUtc":"2023-01-01T00:00:00Z","Discipline":"Cardiology"},"Status":"ok"}"#;
//!
//! let output = hoist::transform(input)?;
//! assert_eq!(
//!     output,
//!     r#"{"Status":"ok","AppointmentId":"A1","TimestampUtc":"2023-01-01T00:00:00Z","Discipline":"Cardiology"}"#
//! );
//! # Ok(())
//! # }
//! ```
//!
//! ## Missing `Data`
//!
//! By default a document without a `Data` object is rejected. With
//! [`MissingDataPolicy::Lenient`] it passes through with the lifted fields
//! left absent:
//!
//! ```rust
//! use hoist::{FlattenConfig, Flattener};
//!
//! let flattener = Flattener::new(FlattenConfig::default().lenient());
//! assert_eq!(flattener.transform(r#"{"Foo":"bar"}"#).unwrap(), r#"{"Foo":"bar"}"#);
//! ```

use std::io::{Read, Write};

pub mod flatten;

pub use flatten::{
    DocumentWriter, FlattenConfig, FlattenError, FlattenResult, Flattener, MissingDataPolicy,
    OutputFormat, DATA_KEY, LIFTED_FIELDS,
};

/// Flatten one JSON document with the default (strict, compact) configuration
pub fn transform(input: &str) -> FlattenResult<String> {
    Flattener::default().transform(input)
}

/// Main entry point: read a whole document, flatten it and write it out.
/// The writer's format decides how the result is serialized.
pub fn flatten_reader<R: Read, W: Write>(
    mut reader: R,
    writer: &mut DocumentWriter<W>,
    flattener: &Flattener,
    simd: bool,
) -> FlattenResult<()> {
    let mut content = Vec::new();
    reader.read_to_end(&mut content)?;

    let flattened = flattener.flatten_slice(&content, simd)?;
    writer.write_value(&flattened)?;
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_scenario() {
        let output = transform(r#"{"Data":{"AppointmentId":"A1"},"Status":"ok"}"#).unwrap();
        assert_eq!(output, r#"{"Status":"ok","AppointmentId":"A1"}"#);
    }

    #[test]
    fn test_flatten_reader() {
        let input = br#"{"Data":{"Discipline":"Cardiology","TimestampUtc":"t"}}"#;
        let mut writer = DocumentWriter::new(Vec::new(), OutputFormat::Compact);

        for simd in [false, true] {
            flatten_reader(&input[..], &mut writer, &Flattener::default(), simd).unwrap();
        }

        let output = String::from_utf8(writer.into_inner()).unwrap();
        let line = r#"{"TimestampUtc":"t","Discipline":"Cardiology"}"#;
        assert_eq!(output, format!("{line}\n{line}\n"));
    }

    #[test]
    fn test_flatten_reader_uses_writer_format() {
        let input = br#"{"Data":{"AppointmentId":"A1"}}"#;
        let mut writer = DocumentWriter::new(Vec::new(), OutputFormat::Pretty);

        flatten_reader(&input[..], &mut writer, &Flattener::default(), false).unwrap();

        let output = String::from_utf8(writer.into_inner()).unwrap();
        assert_eq!(output, "{\n  \"AppointmentId\": \"A1\"\n}\n");
    }

    #[test]
    fn test_flatten_reader_propagates_parse_error() {
        let mut writer = DocumentWriter::new(Vec::new(), OutputFormat::Compact);
        let err = flatten_reader(&b"{not valid"[..], &mut writer, &Flattener::default(), false)
            .unwrap_err();
        assert!(err.is_parse());
        assert!(writer.into_inner().is_empty());
    }
}
