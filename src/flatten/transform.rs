use crate::flatten::error::{FlattenError, FlattenResult};
use crate::flatten::types::{kind_of, FlattenConfig, MissingDataPolicy, DATA_KEY, LIFTED_FIELDS};
use serde_json::{Map, Value};
use tracing::{debug, warn};

/// Deepest array/object nesting accepted, matching serde_json's default
/// recursion limit so every parse path rejects the same documents
pub const MAX_DEPTH: usize = 128;

/// Lifts the fields of the nested `Data` object to the top level
#[derive(Debug, Clone, Default)]
pub struct Flattener {
    config: FlattenConfig,
}

impl Flattener {
    pub fn new(config: FlattenConfig) -> Self {
        Flattener { config }
    }

    pub fn config(&self) -> &FlattenConfig {
        &self.config
    }

    /// Parse JSON text, flatten it and serialize the result
    pub fn transform(&self, input: &str) -> FlattenResult<String> {
        let value: Value = serde_json::from_str(input).map_err(FlattenError::Parse)?;
        self.flatten_and_render(value)
    }

    /// Same as [`Flattener::transform`] for raw UTF-8 bytes
    pub fn transform_slice(&self, input: &[u8]) -> FlattenResult<String> {
        let value: Value = serde_json::from_slice(input).map_err(FlattenError::Parse)?;
        self.flatten_and_render(value)
    }

    /// Parse with simd-json. The buffer is used as scratch space and is
    /// left in an unspecified state.
    pub fn transform_simd(&self, input: &mut [u8]) -> FlattenResult<String> {
        let value = parse_simd(input)?;
        self.flatten_and_render(value)
    }

    /// Parse raw bytes and flatten, leaving serialization to the caller
    pub fn flatten_slice(&self, input: &[u8], simd: bool) -> FlattenResult<Value> {
        let value = if simd {
            let mut scratch = input.to_vec();
            parse_simd(&mut scratch)?
        } else {
            serde_json::from_slice(input).map_err(FlattenError::Parse)?
        };
        self.flatten_value(value)
    }

    fn flatten_and_render(&self, value: Value) -> FlattenResult<String> {
        let flattened = self.flatten_value(value)?;
        self.config
            .output
            .render(&flattened)
            .map_err(FlattenError::Serialize)
    }

    /// Flatten an already parsed document.
    ///
    /// Lifted fields missing from `Data` are left out of the result, and a
    /// top-level key of the same name is removed. The result never has a
    /// `Data` key.
    pub fn flatten_value(&self, value: Value) -> FlattenResult<Value> {
        let mut doc = match value {
            Value::Object(doc) => doc,
            other => {
                return Err(FlattenError::NotAnObject {
                    found: kind_of(&other),
                })
            }
        };

        // `Data` is detached and its fields moved out; the resulting key
        // order is the same as copying first and deleting after.
        let mut source = match doc.shift_remove(DATA_KEY) {
            Some(Value::Object(data)) => data,
            Some(other) => self.tolerate(FlattenError::DataNotAnObject {
                found: kind_of(&other),
            })?,
            None => self.tolerate(FlattenError::MissingData)?,
        };
        debug!(fields = source.len(), "removed Data from document");

        for field in LIFTED_FIELDS {
            match source.swap_remove(field) {
                Some(value) => {
                    debug!(field, "lifting field from Data");
                    doc.insert(field.to_string(), value);
                }
                None => {
                    debug!(field, "field absent from Data");
                    doc.shift_remove(field);
                }
            }
        }

        Ok(Value::Object(doc))
    }

    /// Under the lenient policy a shape problem yields an empty source
    fn tolerate(&self, err: FlattenError) -> FlattenResult<Map<String, Value>> {
        match self.config.missing_data {
            MissingDataPolicy::Strict => Err(err),
            MissingDataPolicy::Lenient => {
                warn!(error = %err, "no usable Data object, lifted fields left absent");
                Ok(Map::new())
            }
        }
    }
}

/// simd-json recurses without a limit, so the nesting is checked up front
fn parse_simd(input: &mut [u8]) -> FlattenResult<Value> {
    check_depth(input, MAX_DEPTH)?;
    Ok(simd_json::serde::from_slice(input)?)
}

/// Scan brackets outside string literals and fail once nesting reaches `limit`
fn check_depth(input: &[u8], limit: usize) -> FlattenResult<()> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for &byte in input {
        if in_string {
            if escaped {
                escaped = false;
            } else if byte == b'\\' {
                escaped = true;
            } else if byte == b'"' {
                in_string = false;
            }
            continue;
        }

        match byte {
            b'"' => in_string = true,
            b'[' | b'{' => {
                depth += 1;
                if depth >= limit {
                    return Err(FlattenError::TooDeep { limit });
                }
            }
            b']' | b'}' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }

    Ok(())
}
