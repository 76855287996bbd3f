//! Document flattening - lift the fields of a nested `Data` object
//!
//! The transform copies `AppointmentId`, `TimestampUtc` and `Discipline`
//! from `Data` to the top level of the document and then removes `Data`.
//! Top-level key order is preserved; lifted keys are appended unless they
//! already exist.

pub mod error;
pub mod transform;
pub mod types;
pub mod writer;

pub use error::{FlattenError, FlattenResult};
pub use transform::Flattener;
pub use types::{FlattenConfig, MissingDataPolicy, OutputFormat, DATA_KEY, LIFTED_FIELDS};
pub use writer::DocumentWriter;
