//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod config_value;
mod issue;
mod layer;
mod value;

pub use config_value::ConfigValue;
pub use issue::{IssueKind, ValidationIssue};
pub use layer::{Layer, LayerSource};
pub use value::{parse_bool_token, parse_int_token, Value, BOOL_TOKENS};
