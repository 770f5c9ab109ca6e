//! YAML parsing into a canonical value tree.
//!
//! Wraps `yaml-rust2`'s event parser so that the rest of the crate sees one
//! representation of mappings (ordered pairs, duplicates allowed) and one
//! error type.

pub mod error;
pub mod parser;
pub mod schema;
pub mod types;

pub use error::ParseFailure;
pub use parser::parse;
pub use types::{
    DEFAULT_MAX_ALIAS_COUNT, DEFAULT_MAX_DEPTH, ParseOptions, ParsedValue, Point, Scalar, YamlVersion,
};
