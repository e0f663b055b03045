//! # minijson-core
//!
//! A minimal JSON value tree with a recursive-descent parser and a compact
//! serializer, meant for embedding in programs that want JSON without a
//! full-blown serialization framework.
//!
//! The supported grammar is a deliberate subset of JSON: numbers are
//! non-negative integers (no sign, fraction, or exponent), `\uXXXX` escapes
//! are rejected, and the comma between elements/members is optional — both
//! `[1 2 3]` and `[1,2,3,]` parse to the same three-element array. Input
//! outside the subset fails with an explicit error rather than being guessed
//! at.
//!
//! ## Quick start
//!
//! ```rust
//! use minijson_core::{parse, serialize, Value};
//!
//! let config = parse(r#"{"name": "demo", "retries": 3, "verbose": true}"#).unwrap();
//! assert_eq!(config.get_number("retries"), 3);
//! assert_eq!(config.get_str("name"), Some("demo"));
//!
//! let mut tags = Value::new_array();
//! tags.push_string("a");
//! tags.push_string("b");
//! assert_eq!(serialize(&tags), r#"["a", "b"]"#);
//! ```
//!
//! ## Modules
//!
//! - [`value`] — the [`Value`] tree: constructors, mutators, typed accessors
//! - [`parser`] — JSON text → [`Value`]
//! - [`serializer`] — [`Value`] → compact JSON text
//! - [`error`] — parse error types

pub mod error;
pub mod parser;
pub mod serializer;
pub mod value;

pub use error::{JsonError, Result};
pub use parser::parse;
pub use serializer::{serialize, write_value};
pub use value::Value;
