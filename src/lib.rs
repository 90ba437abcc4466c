#![forbid(unsafe_code)]
#![warn(clippy::all)]
#![allow(clippy::needless_doctest_main)]
//! This crate generates a fixed-shape JSON document and reads it back, checking every value. It is a reproducible workload for benchmarking a JSON library, with the encoding and decoding done by [serde_json](https://docs.rs/serde_json).
//!
//! ## What does the document look like ?
//!
//! An object with 1000 keys, `array0` to `array999`, each holding 200 identical records:
//!
//! ```json
//! {
//!   "array0": [
//!     { "width": 10.0, "height": 16.0, "text": "Hello World" },
//!     ...
//!   ],
//!   ...
//! }
//! ```
//!
//! ## How to use it ?
//!
//! ### Generating
//!
//! ```rust,no_run
//! use json_workload::{generate, write, Format, Shape, DEFAULT_PATH};
//!
//! fn main() {
//!     let document = generate(Shape::default());
//!
//!     write(DEFAULT_PATH, &document, Format::Pretty).unwrap();
//! }
//! ```
//!
//! ### Validating
//!
//! ```rust,no_run
//! use json_workload::{validate_file, Shape, DEFAULT_PATH};
//!
//! fn main() {
//!     let report = validate_file(DEFAULT_PATH, Shape::default()).unwrap();
//!
//!     println!("Checked {} records", report.records);
//! }
//! ```
//!
//! The first failing check stops validation and is reported with its location:
//!
//! ```text
//! assertion failed: expected 10.0, found 11.0 at array3[17].width
//! ```
//!
//! The `generate` and `validate` binaries of the `json_workload_cli` package run the two steps against `test.json` in the working directory.

extern crate indexmap;
extern crate log;
extern crate serde;
extern crate serde_json;

mod generator;
mod ser;
mod validator;

pub mod error;
pub mod value;

pub use error::{Error, Kind};
pub use generator::{encode, generate, write, Format};
pub use validator::{decode, decode_document, validate, validate_file, validate_str, Report};
pub use value::{Document, Location, Position, Record, Shape};

/// File both binaries work on, relative to the working directory.
pub const DEFAULT_PATH: &str = "test.json";
