//! Geotable - coordinate tables for the embedded world map
//!
//! Converts a line-oriented text file of longitude/latitude pairs into a
//! statically sized Rust array declaration that the map renderer compiles in.
//!
//! The pipeline is strictly sequential:
//!
//! 1. [`record::parse_line`] turns one line into at most one [`CoordinatePair`]
//! 2. [`table::build_table`] folds every line into a [`RecordTable`]
//! 3. [`render::render`] serializes the table into an [`OutputDocument`]
//! 4. [`converter::Converter::run`] loads the input and writes the document
//!
//! # Example
//!
//! ```
//! use geotable::{build_table, render, RenderConfig};
//!
//! let table = build_table("1.0 2.0\nmalformed\n3.0 4.0\n");
//! assert_eq!(table.len(), 2);
//!
//! let document = render(&table, &RenderConfig::default());
//! assert!(document
//!     .as_str()
//!     .contains("pub static WORLD_HIGH_RESOLUTION: [(f64, f64); 2] = ["));
//! ```

pub mod converter;
pub mod error;
pub mod logging;
pub mod output;
pub mod record;
pub mod render;
pub mod table;

pub use converter::{ConversionReport, Converter, ConverterConfig, DEFAULT_DESTINATION};
pub use error::{ConvertError, ConvertResult};
pub use record::{parse_line, CoordinatePair};
pub use render::{render, FloatType, OutputDocument, RenderConfig, Visibility};
pub use table::{build_table, RecordTable};
