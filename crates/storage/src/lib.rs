//! Storage layer for the risk profiler.
//!
//! **Philosophy:** Declarative, Modular, SoC
//! - Declarative: Schema comes from the synthetic table, never re-derived here
//! - Modular: The generator and engine know nothing about files
//! - SoC: This crate ONLY handles persistence of generated tables
//!
//! The core components have no file surface. Export is an optional outer
//! layer used by the command-line tool.

pub mod parquet_writer;

pub use parquet_writer::{ExportError, read_row_count, write_parquet};
