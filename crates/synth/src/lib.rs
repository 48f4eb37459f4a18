//! Seeded synthetic client data for the risk profiler.
//!
//! Produces tables of plausible clients spanning the input domain of the
//! scoring engine, for bulk tests and demos. The crate depends only on the
//! shared types; it never calls the scoring engine.
//!
//! # Reproducibility
//!
//! Each call owns a `rand::rngs::StdRng` seeded with `seed_from_u64`. Rows
//! are drawn one at a time, columns in schema order, so the same
//! `(count, seed)` always yields the same table for a given `rand` version.
//! Passing no seed draws one from the operating system.
//!
//! # Validation
//!
//! All argument checks run before the random source exists. A failed call
//! consumes no randomness and returns no partial table.

pub mod config;
pub mod distributions;
pub mod error;
pub mod generator;
pub mod record;
pub mod table;
pub mod validate;

pub use config::{GeneratorConfig, IntRange, LogNormalParams, NormalParams};
pub use error::{ErrorKind, Result, SynthError};
pub use generator::{
    ClientGenerator, generate_synthetic, generate_synthetic_json, generate_with_config,
};
pub use record::SyntheticClientRecord;
pub use table::{CLIENT_COLUMNS, ClientTable, ColumnSpec, ColumnType, client_schema};
