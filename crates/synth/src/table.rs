//! Columnar view of generated clients.
//!
//! The column list is declared once in [`CLIENT_COLUMNS`] and every schema
//! (the plain listing and the Arrow one) is derived from it, so a zero-row
//! table and an N-row table always expose the same names and types.

use std::sync::Arc;

use arrow::array::{ArrayRef, Float64Builder, StringDictionaryBuilder, UInt8Builder};
use arrow::datatypes::{DataType, Field, Int8Type, Schema, SchemaRef};
use arrow::error::ArrowError;
use arrow::record_batch::RecordBatch;
use serde::Serialize;

use crate::record::SyntheticClientRecord;

// =============================================================================
// Column Schema
// =============================================================================

/// Declared type of a generated column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ColumnType {
    /// Dollar amount.
    Float64,
    /// Small non-negative integer (years, counts, Likert answers).
    UInt8,
    /// One of a fixed set of labels.
    Category,
}

impl ColumnType {
    /// Arrow type used when the table is materialized.
    pub fn data_type(self) -> DataType {
        match self {
            ColumnType::Float64 => DataType::Float64,
            ColumnType::UInt8 => DataType::UInt8,
            ColumnType::Category => {
                DataType::Dictionary(Box::new(DataType::Int8), Box::new(DataType::Utf8))
            }
        }
    }
}

/// Name and type of one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ColumnSpec {
    pub name: &'static str,
    pub ty: ColumnType,
}

const fn column(name: &'static str, ty: ColumnType) -> ColumnSpec {
    ColumnSpec { name, ty }
}

/// The eleven client columns, in generation order.
pub const CLIENT_COLUMNS: [ColumnSpec; 11] = [
    column("income", ColumnType::Float64),
    column("net_worth", ColumnType::Float64),
    column("liabilities", ColumnType::Float64),
    column("time_horizon_years", ColumnType::UInt8),
    column("dependents", ColumnType::UInt8),
    column("income_stability", ColumnType::Category),
    column("q1", ColumnType::UInt8),
    column("q2", ColumnType::UInt8),
    column("q3", ColumnType::UInt8),
    column("q4", ColumnType::UInt8),
    column("q5", ColumnType::UInt8),
];

/// Arrow schema for [`CLIENT_COLUMNS`]. All fields are non-nullable.
pub fn client_schema() -> SchemaRef {
    let fields: Vec<Field> = CLIENT_COLUMNS
        .iter()
        .map(|c| Field::new(c.name, c.ty.data_type(), false))
        .collect();
    Arc::new(Schema::new(fields))
}

// =============================================================================
// ClientTable
// =============================================================================

/// An ordered batch of generated clients.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ClientTable {
    rows: Vec<SyntheticClientRecord>,
}

impl ClientTable {
    pub fn new(rows: Vec<SyntheticClientRecord>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[SyntheticClientRecord] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SyntheticClientRecord> {
        self.rows.iter()
    }

    pub fn into_rows(self) -> Vec<SyntheticClientRecord> {
        self.rows
    }

    /// Declared columns. Independent of row count.
    pub fn columns(&self) -> &'static [ColumnSpec] {
        &CLIENT_COLUMNS
    }

    pub fn column_names(&self) -> Vec<&'static str> {
        CLIENT_COLUMNS.iter().map(|c| c.name).collect()
    }

    pub fn arrow_schema(&self) -> SchemaRef {
        client_schema()
    }

    /// Row-by-row bitwise comparison.
    pub fn bit_identical(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .rows
                .iter()
                .zip(&other.rows)
                .all(|(a, b)| a.bit_identical(b))
    }

    /// Materialize as a single Arrow batch with the fixed client schema.
    pub fn to_record_batch(&self) -> Result<RecordBatch, ArrowError> {
        let num_rows = self.rows.len();

        let mut income = Float64Builder::with_capacity(num_rows);
        let mut net_worth = Float64Builder::with_capacity(num_rows);
        let mut liabilities = Float64Builder::with_capacity(num_rows);
        let mut horizon = UInt8Builder::with_capacity(num_rows);
        let mut dependents = UInt8Builder::with_capacity(num_rows);
        let mut stability = StringDictionaryBuilder::<Int8Type>::new();
        let mut answers: [UInt8Builder; 5] =
            std::array::from_fn(|_| UInt8Builder::with_capacity(num_rows));

        for record in &self.rows {
            income.append_value(record.income);
            net_worth.append_value(record.net_worth);
            liabilities.append_value(record.liabilities);
            horizon.append_value(record.time_horizon_years);
            dependents.append_value(record.dependents);
            stability.append(record.income_stability.as_str())?;
            for (builder, answer) in answers.iter_mut().zip(record.answers()) {
                builder.append_value(answer.get());
            }
        }

        let mut columns: Vec<ArrayRef> = vec![
            Arc::new(income.finish()),
            Arc::new(net_worth.finish()),
            Arc::new(liabilities.finish()),
            Arc::new(horizon.finish()),
            Arc::new(dependents.finish()),
            Arc::new(stability.finish()),
        ];
        for builder in answers.iter_mut() {
            columns.push(Arc::new(builder.finish()));
        }

        RecordBatch::try_new(client_schema(), columns)
    }
}

impl<'a> IntoIterator for &'a ClientTable {
    type Item = &'a SyntheticClientRecord;
    type IntoIter = std::slice::Iter<'a, SyntheticClientRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
