use std::io;
use thiserror::Error;

/// Everything that can go wrong while turning rows of floats into npy bytes.
#[derive(Error, Debug)]
pub enum NpyError {
    /// the sink (or source) refused the bytes
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// no rows, or a first row with no columns
    #[error("array is empty: {rows} rows, {cols} columns")]
    EmptyArray {
        /// number of rows
        rows: usize,
        /// length of the first row
        cols: usize,
    },
    /// a row does not match the length of the first row
    #[error("ragged array: row {row} has {found} columns, expected {expected}")]
    RaggedArray {
        /// index of the offending row
        row: usize,
        /// length of the first row
        expected: usize,
        /// length of the offending row
        found: usize,
    },
    /// header block does not fit the 2 byte length field
    #[error("header is {0} bytes long, at most 65535 allowed")]
    HeaderTooLong(usize),
    /// csv reader failure
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    /// csv field is not a float
    #[error("line {line}: cannot parse {value:?} as f32")]
    ParseFloat {
        /// 1-based line in the csv input
        line: u64,
        /// offending field, trimmed
        value: String,
    },
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, NpyError>;

impl NpyError {
    /// true if the input itself was rejected, as opposed to an io/csv failure
    pub fn is_invalid_input(&self) -> bool {
        match *self {
            NpyError::EmptyArray { .. }
            | NpyError::RaggedArray { .. }
            | NpyError::HeaderTooLong(_)
            | NpyError::ParseFloat { .. } => true,
            NpyError::Io(_) | NpyError::Csv(_) => false,
        }
    }
}
