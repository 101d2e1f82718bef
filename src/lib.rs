//! npywriter serializes rectangular 2d f32 arrays into .npy files
#![deny(missing_docs)]

#[macro_use]
extern crate log;

/// error type shared by the encoder and the csv loader
pub mod error;
/// NPY v1.0 encoder (`>f4`, C order, 2d)
pub mod npy;
/// loading a float matrix from csv
pub mod input;

pub use crate::error::{NpyError, Result};
