use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::{NpyError, Result};

/// Read a matrix of floats, one csv record per row.
///
/// ```csv
/// 1.0, 2.0, 3.0
/// 4.0, 5.0, 6.0
/// ```
///
/// Fields are trimmed and empty lines skipped. Records of differing length
/// are returned as they are; the encoder decides what to do with them.
pub fn read_csv<R: Read>(rdr: R, has_headers: bool) -> Result<Vec<Vec<f32>>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(has_headers)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(rdr);

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record?;
        let line = record.position().map_or(0, |pos| pos.line());
        let row = record
            .iter()
            .map(|field| {
                field.parse::<f32>().map_err(|_| NpyError::ParseFloat {
                    line,
                    value: field.to_owned(),
                })
            })
            .collect::<Result<Vec<f32>>>()?;
        rows.push(row);
    }

    debug!("read {} rows from csv", rows.len());
    Ok(rows)
}

/// Same as `read_csv`, from a file.
pub fn read_csv_file<P: AsRef<Path>>(fname: P, has_headers: bool) -> Result<Vec<Vec<f32>>> {
    let file = File::open(fname)?;
    read_csv(BufReader::new(file), has_headers)
}
