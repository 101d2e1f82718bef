//! Preamble and header block.
//!
//! Offset 00: ([u8; 6]) magic value 0x93 'NUMPY'
//! Offset 06: (u8) major version 0x01
//! Offset 07: (u8) minor version 0x00
//! Offset 08: (u16, little endian) header block length
//! Offset 10: ascii dict literal, space padded, newline terminated
//!
//! `10 + header block length` is always a multiple of 16.

use byteorder::{WriteBytesExt, LE};
use std::convert::TryFrom;
use std::io::Write;

use super::shape::Shape;
use crate::error::{NpyError, Result};

/// `\x93NUMPY`
pub static MAGIC_VALUE: &[u8] = &[0x93, 0x4E, 0x55, 0x4D, 0x50, 0x59];
/// format major version
pub const VERSION_MAJOR: u8 = 0x01;
/// format minor version
pub const VERSION_MINOR: u8 = 0x00;
/// magic value + version + header length field
pub const PREAMBLE_LEN: usize = 10;
/// the header block ends on a multiple of this
pub const ALIGNMENT: usize = 16;
/// big endian 4 byte float
pub const DESCR: &str = ">f4";

/// The dict literal describing dtype, order and shape. Not padded.
pub fn header_text(shape: Shape) -> String {
    format!(
        "{{'descr': '{}', 'fortran_order': False, 'shape': {}, }}",
        DESCR, shape
    )
}

/// Number of padding bytes that follow a header text of `header_text_len` bytes.
///
/// Always in `1..=16`: when the text already ends on the boundary a full
/// block of padding is added so the newline terminator has somewhere to go.
pub fn padding_len(header_text_len: usize) -> usize {
    ALIGNMENT - (PREAMBLE_LEN + header_text_len) % ALIGNMENT
}

/// Spaces followed by a single `\n`.
pub fn padding(header_text_len: usize) -> Vec<u8> {
    let len = padding_len(header_text_len);
    let mut pad = vec![b' '; len];
    pad[len - 1] = b'\n';
    pad
}

/// Write magic value, version and the little endian length of the header block
/// (header text plus padding).
pub fn write_preamble<W: Write + ?Sized>(wtr: &mut W, header_len: usize) -> Result<()> {
    let len = u16::try_from(header_len).map_err(|_| NpyError::HeaderTooLong(header_len))?;
    wtr.write_all(MAGIC_VALUE)?;
    wtr.write_u8(VERSION_MAJOR)?;
    wtr.write_u8(VERSION_MINOR)?;
    wtr.write_u16::<LE>(len)?;
    Ok(())
}
