//!
//! Writer for NPY v1.0 files holding a 2d array of big endian f32.
//!
//! File Spec:
//! Offset 00: ([u8; 10]) preamble - magic value, version, header length (see `header`)
//! Offset 10: header text + padding, ends on a 16 byte boundary
//! Offset 10 + header length: rows * cols * 4 bytes of `>f4`, row major
//!

/// preamble, header text and padding
pub mod header;
/// raw data section
pub mod payload;
/// shape detection and validation
pub mod shape;

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::error::Result;
pub use self::shape::Shape;

// preamble + header block of any 2d shape fits in this
const HEADER_BLOCK_HINT: usize = 128;

/// Write preamble, header and payload of an already measured array.
fn encode_into<W, R>(wtr: &mut W, shape: Shape, arr: &[R]) -> Result<()>
where
    W: Write + ?Sized,
    R: AsRef<[f32]>,
{
    let text = header::header_text(shape);
    let padding = header::padding(text.len());
    let header_len = text.len() + padding.len();

    header::write_preamble(wtr, header_len)?;
    wtr.write_all(text.as_bytes())?;
    wtr.write_all(&padding)?;
    payload::write_payload(wtr, arr)?;

    debug!(
        "encoded {} array: header {} bytes, payload {} bytes",
        shape,
        header_len,
        shape.payload_len()
    );
    Ok(())
}

/// Encode `arr` into a complete npy byte stream.
///
/// The array is validated first (non empty, rectangular); nothing is
/// produced for rejected input.
pub fn to_bytes<R: AsRef<[f32]>>(arr: &[R]) -> Result<Vec<u8>> {
    let shape = Shape::of(arr)?;
    let mut buf = Vec::with_capacity(HEADER_BLOCK_HINT + shape.payload_len());
    encode_into(&mut buf, shape, arr)?;
    Ok(buf)
}

/// Encode `arr` and hand it to `wtr` in one `write_all`, then flush.
/// Returns the shape that was written.
pub fn write<W, R>(wtr: &mut W, arr: &[R]) -> Result<Shape>
where
    W: Write + ?Sized,
    R: AsRef<[f32]>,
{
    let shape = Shape::of(arr)?;
    let mut buf = Vec::with_capacity(HEADER_BLOCK_HINT + shape.payload_len());
    encode_into(&mut buf, shape, arr)?;
    wtr.write_all(&buf)?;
    wtr.flush()?;
    Ok(shape)
}

fn file_writer<P: AsRef<Path>>(fname: P) -> io::Result<BufWriter<File>> {
    Ok(BufWriter::new(File::create(fname)?))
}

/// Write `arr` to the file at `fname`, creating or truncating it, and return
/// the shape that was written.
///
/// The array is validated before the file is touched, so invalid input leaves
/// an existing file alone. The handle is closed on every path.
pub fn save<P, R>(fname: P, arr: &[R]) -> Result<Shape>
where
    P: AsRef<Path>,
    R: AsRef<[f32]>,
{
    let shape = Shape::of(arr)?;
    let mut wtr = file_writer(fname.as_ref())?;
    encode_into(&mut wtr, shape, arr)?;
    wtr.flush()?;
    debug!("wrote {} array to {}", shape, fname.as_ref().display());
    Ok(shape)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NpyError;
    use npyz::{NpyFile, Order};

    /// decode with a real npy reader: (shape, order, data)
    fn read_npy(bytes: &[u8]) -> (Vec<u64>, Order, Vec<f32>) {
        let npy = NpyFile::new(bytes).unwrap();
        let shape = npy.shape().to_vec();
        let order = npy.order();
        (shape, order, npy.into_vec::<f32>().unwrap())
    }

    struct BrokenSink;

    impl Write for BrokenSink {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "read only"))
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn should_encode_1x1() {
        let bytes = to_bytes(&[[1.0f32]]).unwrap();
        assert_eq!(bytes.len(), 84);
        assert_eq!(&bytes[..8], b"\x93NUMPY\x01\x00");
        assert_eq!(&bytes[8..10], &[70, 0]);
        assert_eq!(
            &bytes[10..68],
            &b"{'descr': '>f4', 'fortran_order': False, 'shape': (1,1), }"[..]
        );
        assert!(bytes[68..79].iter().all(|&b| b == b' '));
        assert_eq!(bytes[79], b'\n');
        assert_eq!(&bytes[80..], &[0x3F, 0x80, 0x00, 0x00]);
    }

    #[test]
    fn should_encode_2x3_zeros() {
        let arr = vec![vec![0f32; 3]; 2];
        let bytes = to_bytes(&arr).unwrap();
        let (shape, order, data) = read_npy(&bytes);
        assert_eq!(shape, vec![2, 3]);
        assert!(matches!(order, Order::C));
        assert_eq!(bytes.len(), 80 + 24);
        assert!(bytes[80..].iter().all(|&b| b == 0));
        assert_eq!(data, vec![0.; 6]);
    }

    #[test]
    fn should_hold_layout_invariants() {
        for &(rows, cols) in &[(1, 1), (1, 7), (3, 1), (9, 10), (100, 1000), (123_456, 2)] {
            let arr: Vec<Vec<f32>> = (0..rows)
                .map(|r| (0..cols).map(|c| (r * cols + c) as f32).collect())
                .collect();
            let bytes = to_bytes(&arr).unwrap();
            let header_len = u16::from_le_bytes([bytes[8], bytes[9]]) as usize;
            assert_eq!((10 + header_len) % 16, 0);
            assert_eq!(bytes[10 + header_len - 1], b'\n');
            assert_eq!(bytes.len(), 10 + header_len + 4 * rows * cols);

            let (shape, order, data) = read_npy(&bytes);
            assert_eq!(shape, vec![rows as u64, cols as u64]);
            assert!(matches!(order, Order::C));
            let flat: Vec<f32> = arr.iter().flatten().cloned().collect();
            assert_eq!(data, flat);
        }
    }

    #[test]
    fn should_be_deterministic() {
        let arr = vec![vec![0.1f32, -2.5, 3e7], vec![f32::MIN, f32::MAX, 1e-40]];
        assert_eq!(to_bytes(&arr).unwrap(), to_bytes(&arr).unwrap());
    }

    #[test]
    fn should_write_nothing_for_ragged_input() {
        let arr = vec![vec![1f32, 2.], vec![3.]];
        let mut sink: Vec<u8> = Vec::new();
        match write(&mut sink, &arr) {
            Err(NpyError::RaggedArray { row: 1, expected: 2, found: 1 }) => (),
            other => panic!("unexpected {:?}", other),
        }
        assert!(sink.is_empty());
    }

    #[test]
    fn should_write_nothing_for_empty_input() {
        let arr: Vec<Vec<f32>> = vec![];
        let mut sink: Vec<u8> = Vec::new();
        match write(&mut sink, &arr) {
            Err(NpyError::EmptyArray { .. }) => (),
            other => panic!("unexpected {:?}", other),
        }
        assert!(sink.is_empty());
    }

    #[test]
    fn should_surface_sink_failure() {
        match write(&mut BrokenSink, &[[1f32, 2.]]) {
            Err(NpyError::Io(e)) => assert_eq!(e.kind(), io::ErrorKind::PermissionDenied),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn should_write_through_trait_object() {
        let mut sink: Vec<u8> = Vec::new();
        {
            let wtr: &mut dyn Write = &mut sink;
            assert_eq!(write(wtr, &[[2f32]]).unwrap(), Shape { rows: 1, cols: 1 });
        }
        assert_eq!(sink, to_bytes(&[[2f32]]).unwrap());
    }
}
