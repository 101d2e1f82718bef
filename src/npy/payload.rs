use byteorder::{WriteBytesExt, BE};
use std::io::{self, Write};

/// Write every element row-major as a big endian f32. No separators, no count.
pub fn write_payload<W, R>(wtr: &mut W, arr: &[R]) -> Result<(), io::Error>
where
    W: Write + ?Sized,
    R: AsRef<[f32]>,
{
    for row in arr.iter() {
        for &x in row.as_ref().iter() {
            wtr.write_f32::<BE>(x)?;
        }
    }
    Ok(())
}
