//! Internal utility functions

use std::io::{ErrorKind, Read};

use crate::{Error, Result};

/// Read exactly `buf.len()` bytes from `reader`.
///
/// Unlike [`Read::read_exact`], a source that ends early reports how many
/// bytes were actually available, which parse errors surface to the caller.
pub(crate) fn read_exact_counted<R: Read>(reader: &mut R, buf: &mut [u8]) -> Result<()> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => {
                return Err(Error::TruncatedData {
                    expected: buf.len() as u64,
                    actual: filled as u64,
                });
            }
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => {}
            Err(e) => return Err(Error::Io(e)),
        }
    }
    Ok(())
}

/// Read a little-endian `u32` from the reader.
pub(crate) fn read_u32le<R: Read>(reader: &mut R) -> Result<u32> {
    let mut b = [0; size_of::<u32>()];
    read_exact_counted(reader, &mut b)?;
    Ok(u32::from_le_bytes(b))
}
