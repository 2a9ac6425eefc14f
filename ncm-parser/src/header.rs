//! Magic signature validation

use std::io::{Read, Seek, SeekFrom};

use tracing::debug;

use crate::{Error, Result, ioutils};

/// First magic word, `"CTEN"` read as a little-endian `u32`.
pub const MAGIC_FIRST: u32 = 0x4e45_5443;

/// Second magic word, `"FDAM"` read as a little-endian `u32`.
pub const MAGIC_SECOND: u32 = 0x4d41_4446;

/// Check the 8-byte magic signature at the start of the source.
///
/// Seeks to offset 0, reads two consecutive little-endian `u32` words and
/// compares them against [`MAGIC_FIRST`] and [`MAGIC_SECOND`]. A mismatch in
/// either word rejects the file, not only a mismatch in both. Leaves the
/// cursor at offset 8 on success.
pub(crate) fn check_magic<R: Read + Seek>(reader: &mut R) -> Result<()> {
    reader
        .seek(SeekFrom::Start(0))
        .map_err(|e| Error::Seek { offset: 0, source: e })?;

    let mut raw = [0; 8];
    ioutils::read_exact_counted(reader, &mut raw)?;

    let first = u32::from_le_bytes([raw[0], raw[1], raw[2], raw[3]]);
    let second = u32::from_le_bytes([raw[4], raw[5], raw[6], raw[7]]);

    if first != MAGIC_FIRST || second != MAGIC_SECOND {
        return Err(Error::InvalidMagic(raw));
    }

    debug!("magic signature ok: {}", hex::encode(raw));
    Ok(())
}
