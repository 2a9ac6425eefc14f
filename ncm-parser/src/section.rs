//! Length-prefixed section extraction

use std::io::{Read, Seek, SeekFrom};

use tracing::trace;

use crate::{Error, Result, ioutils};

/// One length-prefixed block of bytes within an NCM container.
///
/// A section is immutable once extracted and its byte count always matches
/// the length prefix recorded in the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    length: u64,
    bytes: Vec<u8>,
}

impl Section {
    /// Read a section at `offset`: a 4-byte little-endian length prefix
    /// followed by exactly that many bytes.
    ///
    /// All-or-nothing: a failed seek reports [`Error::Seek`], a short prefix
    /// or body reports [`Error::TruncatedData`], and no partial section is
    /// returned.
    pub fn read_at<R: Read + Seek>(reader: &mut R, offset: u64) -> Result<Self> {
        reader
            .seek(SeekFrom::Start(offset))
            .map_err(|e| Error::Seek { offset, source: e })?;

        let length = ioutils::read_u32le(reader)?;
        let mut bytes = vec![0; length as usize];
        ioutils::read_exact_counted(reader, &mut bytes)?;

        trace!("section at offset {offset}: {length} bytes");

        Ok(Self {
            length: u64::from(length),
            bytes,
        })
    }

    /// Build a section from bytes gathered without a length prefix.
    ///
    /// The trailing audio payload records no length in the file; its size is
    /// whatever remained in the source.
    pub(crate) fn from_bytes(bytes: Vec<u8>) -> Self {
        Self {
            length: bytes.len() as u64,
            bytes,
        }
    }

    /// Section length in bytes.
    pub fn len(&self) -> u64 {
        self.length
    }

    /// Whether the section holds no bytes.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Raw section bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consume the section, returning its bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}
