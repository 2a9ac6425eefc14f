//! Offset computations for the chained container layout
//!
//! Nothing after the magic signature sits at a fixed offset: each section
//! starts where the previous one ended, plus a handful of framing bytes
//! particular to that transition. The functions here derive every offset as
//! a pure function of the previously recorded section lengths, so the ladder
//! can be checked without a byte source.

/// Size of the magic signature at the start of the file.
pub const MAGIC_LEN: u64 = 8;

/// Width of each section's length prefix.
pub const LENGTH_PREFIX_LEN: u64 = 4;

/// Reserved bytes between the magic signature and the key section.
const HEADER_GAP_LEN: u64 = 2;

/// Framing bytes between the metadata bytes and the cover section: a 4-byte
/// CRC-style field (consumed, never recorded) followed by 5 reserved/flag
/// bytes.
const METADATA_TRAILER_LEN: u64 = 9;

/// Offset of the key section's length prefix.
pub const fn key_offset() -> u64 {
    MAGIC_LEN + HEADER_GAP_LEN
}

/// Offset of the metadata section's length prefix.
pub const fn metadata_offset(key_len: u64) -> u64 {
    key_offset() + LENGTH_PREFIX_LEN + key_len
}

/// Offset of the cover section's length prefix.
pub const fn cover_offset(key_len: u64, metadata_len: u64) -> u64 {
    metadata_offset(key_len) + LENGTH_PREFIX_LEN + metadata_len + METADATA_TRAILER_LEN
}

/// Offset where the trailing audio payload begins.
///
/// The payload carries no length prefix of its own; it runs from here to
/// end-of-input.
pub const fn audio_offset(key_len: u64, metadata_len: u64, cover_len: u64) -> u64 {
    cover_offset(key_len, metadata_len) + LENGTH_PREFIX_LEN + cover_len
}
