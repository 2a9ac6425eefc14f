//! NCM container record and layout walker
//!
//! The walker extracts the four sections strictly in order. Each step feeds
//! the length it recorded into the offset computation for the next, so the
//! steps cannot be reordered or run against a fresh source independently.

use std::fs::File;
use std::io::{ErrorKind, Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::section::Section;
use crate::{Error, Result, header, layout};

/// File extension expected for NCM containers.
pub const NCM_EXTENSION: &str = "ncm";

/// Chunk size used when draining the trailing audio payload.
const AUDIO_CHUNK_SIZE: usize = 1024;

/// An NCM container and the sections extracted from it.
///
/// The container owns its byte source; dropping the container releases the
/// handle. Sections are populated monotonically by [`parse`](Self::parse) in
/// the fixed order key → metadata → cover → audio, and a failed step leaves
/// every later section absent.
///
/// The key and audio bytes are extracted still encrypted. What a caller does
/// with them (decrypt, decode, write to disk) is out of scope here.
pub struct NcmFile<R> {
    path: PathBuf,
    file_name: String,
    file_dir: PathBuf,
    extension: String,
    reader: R,
    valid: bool,
    key: Option<Section>,
    metadata: Option<Section>,
    cover: Option<Section>,
    audio: Option<Section>,
}

impl NcmFile<File> {
    /// Open the container at `path` read-only.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        debug!("opened {}", path.as_ref().display());
        Ok(Self::with_reader(path, file))
    }

    /// Metadata of the underlying file.
    pub fn file_metadata(&self) -> Result<std::fs::Metadata> {
        Ok(self.reader.metadata()?)
    }
}

impl<R: Read + Seek> NcmFile<R> {
    /// Wrap an already-open byte source.
    ///
    /// `path` supplies the extension check and diagnostics; no bytes are
    /// read here.
    pub fn with_reader<P: AsRef<Path>>(path: P, reader: R) -> Self {
        let path = path.as_ref().to_path_buf();
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let file_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            path,
            file_name,
            file_dir,
            extension,
            reader,
            valid: false,
            key: None,
            metadata: None,
            cover: None,
            audio: None,
        }
    }

    /// Check that this looks like an NCM container.
    ///
    /// The filename extension is compared case-insensitively before any byte
    /// is read; only then is the magic signature checked. On success the
    /// read cursor sits at offset 8.
    pub fn validate(&mut self) -> Result<()> {
        if !self.extension.eq_ignore_ascii_case(NCM_EXTENSION) {
            return Err(Error::InvalidExtension(self.extension.clone()));
        }

        header::check_magic(&mut self.reader)?;
        self.valid = true;
        Ok(())
    }

    /// Validate the container and extract all four sections.
    ///
    /// Steps run strictly in sequence and the first failure aborts the walk:
    /// sections extracted before the failing step remain available,
    /// everything from the failing step onward stays absent.
    pub fn parse(&mut self) -> Result<()> {
        self.validate()
            .inspect_err(|e| warn!("validation failed: {e}"))?;

        let key = self.read_section("key", layout::key_offset())?;
        let key_len = key.len();
        self.key = Some(key);

        let metadata = self.read_section("metadata", layout::metadata_offset(key_len))?;
        let metadata_len = metadata.len();
        self.metadata = Some(metadata);

        let cover = self.read_section("cover", layout::cover_offset(key_len, metadata_len))?;
        let cover_len = cover.len();
        self.cover = Some(cover);

        let audio = self
            .read_audio(layout::audio_offset(key_len, metadata_len, cover_len))
            .inspect_err(|e| warn!("audio payload read failed: {e}"))?;
        self.audio = Some(audio);

        Ok(())
    }

    fn read_section(&mut self, name: &str, offset: u64) -> Result<Section> {
        let section = Section::read_at(&mut self.reader, offset)
            .inspect_err(|e| warn!("{name} section read failed: {e}"))?;
        debug!("{name} section: {} bytes at offset {offset}", section.len());
        Ok(section)
    }

    /// Drain the trailing audio payload in fixed-size chunks.
    ///
    /// The payload has no length prefix; end-of-input terminates it. Bytes
    /// accumulated before a read error are discarded with the error.
    fn read_audio(&mut self, offset: u64) -> Result<Section> {
        self.reader
            .seek(SeekFrom::Start(offset))
            .map_err(|e| Error::Seek { offset, source: e })?;

        let mut bytes = Vec::new();
        let mut chunk = [0; AUDIO_CHUNK_SIZE];
        loop {
            match self.reader.read(&mut chunk) {
                Ok(0) => break,
                Ok(n) => bytes.extend_from_slice(&chunk[..n]),
                Err(e) if e.kind() == ErrorKind::Interrupted => {}
                Err(e) => return Err(Error::Io(e)),
            }
        }

        debug!("audio payload: {} bytes at offset {offset}", bytes.len());
        Ok(Section::from_bytes(bytes))
    }

    /// Whether the magic signature matched.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Path the container was opened from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name component of the path.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Directory component of the path.
    pub fn file_dir(&self) -> &Path {
        &self.file_dir
    }

    /// Extension component of the path, without the dot.
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// The encrypted key section, once extracted.
    pub fn key(&self) -> Option<&Section> {
        self.key.as_ref()
    }

    /// The metadata section, once extracted.
    pub fn metadata(&self) -> Option<&Section> {
        self.metadata.as_ref()
    }

    /// The cover image section, once extracted.
    pub fn cover(&self) -> Option<&Section> {
        self.cover.as_ref()
    }

    /// The encrypted audio payload, once extracted.
    pub fn audio(&self) -> Option<&Section> {
        self.audio.as_ref()
    }

    /// Release the container, handing the byte source back to the caller.
    pub fn into_inner(self) -> R {
        self.reader
    }
}
