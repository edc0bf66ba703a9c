//! On-disk cache entry format.
//!
//! One file per cached response: magic, format version, the stored URL,
//! content type, body, and a trailing crc32 of the body, verified on read.

use crate::error::{ReframeError, Result};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

/// Magic bytes for cache entry files.
const ENTRY_MAGIC: &[u8; 4] = b"CEN\0";

/// Current entry format version.
const ENTRY_VERSION: u8 = 1;

/// A cached response: the stored URL, its content type, and the body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CacheEntry {
    pub url: String,
    pub content_type: String,
    pub body: Vec<u8>,
}

impl CacheEntry {
    /// Write the entry to `path`, framed and checksummed.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        let mut file = File::create(path)?;

        file.write_all(ENTRY_MAGIC)?;
        file.write_all(&[ENTRY_VERSION])?;

        let url = self.url.as_bytes();
        file.write_all(&(url.len() as u16).to_le_bytes())?;
        file.write_all(url)?;

        let content_type = self.content_type.as_bytes();
        file.write_all(&(content_type.len() as u16).to_le_bytes())?;
        file.write_all(content_type)?;

        file.write_all(&(self.body.len() as u64).to_le_bytes())?;
        file.write_all(&self.body)?;

        let checksum = crc32fast::hash(&self.body);
        file.write_all(&checksum.to_le_bytes())?;

        file.sync_all()?;
        Ok(())
    }

    /// Read an entry back, verifying magic, version, and checksum.
    pub fn read_from(path: &Path) -> Result<Self> {
        let mut file = File::open(path)?;

        let mut magic = [0u8; 4];
        file.read_exact(&mut magic)?;
        if &magic != ENTRY_MAGIC {
            return Err(ReframeError::InvalidFormat("bad cache entry magic".into()));
        }

        let mut version = [0u8; 1];
        file.read_exact(&mut version)?;
        if version[0] != ENTRY_VERSION {
            return Err(ReframeError::InvalidFormat(format!(
                "unsupported cache entry version: {}",
                version[0]
            )));
        }

        let url = read_string(&mut file)?;
        let content_type = read_string(&mut file)?;

        let mut body_len = [0u8; 8];
        file.read_exact(&mut body_len)?;
        let mut body = vec![0u8; u64::from_le_bytes(body_len) as usize];
        file.read_exact(&mut body)?;

        let mut checksum = [0u8; 4];
        file.read_exact(&mut checksum)?;
        let stored = u32::from_le_bytes(checksum);
        let computed = crc32fast::hash(&body);
        if stored != computed {
            return Err(ReframeError::ChecksumMismatch {
                expected: stored,
                got: computed,
            });
        }

        Ok(Self {
            url,
            content_type,
            body,
        })
    }
}

fn read_string(file: &mut File) -> Result<String> {
    let mut len = [0u8; 2];
    file.read_exact(&mut len)?;
    let mut buf = vec![0u8; u16::from_le_bytes(len) as usize];
    file.read_exact(&mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
