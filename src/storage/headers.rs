//! # Snapshot File Header
//!
//! Type-safe, zerocopy-based header for AVLDB snapshot files. The header
//! occupies the first [`SNAPSHOT_HEADER_SIZE`] bytes of the file and
//! identifies the format, the payload extent, and the payload checksum.
//!
//! ## Header Layout
//!
//! ```text
//! Offset  Size  Field
//! ------  ----  ------------------------------
//! 0       16    magic
//! 16      4     version
//! 20      8     node_count
//! 28      8     payload_len
//! 36      4     payload_crc
//! 40      24    reserved (zeroed)
//! ```
//!
//! ## Zerocopy Safety
//!
//! The struct derives the zerocopy traits so it can be read from and
//! written as raw bytes without copying:
//! - `FromBytes`: safe to read from arbitrary bytes
//! - `IntoBytes`: safe to write as bytes
//! - `Immutable`: no interior mutability
//! - `KnownLayout`: compile-time size verification
//! - `Unaligned`: works at any offset
//!
//! ## Endianness
//!
//! All multi-byte fields use little-endian encoding via the zerocopy
//! `U32`/`U64` wrapper types.

use eyre::{ensure, Result};
use zerocopy::little_endian::{U32, U64};
use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout, Unaligned};

use crate::config::{SNAPSHOT_HEADER_SIZE, SNAPSHOT_MAGIC, SNAPSHOT_VERSION};

#[repr(C)]
#[derive(Debug, Clone, Copy, FromBytes, IntoBytes, Immutable, KnownLayout, Unaligned)]
pub struct SnapshotFileHeader {
    magic: [u8; 16],
    version: U32,
    node_count: U64,
    payload_len: U64,
    payload_crc: U32,
    reserved: [u8; 24],
}

const _: () = assert!(std::mem::size_of::<SnapshotFileHeader>() == SNAPSHOT_HEADER_SIZE);

impl SnapshotFileHeader {
    pub fn new(node_count: u64, payload_len: u64, payload_crc: u32) -> Self {
        Self {
            magic: *SNAPSHOT_MAGIC,
            version: U32::new(SNAPSHOT_VERSION),
            node_count: U64::new(node_count),
            payload_len: U64::new(payload_len),
            payload_crc: U32::new(payload_crc),
            reserved: [0u8; 24],
        }
    }

    /// Parses and validates a header from the start of `bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Result<&Self> {
        ensure!(
            bytes.len() >= SNAPSHOT_HEADER_SIZE,
            "buffer too small for SnapshotFileHeader: {} < {}",
            bytes.len(),
            SNAPSHOT_HEADER_SIZE
        );

        let header = Self::ref_from_bytes(&bytes[..SNAPSHOT_HEADER_SIZE])
            .map_err(|e| eyre::eyre!("failed to parse SnapshotFileHeader: {:?}", e))?;

        ensure!(
            &header.magic == SNAPSHOT_MAGIC,
            "invalid magic bytes in snapshot file"
        );

        ensure!(
            header.version.get() == SNAPSHOT_VERSION,
            "unsupported snapshot version: {} (expected {})",
            header.version.get(),
            SNAPSHOT_VERSION
        );

        Ok(header)
    }

    pub fn version(&self) -> u32 {
        self.version.get()
    }

    pub fn node_count(&self) -> u64 {
        self.node_count.get()
    }

    pub fn payload_len(&self) -> u64 {
        self.payload_len.get()
    }

    pub fn payload_crc(&self) -> u32 {
        self.payload_crc.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zerocopy::IntoBytes;

    #[test]
    fn header_round_trips_through_bytes() {
        let header = SnapshotFileHeader::new(7, 321, 0xDEAD_BEEF);
        let bytes = header.as_bytes().to_vec();

        let parsed = SnapshotFileHeader::from_bytes(&bytes).unwrap();
        assert_eq!(parsed.version(), SNAPSHOT_VERSION);
        assert_eq!(parsed.node_count(), 7);
        assert_eq!(parsed.payload_len(), 321);
        assert_eq!(parsed.payload_crc(), 0xDEAD_BEEF);
    }

    #[test]
    fn short_buffer_is_rejected() {
        let header = SnapshotFileHeader::new(0, 0, 0);
        let bytes = header.as_bytes();

        let err = SnapshotFileHeader::from_bytes(&bytes[..10]).unwrap_err();
        assert!(err.to_string().contains("too small"));
    }

    #[test]
    fn wrong_magic_is_rejected() {
        let header = SnapshotFileHeader::new(0, 0, 0);
        let mut bytes = header.as_bytes().to_vec();
        bytes[0] ^= 0xFF;

        let err = SnapshotFileHeader::from_bytes(&bytes).unwrap_err();
        assert!(err.to_string().contains("magic"));
    }

    #[test]
    fn unsupported_version_is_rejected() {
        let header = SnapshotFileHeader::new(0, 0, 0);
        let mut bytes = header.as_bytes().to_vec();
        bytes[16] = 99;

        let err = SnapshotFileHeader::from_bytes(&bytes).unwrap_err();
        assert!(err.to_string().contains("version"));
    }
}
