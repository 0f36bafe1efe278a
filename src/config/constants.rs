//! # AVLDB Configuration Constants
//!
//! Centralized constants for the snapshot file format and the CLI defaults.
//! Values that depend on each other are co-located to prevent mismatch bugs.
//!
//! ## Snapshot File Layout
//!
//! ```text
//! Offset  Size  Description
//! ------  ----  -----------------------------------------
//! 0       16    SNAPSHOT_MAGIC
//! 16      4     SNAPSHOT_VERSION (little-endian u32)
//! 20      8     node count (u64)
//! 28      8     payload length in bytes (u64)
//! 36      4     CRC32 checksum of the payload (u32)
//! 40      24    reserved, zeroed
//! 64      ...   payload: node records, pre-order
//! ```
//!
//! The header occupies exactly [`SNAPSHOT_HEADER_SIZE`] bytes; the payload
//! starts immediately after it. `SnapshotFileHeader` in `storage::headers`
//! carries a compile-time assertion that its size matches this constant.
//!
//! ## Node Tags
//!
//! Every node record starts with a one-byte tag: [`NODE_ABSENT`] marks a
//! missing subtree, [`NODE_PRESENT`] is followed by the node fields and the
//! two child records. Any other tag value is rejected by the decoder.

/// Magic bytes identifying an AVLDB snapshot file.
pub const SNAPSHOT_MAGIC: &[u8; 16] = b"avldb snapshot\x00\x00";

/// Current snapshot format version.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Size of the fixed snapshot file header in bytes.
pub const SNAPSHOT_HEADER_SIZE: usize = 64;

/// Tag byte for an absent subtree in the snapshot payload.
pub const NODE_ABSENT: u8 = 0;

/// Tag byte for a present node in the snapshot payload.
pub const NODE_PRESENT: u8 = 1;

/// Default snapshot filename used by the CLI when no path is given.
pub const DEFAULT_SNAPSHOT_FILE: &str = "data.avldb";

const _: () = assert!(SNAPSHOT_MAGIC.len() == 16);
const _: () = assert!(NODE_ABSENT != NODE_PRESENT);
