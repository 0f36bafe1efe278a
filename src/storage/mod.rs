//! # Storage Layer
//!
//! Durable persistence for AVLDB: one snapshot file holding the complete
//! serialized tree. Saving replaces the whole file; loading reads and
//! validates the whole file. There is no incremental or streaming path.
//!
//! ## File Format
//!
//! A snapshot file is a fixed 64-byte header (see [`headers`]) followed by
//! the pre-order node payload (see [`snapshot`]). The header carries magic
//! bytes, the format version, the node count, the payload length, and a
//! CRC32 checksum of the payload.
//!
//! ## Atomic Replacement
//!
//! [`persist`] writes the new snapshot to a sibling temp file and renames
//! it over the destination, so a crash mid-write leaves the previous
//! snapshot intact.
//!
//! ## Missing Snapshots
//!
//! [`restore`] treats a missing or zero-length file as an empty tree; a
//! first run starts with no snapshot on disk. Any other read or parse
//! failure is an error: a corrupt snapshot must not be silently replaced
//! by an empty tree on the next save.
//!
//! ## Module Organization
//!
//! - [`headers`]: zerocopy snapshot file header
//! - [`snapshot`]: tree ↔ bytes codec

pub mod headers;
pub mod snapshot;

pub use headers::SnapshotFileHeader;
pub use snapshot::SnapshotCodec;

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use eyre::{Result, WrapErr};

use crate::tree::AvlTree;

/// Writes the tree's snapshot to `path`, overwriting any prior content.
pub fn persist(tree: &AvlTree, path: &Path) -> Result<()> {
    let bytes = SnapshotCodec::encode(tree)?;

    let tmp = path.with_extension("tmp");
    fs::write(&tmp, &bytes)
        .wrap_err_with(|| format!("failed to write snapshot temp file {:?}", tmp))?;
    fs::rename(&tmp, path)
        .wrap_err_with(|| format!("failed to move snapshot into place at {:?}", path))?;
    Ok(())
}

/// Reads the snapshot at `path` and rebuilds the tree. A missing or empty
/// file yields a fresh empty tree; a malformed file is an error.
pub fn restore(path: &Path) -> Result<AvlTree> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(AvlTree::new()),
        Err(e) => {
            return Err(e).wrap_err_with(|| format!("failed to read snapshot at {:?}", path))
        }
    };

    if bytes.is_empty() {
        return Ok(AvlTree::new());
    }

    SnapshotCodec::decode(&bytes)
        .wrap_err_with(|| format!("malformed snapshot at {:?}", path))
}
