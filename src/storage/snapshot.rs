//! # Snapshot Codec
//!
//! Converts an [`AvlTree`] to and from its durable byte representation.
//! The encoding mirrors the node graph exactly: each node becomes a record
//! carrying its key, its cached height verbatim, its value, and its two
//! child records. Decoding rehydrates the stored heights without
//! recomputing them, so a round trip reproduces the tree shape bit for
//! bit.
//!
//! ## Payload Encoding
//!
//! Node records are written in pre-order. Each record is:
//!
//! ```text
//! tag: u8            NODE_ABSENT (0) or NODE_PRESENT (1)
//! -- present nodes only --
//! key: i64           little-endian
//! height: u32        little-endian, stored verbatim
//! value_len: u32     little-endian
//! value: [u8]        UTF-8, value_len bytes
//! left: record       recursive
//! right: record      recursive
//! ```
//!
//! An empty tree encodes to the single absent tag.
//!
//! ## Validation
//!
//! The decoder is an explicit parser: every read is bounds-checked, tags
//! and UTF-8 are validated, the payload must be fully consumed, and the
//! decoded key count must match the header's node count. Structural
//! violations fail decoding. The BST/AVL semantics of a well-formed record
//! are trusted, matching the save/load contract: snapshots are only ever
//! written from a valid tree.
//!
//! ## Key Collection
//!
//! Keys are collected in pre-order (node, left subtree, right subtree)
//! while decoding and become the reloaded tree's key-set order.

use crc::{Crc, CRC_32_ISO_HDLC};
use eyre::{bail, ensure, Result};
use zerocopy::IntoBytes;

use crate::config::{NODE_ABSENT, NODE_PRESENT, SNAPSHOT_HEADER_SIZE};
use crate::storage::headers::SnapshotFileHeader;
use crate::tree::{AvlTree, Link, TreeNode};

const CRC32: Crc<u32> = Crc::<u32>::new(&CRC_32_ISO_HDLC);

pub struct SnapshotCodec;

impl SnapshotCodec {
    /// Encodes the tree as a complete snapshot file image: header plus
    /// pre-order node payload.
    pub fn encode(tree: &AvlTree) -> Result<Vec<u8>> {
        let mut payload = Vec::new();
        Self::encode_node(tree.root(), &mut payload)?;

        let checksum = CRC32.checksum(&payload);
        let header =
            SnapshotFileHeader::new(tree.len() as u64, payload.len() as u64, checksum);

        let mut bytes = Vec::with_capacity(SNAPSHOT_HEADER_SIZE + payload.len());
        bytes.extend_from_slice(header.as_bytes());
        bytes.extend_from_slice(&payload);
        Ok(bytes)
    }

    /// Decodes a snapshot file image back into a live tree.
    pub fn decode(bytes: &[u8]) -> Result<AvlTree> {
        let header = SnapshotFileHeader::from_bytes(bytes)?;
        let payload = &bytes[SNAPSHOT_HEADER_SIZE..];

        ensure!(
            payload.len() as u64 == header.payload_len(),
            "snapshot payload length mismatch: {} bytes on disk, header says {}",
            payload.len(),
            header.payload_len()
        );
        ensure!(
            CRC32.checksum(payload) == header.payload_crc(),
            "snapshot payload checksum mismatch"
        );

        let mut keys = Vec::new();
        let (root, pos) = Self::decode_node(payload, 0, &mut keys)?;
        ensure!(
            pos == payload.len(),
            "trailing bytes after snapshot root record: {} of {} consumed",
            pos,
            payload.len()
        );
        ensure!(
            keys.len() as u64 == header.node_count(),
            "snapshot node count mismatch: decoded {}, header says {}",
            keys.len(),
            header.node_count()
        );

        Ok(AvlTree::from_parts(root, keys))
    }

    fn encode_node(node: Option<&TreeNode>, buf: &mut Vec<u8>) -> Result<()> {
        let Some(node) = node else {
            buf.push(NODE_ABSENT);
            return Ok(());
        };

        buf.push(NODE_PRESENT);
        buf.extend(node.key().to_le_bytes());
        buf.extend(node.height().to_le_bytes());

        let value = node.value().as_bytes();
        ensure!(
            value.len() <= u32::MAX as usize,
            "record value for key {} is too long ({} bytes)",
            node.key(),
            value.len()
        );
        buf.extend((value.len() as u32).to_le_bytes());
        buf.extend(value);

        Self::encode_node(node.left(), buf)?;
        Self::encode_node(node.right(), buf)
    }

    fn decode_node(bytes: &[u8], mut pos: usize, keys: &mut Vec<i64>) -> Result<(Link, usize)> {
        ensure!(pos < bytes.len(), "unexpected end of data reading node tag");
        let tag = bytes[pos];
        pos += 1;

        if tag == NODE_ABSENT {
            return Ok((None, pos));
        }
        if tag != NODE_PRESENT {
            bail!("invalid node tag {} at offset {}", tag, pos - 1);
        }

        ensure!(pos + 8 <= bytes.len(), "unexpected end of data reading node key");
        let key = i64::from_le_bytes([
            bytes[pos],
            bytes[pos + 1],
            bytes[pos + 2],
            bytes[pos + 3],
            bytes[pos + 4],
            bytes[pos + 5],
            bytes[pos + 6],
            bytes[pos + 7],
        ]);
        pos += 8;
        keys.push(key);

        ensure!(pos + 4 <= bytes.len(), "unexpected end of data reading node height");
        let height =
            u32::from_le_bytes([bytes[pos], bytes[pos + 1], bytes[pos + 2], bytes[pos + 3]]);
        pos += 4;

        ensure!(pos + 4 <= bytes.len(), "unexpected end of data reading value length");
        let value_len =
            u32::from_le_bytes([bytes[pos], bytes[pos + 1], bytes[pos + 2], bytes[pos + 3]])
                as usize;
        pos += 4;

        ensure!(
            pos + value_len <= bytes.len(),
            "unexpected end of data reading value for key {}",
            key
        );
        let value = std::str::from_utf8(&bytes[pos..pos + value_len])
            .map_err(|e| eyre::eyre!("invalid UTF-8 in value for key {}: {}", key, e))?
            .to_string();
        pos += value_len;

        let (left, pos) = Self::decode_node(bytes, pos, keys)?;
        let (right, pos) = Self::decode_node(bytes, pos, keys)?;

        let node = Box::new(TreeNode {
            key,
            value,
            height,
            left,
            right,
        });
        Ok((Some(node), pos))
    }
}
