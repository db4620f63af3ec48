//! Payload framing summary - decoding and rendering
//!
//! Decoding is total: any byte sequence, including an empty one, produces a
//! summary. Payload length gates which fields are present - a marker byte
//! needs at least 1 byte, a schema identifier needs the full 5-byte header.
//! Nothing here validates the marker value or resolves the schema id.

use std::fmt;

use byteorder::{BigEndian, ByteOrder};

use crate::constants::{FRAMED_HEADER_LEN, HEX_PREVIEW_LEN, REGISTRY_WIRE_MAGIC, SCHEMA_ID_OFFSET};

/// Decoded framing header of one message payload
///
/// Ephemeral by design: built from a payload, rendered, then dropped. The
/// payload itself is only borrowed during [`FrameSummary::decode`]; the
/// summary keeps a copy of the leading preview bytes and nothing else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameSummary {
    /// Payload length in bytes
    pub len: usize,
    /// First payload byte, present for any non-empty payload
    pub magic: Option<u8>,
    /// Big-endian u32 at offsets 1..=4, present when the full header fits
    pub schema_id: Option<u32>,
    preview: Vec<u8>,
}

impl FrameSummary {
    /// Decode the framing header of `payload`
    ///
    /// Never fails: short or empty payloads yield a summary with the
    /// unreachable fields set to `None`.
    pub fn decode(payload: &[u8]) -> Self {
        let len = payload.len();
        let magic = payload.first().copied();
        let schema_id = if len >= FRAMED_HEADER_LEN {
            Some(BigEndian::read_u32(
                &payload[SCHEMA_ID_OFFSET..FRAMED_HEADER_LEN],
            ))
        } else {
            None
        };

        Self {
            len,
            magic,
            schema_id,
            preview: payload[..len.min(HEX_PREVIEW_LEN)].to_vec(),
        }
    }

    /// Whether the payload leads with the conventional registry marker
    ///
    /// Diagnostic hint only - a `false` here is reported, never rejected.
    pub fn is_registry_framed(&self) -> bool {
        self.magic == Some(REGISTRY_WIRE_MAGIC)
    }

    /// Lowercase hex of the first `min(20, len)` payload bytes
    ///
    /// Truncates, never pads: a 6-byte payload previews 6 bytes.
    pub fn hex_preview(&self) -> String {
        hex::encode(&self.preview)
    }
}

/// Printable summary block for one message
///
/// Pairs a [`FrameSummary`] with the zero-based ordinal used for display
/// labeling. The rendered block is the inspector's entire stdout contract:
///
/// ```text
/// Message 0:
///   Length: 6
///   First 20 bytes (hex): 0000000001ab
///   Magic byte: 0x0
///   Schema ID: 1
/// ```
///
/// The marker and schema lines are omitted when the payload is too short to
/// carry them.
pub struct RenderedFrame<'a> {
    summary: &'a FrameSummary,
    index: usize,
}

impl<'a> RenderedFrame<'a> {
    pub fn new(summary: &'a FrameSummary, index: usize) -> Self {
        Self { summary, index }
    }
}

impl fmt::Display for RenderedFrame<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Message {}:", self.index)?;
        writeln!(f, "  Length: {}", self.summary.len)?;
        write!(
            f,
            "  First {} bytes (hex): {}",
            HEX_PREVIEW_LEN,
            self.summary.hex_preview()
        )?;
        if let Some(magic) = self.summary.magic {
            write!(f, "\n  Magic byte: {:#x}", magic)?;
        }
        if let Some(schema_id) = self.summary.schema_id {
            write!(f, "\n  Schema ID: {}", schema_id)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_payload_omits_header_fields() {
        let summary = FrameSummary::decode(&[]);

        assert_eq!(summary.len, 0);
        assert_eq!(summary.magic, None);
        assert_eq!(summary.schema_id, None);
        assert_eq!(summary.hex_preview(), "");
    }

    #[test]
    fn test_single_byte_payload_has_magic_only() {
        let summary = FrameSummary::decode(&[0x05]);

        assert_eq!(summary.len, 1);
        assert_eq!(summary.magic, Some(0x05));
        assert_eq!(summary.schema_id, None);
    }

    #[test]
    fn test_four_byte_payload_still_omits_schema_id() {
        let summary = FrameSummary::decode(&[0x00, 0x00, 0x00, 0x01]);

        assert_eq!(summary.magic, Some(0x00));
        assert_eq!(summary.schema_id, None);
    }

    #[test]
    fn test_framed_payload_decodes_schema_id() {
        let summary = FrameSummary::decode(&[0x00, 0x00, 0x00, 0x00, 0x01, 0xAB]);

        assert_eq!(summary.len, 6);
        assert_eq!(summary.magic, Some(0x00));
        assert_eq!(summary.schema_id, Some(1));
    }

    #[test]
    fn test_schema_id_is_big_endian() {
        let summary = FrameSummary::decode(&[0x00, 0x12, 0x34, 0x56, 0x78]);

        assert_eq!(summary.schema_id, Some(0x1234_5678));
    }

    #[test]
    fn test_preview_truncates_at_twenty_bytes() {
        let payload: Vec<u8> = (0u8..32).collect();
        let summary = FrameSummary::decode(&payload);

        // 20 bytes -> 40 hex chars, no padding
        assert_eq!(summary.hex_preview().len(), 40);
        assert_eq!(summary.hex_preview(), hex::encode(&payload[..20]));
    }

    #[test]
    fn test_registry_framing_hint() {
        assert!(FrameSummary::decode(&[0x00, 0x00, 0x00, 0x00, 0x01]).is_registry_framed());
        assert!(!FrameSummary::decode(&[0x7b, 0x22]).is_registry_framed());
        assert!(!FrameSummary::decode(&[]).is_registry_framed());
    }

    #[test]
    fn test_rendered_block_full_header() {
        let summary = FrameSummary::decode(&[0x00, 0x00, 0x00, 0x00, 0x01, 0xAB]);
        let block = RenderedFrame::new(&summary, 0).to_string();

        assert_eq!(
            block,
            "Message 0:\n  Length: 6\n  First 20 bytes (hex): 0000000001ab\n  Magic byte: 0x0\n  Schema ID: 1"
        );
    }

    #[test]
    fn test_rendered_block_empty_payload() {
        let summary = FrameSummary::decode(&[]);
        let block = RenderedFrame::new(&summary, 2).to_string();

        assert_eq!(
            block,
            "Message 2:\n  Length: 0\n  First 20 bytes (hex): "
        );
        assert!(!block.contains("Magic byte"));
        assert!(!block.contains("Schema ID"));
    }

    #[test]
    fn test_rendered_block_short_payload() {
        let summary = FrameSummary::decode(&[0x05]);
        let block = RenderedFrame::new(&summary, 1).to_string();

        assert!(block.contains("  Magic byte: 0x5"));
        assert!(!block.contains("Schema ID"));
    }

    #[test]
    fn test_hex_preview_is_lowercase() {
        let summary = FrameSummary::decode(&[0xAB, 0xCD, 0xEF]);

        assert_eq!(summary.hex_preview(), "abcdef");
    }
}
