//! Property tests for framing header decoding
//!
//! The gating rules are length-class properties, so they are checked across
//! arbitrary payloads rather than a fixed scenario grid.

use byteorder::{BigEndian, ByteOrder};
use codec::{FrameSummary, RenderedFrame, FRAMED_HEADER_LEN, HEX_PREVIEW_LEN};
use proptest::prelude::*;

proptest! {
    #[test]
    fn magic_present_iff_payload_non_empty(payload in proptest::collection::vec(any::<u8>(), 0..64)) {
        let summary = FrameSummary::decode(&payload);

        prop_assert_eq!(summary.len, payload.len());
        prop_assert_eq!(summary.magic, payload.first().copied());
    }

    #[test]
    fn schema_id_absent_below_full_header(payload in proptest::collection::vec(any::<u8>(), 0..FRAMED_HEADER_LEN)) {
        let summary = FrameSummary::decode(&payload);

        prop_assert_eq!(summary.schema_id, None);
    }

    #[test]
    fn schema_id_matches_big_endian_field(payload in proptest::collection::vec(any::<u8>(), FRAMED_HEADER_LEN..256)) {
        let summary = FrameSummary::decode(&payload);

        let expected = BigEndian::read_u32(&payload[1..FRAMED_HEADER_LEN]);
        prop_assert_eq!(summary.schema_id, Some(expected));
    }

    #[test]
    fn preview_covers_min_of_twenty_and_len(payload in proptest::collection::vec(any::<u8>(), 0..64)) {
        let summary = FrameSummary::decode(&payload);

        let shown = payload.len().min(HEX_PREVIEW_LEN);
        prop_assert_eq!(summary.hex_preview(), hex::encode(&payload[..shown]));
    }

    #[test]
    fn rendered_block_line_count_follows_length_class(payload in proptest::collection::vec(any::<u8>(), 0..64)) {
        let summary = FrameSummary::decode(&payload);
        let block = RenderedFrame::new(&summary, 0).to_string();

        let expected_lines = match payload.len() {
            0 => 3,
            1..=4 => 4,
            _ => 5,
        };
        prop_assert_eq!(block.lines().count(), expected_lines);
    }
}
