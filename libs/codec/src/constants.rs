//! Wire-format constants for registry-framed payloads
//!
//! These values are part of the framing convention and must stay consistent
//! with what schema-registry producers actually emit.

/// Conventional marker value for registry-framed payloads
///
/// Producers that encode through a schema registry prefix the serialized
/// record with this single byte. The inspector reports the byte it finds
/// and never rejects other values.
pub const REGISTRY_WIRE_MAGIC: u8 = 0x00;

/// Offset of the schema identifier within a framed payload
pub const SCHEMA_ID_OFFSET: usize = 1;

/// Width of the schema identifier field in bytes (big-endian u32)
pub const SCHEMA_ID_LEN: usize = 4;

/// Minimum payload length carrying a complete framing header
///
/// One marker byte plus the 4-byte schema identifier. Shorter payloads are
/// still summarized, with the missing fields omitted.
pub const FRAMED_HEADER_LEN: usize = SCHEMA_ID_OFFSET + SCHEMA_ID_LEN;

/// Number of leading payload bytes shown in the hex preview
pub const HEX_PREVIEW_LEN: usize = 20;
