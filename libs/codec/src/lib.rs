//! # Wirepeek Framing Codec
//!
//! ## Purpose
//!
//! This crate contains the decoding rules for wirepeek: how a raw message
//! payload is summarized into its framing header fields, and how that summary
//! is rendered for human inspection. The format it understands is the
//! registry wire framing used by schema-registry producers: a single magic
//! byte followed by a 4-byte big-endian schema identifier, then the
//! serialized record.
//!
//! ## What This Crate Contains
//!
//! - `FrameSummary`: the decoded header summary (length, magic byte, schema id)
//! - `RenderedFrame`: the printable multi-line summary block
//! - Wire-format constants (marker value, field offsets, preview width)
//!
//! ## What This Crate Does NOT Contain
//!
//! - Broker connectivity or message iteration (belongs in services/inspector)
//! - Schema registry lookups of any kind
//! - Validation of the marker value or schema id - decoding is total and a
//!   short payload simply yields a shorter summary

pub mod constants;
pub mod framing;

pub use constants::{FRAMED_HEADER_LEN, HEX_PREVIEW_LEN, REGISTRY_WIRE_MAGIC};
pub use framing::{FrameSummary, RenderedFrame};
