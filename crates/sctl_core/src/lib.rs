//! Public library API for reading and rewriting SCUM server property blobs.

/// Property blob codec: type table, occurrence scanning, decoding, and in-place encoding.
pub mod blob;
/// In-game and real-time day/night cycle conversion.
pub mod clock;
