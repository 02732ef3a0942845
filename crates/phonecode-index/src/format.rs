// Index snapshot format: header parsing, validation

use crate::IndexError;

/// Snapshot magic constants (little-endian). The first reads "CNHP" on disk.
const COOKIE1: u32 = 0x5048_4E43;
const COOKIE2: u32 = 0x0001_7D1A;

/// Current snapshot format version.
pub const FORMAT_VERSION: u32 = 1;

/// Size of the snapshot header in bytes.
pub const HEADER_SIZE: usize = 24;

/// Parsed snapshot header.
///
/// The header occupies the first 24 bytes of a snapshot, all fields `u32`
/// little-endian:
/// - bytes 0..8: cookie1, cookie2
/// - bytes 8..12: format version
/// - bytes 12..16: node count
/// - bytes 16..20: word span count
/// - bytes 20..24: text block length in bytes
///
/// The node table, span table and text block follow the header in that order.
/// Records are stored in native layout, so snapshots are only portable between
/// little-endian targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexHeader {
    pub node_count: u32,
    pub span_count: u32,
    pub text_len: u32,
}

/// Returns `true` if `data` starts with the snapshot cookies.
///
/// Used to tell snapshots apart from plain word lists without a full parse.
pub fn is_snapshot(data: &[u8]) -> bool {
    data.len() >= 8 && read_u32(data, 0) == COOKIE1 && read_u32(data, 4) == COOKIE2
}

/// Parses and validates the 24-byte snapshot header.
pub fn parse_header(data: &[u8]) -> Result<IndexHeader, IndexError> {
    if data.len() < HEADER_SIZE {
        return Err(IndexError::TooShort {
            expected: HEADER_SIZE,
            actual: data.len(),
        });
    }
    if !is_snapshot(data) {
        return Err(IndexError::InvalidMagic);
    }

    let version = read_u32(data, 8);
    if version != FORMAT_VERSION {
        return Err(IndexError::UnsupportedVersion(version));
    }

    Ok(IndexHeader {
        node_count: read_u32(data, 12),
        span_count: read_u32(data, 16),
        text_len: read_u32(data, 20),
    })
}

/// Appends the header for `header` to `out`.
pub fn write_header(header: &IndexHeader, out: &mut Vec<u8>) {
    out.extend_from_slice(&COOKIE1.to_le_bytes());
    out.extend_from_slice(&COOKIE2.to_le_bytes());
    out.extend_from_slice(&FORMAT_VERSION.to_le_bytes());
    out.extend_from_slice(&header.node_count.to_le_bytes());
    out.extend_from_slice(&header.span_count.to_le_bytes());
    out.extend_from_slice(&header.text_len.to_le_bytes());
}

#[inline]
fn read_u32(data: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([data[at], data[at + 1], data[at + 2], data[at + 3]])
}
