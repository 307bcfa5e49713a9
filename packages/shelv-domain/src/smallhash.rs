use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};

const POLY: u32 = 0x04C1_1DB7;

/// Derives the 6-character permalink hash for a link id.
///
/// The encoding is a compatibility surface for published permalinks and must
/// stay bit-for-bit stable: CRC-32/BZIP2 over the UTF-8 bytes of the id, the
/// checksum serialized little-endian, then base64 with the URL-safe alphabet
/// and no padding.
pub fn small_hash(id: &str) -> String {
	URL_SAFE_NO_PAD.encode(crc32_bzip2(id.as_bytes()).to_le_bytes())
}

// CRC-32/BZIP2: polynomial 0x04C11DB7, init 0xFFFFFFFF, no bit reflection,
// final XOR 0xFFFFFFFF.
fn crc32_bzip2(data: &[u8]) -> u32 {
	let mut crc = u32::MAX;

	for byte in data {
		crc ^= u32::from(*byte) << 24;

		for _ in 0..8 {
			crc = if crc & 0x8000_0000 != 0 { (crc << 1) ^ POLY } else { crc << 1 };
		}
	}

	!crc
}
