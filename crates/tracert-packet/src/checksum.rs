//! One's complement checksum over little-endian word pairs.

/// Calculate the checksum field for an `ICMP` packet.
///
/// The returned value is octet swapped and is expected to be written to the
/// packet in network byte order.
///
/// Summing a packet which already carries a valid checksum yields `0`.
#[must_use]
pub fn icmp_checksum(data: &[u8]) -> u16 {
    finalize_checksum(sum_le_words(data)).swap_bytes()
}

/// The folded one's complement sum of `data`.
///
/// A packet with a valid checksum folds to `0xFFFF`.
#[must_use]
pub fn ones_complement_sum(data: &[u8]) -> u16 {
    fold(sum_le_words(data)) as u16
}

fn sum_le_words(data: &[u8]) -> u32 {
    let mut chunks = data.chunks_exact(2);
    let mut sum = chunks.by_ref().fold(0u32, |sum, pair| {
        sum.wrapping_add(u32::from(u16::from_le_bytes([pair[0], pair[1]])))
    });
    if let [last] = chunks.remainder() {
        sum = sum.wrapping_add(u32::from(*last));
    }
    sum
}

const fn fold(mut sum: u32) -> u32 {
    while sum >> 16 != 0 {
        sum = (sum >> 16) + (sum & 0xFFFF);
    }
    sum
}

const fn finalize_checksum(sum: u32) -> u16 {
    !fold(sum) as u16
}
