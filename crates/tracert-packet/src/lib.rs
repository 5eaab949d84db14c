//! Packet wire format building for tracert.
//!
//! Only the `ICMPv4` echo request is built here, the UDP probe payload is a
//! fixed literal and needs no framing of its own.
//!
//! # Byte order
//!
//! The identifier and sequence fields of the echo request header are written
//! little-endian and the checksum is summed over little-endian word pairs.
//! The resulting checksum field is nevertheless correct on the wire, as the
//! one's complement sum is independent of the byte pairing.
//!
//! # Example
//!
//! ```rust
//! use tracert_packet::checksum::icmp_checksum;
//! use tracert_packet::icmpv4::build_icmp_echo;
//!
//! let packet = build_icmp_echo(1234, 1);
//! assert_eq!(packet, hex_literal::hex!("08 00 24 fb d2 04 01 00"));
//! assert_eq!(0, icmp_checksum(&packet));
//! ```
#![forbid(unsafe_code)]

/// Functions for calculating the `ICMP` checksum.
pub mod checksum;

/// `ICMPv4` echo request packets.
pub mod icmpv4;

/// Format a payload as a hexadecimal string.
#[must_use]
pub fn fmt_payload(bytes: &[u8]) -> String {
    use itertools::Itertools as _;
    format!("{:02x}", bytes.iter().format(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fmt_payload() {
        assert_eq!("08 00 ff 1a", fmt_payload(&[0x08, 0x00, 0xff, 0x1a]));
        assert_eq!("", fmt_payload(&[]));
    }
}
