use crate::checksum::icmp_checksum;

/// The `ICMP` type of an echo request.
pub const ECHO_REQUEST_TYPE: u8 = 8;

/// The `ICMP` code of an echo request.
pub const ECHO_REQUEST_CODE: u8 = 0;

/// The size of an echo request without payload.
pub const ECHO_REQUEST_PACKET_SIZE: usize = 8;

const TYPE_OFFSET: usize = 0;
const CODE_OFFSET: usize = 1;
const CHECKSUM_OFFSET: usize = 2;
const IDENTIFIER_OFFSET: usize = 4;
const SEQUENCE_OFFSET: usize = 6;

/// Build an `ICMPv4` echo request with a valid checksum.
///
/// Layout: `type(1) code(1) checksum(2) identifier(2) sequence(2)`, with the
/// identifier and sequence written little-endian.
#[must_use]
pub fn build_icmp_echo(identifier: u16, sequence: u16) -> [u8; ECHO_REQUEST_PACKET_SIZE] {
    let mut packet = echo_header(identifier, sequence, 0);
    let checksum = icmp_checksum(&packet);
    packet[CHECKSUM_OFFSET..IDENTIFIER_OFFSET].copy_from_slice(&checksum.to_be_bytes());
    packet
}

fn echo_header(identifier: u16, sequence: u16, checksum: u16) -> [u8; ECHO_REQUEST_PACKET_SIZE] {
    let mut packet = [0_u8; ECHO_REQUEST_PACKET_SIZE];
    packet[TYPE_OFFSET] = ECHO_REQUEST_TYPE;
    packet[CODE_OFFSET] = ECHO_REQUEST_CODE;
    packet[CHECKSUM_OFFSET..IDENTIFIER_OFFSET].copy_from_slice(&checksum.to_be_bytes());
    packet[IDENTIFIER_OFFSET..SEQUENCE_OFFSET].copy_from_slice(&identifier.to_le_bytes());
    packet[SEQUENCE_OFFSET..].copy_from_slice(&sequence.to_le_bytes());
    packet
}
