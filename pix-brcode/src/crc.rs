//! CRC-16/CCITT-FALSE, the checksum variant mandated for BR Codes.

const POLY: u16 = 0x1021;
const INIT: u16 = 0xFFFF;

/// Computes CRC-16/CCITT-FALSE over `data`.
///
/// Polynomial 0x1021, initial register 0xFFFF, no input or output
/// reflection, no final XOR. Scanning apps reject a payload whose trailing
/// checksum was computed with any other variant.
pub fn crc16_ccitt_false(data: &[u8]) -> u16 {
    let mut crc = INIT;
    for &byte in data {
        crc ^= (byte as u16) << 8;
        for _ in 0..8 {
            if crc & 0x8000 != 0 {
                crc = (crc << 1) ^ POLY;
            } else {
                crc <<= 1;
            }
        }
    }
    crc
}
