//! Self-describing bitstream framing.
//!
//! A payload is framed as its length in a 4 byte big-endian prefix followed
//! by the payload bytes, then flattened into single bits, most significant
//! bit first per byte. The wire byte order is fixed to big-endian and does
//! not depend on the host.

use std::io::Cursor;

use bitstream_io::{BigEndian, BitRead, BitReader, BitWrite, BitWriter};
use byteorder::{NetworkEndian, ReadBytesExt};

use crate::error::VeilbitError;
use crate::result::Result;

/// Bits occupied by the length prefix.
pub const LENGTH_HEADER_BITS: usize = 32;

const LENGTH_HEADER_BYTES: usize = LENGTH_HEADER_BITS / 8;

/// Flatten a payload into the framed bit sequence.
pub fn decompose(payload: &[u8]) -> Vec<bool> {
    let mut frame = Vec::with_capacity(LENGTH_HEADER_BYTES + payload.len());
    frame.extend_from_slice(&(payload.len() as u32).to_be_bytes());
    frame.extend_from_slice(payload);

    let mut bits = Vec::with_capacity(frame.len() * 8);
    let mut reader = BitReader::endian(Cursor::new(&frame), BigEndian);
    while let Ok(bit) = reader.read_bit() {
        bits.push(bit);
    }

    bits
}

/// Pack a bit sequence back into the payload it frames.
///
/// A trailing partial byte is ignored; the stream may be longer than the
/// frame since carriers yield every bit position they have.
pub fn assemble(bits: &[bool]) -> Result<Vec<u8>> {
    let aligned = bits.len() - bits.len() % 8;
    let mut bytes: Vec<u8> = Vec::with_capacity(aligned / 8);
    {
        let mut writer = BitWriter::endian(&mut bytes, BigEndian);
        for &bit in &bits[..aligned] {
            writer.write_bit(bit)?;
        }
    }

    if bytes.len() < LENGTH_HEADER_BYTES {
        return Err(VeilbitError::TruncatedStream {
            needed: LENGTH_HEADER_BITS,
            available: bits.len(),
        });
    }

    let declared = Cursor::new(&bytes).read_u32::<NetworkEndian>()? as usize;
    if bytes.len() < LENGTH_HEADER_BYTES + declared {
        return Err(VeilbitError::TruncatedStream {
            needed: LENGTH_HEADER_BITS + declared * 8,
            available: bits.len(),
        });
    }

    Ok(bytes[LENGTH_HEADER_BYTES..LENGTH_HEADER_BYTES + declared].to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_frame_length_prefix_msb_first() {
        let bits = decompose(b"\xff");
        assert_eq!(bits.len(), LENGTH_HEADER_BITS + 8);
        // big-endian 1u32: 31 zero bits then a one
        assert!(bits[..31].iter().all(|&b| !b));
        assert!(bits[31]);
        // the payload byte 0xff
        assert!(bits[32..].iter().all(|&b| b));
    }

    #[test]
    fn should_round_trip_through_frame() {
        let payload = b"arbitrary \x00\x01\x02 binary".to_vec();
        let bits = decompose(&payload);
        assert_eq!(assemble(&bits).unwrap(), payload);
    }

    #[test]
    fn should_round_trip_empty_payload() {
        let bits = decompose(b"");
        assert_eq!(bits.len(), LENGTH_HEADER_BITS);
        assert_eq!(assemble(&bits).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn should_ignore_trailing_noise_bits() {
        let payload = b"payload".to_vec();
        let mut bits = decompose(&payload);
        // carriers yield their full bit budget, so the tail is noise
        bits.extend([true, false, true, true, false, true, false, false, true]);
        assert_eq!(assemble(&bits).unwrap(), payload);
    }

    #[test]
    fn should_ignore_trailing_partial_byte() {
        let payload = vec![0xA5; 3];
        let mut bits = decompose(&payload);
        bits.extend([true; 5]);
        assert_eq!(assemble(&bits).unwrap(), payload);
    }

    #[test]
    fn should_fail_on_stream_shorter_than_header() {
        match assemble(&[true; 12]) {
            Err(VeilbitError::TruncatedStream {
                needed: 32,
                available: 12,
            }) => (),
            other => panic!("expected TruncatedStream, got {other:?}"),
        }
    }

    #[test]
    fn should_fail_when_declared_length_is_not_satisfied() {
        let bits = decompose(&vec![7u8; 16]);
        let truncated = &bits[..bits.len() - 16];
        match assemble(truncated) {
            Err(VeilbitError::TruncatedStream { needed, available }) => {
                assert_eq!(needed, 32 + 16 * 8);
                assert_eq!(available, truncated.len());
            }
            other => panic!("expected TruncatedStream, got {other:?}"),
        }
    }
}
