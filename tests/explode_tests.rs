//! Tests for the DCL explode decoder
//!
//! The bitstream fixtures are spelled out byte by byte; each one was
//! assembled by hand from the canonical code tables (LSB-first packing,
//! inverted-bit Huffman codes) so the expected output is known exactly.

use is3lib::{explode_bytes, Is3Error};

/// Three raw literals followed by the end-of-stream length code
#[test]
fn test_binary_literals() {
    let data = [0x00, 0x04, 0x82, 0x08, 0x19, 0xF8, 0x07];
    assert_eq!(explode_bytes(&data).unwrap(), b"ABC");
}

/// A literal run, then a length-3 match at distance 3
#[test]
fn test_match_copy() {
    let data = [0x00, 0x04, 0x82, 0x08, 0x19, 0xFA, 0x12, 0xF0, 0x0F];
    assert_eq!(explode_bytes(&data).unwrap(), b"ABCABC");
}

/// Known-good vector from the public DCL reference decoder
#[test]
fn test_dcl_reference_vector() {
    let data = hex::decode("00048224258f807f").unwrap();
    assert_eq!(explode_bytes(&data).unwrap(), b"AIAIAIAIAIAIA");
}

/// ASCII mode: literals come from the coded literal table
#[test]
fn test_ascii_literals() {
    let data = [0x01, 0x04, 0x8E, 0x77, 0x02, 0xFE, 0x01];
    assert_eq!(explode_bytes(&data).unwrap(), b"a a");
}

/// A length-2 match always carries 2 distance extra bits, so the same
/// stream body decodes identically for every dictionary size
#[test]
fn test_length_two_ignores_dictionary_bits() {
    for dict_bits in [4u8, 5, 6] {
        let data = [0x00, dict_bits, 0xB0, 0x64, 0xED, 0x05, 0xFC, 0x03];
        assert_eq!(
            explode_bytes(&data).unwrap(),
            b"XYXY",
            "dict_bits = {dict_bits}"
        );
    }
}

/// Overlapping copy: distance shorter than length repeats fresh output
#[test]
fn test_overlapping_copy() {
    // The reference vector's match has distance 2 and length 11, so most
    // of the copy reads bytes the copy itself just wrote.
    let data = [0x00, 0x04, 0x82, 0x24, 0x25, 0x8F, 0x80, 0x7F];
    let out = explode_bytes(&data).unwrap();
    assert_eq!(out.len(), 13);
    assert!(out.chunks(2).all(|c| c[0] == b'A'));
}

/// A back-reference into history that does not exist yet must fail
#[test]
fn test_distance_too_far() {
    // One literal, then a match at distance 3
    let data = [0x00, 0x04, 0x82, 0xBE, 0x00];
    let err = explode_bytes(&data).unwrap_err();
    assert!(matches!(err, Is3Error::DistanceTooFar { distance: 3, .. }));
    assert!(err.is_decode_error());
}

#[test]
fn test_invalid_compression_mode() {
    let err = explode_bytes(&[0x02, 0x04, 0x00]).unwrap_err();
    assert!(matches!(err, Is3Error::InvalidCompressionMode(2)));
}

#[test]
fn test_invalid_dictionary_bits() {
    for bad in [0u8, 3, 7, 0xFF] {
        let err = explode_bytes(&[0x00, bad, 0x00]).unwrap_err();
        assert!(matches!(err, Is3Error::InvalidDictionaryBits(b) if b == bad));
    }
}

#[test]
fn test_truncated_input() {
    assert!(matches!(
        explode_bytes(&[]).unwrap_err(),
        Is3Error::UnexpectedEof
    ));
    assert!(matches!(
        explode_bytes(&[0x00]).unwrap_err(),
        Is3Error::UnexpectedEof
    ));
    // Valid header but no bitstream behind it
    assert!(matches!(
        explode_bytes(&[0x00, 0x04]).unwrap_err(),
        Is3Error::UnexpectedEof
    ));
}

/// Decoding is pure: the same stream decodes to the same bytes every time
#[test]
fn test_decode_is_deterministic() {
    let data = [0x00, 0x04, 0x82, 0x08, 0x19, 0xF8, 0x07];
    assert_eq!(explode_bytes(&data).unwrap(), explode_bytes(&data).unwrap());
}
