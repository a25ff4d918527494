//! Property-based tests over randomized input
//!
//! The input buffers this crate handles are legacy, corruption-exposed
//! data; whatever the bytes, parsing and decoding must return errors
//! rather than panic or read out of bounds.

use is3lib::{explode_bytes, parse_file_table, scan};
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_explode_never_panics(data in prop::collection::vec(any::<u8>(), 0..2000)) {
        // Random bytes are rarely a valid stream; failure must be a
        // graceful error
        let _ = explode_bytes(&data);
    }
}

proptest! {
    #[test]
    fn test_scan_never_panics(data in prop::collection::vec(any::<u8>(), 0..4000)) {
        let headers: Vec<_> = scan(&data).collect();
        // Headers come back in ascending offset order
        for pair in headers.windows(2) {
            prop_assert!(pair[0].offset < pair[1].offset);
        }
    }
}

proptest! {
    #[test]
    fn test_parse_never_panics_on_random_tables(
        data in prop::collection::vec(any::<u8>(), 0x33..3000),
        name_offset in 0u32..4000,
        file_count in 0u16..200,
        dir_count in 0u16..200,
    ) {
        // Synthesize a header pointing anywhere, including past the end
        let mut buffer = data;
        buffer[..4].copy_from_slice(&[0x13, 0x5D, 0x65, 0x8C]);
        buffer[0x0C..0x0E].copy_from_slice(&file_count.to_le_bytes());
        buffer[0x29..0x2D].copy_from_slice(&name_offset.to_le_bytes());
        buffer[0x31..0x33].copy_from_slice(&dir_count.to_le_bytes());

        if let Some(header) = scan(&buffer).next() {
            let table = parse_file_table(&buffer, &header);
            // Whatever was parsed, payload offsets stay sequential
            let mut expected = header.offset + 0xFF;
            for file in &table.files {
                prop_assert_eq!(file.compressed_offset, expected);
                expected += file.compressed_size as u64;
            }
        }
    }
}

proptest! {
    #[test]
    fn test_valid_prefix_with_random_tail(tail in prop::collection::vec(any::<u8>(), 0..500)) {
        // A known-good stream followed by garbage still decodes: the end
        // code terminates the stream before the tail is reached
        let mut data = vec![0x00, 0x04, 0x82, 0x08, 0x19, 0xF8, 0x07];
        data.extend_from_slice(&tail);
        prop_assert_eq!(explode_bytes(&data).unwrap(), b"ABC");
    }
}
