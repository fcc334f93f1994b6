//! Byte-to-text decoding for corpus files.

use encoding_rs::{DecoderResult, Encoding};

/// Decodes `bytes`, dropping malformed sequences instead of replacing them.
pub fn decode_ignoring_malformed(bytes: &[u8], encoding: &'static Encoding) -> String {
    let mut decoder = encoding.new_decoder_without_bom_handling();
    let capacity = decoder
        .max_utf8_buffer_length_without_replacement(bytes.len())
        .unwrap_or(bytes.len() * 3);
    let mut text = String::with_capacity(capacity);

    let mut input = bytes;
    loop {
        let (result, read) = decoder.decode_to_string_without_replacement(input, &mut text, true);
        input = &input[read..];
        match result {
            DecoderResult::InputEmpty => break,
            DecoderResult::Malformed(_, _) => {}
            DecoderResult::OutputFull => text.reserve(input.len() * 3 + 16),
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use encoding_rs::GBK;

    use super::*;

    #[test]
    fn decodes_gbk_pairs() {
        assert_eq!(decode_ignoring_malformed(b"caf\xb7\xa2 offer", GBK), "caf\u{53d1} offer");
    }

    #[test]
    fn drops_malformed_bytes() {
        let text = decode_ignoring_malformed(b"cheap \xff offer", GBK);
        assert!(!text.contains('\u{fffd}'));
        assert!(text.starts_with("cheap"));
        assert!(text.ends_with(" offer"));
    }

    #[test]
    fn other_encodings_by_label() {
        let utf8 = Encoding::for_label(b"utf-8").unwrap();
        assert_eq!(decode_ignoring_malformed("naïve".as_bytes(), utf8), "naïve");
    }
}
