//! Phonetic Encoder Tests
//!
//! Cross-encoder behaviour: sound-alike spellings share codes, and no
//! encoder panics on degenerate input.

use phonetic_lookup::normalize;
use phonetic_lookup::phonetic::{
    caverphone, double_metaphone, metaphone, nysiis, soundex, EncoderSet,
};

#[test]
fn test_sound_alikes_share_codes() {
    assert_eq!(soundex("Robert"), soundex("Rupert"));
    assert_eq!(metaphone("Knight"), metaphone("Night"));
    assert_eq!(caverphone("Stephen"), caverphone("Steven"));
    assert_eq!(nysiis("Knight"), nysiis("Night"));
}

#[test]
fn test_double_metaphone_alternate() {
    let (primary, alternate) = double_metaphone("Smith");
    assert_eq!(primary, "SM0");
    assert_eq!(alternate, "XMT");
}

#[test]
fn test_every_encoder_on_degenerate_input() {
    let encoders = EncoderSet::standard();
    for input in ["", " ", "_", "0", "!!", "ünïcödé", "a"] {
        for name in encoders.names() {
            // must not panic
            let _ = encoders.encode(name, input).unwrap();
        }
    }
}

#[test]
fn test_normalized_queries_encode_identically() {
    let encoders = EncoderSet::standard();
    let a = normalize("Value_Display").unwrap();
    let b = normalize("value display").unwrap();
    assert_eq!(encoders.encode_all(&a), encoders.encode_all(&b));
}

#[test]
fn test_normalize_properties() {
    assert_eq!(normalize("node7").unwrap(), "nodeseven");
    assert_eq!(normalize("a b").unwrap(), "ab");
    for text in ["Vector 3", "ad_d", "uv123", "float4x4"] {
        let once = normalize(text).unwrap();
        assert_eq!(normalize(&once).unwrap(), once);
    }
}
