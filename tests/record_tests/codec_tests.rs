//! Codec Tests
//!
//! Tests for record line encoding/decoding.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use logkv::record::{decode, encode, validate_key, Record};
use logkv::LogKvError;

// =============================================================================
// Round-trip Tests
// =============================================================================

#[test]
fn test_encode_decode_simple() {
    let line = encode("x", "1");
    let record = decode(&line).unwrap();

    assert_eq!(record, Record::new("x", "1"));
}

#[test]
fn test_value_with_comma_and_newline() {
    let line = encode("k", "a,b\nc");
    let record = decode(&line).unwrap();

    assert_eq!(record.key, "k");
    assert_eq!(record.value, "a,b\nc");
}

#[test]
fn test_multibyte_text() {
    let line = encode("flag", "🇸🇪 smörgåsbord");
    let record = decode(&line).unwrap();

    assert_eq!(record.value, "🇸🇪 smörgåsbord");
}

#[test]
fn test_json_value_with_punctuation() {
    let value = r#"[{"1":"This is a string, with some punctuation."}]"#;
    let record = decode(&encode("z", value)).unwrap();

    assert_eq!(record.value, value);
}

#[test]
fn test_empty_key_and_value() {
    let record = decode(&encode("", "")).unwrap();

    assert_eq!(record, Record::new("", ""));
}

#[test]
fn test_record_encode_matches_free_function() {
    let record = Record::new("key", "value");
    assert_eq!(record.encode(), encode("key", "value"));
}

// =============================================================================
// Line Format Tests
// =============================================================================

#[test]
fn test_encoded_line_has_no_newline() {
    let line = encode("multi\nline\nkey", "multi\r\nline\nvalue");

    assert!(!line.contains('\n'));
    assert!(!line.contains('\r'));
}

#[test]
fn test_encoded_line_is_base64_of_key_comma_value() {
    let line = encode("a", "b");
    assert_eq!(line, STANDARD.encode("a,b"));
}

#[test]
fn test_decode_splits_on_first_comma_only() {
    let line = STANDARD.encode("key,v1,v2,v3");
    let record = decode(&line).unwrap();

    assert_eq!(record.key, "key");
    assert_eq!(record.value, "v1,v2,v3");
}

#[test]
fn test_decode_tolerates_trailing_terminator() {
    let line = format!("{}\n", encode("k", "v"));
    assert_eq!(decode(&line).unwrap(), Record::new("k", "v"));
}

// =============================================================================
// Malformed Input Tests
// =============================================================================

#[test]
fn test_decode_missing_separator() {
    let line = STANDARD.encode("no-separator-here");
    let result = decode(&line);

    assert!(matches!(result, Err(LogKvError::MalformedRecord(_))));
}

#[test]
fn test_decode_invalid_base64() {
    let result = decode("this is *not* base64!");

    assert!(matches!(result, Err(LogKvError::MalformedRecord(_))));
}

#[test]
fn test_decode_invalid_utf8() {
    let line = STANDARD.encode([0xff, 0xfe, b',', 0xfd]);
    let result = decode(&line);

    assert!(matches!(result, Err(LogKvError::MalformedRecord(_))));
}

#[test]
fn test_decode_empty_line() {
    let result = decode("");

    assert!(matches!(result, Err(LogKvError::MalformedRecord(_))));
}

// =============================================================================
// Key Validation Tests
// =============================================================================

#[test]
fn test_validate_key_accepts_plain_and_awkward_keys() {
    for key in ["x", "", "with space", "multi\nline", "🇸🇪", "semi;colon"] {
        assert!(validate_key(key).is_ok(), "rejected {:?}", key);
    }
}

#[test]
fn test_validate_key_rejects_separator() {
    for key in ["a,b", ",", "trailing,", ",leading"] {
        assert!(
            matches!(validate_key(key), Err(LogKvError::InvalidKey(_))),
            "accepted {:?}",
            key
        );
    }
}

#[test]
fn test_comma_key_would_decode_under_another_key() {
    // First-comma split moves the rest of the key into the value
    let record = decode(&encode("a,b", "v")).unwrap();

    assert_eq!(record, Record::new("a", "b,v"));
}
