//! Capacity-exhaustion behavior: one byte too few must truncate, never
//! overflow, and must always leave a document that still parses.

use jsonfit::{JsonWriter, Style, Truncated, WriterOptions};
use rstest::rstest;

fn assert_parses(doc: &str) {
    serde_json::from_str::<serde_json::Value>(doc).expect("truncated output must still parse");
}

/// Runs `build` against a buffer sized one byte short of `expected` plus its
/// terminator and checks the shared truncation contract.
fn assert_truncates(style: Style, expected: &str, build: impl Fn(&mut JsonWriter<'_>)) {
    let mut buf = vec![0u8; expected.len()];
    let mut json = JsonWriter::with_style(&mut buf, style);
    json.init_root();
    build(&mut json);
    json.finish_root();
    assert!(json.truncated());
    assert_ne!(json.as_str(), expected);
    assert_parses(json.as_str());
}

#[rstest]
#[case::compact(Style::compact(), "{\"number\":-1234}")]
#[case::pretty(Style::pretty(), "{\n\"number\":\t-1234\n}")]
fn signed_number_one_byte_short(#[case] style: Style, #[case] expected: &str) {
    assert_truncates(style, expected, |json| json.insert_int("number", -1234));
}

#[rstest]
#[case::compact(Style::compact(), "{\"number\":1234}")]
#[case::pretty(Style::pretty(), "{\n\"number\":\t1234\n}")]
fn unsigned_number_one_byte_short(#[case] style: Style, #[case] expected: &str) {
    assert_truncates(style, expected, |json| json.insert_uint("number", 1234));
}

#[rstest]
#[case::compact(Style::compact(), "{\"number\":-123.12}")]
#[case::pretty(Style::pretty(), "{\n\"number\":\t-123.12\n}")]
fn float_one_byte_short(#[case] style: Style, #[case] expected: &str) {
    assert_truncates(style, expected, |json| {
        json.insert_float("number", -123.123_456_7, 2);
    });
}

#[rstest]
#[case::compact(Style::compact(), "{\"string\":\"Hello World\"}")]
#[case::pretty(Style::pretty(), "{\n\"string\":\t\"Hello World\"\n}")]
fn string_one_byte_short(#[case] style: Style, #[case] expected: &str) {
    assert_truncates(style, expected, |json| {
        json.insert_string("string", "Hello World");
    });
}

#[rstest]
#[case::compact(Style::compact(), "{\"null\":null}")]
#[case::pretty(Style::pretty(), "{\n\"null\":\tnull\n}")]
fn null_one_byte_short(#[case] style: Style, #[case] expected: &str) {
    assert_truncates(style, expected, |json| json.insert_null("null"));
}

#[rstest]
#[case::compact(Style::compact(), "{\"true\":true,\"false\":false}")]
#[case::pretty(Style::pretty(), "{\n\"true\":\ttrue,\n\"false\":\tfalse\n}")]
fn booleans_one_byte_short(#[case] style: Style, #[case] expected: &str) {
    assert_truncates(style, expected, |json| {
        json.insert_bool("true", true);
        json.insert_bool("false", false);
    });
}

#[rstest]
#[case::compact(Style::compact(), "{\"digits\":[0,1,2,3,4,5,6,7,8,null]}")]
#[case::pretty(
    Style::pretty(),
    "{\n\"digits\":\t[0, 1, 2, 3, 4, 5, 6, 7, 8, null]\n}"
)]
fn int_array_one_byte_short(#[case] style: Style, #[case] expected: &str) {
    let digits = [0, 1, 2, 3, 4, 5, 6, 7, 8, i32::MAX];
    assert_truncates(style, expected, |json| {
        json.insert_int_array("digits", &digits);
    });
}

#[rstest]
#[case::compact(Style::compact(), "{\"object\":{\"key\":\"value\"}}")]
#[case::pretty(
    Style::pretty(),
    "{\n\"object\":\t{\n\t\"key\":\t\"value\"\n}\n}"
)]
fn nested_object_one_byte_short(#[case] style: Style, #[case] expected: &str) {
    assert_truncates(style, expected, |json| {
        json.enter_object("object");
        json.insert_string("key", "value");
        json.exit_object();
    });
}

#[test]
fn exact_fit_succeeds_and_one_less_truncates() {
    let expected = "{\"number\":-1234}";

    let mut buf = vec![0u8; expected.len() + 1];
    let mut json = JsonWriter::with_style(&mut buf, Style::compact());
    json.init_root();
    json.insert_int("number", -1234);
    json.finish_root();
    assert!(!json.truncated());
    assert_eq!(json.as_str(), expected);

    let mut buf = vec![0u8; expected.len()];
    let mut json = JsonWriter::with_style(&mut buf, Style::compact());
    json.init_root();
    json.insert_int("number", -1234);
    json.finish_root();
    assert!(json.truncated());
    assert_eq!(json.as_str(), "{}");
}

#[test]
fn skipped_entry_leaves_later_entries_unaffected() {
    let mut buf = [0u8; 28];
    let mut json = JsonWriter::with_style(&mut buf, Style::compact());
    json.init_root();
    json.insert_int("a", 1);
    // Far larger than the remaining capacity; skipped atomically.
    json.insert_int_array("wide", &[1_000_000_000; 8]);
    json.insert_int("b", 2);
    json.finish_root();
    assert!(json.truncated());
    assert_eq!(json.as_str(), "{\"a\":1,\"b\":2}");
    assert_parses(json.as_str());
}

#[test]
fn whole_array_is_skipped_not_split() {
    // Room for the key and a few elements, but not the whole array: nothing
    // of it may appear.
    let mut buf = [0u8; 24];
    let mut json = JsonWriter::with_style(&mut buf, Style::compact());
    json.init_root();
    json.insert_uint_array("data", &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
    json.finish_root();
    assert!(json.truncated());
    assert_eq!(json.as_str(), "{}");
}

#[test]
fn degenerate_buffers_never_overflow() {
    for capacity in 0..8 {
        let mut buf = vec![0u8; capacity];
        let mut json = JsonWriter::with_style(&mut buf, Style::compact());
        json.init_root();
        json.insert_int("k", 42);
        json.finish_root();
        assert!(json.len() <= capacity);
        if capacity < 3 {
            // Not even "{}" plus the terminator fits.
            assert!(json.truncated());
            assert!(json.is_empty());
        }
    }
}

#[test]
fn truncation_is_sticky_until_reset() {
    let mut buf = [0u8; 8];
    let mut json = JsonWriter::with_style(&mut buf, Style::compact());
    json.init_root();
    json.insert_string("key", "far too long to fit");
    assert!(json.truncated());
    json.finish_root();
    assert!(json.truncated());

    json.reset();
    assert!(!json.truncated());
    json.init_root();
    json.finish_root();
    assert!(!json.truncated());
    assert_eq!(json.as_str(), "{}");
}

#[test]
fn document_reports_truncation_as_an_error() {
    let mut buf = [0u8; 8];
    let mut json = JsonWriter::with_style(&mut buf, Style::compact());
    json.init_root();
    json.insert_string("key", "value");
    json.finish_root();
    assert_eq!(json.document(), Err(Truncated { capacity: 8 }));

    let mut buf = [0u8; 32];
    let mut json = JsonWriter::with_style(&mut buf, Style::compact());
    json.init_root();
    json.insert_string("key", "value");
    json.finish_root();
    assert_eq!(json.document(), Ok("{\"key\":\"value\"}"));
}

#[test]
fn sentinel_overrides_change_what_fits() {
    // With the sentinel engaged the value costs 4 bytes ("null"), not 10.
    let options = WriterOptions {
        style: Style::compact(),
        null_int: -1_000_000_000,
        ..WriterOptions::default()
    };
    let expected = "{\"n\":null}";
    let mut buf = vec![0u8; expected.len() + 1];
    let mut json = JsonWriter::new(&mut buf, options);
    json.init_root();
    json.insert_int("n", -1_000_000_000);
    json.finish_root();
    assert!(!json.truncated());
    assert_eq!(json.as_str(), expected);
}
