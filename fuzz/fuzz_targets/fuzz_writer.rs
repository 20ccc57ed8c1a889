//! Drives arbitrary operation sequences at arbitrary capacities and checks
//! the writer's two hard promises: no write ever escapes the buffer, and an
//! untruncated document is complete, valid JSON.

#![no_main]

use arbitrary::Arbitrary;
use jsonfit::{JsonWriter, Style, WriterOptions};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
enum Op {
    Int { key: String, value: i32 },
    UInt { key: String, value: u32 },
    Float { key: String, value: f32, decimals: u8 },
    Bool { key: String, value: bool },
    Null { key: String },
    Str { key: String, value: Option<String> },
    IntArray { key: String, values: Vec<i32> },
    UIntArray { key: String, values: Vec<u32> },
    FloatArray { key: String, values: Vec<f32>, decimals: u8 },
    StrArray { key: String, values: Vec<Option<String>> },
    Enter { key: String },
    Exit,
}

#[derive(Arbitrary, Debug)]
struct Case {
    capacity: u16,
    pretty: bool,
    null_int: i32,
    null_uint: u32,
    null_float: f32,
    ops: Vec<Op>,
}

/// The writer copies keys and string values verbatim, so strip anything the
/// validity check below would choke on.
fn json_safe(raw: &str) -> String {
    raw.chars()
        .filter(|c| *c != '"' && *c != '\\' && !c.is_control())
        .collect()
}

fuzz_target!(|case: Case| {
    let mut buf = vec![0u8; usize::from(case.capacity)];
    let options = WriterOptions {
        style: if case.pretty {
            Style::pretty()
        } else {
            Style::compact()
        },
        null_int: case.null_int,
        null_uint: case.null_uint,
        null_float: case.null_float,
    };
    let mut json = JsonWriter::new(&mut buf, options);

    json.init_root();
    let mut open = 0usize;
    for op in &case.ops {
        match op {
            Op::Int { key, value } => json.insert_int(&json_safe(key), *value),
            Op::UInt { key, value } => json.insert_uint(&json_safe(key), *value),
            Op::Float {
                key,
                value,
                decimals,
            } => json.insert_float(&json_safe(key), *value, u32::from(*decimals)),
            Op::Bool { key, value } => json.insert_bool(&json_safe(key), *value),
            Op::Null { key } => json.insert_null(&json_safe(key)),
            Op::Str { key, value } => {
                let value = value.as_deref().map(json_safe);
                json.insert_string(&json_safe(key), value.as_deref());
            }
            Op::IntArray { key, values } => json.insert_int_array(&json_safe(key), values),
            Op::UIntArray { key, values } => json.insert_uint_array(&json_safe(key), values),
            Op::FloatArray {
                key,
                values,
                decimals,
            } => json.insert_float_array(&json_safe(key), values, u32::from(*decimals)),
            Op::StrArray { key, values } => {
                let owned: Vec<Option<String>> =
                    values.iter().map(|v| v.as_deref().map(json_safe)).collect();
                let items: Vec<Option<&str>> = owned.iter().map(Option::as_deref).collect();
                json.insert_string_array(&json_safe(key), &items);
            }
            Op::Enter { key } => {
                json.enter_object(&json_safe(key));
                open += 1;
            }
            Op::Exit => {
                if open > 0 {
                    json.exit_object();
                    open -= 1;
                }
            }
        }
    }
    for _ in 0..open {
        json.exit_object();
    }
    json.finish_root();

    assert!(json.len() <= usize::from(case.capacity));
    if !json.truncated() {
        serde_json::from_str::<serde_json::Value>(json.as_str())
            .expect("untruncated output must parse");
    }
});
