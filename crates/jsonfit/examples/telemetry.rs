//! Builds the kind of periodic status report a small device would push to a
//! hub: a couple of counter arrays up front, then a nested object with the
//! controller's current state. The whole document is assembled into one
//! static buffer, and the loop at the bottom shows the writer being reset and
//! reused without any allocation between reports.
//!
//! The buffer is sized for the happy path; shrink it below the document size
//! and the writer starts dropping whole entries instead of overrunning,
//! which you can observe through the `truncated` flag it reports.
//!
//! Run with
//!
//! ```bash
//! cargo run -p jsonfit --example telemetry
//! ```

use jsonfit::{JsonWriter, Style, WriterOptions};

fn report(json: &mut JsonWriter<'_>, uptime_s: u32) {
    json.init_root();

    json.insert_uint_array("heartbeats", &[1, 2, 9]);
    json.insert_int_array("retries", &[1, 1, 2, 3, 5, 16666]);

    json.enter_object("controller");
    json.insert_string("firmware", "2.4.1-rc3");
    json.insert_uint("uptime_s", uptime_s);
    json.insert_bool("heating", false);
    json.insert_bool("hot_water", true);
    json.insert_uint("active_zones", 2);
    json.insert_int("zone1_temp", 320);
    json.insert_int("zone2_temp", 120);
    // -1 reads as "no setpoint requested" on the hub side.
    json.insert_int("zone1_setpoint", -1);
    json.insert_int("zone2_setpoint", 123);
    json.insert_float("flow_bar", 1.4821, 2);
    json.insert_float("outside_celsius", f32::MAX, 1); // sensor absent -> null
    json.insert_uint("mode", 1);
    json.insert_uint("override_remaining_ms", 231_312);
    json.exit_object();

    json.finish_root();
}

fn main() {
    let mut buf = [0u8; 752];
    let options = WriterOptions {
        // CRLF line endings, as a serial console wants them.
        style: Style {
            newline: "\n\r",
            ..Style::pretty()
        },
        ..WriterOptions::default()
    };
    let mut json = JsonWriter::new(&mut buf, options);

    for uptime_s in [60, 120, 180] {
        report(&mut json, uptime_s);

        println!("{}", json.as_str());
        println!("size: {}", json.len());
        println!("truncated: {}", json.truncated());

        json.reset();
    }
}
