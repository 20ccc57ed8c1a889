//! An incremental, allocation-free JSON writer for fixed-capacity buffers.
//!
//! `jsonfit` renders a tree of scalar values, arrays, and nested objects into
//! a caller-supplied byte buffer, one field at a time. Before any byte of an
//! operation is written, the writer computes the exact serialized size of that
//! operation and compares it against the remaining capacity. Operations that
//! would not fit are skipped whole, a sticky [`truncated`] flag is raised, and
//! the buffer is left holding a valid, parseable prefix of the document.
//!
//! The crate is `#![no_std]`, performs no heap allocation, and never writes
//! past the end of the buffer it is given. It is intended for firmware and
//! other constrained environments where output is assembled field-by-field
//! into a static buffer and overrunning that buffer must be impossible rather
//! than merely detectable.
//!
//! # Examples
//!
//! ```rust
//! use jsonfit::{JsonWriter, Style};
//!
//! let mut buf = [0u8; 64];
//! let mut json = JsonWriter::with_style(&mut buf, Style::compact());
//!
//! json.init_root();
//! json.insert_string("status", "ok");
//! json.insert_int("rssi", -67);
//! json.insert_uint_array("channels", &[1, 6, 11]);
//! json.finish_root();
//!
//! assert!(!json.truncated());
//! assert_eq!(
//!     json.as_str(),
//!     r#"{"status":"ok","rssi":-67,"channels":[1,6,11]}"#
//! );
//! ```
//!
//! [`truncated`]: JsonWriter::truncated

#![no_std]

#[cfg(test)]
extern crate std;

mod error;
mod number;
mod options;
mod style;
mod writer;

pub use error::Truncated;
pub use options::WriterOptions;
pub use style::Style;
pub use writer::JsonWriter;
