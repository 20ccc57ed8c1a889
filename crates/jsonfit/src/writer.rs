//! The incremental JSON writer implementation.
//!
//! This module provides [`JsonWriter`], which assembles a JSON document
//! field-by-field inside a caller-supplied buffer. Every public insertion
//! operation runs in two phases that must agree byte-for-byte: a *fit-check*
//! computes the exact serialized size of the operation under the current
//! depth and style, and the *emit* path performs the write only when that
//! size fits the remaining capacity. An operation that does not fit is
//! skipped whole and the sticky truncation flag is raised; the buffer always
//! holds a valid prefix of the document.
//!
//! # Examples
//!
//! ```rust
//! use jsonfit::{JsonWriter, Style};
//!
//! let mut buf = [0u8; 128];
//! let mut json = JsonWriter::with_style(&mut buf, Style::pretty());
//!
//! json.init_root();
//! json.enter_object("sensor");
//! json.insert_string("id", "bme280");
//! json.insert_float("celsius", 21.372, 1);
//! json.exit_object();
//! json.finish_root();
//!
//! assert_eq!(
//!     json.as_str(),
//!     "{\n\"sensor\":\t{\n\t\"id\":\t\"bme280\",\n\t\"celsius\":\t21.4\n}\n}"
//! );
//! ```

use crate::{
    error::Truncated,
    number::{Decimal, Fixed, digits},
    options::WriterOptions,
    style::Style,
};

// ------------------------------------------------------------------------------------------------
// Value rendering - the single source of truth for serialized widths
// ------------------------------------------------------------------------------------------------

/// A scalar insertion before sentinel resolution.
#[derive(Debug, Clone, Copy)]
enum Scalar<'a> {
    Str(Option<&'a str>),
    Int(i32),
    UInt(u32),
    Float(f32, u32),
    Bool(bool),
    Null,
}

impl<'a> Scalar<'a> {
    /// Applies null-sentinel substitution and fixes the exact rendering.
    ///
    /// Sentinel comparison is an exact equality on purpose: the sentinel is
    /// an in-band bit pattern chosen by the caller, not an approximation.
    #[allow(clippy::float_cmp)]
    fn resolve(self, options: &WriterOptions) -> Rendered<'a> {
        match self {
            Scalar::Str(Some(value)) => Rendered::Str(value),
            Scalar::Str(None) | Scalar::Null => Rendered::Null,
            Scalar::Bool(value) => Rendered::Bool(value),
            Scalar::Int(value) if value == options.null_int => Rendered::Null,
            Scalar::Int(value) => Rendered::Number {
                neg: value < 0,
                abs: u64::from(value.unsigned_abs()),
            },
            Scalar::UInt(value) if value == options.null_uint => Rendered::Null,
            Scalar::UInt(value) => Rendered::Number {
                neg: false,
                abs: u64::from(value),
            },
            Scalar::Float(value, _) if value == options.null_float => Rendered::Null,
            Scalar::Float(value, decimals) => {
                Fixed::new(value, decimals).map_or(Rendered::Null, Rendered::Fixed)
            }
        }
    }
}

/// A fully resolved value. Its [`len`](Rendered::len) is exactly the number
/// of bytes [`JsonWriter::emit_value`] will produce for it.
#[derive(Debug, Clone, Copy)]
enum Rendered<'a> {
    Null,
    Bool(bool),
    Str(&'a str),
    Number { neg: bool, abs: u64 },
    Fixed(Fixed),
}

impl Rendered<'_> {
    fn len(&self) -> usize {
        match *self {
            Rendered::Null | Rendered::Bool(true) => 4,
            Rendered::Bool(false) => 5,
            Rendered::Str(value) => value.len() + 2,
            Rendered::Number { neg, abs } => usize::from(neg) + digits(abs),
            Rendered::Fixed(fixed) => fixed.len(),
        }
    }
}

/// The closed set of array element types, dispatched by pattern matching.
#[derive(Debug, Clone, Copy)]
enum ArrayKind<'a> {
    Int(&'a [i32]),
    UInt(&'a [u32]),
    Float { values: &'a [f32], decimals: u32 },
    Str(&'a [Option<&'a str>]),
}

impl<'a> ArrayKind<'a> {
    fn len(&self) -> usize {
        match self {
            ArrayKind::Int(values) => values.len(),
            ArrayKind::UInt(values) => values.len(),
            ArrayKind::Float { values, .. } => values.len(),
            ArrayKind::Str(values) => values.len(),
        }
    }

    fn resolve(&self, index: usize, options: &WriterOptions) -> Rendered<'a> {
        match *self {
            ArrayKind::Int(values) => Scalar::Int(values[index]).resolve(options),
            ArrayKind::UInt(values) => Scalar::UInt(values[index]).resolve(options),
            ArrayKind::Float { values, decimals } => {
                Scalar::Float(values[index], decimals).resolve(options)
            }
            ArrayKind::Str(values) => Scalar::Str(values[index]).resolve(options),
        }
    }
}

// ------------------------------------------------------------------------------------------------
// Writer state
// ------------------------------------------------------------------------------------------------

/// An incremental JSON writer over a fixed-capacity byte buffer.
///
/// The writer owns no memory of its own: it borrows the destination buffer
/// for its lifetime and tracks a write cursor, the open-object nesting depth,
/// the bytes reserved for promised closing braces, and the sticky truncation
/// flag. One instance serializes one document at a time; [`reset`] rewinds it
/// so the same buffer can be reused without reallocation.
///
/// Keys and string values are written verbatim and measured in bytes, so
/// multi-byte UTF-8 passes through untouched. Callers are responsible for
/// pre-escaping any `"` or `\` they need inside strings, exactly as with the
/// usual firmware formatting helpers this crate replaces.
///
/// # Examples
///
/// ```rust
/// use jsonfit::{JsonWriter, Style};
///
/// let mut buf = [0u8; 40];
/// let mut json = JsonWriter::with_style(&mut buf, Style::compact());
/// json.init_root();
/// json.insert_int_array("fib", &[1, 1, 2, 3, 5, 8]);
/// json.finish_root();
///
/// assert_eq!(json.document(), Ok(r#"{"fib":[1,1,2,3,5,8]}"#));
/// ```
///
/// [`reset`]: JsonWriter::reset
#[derive(Debug)]
pub struct JsonWriter<'buf> {
    buf: &'buf mut [u8],
    /// Offset of the next byte to write.
    cursor: usize,
    /// Bytes promised to closing tokens (root and open objects) that are not
    /// yet in the buffer. Fit-checks charge against `cursor + reserved`.
    reserved: usize,
    /// Open-object nesting level.
    depth: usize,
    /// Enter-object calls dropped by a failed fit-check; while non-zero, the
    /// whole suppressed subtree is skipped so children cannot leak into the
    /// parent object.
    suppressed: usize,
    truncated: bool,
    options: WriterOptions,
}

impl<'buf> JsonWriter<'buf> {
    /// Creates a writer over `buf` with the given options.
    pub fn new(buf: &'buf mut [u8], options: WriterOptions) -> Self {
        JsonWriter {
            buf,
            cursor: 0,
            reserved: 0,
            depth: 0,
            suppressed: 0,
            truncated: false,
            options,
        }
    }

    /// Creates a writer over `buf` with the given style and default
    /// sentinels.
    pub fn with_style(buf: &'buf mut [u8], style: Style) -> Self {
        JsonWriter::new(
            buf,
            WriterOptions {
                style,
                ..WriterOptions::default()
            },
        )
    }

    /// Rewinds the writer so the same buffer can serialize a new document.
    pub fn reset(&mut self) {
        self.cursor = 0;
        self.reserved = 0;
        self.depth = 0;
        self.suppressed = 0;
        self.truncated = false;
    }

    /// Total capacity of the destination buffer.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Bytes of document text written so far. The NUL terminator written by
    /// [`finish_root`](JsonWriter::finish_root) is not included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cursor
    }

    /// Returns `true` if nothing has been written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cursor == 0
    }

    /// Current open-object nesting level.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Returns `true` once any insertion has been dropped for lack of
    /// capacity. Sticky until [`reset`](JsonWriter::reset).
    #[must_use]
    pub fn truncated(&self) -> bool {
        self.truncated
    }

    /// The document text written so far.
    #[must_use]
    pub fn as_str(&self) -> &str {
        // SAFETY: every byte below `cursor` was copied from a `&str` or is
        // ASCII punctuation produced by the emit path, and trims only move
        // the cursor back over single-byte ASCII separators.
        unsafe { core::str::from_utf8_unchecked(&self.buf[..self.cursor]) }
    }

    /// The finished document, or [`Truncated`] if any insertion was dropped.
    ///
    /// # Errors
    ///
    /// Returns [`Truncated`] when the sticky truncation flag is set; the
    /// buffer still holds a valid document missing the dropped entries.
    pub fn document(&self) -> Result<&str, Truncated> {
        if self.truncated {
            Err(Truncated {
                capacity: self.capacity(),
            })
        } else {
            Ok(self.as_str())
        }
    }

    // --------------------------------------------------------------------------------------------
    // Fit-check subsystem
    // --------------------------------------------------------------------------------------------

    /// Would an operation costing `cost` more bytes still fit, counting the
    /// bytes already reserved for promised closing tokens?
    fn fits(&self, cost: usize) -> bool {
        self.cursor + self.reserved + cost <= self.buf.len()
    }

    /// Bytes every entry spends before its value: line break, indentation at
    /// the current depth, the quoted key, the colon, and the key/value gap.
    fn entry_prefix_cost(&self, key: &str) -> usize {
        let style = &self.options.style;
        style.newline.len() + style.indent.len() * self.depth + 1 + key.len() + 1 + 1
            + style.value_gap.len()
    }

    /// Bytes a closing brace will spend at the current depth.
    fn closing_cost(&self) -> usize {
        let style = &self.options.style;
        style.newline.len() + style.indent.len() * self.depth + 1
    }

    fn array_cost(&self, key: &str, kind: &ArrayKind<'_>) -> usize {
        let separator = self.options.style.array_separator.len();
        let mut total = self.entry_prefix_cost(key) + 1;
        for index in 0..kind.len() {
            total += kind.resolve(index, &self.options).len() + separator;
        }
        // The trailing separator is trimmed before the closing bracket;
        // an empty array never wrote one.
        if kind.len() > 0 {
            total -= separator;
        }
        total + 2
    }

    // --------------------------------------------------------------------------------------------
    // Emit subsystem
    // --------------------------------------------------------------------------------------------

    fn push_byte(&mut self, byte: u8) {
        self.buf[self.cursor] = byte;
        self.cursor += 1;
    }

    fn push_bytes(&mut self, bytes: &[u8]) {
        let end = self.cursor + bytes.len();
        self.buf[self.cursor..end].copy_from_slice(bytes);
        self.cursor = end;
    }

    /// Line break plus one indent unit per open depth level.
    fn start_entry(&mut self) {
        let style = self.options.style;
        self.push_bytes(style.newline.as_bytes());
        for _ in 0..self.depth {
            self.push_bytes(style.indent.as_bytes());
        }
    }

    fn emit_key(&mut self, key: &str) {
        let gap = self.options.style.value_gap;
        self.push_byte(b'"');
        self.push_bytes(key.as_bytes());
        self.push_byte(b'"');
        self.push_byte(b':');
        self.push_bytes(gap.as_bytes());
    }

    fn emit_value(&mut self, value: &Rendered<'_>) {
        match *value {
            Rendered::Null => self.push_bytes(b"null"),
            Rendered::Bool(true) => self.push_bytes(b"true"),
            Rendered::Bool(false) => self.push_bytes(b"false"),
            Rendered::Str(text) => {
                self.push_byte(b'"');
                self.push_bytes(text.as_bytes());
                self.push_byte(b'"');
            }
            Rendered::Number { neg, abs } => {
                if neg {
                    self.push_byte(b'-');
                }
                let decimal = Decimal::new(abs);
                self.push_bytes(decimal.as_bytes());
            }
            Rendered::Fixed(fixed) => self.emit_fixed(&fixed),
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn emit_fixed(&mut self, fixed: &Fixed) {
        if fixed.neg {
            self.push_byte(b'-');
        }
        let int_digits = Decimal::new(fixed.int_part);
        self.push_bytes(int_digits.as_bytes());
        if fixed.decimals == 0 {
            return;
        }
        self.push_byte(b'.');
        let frac_digits = Decimal::new(fixed.frac);
        for _ in frac_digits.as_bytes().len()..fixed.computed as usize {
            self.push_byte(b'0');
        }
        self.push_bytes(frac_digits.as_bytes());
        for _ in fixed.computed..fixed.decimals {
            self.push_byte(b'0');
        }
    }

    /// Backs the cursor off a provisionally written trailing comma, if one is
    /// there. Called immediately before every closing brace.
    fn trim_entry_separator(&mut self) {
        if self.cursor > 0 && self.buf[self.cursor - 1] == b',' {
            self.cursor -= 1;
        }
    }

    fn insert_scalar(&mut self, key: &str, scalar: Scalar<'_>) {
        debug_assert!(
            self.reserved > 0 || self.truncated,
            "insertion outside init_root/finish_root"
        );
        if self.suppressed > 0 {
            return;
        }
        let rendered = scalar.resolve(&self.options);
        let cost = self.entry_prefix_cost(key) + rendered.len() + 1;
        if !self.fits(cost) {
            self.truncated = true;
            return;
        }
        let before = self.cursor;
        self.start_entry();
        self.emit_key(key);
        self.emit_value(&rendered);
        self.push_byte(b',');
        debug_assert_eq!(self.cursor - before, cost, "fit-check desynchronized from emit");
    }

    fn insert_array(&mut self, key: &str, kind: &ArrayKind<'_>) {
        debug_assert!(
            self.reserved > 0 || self.truncated,
            "insertion outside init_root/finish_root"
        );
        if self.suppressed > 0 {
            return;
        }
        let cost = self.array_cost(key, kind);
        if !self.fits(cost) {
            self.truncated = true;
            return;
        }
        let before = self.cursor;
        let options = self.options;
        let separator = options.style.array_separator;
        self.start_entry();
        self.emit_key(key);
        self.push_byte(b'[');
        for index in 0..kind.len() {
            let element = kind.resolve(index, &options);
            self.emit_value(&element);
            self.push_bytes(separator.as_bytes());
        }
        if kind.len() > 0 {
            self.cursor -= separator.len();
        }
        self.push_bytes(b"],");
        debug_assert_eq!(self.cursor - before, cost, "fit-check desynchronized from emit");
    }

    // --------------------------------------------------------------------------------------------
    // Public operations
    // --------------------------------------------------------------------------------------------

    /// Opens the root object.
    ///
    /// Writes the opening brace and reserves the bytes the closing brace and
    /// NUL terminator will need, so that [`finish_root`] can never overflow.
    /// The only way this can fail is a buffer too small for the empty
    /// document `{}` plus its terminator, in which case the truncation flag
    /// is set and nothing is written.
    ///
    /// [`finish_root`]: JsonWriter::finish_root
    pub fn init_root(&mut self) {
        let newline = self.options.style.newline.len();
        // '{' + newline + '}' + NUL: the smallest document this root can
        // ever finish as.
        if self.buf.len() < 3 + newline {
            self.truncated = true;
            return;
        }
        self.push_byte(b'{');
        self.reserved = newline + 1;
    }

    /// Closes the root object and NUL-terminates the buffer.
    ///
    /// Trims the provisional trailing comma, writes the closing brace, and
    /// places a NUL byte after the document so the buffer doubles as a C
    /// string. The NUL is not part of [`as_str`](JsonWriter::as_str) or
    /// [`len`](JsonWriter::len). A no-op if the root was never opened.
    pub fn finish_root(&mut self) {
        debug_assert_eq!(self.depth, 0, "finish_root with unclosed objects");
        if self.reserved == 0 {
            return;
        }
        self.trim_entry_separator();
        self.start_entry();
        self.push_byte(b'}');
        self.reserved = 0;
        self.buf[self.cursor] = 0;
    }

    /// Opens a nested object under `key`.
    ///
    /// The fit-check charges the opening tokens *and* reserves the eventual
    /// closing brace (plus one spare byte covering the empty-object case),
    /// so a matching [`exit_object`](JsonWriter::exit_object) can never fail.
    /// On overflow the whole subtree up to the matching exit is skipped, not
    /// just the opening tokens, so dropped children cannot leak into the
    /// parent object.
    pub fn enter_object(&mut self, key: &str) {
        debug_assert!(
            self.reserved > 0 || self.truncated,
            "insertion outside init_root/finish_root"
        );
        if self.suppressed > 0 {
            self.suppressed += 1;
            return;
        }
        let cost = self.entry_prefix_cost(key) + 1;
        let closing = self.closing_cost();
        if !self.fits(cost + closing + 1) {
            self.truncated = true;
            self.suppressed = 1;
            return;
        }
        let before = self.cursor;
        self.start_entry();
        self.emit_key(key);
        self.push_byte(b'{');
        debug_assert_eq!(self.cursor - before, cost, "fit-check desynchronized from emit");
        self.reserved += closing;
        self.depth += 1;
    }

    /// Closes the innermost open object.
    ///
    /// Trims the provisional trailing comma of the last child and writes the
    /// closing brace one indentation level shallower than the children.
    /// Must be paired with a preceding [`enter_object`]; the pairing is also
    /// honored for objects whose opening was dropped by a failed fit-check.
    ///
    /// [`enter_object`]: JsonWriter::enter_object
    pub fn exit_object(&mut self) {
        if self.suppressed > 0 {
            self.suppressed -= 1;
            return;
        }
        debug_assert!(self.depth > 0, "exit_object without a matching enter_object");
        if self.depth == 0 {
            return;
        }
        self.trim_entry_separator();
        self.depth -= 1;
        let closing = self.closing_cost();
        self.start_entry();
        self.push_bytes(b"},");
        self.reserved -= closing;
    }

    /// Inserts a string entry, or `null` when `value` is `None`.
    ///
    /// The value is written verbatim between quotes and measured in bytes;
    /// it must already be escaped if it contains `"` or `\`.
    pub fn insert_string<'v>(&mut self, key: &str, value: impl Into<Option<&'v str>>) {
        self.insert_scalar(key, Scalar::Str(value.into()));
    }

    /// Inserts a signed integer entry, or `null` when `value` equals the
    /// configured [`null_int`](crate::WriterOptions::null_int) sentinel.
    pub fn insert_int(&mut self, key: &str, value: i32) {
        self.insert_scalar(key, Scalar::Int(value));
    }

    /// Inserts an unsigned integer entry, or `null` when `value` equals the
    /// configured [`null_uint`](crate::WriterOptions::null_uint) sentinel.
    pub fn insert_uint(&mut self, key: &str, value: u32) {
        self.insert_scalar(key, Scalar::UInt(value));
    }

    /// Inserts a fixed-point float entry with exactly `decimals` fraction
    /// digits, or `null` when `value` equals the configured
    /// [`null_float`](crate::WriterOptions::null_float) sentinel or is not
    /// finite.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jsonfit::{JsonWriter, Style};
    ///
    /// let mut buf = [0u8; 32];
    /// let mut json = JsonWriter::with_style(&mut buf, Style::compact());
    /// json.init_root();
    /// json.insert_float("volts", 3.2999, 2);
    /// json.finish_root();
    /// assert_eq!(json.as_str(), r#"{"volts":3.30}"#);
    /// ```
    pub fn insert_float(&mut self, key: &str, value: f32, decimals: u32) {
        self.insert_scalar(key, Scalar::Float(value, decimals));
    }

    /// Inserts a `true`/`false` entry.
    pub fn insert_bool(&mut self, key: &str, value: bool) {
        self.insert_scalar(key, Scalar::Bool(value));
    }

    /// Inserts an explicit `null` entry.
    pub fn insert_null(&mut self, key: &str) {
        self.insert_scalar(key, Scalar::Null);
    }

    /// Inserts an array of signed integers; elements equal to the
    /// [`null_int`](crate::WriterOptions::null_int) sentinel become `null`.
    /// The whole array is skipped atomically if it does not fit.
    pub fn insert_int_array(&mut self, key: &str, values: &[i32]) {
        self.insert_array(key, &ArrayKind::Int(values));
    }

    /// Inserts an array of unsigned integers; elements equal to the
    /// [`null_uint`](crate::WriterOptions::null_uint) sentinel become `null`.
    /// The whole array is skipped atomically if it does not fit.
    pub fn insert_uint_array(&mut self, key: &str, values: &[u32]) {
        self.insert_array(key, &ArrayKind::UInt(values));
    }

    /// Inserts an array of fixed-point floats, each with `decimals` fraction
    /// digits; sentinel and non-finite elements become `null`. The whole
    /// array is skipped atomically if it does not fit.
    pub fn insert_float_array(&mut self, key: &str, values: &[f32], decimals: u32) {
        self.insert_array(key, &ArrayKind::Float { values, decimals });
    }

    /// Inserts an array of strings; `None` elements become `null`. The whole
    /// array is skipped atomically if it does not fit.
    pub fn insert_string_array(&mut self, key: &str, values: &[Option<&str>]) {
        self.insert_array(key, &ArrayKind::Str(values));
    }
}

// ------------------------------------------------------------------------------------------------
// Tests
// ------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cost_matches_emitted_bytes_for_every_kind() {
        for style in [Style::pretty(), Style::compact()] {
            let mut buf = [0u8; 1024];
            let mut json = JsonWriter::with_style(&mut buf, style);
            json.init_root();

            let probes: &[(&str, Scalar<'_>)] = &[
                ("str", Scalar::Str(Some("värde"))),
                ("redirected", Scalar::Str(None)),
                ("int", Scalar::Int(-1234)),
                ("zero", Scalar::Int(0)),
                ("sentinel", Scalar::Int(i32::MAX)),
                ("uint", Scalar::UInt(4_000_000_000)),
                ("float", Scalar::Float(-99.995, 2)),
                ("nan", Scalar::Float(f32::NAN, 3)),
                ("yes", Scalar::Bool(true)),
                ("no", Scalar::Bool(false)),
                ("null", Scalar::Null),
            ];
            for (key, scalar) in probes {
                let rendered = scalar.resolve(&json.options);
                let cost = json.entry_prefix_cost(key) + rendered.len() + 1;
                let before = json.cursor;
                json.insert_scalar(key, *scalar);
                assert_eq!(json.cursor - before, cost, "scalar {key} in {style:?}");
            }

            json.enter_object("nested");
            let arrays: &[(&str, ArrayKind<'_>)] = &[
                ("ints", ArrayKind::Int(&[0, -7, i32::MAX, 16666])),
                ("units", ArrayKind::UInt(&[9, u32::MAX])),
                (
                    "floats",
                    ArrayKind::Float {
                        values: &[0.0, -2.5, f32::INFINITY],
                        decimals: 1,
                    },
                ),
                ("strs", ArrayKind::Str(&[Some("a"), None, Some("bc")])),
                ("empty", ArrayKind::Int(&[])),
            ];
            for (key, kind) in arrays {
                let cost = json.array_cost(key, kind);
                let before = json.cursor;
                json.insert_array(key, kind);
                assert_eq!(json.cursor - before, cost, "array {key} in {style:?}");
            }
            json.exit_object();
            json.finish_root();
            assert!(!json.truncated());
        }
    }

    #[test]
    fn reserved_closing_bytes_are_returned_on_exit() {
        let mut buf = [0u8; 256];
        let mut json = JsonWriter::with_style(&mut buf, Style::pretty());
        json.init_root();
        let root_reserve = json.reserved;
        json.enter_object("a");
        json.enter_object("b");
        assert!(json.reserved > root_reserve);
        json.exit_object();
        json.exit_object();
        assert_eq!(json.reserved, root_reserve);
    }

    #[test]
    fn failed_enter_suppresses_the_whole_subtree() {
        let mut buf = [0u8; 12];
        let mut json = JsonWriter::with_style(&mut buf, Style::compact());
        json.init_root();
        json.enter_object("too-big-to-open");
        assert!(json.truncated());
        json.insert_int("orphan", 1);
        json.enter_object("deeper");
        json.insert_int("orphan2", 2);
        json.exit_object();
        json.exit_object();
        assert_eq!(json.depth(), 0);
        json.finish_root();
        assert_eq!(json.as_str(), "{}");
    }

    #[test]
    fn trim_only_removes_a_trailing_comma() {
        let mut buf = [0u8; 64];
        let mut json = JsonWriter::with_style(&mut buf, Style::compact());
        json.init_root();
        // Nothing written yet: trim must not eat the opening brace.
        json.finish_root();
        assert_eq!(json.as_str(), "{}");
        assert_eq!(buf[2], 0);
    }

    #[test]
    fn empty_object_at_the_capacity_edge_is_rejected_not_overflowed() {
        // "{\"o\":{}}" plus NUL needs exactly 9 bytes; at 8 the enter must
        // refuse rather than let finish_root write past the end.
        let mut buf = [0u8; 9];
        let mut json = JsonWriter::with_style(&mut buf, Style::compact());
        json.init_root();
        json.enter_object("o");
        json.exit_object();
        json.finish_root();
        assert!(!json.truncated());
        assert_eq!(json.as_str(), r#"{"o":{}}"#);

        let mut buf = [0u8; 8];
        let mut json = JsonWriter::with_style(&mut buf, Style::compact());
        json.init_root();
        json.enter_object("o");
        json.exit_object();
        json.finish_root();
        assert!(json.truncated());
        assert_eq!(json.as_str(), "{}");
    }
}
