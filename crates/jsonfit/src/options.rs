use crate::style::Style;

/// Configuration for a [`JsonWriter`].
///
/// Options combine the presentation [`Style`] with the per-type null
/// sentinels. A sentinel is an in-band value that the writer treats as "this
/// field is logically null": any number equal to the sentinel for its type is
/// emitted as the JSON literal `null` instead of a numeric literal, both for
/// scalar insertions and element-wise inside arrays.
///
/// # Examples
///
/// ```rust
/// use jsonfit::{JsonWriter, Style, WriterOptions};
///
/// let options = WriterOptions {
///     style: Style::compact(),
///     null_float: -99999.0,
///     ..WriterOptions::default()
/// };
///
/// let mut buf = [0u8; 48];
/// let mut json = JsonWriter::new(&mut buf, options);
/// json.init_root();
/// json.insert_float("temperature", -99999.0, 1);
/// json.finish_root();
///
/// assert_eq!(json.as_str(), r#"{"temperature":null}"#);
/// ```
///
/// # Default
///
/// Pretty style, with each sentinel at its type's maximum value.
///
/// [`JsonWriter`]: crate::JsonWriter
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WriterOptions {
    /// Formatting tokens for the document.
    pub style: Style,

    /// Signed values equal to this sentinel are written as `null`.
    ///
    /// # Default
    ///
    /// `i32::MAX`
    pub null_int: i32,

    /// Unsigned values equal to this sentinel are written as `null`.
    ///
    /// # Default
    ///
    /// `u32::MAX`
    pub null_uint: u32,

    /// Float values equal to this sentinel are written as `null`.
    ///
    /// Comparison is exact, so a NaN sentinel never matches; non-finite
    /// values are written as `null` regardless, since JSON has no
    /// representation for them.
    ///
    /// # Default
    ///
    /// `f32::MAX`
    pub null_float: f32,
}

impl Default for WriterOptions {
    fn default() -> Self {
        WriterOptions {
            style: Style::default(),
            null_int: i32::MAX,
            null_uint: u32::MAX,
            null_float: f32::MAX,
        }
    }
}
