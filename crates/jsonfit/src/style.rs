/// Formatting tokens consumed by the cost and emit paths.
///
/// A `Style` is a plain table of the whitespace and separator tokens the
/// writer places around entries. Both presentation profiles go through the
/// same cost and emit logic; swapping the token table never changes *which*
/// operations fit, only how many bytes each one costs.
///
/// The entry separator itself is always a comma and is not configurable: the
/// writer appends it provisionally after every entry and trims the last one
/// back off before each closing brace or bracket.
///
/// # Examples
///
/// ```rust
/// use jsonfit::Style;
///
/// // CRLF line endings for a serial console.
/// let style = Style {
///     newline: "\r\n",
///     ..Style::pretty()
/// };
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    /// Line-break token written before every entry and before each closing
    /// brace. Empty in compact output.
    pub newline: &'static str,

    /// Indentation unit repeated once per nesting level after `newline`.
    /// Empty in compact output.
    pub indent: &'static str,

    /// Gap between the `:` of a key and its value. Empty in compact output.
    pub value_gap: &'static str,

    /// Separator between array elements, including any interior whitespace.
    /// The trailing instance is trimmed before the closing bracket.
    pub array_separator: &'static str,
}

impl Style {
    /// Human-readable output: one entry per line, tab indentation, a tab
    /// between each key and its value, and `", "` between array elements.
    #[must_use]
    pub const fn pretty() -> Self {
        Style {
            newline: "\n",
            indent: "\t",
            value_gap: "\t",
            array_separator: ", ",
        }
    }

    /// Minimal output: no line breaks, no indentation, no interior
    /// whitespace. Produces the smallest byte count for a given document.
    #[must_use]
    pub const fn compact() -> Self {
        Style {
            newline: "",
            indent: "",
            value_gap: "",
            array_separator: ",",
        }
    }
}

impl Default for Style {
    fn default() -> Self {
        Style::pretty()
    }
}
