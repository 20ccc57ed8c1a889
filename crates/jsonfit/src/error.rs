use thiserror::Error;

/// At least one insertion was dropped because it would have exceeded the
/// buffer's capacity.
///
/// Returned by [`JsonWriter::document`] when the writer's sticky truncation
/// flag is set. The buffer still holds a valid JSON document at that point; it
/// is simply missing every entry that failed its fit-check.
///
/// [`JsonWriter::document`]: crate::JsonWriter::document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("json document truncated: buffer capacity of {capacity} bytes exhausted")]
pub struct Truncated {
    /// Total capacity of the buffer the document was written into.
    pub capacity: usize,
}
