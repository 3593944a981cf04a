//! Post-processing seam for rendered documents.

/// A text-to-text step applied to a rendered document before it is written out.
///
/// Implementations must be pure: same input, same output, no I/O.
pub trait DocumentProcessor {
    /// Returns the processed document.
    fn process(&self, text: &str) -> String;
}

/// Runs processors in order, feeding each one the previous output.
pub fn run_pipeline(processors: &[&dyn DocumentProcessor], text: &str) -> String {
    processors
        .iter()
        .fold(text.to_string(), |current, processor| {
            processor.process(&current)
        })
}
