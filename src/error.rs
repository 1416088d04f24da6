use thiserror::Error;

#[derive(Debug, Error)]
pub enum UniquifyError {
    /// The full spiral traversal found no unused color. Only reachable once
    /// every 24-bit color has been assigned; pixels rewritten before this
    /// point keep their replacements.
    #[error("no unused color left for pixel {pixel}")]
    SearchExhausted { pixel: usize },
}
