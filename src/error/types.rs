use thiserror::Error;

/// Unified result type for the boxflow crate.
pub type Result<T> = std::result::Result<T, LayoutError>;

/// Errors surfaced by the block algebra.
///
/// Dimension arithmetic never fails; sizes saturate at zero instead. The only
/// fallible operations are the two annotation transforms, which are defined
/// solely on annotated blocks.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("block carries no annotation")]
    MissingAnnotation,
}
