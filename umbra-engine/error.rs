use thiserror::Error;

/// Failure modes of the structural-model collaborator.
///
/// None of these escape the engine: the locator treats every variant
/// as "no enclosing block" and moves on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructuralQueryError {
  /// The structural model lags behind the document text; the host
  /// must be asked to synchronize before querying again.
  #[error("structural model out of sync with document text")]
  ModelOutOfSync,

  /// The offset falls outside every element of the structural model.
  #[error("no structural element at offset {0}")]
  NoElementAtOffset(usize),
}

/// Failure modes of the rendering collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OverlayError {
  /// The handle was already invalidated on the host side. Expected
  /// during teardown races with editor close; the caller drops the
  /// handle and carries on.
  #[error("overlay handle was already removed")]
  AlreadyRemoved,
}
