use tokenport_core::ParseError;
use tokenport_storage::StoreError;

/// Errors from applying tokens or driving an import session.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    /// The queued document could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The store refused to create a collection or variable.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// `import` was called with no parsed tokens.
    #[error("no tokens to import")]
    NothingToImport,
}
