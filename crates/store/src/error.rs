use jobtrack_client::ApiError;
use jobtrack_core::CoreError;

/// Failure of a record store operation. Local state is unchanged whenever
/// one of these is returned.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Input was rejected before any network call was made.
    #[error(transparent)]
    Validation(#[from] CoreError),

    /// The jobs API call failed.
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl StoreError {
    /// Offending field, for validation failures.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            StoreError::Validation(e) => e.field(),
            StoreError::Api(_) => None,
        }
    }
}
