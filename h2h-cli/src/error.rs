use h2h_core::H2hError;
use thiserror::Error;

use crate::provider::ProviderError;

/// Anything that aborts a comparison run.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Provider(#[from] ProviderError),
    #[error(transparent)]
    Matching(#[from] H2hError),
}
