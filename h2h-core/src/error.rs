use thiserror::Error;

use crate::signature::RaceSignature;

/// Errors raised by the matching pipeline.
#[derive(Debug, Error)]
pub enum H2hError {
    /// The athlete search returned no candidates.
    #[error("no athletes found for '{query}'")]
    NotFound { query: String },

    /// Two performances of one athlete produced the same race signature while
    /// indexing under [`CollisionPolicy::Error`](crate::CollisionPolicy::Error).
    #[error("{athlete} has more than one result for race {signature}")]
    DuplicateRace {
        athlete: String,
        signature: RaceSignature,
    },
}
