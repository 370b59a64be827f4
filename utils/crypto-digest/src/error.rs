use thiserror::Error;

/// Misuse of a digest instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// Input was supplied after the result had been produced.
    #[error("digest already finalized")]
    AlreadyFinalized,
}
