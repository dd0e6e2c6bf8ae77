//! Error types for the overlay facade

use thiserror::Error;

/// Errors surfaced to calling code.
///
/// The dialog and toast state machines themselves have no failure modes:
/// double settlement, removal of an absent toast, and focus restoration onto
/// an unregistered target are all invariant-preserving no-ops. The only error
/// the crate reports is a violated usage contract.
#[derive(Debug, Error)]
pub enum Error {
    /// The facade was looked up outside an installed provider scope.
    #[error("no overlay provider installed in this scope")]
    NoProvider,
}

/// Result type for overlay operations.
pub type Result<T> = std::result::Result<T, Error>;
