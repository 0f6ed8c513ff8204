//! Error types for the selection stage.

use thiserror::Error;

/// A selection that cannot be completed.
///
/// Both variants mean the same thing to a caller: the requested number of
/// distinct games cannot be drawn from this population.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// Fewer than `requested` games can ever be drawn (for weighted
    /// selection, games with zero weight are never drawn)
    #[error("Cannot select {requested} games: only {drawable} can be drawn")]
    Unsatisfiable { requested: usize, drawable: usize },

    /// The draw budget ran out before enough distinct games were found
    #[error("Gave up after {draws} draws with {selected} of {requested} games selected")]
    DrawLimitExceeded {
        draws: usize,
        selected: usize,
        requested: usize,
    },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, SelectionError>;
