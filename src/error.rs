//! Error values for the arena, the pool and the integrator
//!
//! Nothing in the library terminates the process: every failure is
//! returned to the caller, who decides whether it is fatal.

use thiserror::Error;

/// Errors raised by the simulation core.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimError {
    /// The arena's backing block could not be obtained.
    #[error("arena allocation failed: could not reserve {bytes} bytes")]
    AllocationFailure {
        /// Requested block size.
        bytes: usize,
    },

    /// A bump allocation would run past the end of the arena.
    #[error("arena capacity exceeded: requested {requested} bytes, {remaining} of {capacity} left")]
    CapacityExceeded {
        /// Size of the rejected request.
        requested: usize,
        /// Bytes still free.
        remaining: usize,
        /// Total arena size.
        capacity: usize,
    },

    /// The pool's arena could not be initialized.
    #[error("planet pool initialization failed: {0}")]
    PoolInitFailure(Box<SimError>),

    /// Insertion beyond the pool's capacity.
    #[error("too many planets: max allowed is {capacity}, pool's closed")]
    PoolFull {
        /// Pool capacity.
        capacity: usize,
    },

    /// One or more pairs were coincident during a step and were skipped.
    #[error("degenerate distance between {} planet pair(s): {pairs:?}", .pairs.len())]
    DegenerateDistance {
        /// Slot indices `(i, j)` with `i < j` of every skipped pair.
        pairs: Vec<(usize, usize)>,
    },

    /// Invalid or unreadable configuration.
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Result type for simulation operations.
pub type SimResult<T> = Result<T, SimError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = SimError::PoolFull { capacity: 100 };
        assert_eq!(err.to_string(), "too many planets: max allowed is 100, pool's closed");

        let err = SimError::DegenerateDistance {
            pairs: vec![(0, 1)],
        };
        assert!(err.to_string().contains("1 planet pair(s)"));

        let inner = SimError::AllocationFailure { bytes: 64 };
        let err = SimError::PoolInitFailure(Box::new(inner));
        assert!(err.to_string().contains("64 bytes"));
    }
}
