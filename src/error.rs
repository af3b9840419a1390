//! Error handling for the k-way union engine
//!
//! Every fallible operation in the crate returns [`Result`], whose error type
//! distinguishes configuration misuse (detected before any work starts) from
//! comparison findings produced after several strategies have run.

use thiserror::Error;

/// Main error type for the union engine
#[derive(Error, Debug)]
pub enum UnionError {
    /// An algorithm name outside the supported set was requested
    #[error("Unsupported algorithm: {name}")]
    UnsupportedAlgorithm {
        /// The rejected name, exactly as supplied
        name: String,
    },

    /// The chunk count does not evenly divide the number of input sets
    #[error("Invalid partitioning: {num_sets} sets cannot be split into {chunk_count} equal chunks")]
    InvalidPartitioning {
        /// Number of input sets
        num_sets: usize,
        /// Requested number of parallel chunks
        chunk_count: usize,
    },

    /// A strategy produced output that differs from the reference result
    #[error(
        "Result mismatch: {algorithm} produced {actual_len} values, {reference} produced {expected_len} (first difference at index {first_difference})"
    )]
    ResultMismatch {
        /// Algorithm whose output disagreed
        algorithm: String,
        /// Algorithm that produced the reference output
        reference: String,
        /// Length of the reference output
        expected_len: usize,
        /// Length of the disagreeing output
        actual_len: usize,
        /// First index at which the two outputs differ
        first_difference: usize,
    },

    /// Configuration or parameter errors
    #[error("Invalid configuration: {message}")]
    Configuration {
        /// Configuration error message
        message: String,
    },

    /// A sub-range argument lies outside the input
    #[error("Invalid range: [{start}, {end}) over {len} sets")]
    InvalidRange {
        /// Range start (inclusive)
        start: usize,
        /// Range end (exclusive)
        end: usize,
        /// Number of sets the range indexes into
        len: usize,
    },

    /// Input values that violate the sorted set invariant
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// Description of the violation
        message: String,
    },

    /// I/O errors while reading or writing configuration files
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl UnionError {
    /// Create an unsupported algorithm error
    pub fn unsupported_algorithm<S: Into<String>>(name: S) -> Self {
        Self::UnsupportedAlgorithm { name: name.into() }
    }

    /// Create an invalid partitioning error
    pub fn invalid_partitioning(num_sets: usize, chunk_count: usize) -> Self {
        Self::InvalidPartitioning {
            num_sets,
            chunk_count,
        }
    }

    /// Create a result mismatch finding
    pub fn result_mismatch<A: Into<String>, R: Into<String>>(
        algorithm: A,
        reference: R,
        expected_len: usize,
        actual_len: usize,
        first_difference: usize,
    ) -> Self {
        Self::ResultMismatch {
            algorithm: algorithm.into(),
            reference: reference.into(),
            expected_len,
            actual_len,
            first_difference,
        }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an invalid range error
    pub fn invalid_range(start: usize, end: usize, len: usize) -> Self {
        Self::InvalidRange { start, end, len }
    }

    /// Create an invalid input error
    pub fn invalid_input<S: Into<String>>(message: S) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Check if this is a recoverable error
    ///
    /// A mismatch is a finding about one strategy; the remaining strategies
    /// can still run. Everything else is a misuse of the API.
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::ResultMismatch { .. } => true,
            Self::Io(_) => true,
            Self::UnsupportedAlgorithm { .. } => false,
            Self::InvalidPartitioning { .. } => false,
            Self::Configuration { .. } => false,
            Self::InvalidRange { .. } => false,
            Self::InvalidInput { .. } => false,
        }
    }

    /// Get the error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            Self::UnsupportedAlgorithm { .. } => "algorithm",
            Self::InvalidPartitioning { .. } => "partition",
            Self::ResultMismatch { .. } => "mismatch",
            Self::Configuration { .. } => "config",
            Self::InvalidRange { .. } => "bounds",
            Self::InvalidInput { .. } => "input",
            Self::Io(_) => "io",
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, UnionError>;

/// Assert that `[start, end)` is a valid range over `len` sets
#[inline]
pub fn check_range(start: usize, end: usize, len: usize) -> Result<()> {
    if start > end || end > len {
        return Err(UnionError::invalid_range(start, end, len));
    }
    Ok(())
}

/// Assert that `chunk_count` splits `num_sets` into equal non-empty chunks
#[inline]
pub fn check_partitioning(num_sets: usize, chunk_count: usize) -> Result<()> {
    if chunk_count == 0 || num_sets % chunk_count != 0 {
        return Err(UnionError::invalid_partitioning(num_sets, chunk_count));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = UnionError::unsupported_algorithm("bogus");
        assert_eq!(err.category(), "algorithm");
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_range_checking() {
        assert!(check_range(2, 8, 10).is_ok());
        assert!(check_range(0, 0, 0).is_ok());
        assert!(check_range(5, 5, 5).is_ok());
        assert!(check_range(8, 2, 10).is_err()); // start > end
        assert!(check_range(2, 15, 10).is_err()); // end > len
    }

    #[test]
    fn test_partition_checking() {
        assert!(check_partitioning(16, 8).is_ok());
        assert!(check_partitioning(3, 3).is_ok());
        assert!(check_partitioning(0, 4).is_ok());
        assert!(check_partitioning(10, 3).is_err());
        assert!(check_partitioning(10, 0).is_err());

        match check_partitioning(10, 3) {
            Err(UnionError::InvalidPartitioning {
                num_sets,
                chunk_count,
            }) => {
                assert_eq!(num_sets, 10);
                assert_eq!(chunk_count, 3);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_all_error_types() {
        let partition_err = UnionError::invalid_partitioning(10, 3);
        assert_eq!(partition_err.category(), "partition");
        assert!(!partition_err.is_recoverable());

        let mismatch = UnionError::result_mismatch("min-pointer", "pairwise-sequential", 6, 5, 4);
        assert_eq!(mismatch.category(), "mismatch");
        assert!(mismatch.is_recoverable());

        let config_err = UnionError::configuration("min_elem > max_elem");
        assert_eq!(config_err.category(), "config");
        assert!(!config_err.is_recoverable());

        let range_err = UnionError::invalid_range(3, 1, 4);
        assert_eq!(range_err.category(), "bounds");

        let input_err = UnionError::invalid_input("not ascending");
        assert_eq!(input_err.category(), "input");
        assert!(!input_err.is_recoverable());
    }

    #[test]
    fn test_error_display() {
        let err = UnionError::unsupported_algorithm("bogus");
        let display = format!("{}", err);
        assert!(display.contains("Unsupported algorithm"));
        assert!(display.contains("bogus"));

        let partition_err = UnionError::invalid_partitioning(10, 3);
        let display = format!("{}", partition_err);
        assert!(display.contains("10"));
        assert!(display.contains("3"));

        let mismatch = UnionError::result_mismatch("hash-accumulate", "pairwise-sequential", 6, 7, 2);
        let display = format!("{}", mismatch);
        assert!(display.contains("hash-accumulate"));
        assert!(display.contains("pairwise-sequential"));
        assert!(display.contains("index 2"));
    }

    #[test]
    fn test_from_io_error() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing config");
        let err: UnionError = io_error.into();

        assert_eq!(err.category(), "io");
        assert!(format!("{}", err).contains("I/O error"));
    }
}
