//! Configuration for union runs
//!
//! The value universe and input dimensions are carried in an explicit
//! [`UnionConfig`] passed to the engine, so runs with different parameters can
//! coexist in one process, including under concurrent test execution.
//!
//! # Configuration Trait
//!
//! The [`Config`] trait provides validation, environment initialization and
//! JSON file persistence.
//!
//! ```rust
//! use kway_union::config::{Config, UnionConfig};
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Small universe, suitable for printing inputs and outputs
//! let config = UnionConfig::small();
//! config.validate()?;
//!
//! // Initialize from environment variables with KWAY_UNION_ prefix
//! let config = UnionConfig::from_env()?;
//! # Ok(())
//! # }
//! ```

use crate::error::Result;
use std::env;
use std::fmt;
use std::path::Path;

pub mod union;


pub use union::UnionConfig;

/// Default environment variable prefix
pub const ENV_PREFIX: &str = "KWAY_UNION_";

/// Common configuration trait providing validation, environment
/// initialization and file persistence.
pub trait Config: Clone + fmt::Debug {
    /// Validate the configuration for correctness and consistency.
    ///
    /// # Returns
    ///
    /// `Ok(())` if the configuration is valid, `Err` with details if invalid.
    fn validate(&self) -> Result<()>;

    /// Initialize configuration from environment variables.
    ///
    /// Variables use the format `KWAY_UNION_{FIELD}`, for example
    /// `KWAY_UNION_NUM_SETS=64`.
    fn from_env() -> Result<Self>
    where
        Self: Default,
    {
        Self::from_env_with_prefix(ENV_PREFIX)
    }

    /// Initialize configuration from environment variables with a custom prefix.
    ///
    /// Unset or unparsable variables fall back to the default value; the
    /// resulting configuration is validated before it is returned.
    fn from_env_with_prefix(prefix: &str) -> Result<Self>
    where
        Self: Default;

    /// Save configuration to a JSON file.
    fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()>;

    /// Load and validate configuration from a JSON file.
    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self>;
}

/// Utility function to parse environment variable with fallback to default.
///
/// # Arguments
///
/// * `var_name` - The environment variable name
/// * `default` - The default value if the environment variable is not set
pub fn parse_env_var<T>(var_name: &str, default: T) -> T
where
    T: std::str::FromStr + Clone,
{
    env::var(var_name)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(default)
}
