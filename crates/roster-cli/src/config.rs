//! CLI configuration
//!
//! Every setting can come from a flag or from its `ROSTER_*` environment
//! variable; the flag wins when both are present.

use clap::Args;
use roster_core::logging_facility::Profile;
use roster_core::{DEFAULT_RAISE_MIN_RATING, DEFAULT_RAISE_PERCENT, DEFAULT_TOP_PAID};

#[derive(Debug, Clone, Args)]
pub struct CliConfig {
    /// Logging profile: development, production or test
    #[arg(long, env = "ROSTER_LOG_PROFILE", default_value = "development", global = true)]
    pub log_profile: Profile,

    /// Number of records shown by `top` when no count is given
    #[arg(long, env = "ROSTER_TOP_DEFAULT", default_value_t = DEFAULT_TOP_PAID, global = true)]
    pub top_default: usize,

    /// Rating threshold used by `raise` when none is given
    #[arg(
        long,
        env = "ROSTER_RAISE_MIN_RATING",
        default_value_t = DEFAULT_RAISE_MIN_RATING,
        global = true
    )]
    pub raise_min_rating: f64,

    /// Percentage used by `raise` when none is given
    #[arg(
        long,
        env = "ROSTER_RAISE_PERCENT",
        default_value_t = DEFAULT_RAISE_PERCENT,
        allow_negative_numbers = true,
        global = true
    )]
    pub raise_percent: f64,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_profile: Profile::Development,
            top_default: DEFAULT_TOP_PAID,
            raise_min_rating: DEFAULT_RAISE_MIN_RATING,
            raise_percent: DEFAULT_RAISE_PERCENT,
        }
    }
}
