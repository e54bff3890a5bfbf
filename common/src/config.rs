/// Default rental duration used when no `--days` is given.
pub const DEFAULT_DAYS: i64 = 4;

pub struct Config {
    /// Number of days the report is computed for.
    ///
    /// Not validated. Zero and negative values are passed straight through
    /// to the rent calculation.
    pub days: i64,
    /// Lowers log verbosity, once per occurrence.
    pub quiet: u8,
    /// Raises log verbosity, once per occurrence.
    pub verbose: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            days: DEFAULT_DAYS,
            quiet: 0,
            verbose: 0,
        }
    }
}
