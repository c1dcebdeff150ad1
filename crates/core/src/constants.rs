/// Decimal precision accepted for money amounts
pub const AMOUNT_DECIMAL_PRECISION: u32 = 2;

/// Currency used when formatting income and expense amounts
pub const DEFAULT_CURRENCY: &str = "EUR";

/// Number of transactions returned by a recent-transactions read by default
pub const DEFAULT_RECENT_TRANSACTIONS_LIMIT: usize = 20;

/// Number of recent transactions scanned when computing monthly statistics
pub const MONTHLY_STATS_SAMPLE_SIZE: usize = 100;

/// Minimum length of a user's display name, after trimming
pub const MIN_NAME_LENGTH: usize = 2;
