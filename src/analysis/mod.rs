mod aggregate;
mod analyzer;
mod hourly_distribution;
mod pagination;
mod statistics;

pub use aggregate::{mode, mode_with_count, value_counts, ValueCount};
pub use analyzer::Analyzer;
pub use hourly_distribution::{HourBucket, HourlyDistribution};
pub use pagination::Paginator;
pub use statistics::{
    most_common_trip, BirthYearStats, DurationStats, Hms, StationPair, StationStats, Summary,
    TimeStats, UserStats,
};
