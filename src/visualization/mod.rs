mod tables;
mod charts;

pub use tables::{
    format_duration_stats, format_station_stats, format_summary, format_time_stats,
    format_trip_page, format_user_stats, format_value_counts,
};
pub use charts::format_hourly_histogram;
