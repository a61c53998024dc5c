mod trip;
mod filter;
mod dataset;

pub use trip::{month_name, weekday_name, Column, Trip};
pub use filter::{DayFilter, FilterSelection, MonthFilter, FILTER_DAYS, FILTER_MONTHS};
pub use dataset::TripDataset;
