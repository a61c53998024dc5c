use chrono::{Month, Weekday};

use super::trip::{weekday_name, Trip};
use crate::error::BikeshareError;

/// Months a trip log can be filtered by.
pub const FILTER_MONTHS: [Month; 6] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
];

/// Days a trip log can be filtered by.
pub const FILTER_DAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Month constraint on the start time of a trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthFilter {
    All,
    Only(Month),
}

impl MonthFilter {
    pub fn matches(&self, trip: &Trip) -> bool {
        match self {
            MonthFilter::All => true,
            MonthFilter::Only(month) => trip.month() == month.number_from_month(),
        }
    }
}

impl std::fmt::Display for MonthFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MonthFilter::All => write!(f, "all"),
            MonthFilter::Only(month) => write!(f, "{}", month.name()),
        }
    }
}

impl std::str::FromStr for MonthFilter {
    type Err = BikeshareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        if wanted == "all" {
            return Ok(MonthFilter::All);
        }
        FILTER_MONTHS
            .into_iter()
            .find(|m| m.name().to_lowercase() == wanted)
            .map(MonthFilter::Only)
            .ok_or_else(|| {
                BikeshareError::InvalidInput(format!(
                    "'{}' is not one of: all, January, February, March, April, May, June",
                    s.trim()
                ))
            })
    }
}

/// Day-of-week constraint on the start time of a trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayFilter {
    All,
    Only(Weekday),
}

impl DayFilter {
    pub fn matches(&self, trip: &Trip) -> bool {
        match self {
            DayFilter::All => true,
            DayFilter::Only(day) => trip.weekday() == *day,
        }
    }
}

impl std::fmt::Display for DayFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayFilter::All => write!(f, "all"),
            DayFilter::Only(day) => write!(f, "{}", weekday_name(*day)),
        }
    }
}

impl std::str::FromStr for DayFilter {
    type Err = BikeshareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        if wanted == "all" {
            return Ok(DayFilter::All);
        }
        FILTER_DAYS
            .into_iter()
            .find(|d| weekday_name(*d).to_lowercase() == wanted)
            .map(DayFilter::Only)
            .ok_or_else(|| {
                BikeshareError::InvalidInput(format!(
                    "'{}' is not one of: all, Monday, Tuesday, ..., Sunday",
                    s.trim()
                ))
            })
    }
}

/// A city plus optional month and day constraints, chosen for one round of analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSelection {
    /// Lower-case city key as configured
    pub city: String,
    pub month: MonthFilter,
    pub day: DayFilter,
}

impl FilterSelection {
    pub fn new(city: impl Into<String>, month: MonthFilter, day: DayFilter) -> Self {
        Self {
            city: city.into(),
            month,
            day,
        }
    }

    /// Whether a trip passes both the month and the day constraint.
    pub fn matches(&self, trip: &Trip) -> bool {
        self.month.matches(trip) && self.day.matches(trip)
    }
}

impl std::fmt::Display for FilterSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "city: {} | month: {} | day: {}",
            self.city, self.month, self.day
        )
    }
}
