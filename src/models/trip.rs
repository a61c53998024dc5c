use chrono::{Datelike, NaiveDateTime, NaiveTime, Timelike, Weekday};

/// A known column in a bike-share trip log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Column {
    StartTime,
    EndTime,
    TripDuration,
    StartStation,
    EndStation,
    UserType,
    Gender,
    BirthYear,
}

impl Column {
    /// Every column, in the order they usually appear in a trip log.
    pub const ALL: [Column; 8] = [
        Column::StartTime,
        Column::EndTime,
        Column::TripDuration,
        Column::StartStation,
        Column::EndStation,
        Column::UserType,
        Column::Gender,
        Column::BirthYear,
    ];

    /// The CSV header text for this column.
    pub fn header(&self) -> &'static str {
        match self {
            Column::StartTime => "Start Time",
            Column::EndTime => "End Time",
            Column::TripDuration => "Trip Duration",
            Column::StartStation => "Start Station",
            Column::EndStation => "End Station",
            Column::UserType => "User Type",
            Column::Gender => "Gender",
            Column::BirthYear => "Birth Year",
        }
    }

    /// Look up a column by its exact header text.
    pub fn from_header(header: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.header() == header)
    }
}

impl std::fmt::Display for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.header())
    }
}

/// A single bike-share trip.
///
/// Only the start time is guaranteed; every other field is `None` when the
/// source file lacks the column or leaves the cell empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    /// When the trip began
    pub start_time: NaiveDateTime,
    /// When the trip ended
    pub end_time: Option<NaiveDateTime>,
    /// Trip length in seconds
    pub duration_secs: Option<f64>,
    pub start_station: Option<String>,
    pub end_station: Option<String>,
    /// Rider category, e.g. "Subscriber" or "Customer"
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<i32>,
}

impl Trip {
    /// Create a trip with only a start time set.
    pub fn starting_at(start_time: NaiveDateTime) -> Self {
        Self {
            start_time,
            end_time: None,
            duration_secs: None,
            start_station: None,
            end_station: None,
            user_type: None,
            gender: None,
            birth_year: None,
        }
    }

    /// Month of the start time, 1 = January.
    pub fn month(&self) -> u32 {
        self.start_time.month()
    }

    /// Day of the week of the start time.
    pub fn weekday(&self) -> Weekday {
        self.start_time.weekday()
    }

    /// Hour of day (0-23) of the start time.
    pub fn hour(&self) -> u32 {
        self.start_time.hour()
    }

    pub fn time_of_day(&self) -> NaiveTime {
        self.start_time.time()
    }

    /// The (start, end) station pair, if both stations are known.
    pub fn station_pair(&self) -> Option<(&str, &str)> {
        match (&self.start_station, &self.end_station) {
            (Some(start), Some(end)) => Some((start.as_str(), end.as_str())),
            _ => None,
        }
    }
}

/// Full English name of a weekday, e.g. "Monday".
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Full English name of a month number (1-12), e.g. "June".
pub fn month_name(month: u32) -> &'static str {
    u8::try_from(month)
        .ok()
        .and_then(|m| chrono::Month::try_from(m).ok())
        .map(|m| m.name())
        .unwrap_or("Unknown")
}
