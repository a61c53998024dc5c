use chrono::{NaiveDateTime, Weekday};

use super::aggregate::{mode, mode_with_count, value_counts, ValueCount};
use crate::models::{Column, TripDataset, FILTER_DAYS};

/// A span of time broken into whole hours, minutes and seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hms {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl Hms {
    /// Split a number of seconds, dropping any fractional part.
    ///
    /// # Examples
    ///
    /// ```
    /// use bikeshare_explorer::analysis::Hms;
    ///
    /// let hms = Hms::from_secs_f64(3725.9);
    /// assert_eq!((hms.hours, hms.minutes, hms.seconds), (1, 2, 5));
    /// ```
    pub fn from_secs_f64(secs: f64) -> Self {
        let whole = if secs.is_finite() && secs > 0.0 {
            secs.trunc() as u64
        } else {
            0
        };
        Self {
            hours: whole / 3600,
            minutes: (whole % 3600) / 60,
            seconds: whole % 60,
        }
    }
}

impl std::fmt::Display for Hms {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} hours, {:02} minutes, {:02} seconds",
            self.hours, self.minutes, self.seconds
        )
    }
}

/// Most common times of travel.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeStats {
    /// Month number, 1 = January
    pub most_common_month: Option<u32>,
    pub most_common_day: Option<Weekday>,
    /// Most frequent exact start timestamp
    pub most_common_start_time: Option<NaiveDateTime>,
    pub most_common_hour: Option<u32>,
}

impl TimeStats {
    pub fn compute(dataset: &TripDataset) -> Self {
        let trips = &dataset.trips;
        Self {
            most_common_month: mode(trips.iter().map(|t| t.month())),
            most_common_day: mode(trips.iter().map(|t| t.weekday().num_days_from_monday()))
                .and_then(|d| FILTER_DAYS.get(d as usize).copied()),
            most_common_start_time: mode(trips.iter().map(|t| t.start_time)),
            most_common_hour: mode(trips.iter().map(|t| t.hour())),
        }
    }
}

/// The most travelled (start, end) station combination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationPair {
    pub start: String,
    pub end: String,
    /// Number of trips between the two stations
    pub trips: usize,
}

impl std::fmt::Display for StationPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.start, self.end)
    }
}

/// Most popular stations and trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationStats {
    pub most_common_start: Option<String>,
    pub most_common_end: Option<String>,
    pub most_common_trip: Option<StationPair>,
}

/// Most frequent (start, end) pair among trips with both stations known.
pub fn most_common_trip(dataset: &TripDataset) -> Option<StationPair> {
    mode_with_count(dataset.trips.iter().filter_map(|t| t.station_pair())).map(|m| {
        StationPair {
            start: m.value.0.to_string(),
            end: m.value.1.to_string(),
            trips: m.count,
        }
    })
}

impl StationStats {
    pub fn compute(dataset: &TripDataset) -> Self {
        let trips = &dataset.trips;
        Self {
            most_common_start: mode(trips.iter().filter_map(|t| t.start_station.as_deref()))
                .map(str::to_string),
            most_common_end: mode(trips.iter().filter_map(|t| t.end_station.as_deref()))
                .map(str::to_string),
            most_common_trip: most_common_trip(dataset),
        }
    }
}

/// Total and average trip duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DurationStats {
    /// Trips that had a duration
    pub trip_count: usize,
    pub total_secs: f64,
    pub mean_secs: f64,
}

impl DurationStats {
    /// `None` when the dataset has no trip durations at all.
    pub fn compute(dataset: &TripDataset) -> Option<Self> {
        if !dataset.has_column(Column::TripDuration) {
            return None;
        }
        let durations: Vec<f64> = dataset.durations().collect();
        if durations.is_empty() {
            return None;
        }
        Some(Self {
            trip_count: durations.len(),
            total_secs: durations.iter().sum(),
            mean_secs: statrs::statistics::Statistics::mean(durations.iter()),
        })
    }

    pub fn total(&self) -> Hms {
        Hms::from_secs_f64(self.total_secs)
    }

    pub fn mean(&self) -> Hms {
        Hms::from_secs_f64(self.mean_secs)
    }
}

/// Earliest, most recent and most common rider birth year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthYearStats {
    pub earliest: i32,
    pub most_recent: i32,
    pub most_common: i32,
}

impl BirthYearStats {
    pub fn compute(dataset: &TripDataset) -> Option<Self> {
        if !dataset.has_column(Column::BirthYear) {
            return None;
        }
        let years: Vec<i32> = dataset.trips.iter().filter_map(|t| t.birth_year).collect();
        Some(Self {
            earliest: *years.iter().min()?,
            most_recent: *years.iter().max()?,
            most_common: mode(years.iter().copied())?,
        })
    }
}

/// Rider breakdowns. Each field is `None` when the source file lacks the column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserStats {
    pub user_types: Option<Vec<ValueCount<String>>>,
    pub genders: Option<Vec<ValueCount<String>>>,
    pub birth_years: Option<BirthYearStats>,
}

fn column_counts(
    dataset: &TripDataset,
    column: Column,
    field: impl Fn(&crate::models::Trip) -> Option<&String>,
) -> Option<Vec<ValueCount<String>>> {
    if !dataset.has_column(column) {
        return None;
    }
    Some(
        value_counts(dataset.trips.iter().filter_map(|t| field(t)))
            .into_iter()
            .map(|c| ValueCount {
                value: c.value.to_string(),
                count: c.count,
            })
            .collect(),
    )
}

impl UserStats {
    pub fn compute(dataset: &TripDataset) -> Self {
        Self {
            user_types: column_counts(dataset, Column::UserType, |t| t.user_type.as_ref()),
            genders: column_counts(dataset, Column::Gender, |t| t.gender.as_ref()),
            birth_years: BirthYearStats::compute(dataset),
        }
    }
}

/// Closing overview of the filtered data.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub trip_count: usize,
    pub durations: Option<DurationStats>,
    pub most_common_trip: Option<StationPair>,
    pub users: UserStats,
}

impl Summary {
    pub fn compute(dataset: &TripDataset) -> Self {
        Self {
            trip_count: dataset.len(),
            durations: DurationStats::compute(dataset),
            most_common_trip: most_common_trip(dataset),
            users: UserStats::compute(dataset),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Trip;
    use assert_approx_eq::assert_approx_eq;
    use chrono::NaiveDate;

    fn make_trip(day: u32, hour: u32, start: &str, end: &str, secs: f64) -> Trip {
        let mut trip = Trip::starting_at(
            NaiveDate::from_ymd_opt(2017, 3, day)
                .unwrap()
                .and_hms_opt(hour, 0, 0)
                .unwrap(),
        );
        trip.start_station = Some(start.to_string());
        trip.end_station = Some(end.to_string());
        trip.duration_secs = Some(secs);
        trip.user_type = Some("Subscriber".to_string());
        trip
    }

    fn base_columns() -> Vec<Column> {
        vec![
            Column::StartTime,
            Column::TripDuration,
            Column::StartStation,
            Column::EndStation,
            Column::UserType,
        ]
    }

    fn sample_dataset() -> TripDataset {
        let mut ds = TripDataset::new("chicago", base_columns());
        // 2017-03-06 Mon, 2017-03-07 Tue
        ds.trips.push(make_trip(6, 8, "A", "B", 600.0));
        ds.trips.push(make_trip(6, 8, "A", "B", 1200.0));
        ds.trips.push(make_trip(7, 17, "C", "B", 3600.0));
        ds.trips.push(make_trip(7, 8, "C", "A", 30.0));
        ds
    }

    #[test]
    fn test_hms_split() {
        let hms = Hms::from_secs_f64(5430.0);
        assert_eq!(hms, Hms { hours: 1, minutes: 30, seconds: 30 });
        assert_eq!(hms.to_string(), "1 hours, 30 minutes, 30 seconds");
    }

    #[test]
    fn test_hms_truncates_and_clamps() {
        assert_eq!(Hms::from_secs_f64(59.99).seconds, 59);
        assert_eq!(Hms::from_secs_f64(-3.0), Hms { hours: 0, minutes: 0, seconds: 0 });
        assert_eq!(Hms::from_secs_f64(f64::NAN).hours, 0);
    }

    #[test]
    fn test_hms_large_hours() {
        let hms = Hms::from_secs_f64(100.0 * 3600.0 + 5.0);
        assert_eq!(hms.hours, 100);
        assert_eq!(hms.to_string(), "100 hours, 00 minutes, 05 seconds");
    }

    #[test]
    fn test_time_stats() {
        let stats = TimeStats::compute(&sample_dataset());
        assert_eq!(stats.most_common_month, Some(3));
        // two trips each on Monday and Tuesday: Monday sorts first
        assert_eq!(stats.most_common_day, Some(Weekday::Mon));
        assert_eq!(stats.most_common_hour, Some(8));
        assert_eq!(
            stats.most_common_start_time,
            NaiveDate::from_ymd_opt(2017, 3, 6).unwrap().and_hms_opt(8, 0, 0)
        );
    }

    #[test]
    fn test_time_stats_empty() {
        let stats = TimeStats::compute(&TripDataset::new("x", base_columns()));
        assert_eq!(stats.most_common_month, None);
        assert_eq!(stats.most_common_day, None);
        assert_eq!(stats.most_common_start_time, None);
        assert_eq!(stats.most_common_hour, None);
    }

    #[test]
    fn test_station_stats() {
        let stats = StationStats::compute(&sample_dataset());
        // A and C both start twice: A sorts first
        assert_eq!(stats.most_common_start.as_deref(), Some("A"));
        assert_eq!(stats.most_common_end.as_deref(), Some("B"));
        let pair = stats.most_common_trip.unwrap();
        assert_eq!(pair.start, "A");
        assert_eq!(pair.end, "B");
        assert_eq!(pair.trips, 2);
        assert_eq!(pair.to_string(), "A -> B");
    }

    #[test]
    fn test_station_stats_without_columns() {
        let mut ds = TripDataset::new("x", [Column::StartTime]);
        ds.trips.push(Trip::starting_at(
            NaiveDate::from_ymd_opt(2017, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap(),
        ));
        let stats = StationStats::compute(&ds);
        assert_eq!(stats.most_common_start, None);
        assert_eq!(stats.most_common_end, None);
        assert_eq!(stats.most_common_trip, None);
    }

    #[test]
    fn test_duration_stats() {
        let stats = DurationStats::compute(&sample_dataset()).unwrap();
        assert_eq!(stats.trip_count, 4);
        assert_approx_eq!(stats.total_secs, 5430.0);
        assert_approx_eq!(stats.mean_secs, 1357.5);
        assert_eq!(stats.total(), Hms { hours: 1, minutes: 30, seconds: 30 });
        assert_eq!(stats.mean(), Hms { hours: 0, minutes: 22, seconds: 37 });
    }

    #[test]
    fn test_duration_stats_missing_column() {
        let ds = TripDataset::new("x", [Column::StartTime]);
        assert!(DurationStats::compute(&ds).is_none());
    }

    #[test]
    fn test_duration_stats_no_values() {
        let ds = TripDataset::new("x", base_columns());
        assert!(DurationStats::compute(&ds).is_none());
    }

    #[test]
    fn test_user_stats_without_demographics() {
        let stats = UserStats::compute(&sample_dataset());
        let types = stats.user_types.unwrap();
        assert_eq!(types.len(), 1);
        assert_eq!(types[0].value, "Subscriber");
        assert_eq!(types[0].count, 4);
        assert!(stats.genders.is_none());
        assert!(stats.birth_years.is_none());
    }

    #[test]
    fn test_user_stats_with_demographics() {
        let mut columns = base_columns();
        columns.push(Column::Gender);
        columns.push(Column::BirthYear);
        let mut ds = TripDataset::new("chicago", columns);
        for (gender, year) in [
            (Some("Male"), Some(1985)),
            (Some("Female"), Some(1992)),
            (Some("Male"), Some(1992)),
            (None, None),
            (Some("Male"), Some(1949)),
        ] {
            let mut trip = make_trip(6, 9, "A", "B", 60.0);
            trip.gender = gender.map(str::to_string);
            trip.birth_year = year;
            ds.trips.push(trip);
        }

        let stats = UserStats::compute(&ds);
        let genders = stats.genders.unwrap();
        assert_eq!(genders[0], ValueCount { value: "Male".to_string(), count: 3 });
        assert_eq!(genders[1], ValueCount { value: "Female".to_string(), count: 1 });

        let years = stats.birth_years.unwrap();
        assert_eq!(years.earliest, 1949);
        assert_eq!(years.most_recent, 1992);
        assert_eq!(years.most_common, 1992);
    }

    #[test]
    fn test_birth_years_all_blank() {
        let mut columns = base_columns();
        columns.push(Column::BirthYear);
        let mut ds = TripDataset::new("x", columns);
        ds.trips.push(make_trip(6, 9, "A", "B", 60.0));
        assert!(BirthYearStats::compute(&ds).is_none());
    }

    #[test]
    fn test_summary() {
        let summary = Summary::compute(&sample_dataset());
        assert_eq!(summary.trip_count, 4);
        assert!(summary.durations.is_some());
        assert_eq!(summary.most_common_trip.unwrap().to_string(), "A -> B");
        assert!(summary.users.user_types.is_some());
    }
}
