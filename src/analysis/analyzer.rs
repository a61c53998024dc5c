use crate::analysis::{
    HourlyDistribution, Paginator, StationStats, Summary, TimeStats, DurationStats, UserStats,
};
use crate::models::TripDataset;

/// Unified analysis API that groups all statistics over one filtered dataset.
pub struct Analyzer<'a> {
    dataset: &'a TripDataset,
}

impl<'a> Analyzer<'a> {
    /// Create a new Analyzer for the given dataset.
    pub fn new(dataset: &'a TripDataset) -> Self {
        Self { dataset }
    }

    pub fn dataset(&self) -> &'a TripDataset {
        self.dataset
    }

    /// Most common month, weekday, start time and start hour.
    pub fn time_stats(&self) -> TimeStats {
        TimeStats::compute(self.dataset)
    }

    /// Most common start station, end station and trip.
    pub fn station_stats(&self) -> StationStats {
        StationStats::compute(self.dataset)
    }

    /// Total and mean trip duration, if durations are available.
    pub fn duration_stats(&self) -> Option<DurationStats> {
        DurationStats::compute(self.dataset)
    }

    /// User type, gender and birth year breakdowns.
    pub fn user_stats(&self) -> UserStats {
        UserStats::compute(self.dataset)
    }

    pub fn hourly_distribution(&self) -> HourlyDistribution {
        HourlyDistribution::compute(self.dataset)
    }

    pub fn summary(&self) -> Summary {
        Summary::compute(self.dataset)
    }

    /// Page through the raw trips.
    pub fn pages(&self, page_size: usize) -> Paginator<'a> {
        Paginator::new(&self.dataset.trips, page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Column, Trip};
    use chrono::NaiveDate;

    fn sample_dataset() -> TripDataset {
        let mut ds = TripDataset::new(
            "Analyzer Test",
            [Column::StartTime, Column::TripDuration, Column::StartStation, Column::EndStation],
        );
        for (i, secs) in [120.0, 240.0, 360.0].into_iter().enumerate() {
            let mut trip = Trip::starting_at(
                NaiveDate::from_ymd_opt(2017, 2, 1 + i as u32)
                    .unwrap()
                    .and_hms_opt(12, 0, 0)
                    .unwrap(),
            );
            trip.duration_secs = Some(secs);
            trip.start_station = Some("Lake".to_string());
            trip.end_station = Some("River".to_string());
            ds.trips.push(trip);
        }
        ds
    }

    #[test]
    fn test_time_stats_matches_standalone() {
        let ds = sample_dataset();
        assert_eq!(Analyzer::new(&ds).time_stats(), TimeStats::compute(&ds));
    }

    #[test]
    fn test_station_stats_matches_standalone() {
        let ds = sample_dataset();
        let stats = Analyzer::new(&ds).station_stats();
        assert_eq!(stats, StationStats::compute(&ds));
        assert_eq!(stats.most_common_trip.unwrap().trips, 3);
    }

    #[test]
    fn test_duration_stats_matches_standalone() {
        let ds = sample_dataset();
        let stats = Analyzer::new(&ds).duration_stats().unwrap();
        assert!((stats.mean_secs - 240.0).abs() < 0.001);
        assert_eq!(Some(stats), DurationStats::compute(&ds));
    }

    #[test]
    fn test_summary_and_pages() {
        let ds = sample_dataset();
        let analyzer = Analyzer::new(&ds);
        assert_eq!(analyzer.summary().trip_count, 3);
        assert_eq!(analyzer.pages(2).count(), 2);
        assert_eq!(analyzer.hourly_distribution().total(), 3);
        assert!(analyzer.user_stats().user_types.is_none());
    }

    #[test]
    fn test_analyzer_empty_dataset() {
        let ds = TripDataset::new("Empty", [Column::StartTime]);
        let analyzer = Analyzer::new(&ds);
        assert_eq!(analyzer.summary().trip_count, 0);
        assert!(analyzer.duration_stats().is_none());
        assert!(analyzer.time_stats().most_common_month.is_none());
        assert!(analyzer.pages(5).next_page().is_none());
    }
}
