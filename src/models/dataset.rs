use std::collections::BTreeSet;

use super::{Column, DayFilter, MonthFilter, Trip};

/// All trips loaded for one city, together with the columns its source file provided.
#[derive(Debug, Clone, PartialEq)]
pub struct TripDataset {
    /// City key the data was loaded for
    pub city: String,
    /// Columns present in the source header
    pub columns: BTreeSet<Column>,
    /// Trips in source row order
    pub trips: Vec<Trip>,
}

impl TripDataset {
    /// Create a new empty dataset.
    pub fn new(city: impl Into<String>, columns: impl IntoIterator<Item = Column>) -> Self {
        Self {
            city: city.into(),
            columns: columns.into_iter().collect(),
            trips: Vec::new(),
        }
    }

    /// Whether the source file carried the given column.
    ///
    /// # Examples
    ///
    /// ```
    /// use bikeshare_explorer::{Column, TripDataset};
    ///
    /// let ds = TripDataset::new("washington", [Column::StartTime, Column::UserType]);
    /// assert!(ds.has_column(Column::UserType));
    /// assert!(!ds.has_column(Column::Gender));
    /// ```
    pub fn has_column(&self, column: Column) -> bool {
        self.columns.contains(&column)
    }

    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    /// Keep only the trips matching both constraints, preserving row order.
    pub fn filter(&self, month: MonthFilter, day: DayFilter) -> TripDataset {
        TripDataset {
            city: self.city.clone(),
            columns: self.columns.clone(),
            trips: self
                .trips
                .iter()
                .filter(|t| month.matches(t) && day.matches(t))
                .cloned()
                .collect(),
        }
    }

    /// Trip durations in seconds, skipping trips without one.
    pub fn durations(&self) -> impl Iterator<Item = f64> + '_ {
        self.trips.iter().filter_map(|t| t.duration_secs)
    }
}
