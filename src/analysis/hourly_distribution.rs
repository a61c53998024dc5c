use crate::models::TripDataset;

/// Trips that started within one hour of the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HourBucket {
    /// Hour of day, 0-23
    pub hour: u32,
    /// Number of trips starting in this hour
    pub trips: usize,
}

/// How trip starts spread over the hours of the day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HourlyDistribution {
    /// One bucket per hour from the earliest to the latest start hour seen
    pub buckets: Vec<HourBucket>,
}

impl HourlyDistribution {
    /// Count trip starts per hour. Hours outside the observed range are left out.
    pub fn compute(dataset: &TripDataset) -> Self {
        let mut counts = [0usize; 24];
        for trip in &dataset.trips {
            counts[trip.hour() as usize] += 1;
        }

        let first = counts.iter().position(|&c| c > 0);
        let last = counts.iter().rposition(|&c| c > 0);
        let buckets = match (first, last) {
            (Some(first), Some(last)) => (first..=last)
                .map(|h| HourBucket {
                    hour: h as u32,
                    trips: counts[h],
                })
                .collect(),
            _ => Vec::new(),
        };

        Self { buckets }
    }

    /// The largest bucket count, 0 when empty.
    pub fn peak(&self) -> usize {
        self.buckets.iter().map(|b| b.trips).max().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.buckets.iter().map(|b| b.trips).sum()
    }
}
