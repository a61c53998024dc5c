use colored::Colorize;
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Cell, ContentArrangement, Table};

use crate::analysis::{DurationStats, StationStats, Summary, TimeStats, UserStats, ValueCount};
use crate::io::trip_cells;
use crate::models::{month_name, weekday_name, Column, Trip};

pub(crate) const NO_DATA: &str = "  No data available.\n";

/// Bold section title followed by a rule.
pub(crate) fn section_title(title: &str, width: usize) -> String {
    format!("\n{}\n{}\n", title.bold().green(), "=".repeat(width))
}

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn unavailable(what: &str) -> String {
    format!("  {}\n", format!("{what} data is unavailable for this city.").yellow())
}

/// Format a two-column table of value counts.
pub fn format_value_counts(label: &str, counts: &[ValueCount<String>]) -> String {
    let mut table = new_table();
    table.set_header(vec![label, "Trips"]);
    for c in counts {
        table.add_row(vec![Cell::new(&c.value), Cell::new(c.count)]);
    }
    format!("{table}\n")
}

/// Format the most common times of travel.
pub fn format_time_stats(stats: &TimeStats) -> String {
    let mut output = section_title("Most Frequent Times of Travel", 50);

    let (Some(month), Some(day), Some(start), Some(hour)) = (
        stats.most_common_month,
        stats.most_common_day,
        stats.most_common_start_time,
        stats.most_common_hour,
    ) else {
        output.push_str(NO_DATA);
        return output;
    };

    output.push_str(&format!("  Most common month:       {}\n", month_name(month)));
    output.push_str(&format!("  Most common day of week: {}\n", weekday_name(day)));
    output.push_str(&format!(
        "  Most common start time:  {}\n",
        start.format("%H:%M:%S")
    ));
    output.push_str(&format!("  Most common start hour:  {hour:02}:00\n"));
    output
}

/// Format the most popular stations and trip.
pub fn format_station_stats(stats: &StationStats) -> String {
    let mut output = section_title("Most Popular Stations and Trip", 50);

    if stats.most_common_start.is_none()
        && stats.most_common_end.is_none()
        && stats.most_common_trip.is_none()
    {
        output.push_str(NO_DATA);
        return output;
    }

    let or_unknown = |s: &Option<String>| s.clone().unwrap_or_else(|| "n/a".to_string());
    output.push_str(&format!(
        "  Most common start station: {}\n",
        or_unknown(&stats.most_common_start)
    ));
    output.push_str(&format!(
        "  Most common end station:   {}\n",
        or_unknown(&stats.most_common_end)
    ));
    match &stats.most_common_trip {
        Some(pair) => output.push_str(&format!(
            "  Most frequent trip:        {pair} ({} trips)\n",
            pair.trips
        )),
        None => output.push_str("  Most frequent trip:        n/a\n"),
    }
    output
}

/// Format total and mean trip duration.
pub fn format_duration_stats(stats: Option<&DurationStats>) -> String {
    let mut output = section_title("Trip Duration", 50);
    match stats {
        Some(stats) => {
            output.push_str(&format!("  Total travel time: {}\n", stats.total()));
            output.push_str(&format!("  Mean travel time:  {}\n", stats.mean()));
        }
        None => output.push_str(NO_DATA),
    }
    output
}

fn push_user_breakdown(output: &mut String, stats: &UserStats) {
    match &stats.user_types {
        Some(counts) if !counts.is_empty() => {
            output.push_str("  Counts of user types:\n");
            output.push_str(&format_value_counts("User Type", counts));
        }
        Some(_) => output.push_str("  Counts of user types: none recorded\n"),
        None => output.push_str(&unavailable("User type")),
    }

    match &stats.genders {
        Some(counts) if !counts.is_empty() => {
            output.push_str("  Counts of gender:\n");
            output.push_str(&format_value_counts("Gender", counts));
        }
        Some(_) => output.push_str("  Counts of gender: none recorded\n"),
        None => output.push_str(&unavailable("Gender")),
    }

    match &stats.birth_years {
        Some(years) => {
            output.push_str(&format!("  Earliest birth year:    {}\n", years.earliest));
            output.push_str(&format!("  Most recent birth year: {}\n", years.most_recent));
            output.push_str(&format!("  Most common birth year: {}\n", years.most_common));
        }
        None => output.push_str(&unavailable("Birth year")),
    }
}

/// Format user type, gender and birth year statistics.
pub fn format_user_stats(stats: &UserStats) -> String {
    let mut output = section_title("User Stats", 50);
    push_user_breakdown(&mut output, stats);
    output
}

/// Format the closing summary of the filtered data.
pub fn format_summary(summary: &Summary) -> String {
    let mut output = section_title("Summary", 50);
    output.push_str(&format!("  Total trips:        {}\n", summary.trip_count));

    if let Some(durations) = &summary.durations {
        output.push_str(&format!("  Total travel time:  {}\n", durations.total()));
        output.push_str(&format!("  Mean travel time:   {}\n", durations.mean()));
    }
    if let Some(pair) = &summary.most_common_trip {
        output.push_str(&format!("  Most frequent trip: {pair}\n"));
    }
    push_user_breakdown(&mut output, &summary.users);
    output
}

/// Format a page of raw trips, showing only the given columns.
pub fn format_trip_page(trips: &[Trip], columns: &[Column], first_row: usize) -> String {
    let mut table = new_table();
    let mut header = vec!["#".to_string()];
    header.extend(columns.iter().map(|c| c.header().to_string()));
    table.set_header(header);

    for (i, trip) in trips.iter().enumerate() {
        let mut row = vec![(first_row + i + 1).to_string()];
        row.extend(trip_cells(trip, columns));
        table.add_row(row);
    }
    format!("{table}\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{BirthYearStats, Hms, StationPair};
    use chrono::{NaiveDate, Weekday};

    fn counts(pairs: &[(&str, usize)]) -> Vec<ValueCount<String>> {
        pairs
            .iter()
            .map(|(v, c)| ValueCount {
                value: v.to_string(),
                count: *c,
            })
            .collect()
    }

    #[test]
    fn test_format_time_stats() {
        let stats = TimeStats {
            most_common_month: Some(6),
            most_common_day: Some(Weekday::Fri),
            most_common_start_time: NaiveDate::from_ymd_opt(2017, 6, 23)
                .unwrap()
                .and_hms_opt(17, 5, 9),
            most_common_hour: Some(17),
        };
        let output = format_time_stats(&stats);
        assert!(output.contains("Most Frequent Times of Travel"));
        assert!(output.contains("June"));
        assert!(output.contains("Friday"));
        assert!(output.contains("17:05:09"));
        assert!(output.contains("17:00"));
    }

    #[test]
    fn test_format_time_stats_empty() {
        let stats = TimeStats {
            most_common_month: None,
            most_common_day: None,
            most_common_start_time: None,
            most_common_hour: None,
        };
        assert!(format_time_stats(&stats).contains("No data available."));
    }

    #[test]
    fn test_format_station_stats() {
        let stats = StationStats {
            most_common_start: Some("Streeter Dr & Grand Ave".to_string()),
            most_common_end: Some("Lake Shore Dr & Monroe St".to_string()),
            most_common_trip: Some(StationPair {
                start: "Lake Shore Dr & Monroe St".to_string(),
                end: "Streeter Dr & Grand Ave".to_string(),
                trips: 12,
            }),
        };
        let output = format_station_stats(&stats);
        assert!(output.contains("Streeter Dr & Grand Ave"));
        assert!(output.contains("Lake Shore Dr & Monroe St -> Streeter Dr & Grand Ave"));
        assert!(output.contains("12 trips"));
    }

    #[test]
    fn test_format_station_stats_empty() {
        let stats = StationStats {
            most_common_start: None,
            most_common_end: None,
            most_common_trip: None,
        };
        assert!(format_station_stats(&stats).contains("No data available."));
    }

    #[test]
    fn test_format_duration_stats() {
        let stats = DurationStats {
            trip_count: 2,
            total_secs: 7384.0,
            mean_secs: 3692.0,
        };
        let output = format_duration_stats(Some(&stats));
        assert!(output.contains(&Hms::from_secs_f64(7384.0).to_string()));
        assert!(output.contains("2 hours, 03 minutes, 04 seconds"));
        assert!(output.contains("1 hours, 01 minutes, 32 seconds"));
        assert!(format_duration_stats(None).contains("No data available."));
    }

    #[test]
    fn test_format_user_stats_unavailable() {
        let stats = UserStats {
            user_types: Some(counts(&[("Subscriber", 3), ("Customer", 1)])),
            genders: None,
            birth_years: None,
        };
        let output = format_user_stats(&stats);
        assert!(output.contains("Subscriber"));
        assert!(output.contains("Customer"));
        assert!(output.contains("Gender data is unavailable for this city."));
        assert!(output.contains("Birth year data is unavailable for this city."));
    }

    #[test]
    fn test_format_user_stats_full() {
        let stats = UserStats {
            user_types: Some(counts(&[("Subscriber", 3)])),
            genders: Some(counts(&[("Male", 2), ("Female", 1)])),
            birth_years: Some(BirthYearStats {
                earliest: 1899,
                most_recent: 2016,
                most_common: 1989,
            }),
        };
        let output = format_user_stats(&stats);
        assert!(output.contains("Female"));
        assert!(output.contains("1899"));
        assert!(output.contains("2016"));
        assert!(output.contains("1989"));
        assert!(!output.contains("unavailable"));
    }

    #[test]
    fn test_format_summary() {
        let summary = Summary {
            trip_count: 42,
            durations: Some(DurationStats {
                trip_count: 42,
                total_secs: 4200.0,
                mean_secs: 100.0,
            }),
            most_common_trip: Some(StationPair {
                start: "A".to_string(),
                end: "B".to_string(),
                trips: 5,
            }),
            users: UserStats {
                user_types: None,
                genders: None,
                birth_years: None,
            },
        };
        let output = format_summary(&summary);
        assert!(output.contains("Summary"));
        assert!(output.contains("42"));
        assert!(output.contains("A -> B"));
        assert!(output.contains("User type data is unavailable"));
    }

    #[test]
    fn test_format_trip_page() {
        let mut trip = Trip::starting_at(
            NaiveDate::from_ymd_opt(2017, 1, 1)
                .unwrap()
                .and_hms_opt(9, 7, 57)
                .unwrap(),
        );
        trip.user_type = Some("Customer".to_string());
        let output = format_trip_page(&[trip], &[Column::StartTime, Column::UserType], 5);
        assert!(output.contains("Start Time"));
        assert!(output.contains("User Type"));
        assert!(output.contains("2017-01-01 09:07:57"));
        assert!(output.contains("Customer"));
        assert!(output.contains('6'));
    }

    #[test]
    fn test_format_value_counts() {
        let output = format_value_counts("Gender", &counts(&[("Male", 10)]));
        assert!(output.contains("Gender"));
        assert!(output.contains("Trips"));
        assert!(output.contains("10"));
    }
}
