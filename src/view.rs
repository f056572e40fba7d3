use chrono::NaiveDateTime;

use crate::paginate::PageWindow;
use crate::series::ForecastSeries;

/// The "current" reading: always element 0 of the series, never affected by
/// the page being viewed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot {
    pub time: NaiveDateTime,
    pub temperature: f64,
}

pub fn snapshot(series: &ForecastSeries) -> Option<Snapshot> {
    let time = *series.times().first()?;
    let temperature = *series.temperatures().first()?;
    Some(Snapshot { time, temperature })
}

/// Category/value series handed to the chart widget.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

/// One rendered line of the hourly table.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub display_time: String,
    pub temperature: f64,
}

/// Chart projection of a page window. Values pass through verbatim; only
/// the timestamps gain a short time-of-day label.
pub fn chart_series(window: &PageWindow) -> ChartSeries {
    ChartSeries {
        labels: window.times.iter().map(|t| chart_label(*t)).collect(),
        values: window.temperatures.to_vec(),
    }
}

/// Table projection of the same window: identical readings, identical
/// order, fuller timestamp rendering.
pub fn table_rows(window: &PageWindow) -> Vec<TableRow> {
    window
        .times
        .iter()
        .zip(window.temperatures)
        .map(|(time, temperature)| TableRow {
            display_time: display_time(*time),
            temperature: *temperature,
        })
        .collect()
}

pub fn chart_label(time: NaiveDateTime) -> String {
    time.format("%H:%M").to_string()
}

pub fn display_time(time: NaiveDateTime) -> String {
    time.format("%d-%m-%Y %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paginate;
    use chrono::{Duration, NaiveDate};

    fn series_of(n: usize) -> ForecastSeries {
        let start = NaiveDate::from_ymd_opt(2025, 8, 6)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        let times = (0..n).map(|i| start + Duration::hours(i as i64)).collect();
        let temps = (0..n).map(|i| 24.0 + i as f64).collect();
        ForecastSeries::new(times, temps)
    }

    #[test]
    fn snapshot_is_the_first_reading() {
        let series = series_of(25);
        let snap = snapshot(&series).unwrap();

        assert_eq!(snap.time, series.times()[0]);
        assert_eq!(snap.temperature, series.temperatures()[0]);

        // Paging through the series does not move the snapshot.
        let _ = paginate::window(&series, 3, 10);
        assert_eq!(snapshot(&series).unwrap(), snap);
    }

    #[test]
    fn snapshot_is_none_only_for_an_empty_series() {
        assert!(snapshot(&series_of(0)).is_none());
        assert!(snapshot(&series_of(1)).is_some());
    }

    #[test]
    fn chart_and_table_project_the_same_points() {
        let series = series_of(25);
        let window = paginate::window(&series, 2, 10);

        let chart = chart_series(&window);
        let rows = table_rows(&window);

        assert_eq!(chart.labels.len(), window.len());
        assert_eq!(chart.values, window.temperatures);
        assert_eq!(rows.len(), window.len());
        for (row, value) in rows.iter().zip(&chart.values) {
            assert_eq!(row.temperature, *value);
        }
    }

    #[test]
    fn labels_render_the_window_timestamps() {
        let series = series_of(3);
        let window = paginate::window(&series, 1, 10);
        let chart = chart_series(&window);
        let rows = table_rows(&window);

        assert_eq!(chart.labels, vec!["09:00", "10:00", "11:00"]);
        assert_eq!(rows[0].display_time, "06-08-2025 09:00");
    }

    #[test]
    fn empty_window_projects_empty_shapes() {
        let series = series_of(0);
        let window = paginate::window(&series, 1, 10);

        assert_eq!(chart_series(&window), ChartSeries::default());
        assert!(table_rows(&window).is_empty());
    }
}
