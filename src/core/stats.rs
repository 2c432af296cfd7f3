use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

use crate::model::post::Post;

/// Platform statistics for the admin dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformStats {
    pub total_users: usize,
    pub total_posts: usize,
    pub active_authors: usize,
    pub pending_posts: usize,
    pub monthly_growth: f64,
    pub posts_per_month: Vec<MonthlyCount>,
    pub user_registrations: Vec<MonthlyCount>,
    pub top_posts: Vec<Post>,
}

/// One bucket of a per-month time series
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyCount {
    pub month: String,
    pub count: usize,
}

/// Bucket `dates` into the trailing `months` calendar months ending at
/// `now`, oldest bucket first. Dates outside the window are ignored.
pub fn monthly_counts(
    dates: &[DateTime<Utc>],
    now: DateTime<Utc>,
    months: usize,
) -> Vec<MonthlyCount> {
    let mut buckets: Vec<(i32, u32)> = Vec::with_capacity(months);
    let mut year = now.year();
    let mut month = now.month();
    for _ in 0..months {
        buckets.push((year, month));
        if month == 1 {
            year -= 1;
            month = 12;
        } else {
            month -= 1;
        }
    }
    buckets.reverse();

    buckets
        .into_iter()
        .map(|(y, m)| {
            let count = dates
                .iter()
                .filter(|d| d.year() == y && d.month() == m)
                .count();
            MonthlyCount {
                month: month_label(m),
                count,
            }
        })
        .collect()
}

/// Growth of the newest bucket relative to the oldest, as a percentage.
/// Zero when the oldest bucket is empty.
pub fn growth_percent(series: &[MonthlyCount]) -> f64 {
    match (series.first(), series.last()) {
        (Some(first), Some(last)) if first.count > 0 => {
            (last.count as f64 - first.count as f64) / first.count as f64 * 100.0
        }
        _ => 0.0,
    }
}

fn month_label(month: u32) -> String {
    const LABELS: [&str; 12] = [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ];
    LABELS[(month as usize) - 1].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap()
    }

    #[test]
    fn buckets_cover_trailing_months_in_order() {
        let now = at(2024, 3, 15);
        let series = monthly_counts(&[], now, 6);
        let labels: Vec<&str> = series.iter().map(|b| b.month.as_str()).collect();
        assert_eq!(labels, ["Oct", "Nov", "Dec", "Jan", "Feb", "Mar"]);
    }

    #[test]
    fn counts_land_in_their_calendar_month() {
        let now = at(2024, 3, 15);
        let dates = vec![
            at(2024, 3, 1),
            at(2024, 3, 30),
            at(2024, 2, 10),
            at(2023, 12, 25),
            at(2022, 3, 1), // outside the window
        ];
        let series = monthly_counts(&dates, now, 6);
        let counts: Vec<usize> = series.iter().map(|b| b.count).collect();
        assert_eq!(counts, [0, 0, 1, 0, 1, 2]);
    }

    #[test]
    fn year_boundary_walks_backwards() {
        let now = at(2024, 1, 5);
        let series = monthly_counts(&[at(2023, 12, 31), at(2024, 1, 1)], now, 2);
        assert_eq!(
            series,
            vec![
                MonthlyCount { month: "Dec".into(), count: 1 },
                MonthlyCount { month: "Jan".into(), count: 1 },
            ]
        );
    }

    #[test]
    fn growth_is_relative_to_oldest_bucket() {
        let series = vec![
            MonthlyCount { month: "Jan".into(), count: 20 },
            MonthlyCount { month: "Feb".into(), count: 35 },
        ];
        assert_eq!(growth_percent(&series), 75.0);
    }

    #[test]
    fn growth_with_empty_oldest_bucket_is_zero() {
        let series = vec![
            MonthlyCount { month: "Jan".into(), count: 0 },
            MonthlyCount { month: "Feb".into(), count: 10 },
        ];
        assert_eq!(growth_percent(&series), 0.0);
        assert_eq!(growth_percent(&[]), 0.0);
    }
}
