//! Pure view-model math.
//!
//! Everything here is deterministic and allocation-light: documents in,
//! display-ready numbers out. No IO, no clock, no logging. The only fallible
//! helper is [`top_entry`], which needs at least one entry to pick from.
//!
//! Percent vs fraction: helpers taking dashboard-document rates expect
//! 0-100; [`fraction_percent`] converts insights-document fractions (0-1)
//! for display next to them.

use std::collections::HashMap;

use serde::Serialize;

use crate::error::MetricsError;
use crate::types::UpcomingTask;

/// Canonical weekday order for schedule rendering.
pub const WEEKDAY_ORDER: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// `part` as a percentage of `total`. A zero total yields 0 rather than
/// infinity; empty pipelines render as 0%, not as an error.
pub fn percentage_of(part: f64, total: f64) -> f64 {
    if total == 0.0 {
        return 0.0;
    }
    part / total * 100.0
}

/// Round to one decimal place for display, half away from zero.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Insights-document fraction (0-1) as a display percentage (0-100).
pub fn fraction_percent(fraction: f64) -> f64 {
    fraction * 100.0
}

// =============================================================================
// Currency scaling
// =============================================================================

/// Display scale for currency amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrencyScale {
    /// Divide by 1,000,000, suffix `M`.
    Millions,
    /// Divide by 1,000, suffix `K`.
    Thousands,
}

impl CurrencyScale {
    pub fn divisor(&self) -> f64 {
        match self {
            CurrencyScale::Millions => 1_000_000.0,
            CurrencyScale::Thousands => 1_000.0,
        }
    }

    pub fn suffix(&self) -> &'static str {
        match self {
            CurrencyScale::Millions => "M",
            CurrencyScale::Thousands => "K",
        }
    }
}

/// `amount` in whole currency units, scaled for display. No rounding; pair
/// with a format precision at the render site.
pub fn scaled_currency(amount: f64, scale: CurrencyScale) -> f64 {
    amount / scale.divisor()
}

/// Headline currency label, e.g. `$1.29M`.
pub fn format_currency(amount: f64, scale: CurrencyScale) -> String {
    format!("${:.2}{}", scaled_currency(amount, scale), scale.suffix())
}

// =============================================================================
// Top entry
// =============================================================================

/// The entry with the highest score; ties go to the smaller key so the
/// winner is stable across runs regardless of map iteration order.
pub fn top_entry<'a, K, V, F>(
    entries: &'a HashMap<K, V>,
    score: F,
) -> Result<(&'a K, &'a V), MetricsError>
where
    K: Ord,
    F: Fn(&V) -> f64,
{
    let mut best: Option<(&K, &V, f64)> = None;
    for (key, value) in entries {
        let s = score(value);
        match &best {
            None => best = Some((key, value, s)),
            Some((best_key, _, best_score)) => {
                if s > *best_score || (s == *best_score && key < *best_key) {
                    best = Some((key, value, s));
                }
            }
        }
    }
    best.map(|(k, v, _)| (k, v))
        .ok_or(MetricsError::EmptyInput("top_entry"))
}

// =============================================================================
// Urgency
// =============================================================================

/// Follow-up urgency bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Urgency {
    Urgent,
    Normal,
}

impl Urgency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Urgency::Urgent => "urgent",
            Urgency::Normal => "normal",
        }
    }
}

/// Anything due tomorrow or sooner is urgent, overdue included.
pub fn urgency_bucket(days_until: i64) -> Urgency {
    if days_until <= 1 {
        Urgency::Urgent
    } else {
        Urgency::Normal
    }
}

/// Task counts by due-date bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskUrgencySummary {
    pub overdue: u64,
    pub due_today: u64,
    pub due_tomorrow: u64,
    pub later: u64,
}

impl TaskUrgencySummary {
    /// Count of tasks in the urgent bucket.
    pub fn urgent(&self) -> u64 {
        self.overdue + self.due_today + self.due_tomorrow
    }

    pub fn total(&self) -> u64 {
        self.urgent() + self.later
    }
}

/// Bucket tasks by how far out they are due. Overdue is counted from the
/// task's own `days_until`, so a stale snapshot still reports what the batch
/// job saw.
pub fn task_urgency_summary(tasks: &[UpcomingTask]) -> TaskUrgencySummary {
    let mut summary = TaskUrgencySummary::default();
    for task in tasks {
        match task.days_until {
            d if d < 0 => summary.overdue += 1,
            0 => summary.due_today += 1,
            1 => summary.due_tomorrow += 1,
            _ => summary.later += 1,
        }
    }
    summary
}

// =============================================================================
// Distributions and schedules
// =============================================================================

/// One status slice of the pipeline distribution.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusShare {
    pub status: String,
    pub count: u64,
    /// Percent of the mapping's own total, 0-100.
    pub share: f64,
}

/// Status counts as display slices, largest first, ties by name. The
/// mapping's own sum defines 100%; an empty mapping yields no slices.
pub fn status_distribution(counts: &HashMap<String, u64>) -> Vec<StatusShare> {
    let total: u64 = counts.values().sum();
    let mut shares: Vec<StatusShare> = counts
        .iter()
        .map(|(status, count)| StatusShare {
            status: status.clone(),
            count: *count,
            share: percentage_of(*count as f64, total as f64),
        })
        .collect();
    shares.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.status.cmp(&b.status)));
    shares
}

/// Day -> slots pairs in canonical weekday order. Day names match
/// case-insensitively; unrecognized days sort after the real ones,
/// alphabetically.
pub fn weekly_schedule(schedule: &HashMap<String, Vec<String>>) -> Vec<(String, Vec<String>)> {
    let day_rank = |day: &str| {
        WEEKDAY_ORDER
            .iter()
            .position(|d| d.eq_ignore_ascii_case(day))
            .unwrap_or(WEEKDAY_ORDER.len())
    };
    let mut days: Vec<(String, Vec<String>)> = schedule
        .iter()
        .map(|(day, slots)| (day.clone(), slots.clone()))
        .collect();
    days.sort_by(|(a, _), (b, _)| day_rank(a).cmp(&day_rank(b)).then_with(|| a.cmp(b)));
    days
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_of_zero_total_is_zero() {
        assert_eq!(percentage_of(0.0, 0.0), 0.0);
        assert_eq!(percentage_of(17.0, 0.0), 0.0);
    }

    #[test]
    fn test_percentage_of_rounds_for_display() {
        let pct = percentage_of(25.0, 80.0);
        assert_eq!(pct, 31.25);
        assert_eq!(round1(pct), 31.3);
    }

    #[test]
    fn test_scaled_currency() {
        assert_eq!(scaled_currency(1_290_000.0, CurrencyScale::Millions), 1.29);
        assert_eq!(scaled_currency(480_000.0, CurrencyScale::Thousands), 480.0);
        assert_eq!(format_currency(1_290_000.0, CurrencyScale::Millions), "$1.29M");
        assert_eq!(format_currency(480_000.0, CurrencyScale::Thousands), "$480.00K");
    }

    #[test]
    fn test_top_entry_picks_highest() {
        let counts =
            HashMap::from([("US".to_string(), 13u64), ("IN".to_string(), 12u64)]);
        let (country, count) = top_entry(&counts, |c| *c as f64).unwrap();
        assert_eq!(country, "US");
        assert_eq!(*count, 13);
    }

    #[test]
    fn test_top_entry_tie_goes_to_smaller_key() {
        let counts =
            HashMap::from([("US".to_string(), 13u64), ("IN".to_string(), 13u64)]);
        let (country, _) = top_entry(&counts, |c| *c as f64).unwrap();
        assert_eq!(country, "IN");
    }

    #[test]
    fn test_top_entry_empty_input_fails() {
        let counts: HashMap<String, u64> = HashMap::new();
        let err = top_entry(&counts, |c| *c as f64).unwrap_err();
        assert_eq!(err, MetricsError::EmptyInput("top_entry"));
    }

    #[test]
    fn test_urgency_bucket_boundary() {
        assert_eq!(urgency_bucket(-3), Urgency::Urgent);
        assert_eq!(urgency_bucket(0), Urgency::Urgent);
        assert_eq!(urgency_bucket(1), Urgency::Urgent);
        assert_eq!(urgency_bucket(2), Urgency::Normal);
    }

    #[test]
    fn test_task_urgency_summary_buckets() {
        let tasks = vec![
            task(-2),
            task(0),
            task(1),
            task(4),
        ];
        let summary = task_urgency_summary(&tasks);
        assert_eq!(summary.overdue, 1);
        assert_eq!(summary.due_today, 1);
        assert_eq!(summary.due_tomorrow, 1);
        assert_eq!(summary.later, 1);
        assert_eq!(summary.urgent(), 3);
        assert_eq!(summary.total(), 4);
    }

    #[test]
    fn test_status_distribution_ordering_and_shares() {
        let counts = HashMap::from([
            ("Uncontacted".to_string(), 8u64),
            ("On Hold".to_string(), 7),
            ("Won".to_string(), 5),
            ("Lost".to_string(), 5),
        ]);
        let shares = status_distribution(&counts);
        let order: Vec<&str> = shares.iter().map(|s| s.status.as_str()).collect();
        assert_eq!(order, vec!["Uncontacted", "On Hold", "Lost", "Won"]);
        assert_eq!(shares[0].share, 32.0);
        let total_share: f64 = shares.iter().map(|s| s.share).sum();
        assert!((total_share - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_status_distribution_empty_map() {
        let shares = status_distribution(&HashMap::new());
        assert!(shares.is_empty());
    }

    #[test]
    fn test_weekly_schedule_canonical_order() {
        let schedule = HashMap::from([
            ("Wednesday".to_string(), vec!["10:00".to_string()]),
            ("monday".to_string(), vec!["09:00".to_string()]),
            ("Friday".to_string(), vec![]),
            ("Someday".to_string(), vec!["23:00".to_string()]),
        ]);
        let days: Vec<String> = weekly_schedule(&schedule)
            .into_iter()
            .map(|(day, _)| day)
            .collect();
        assert_eq!(days, vec!["monday", "Wednesday", "Friday", "Someday"]);
    }

    #[test]
    fn test_fraction_percent() {
        assert_eq!(fraction_percent(0.87), 87.0);
        assert_eq!(round1(fraction_percent(0.743)), 74.3);
    }

    fn task(days_until: i64) -> UpcomingTask {
        UpcomingTask {
            lead_id: 1,
            title: "call back".to_string(),
            scheduled_date: "2025-07-20".to_string(),
            days_until,
            agent_id: 1,
        }
    }
}
