//! Aggregate statistics and chart series derived from stored history

use crate::history::store::HistoryEntry;
use serde::Serialize;
use std::collections::HashMap;

const TREND_WINDOW: usize = 5;

/// Summary over the whole history.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stats {
    pub total: usize,
    pub avg_match: u32,
    pub avg_ats: u32,
    pub top_role: Option<String>,
    /// Recent-window average minus oldest-window average, rounded. With
    /// fewer entries than two full windows the windows overlap.
    pub improvement: i32,
}

/// One point on the score-over-time chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub date: String,
    pub timestamp: i64,
    pub match_percentage: u32,
    pub ats_score: u32,
    pub role_name: String,
}

/// Computes summary stats over entries ordered newest first.
pub fn compute(entries: &[HistoryEntry]) -> Stats {
    if entries.is_empty() {
        return Stats {
            total: 0,
            avg_match: 0,
            avg_ats: 0,
            top_role: None,
            improvement: 0,
        };
    }

    let total = entries.len();
    let avg_match = average(entries.iter().map(|e| e.result.match_percentage));
    let avg_ats = average(entries.iter().map(|e| e.result.ats_score));

    Stats {
        total,
        avg_match,
        avg_ats,
        top_role: top_role(entries),
        improvement: improvement(entries),
    }
}

/// Chart points oldest first, so a line chart reads left to right in time.
pub fn chart_series(entries: &[HistoryEntry]) -> Vec<ChartPoint> {
    entries
        .iter()
        .rev()
        .map(|e| ChartPoint {
            date: e.timestamp.format("%b %-d").to_string(),
            timestamp: e.timestamp.timestamp_millis(),
            match_percentage: e.result.match_percentage,
            ats_score: e.result.ats_score,
            role_name: e.role_name.clone(),
        })
        .collect()
}

fn average<I: Iterator<Item = u32>>(values: I) -> u32 {
    let (sum, count) = values.fold((0u64, 0u64), |(s, c), v| (s + u64::from(v), c + 1));
    if count == 0 {
        0
    } else {
        ((sum as f64) / (count as f64)).round() as u32
    }
}

/// Most frequent role name; ties break toward the role seen first in the
/// newest-first list.
fn top_role(entries: &[HistoryEntry]) -> Option<String> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for entry in entries {
        *counts.entry(entry.role_name.as_str()).or_default() += 1;
    }
    let mut best: Option<(&str, usize)> = None;
    for entry in entries {
        let count = counts[entry.role_name.as_str()];
        match best {
            Some((name, _)) if name == entry.role_name => {}
            Some((_, best_count)) if count > best_count => {
                best = Some((entry.role_name.as_str(), count));
            }
            None => best = Some((entry.role_name.as_str(), count)),
            _ => {}
        }
    }
    best.map(|(name, _)| name.to_string())
}

fn improvement(entries: &[HistoryEntry]) -> i32 {
    if entries.len() < 2 {
        return 0;
    }
    let window = entries.len().min(TREND_WINDOW);
    let recent: f64 = entries[..window]
        .iter()
        .map(|e| f64::from(e.result.match_percentage))
        .sum::<f64>()
        / window as f64;
    let oldest: f64 = entries[entries.len() - window..]
        .iter()
        .map(|e| f64::from(e.result.match_percentage))
        .sum::<f64>()
        / window as f64;
    (recent - oldest).round() as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::AnalysisResult;
    use chrono::{TimeZone, Utc};

    fn entry(role: &str, match_pct: u32, ats: u32, day: u32) -> HistoryEntry {
        HistoryEntry {
            id: format!("analysis_{}_{}", day, role),
            timestamp: Utc.with_ymd_and_hms(2026, 8, day, 12, 0, 0).unwrap(),
            role_id: role.to_lowercase(),
            role_name: role.to_string(),
            resume_name: "My Resume".to_string(),
            result: AnalysisResult {
                match_percentage: match_pct,
                ats_score: ats,
                matched_skills: vec![],
                missing_skills: vec![],
                suggestions: vec![],
                detailed_feedback: None,
                is_ai_powered: false,
            },
        }
    }

    #[test]
    fn test_empty_history_is_all_zeroes() {
        let stats = compute(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.avg_match, 0);
        assert_eq!(stats.avg_ats, 0);
        assert_eq!(stats.top_role, None);
        assert_eq!(stats.improvement, 0);
    }

    #[test]
    fn test_single_entry_has_no_trend() {
        let stats = compute(&[entry("Backend Engineer", 70, 60, 1)]);
        assert_eq!(stats.total, 1);
        assert_eq!(stats.avg_match, 70);
        assert_eq!(stats.avg_ats, 60);
        assert_eq!(stats.improvement, 0);
    }

    #[test]
    fn test_averages_round_to_nearest() {
        let entries = vec![entry("Backend Engineer", 70, 61, 2), entry("Backend Engineer", 71, 60, 1)];
        let stats = compute(&entries);
        // (70 + 71) / 2 = 70.5 rounds to 71
        assert_eq!(stats.avg_match, 71);
        assert_eq!(stats.avg_ats, 61);
    }

    #[test]
    fn test_small_histories_use_overlapping_windows() {
        // Newest first: 80 then 60. Windows of size 2 are identical, so the
        // trend reduces to newest mean minus oldest mean over the same pair.
        let entries = vec![entry("Backend Engineer", 80, 50, 2), entry("Backend Engineer", 60, 50, 1)];
        assert_eq!(improvement(&entries), 0);

        // Three entries, window of 3: both windows cover everything.
        let entries = vec![
            entry("Backend Engineer", 90, 50, 3),
            entry("Backend Engineer", 70, 50, 2),
            entry("Backend Engineer", 50, 50, 1),
        ];
        assert_eq!(improvement(&entries), 0);
    }

    #[test]
    fn test_improvement_with_disjoint_windows() {
        // Ten entries newest first: five at 80, then five at 60.
        let mut entries = Vec::new();
        for day in (6..=10).rev() {
            entries.push(entry("Backend Engineer", 80, 50, day));
        }
        for day in (1..=5).rev() {
            entries.push(entry("Backend Engineer", 60, 50, day));
        }
        assert_eq!(improvement(&entries), 20);
    }

    #[test]
    fn test_top_role_counts_and_tie_break() {
        let entries = vec![
            entry("Frontend Developer", 50, 50, 4),
            entry("Backend Engineer", 50, 50, 3),
            entry("Backend Engineer", 50, 50, 2),
            entry("Frontend Developer", 50, 50, 1),
        ];
        // Tied 2-2: Frontend appears first in the newest-first order.
        assert_eq!(compute(&entries).top_role.as_deref(), Some("Frontend Developer"));

        let entries = vec![
            entry("Frontend Developer", 50, 50, 4),
            entry("Backend Engineer", 50, 50, 3),
            entry("Backend Engineer", 50, 50, 2),
        ];
        assert_eq!(compute(&entries).top_role.as_deref(), Some("Backend Engineer"));
    }

    #[test]
    fn test_chart_series_is_oldest_first() {
        let entries = vec![
            entry("Backend Engineer", 80, 70, 15),
            entry("Backend Engineer", 60, 50, 3),
        ];
        let series = chart_series(&entries);
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].date, "Aug 3");
        assert_eq!(series[1].date, "Aug 15");
        assert!(series[0].timestamp < series[1].timestamp);
        assert_eq!(series[0].match_percentage, 60);
        assert_eq!(series[1].match_percentage, 80);
    }
}
