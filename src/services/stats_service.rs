use std::collections::BTreeMap;

use crate::dto::feedback_dto::{DailyCount, ReactionCount, StatisticsData};
use crate::models::response::{Reaction, ResponseRecord};
use crate::utils::time::date_part;

/// Daily buckets returned at most this many days back.
const DAILY_WINDOW: usize = 30;

pub struct StatsService;

impl StatsService {
    /// Aggregate the full record list into the admin statistics payload.
    pub fn statistics(records: &[ResponseRecord]) -> StatisticsData {
        let reactions = Reaction::ALL
            .iter()
            .map(|&r| ReactionCount {
                reaction: r.code(),
                count: records.iter().filter(|rec| rec.reaction == r).count(),
            })
            .collect();

        // BTreeMap keeps dates sorted ascending; reversing yields most recent first.
        let mut by_day: BTreeMap<String, usize> = BTreeMap::new();
        for record in records {
            *by_day.entry(date_part(&record.timestamp)).or_default() += 1;
        }
        let daily = by_day
            .into_iter()
            .rev()
            .take(DAILY_WINDOW)
            .map(|(date, count)| DailyCount { date, count })
            .collect();

        StatisticsData {
            total: records.len(),
            reactions,
            daily,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(reaction: Reaction, timestamp: &str) -> ResponseRecord {
        ResponseRecord {
            id: 0,
            timestamp: timestamp.into(),
            reaction,
            device_id: None,
            created_at: "2024-06-01T00:00:00Z".into(),
        }
    }

    #[test]
    fn empty_store_yields_zero_counts_in_fixed_order() {
        let stats = StatsService::statistics(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(
            stats.reactions.iter().map(|r| r.reaction).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        assert!(stats.reactions.iter().all(|r| r.count == 0));
        assert!(stats.daily.is_empty());
    }

    #[test]
    fn reaction_counts_sum_to_total() {
        let records = vec![
            record(Reaction::Great, "2024-01-01T10:00:00Z"),
            record(Reaction::Great, "2024-01-01T11:00:00Z"),
            record(Reaction::Bad, "2024-01-02T09:00:00Z"),
        ];
        let stats = StatsService::statistics(&records);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.reactions[0].count, 2);
        assert_eq!(stats.reactions[1].count, 0);
        assert_eq!(stats.reactions[2].count, 1);
        let sum: usize = stats.reactions.iter().map(|r| r.count).sum();
        assert_eq!(sum, stats.total);
    }

    #[test]
    fn daily_buckets_group_by_date_and_sort_descending() {
        let records = vec![
            record(Reaction::Great, "2024-01-01T10:00:00Z"),
            record(Reaction::Ok, "2024-01-01T23:00:00Z"),
            record(Reaction::Bad, "2024-01-02T08:00:00Z"),
        ];
        let stats = StatsService::statistics(&records);
        assert_eq!(
            stats.daily,
            vec![
                DailyCount { date: "2024-01-02".into(), count: 1 },
                DailyCount { date: "2024-01-01".into(), count: 2 },
            ]
        );
    }

    #[test]
    fn daily_window_is_capped_at_thirty_days() {
        let records: Vec<_> = (1..=40)
            .map(|day| record(Reaction::Ok, &format!("2024-03-{:02}T12:00:00Z", day % 31 + 1)))
            .collect();
        let stats = StatsService::statistics(&records);
        // 31 distinct dates in the data, window keeps the 30 most recent.
        assert_eq!(stats.daily.len(), 30);
        assert_eq!(stats.daily[0].date, "2024-03-31");
    }

    #[test]
    fn malformed_timestamps_group_by_raw_prefix() {
        let records = vec![
            record(Reaction::Ok, "not-a-date"),
            record(Reaction::Ok, "not-a-date"),
        ];
        let stats = StatsService::statistics(&records);
        assert_eq!(stats.daily, vec![DailyCount { date: "not-a-date".into(), count: 2 }]);
    }
}
