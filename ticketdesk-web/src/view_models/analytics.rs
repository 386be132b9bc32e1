//! Aggregates shown on the admin dashboard and the client overview.

use shared::models::{Ticket, TicketStatus, Timestamp};

/// Headline counts for the dashboard cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TicketSummary {
    pub total: usize,
    pub open: usize,
    pub in_progress: usize,
    pub resolved: usize,
}

/// Count tickets by status. Tickets whose status is not open, in progress or
/// resolved count toward `total` only.
pub fn summarize(tickets: &[Ticket]) -> TicketSummary {
    tickets
        .iter()
        .fold(TicketSummary::default(), |mut summary, ticket| {
            summary.total += 1;
            match ticket.counted_status() {
                Some(TicketStatus::Open) => summary.open += 1,
                Some(TicketStatus::InProgress) => summary.in_progress += 1,
                Some(TicketStatus::Resolved) => summary.resolved += 1,
                Some(TicketStatus::Closed) | None => {}
            }
            summary
        })
}

/// Slices for the status chart, in display order.
pub fn status_distribution(summary: &TicketSummary) -> [(TicketStatus, usize); 3] {
    [
        (TicketStatus::Open, summary.open),
        (TicketStatus::InProgress, summary.in_progress),
        (TicketStatus::Resolved, summary.resolved),
    ]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthBucket {
    pub label: String,
    pub count: usize,
}

/// Tickets created per month, labelled with English month abbreviations.
pub fn month_histogram(tickets: &[Ticket]) -> Vec<MonthBucket> {
    month_histogram_with(tickets, |created| created.0.format("%b").to_string())
}

/// Tickets created per month, bucketed by whatever `label` returns.
///
/// Buckets appear in the order their month is first seen. The label carries
/// no year, so the same month of different years shares a bucket. Tickets
/// without a creation time are left out.
pub fn month_histogram_with<F>(tickets: &[Ticket], label: F) -> Vec<MonthBucket>
where
    F: Fn(&Timestamp) -> String,
{
    let mut buckets: Vec<MonthBucket> = Vec::new();
    for created in tickets.iter().filter_map(|ticket| ticket.created_at.as_ref()) {
        let month = label(created);
        match buckets.iter_mut().find(|bucket| bucket.label == month) {
            Some(bucket) => bucket.count += 1,
            None => buckets.push(MonthBucket {
                label: month,
                count: 1,
            }),
        }
    }
    buckets
}

/// The `limit` newest tickets; undated tickets sort last.
pub fn recent_tickets(tickets: &[Ticket], limit: usize) -> Vec<Ticket> {
    let mut recent = tickets.to_vec();
    recent.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    recent.truncate(limit);
    recent
}

/// Counters on the client overview.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClientTicketSummary {
    pub raised: usize,
    pub resolved: usize,
    /// Tickets nobody has picked up yet (status open).
    pub pending: usize,
}

pub fn summarize_client(tickets: &[Ticket]) -> ClientTicketSummary {
    let summary = summarize(tickets);
    ClientTicketSummary {
        raised: summary.total,
        resolved: summary.resolved,
        pending: summary.open,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ticket;

    fn dated(id: i64, status: &str, created: &str) -> Ticket {
        Ticket {
            created_at: Some(created.parse().unwrap()),
            ..ticket(id, status, "Low", "Reporter")
        }
    }

    #[test]
    fn counts_ignore_case_and_whitespace() {
        let tickets = vec![
            ticket(1, "open", "Low", "a"),
            ticket(2, " OPEN ", "Low", "a"),
            ticket(3, "in_progress", "Low", "a"),
            ticket(4, "Resolved", "Low", "a"),
        ];

        let summary = summarize(&tickets);
        assert_eq!(
            summary,
            TicketSummary {
                total: 4,
                open: 2,
                in_progress: 1,
                resolved: 1
            }
        );
        assert_eq!(summary.open + summary.in_progress + summary.resolved, summary.total);
    }

    #[test]
    fn other_statuses_count_toward_total_only() {
        let tickets = vec![
            ticket(1, "open", "Low", "a"),
            ticket(2, "closed", "Low", "a"),
            ticket(3, "", "Low", "a"),
            ticket(4, "escalated", "Low", "a"),
        ];

        let summary = summarize(&tickets);
        assert_eq!(summary.total, 4);
        assert_eq!(summary.open + summary.in_progress + summary.resolved, 1);
    }

    #[test]
    fn label_spellings_are_not_counted_as_in_progress() {
        let tickets = vec![
            ticket(1, "In Progress", "Low", "a"),
            ticket(2, "in-progress", "Low", "a"),
            ticket(3, " In_Progress ", "Low", "a"),
        ];

        let summary = summarize(&tickets);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.in_progress, 1);
    }

    #[test]
    fn distribution_follows_summary() {
        let summary = TicketSummary {
            total: 6,
            open: 3,
            in_progress: 2,
            resolved: 1,
        };
        assert_eq!(
            status_distribution(&summary),
            [
                (TicketStatus::Open, 3),
                (TicketStatus::InProgress, 2),
                (TicketStatus::Resolved, 1)
            ]
        );
    }

    #[test]
    fn january_of_different_years_shares_a_bucket() {
        let tickets = vec![
            dated(1, "open", "2024-01-10T09:00:00Z"),
            dated(2, "open", "2025-03-02T09:00:00Z"),
            dated(3, "open", "2025-01-20T09:00:00Z"),
        ];

        assert_eq!(
            month_histogram(&tickets),
            vec![
                MonthBucket {
                    label: "Jan".to_string(),
                    count: 2
                },
                MonthBucket {
                    label: "Mar".to_string(),
                    count: 1
                },
            ]
        );
    }

    #[test]
    fn undated_tickets_are_not_bucketed() {
        let tickets = vec![
            ticket(1, "open", "Low", "a"),
            dated(2, "open", "2025-07-04T12:00:00"),
        ];
        let histogram = month_histogram(&tickets);
        assert_eq!(histogram.len(), 1);
        assert_eq!(histogram[0].label, "Jul");
    }

    #[test]
    fn custom_labels_drive_bucketing() {
        let tickets = vec![
            dated(1, "open", "2025-01-10T09:00:00Z"),
            dated(2, "open", "2025-02-10T09:00:00Z"),
        ];
        let histogram = month_histogram_with(&tickets, |_| "all".to_string());
        assert_eq!(
            histogram,
            vec![MonthBucket {
                label: "all".to_string(),
                count: 2
            }]
        );
    }

    #[test]
    fn recent_tickets_are_newest_first() {
        let tickets = vec![
            ticket(1, "open", "Low", "a"),
            dated(2, "open", "2025-01-10T09:00:00Z"),
            dated(3, "open", "2025-06-10T09:00:00Z"),
            dated(4, "open", "2024-12-10T09:00:00Z"),
        ];
        let recent: Vec<i64> = recent_tickets(&tickets, 3).iter().map(|t| t.id).collect();
        assert_eq!(recent, vec![3, 2, 4]);
    }

    #[test]
    fn client_summary_treats_open_as_pending() {
        let tickets = vec![
            ticket(1, "open", "Low", "a"),
            ticket(2, "in_progress", "Low", "a"),
            ticket(3, "resolved", "Low", "a"),
            ticket(4, "resolved", "Low", "a"),
        ];
        assert_eq!(
            summarize_client(&tickets),
            ClientTicketSummary {
                raised: 4,
                resolved: 2,
                pending: 1
            }
        );
    }
}
