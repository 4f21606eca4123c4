//! Antenatal visit scheduling.
//!
//! Visits are numbered from 1. The gap before the next visit narrows as the pregnancy
//! progresses, and visits 1 to 4 form the minimum complete panel.

use crate::components::{VisitRecord, VisitStatus};
use crate::constants::MINIMUM_ANTENATAL_VISITS;
use crate::temporal::{trimester_for_week, Trimester};
use crate::thresholds::visit_interval_days;
use chrono::{Days, NaiveDate};
use serde::Serialize;

/// The visit to book next.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct NextVisit {
    pub sequence: u32,
    /// `None` when there is no previous visit to count from.
    pub due_date: Option<NaiveDate>,
}

/// Next visit number and its due date.
///
/// The number is one past the highest existing sequence, so gaps are tolerated. The due date is
/// `last_visit_date` plus the interval for the visit just held; when `last_visit_date` is not
/// supplied the latest date among `visits` is used.
pub fn next_visit(visits: &[VisitRecord], last_visit_date: Option<NaiveDate>) -> NextVisit {
    let latest_sequence = visits.iter().map(|visit| visit.sequence).max().unwrap_or(0);
    let sequence = latest_sequence.saturating_add(1);

    let anchor = last_visit_date.or_else(|| visits.iter().map(|visit| visit.date).max());
    let due_date = match (anchor, visit_interval_days(latest_sequence)) {
        (Some(anchor), Some(days)) => anchor.checked_add_days(Days::new(days)),
        _ => None,
    };

    tracing::debug!(sequence, ?due_date, "next antenatal visit");

    NextVisit { sequence, due_date }
}

/// Completion of the four-visit minimum panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct VisitPanel {
    /// `completed[i]` is true when visit `i + 1` has a completed record.
    pub completed: [bool; MINIMUM_ANTENATAL_VISITS],
    pub all_completed: bool,
}

pub fn panel_status(visits: &[VisitRecord]) -> VisitPanel {
    let mut completed = [false; MINIMUM_ANTENATAL_VISITS];
    for (idx, slot) in completed.iter_mut().enumerate() {
        let sequence = u32::try_from(idx + 1).unwrap_or(u32::MAX);
        *slot = visits
            .iter()
            .any(|visit| visit.sequence == sequence && visit.is_completed());
    }

    VisitPanel {
        completed,
        all_completed: completed.iter().all(|done| *done),
    }
}

pub fn missed_visit_count(visits: &[VisitRecord]) -> usize {
    visits
        .iter()
        .filter(|visit| visit.status == VisitStatus::Missed)
        .count()
}

/// A visit annotated with its trimester.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct VisitSummary {
    pub sequence: u32,
    pub date: NaiveDate,
    pub status: VisitStatus,
    pub gestational_week: Option<u32>,
    /// `None` when the gestational week was not recorded.
    pub trimester: Option<Trimester>,
}

/// Visits ordered by sequence number, each with its trimester.
pub fn visit_summaries(visits: &[VisitRecord]) -> Vec<VisitSummary> {
    let mut summaries: Vec<VisitSummary> = visits
        .iter()
        .map(|visit| VisitSummary {
            sequence: visit.sequence,
            date: visit.date,
            status: visit.status,
            gestational_week: visit.gestational_week,
            trimester: visit.gestational_week.map(trimester_for_week),
        })
        .collect();
    summaries.sort_by_key(|summary| (summary.sequence, summary.date));
    summaries
}

/// Everything the visit tab shows for one pregnancy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AntenatalOverview {
    pub next: NextVisit,
    pub panel: VisitPanel,
    pub missed: usize,
    pub visits: Vec<VisitSummary>,
}

pub fn antenatal_overview(
    visits: &[VisitRecord],
    last_visit_date: Option<NaiveDate>,
) -> AntenatalOverview {
    AntenatalOverview {
        next: next_visit(visits, last_visit_date),
        panel: panel_status(visits),
        missed: missed_visit_count(visits),
        visits: visit_summaries(visits),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    fn completed(sequence: u32, on: NaiveDate) -> VisitRecord {
        VisitRecord::new(sequence, on, VisitStatus::Completed)
    }

    #[test]
    fn no_visits_starts_at_one_without_date() {
        let next = next_visit(&[], None);
        assert_eq!(next.sequence, 1);
        assert_eq!(next.due_date, None);
    }

    #[test]
    fn first_visit_books_second_four_weeks_later() {
        let visits = [completed(1, date(2024, 3, 1))];
        let next = next_visit(&visits, None);
        assert_eq!(next.sequence, 2);
        assert_eq!(next.due_date, Some(date(2024, 3, 29)));
    }

    #[test]
    fn third_visit_books_fourth_two_weeks_later() {
        let visits = [
            completed(1, date(2024, 1, 10)),
            completed(2, date(2024, 2, 7)),
            completed(3, date(2024, 3, 6)),
        ];
        let next = next_visit(&visits, None);
        assert_eq!(next.sequence, 4);
        assert_eq!(next.due_date, Some(date(2024, 3, 20)));
    }

    #[test]
    fn visits_after_fourth_are_weekly() {
        let visits = [completed(4, date(2024, 5, 1))];
        assert_eq!(
            next_visit(&visits, None).due_date,
            Some(date(2024, 5, 8))
        );
    }

    #[test]
    fn explicit_last_visit_date_wins() {
        let visits = [completed(1, date(2024, 3, 1))];
        let next = next_visit(&visits, Some(date(2024, 3, 5)));
        assert_eq!(next.due_date, Some(date(2024, 4, 2)));
    }

    #[test]
    fn gaps_in_sequence_are_tolerated() {
        let visits = [completed(1, date(2024, 1, 10)), completed(3, date(2024, 3, 6))];
        let next = next_visit(&visits, None);
        assert_eq!(next.sequence, 4);
        assert_eq!(next.due_date, Some(date(2024, 3, 20)));
    }

    #[test]
    fn panel_requires_each_of_first_four_completed() {
        let mut visits = vec![
            completed(1, date(2024, 1, 10)),
            completed(2, date(2024, 2, 7)),
            completed(3, date(2024, 3, 6)),
            VisitRecord::new(4, date(2024, 3, 20), VisitStatus::Scheduled),
            completed(5, date(2024, 3, 27)),
        ];
        let panel = panel_status(&visits);
        assert_eq!(panel.completed, [true, true, true, false]);
        assert!(!panel.all_completed);

        visits[3].status = VisitStatus::Completed;
        assert!(panel_status(&visits).all_completed);
    }

    #[test]
    fn missed_visits_are_counted() {
        let visits = [
            completed(1, date(2024, 1, 10)),
            VisitRecord::new(2, date(2024, 2, 7), VisitStatus::Missed),
            VisitRecord::new(3, date(2024, 3, 6), VisitStatus::Missed),
            VisitRecord::new(4, date(2024, 3, 20), VisitStatus::Cancelled),
        ];
        assert_eq!(missed_visit_count(&visits), 2);
    }

    #[test]
    fn summaries_are_sorted_with_trimester() {
        let mut late = completed(2, date(2024, 5, 1));
        late.gestational_week = Some(20);
        let mut early = completed(1, date(2024, 3, 1));
        early.gestational_week = Some(12);
        let undated = completed(3, date(2024, 6, 1));

        let overview = antenatal_overview(&[late, undated, early], None);
        let trimesters: Vec<_> = overview.visits.iter().map(|v| v.trimester).collect();
        assert_eq!(
            trimesters,
            vec![Some(Trimester::First), Some(Trimester::Second), None]
        );
        assert_eq!(overview.next.sequence, 4);
        assert_eq!(overview.missed, 0);
    }
}
