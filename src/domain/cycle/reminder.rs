//! Reminder decision - which notice, if any, the tracker should surface.
//!
//! Evaluated on demand and free of side effects: the same log and `today`
//! always produce the same decision, so callers can debounce freely.

use serde::{Deserialize, Serialize};

use super::engine::CycleEngine;
use super::notice::Notice;
use crate::domain::foundation::CalendarDate;

/// Outcome of a reminder check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReminderDecision {
    /// Today is inside a logged period; nothing to remind about.
    Suppressed,
    /// The period was expected `days_overdue` days ago (0 = today) and
    /// nothing has been logged since.
    Overdue { days_overdue: u32 },
    /// The period is expected in `days_until` days.
    Upcoming { days_until: u32 },
    /// No notice: empty log, or outside every window.
    NoReminder,
}

impl ReminderDecision {
    /// The notice to present, if the decision calls for one.
    pub fn notice(&self) -> Option<Notice> {
        match self {
            ReminderDecision::Overdue { .. } => Some(Notice::overdue_reminder()),
            ReminderDecision::Upcoming { days_until } => Some(Notice::upcoming(*days_until)),
            ReminderDecision::Suppressed | ReminderDecision::NoReminder => None,
        }
    }
}

impl<'a> CycleEngine<'a> {
    /// Decides whether a reminder is due on `today`.
    ///
    /// The overdue and upcoming branches cover disjoint ranges of
    /// `days_until`, and both are gated by the in-period check.
    pub fn decide_reminder(&self, today: &CalendarDate) -> ReminderDecision {
        let Some(prediction) = self.next_period_prediction(today) else {
            return ReminderDecision::NoReminder;
        };

        if self.is_in_current_period(today) {
            return ReminderDecision::Suppressed;
        }

        let days_until = prediction.days_until;
        let settings = self.settings();

        if days_until <= 0 && days_until.unsigned_abs() <= settings.reminder_threshold as u64 {
            ReminderDecision::Overdue {
                days_overdue: days_until.unsigned_abs() as u32,
            }
        } else if days_until > 0 && days_until <= settings.upcoming_window as i64 {
            ReminderDecision::Upcoming {
                days_until: days_until as u32,
            }
        } else {
            ReminderDecision::NoReminder
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cycle::{CycleLog, CycleSettings, NoticeKind, PeriodInterval};

    fn date(s: &str) -> CalendarDate {
        CalendarDate::parse(s).unwrap()
    }

    fn january_log() -> CycleLog {
        CycleLog::from_intervals(vec![PeriodInterval::starting_on(date("2024-01-01"), 7)])
    }

    fn decide(log: &CycleLog, today: &str) -> ReminderDecision {
        let settings = CycleSettings::default();
        CycleEngine::new(log, &settings).decide_reminder(&date(today))
    }

    #[test]
    fn empty_log_never_reminds() {
        assert_eq!(
            decide(&CycleLog::new(), "2024-01-26"),
            ReminderDecision::NoReminder
        );
    }

    #[test]
    fn in_period_suppresses_reminder() {
        assert_eq!(
            decide(&january_log(), "2024-01-03"),
            ReminderDecision::Suppressed
        );
    }

    #[test]
    fn one_day_before_expected_start_is_upcoming() {
        // expected 2024-01-29
        let decision = decide(&january_log(), "2024-01-28");
        assert_eq!(decision, ReminderDecision::Upcoming { days_until: 1 });

        let notice = decision.notice().unwrap();
        assert_eq!(notice.kind, NoticeKind::Info);
        assert!(notice.message.contains("1 hari lagi"));
    }

    #[test]
    fn upcoming_window_is_three_days() {
        assert_eq!(
            decide(&january_log(), "2024-01-26"),
            ReminderDecision::Upcoming { days_until: 3 }
        );
        assert_eq!(
            decide(&january_log(), "2024-01-25"),
            ReminderDecision::NoReminder
        );
    }

    #[test]
    fn two_days_late_fires_overdue_reminder() {
        let decision = decide(&january_log(), "2024-01-31");
        assert_eq!(decision, ReminderDecision::Overdue { days_overdue: 2 });
        assert_eq!(decision.notice().unwrap().kind, NoticeKind::Reminder);
    }

    #[test]
    fn expected_day_itself_is_overdue() {
        assert_eq!(
            decide(&january_log(), "2024-01-29"),
            ReminderDecision::Overdue { days_overdue: 0 }
        );
    }

    #[test]
    fn overdue_window_ends_after_threshold() {
        assert_eq!(
            decide(&january_log(), "2024-02-03"),
            ReminderDecision::Overdue { days_overdue: 5 }
        );
        assert_eq!(
            decide(&january_log(), "2024-02-04"),
            ReminderDecision::NoReminder
        );
    }

    #[test]
    fn suppression_considers_any_interval() {
        // Today sits in the earlier interval while the latest one is far away
        let log = CycleLog::from_intervals(vec![
            PeriodInterval::starting_on(date("2024-01-01"), 7),
            PeriodInterval::starting_on(date("2023-12-10"), 7),
        ]);
        assert_eq!(
            decide(&log, "2023-12-12"),
            ReminderDecision::Suppressed
        );
    }

    #[test]
    fn decision_is_repeatable() {
        let log = january_log();
        assert_eq!(decide(&log, "2024-01-30"), decide(&log, "2024-01-30"));
    }
}
