//! Status summary shown at the top of both shells.

use serde::{Deserialize, Serialize};

use super::engine::CycleEngine;
use crate::domain::foundation::CalendarDate;

/// Where the user stands in their cycle today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CycleStatus {
    /// Inside the latest logged period.
    InPeriod { day: u32, period_duration: u32 },
    /// Next period expected in `days_until` days.
    Upcoming {
        days_until: u32,
        expected_date: CalendarDate,
    },
    /// Expected start has passed (or is today) without a new log.
    Late {
        days_late: u32,
        expected_date: CalendarDate,
    },
    /// Nothing logged yet.
    Welcome,
}

impl CycleStatus {
    /// Small caption above the headline.
    pub fn label(&self) -> &'static str {
        match self {
            CycleStatus::InPeriod { .. } => "Sedang Menstruasi",
            CycleStatus::Upcoming { .. } => "Perkiraan Siklus Berikutnya",
            CycleStatus::Late { .. } => "Siklus Mungkin Sudah Dimulai",
            CycleStatus::Welcome => "Selamat Datang",
        }
    }

    /// Main line of the status card.
    pub fn headline(&self) -> String {
        match self {
            CycleStatus::InPeriod { day, .. } => format!("Hari ke-{}", day),
            CycleStatus::Upcoming { days_until, .. } => format!("{} hari lagi", days_until),
            CycleStatus::Late { days_late, .. } => format!("{} hari terlambat", days_late),
            CycleStatus::Welcome => "Mulai Catat Siklus".to_string(),
        }
    }

    /// Secondary line under the headline.
    pub fn detail(&self) -> String {
        match self {
            CycleStatus::InPeriod {
                period_duration, ..
            } => format!("dari {} hari periode", period_duration),
            CycleStatus::Upcoming { expected_date, .. }
            | CycleStatus::Late { expected_date, .. } => expected_date.long_label(),
            CycleStatus::Welcome => "Tekan tombol di bawah untuk mulai".to_string(),
        }
    }
}

impl<'a> CycleEngine<'a> {
    /// Summarizes the cycle on `today`.
    ///
    /// The in-period card needs both an interval containing today and a
    /// day count from the latest interval; otherwise the prediction is shown.
    pub fn status(&self, today: &CalendarDate) -> CycleStatus {
        if self.is_in_current_period(today) {
            if let Some(day) = self.current_cycle_day(today) {
                return CycleStatus::InPeriod {
                    day,
                    period_duration: self.settings().period_duration,
                };
            }
        }

        match self.next_period_prediction(today) {
            Some(prediction) if prediction.days_until > 0 => CycleStatus::Upcoming {
                days_until: prediction.days_until as u32,
                expected_date: prediction.expected_date,
            },
            Some(prediction) => CycleStatus::Late {
                days_late: prediction.days_until.unsigned_abs() as u32,
                expected_date: prediction.expected_date,
            },
            None => CycleStatus::Welcome,
        }
    }
}
