//! User-facing notices and their fixed message templates.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::CalendarDate;

/// Visual class of a notice; presenters pick colours from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Reminder,
    Success,
    Info,
}

/// A transient message for the notification presenter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn new(kind: NoticeKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// The period may have started and is not logged yet.
    pub fn overdue_reminder() -> Self {
        Self::new(
            NoticeKind::Reminder,
            "🌸 Hei! Siklus menstruasimu mungkin sudah dimulai. Jangan lupa catat hari ini!",
        )
    }

    /// The next period is expected in `days_until` days.
    pub fn upcoming(days_until: u32) -> Self {
        Self::new(
            NoticeKind::Info,
            format!(
                "🌷 Siklus menstruasimu diperkirakan {} hari lagi. Bersiap ya!",
                days_until
            ),
        )
    }

    /// Today's period was logged.
    pub fn logged_today() -> Self {
        Self::new(
            NoticeKind::Success,
            "🌸 Berhasil dicatat! Semangat ya, jaga kesehatan selalu 💕",
        )
    }

    /// A period starting on another date was logged.
    pub fn logged_on(date: &CalendarDate) -> Self {
        Self::new(
            NoticeKind::Success,
            format!(
                "🌸 Menstruasi tanggal {} berhasil dicatat!",
                date.day_month_label()
            ),
        )
    }

    /// A logged period was retracted.
    pub fn removed() -> Self {
        Self::new(NoticeKind::Info, "🗑️ Catatan menstruasi dihapus.")
    }

    /// Sign-in refused because today is already inside a logged period.
    pub fn already_logged_today() -> Self {
        Self::new(
            NoticeKind::Info,
            "✅ Kamu sudah mencatat menstruasi hari ini!",
        )
    }

    /// A new period would run into the one starting on `conflict_start`.
    pub fn overlaps_existing(conflict_start: &CalendarDate) -> Self {
        Self::new(
            NoticeKind::Info,
            format!(
                "⚠️ Tanggal ini terlalu dekat dengan catatan tanggal {}.",
                conflict_start.day_month_label()
            ),
        )
    }
}
