//! Evaluation window options for the time window dropdown.

use std::fmt;
use std::str::FromStr;

use anyhow::bail;

use crate::i18n::{Locale, MessageId};

/// Lookback duration over which evaluations are aggregated.
///
/// The wire value is the number of hours as a string (`lastHours=24`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TimeWindow {
    OneHour,
    SixHours,
    TwelveHours,
    #[default]
    OneDay,
    ThreeDays,
    SevenDays,
    FourteenDays,
    ThirtyDays,
}

impl TimeWindow {
    /// Every option in dropdown order.
    pub const ALL: [TimeWindow; 8] = [
        TimeWindow::OneHour,
        TimeWindow::SixHours,
        TimeWindow::TwelveHours,
        TimeWindow::OneDay,
        TimeWindow::ThreeDays,
        TimeWindow::SevenDays,
        TimeWindow::FourteenDays,
        TimeWindow::ThirtyDays,
    ];

    /// The value sent to the server as `lastHours`.
    pub fn value(&self) -> &'static str {
        match self {
            TimeWindow::OneHour => "1",
            TimeWindow::SixHours => "6",
            TimeWindow::TwelveHours => "12",
            TimeWindow::OneDay => "24",
            TimeWindow::ThreeDays => "72",
            TimeWindow::SevenDays => "168",
            TimeWindow::FourteenDays => "336",
            TimeWindow::ThirtyDays => "720",
        }
    }

    /// Localized dropdown label.
    pub fn label(&self, locale: Locale) -> &'static str {
        let id = match self {
            TimeWindow::OneHour => MessageId::WindowOneHour,
            TimeWindow::SixHours => MessageId::WindowSixHours,
            TimeWindow::TwelveHours => MessageId::WindowTwelveHours,
            TimeWindow::OneDay => MessageId::WindowOneDay,
            TimeWindow::ThreeDays => MessageId::WindowThreeDays,
            TimeWindow::SevenDays => MessageId::WindowSevenDays,
            TimeWindow::FourteenDays => MessageId::WindowFourteenDays,
            TimeWindow::ThirtyDays => MessageId::WindowThirtyDays,
        };
        locale.text(id)
    }

    /// Position of this option in [`TimeWindow::ALL`].
    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|w| w == self).unwrap_or_default()
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

impl FromStr for TimeWindow {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match Self::ALL.iter().find(|w| w.value() == s) {
            Some(window) => Ok(*window),
            None => {
                let allowed: Vec<&str> = Self::ALL.iter().map(|w| w.value()).collect();
                bail!("Unknown time window '{}' (expected one of: {})", s, allowed.join(", "))
            }
        }
    }
}
