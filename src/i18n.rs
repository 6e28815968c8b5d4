//! Localized strings for the metrics panel.
//!
//! The catalog is static: every user-visible string of the panel has one
//! entry per [`Locale`].

use std::fmt;
use std::str::FromStr;

use anyhow::bail;

/// Display language for the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    Zh,
}

/// Identifier of a catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageId {
    EvaluationsTitle,
    DropdownPlaceholder,
    VariationEvaluations,
    Total,
    MetricsError,
    NoDataText,
    LinkSdkText,
    NoDataTips,
    Loading,
    TimeAxis,
    CountAxis,
    WindowOneHour,
    WindowSixHours,
    WindowTwelveHours,
    WindowOneDay,
    WindowThreeDays,
    WindowSevenDays,
    WindowFourteenDays,
    WindowThirtyDays,
    LinkOpened,
    LinkOpenFailed,
    Refreshing,
    Exported,
    ExportFailed,
}

impl Locale {
    /// Look up a catalog entry.
    pub fn text(&self, id: MessageId) -> &'static str {
        use MessageId::*;
        match self {
            Locale::En => match id {
                EvaluationsTitle => "Evaluations",
                DropdownPlaceholder => "Select",
                VariationEvaluations => "Variations",
                Total => "Total",
                MetricsError => "Failed to load evaluation metrics",
                NoDataText => "No evaluation data yet",
                LinkSdkText => "Connect an SDK",
                NoDataTips => " to see how this toggle is evaluated",
                Loading => "Loading...",
                TimeAxis => "Time",
                CountAxis => "Evaluations",
                WindowOneHour => "Last 1 hour",
                WindowSixHours => "Last 6 hours",
                WindowTwelveHours => "Last 12 hours",
                WindowOneDay => "Last 24 hours",
                WindowThreeDays => "Last 3 days",
                WindowSevenDays => "Last 7 days",
                WindowFourteenDays => "Last 14 days",
                WindowThirtyDays => "Last 30 days",
                LinkOpened => "Opened",
                LinkOpenFailed => "Could not open",
                Refreshing => "Refreshing...",
                Exported => "Exported to",
                ExportFailed => "Export failed",
            },
            Locale::Zh => match id {
                EvaluationsTitle => "评估",
                DropdownPlaceholder => "请选择",
                VariationEvaluations => "分组",
                Total => "总计",
                MetricsError => "获取评估数据失败",
                NoDataText => "暂无评估数据",
                LinkSdkText => "接入SDK",
                NoDataTips => "后即可查看开关的评估情况",
                Loading => "加载中...",
                TimeAxis => "时间",
                CountAxis => "评估次数",
                WindowOneHour => "最近1小时",
                WindowSixHours => "最近6小时",
                WindowTwelveHours => "最近12小时",
                WindowOneDay => "最近24小时",
                WindowThreeDays => "最近3天",
                WindowSevenDays => "最近7天",
                WindowFourteenDays => "最近14天",
                WindowThirtyDays => "最近30天",
                LinkOpened => "已打开",
                LinkOpenFailed => "无法打开",
                Refreshing => "刷新中...",
                Exported => "已导出到",
                ExportFailed => "导出失败",
            },
        }
    }

    /// Short code used on the command line and in config files.
    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Zh => "zh",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = anyhow::Error;

    /// Accepts bare language codes and region-qualified tags (`zh-CN`, `en_US`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lang = s.trim().split(['-', '_']).next().unwrap_or_default().to_lowercase();
        match lang.as_str() {
            "en" => Ok(Locale::En),
            "zh" => Ok(Locale::Zh),
            _ => bail!("Unsupported locale '{}' (expected en or zh)", s),
        }
    }
}
