use serde::{Deserialize, Serialize};

/// Sentinel label that disables a filter dimension
pub const ALL_LABEL: &str = "すべて";

/// Date range buckets offered by the filter panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DateRangeBucket {
    All,
    /// Monday 00:00 through Sunday 23:59:59 of the current week
    ThisWeek,
    ThisMonth,
    NextMonth,
    /// Before today and not yet in a terminal status
    Overdue,
}

impl DateRangeBucket {
    /// Get display label for UI
    pub fn label(&self) -> &'static str {
        match self {
            DateRangeBucket::All => ALL_LABEL,
            DateRangeBucket::ThisWeek => "今週",
            DateRangeBucket::ThisMonth => "今月",
            DateRangeBucket::NextMonth => "来月",
            DateRangeBucket::Overdue => "期限超過",
        }
    }

    /// Parse a label coming from the filter panel
    pub fn from_label(label: &str) -> Option<Self> {
        Self::all().iter().copied().find(|b| b.label() == label)
    }

    /// Get all buckets in panel order
    pub fn all() -> &'static [DateRangeBucket] {
        &[
            DateRangeBucket::All,
            DateRangeBucket::ThisWeek,
            DateRangeBucket::ThisMonth,
            DateRangeBucket::NextMonth,
            DateRangeBucket::Overdue,
        ]
    }
}

/// Amount buckets, disjoint half-open ranges in yen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AmountRangeBucket {
    All,
    /// [0, 1,000,000)
    Under1M,
    /// [1,000,000, 5,000,000)
    Under5M,
    /// [5,000,000, 10,000,000)
    Under10M,
    /// [10,000,000, ∞)
    Over10M,
}

impl AmountRangeBucket {
    pub fn label(&self) -> &'static str {
        match self {
            AmountRangeBucket::All => ALL_LABEL,
            AmountRangeBucket::Under1M => "～100万円",
            AmountRangeBucket::Under5M => "～500万円",
            AmountRangeBucket::Under10M => "～1000万円",
            AmountRangeBucket::Over10M => "1000万円～",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::all().iter().copied().find(|b| b.label() == label)
    }

    pub fn all() -> &'static [AmountRangeBucket] {
        &[
            AmountRangeBucket::All,
            AmountRangeBucket::Under1M,
            AmountRangeBucket::Under5M,
            AmountRangeBucket::Under10M,
            AmountRangeBucket::Over10M,
        ]
    }

    /// Lower (inclusive) and upper (exclusive) bounds of the bucket
    pub fn bounds(&self) -> (Option<i64>, Option<i64>) {
        match self {
            AmountRangeBucket::All => (None, None),
            AmountRangeBucket::Under1M => (None, Some(1_000_000)),
            AmountRangeBucket::Under5M => (Some(1_000_000), Some(5_000_000)),
            AmountRangeBucket::Under10M => (Some(5_000_000), Some(10_000_000)),
            AmountRangeBucket::Over10M => (Some(10_000_000), None),
        }
    }

    /// Check whether an amount falls into this bucket
    pub fn contains(&self, amount: i64) -> bool {
        let (from, to) = self.bounds();
        from.map_or(true, |f| amount >= f) && to.map_or(true, |t| amount < t)
    }
}

/// Progress buckets in percent, both ends inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProgressRangeBucket {
    All,
    Zero,
    /// 1..=50
    Low,
    /// 51..=99
    High,
    Done,
}

impl ProgressRangeBucket {
    pub fn label(&self) -> &'static str {
        match self {
            ProgressRangeBucket::All => ALL_LABEL,
            ProgressRangeBucket::Zero => "0%",
            ProgressRangeBucket::Low => "1-50%",
            ProgressRangeBucket::High => "51-99%",
            ProgressRangeBucket::Done => "100%",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::all().iter().copied().find(|b| b.label() == label)
    }

    pub fn all() -> &'static [ProgressRangeBucket] {
        &[
            ProgressRangeBucket::All,
            ProgressRangeBucket::Zero,
            ProgressRangeBucket::Low,
            ProgressRangeBucket::High,
            ProgressRangeBucket::Done,
        ]
    }

    pub fn contains(&self, progress: i64) -> bool {
        match self {
            ProgressRangeBucket::All => true,
            ProgressRangeBucket::Zero => progress == 0,
            ProgressRangeBucket::Low => (1..=50).contains(&progress),
            ProgressRangeBucket::High => (51..=99).contains(&progress),
            ProgressRangeBucket::Done => progress == 100,
        }
    }
}
