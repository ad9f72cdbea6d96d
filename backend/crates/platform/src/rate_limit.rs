//! Rate Limiting Infrastructure
//!
//! Quota types shared by anything that caps actions per policy window.
//! The window here is a UTC calendar day; the count itself is maintained
//! transactionally by the storage layer, these types only describe and
//! evaluate it.

/// A per-day action quota
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyQuota {
    /// Maximum actions allowed per UTC calendar day
    pub cap: u32,
}

impl DailyQuota {
    pub const fn new(cap: u32) -> Self {
        Self { cap }
    }

    /// Evaluate a used-count against this quota
    pub fn status(&self, used: u32) -> QuotaStatus {
        QuotaStatus { used, cap: self.cap }
    }
}

impl Default for DailyQuota {
    fn default() -> Self {
        Self { cap: 50 }
    }
}

/// Snapshot of quota consumption inside the current window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuotaStatus {
    pub used: u32,
    pub cap: u32,
}

impl QuotaStatus {
    /// Actions left in the window
    pub fn remaining(&self) -> u32 {
        self.cap.saturating_sub(self.used)
    }

    /// True once the window's cap is reached
    pub fn exhausted(&self) -> bool {
        self.used >= self.cap
    }

    /// True when one more action would be permitted
    pub fn allows_one_more(&self) -> bool {
        self.used < self.cap
    }
}
