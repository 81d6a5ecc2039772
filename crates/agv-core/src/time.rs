//! 時間模型（時 + 分）

use serde::{Deserialize, Serialize};

use crate::{FleetError, Result};

/// 時長：小時 + 分鐘
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Time {
    hours: u32,
    minutes: u32,
}

impl Time {
    /// 創建時長，分鐘必須在 0..60 之間
    pub fn new(hours: u32, minutes: u32) -> Result<Self> {
        if minutes >= 60 {
            return Err(FleetError::InvalidTime { hours, minutes });
        }
        Ok(Self { hours, minutes })
    }

    /// 從總分鐘數創建
    pub fn from_minutes(total: u32) -> Self {
        Self {
            hours: total / 60,
            minutes: total % 60,
        }
    }

    pub fn hours(&self) -> u32 {
        self.hours
    }

    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    /// 換算為分鐘
    pub fn to_minutes(&self) -> u64 {
        u64::from(self.hours) * 60 + u64::from(self.minutes)
    }
}

impl std::fmt::Display for Time {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}h {}min", self.hours, self.minutes)
    }
}
