//! # AGV Aggregation Engine
//!
//! 車隊指標彙總引擎：工時、能耗、AGV 參與次數由下而上逐層加總

pub mod aggregate;
pub mod calculator;
pub mod render;
pub mod report;

use rust_decimal::Decimal;
use serde::Serialize;

// Re-export 主要類型
pub use aggregate::Aggregate;
pub use calculator::FleetCalculator;
pub use render::{renderer_for, JsonRenderer, ReportRenderer, TextRenderer};
pub use report::{OperationReport, ProcessReport, WarehouseReport};

/// 彙總指標
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Totals {
    /// 總工時（分鐘）
    pub duration_minutes: u64,

    /// 總能耗（kWh）
    pub energy_kwh: Decimal,

    /// AGV 參與次數（不去重）
    pub vehicle_count: usize,
}

impl Totals {
    /// 全零的指標
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn new(duration_minutes: u64, energy_kwh: Decimal, vehicle_count: usize) -> Self {
        Self {
            duration_minutes,
            energy_kwh,
            vehicle_count,
        }
    }

    /// 累加另一組指標
    pub fn accumulate(&mut self, other: &Totals) {
        self.duration_minutes += other.duration_minutes;
        self.energy_kwh += other.energy_kwh;
        self.vehicle_count += other.vehicle_count;
    }
}
