//! AGV 車輛模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::fmt::format_real;
use crate::{require_identity, EntityKind, Position, Result, Time};

/// 速度設定（m/s）
///
/// 不檢查 `actual <= max`，超出範圍的數值照實回報。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeedProfile {
    /// 最高速度
    pub max: Decimal,
    /// 實際速度
    pub actual: Decimal,
}

impl SpeedProfile {
    pub fn new(max: Decimal, actual: Decimal) -> Self {
        Self { max, actual }
    }

    /// 檢查實際速度是否超過最高速度
    pub fn is_overspeed(&self) -> bool {
        self.actual > self.max
    }
}

/// AGV（自動導引車）靜態遙測資料
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    /// 車輛ID
    id: String,

    /// 電池電量（%）
    battery_load: Decimal,

    /// 能耗（kWh）
    consumption: Decimal,

    /// 充電時間
    charging_time: Time,

    /// 目前位置
    position: Position,

    /// 速度
    speed: SpeedProfile,
}

impl Vehicle {
    /// 創建新的車輛
    ///
    /// 只檢查識別碼；電量、能耗、速度不做範圍檢查。
    pub fn new(
        id: impl Into<String>,
        battery_load: Decimal,
        consumption: Decimal,
        charging_time: Time,
        position: Position,
        speed: SpeedProfile,
    ) -> Result<Self> {
        Ok(Self {
            id: require_identity(EntityKind::Vehicle, id.into())?,
            battery_load,
            consumption,
            charging_time,
            position,
            speed,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn battery_load(&self) -> Decimal {
        self.battery_load
    }

    /// 能耗（kWh），每次被作業引用都會計入一次
    pub fn consumption(&self) -> Decimal {
        self.consumption
    }

    pub fn charging_time(&self) -> Time {
        self.charging_time
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn speed(&self) -> SpeedProfile {
        self.speed
    }
}

/// 單行摘要：`AGV1 | Battery: 80.0% | Cons.: 5.5kWh | ...`
impl std::fmt::Display for Vehicle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} | Battery: {}% | Cons.: {}kWh | Charge Time: {} | Position: {} | Max Speed: {} m/s | Actual Speed: {} m/s",
            self.id,
            format_real(self.battery_load),
            format_real(self.consumption),
            self.charging_time,
            self.position,
            format_real(self.speed.max),
            format_real(self.speed.actual),
        )
    }
}
