//! 作業模型

use serde::{Deserialize, Serialize};

use crate::{require_identity, EntityKind, Result, Time, VehicleId};

/// 作業：一段標準工時 + 參與的 AGV
///
/// 車輛以 [`VehicleId`] 參照，同一台 AGV 可被多個作業共用。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operation {
    /// 作業ID
    id: String,

    /// 作業說明
    description: String,

    /// 標準工時
    nominal_time: Time,

    /// 參與車輛（依序，不去重）
    vehicles: Vec<VehicleId>,
}

impl Operation {
    /// 創建新的作業
    pub fn new(
        id: impl Into<String>,
        description: impl Into<String>,
        nominal_time: Time,
        vehicles: Vec<VehicleId>,
    ) -> Result<Self> {
        Ok(Self {
            id: require_identity(EntityKind::Operation, id.into())?,
            description: description.into(),
            nominal_time,
            vehicles,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn nominal_time(&self) -> Time {
        self.nominal_time
    }

    pub fn vehicles(&self) -> &[VehicleId] {
        &self.vehicles
    }

    /// 作業時長（分鐘）
    pub fn duration(&self) -> u64 {
        self.nominal_time.to_minutes()
    }

    /// 參與車輛數（不去重）
    pub fn vehicle_count(&self) -> usize {
        self.vehicles.len()
    }

    /// 空車輛清單代表設定不完整，但仍是合法狀態
    pub fn is_unstaffed(&self) -> bool {
        self.vehicles.is_empty()
    }
}
