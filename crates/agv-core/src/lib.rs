//! # AGV Core
//!
//! 核心資料模型與類型定義

pub mod config;
pub mod fmt;
pub mod operation;
pub mod position;
pub mod process;
pub mod registry;
pub mod time;
pub mod vehicle;
pub mod warehouse;

use serde::{Deserialize, Serialize};

// Re-export 主要類型
pub use config::{ReportConfig, ReportFormat};
pub use operation::Operation;
pub use position::Position;
pub use process::Process;
pub use registry::{FleetRegistry, OperationId, ProcessId, VehicleId};
pub use time::Time;
pub use vehicle::{SpeedProfile, Vehicle};
pub use warehouse::Warehouse;

/// 實體種類（用於錯誤訊息）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Vehicle,
    Operation,
    Process,
    Warehouse,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            EntityKind::Vehicle => "AGV",
            EntityKind::Operation => "Operation",
            EntityKind::Process => "Process",
            EntityKind::Warehouse => "Warehouse",
        };
        f.write_str(name)
    }
}

/// 車隊模型錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum FleetError {
    #[error("{0} 缺少識別碼")]
    MissingIdentity(EntityKind),

    #[error("無效的時間: {hours}h {minutes}min（分鐘必須小於 60）")]
    InvalidTime { hours: u32, minutes: u32 },

    #[error("重複的{kind}識別碼: {id}")]
    DuplicateIdentity { kind: EntityKind, id: String },

    #[error("無效的{kind}參照: #{index}")]
    DanglingReference { kind: EntityKind, index: usize },

    #[error("找不到{kind}: {id}")]
    UnknownIdentity { kind: EntityKind, id: String },

    #[error("報表輸出錯誤: {0}")]
    Render(String),
}

pub type Result<T> = std::result::Result<T, FleetError>;

/// 檢查識別碼是否非空，回傳修剪前的原始值
pub(crate) fn require_identity(kind: EntityKind, id: String) -> Result<String> {
    if id.trim().is_empty() {
        return Err(FleetError::MissingIdentity(kind));
    }
    Ok(id)
}
