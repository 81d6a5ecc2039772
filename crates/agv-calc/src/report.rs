//! 結構化報表
//!
//! 彙總結果以巢狀記錄表示，輸出格式交由 [`crate::render`] 處理。

use agv_core::{Time, Vehicle};
use serde::Serialize;

use crate::Totals;

/// 作業報表
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperationReport {
    pub id: String,
    pub description: String,
    pub nominal_time: Time,
    pub totals: Totals,

    /// 參與車輛快照（依清單順序，重複參照會重複出現）
    pub vehicles: Vec<Vehicle>,
}

/// 製程報表
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessReport {
    pub id: String,
    pub totals: Totals,

    /// 去重後實際使用的 AGV 數量
    pub distinct_vehicles: usize,

    pub operations: Vec<OperationReport>,
}

/// 倉庫報表
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WarehouseReport {
    pub id: String,
    pub processes: Vec<ProcessReport>,

    /// 由倉庫層彙總函式直接計算的總計
    pub totals: Totals,

    /// 走訪各製程報表時逐一累加的總計
    pub running_totals: Totals,

    /// 去重後實際使用的 AGV 數量
    pub distinct_vehicles: usize,
}

impl WarehouseReport {
    /// 兩條計算路徑的總計是否一致
    pub fn is_consistent(&self) -> bool {
        self.totals == self.running_totals
    }

    /// 報表中所有作業（依製程、作業順序）
    pub fn operations(&self) -> impl Iterator<Item = &OperationReport> {
        self.processes.iter().flat_map(|p| p.operations.iter())
    }

    /// 依識別碼取得製程報表
    pub fn process(&self, id: &str) -> Option<&ProcessReport> {
        self.processes.iter().find(|p| p.id == id)
    }
}

impl ProcessReport {
    /// 依識別碼取得作業報表
    pub fn operation(&self, id: &str) -> Option<&OperationReport> {
        self.operations.iter().find(|o| o.id == id)
    }
}
