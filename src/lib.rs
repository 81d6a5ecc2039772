//! # AGV Fleet
//!
//! 倉庫 AGV 車隊指標報表：命令列、日誌與範例資料

pub mod cli;
pub mod logging;
pub mod sample;

pub use agv_calc::{FleetCalculator, WarehouseReport};
pub use agv_core::{FleetRegistry, ReportConfig, Warehouse};

/// 產生報表文字（建立結構化報表後依配置輸出）
pub fn generate_report(
    registry: &FleetRegistry,
    warehouse: &Warehouse,
    config: &ReportConfig,
) -> agv_core::Result<String> {
    let report = FleetCalculator::new(registry, config.clone()).build_report(warehouse)?;
    agv_calc::renderer_for(config).render(&report)
}
