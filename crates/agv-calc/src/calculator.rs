//! 車隊報表計算器

use agv_core::{FleetRegistry, OperationId, ProcessId, ReportConfig, Result, Warehouse};
use rayon::prelude::*;

use crate::{Aggregate, OperationReport, ProcessReport, Totals, WarehouseReport};

/// 車隊報表計算器
pub struct FleetCalculator<'a> {
    /// 車隊登錄表
    registry: &'a FleetRegistry,

    /// 報表配置
    config: ReportConfig,
}

impl<'a> FleetCalculator<'a> {
    /// 創建新的計算器
    pub fn new(registry: &'a FleetRegistry, config: ReportConfig) -> Self {
        Self { registry, config }
    }

    /// 主報表計算入口
    ///
    /// 依序走訪各製程建立報表並累加執行中總計，
    /// 再以倉庫層彙總函式另行計算總計，兩者應一致。
    pub fn build_report(&self, warehouse: &Warehouse) -> Result<WarehouseReport> {
        tracing::info!(
            "開始彙總倉庫 {}：製程 {} 個，作業 {} 個，AGV {} 台",
            warehouse.id(),
            warehouse.processes().len(),
            self.registry.operation_count(),
            self.registry.vehicle_count()
        );

        let start_time = std::time::Instant::now();

        // Step 1: 建立各製程報表
        let processes: Vec<ProcessReport> = if self.config.parallel {
            tracing::debug!("Step 1: 平行建立製程報表");
            warehouse
                .processes()
                .par_iter()
                .map(|&id| self.process_report(id))
                .collect::<Result<Vec<_>>>()?
        } else {
            tracing::debug!("Step 1: 循序建立製程報表");
            warehouse
                .processes()
                .iter()
                .map(|&id| self.process_report(id))
                .collect::<Result<Vec<_>>>()?
        };

        // Step 2: 依製程順序累加執行中總計
        let mut running_totals = Totals::zero();
        for process in &processes {
            running_totals.accumulate(&process.totals);
        }

        // Step 3: 倉庫層總計
        let totals = warehouse.totals(self.registry)?;
        let distinct_vehicles = warehouse.distinct_vehicle_count(self.registry)?;

        if totals != running_totals {
            tracing::warn!(
                "倉庫 {} 總計不一致：彙總 {:?}，累加 {:?}",
                warehouse.id(),
                totals,
                running_totals
            );
        }

        tracing::info!(
            "倉庫 {} 彙總完成，耗時 {:?}：{} 分鐘，{} kWh，AGV 參與 {} 次（實際 {} 台）",
            warehouse.id(),
            start_time.elapsed(),
            totals.duration_minutes,
            totals.energy_kwh,
            totals.vehicle_count,
            distinct_vehicles
        );

        Ok(WarehouseReport {
            id: warehouse.id().to_string(),
            processes,
            totals,
            running_totals,
            distinct_vehicles,
        })
    }

    /// 單一製程報表
    pub fn process_report(&self, id: ProcessId) -> Result<ProcessReport> {
        let process = self.registry.process(id)?;
        tracing::debug!(
            "彙總製程 {}：作業 {} 個",
            process.id(),
            process.operation_count()
        );

        let operations = process
            .operations()
            .iter()
            .map(|&op| self.operation_report(op))
            .collect::<Result<Vec<_>>>()?;

        Ok(ProcessReport {
            id: process.id().to_string(),
            totals: process.totals(self.registry)?,
            distinct_vehicles: process.distinct_vehicle_count(self.registry)?,
            operations,
        })
    }

    /// 單一作業報表
    pub fn operation_report(&self, id: OperationId) -> Result<OperationReport> {
        let operation = self.registry.operation(id)?;
        if operation.is_unstaffed() {
            tracing::warn!("作業 {} 沒有任何 AGV", operation.id());
        }

        let vehicles = operation
            .vehicles()
            .iter()
            .map(|&v| self.registry.vehicle(v).cloned())
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(
            "作業 {}：{} 分鐘，AGV {} 台",
            operation.id(),
            operation.duration(),
            vehicles.len()
        );

        Ok(OperationReport {
            id: operation.id().to_string(),
            description: operation.description().to_string(),
            nominal_time: operation.nominal_time(),
            totals: operation.totals(self.registry)?,
            vehicles,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agv_core::{Operation, Position, Process, SpeedProfile, Time, Vehicle, VehicleId};
    use rust_decimal::Decimal;

    /// 兩台 AGV、兩個作業共用其中一台、兩個製程共用其中一個作業
    fn small_fleet() -> (FleetRegistry, Warehouse) {
        let mut registry = FleetRegistry::new();
        let mut vehicle = |id: &str, consumption: Decimal| -> VehicleId {
            registry
                .register_vehicle(
                    Vehicle::new(
                        id,
                        Decimal::from(75),
                        consumption,
                        Time::new(0, 45).unwrap(),
                        Position::origin(),
                        SpeedProfile::new(Decimal::from(2), Decimal::ONE),
                    )
                    .unwrap(),
                )
                .unwrap()
        };
        let a = vehicle("A", Decimal::new(15, 1));
        let b = vehicle("B", Decimal::new(25, 1));

        let op1 = registry
            .register_operation(
                Operation::new("OP1", "Pick", Time::new(1, 0).unwrap(), vec![a, b]).unwrap(),
            )
            .unwrap();
        let op2 = registry
            .register_operation(
                Operation::new("OP2", "Drop", Time::new(0, 30).unwrap(), vec![b]).unwrap(),
            )
            .unwrap();

        let p1 = registry
            .register_process(Process::new("P1", vec![op1, op2]).unwrap())
            .unwrap();
        let p2 = registry
            .register_process(Process::new("P2", vec![op2]).unwrap())
            .unwrap();

        let warehouse = Warehouse::assemble("W", vec![p1, p2], &registry).unwrap();
        (registry, warehouse)
    }

    #[test]
    fn test_build_report() {
        let (registry, warehouse) = small_fleet();
        let calculator = FleetCalculator::new(&registry, ReportConfig::default());

        let report = calculator.build_report(&warehouse).unwrap();

        assert_eq!(report.id, "W");
        assert_eq!(report.processes.len(), 2);

        let p1 = report.process("P1").unwrap();
        assert_eq!(p1.totals, Totals::new(90, Decimal::new(65, 1), 3));
        assert_eq!(p1.distinct_vehicles, 2);

        let p2 = report.process("P2").unwrap();
        assert_eq!(p2.totals, Totals::new(30, Decimal::new(25, 1), 1));

        assert_eq!(report.totals, Totals::new(120, Decimal::from(9), 4));
        assert_eq!(report.distinct_vehicles, 2);
        assert!(report.is_consistent());
    }

    #[test]
    fn test_operation_report_keeps_vehicle_order() {
        let (registry, _) = small_fleet();
        let calculator = FleetCalculator::new(&registry, ReportConfig::default());

        let report = calculator
            .operation_report(registry.operation_id("OP1").unwrap())
            .unwrap();

        let ids: Vec<_> = report.vehicles.iter().map(|v| v.id()).collect();
        assert_eq!(ids, vec!["A", "B"]);
        assert_eq!(report.nominal_time.to_string(), "1h 0min");
        assert_eq!(report.totals.energy_kwh, Decimal::from(4));
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let (registry, warehouse) = small_fleet();

        let sequential = FleetCalculator::new(&registry, ReportConfig::default())
            .build_report(&warehouse)
            .unwrap();
        let parallel = FleetCalculator::new(&registry, ReportConfig::new().with_parallel(true))
            .build_report(&warehouse)
            .unwrap();

        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_empty_warehouse() {
        let registry = FleetRegistry::new();
        let warehouse = Warehouse::assemble("EMPTY", Vec::new(), &registry).unwrap();

        let report = FleetCalculator::new(&registry, ReportConfig::default())
            .build_report(&warehouse)
            .unwrap();

        assert!(report.processes.is_empty());
        assert_eq!(report.totals, Totals::zero());
        assert_eq!(report.distinct_vehicles, 0);
        assert!(report.is_consistent());
    }
}
