//! 逐層彙總
//!
//! 每一層都呼叫下一層的彙總函式，不做快取：每次查詢都重新走訪整個子樹。
//! 共用的 AGV 或作業每被參照一次就計入一次。

use std::collections::HashSet;

use agv_core::{FleetRegistry, Operation, Process, Result, Vehicle, VehicleId, Warehouse};
use rust_decimal::Decimal;

use crate::Totals;

/// 可彙總的層級（作業、製程、倉庫）
pub trait Aggregate {
    /// 總工時（分鐘）
    fn total_duration(&self, fleet: &FleetRegistry) -> Result<u64>;

    /// 總能耗（kWh），依清單順序加總
    fn total_energy(&self, fleet: &FleetRegistry) -> Result<Decimal>;

    /// AGV 參與次數（不去重）
    fn total_vehicle_count(&self, fleet: &FleetRegistry) -> Result<usize>;

    /// 子樹中所有（作業, AGV）參與記錄，依走訪順序
    fn participations(&self, fleet: &FleetRegistry) -> Result<Vec<VehicleId>>;

    /// 去重後實際使用的 AGV 數量
    fn distinct_vehicle_count(&self, fleet: &FleetRegistry) -> Result<usize> {
        let distinct: HashSet<VehicleId> = self.participations(fleet)?.into_iter().collect();
        Ok(distinct.len())
    }

    /// 三項指標一次取得
    fn totals(&self, fleet: &FleetRegistry) -> Result<Totals> {
        Ok(Totals::new(
            self.total_duration(fleet)?,
            self.total_energy(fleet)?,
            self.total_vehicle_count(fleet)?,
        ))
    }
}

impl Aggregate for Operation {
    fn total_duration(&self, _fleet: &FleetRegistry) -> Result<u64> {
        Ok(self.duration())
    }

    fn total_energy(&self, fleet: &FleetRegistry) -> Result<Decimal> {
        self.vehicles()
            .iter()
            .map(|&id| fleet.vehicle(id).map(Vehicle::consumption))
            .sum()
    }

    fn total_vehicle_count(&self, _fleet: &FleetRegistry) -> Result<usize> {
        Ok(self.vehicle_count())
    }

    fn participations(&self, fleet: &FleetRegistry) -> Result<Vec<VehicleId>> {
        self.vehicles()
            .iter()
            .map(|&id| fleet.vehicle(id).map(|_| id))
            .collect()
    }
}

impl Aggregate for Process {
    fn total_duration(&self, fleet: &FleetRegistry) -> Result<u64> {
        self.operations()
            .iter()
            .map(|&id| fleet.operation(id)?.total_duration(fleet))
            .sum()
    }

    fn total_energy(&self, fleet: &FleetRegistry) -> Result<Decimal> {
        self.operations()
            .iter()
            .map(|&id| fleet.operation(id)?.total_energy(fleet))
            .sum()
    }

    fn total_vehicle_count(&self, fleet: &FleetRegistry) -> Result<usize> {
        self.operations()
            .iter()
            .map(|&id| fleet.operation(id)?.total_vehicle_count(fleet))
            .sum()
    }

    fn participations(&self, fleet: &FleetRegistry) -> Result<Vec<VehicleId>> {
        let mut all = Vec::new();
        for &id in self.operations() {
            all.extend(fleet.operation(id)?.participations(fleet)?);
        }
        Ok(all)
    }
}

impl Aggregate for Warehouse {
    fn total_duration(&self, fleet: &FleetRegistry) -> Result<u64> {
        self.processes()
            .iter()
            .map(|&id| fleet.process(id)?.total_duration(fleet))
            .sum()
    }

    fn total_energy(&self, fleet: &FleetRegistry) -> Result<Decimal> {
        self.processes()
            .iter()
            .map(|&id| fleet.process(id)?.total_energy(fleet))
            .sum()
    }

    fn total_vehicle_count(&self, fleet: &FleetRegistry) -> Result<usize> {
        self.processes()
            .iter()
            .map(|&id| fleet.process(id)?.total_vehicle_count(fleet))
            .sum()
    }

    fn participations(&self, fleet: &FleetRegistry) -> Result<Vec<VehicleId>> {
        let mut all = Vec::new();
        for &id in self.processes() {
            all.extend(fleet.process(id)?.participations(fleet)?);
        }
        Ok(all)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agv_core::{FleetError, OperationId, Position, SpeedProfile, Time};
    use rstest::rstest;

    fn register_vehicle(registry: &mut FleetRegistry, id: &str, consumption: Decimal) -> VehicleId {
        registry
            .register_vehicle(
                Vehicle::new(
                    id,
                    Decimal::from(90),
                    consumption,
                    Time::new(1, 0).unwrap(),
                    Position::origin(),
                    SpeedProfile::new(Decimal::from(2), Decimal::ONE),
                )
                .unwrap(),
            )
            .unwrap()
    }

    fn register_operation(
        registry: &mut FleetRegistry,
        id: &str,
        minutes: u32,
        vehicles: Vec<VehicleId>,
    ) -> OperationId {
        registry
            .register_operation(
                Operation::new(id, "test", Time::from_minutes(minutes), vehicles).unwrap(),
            )
            .unwrap()
    }

    /// 車輛 A = 5.5 kWh, B = 6.0 kWh, C = 5.0 kWh；以索引挑選參與車輛
    #[rstest]
    #[case::two_vehicles(120, vec![0, 1], Decimal::new(115, 1), 2)]
    #[case::other_pair(90, vec![1, 2], Decimal::new(110, 1), 2)]
    #[case::same_vehicle_twice(30, vec![2, 2], Decimal::from(10), 2)]
    #[case::no_vehicles(45, vec![], Decimal::ZERO, 0)]
    fn test_operation_totals(
        #[case] minutes: u32,
        #[case] members: Vec<usize>,
        #[case] energy: Decimal,
        #[case] count: usize,
    ) {
        let mut registry = FleetRegistry::new();
        let vehicles = [
            register_vehicle(&mut registry, "A", Decimal::new(55, 1)),
            register_vehicle(&mut registry, "B", Decimal::new(60, 1)),
            register_vehicle(&mut registry, "C", Decimal::new(50, 1)),
        ];
        let refs = members.iter().map(|&m| vehicles[m]).collect();
        let op = register_operation(&mut registry, "OP", minutes, refs);

        let operation = registry.operation(op).unwrap();
        assert_eq!(
            operation.totals(&registry).unwrap(),
            Totals::new(u64::from(minutes), energy, count)
        );
    }

    #[test]
    fn test_empty_operation_aggregates_to_zero() {
        let mut registry = FleetRegistry::new();
        let op = register_operation(&mut registry, "OP", 45, Vec::new());

        let totals = registry.operation(op).unwrap().totals(&registry).unwrap();
        // 工時不受影響，能耗與車數為零
        assert_eq!(totals, Totals::new(45, Decimal::ZERO, 0));
    }

    #[test]
    fn test_empty_process_aggregates_to_zero() {
        let mut registry = FleetRegistry::new();
        let process = registry
            .register_process(Process::new("P", Vec::new()).unwrap())
            .unwrap();

        let process = registry.process(process).unwrap();
        assert_eq!(process.totals(&registry).unwrap(), Totals::zero());
        assert_eq!(process.distinct_vehicle_count(&registry).unwrap(), 0);
    }

    #[test]
    fn test_shared_vehicle_counted_per_operation() {
        let mut registry = FleetRegistry::new();
        let shared = register_vehicle(&mut registry, "SHARED", Decimal::from(4));
        let op1 = register_operation(&mut registry, "OP1", 10, vec![shared]);
        let op2 = register_operation(&mut registry, "OP2", 20, vec![shared]);
        let process = registry
            .register_process(Process::new("P", vec![op1, op2]).unwrap())
            .unwrap();

        let process = registry.process(process).unwrap();
        assert_eq!(process.total_energy(&registry).unwrap(), Decimal::from(8));
        assert_eq!(process.total_vehicle_count(&registry).unwrap(), 2);
        assert_eq!(process.distinct_vehicle_count(&registry).unwrap(), 1);
    }

    #[test]
    fn test_shared_operation_counted_per_process() {
        let mut registry = FleetRegistry::new();
        let agv = register_vehicle(&mut registry, "AGV", Decimal::new(25, 1));
        let op = register_operation(&mut registry, "OP", 30, vec![agv]);
        let p1 = registry
            .register_process(Process::new("P1", vec![op]).unwrap())
            .unwrap();
        let p2 = registry
            .register_process(Process::new("P2", vec![op]).unwrap())
            .unwrap();
        let warehouse = Warehouse::assemble("W", vec![p1, p2], &registry).unwrap();

        assert_eq!(
            warehouse.totals(&registry).unwrap(),
            Totals::new(60, Decimal::from(5), 2)
        );
        assert_eq!(warehouse.participations(&registry).unwrap(), vec![agv, agv]);
        assert_eq!(warehouse.distinct_vehicle_count(&registry).unwrap(), 1);
    }

    #[test]
    fn test_foreign_reference_reported() {
        // 來自另一個登錄表的作業，其車輛索引在此登錄表中不存在
        let mut other = FleetRegistry::new();
        let a = register_vehicle(&mut other, "A", Decimal::ONE);
        let b = register_vehicle(&mut other, "B", Decimal::ONE);
        let operation = Operation::new("OP", "", Time::new(0, 5).unwrap(), vec![a, b]).unwrap();

        let mut registry = FleetRegistry::new();
        register_vehicle(&mut registry, "ONLY", Decimal::ONE);

        assert!(matches!(
            operation.total_energy(&registry),
            Err(FleetError::DanglingReference { index: 1, .. })
        ));
    }
}
