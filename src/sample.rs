//! 範例車隊資料
//!
//! 三台 AGV、三個作業（各用兩台，互相重疊）、兩個製程（各含兩個作業，互相重疊）、一座倉庫。

use agv_core::{
    FleetRegistry, Operation, Position, Process, Result, SpeedProfile, Time, Vehicle, Warehouse,
};
use rust_decimal::Decimal;

pub const WAREHOUSE_ID: &str = "Main Warehouse of Group14";

/// 建立範例車隊
pub fn sample_fleet() -> Result<(FleetRegistry, Warehouse)> {
    let mut registry = FleetRegistry::new();

    // AGV
    let agv1 = registry.register_vehicle(Vehicle::new(
        "AGV1",
        Decimal::from(80),
        Decimal::new(55, 1),
        Time::new(1, 30)?,
        Position::new(Decimal::ZERO, Decimal::ZERO),
        SpeedProfile::new(Decimal::new(20, 1), Decimal::new(15, 1)),
    )?)?;
    let agv2 = registry.register_vehicle(Vehicle::new(
        "AGV2",
        Decimal::from(90),
        Decimal::new(60, 1),
        Time::new(1, 0)?,
        Position::new(Decimal::ONE, Decimal::TWO),
        SpeedProfile::new(Decimal::new(25, 1), Decimal::new(20, 1)),
    )?)?;
    let agv3 = registry.register_vehicle(Vehicle::new(
        "AGV3",
        Decimal::from(85),
        Decimal::new(50, 1),
        Time::new(1, 15)?,
        Position::new(Decimal::TWO, Decimal::ONE),
        SpeedProfile::new(Decimal::new(22, 1), Decimal::new(18, 1)),
    )?)?;

    // 作業
    let op1 = registry.register_operation(Operation::new(
        "OP1",
        "Move pallets",
        Time::new(2, 0)?,
        vec![agv1, agv2],
    )?)?;
    let op2 = registry.register_operation(Operation::new(
        "OP2",
        "Load shelves",
        Time::new(1, 30)?,
        vec![agv2, agv3],
    )?)?;
    let op3 = registry.register_operation(Operation::new(
        "OP3",
        "Transport goods",
        Time::new(2, 15)?,
        vec![agv1, agv3],
    )?)?;

    // 製程
    let process1 = registry.register_process(Process::new("Process 01", vec![op1, op2])?)?;
    let process2 = registry.register_process(Process::new("Process 02", vec![op2, op3])?)?;

    let warehouse = Warehouse::assemble(WAREHOUSE_ID, vec![process1, process2], &registry)?;

    Ok((registry, warehouse))
}
