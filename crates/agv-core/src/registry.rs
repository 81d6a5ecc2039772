//! 車隊登錄表（arena）
//!
//! 集中持有所有車輛、作業與製程；作業與製程之間以索引鍵互相參照，
//! 參照的有效性在登錄時檢查，而不是延後到彙總時。

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{EntityKind, FleetError, Operation, Process, Result, Vehicle};

macro_rules! arena_id {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[repr(transparent)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub struct $name(usize);

        impl $name {
            #[inline]
            pub const fn new(index: usize) -> Self {
                Self(index)
            }

            #[inline]
            pub const fn index(self) -> usize {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, concat!($label, "#{}"), self.0)
            }
        }
    };
}

arena_id!(
    /// 車輛索引鍵
    VehicleId,
    "AGV"
);
arena_id!(
    /// 作業索引鍵
    OperationId,
    "Operation"
);
arena_id!(
    /// 製程索引鍵
    ProcessId,
    "Process"
);

/// 車隊登錄表
#[derive(Debug, Clone, Default)]
pub struct FleetRegistry {
    vehicles: Vec<Vehicle>,
    operations: Vec<Operation>,
    processes: Vec<Process>,

    vehicle_index: HashMap<String, VehicleId>,
    operation_index: HashMap<String, OperationId>,
    process_index: HashMap<String, ProcessId>,
}

impl FleetRegistry {
    /// 創建空的登錄表
    pub fn new() -> Self {
        Self::default()
    }

    /// 登錄車輛
    pub fn register_vehicle(&mut self, vehicle: Vehicle) -> Result<VehicleId> {
        let id = VehicleId::new(self.vehicles.len());
        insert_identity(&mut self.vehicle_index, EntityKind::Vehicle, vehicle.id(), id)?;
        self.vehicles.push(vehicle);
        Ok(id)
    }

    /// 登錄作業，所有車輛參照必須已登錄
    pub fn register_operation(&mut self, operation: Operation) -> Result<OperationId> {
        for &vehicle_id in operation.vehicles() {
            self.vehicle(vehicle_id)?;
        }

        let id = OperationId::new(self.operations.len());
        insert_identity(
            &mut self.operation_index,
            EntityKind::Operation,
            operation.id(),
            id,
        )?;
        self.operations.push(operation);
        Ok(id)
    }

    /// 登錄製程，所有作業參照必須已登錄
    pub fn register_process(&mut self, process: Process) -> Result<ProcessId> {
        for &operation_id in process.operations() {
            self.operation(operation_id)?;
        }

        let id = ProcessId::new(self.processes.len());
        insert_identity(&mut self.process_index, EntityKind::Process, process.id(), id)?;
        self.processes.push(process);
        Ok(id)
    }

    /// 依索引取得車輛
    pub fn vehicle(&self, id: VehicleId) -> Result<&Vehicle> {
        self.vehicles
            .get(id.index())
            .ok_or(FleetError::DanglingReference {
                kind: EntityKind::Vehicle,
                index: id.index(),
            })
    }

    /// 依索引取得作業
    pub fn operation(&self, id: OperationId) -> Result<&Operation> {
        self.operations
            .get(id.index())
            .ok_or(FleetError::DanglingReference {
                kind: EntityKind::Operation,
                index: id.index(),
            })
    }

    /// 依索引取得製程
    pub fn process(&self, id: ProcessId) -> Result<&Process> {
        self.processes
            .get(id.index())
            .ok_or(FleetError::DanglingReference {
                kind: EntityKind::Process,
                index: id.index(),
            })
    }

    /// 依識別碼查詢車輛索引
    pub fn vehicle_id(&self, id: &str) -> Result<VehicleId> {
        lookup(&self.vehicle_index, EntityKind::Vehicle, id)
    }

    /// 依識別碼查詢作業索引
    pub fn operation_id(&self, id: &str) -> Result<OperationId> {
        lookup(&self.operation_index, EntityKind::Operation, id)
    }

    /// 依識別碼查詢製程索引
    pub fn process_id(&self, id: &str) -> Result<ProcessId> {
        lookup(&self.process_index, EntityKind::Process, id)
    }

    pub fn vehicle_count(&self) -> usize {
        self.vehicles.len()
    }

    pub fn operation_count(&self) -> usize {
        self.operations.len()
    }

    pub fn process_count(&self) -> usize {
        self.processes.len()
    }
}

fn insert_identity<K: Copy>(
    index: &mut HashMap<String, K>,
    kind: EntityKind,
    id: &str,
    key: K,
) -> Result<()> {
    if index.contains_key(id) {
        return Err(FleetError::DuplicateIdentity {
            kind,
            id: id.to_string(),
        });
    }
    index.insert(id.to_string(), key);
    Ok(())
}

fn lookup<K: Copy>(index: &HashMap<String, K>, kind: EntityKind, id: &str) -> Result<K> {
    index
        .get(id)
        .copied()
        .ok_or_else(|| FleetError::UnknownIdentity {
            kind,
            id: id.to_string(),
        })
}
