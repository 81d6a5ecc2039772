//! 倉庫模型

use serde::{Deserialize, Serialize};

use crate::{require_identity, EntityKind, FleetRegistry, ProcessId, Result};

/// 倉庫：最上層容器
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warehouse {
    /// 倉庫ID
    id: String,

    /// 製程（依序）
    processes: Vec<ProcessId>,
}

impl Warehouse {
    /// 組裝倉庫，並檢查所有製程參照都存在於登錄表中
    pub fn assemble(
        id: impl Into<String>,
        processes: Vec<ProcessId>,
        registry: &FleetRegistry,
    ) -> Result<Self> {
        let id = require_identity(EntityKind::Warehouse, id.into())?;
        for &process_id in &processes {
            registry.process(process_id)?;
        }
        Ok(Self { id, processes })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn processes(&self) -> &[ProcessId] {
        &self.processes
    }
}
