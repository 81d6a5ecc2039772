//! 製程模型

use serde::{Deserialize, Serialize};

use crate::{require_identity, EntityKind, OperationId, Result};

/// 製程：依序組成的作業清單
///
/// 同一個作業可出現在多個製程中。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// 製程ID
    id: String,

    /// 作業（依序）
    operations: Vec<OperationId>,
}

impl Process {
    /// 創建新的製程
    pub fn new(id: impl Into<String>, operations: Vec<OperationId>) -> Result<Self> {
        Ok(Self {
            id: require_identity(EntityKind::Process, id.into())?,
            operations,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn operations(&self) -> &[OperationId] {
        &self.operations
    }

    pub fn operation_count(&self) -> usize {
        self.operations.len()
    }
}
