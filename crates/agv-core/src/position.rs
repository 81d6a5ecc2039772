//! 位置模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::fmt::format_real;

/// 平面座標（僅用於顯示）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub x: Decimal,
    pub y: Decimal,
}

impl Position {
    pub fn new(x: Decimal, y: Decimal) -> Self {
        Self { x, y }
    }

    /// 原點 (0, 0)
    pub fn origin() -> Self {
        Self::new(Decimal::ZERO, Decimal::ZERO)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", format_real(self.x), format_real(self.y))
    }
}
