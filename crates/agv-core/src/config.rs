//! 報表配置

use serde::{Deserialize, Serialize};

/// 報表配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// 輸出格式
    pub format: ReportFormat,

    /// 是否列出每台 AGV 的明細行
    pub include_vehicle_details: bool,

    /// 是否額外顯示去重後的 AGV 數量
    ///
    /// 預設的 AGV 數量是「作業 × 車輛」的參與次數，
    /// 同一台車被多個作業使用時會重複計算。
    pub show_distinct_vehicles: bool,

    /// 是否平行彙總各製程
    pub parallel: bool,
}

impl ReportConfig {
    /// 創建預設配置（文字輸出、列出明細、循序彙總）
    pub fn new() -> Self {
        Self {
            format: ReportFormat::Text,
            include_vehicle_details: true,
            show_distinct_vehicles: false,
            parallel: false,
        }
    }

    /// 建構器模式：設置輸出格式
    pub fn with_format(mut self, format: ReportFormat) -> Self {
        self.format = format;
        self
    }

    /// 建構器模式：設置是否列出車輛明細
    pub fn with_vehicle_details(mut self, include: bool) -> Self {
        self.include_vehicle_details = include;
        self
    }

    /// 建構器模式：設置是否顯示去重 AGV 數量
    pub fn with_distinct_vehicles(mut self, show: bool) -> Self {
        self.show_distinct_vehicles = show;
        self
    }

    /// 建構器模式：設置是否平行彙總
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// 輸出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// 人類可讀文字
    Text,
    /// JSON（結構化）
    Json,
}

impl std::str::FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            other => Err(format!("未知的輸出格式: {}", other)),
        }
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Text => f.write_str("text"),
            ReportFormat::Json => f.write_str("json"),
        }
    }
}
