//! 報表輸出

use std::fmt::Write;

use agv_core::fmt::format_real;
use agv_core::{FleetError, ReportConfig, ReportFormat, Result};

use crate::{OperationReport, ProcessReport, WarehouseReport};

/// 報表輸出器
pub trait ReportRenderer {
    fn render(&self, report: &WarehouseReport) -> Result<String>;
}

/// 依配置選擇輸出器
pub fn renderer_for(config: &ReportConfig) -> Box<dyn ReportRenderer> {
    match config.format {
        ReportFormat::Text => Box::new(TextRenderer::from_config(config)),
        ReportFormat::Json => Box::new(JsonRenderer),
    }
}

const PROCESS_SEPARATOR: &str = "-------------------";
const VEHICLE_INDENT: &str = "   ";

/// 人類可讀的文字報表
#[derive(Debug, Clone, Copy)]
pub struct TextRenderer {
    include_vehicle_details: bool,
    show_distinct_vehicles: bool,
}

impl TextRenderer {
    pub fn new() -> Self {
        Self {
            include_vehicle_details: true,
            show_distinct_vehicles: false,
        }
    }

    pub fn from_config(config: &ReportConfig) -> Self {
        Self {
            include_vehicle_details: config.include_vehicle_details,
            show_distinct_vehicles: config.show_distinct_vehicles,
        }
    }

    fn write_warehouse(&self, out: &mut String, report: &WarehouseReport) -> std::fmt::Result {
        writeln!(out, "=-=-=-=-=-= Warehouse: {} =-=-=-=-=-=", report.id)?;

        for process in &report.processes {
            self.write_process(out, process)?;
            writeln!(out, "{}", PROCESS_SEPARATOR)?;
        }

        writeln!(out, "TOTAL for Warehouse:")?;
        writeln!(out, "Total Time: {} minutes", report.totals.duration_minutes)?;
        writeln!(out, "Total Energy: {} kWh", format_real(report.totals.energy_kwh))?;
        writeln!(
            out,
            "Total AGVs used across all processes: {}",
            report.running_totals.vehicle_count
        )?;
        if self.show_distinct_vehicles {
            writeln!(
                out,
                "Distinct AGVs used across all processes: {}",
                report.distinct_vehicles
            )?;
        }
        Ok(())
    }

    fn write_process(&self, out: &mut String, process: &ProcessReport) -> std::fmt::Result {
        writeln!(out, "Industrial Process: {}", process.id)?;
        writeln!(out, "Total Time: {} minutes", process.totals.duration_minutes)?;
        writeln!(out, "Total Energy: {} kWh", format_real(process.totals.energy_kwh))?;
        writeln!(out, "Total AGVs used: {}", process.totals.vehicle_count)?;
        if self.show_distinct_vehicles {
            writeln!(out, "Distinct AGVs used: {}", process.distinct_vehicles)?;
        }
        writeln!(out, "Operations Info:")?;
        for operation in &process.operations {
            self.write_operation(out, operation)?;
            // 每個作業區塊之後空一行
            writeln!(out)?;
        }
        Ok(())
    }

    fn write_operation(&self, out: &mut String, operation: &OperationReport) -> std::fmt::Result {
        writeln!(
            out,
            "Operation: {}, {}, Time: {}",
            operation.id, operation.description, operation.nominal_time
        )?;
        if self.include_vehicle_details {
            writeln!(out, "AGVs involved:")?;
            for vehicle in &operation.vehicles {
                writeln!(out, "{}{}", VEHICLE_INDENT, vehicle)?;
            }
        } else {
            writeln!(out, "AGVs involved: {}", operation.totals.vehicle_count)?;
        }
        Ok(())
    }
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportRenderer for TextRenderer {
    fn render(&self, report: &WarehouseReport) -> Result<String> {
        let mut out = String::new();
        self.write_warehouse(&mut out, report)
            .map_err(|e| FleetError::Render(e.to_string()))?;
        Ok(out)
    }
}

/// JSON 報表
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl ReportRenderer for JsonRenderer {
    fn render(&self, report: &WarehouseReport) -> Result<String> {
        serde_json::to_string_pretty(report).map_err(|e| FleetError::Render(e.to_string()))
    }
}
