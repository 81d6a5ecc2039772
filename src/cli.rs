//! 命令列參數

use agv_core::{ReportConfig, ReportFormat};
use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about = "AGV fleet time / energy / usage report")]
pub struct Args {
    /// Output format: `text` or `json`.
    #[clap(long, default_value = "text", env = "AGV_REPORT_FORMAT")]
    pub format: ReportFormat,

    /// Print only the AGV count per operation instead of one line per AGV.
    #[clap(long = "no-vehicle-details")]
    pub no_vehicle_details: bool,

    /// Also print the number of distinct AGVs (shared AGVs counted once).
    #[clap(long, env = "AGV_REPORT_DISTINCT")]
    pub distinct: bool,

    /// Aggregate processes in parallel.
    #[clap(long, env = "AGV_REPORT_PARALLEL")]
    pub parallel: bool,
}

impl Args {
    pub fn report_config(&self) -> ReportConfig {
        ReportConfig::new()
            .with_format(self.format)
            .with_vehicle_details(!self.no_vehicle_details)
            .with_distinct_vehicles(self.distinct)
            .with_parallel(self.parallel)
    }
}
