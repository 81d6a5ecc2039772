use agv_fleet::{cli::Args, generate_report, logging, sample};
use anyhow::Context;
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init();

    let config = args.report_config();
    tracing::debug!("報表配置: {:?}", config);

    let (registry, warehouse) = sample::sample_fleet().context("建立範例車隊失敗")?;
    let output = generate_report(&registry, &warehouse, &config).context("產生報表失敗")?;

    print!("{}", output);
    if !output.ends_with('\n') {
        println!();
    }

    Ok(())
}
