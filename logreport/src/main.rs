use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use logreport_core::cli::report::{print_summary, run};
use logreport_core::conf::{ConfigOverrides, resolve_config};
use logreport_core::logging::init_logging;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "logreport",
    version,
    about = "Static HTML report from an nginx access log"
)]
struct Cli {
    /// Path to the access log
    #[arg(long)]
    path: PathBuf,

    /// Report output directory, must not exist yet [default: reports/report_<unix-time>]
    #[arg(long)]
    dir: Option<PathBuf>,

    /// GeoLite2 / GeoIP2 City database [default: db/GeoLite2-City.mmdb]
    #[arg(long)]
    geoip_db: Option<PathBuf>,

    /// Only keep visitors from this country, named in --locale [default: 中国]
    #[arg(long)]
    country: Option<String>,

    /// Locale of the country and city names [default: zh-CN]
    #[arg(long)]
    locale: Option<String>,

    /// Optional HCL config file
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    init_logging();

    if let Err(e) = generate_report(cli) {
        eprintln!("logreport error: {e:#}");
        std::process::exit(1);
    }
}

fn generate_report(cli: Cli) -> Result<()> {
    let overrides = ConfigOverrides {
        config_file: cli.config,
        log_path: cli.path,
        output_dir: cli.dir,
        geoip_db: cli.geoip_db,
        country: cli.country,
        locale: cli.locale,
    };

    let config = resolve_config(overrides, Utc::now()).context("failed to load configuration")?;
    tracing::debug!(?config, "resolved configuration");

    let summary = run(&config).with_context(|| {
        format!(
            "failed to generate report for {}",
            config.log_path.display()
        )
    })?;

    print_summary(&summary);
    Ok(())
}
