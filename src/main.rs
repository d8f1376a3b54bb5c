//! Solar savings dashboard entry point: CLI wiring and config-driven dashboard construction.

use std::path::Path;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use solar_savings::cli::{Args, Command, ReportArgs};
use solar_savings::config::DashboardConfig;
use solar_savings::dashboard::Dashboard;
use solar_savings::io::export::export_csv;

/// Loads the configuration file, or the built-in defaults, and validates it.
fn load_config(path: Option<&Path>) -> Result<DashboardConfig> {
    let config = match path {
        Some(path) => {
            info!(path = %path.display(), "loading configuration");
            DashboardConfig::from_toml_file(path)?
        }
        None => DashboardConfig::baseline(),
    };

    let errors = config.validate();
    if !errors.is_empty() {
        for e in &errors {
            error!("{e}");
        }
        bail!("invalid configuration ({} errors)", errors.len());
    }
    Ok(config)
}

/// Prints the summary for one selection and optionally writes the CSV table.
fn report(dashboard: &Dashboard, args: &ReportArgs) -> Result<()> {
    let selection = args.selection(dashboard.default_selection());
    let projections = dashboard.project(&selection)?;

    let labels: Vec<&str> = selection
        .iter()
        .filter_map(|id| dashboard.catalog().get(id).map(|m| m.label.as_str()))
        .collect();
    println!("Selected measures: {}", labels.join(", "));
    println!("\n{}", projections.summary());

    if let Some(path) = &args.export {
        export_csv(&projections, path)
            .with_context(|| format!("failed to write CSV to \"{}\"", path.display()))?;
        info!(path = %path.display(), "projection written");
    }
    Ok(())
}

#[cfg(feature = "api")]
fn serve(
    dashboard: Dashboard,
    config: &DashboardConfig,
    args: &solar_savings::cli::ServeArgs,
) -> Result<()> {
    use std::net::SocketAddr;
    use std::sync::Arc;

    let addr = match args.bind {
        Some(addr) => addr,
        None => config
            .dashboard
            .bind
            .parse::<SocketAddr>()
            .with_context(|| format!("invalid dashboard.bind \"{}\"", config.dashboard.bind))?,
    };

    let rt = tokio::runtime::Runtime::new().context("failed to create tokio runtime")?;
    rt.block_on(solar_savings::api::serve(Arc::new(dashboard), addr))
        .with_context(|| format!("dashboard server on {addr} failed"))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let args = Args::parse();
    let config = load_config(args.config.as_deref())?;
    let dashboard = config.build();
    info!(
        measures = dashboard.catalog().len(),
        horizon_years = dashboard.params().horizon.len(),
        "dashboard ready"
    );

    match args.command {
        Some(Command::Report(report_args)) => report(&dashboard, &report_args),
        #[cfg(feature = "api")]
        Some(Command::Serve(serve_args)) => serve(dashboard, &config, &serve_args),
        #[cfg(feature = "api")]
        None => serve(dashboard, &config, &solar_savings::cli::ServeArgs::default()),
        #[cfg(not(feature = "api"))]
        None => report(
            &dashboard,
            &ReportArgs {
                select: None,
                export: None,
            },
        ),
        #[cfg(feature = "tui")]
        Some(Command::Tui) => solar_savings::tui::run(dashboard).context("terminal dashboard failed"),
    }
}
