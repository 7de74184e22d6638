use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use pbi::{Config, NotifyOption, PowerBiClient};
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Command line access to the Power BI REST API
#[derive(Parser, Debug)]
#[command(name = "pbi", version, about, long_about = None)]
struct Cli {
    /// Access token (defaults to $POWERBI_ACCESS_TOKEN, then the config file)
    #[arg(long, global = true)]
    token: Option<String>,

    /// API root (defaults to $POWERBI_API_URL, then the public cloud)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Log level for debugging
    #[arg(long, value_enum, default_value = "off", global = true)]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_tracing_level(self) -> Option<Level> {
        match self {
            LogLevel::Off => None,
            LogLevel::Error => Some(Level::ERROR),
            LogLevel::Warn => Some(Level::WARN),
            LogLevel::Info => Some(Level::INFO),
            LogLevel::Debug => Some(Level::DEBUG),
            LogLevel::Trace => Some(Level::TRACE),
        }
    }
}

/// Workspace scope shared by most content commands
#[derive(Args, Debug)]
struct GroupArg {
    /// Workspace id (defaults to the configured workspace, then "My workspace")
    #[arg(short, long)]
    group: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Datasets, refresh history and dataset users
    #[command(subcommand)]
    Datasets(DatasetCommand),
    /// Workspaces
    #[command(subcommand)]
    Groups(GroupCommand),
    #[command(subcommand)]
    Reports(ContentCommand),
    /// Dashboards
    #[command(subcommand)]
    Dashboards(ContentCommand),
    /// Dashboard tiles
    #[command(subcommand)]
    Tiles(TileCommand),
    /// On-premises data gateways
    #[command(subcommand)]
    Gateways(GatewayCommand),
    /// Installed apps
    #[command(subcommand)]
    Apps(AppCommand),
    /// Show or update the config file
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Subcommand, Debug)]
enum DatasetCommand {
    List(GroupArg),
    Get {
        id: String,
        #[command(flatten)]
        scope: GroupArg,
    },
    /// Refresh history (fails for datasets that are not refreshable)
    Refreshes {
        id: String,
        #[arg(long)]
        top: Option<u32>,
        #[command(flatten)]
        scope: GroupArg,
    },
    /// Trigger a refresh in "My workspace"
    Refresh {
        id: String,
        #[arg(long, default_value = "NoNotification")]
        notify: NotifyOption,
    },
    Users {
        id: String,
        #[command(flatten)]
        scope: GroupArg,
    },
    /// Upstream dataflows of the datasets in a workspace
    DataflowLinks {
        #[arg(short, long)]
        group: String,
    },
}

#[derive(Subcommand, Debug)]
enum GroupCommand {
    List {
        /// OData filter, e.g. "contains(name,'sales')"
        #[arg(long)]
        filter: Option<String>,
        #[arg(long)]
        top: Option<u32>,
    },
    Get { id: String },
    Users { id: String },
    Create { name: String },
    Delete { id: String },
}

#[derive(Subcommand, Debug)]
enum ContentCommand {
    List(GroupArg),
    Get {
        id: String,
        #[command(flatten)]
        scope: GroupArg,
    },
}

#[derive(Subcommand, Debug)]
enum TileCommand {
    List {
        dashboard: String,
        #[command(flatten)]
        scope: GroupArg,
    },
    Get {
        dashboard: String,
        tile: String,
        #[command(flatten)]
        scope: GroupArg,
    },
}

#[derive(Subcommand, Debug)]
enum GatewayCommand {
    List,
    Get { id: String },
}

#[derive(Subcommand, Debug)]
enum AppCommand {
    List,
    Get { id: String },
    Reports { id: String },
    Dashboards { id: String },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    Show,
    Set {
        #[arg(long)]
        base_url: Option<String>,
        #[arg(long)]
        default_group: Option<String>,
    },
}

/// Pick the log filter: an explicit `--log-level` wins, then `RUST_LOG`.
/// Logging stays off when neither is set.
fn log_filter(level: LogLevel, env: Option<&str>) -> Option<EnvFilter> {
    if let Some(level) = level.to_tracing_level() {
        return Some(EnvFilter::new(level.as_str()));
    }
    env.filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
}

fn setup_logging(level: LogLevel) -> Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let Some(filter) = log_filter(level, env.as_deref()) else {
        return Ok(None);
    };

    let log_path = get_log_path();

    if let Some(parent) = log_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("Failed to open log file {:?}", log_path))?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("pbi started with log level: {:?}", level);
    tracing::info!("Log file: {:?}", log_path);

    Ok(Some(guard))
}

fn get_log_path() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        return config_dir.join("pbi").join("pbi.log");
    }
    if let Some(home) = dirs::home_dir() {
        return home.join(".pbi").join("pbi.log");
    }
    PathBuf::from("pbi.log")
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let _log_guard = match setup_logging(cli.log_level) {
        Ok(guard) => guard,
        Err(err) => {
            eprintln!("Warning: {err:#}");
            None
        },
    };

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{:#}", err);
            match err.downcast_ref::<pbi::Error>() {
                Some(api_err) => eprintln!("Error: {}", api_err.user_message()),
                None => eprintln!("Error: {err:#}"),
            }
            ExitCode::FAILURE
        },
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = Config::load();

    if let Command::Config(command) = cli.command {
        return run_config(&mut config, command);
    }

    let token = config.effective_token(cli.token.as_deref()).context(
        "No access token. Set POWERBI_ACCESS_TOKEN or pass --token",
    )?;
    let base_url = config.effective_base_url(cli.base_url.as_deref());
    tracing::info!("Using API root {}", base_url);

    let client = PowerBiClient::with_base_url(&token, &base_url)?;
    let group_of = |scope: &GroupArg| config.effective_group(scope.group.as_deref());

    match cli.command {
        Command::Datasets(command) => {
            let datasets = client.datasets();
            match command {
                DatasetCommand::List(scope) => match group_of(&scope) {
                    Some(group) => print_json(&datasets.get_datasets_in_group(&group).await?),
                    None => print_json(&datasets.get_datasets().await?),
                },
                DatasetCommand::Get { id, scope } => match group_of(&scope) {
                    Some(group) => print_json(&datasets.get_dataset_in_group(&group, &id).await?),
                    None => print_json(&datasets.get_dataset(&id).await?),
                },
                DatasetCommand::Refreshes { id, top, scope } => match group_of(&scope) {
                    Some(group) => print_json(
                        &datasets
                            .get_refresh_history_in_group(&group, &id, top)
                            .await?,
                    ),
                    None => print_json(&datasets.get_refresh_history(&id, top).await?),
                },
                DatasetCommand::Refresh { id, notify } => {
                    datasets.refresh_dataset(&id, notify).await?;
                    println!("Refresh of {} requested", id);
                    Ok(())
                },
                DatasetCommand::Users { id, scope } => match group_of(&scope) {
                    Some(group) => {
                        print_json(&datasets.get_dataset_users_in_group(&group, &id).await?)
                    },
                    None => print_json(&datasets.get_dataset_users(&id).await?),
                },
                DatasetCommand::DataflowLinks { group } => {
                    print_json(&datasets.get_dataset_to_dataflow_links_in_group(&group).await?)
                },
            }
        },
        Command::Groups(command) => {
            let groups = client.groups();
            match command {
                GroupCommand::List { filter, top } => {
                    print_json(&groups.get_groups(filter.as_deref(), top).await?)
                },
                GroupCommand::Get { id } => match groups.get_group(&id).await? {
                    Some(group) => print_json(&group),
                    None => anyhow::bail!("Workspace {} not found", id),
                },
                GroupCommand::Users { id } => print_json(&groups.get_group_users(&id).await?),
                GroupCommand::Create { name } => print_json(&groups.create_group(&name).await?),
                GroupCommand::Delete { id } => {
                    groups.delete_group(&id).await?;
                    println!("Workspace {} deleted", id);
                    Ok(())
                },
            }
        },
        Command::Reports(command) => {
            let reports = client.reports();
            match command {
                ContentCommand::List(scope) => match group_of(&scope) {
                    Some(group) => print_json(&reports.get_reports_in_group(&group).await?),
                    None => print_json(&reports.get_reports().await?),
                },
                ContentCommand::Get { id, scope } => match group_of(&scope) {
                    Some(group) => print_json(&reports.get_report_in_group(&group, &id).await?),
                    None => print_json(&reports.get_report(&id).await?),
                },
            }
        },
        Command::Dashboards(command) => {
            let dashboards = client.dashboards();
            match command {
                ContentCommand::List(scope) => match group_of(&scope) {
                    Some(group) => print_json(&dashboards.get_dashboards_in_group(&group).await?),
                    None => print_json(&dashboards.get_dashboards().await?),
                },
                ContentCommand::Get { id, scope } => match group_of(&scope) {
                    Some(group) => {
                        print_json(&dashboards.get_dashboard_in_group(&group, &id).await?)
                    },
                    None => print_json(&dashboards.get_dashboard(&id).await?),
                },
            }
        },
        Command::Tiles(command) => {
            let tiles = client.tiles();
            match command {
                TileCommand::List { dashboard, scope } => match group_of(&scope) {
                    Some(group) => print_json(&tiles.get_tiles_in_group(&group, &dashboard).await?),
                    None => print_json(&tiles.get_tiles(&dashboard).await?),
                },
                TileCommand::Get {
                    dashboard,
                    tile,
                    scope,
                } => match group_of(&scope) {
                    Some(group) => {
                        print_json(&tiles.get_tile_in_group(&group, &dashboard, &tile).await?)
                    },
                    None => print_json(&tiles.get_tile(&dashboard, &tile).await?),
                },
            }
        },
        Command::Gateways(command) => match command {
            GatewayCommand::List => print_json(&client.gateways().get_gateways().await?),
            GatewayCommand::Get { id } => print_json(&client.gateways().get_gateway(&id).await?),
        },
        Command::Apps(command) => {
            let apps = client.apps();
            match command {
                AppCommand::List => print_json(&apps.get_apps().await?),
                AppCommand::Get { id } => print_json(&apps.get_app(&id).await?),
                AppCommand::Reports { id } => print_json(&apps.get_reports_in_app(&id).await?),
                AppCommand::Dashboards { id } => {
                    print_json(&apps.get_dashboards_in_app(&id).await?)
                },
            }
        },
        Command::Config(_) => unreachable!("handled before the client is built"),
    }
}

fn run_config(config: &mut Config, command: ConfigCommand) -> Result<()> {
    match command {
        ConfigCommand::Show => {
            let mut shown = config.clone();
            if shown.access_token.is_some() {
                shown.access_token = Some("<redacted>".to_string());
            }
            print_json(&shown)
        },
        ConfigCommand::Set {
            base_url,
            default_group,
        } => {
            if let Some(base_url) = base_url {
                config.base_url = Some(base_url);
            }
            if let Some(default_group) = default_group {
                config.default_group = Some(default_group);
            }
            let path = config.save()?;
            println!("Saved {}", path.display());
            Ok(())
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_filter_off_without_flag_or_env() {
        assert!(log_filter(LogLevel::Off, None).is_none());
        assert!(log_filter(LogLevel::Off, Some("  ")).is_none());
    }

    #[test]
    fn test_log_filter_uses_rust_log_when_flag_is_off() {
        let filter = log_filter(LogLevel::Off, Some("pbi=trace")).unwrap();
        assert!(filter.to_string().contains("pbi=trace"));
    }

    #[test]
    fn test_log_filter_flag_wins_over_env() {
        let filter = log_filter(LogLevel::Debug, Some("pbi=trace")).unwrap();
        assert!(!filter.to_string().contains("pbi=trace"));
    }
}
