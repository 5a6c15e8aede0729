use super::app;
use super::print::{print_config, print_messages, print_notes};
use super::setup::{Cli, Commands};
use clap::Parser;
use directories::ProjectDirs;
use memopad::api::MemoPadApi;
use memopad::commands::config::ConfigAction;
use memopad::commands::{config, doctor};
use memopad::config::MemoPadConfig;
use memopad::error::Result;
use memopad::logging::{init_logging, LogTarget};
use memopad::store::fs::FileStore;
use std::path::{Path, PathBuf};

/// Overrides the per-user config directory.
const HOME_ENV: &str = "MEMOPAD_HOME";

struct AppContext {
    config: MemoPadConfig,
    data_file: PathBuf,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config_dir = config_dir();

    // Runs before the config is loaded: `config KEY VALUE` rewrites an unreadable file
    if let Some(Commands::Config { key, value }) = &cli.command {
        return handle_config(&config_dir, key.clone(), value.clone());
    }

    let ctx = init_context(&cli, &config_dir)?;

    match cli.command {
        None | Some(Commands::Open) => handle_open(&ctx),
        Some(Commands::List) => handle_list(&ctx),
        Some(Commands::Path) => handle_path(&ctx),
        Some(Commands::Doctor) => handle_doctor(&ctx),
        // Handled before the context is built
        Some(Commands::Config { .. }) => Ok(()),
    }
}

fn config_dir() -> PathBuf {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return PathBuf::from(home);
    }
    ProjectDirs::from("com", "memopad", "memopad")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".memopad"))
}

fn init_context(cli: &Cli, config_dir: &Path) -> Result<AppContext> {
    let config = MemoPadConfig::load(config_dir)?;

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let data_file = cwd.join(cli.file.as_ref().unwrap_or(&config.data_file));

    let log_file = cli.log_file.clone().or_else(|| config.log_file.clone());
    let target = match &log_file {
        Some(path) => LogTarget::File(path),
        None if cli.verbose && !cli.is_interactive() => LogTarget::Stderr,
        None => LogTarget::Off,
    };
    init_logging(target, cli.verbose)?;
    tracing::debug!(
        config_dir = %config_dir.display(),
        data_file = %data_file.display(),
        "context ready"
    );

    Ok(AppContext { config, data_file })
}

fn handle_open(ctx: &AppContext) -> Result<()> {
    let store = FileStore::new(&ctx.data_file);
    let api = MemoPadApi::open(store)?.with_autosave(ctx.config.autosave);
    app::run(api)
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let api = MemoPadApi::open(FileStore::new(&ctx.data_file))?;
    print_notes(api.pad());
    Ok(())
}

fn handle_path(ctx: &AppContext) -> Result<()> {
    println!("{}", ctx.data_file.display());
    Ok(())
}

fn handle_doctor(ctx: &AppContext) -> Result<()> {
    let mut store = FileStore::new(&ctx.data_file);
    let result = doctor::run(&mut store)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(
    config_dir: &Path,
    key: Option<String>,
    value: Option<String>,
) -> Result<()> {
    let action = match (key.clone(), value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = config::run(config_dir, action)?;
    if key.is_none() {
        if let Some(config) = &result.config {
            print_config(config);
        }
    }
    print_messages(&result.messages);
    Ok(())
}
