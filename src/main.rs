use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use ecochecker::{
    checker::EcoChecker,
    config,
    constants::CONFIG_FILE_PATH,
    health,
    logger::{self, LogTag, LoggerConfig},
};
use serde::Serialize;
use std::io::IsTerminal;

fn cli() -> Command {
    let cmd = Command::new("ecochecker")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Website eco-responsibility score engine")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("PATH")
                .global(true)
                .default_value(CONFIG_FILE_PATH)
                .help("Path to the TOML configuration file"),
        )
        .arg(
            Arg::new("debug")
                .long("debug")
                .value_name("TAG")
                .global(true)
                .action(ArgAction::Append)
                .help("Enable debug output for a subsystem (cache, providers, scoring, config, webserver, system)"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Show all log output"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Only show warnings and errors"),
        )
        .arg(
            Arg::new("no-color")
                .long("no-color")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Disable colored log output"),
        )
        .subcommand(
            Command::new("check")
                .about("Score a website and print the composite result")
                .arg(
                    Arg::new("url")
                        .value_name("URL")
                        .required(true)
                        .help("Website to check"),
                )
                .arg(
                    Arg::new("no-cache")
                        .long("no-cache")
                        .action(ArgAction::SetTrue)
                        .help("Skip the result cache"),
                ),
        )
        .subcommand(
            Command::new("banner")
                .about("Print the banner payload for a website")
                .arg(
                    Arg::new("url")
                        .value_name("URL")
                        .required(true)
                        .help("Website to check"),
                )
                .arg(
                    Arg::new("style")
                        .short('s')
                        .long("style")
                        .value_name("STYLE")
                        .default_value("default")
                        .help("Banner style: default, minimal or detailed"),
                ),
        )
        .subcommand(Command::new("health").about("Probe the upstream providers"));

    #[cfg(feature = "web")]
    let cmd = cmd.subcommand(Command::new("serve").about("Run the HTTP API"));

    cmd
}

fn init_logger(matches: &ArgMatches) {
    let debug_keys: Vec<&str> = matches
        .get_many::<String>("debug")
        .map(|values| values.map(String::as_str).collect())
        .unwrap_or_default();

    let mut config = LoggerConfig::from_flags(
        debug_keys,
        matches.get_flag("verbose"),
        matches.get_flag("quiet"),
    );
    config.plain = matches.get_flag("no-color") || !std::io::stderr().is_terminal();
    logger::init(config);
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let matches = cli().get_matches();
    init_logger(&matches);

    let config_path = matches
        .get_one::<String>("config")
        .map(String::as_str)
        .unwrap_or(CONFIG_FILE_PATH);
    let config = config::load_config(config_path).context("Failed to load configuration")?;
    logger::debug(LogTag::Config, &format!("Configuration loaded: {:?}", config));

    match matches.subcommand() {
        Some(("check", sub)) => {
            let checker = EcoChecker::from_config(&config)?;
            let url = sub.get_one::<String>("url").map(String::as_str).unwrap_or_default();
            let result = checker.check(url, !sub.get_flag("no-cache")).await?;
            print_json(&result)
        }
        Some(("banner", sub)) => {
            let checker = EcoChecker::from_config(&config)?;
            let url = sub.get_one::<String>("url").map(String::as_str).unwrap_or_default();
            let style = sub.get_one::<String>("style").map(String::as_str).unwrap_or("default");
            let banner = checker.banner_data(url, style).await?;
            print_json(&banner)
        }
        Some(("health", _)) => {
            let report = health::probe(&config.providers).await?;
            print_json(&report)
        }
        #[cfg(feature = "web")]
        Some(("serve", _)) => serve(config).await,
        _ => {
            cli().print_help()?;
            Ok(())
        }
    }
}

#[cfg(feature = "web")]
async fn serve(config: ecochecker::config::Config) -> Result<()> {
    use ecochecker::webserver::{self, AppState};
    use std::sync::Arc;

    logger::info(LogTag::System, "🚀 ecochecker starting up...");

    let checker = Arc::new(EcoChecker::from_config(&config)?);
    let sweeper = checker.start_sweeper();
    let state = Arc::new(AppState::new(Arc::clone(&checker), config.providers.clone()));

    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            logger::error(
                LogTag::System,
                &format!("Failed to listen for shutdown signal: {}", e),
            );
            std::future::pending::<()>().await;
        }
        logger::info(LogTag::System, "Shutdown requested");
    };

    let served = webserver::start_server(state, &config.webserver, shutdown).await;

    sweeper.stop().await;
    logger::info(LogTag::System, "✅ ecochecker stopped");

    served.map_err(Into::into)
}
