use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use roster_config::{get_config_path, Config};
use roster_output::*;
use roster_registry::UserRegistry;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const MAIN_HELP: &str = r#"Roster keeps a small registry of users, each identified by email.

Names are trimmed and must be at least two characters long. Emails are
trimmed, lower-cased, and must contain both `@` and `.`. An email can only be
registered once, regardless of case.

Users are read from and written to a JSON file (see `roster config`). Running
`roster` with no command seeds two example users and prints the registry."#;

const DEMO_USERS: [(&str, &str); 2] = [
    ("Juan Pérez", "juan.perez@email.com"),
    ("Ana Gómez", "ana.gomez@email.com"),
];

const DEMO_DUPLICATE: (&str, &str) = ("Juan Duplicado", "JUAN.PEREZ@email.com");

#[derive(Parser)]
#[command(name = "roster")]
#[command(about = MAIN_HELP)]
#[command(version)]
struct Cli {
    #[arg(long, global = true, help = "Output as JSON")]
    json: bool,

    #[arg(long, global = true, env = "ROSTER_STORE", help = "Path of the users JSON file")]
    store: Option<PathBuf>,

    #[arg(long, global = true, help = "Do not write the users file")]
    no_save: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Seed example users, show a rejected duplicate, and print the registry.")]
    Demo,

    #[command(about = "Register a user.")]
    Add {
        #[arg(help = "Full name")]
        name: String,
        #[arg(help = "Email address")]
        email: String,
    },

    #[command(about = "Print all users in insertion order.")]
    List,

    #[command(about = "Print config file location and contents.")]
    Config,
}

/// Store location and whether the run may write it.
struct StoreTarget {
    path: PathBuf,
    persist: bool,
}

impl StoreTarget {
    fn resolve(cli: &Cli, config: &Config) -> Self {
        Self {
            path: cli.store.clone().unwrap_or_else(|| config.store_path()),
            persist: config.store.persist && !cli.no_save,
        }
    }

    fn open(&self) -> Result<UserRegistry> {
        Ok(UserRegistry::open(&self.path)?)
    }

    fn commit(&self, registry: &UserRegistry) -> Result<()> {
        if self.persist {
            registry.save(&self.path)?;
        } else {
            debug!("Persistence disabled, not writing {}", self.path.display());
        }
        Ok(())
    }
}

fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log.level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;
    init_logging(&config);

    let target = StoreTarget::resolve(&cli, &config);
    info!("Using store {}", target.path.display());

    match &cli.command {
        None | Some(Commands::Demo) => handle_demo(&target, cli.json),
        Some(Commands::Add { name, email }) => handle_add(&target, cli.json, name, email),
        Some(Commands::List) => handle_list(&target, cli.json),
        Some(Commands::Config) => handle_config(),
    }
}

fn handle_demo(target: &StoreTarget, json_output: bool) -> Result<()> {
    let mut registry = target.open()?;
    let errors = seed_demo(&mut registry);

    let result = DemoResult {
        users: registry.list_users(),
        errors,
    };
    if json_output {
        println!("{}", format_json(&result)?);
    } else {
        println!("{}", format_demo_result(&result));
    }

    target.commit(&registry)
}

/// Inserts the example users plus one duplicate, returning the rejection messages.
fn seed_demo(registry: &mut UserRegistry) -> Vec<String> {
    DEMO_USERS
        .iter()
        .chain(std::iter::once(&DEMO_DUPLICATE))
        .filter_map(|(name, email)| registry.register(name, email).err())
        .map(|e| e.to_string())
        .collect()
}

fn handle_add(target: &StoreTarget, json_output: bool, name: &str, email: &str) -> Result<()> {
    let mut registry = target.open()?;
    let outcome = registry.register(name, email);
    let added = outcome.is_ok();

    let result = AddResult::from_outcome(outcome);
    if json_output {
        println!("{}", format_json(&result)?);
    } else {
        println!("{}", format_add_result(&result));
    }

    if added {
        target.commit(&registry)?;
    }
    Ok(())
}

fn handle_list(target: &StoreTarget, json_output: bool) -> Result<()> {
    let registry = target.open()?;
    let result = ListResult {
        users: registry.list_users(),
    };
    if json_output {
        println!("{}", format_json(&result)?);
    } else {
        println!("{}", format_list_result(&result));
    }
    Ok(())
}

fn handle_config() -> Result<()> {
    let config_path = get_config_path();
    println!("Config file: {}", config_path.display());
    println!();

    if config_path.exists() {
        println!("{}", std::fs::read_to_string(&config_path)?);
    } else {
        println!("(file does not exist, using defaults)");
    }
    Ok(())
}
