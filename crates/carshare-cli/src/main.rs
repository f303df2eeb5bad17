//! Carshare CLI
//!
//! Interactive menu over a car-sharing store

use std::ffi::OsString;
use std::io;
use std::path::PathBuf;

use carshare_core::logging_facility::{self, Profile};
use carshare_store::config::DEFAULT_DB_FILE_NAME;
use carshare_store::{CarshareRepo, Store, StoreConfig};
use clap::{Parser, ValueEnum};

mod dump;
mod error;
mod menu;
mod session;

use error::CliResult;
use session::Session;

/// Spelling of the store flag accepted for compatibility
const LEGACY_DB_FLAG: &str = "-databaseFileName";

/// Flags whose next argument is their value
const VALUE_FLAGS: &[&str] = &[
    "--database-file-name",
    "--db-dir",
    "--db",
    "--log-format",
    LEGACY_DB_FLAG,
];

#[derive(Debug, Parser)]
#[command(name = "carshare")]
#[command(about = "Carshare - companies, cars and customer rentals", long_about = None)]
struct Cli {
    /// Store file name inside --db-dir
    #[arg(long, value_name = "NAME")]
    database_file_name: Option<String>,

    /// Directory holding the store file
    #[arg(long, value_name = "DIR")]
    db_dir: Option<PathBuf>,

    /// Full path of the store file, used when neither of the above is given
    #[arg(long, env = "CARSHARE_DB", value_name = "PATH")]
    db: Option<PathBuf>,

    /// Log output format on stderr (storage failures only when omitted)
    #[arg(long, value_enum)]
    log_format: Option<LogFormat>,

    /// Print every company, car and customer as JSON and exit
    #[arg(long)]
    dump: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

impl Cli {
    fn profile(&self) -> Profile {
        match self.log_format {
            None => Profile::Interactive,
            Some(LogFormat::Text) => Profile::Development,
            Some(LogFormat::Json) => Profile::Production,
        }
    }

    /// Store location; an explicit name or directory beats `--db`/`CARSHARE_DB`
    fn store_config(&self) -> StoreConfig {
        match (&self.database_file_name, &self.db_dir, &self.db) {
            (None, None, Some(path)) => StoreConfig::at(path),
            (name, dir, _) => StoreConfig::new(
                dir.clone().unwrap_or_else(|| PathBuf::from(".")),
                name.as_deref().unwrap_or(DEFAULT_DB_FILE_NAME),
            ),
        }
    }
}

/// Rewrite the legacy single-dash store flag to its long form
///
/// Only arguments in flag position are rewritten; the program name and the
/// value of a preceding flag are passed through.
fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut normalized = Vec::new();
    let mut value_expected = false;

    for (i, arg) in args.into_iter().enumerate() {
        let flag_position = i > 0 && !value_expected;
        value_expected = flag_position && VALUE_FLAGS.iter().any(|flag| arg == *flag);

        if flag_position && arg == LEGACY_DB_FLAG {
            normalized.push(OsString::from("--database-file-name"));
        } else {
            normalized.push(arg);
        }
    }
    normalized
}

fn run(cli: Cli) -> CliResult<()> {
    let config = cli.store_config();
    let store = Store::initialize(&config)?;
    tracing::info!(path = %config.path.display(), "store ready");
    let repo = CarshareRepo::new(store);

    if cli.dump {
        return dump::write_dump(&repo, io::stdout().lock());
    }

    let stdin = io::stdin();
    let mut session = Session::new(repo, stdin.lock(), io::stdout().lock());
    session.run()
}

fn main() {
    let cli = Cli::parse_from(normalize_args(std::env::args_os()));
    logging_facility::init(cli.profile());

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
