use clap::{Parser, ValueEnum};
use deck_backend::{connect_db, StoreKind};
use migration::{migrate, MigrationCommand};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Command {
    Up,
    Down,
    Fresh,
    Reset,
    Refresh,
    Status,
}

impl From<Command> for MigrationCommand {
    fn from(cmd: Command) -> Self {
        match cmd {
            Command::Up => MigrationCommand::Up,
            Command::Down => MigrationCommand::Down,
            Command::Fresh => MigrationCommand::Fresh,
            Command::Reset => MigrationCommand::Reset,
            Command::Refresh => MigrationCommand::Refresh,
            Command::Status => MigrationCommand::Status,
        }
    }
}

/// Persistent stores only; an in-memory database would vanish with the process.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum Db {
    Postgres,
    SqliteFile,
}

impl From<Db> for StoreKind {
    fn from(db: Db) -> Self {
        match db {
            Db::Postgres => StoreKind::Postgres,
            Db::SqliteFile => StoreKind::SqliteFile,
        }
    }
}

#[derive(Parser)]
#[command(name = "migration")]
#[command(about = "Deck service database migration tool")]
struct Args {
    /// Migration command to run
    #[arg(value_enum)]
    command: Command,

    /// Database to migrate; defaults to DECK_STORE
    #[arg(short, long, value_enum)]
    db: Option<Db>,
}

fn resolve_store(db: Option<Db>) -> Result<StoreKind, String> {
    let store = match db {
        Some(db) => db.into(),
        None => StoreKind::from_env().map_err(|e| e.to_string())?,
    };
    match store {
        StoreKind::Postgres | StoreKind::SqliteFile => Ok(store),
        other => Err(format!(
            "store '{other}' is not persistent; use --db postgres or --db sqlite-file"
        )),
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stdout)
        .without_time()
        .with_target(false)
        .with_env_filter("migration=info,sqlx=warn")
        .init();

    let args = Args::parse();

    let store = match resolve_store(args.db) {
        Ok(store) => store,
        Err(msg) => {
            eprintln!("❌ {msg}");
            std::process::exit(2);
        }
    };

    let conn = match connect_db(store).await {
        Ok(conn) => conn,
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };

    tracing::info!(store = %store, command = ?args.command, "running migrations");
    if let Err(e) = migrate(&conn, args.command.into()).await {
        eprintln!("Migration failed: {e}");
        std::process::exit(1);
    }
}
