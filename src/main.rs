//! Playpen - a SQL playground engine over a shared SQLite store.

mod cli;

use anyhow::Result;
use cli::{Cli, Command};
use db_playpen::logging;
use db_playpen::persistence::{history, playgrounds, PlaygroundDb};
use db_playpen::query::QueryExecutor;
use tracing::error;

#[tokio::main]
async fn main() {
    logging::init_stderr_logging();

    let cli = Cli::parse_args();

    if let Err(e) = run(cli).await {
        error!("{e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let path = match cli.db_path.clone() {
        Some(p) => p,
        None => PlaygroundDb::default_path()?,
    };
    let db = PlaygroundDb::open(&path).await?;

    let outcome = dispatch(&cli, &db).await;
    db.close().await;
    outcome
}

async fn dispatch(cli: &Cli, db: &PlaygroundDb) -> Result<()> {
    match &cli.command {
        Command::List => {
            let all = playgrounds::list_playgrounds(db.pool()).await?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&all)?);
            } else {
                println!("{}", cli::render_playgrounds(&all));
            }
        }
        Command::Create { title } => {
            let pg = playgrounds::create_playground(db.pool(), title).await?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&pg)?);
            } else {
                println!("Created playground {} ({})", pg.id, pg.title);
            }
        }
        Command::Rename { id, title } => {
            let pg = playgrounds::rename_playground(db.pool(), *id, title).await?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&pg)?);
            } else {
                println!("Renamed playground {} to {}", pg.id, pg.title);
            }
        }
        Command::Delete { id } => {
            playgrounds::delete_playground(db.pool(), *id).await?;
            if cli.json {
                println!("{}", serde_json::json!({ "deleted": id }));
            } else {
                println!("Deleted playground {id}");
            }
        }
        Command::Run { id, sql } => {
            let executor = QueryExecutor::new(db);
            let result = executor.run_guarded(*id, sql).await?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("{}", cli::render_result(&result));
            }
        }
        Command::History { id } => {
            let records = history::get_history(db.pool(), *id).await?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&records)?);
            } else {
                println!("{}", cli::render_history(&records));
            }
        }
    }

    Ok(())
}
