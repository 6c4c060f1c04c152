use std::{io::Write, path::PathBuf, process::ExitCode};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use client_core::{
    render_cards_html, CreateOutcome, DeleteOutcome, GameForm, HttpGamesApi, LoadOutcome,
    MemoryView, ViewSyncController,
};
use shared::domain::{GameId, SortKey};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;
mod terminal;

use config::{load_settings, Settings};
use terminal::TerminalView;

#[derive(Parser, Debug)]
#[command(name = "games", about = "List, add and delete games on a REST collection")]
struct Cli {
    /// Base url of the API, e.g. http://localhost:3000
    #[arg(long)]
    api_url: Option<String>,
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long, default_value = "info")]
    log_level: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    List {
        #[arg(long)]
        sort: Option<SortKey>,
    },
    Add {
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        img: String,
        #[arg(long, default_value = "")]
        description: String,
    },
    Delete {
        id: String,
    },
    /// Print the list as HTML cards.
    Html {
        #[arg(long)]
        sort: Option<SortKey>,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut settings = load_settings(cli.config.as_deref())?;
    if let Some(api_url) = cli.api_url {
        settings.api_base_url = config::normalize_base_url(&api_url);
    }
    info!(
        api = %settings.api_base_url,
        collection = %settings.collection,
        "games: using collection"
    );

    run(cli.command, &settings, Box::new(std::io::stdout())).await
}

async fn run(
    command: Command,
    settings: &Settings,
    mut out: Box<dyn Write + Send>,
) -> Result<ExitCode> {
    let api = HttpGamesApi::with_collection(&settings.api_base_url, &settings.collection)
        .context("failed to build games api client")?;

    let code = match command {
        Command::List { sort } => {
            let controller = ViewSyncController::new(api, TerminalView::new(out));
            let outcome = controller
                .change_sort(sort.unwrap_or(settings.default_sort))
                .await;
            load_exit_code(outcome)
        }
        Command::Add {
            title,
            img,
            description,
        } => {
            let view = TerminalView::new(out).with_form(GameForm {
                title,
                img,
                description,
            });
            let controller = ViewSyncController::new(api, view);
            match controller.submit_form().await {
                CreateOutcome::Created(_) => ExitCode::SUCCESS,
                CreateOutcome::Rejected(_) | CreateOutcome::Failed => ExitCode::FAILURE,
            }
        }
        Command::Delete { id } => {
            let controller = ViewSyncController::new(api, TerminalView::new(out))
                .with_sort_key(settings.default_sort);
            match controller.delete_record(&GameId::from(id)).await {
                DeleteOutcome::Deleted | DeleteOutcome::NotFound => ExitCode::SUCCESS,
                DeleteOutcome::Failed => ExitCode::FAILURE,
            }
        }
        Command::Html { sort } => {
            let controller = ViewSyncController::new(api, MemoryView::new());
            let outcome = controller
                .load_list(sort.unwrap_or(settings.default_sort))
                .await;
            if outcome != LoadOutcome::Failed {
                let html = render_cards_html(&controller.into_view().cards);
                writeln!(out, "{html}").context("failed to write html")?;
            }
            load_exit_code(outcome)
        }
    };

    Ok(code)
}

fn load_exit_code(outcome: LoadOutcome) -> ExitCode {
    match outcome {
        LoadOutcome::Rendered { .. } => ExitCode::SUCCESS,
        LoadOutcome::Failed => ExitCode::FAILURE,
    }
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
