use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use card_recall::cards::Catalog;
use card_recall::core::RecallConfig;
use card_recall::engine::{GuessEngine, GuessField, GuessOutcome, KeyResponse, ViewStore};
use card_recall::ingest::{ingest, CardSource, IngestReport};
use card_recall::terminal::{write_board, BoardLayout, Output, TerminalField, TerminalRenderer};
use card_recall::view::{build_view, BuiltView, ViewRequest};

const LOG_TARGET: &str = "bin::card_recall";
const PROMPT: &str = "guess> ";

#[derive(Debug, Parser)]
#[command(name = "card_recall")]
#[command(about = "Guess the names of face-down cards", long_about = None)]
struct Args {
    /// JSON configuration file (missing file means defaults)
    #[arg(long, env = "CARD_RECALL_CONFIG")]
    config: Option<PathBuf>,

    /// Catalog file, overriding the configured path
    #[arg(long, env = "CARD_RECALL_CATALOG")]
    catalog: Option<PathBuf>,

    /// Toggle structured (JSON) logs
    #[arg(long, env = "CARD_RECALL_LOG_JSON", default_value_t = false)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Download card data and write the catalog
    Ingest {
        /// Read a local dump instead of downloading
        #[arg(long)]
        from_file: Option<PathBuf>,

        /// Where to write the catalog (defaults to the catalog path)
        #[arg(long)]
        out: Option<PathBuf>,

        /// Drop cards from sets missing in the set table
        #[arg(long, default_value_t = false)]
        mapped_only: bool,
    },

    /// Print the board for a rarity selection
    View {
        /// Rarity to include; repeat for several (none means all)
        #[arg(long)]
        rarity: Vec<String>,

        /// Print JSON instead of text
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Play in the terminal
    Play {
        /// Rarity to include; repeat for several (none means all)
        #[arg(long)]
        rarity: Vec<String>,

        /// Board rows visible at once
        #[arg(long, default_value_t = 6)]
        rows: usize,

        /// Cards per row
        #[arg(long, default_value_t = 6)]
        columns: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.json_logs)?;

    let mut config = match &args.config {
        Some(path) => RecallConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => RecallConfig::default(),
    };
    if let Some(path) = args.catalog {
        config = config.with_catalog_path(path);
    }

    match args.command {
        Command::Ingest {
            from_file,
            out,
            mapped_only,
        } => run_ingest(&config, from_file, out, mapped_only).await,
        Command::View { rarity, json } => run_view(&config, &rarity, json),
        Command::Play {
            rarity,
            rows,
            columns,
        } => run_play(&config, &rarity, rows, columns).await,
    }
}

fn init_tracing(json: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = fmt::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    if json {
        builder.json().flatten_event(true).init();
    } else {
        builder.compact().init();
    }

    Ok(())
}

async fn run_ingest(
    config: &RecallConfig,
    from_file: Option<PathBuf>,
    out: Option<PathBuf>,
    mapped_only: bool,
) -> Result<()> {
    let mut ingest_config = config.ingest.clone();
    if mapped_only {
        ingest_config = ingest_config.mapped_only();
    }
    let source = from_file.map_or(CardSource::Remote, CardSource::File);

    let report = ingest(&source, &ingest_config)
        .await
        .context("failed to ingest card data")?;

    let out = out.unwrap_or_else(|| config.catalog_path.clone());
    report
        .catalog
        .save(&out)
        .with_context(|| format!("failed to write catalog to {}", out.display()))?;
    info!(target: LOG_TARGET, path = %out.display(), cards = report.total(), "catalog written");

    print_report(&report);
    if !report.is_complete() {
        bail!("{} card records were skipped", report.issues.len());
    }
    Ok(())
}

fn print_report(report: &IngestReport) {
    println!("Status report:");
    for (set, count) in &report.found_counts {
        let status = if *count > 0 { "\u{2714}" } else { "\u{2718} (check set code)" };
        println!("{status} {set}: {count} cards");
    }
    if report.unmapped > 0 {
        println!("  {} cards from sets outside the table", report.unmapped);
    }
    for issue in &report.issues {
        println!("  skipped {issue}");
    }
    println!("Total cards saved: {}", report.total());
}

fn load_board(config: &RecallConfig, rarity: &[String]) -> Result<BuiltView> {
    let catalog = Catalog::load(&config.catalog_path)
        .with_context(|| format!("failed to load catalog {}", config.catalog_path.display()))?;
    let request = ViewRequest::from_selections(rarity);
    Ok(build_view(&catalog, &request, &config.view))
}

fn run_view(config: &RecallConfig, rarity: &[String], json: bool) -> Result<()> {
    let board = load_board(config, rarity)?;

    if json {
        let text = serde_json::to_string_pretty(&board).context("failed to encode view")?;
        println!("{text}");
        return Ok(());
    }

    if let Some(message) = board.state.message() {
        println!("{message}");
        return Ok(());
    }
    for set in &board.sets {
        println!("== {} ({} cards) ==", set.name, set.views.len());
        for view in &set.views {
            println!("  {:>2}  {} ({})", view.cost, view.display_name, view.rarity);
        }
    }
    Ok(())
}

async fn run_play(
    config: &RecallConfig,
    rarity: &[String],
    rows: usize,
    columns: usize,
) -> Result<()> {
    let board = load_board(config, rarity)?;
    if let Some(message) = board.state.message() {
        println!("{message}");
        return Ok(());
    }

    let out = Output::stdout();
    let layout = BoardLayout::new(&board, columns);
    let renderer = Arc::new(TerminalRenderer::new(layout, rows, out.clone()));
    let field = Arc::new(TerminalField::new(PROMPT, out.clone()));
    let engine = GuessEngine::new(
        config.engine.clone(),
        ViewStore::new(board.into_views()),
        Arc::clone(&renderer),
        Arc::clone(&field),
    );
    let submit_key = config.engine.submit_key.clone();

    print_board(&out, &renderer, &engine);
    out.line(format_args!(
        "Type card names to reveal them. :board shows the board, :quit exits."
    ));
    field.focus();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("failed to read input")? {
        match line.trim() {
            ":quit" => return Ok(()),
            ":board" => {
                print_board(&out, &renderer, &engine);
                field.focus();
                continue;
            }
            _ => {}
        }

        field.set_value(line);
        let response = engine.handle_key(&submit_key).await;
        if matches!(response, KeyResponse::Submitted(GuessOutcome::Ignored)) {
            field.focus();
        }

        if engine.progress().is_won() {
            engine.win_settled().await;
            return Ok(());
        }
    }

    warn!(target: LOG_TARGET, progress = %engine.progress(), "input closed before the board was cleared");
    Ok(())
}

fn print_board(
    out: &Output,
    renderer: &TerminalRenderer,
    engine: &GuessEngine<TerminalRenderer, TerminalField>,
) {
    let snapshot = engine.store().snapshot();
    let visible = renderer.visible_rows();
    let result = out.with(|w| write_board(w, renderer.layout(), &snapshot.views, visible));
    if let Err(err) = result {
        warn!(target: LOG_TARGET, %err, "failed to print board");
    }
    out.line(format_args!("{} revealed", engine.progress()));
}
