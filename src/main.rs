//! `herodex` interactive shell.
//!
//! Reads one command per line from stdin and prints the render model after
//! every change. Fetch results arrive asynchronously and trigger a re-print
//! when they are applied.

use clap::Parser;
use herodex::observability::init_tracing;
use herodex::ui::render_text;
use herodex::{Config, HeroId, HttpCatalog, Session};
use std::path::PathBuf;
use std::process::ExitCode;
use tokio::io::{AsyncBufReadExt, BufReader};

const HELP: &str = "commands: q <text> | n | p | f <id> | s <id> | x | quit";

#[derive(Parser, Debug)]
#[command(name = "herodex")]
#[command(about = "Search, page through and favorite superheroes", long_about = None)]
#[command(version)]
struct Cli {
    /// TOML configuration file
    #[arg(short, long, env = "HERODEX_CONFIG")]
    config: Option<PathBuf>,

    /// Catalog base URL (fetches `<base-url>/all.json`)
    #[arg(long)]
    base_url: Option<String>,

    /// Heroes per page
    #[arg(long)]
    page_size: Option<usize>,

    /// Tracing filter directive, e.g. "debug" or "herodex=trace"
    #[arg(long)]
    trace_level: Option<String>,

    /// Print the render model as JSON instead of text
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn resolve_config(&self) -> herodex::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };

        if let Some(base_url) = &self.base_url {
            config.base_url.clone_from(base_url);
        }
        if let Some(page_size) = self.page_size {
            config.page_size = page_size;
        }
        if self.trace_level.is_some() {
            config.trace_level.clone_from(&self.trace_level);
        }

        config.validate()?;
        Ok(config)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Query(String),
    Next,
    Prev,
    Favorite(HeroId),
    Show(HeroId),
    Deselect,
    Help,
    Quit,
}

impl Command {
    fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        let (verb, rest) = line.split_once(' ').unwrap_or((line, ""));
        let rest = rest.trim();

        match verb {
            "q" => Ok(Self::Query(rest.to_string())),
            "n" => Ok(Self::Next),
            "p" => Ok(Self::Prev),
            "f" => parse_id(rest).map(Self::Favorite),
            "s" => parse_id(rest).map(Self::Show),
            "x" => Ok(Self::Deselect),
            "h" | "help" | "?" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            "" => Err(HELP.to_string()),
            other => Err(format!("unknown command '{other}'; {HELP}")),
        }
    }
}

fn parse_id(raw: &str) -> Result<HeroId, String> {
    raw.parse()
        .map_err(|_| format!("expected a hero id, got '{raw}'"))
}

/// Applies `command`, returning whether the view changed.
fn apply(session: &mut Session<HttpCatalog>, command: Command) -> bool {
    match command {
        Command::Query(text) => session.set_query(text),
        Command::Next => session.next_page(),
        Command::Prev => session.prev_page(),
        Command::Favorite(id) => session.toggle_favorite(id),
        Command::Show(id) => session.select_for_detail(id),
        Command::Deselect => session.clear_selection(),
        Command::Help => {
            println!("{HELP}");
            false
        }
        Command::Quit => false,
    }
}

fn print_model(session: &Session<HttpCatalog>, json: bool) {
    let model = session.render_model();
    if json {
        match serde_json::to_string_pretty(&model) {
            Ok(text) => println!("{text}"),
            Err(e) => eprintln!("failed to serialize render model: {e}"),
        }
    } else {
        println!("{}", render_text(&model));
    }
}

async fn run(cli: Cli) -> herodex::Result<()> {
    let config = cli.resolve_config()?;
    init_tracing(&config);
    tracing::debug!(base_url = %config.base_url, page_size = config.page_size, "starting herodex");

    let catalog = HttpCatalog::new(&config)?;
    let mut session = Session::new(&config, catalog);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    print_model(&session, cli.json);

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match Command::parse(&line) {
                    Ok(Command::Quit) => break,
                    Ok(command) => {
                        if apply(&mut session, command) {
                            print_model(&session, cli.json);
                        }
                    }
                    Err(message) => eprintln!("{message}"),
                }
            }
            Some(changed) = session.next_response() => {
                if changed {
                    print_model(&session, cli.json);
                }
            }
        }
    }

    tracing::debug!("herodex shell exiting");
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("herodex: {e}");
            ExitCode::FAILURE
        }
    }
}
