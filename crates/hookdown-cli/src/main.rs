mod app;
mod ui;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use hookdown_config::Config;
use hookdown_engine::{Mentions, RenderOptions, io, parse_with};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    env,
    fs::File,
    io::{Stdout, stdout},
    path::PathBuf,
    process,
};

use crate::app::{Action, App};

fn init_logging() {
    let mut builder = env_logger::Builder::from_default_env();
    // The TUI owns the terminal, so verbose logs only go to a file
    match env::var_os("HOOKDOWN_LOG_FILE").map(File::create) {
        Some(Ok(file)) => {
            builder
                .filter_level(log::LevelFilter::Info)
                .target(env_logger::Target::Pipe(Box::new(file)));
        }
        Some(Err(e)) => {
            eprintln!("Warning: cannot open HOOKDOWN_LOG_FILE: {e}");
            builder.filter_level(log::LevelFilter::Warn);
        }
        None => {
            builder.filter_level(log::LevelFilter::Warn);
        }
    }
    builder.init();
}

fn main() -> Result<()> {
    init_logging();

    let mut args: Vec<String> = env::args().collect();
    let program = args.remove(0);
    let json = match args.iter().position(|a| a == "--json") {
        Some(i) => {
            args.remove(i);
            true
        }
        None => false,
    };

    let config_path = Config::config_path();
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            eprintln!("Usage: {program} [--json] [draft-file]");
            process::exit(1);
        }
    };
    log::info!(
        "config {} at {}",
        if config.is_some() { "loaded" } else { "not found" },
        config_path.display()
    );

    let (mentions, render_options) = match &config {
        Some(config) => (config.mentions(), config.render_options()),
        None => (Mentions::default(), RenderOptions::default()),
    };

    let draft_path = match (args.as_slice(), &config) {
        ([path], _) => PathBuf::from(path),
        ([], Some(config)) => config.draft_path.clone(),
        ([], None) => {
            eprintln!("Error: No draft file provided and no config file found");
            eprintln!("Usage: {program} [--json] [draft-file]");
            eprintln!("Or create a config file at {}", config_path.display());
            process::exit(1);
        }
        _ => {
            eprintln!("Usage: {program} [--json] [draft-file]");
            process::exit(1);
        }
    };

    if let Err(e) = io::validate_draft_path(&draft_path) {
        eprintln!("Error: Draft path '{}' is invalid: {e}", draft_path.display());
        process::exit(1);
    }

    let content = io::read_draft_or_empty(&draft_path)?;

    if json {
        let segments = parse_with(&content, &mentions);
        println!("{}", serde_json::to_string_pretty(&segments)?);
        return Ok(());
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(draft_path, content, mentions, render_options);

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::ui(f, app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && app.handle_key(key) == Action::Quit
        {
            return Ok(());
        }
    }
}
