// src/main.rs
mod app;
mod clipboard;
mod config;
mod favorites;
mod ideas;
mod input;
mod logging;
mod models;
mod prompts;
mod storage;
mod theme;
mod ui;

use std::{io, path::PathBuf, time::Duration};

use anyhow::{bail, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use crate::app::App;
use crate::clipboard::SystemClipboard;
use crate::config::Settings;
use crate::favorites::{next_numeric_id, FavoritesStore};
use crate::ideas::{Catalog, IdeaSelector};
use crate::input::handle_key;
use crate::models::{Category, FavoriteId, NewFavorite};
use crate::storage::{FileStore, KeyValueStore, MemoryStore};
use crate::theme::Theme;

#[derive(Parser)]
#[command(name = "whatshallimake", version, about = "Random idea prompts with saved favorites")]
struct Cli {
    /// Category to start on (overrides the config file)
    #[arg(short, long, value_enum)]
    category: Option<Category>,

    /// Directory for favorites and logs
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Keep favorites in memory only; nothing is written to disk
    #[arg(long)]
    ephemeral: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print random ideas without starting the UI
    Pick {
        #[arg(value_enum)]
        category: Option<Category>,

        /// How many ideas to print (never the same one twice in a row)
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
    },
    /// Manage saved favorites
    #[command(subcommand)]
    Favorites(FavoritesCommand),
}

#[derive(Subcommand)]
enum FavoritesCommand {
    /// Show saved favorites, newest first
    List {
        #[arg(long)]
        json: bool,
    },
    /// Save a favorite
    Save {
        #[arg(value_enum)]
        category: Category,
        text: String,
    },
    /// Remove a favorite by id
    Remove { id: FavoriteId },
    /// Remove all favorites
    Clear,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings = Settings::new().unwrap_or_else(|e| {
        eprintln!("Could not load settings ({e}), using defaults");
        Settings::default()
    });
    let data_dir = match cli.data_dir.clone() {
        Some(dir) => dir,
        None => settings.data_dir()?,
    };
    let store: Box<dyn KeyValueStore> = if cli.ephemeral {
        Box::new(MemoryStore::new())
    } else {
        Box::new(FileStore::new(&data_dir))
    };
    let favorites = FavoritesStore::new(store);
    let category = cli.category.unwrap_or(settings.default_category);

    match cli.command {
        Some(command) => {
            logging::init_stderr_logging(settings.log_level.as_deref())?;
            run_command(command, category, &favorites)
        }
        None => {
            let _guard = logging::init_file_logging(&data_dir.join("logs"), settings.log_level.as_deref())
                .inspect_err(|e| eprintln!("File logging disabled: {e}"))
                .ok();
            tracing::info!(data_dir = %data_dir.display(), ephemeral = cli.ephemeral, "starting");

            let mut app = App::new(
                IdeaSelector::new(Catalog::builtin()),
                favorites,
                Box::new(SystemClipboard::new()),
                category,
                Duration::from_millis(settings.flash_millis),
            );
            run_tui(&mut app, !cli.ephemeral)
        }
    }
}

fn run_command<S: KeyValueStore>(
    command: Command,
    category: Category,
    favorites: &FavoritesStore<S>,
) -> Result<()> {
    match command {
        Command::Pick { category: picked, count } => {
            let category = picked.unwrap_or(category);
            let mut selector = IdeaSelector::new(Catalog::builtin());
            for _ in 0..count {
                match selector.pick(category) {
                    Some(idea) => println!("{idea}"),
                    None => bail!("No ideas in category '{category}'"),
                }
            }
        }
        Command::Favorites(FavoritesCommand::List { json }) => {
            let list = favorites.try_list()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&list)?);
            } else if list.is_empty() {
                println!("No favorites yet. Save some ideas!");
            } else {
                for fav in &list {
                    println!("{}\t{}\t{}", fav.id, fav.category.label(), fav.text);
                }
            }
        }
        Command::Favorites(FavoritesCommand::Save { category, text }) => {
            let now = Utc::now().timestamp_millis();
            let id = next_numeric_id(&favorites.try_list()?, now);
            favorites.try_insert(NewFavorite::new(id.clone(), category, text).with_timestamp(now))?;
            println!("{id}");
        }
        Command::Favorites(FavoritesCommand::Remove { id }) => {
            favorites.try_remove(&id)?;
        }
        Command::Favorites(FavoritesCommand::Clear) => {
            favorites.try_clear()?;
        }
    }
    Ok(())
}

fn run_tui<S: KeyValueStore>(app: &mut App<S>, remember_category: bool) -> Result<()> {
    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, app, remember_category);

    terminal::disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    result
}

fn event_loop<B: Backend, S: KeyValueStore>(
    terminal: &mut Terminal<B>,
    app: &mut App<S>,
    remember_category: bool,
) -> Result<()> {
    let theme = Theme::default();
    loop {
        terminal.draw(|f| ui::render(f, app, &theme))?;

        if event::poll(Duration::from_millis(200))? {
            if let Event::Key(key_event) = event::read()? {
                if key_event.kind != KeyEventKind::Press {
                    continue;
                }
                if !handle_key(key_event.code, app)? {
                    break;
                }
                if let Some(category) = app.take_category_change() {
                    if remember_category {
                        if let Err(e) = config::save_default_category(category) {
                            tracing::warn!(error = %e, "could not remember category");
                        }
                    }
                }
            }
        }
    }
    tracing::info!("bye");
    Ok(())
}
