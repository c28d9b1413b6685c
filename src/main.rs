use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use playlist_shelf::render::render;
use playlist_shelf::{App, FileSlot, ShelfError, ShelfStore, DISSOLVE_DELAY};
use std::path::PathBuf;
use std::thread;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "playlist-shelf")]
#[command(about = "Save labeled Spotify playlist links, grouped by label", long_about = None)]
struct Args {
    /// Path to the shelf file (default: platform data directory)
    #[arg(short = 's', long)]
    store: Option<String>,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the shelf grouped by label
    List,

    /// Validate and save a new playlist link
    Add {
        /// Spotify playlist URL
        url: String,

        /// Label to group it under
        label: String,
    },

    /// Replace the entry at a display position
    Edit {
        /// Position as shown by `list` (1-based)
        position: usize,

        /// New playlist URL
        url: String,

        /// New label
        label: String,
    },

    /// Remove the entry at a display position, with dissolve animation
    Remove {
        /// Position as shown by `list` (1-based)
        position: usize,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let slot = FileSlot::new(shelf_path(args.store.as_deref())?);
    log::debug!("Shelf file: {:?}", slot.path());
    let mut app = App::new(ShelfStore::new(slot));

    if let Err(e) = run(&mut app, args.command) {
        match e {
            ShelfError::InvalidUrl => {
                eprintln!("Please enter a valid Spotify playlist URL.");
                std::process::exit(1);
            }
            ShelfError::Position(index) => {
                eprintln!("no entry at position {}", index + 1);
                std::process::exit(1);
            }
            ShelfError::Storage(e) => return Err(e),
        }
    }

    Ok(())
}

fn run(app: &mut App<FileSlot>, command: Command) -> Result<(), ShelfError> {
    match command {
        Command::List => {
            print!("{}", render(&app.view()?, None));
        }

        Command::Add { url, label } => {
            app.add(&url, &label)?;
            print!("{}", render(&app.view()?, None));
        }

        Command::Edit {
            position,
            url,
            label,
        } => {
            let display_index = to_display_index(position)?;
            let previous = app.begin_edit(display_index)?;
            log::debug!("Editing entry previously at {}", previous.url);
            app.confirm_edit(&url, &label)?;
            print!("{}", render(&app.view()?, None));
        }

        Command::Remove { position } => {
            let display_index = to_display_index(position)?;
            let pending = app.request_delete(display_index, Instant::now())?;

            print!("{}", render(&app.view()?, Some(&pending)));
            thread::sleep(DISSOLVE_DELAY);
            app.poll_delete(Instant::now())?;

            println!();
            print!("{}", render(&app.view()?, None));
        }
    }

    Ok(())
}

/// Convert a 1-based CLI position to a 0-based display index
fn to_display_index(position: usize) -> Result<usize, ShelfError> {
    position.checked_sub(1).ok_or(ShelfError::Position(0))
}

/// Resolve the shelf file path, expanding ~ in overrides
fn shelf_path(override_path: Option<&str>) -> Result<PathBuf> {
    if let Some(raw) = override_path {
        let expanded = shellexpand::tilde(raw);
        return Ok(PathBuf::from(expanded.as_ref()));
    }

    let data_dir = dirs::data_dir().context("Could not determine the platform data directory")?;
    Ok(data_dir.join("playlist-shelf").join("playlists.json"))
}
