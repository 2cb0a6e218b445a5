#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use std::{error::Error, path::Path};

use app::{CanvasApp, Overrides};
use app_dirs2::{AppDataType, AppInfo, get_app_root};
use args::Args;
use clap::Parser;
use gol_engine::{Board, GridPosition, Pattern};

mod app;
mod args;
mod settings;
mod surface;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let args = Args::parse();

    // A missing pattern should not prevent the board from being used.
    let seed = args.pattern.as_deref().and_then(|path| {
        read_pattern(path)
            .inspect_err(|err| log::error!("{} {:?} - {}", error_text::PATTERN_LOAD, path, err))
            .ok()
    });

    if args.headless {
        run_headless(&args, seed.as_ref());
        return Ok(());
    }

    let mut config_path = match args.config_path {
        Some(config_path) => config_path,
        None => get_app_root(AppDataType::UserConfig, &APP_INFO)
            .inspect_err(|_| eprintln!("{}", error_text::CONFIG_DIR))?,
    };
    std::fs::create_dir_all(config_path.as_path())?;
    config_path.push("config_data.json");

    let overrides = Overrides {
        cell_size: args.cell_size,
        ticks_per_second: args.ticks_per_second,
    };

    // Start UI.
    let native_options = eframe::NativeOptions {
        // Takes path to file, not dir.
        persistence_path: Some(config_path),
        ..Default::default()
    };

    eframe::run_native(
        lang::APP_NAME,
        native_options,
        Box::new(|cc| Ok(Box::new(CanvasApp::new(cc, seed, overrides)))),
    )
    .inspect_err(|_| eprintln!("{}", error_text::UI_INIT))?;

    Ok(())
}

/// Reads & parses a plain text pattern file.
fn read_pattern(path: &Path) -> Result<Pattern, Box<dyn Error>> {
    let text = std::fs::read_to_string(path)?;
    Ok(text.parse()?)
}

/// Writes the pattern onto the centre of the board.
///
/// A pattern that does not fit is logged & the board is left empty.
pub(crate) fn seed_board(board: &mut Board, pattern: &Pattern) {
    let dimensions = board.dimensions();
    let pattern_rows = pattern.rows().len();
    let pattern_columns = pattern.rows().iter().map(|row| row.len()).max().unwrap_or(0);

    let origin = GridPosition::new(
        dimensions.rows().saturating_sub(pattern_rows) / 2,
        dimensions.columns().saturating_sub(pattern_columns) / 2,
    );

    match board.load_pattern(origin, pattern) {
        Ok(alive) => log::info!("Seeded board with {alive} alive cells at {origin}"),
        Err(err) => log::error!("{} - {}", error_text::PATTERN_FIT, err),
    }
}

/// Runs the board in the terminal, printing every generation.
fn run_headless(args: &Args, seed: Option<&Pattern>) {
    let cell_size = args.cell_size.unwrap_or(gol_engine::DEFAULT_CELL_SIZE);
    let mut board = Board::new(args.width, args.height, cell_size);
    if let Some(ticks_per_second) = args.ticks_per_second {
        board.set_ticks_per_second(ticks_per_second);
    }
    if let Some(pattern) = seed {
        seed_board(&mut board, pattern);
    }

    println!("{}0\n{board}", lang::GENERATION);
    if args.generations == 0 {
        return;
    }

    board.play();
    gol_engine::run_with_callback(&mut board, args.generations, |remaining, board| {
        println!("{}{}\n{board}", lang::GENERATION, board.generation());

        *remaining -= 1;
        if *remaining == 0 {
            board.stop();
        }
    });
}

/// The information used to get the default save locations.
pub const APP_INFO: AppInfo = AppInfo {
    name: "game_of_life-canvas",
    author: "tye",
};

/// Creates a public constant string with the name as the name of the constant
/// and the text as the value of the string.
///
/// # Examples
/// ```ignore
/// lang!{QUOTE, "Ya like jazz?"}
/// assert_eq!(QUOTE, "Ya like jazz?");
/// ```
#[macro_export]
macro_rules! lang {
    {$($name:tt, $text:literal);*} => {
        $(
        pub const $name: &str = $text;
        )*
    };
}

mod error_text {
    lang! {
        UI_INIT, "Unable to initialise UI graphical context.";
        CONFIG_DIR, "Unable to find a directory for the user configuration.";
        PATTERN_LOAD, "Unable to load pattern";
        PATTERN_FIT, "Pattern does not fit on the board"
    }
}

mod lang {
    use crate::lang;

    lang! {
        APP_NAME, "Game Of Life";
        PLAY, "Play";
        STOP, "Stop";
        STEP, "Step";
        CLEAR, "Clear";
        SETTINGS, "Settings";
        GENERATION, "Generation: ";
        POPULATION, "Alive: ";
        SETTINGS_LABEL, "Settings";
        SETTINGS_CLOSE, "Close";
        SETTINGS_RESET, "Reset";
        SETTINGS_BOARD_HEADER, "Board";
        SETTINGS_CELL_ALIVE_COLOUR, "Alive colour";
        SETTINGS_CELL_DEAD_COLOUR, "Dead colour";
        SETTINGS_GRID_LINE_COLOUR, "Grid line colour";
        SETTINGS_TICKS_PER_SECOND, "Generations per second";
        SETTINGS_CELL_SIZE, "Cell size";
        SETTINGS_REBUILD_BOARD, "Rebuild board";
        SETTINGS_REBUILD_BOARD_HOVER, "Discards the current board & builds a new one to fit the window";
        SETTINGS_KEYBIND_HEADER, "Keybinds";
        KEYBIND_SETTINGS_MENU, "Toggle settings menu";
        KEYBIND_TOGGLE_SIMULATION, "Play/stop simulation";
        KEYBIND_STEP_GENERATION, "Step one generation";
        KEYBIND_CLEAR_BOARD, "Clear board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// Patterns are placed in the centre of the board.
    fn seed_centres_pattern() {
        let mut board = Board::new(250.0, 250.0, 50.0);
        let pattern: Pattern = "###".parse().unwrap();

        seed_board(&mut board, &pattern);
        assert_eq!(board.to_string(), ".....\n.....\n.###.\n.....\n.....\n");
    }

    #[test]
    /// A pattern larger than the board leaves it empty.
    fn seed_too_large() {
        let mut board = Board::new(100.0, 100.0, 50.0);
        let pattern: Pattern = "###".parse().unwrap();

        seed_board(&mut board, &pattern);
        assert_eq!(board.population(), 0);
    }

    #[test]
    /// Unreadable pattern files are an error.
    fn missing_pattern_file() {
        assert!(read_pattern(Path::new("/does/not/exist.cells")).is_err());
    }
}
