use std::time::Instant;

use egui::Sense;
use gol_engine::{Board, Pattern};

use crate::{
    lang,
    settings::{BoardSettings, Settings, SettingsAction, SettingsMenu, keybinds::Keybind},
    surface::{EguiSurface, to_surface},
};

/// The egui id for the top panel.
const TOP_PANEL: &str = "Top_Panel";
/// The egui id for the settings panel.
pub(crate) const SETTINGS_PANEL: &str = "Settings_Panel";

/// Values given on the command line that take priority over the stored settings.
#[derive(Debug, Default)]
pub(crate) struct Overrides {
    pub(crate) cell_size: Option<f32>,
    pub(crate) ticks_per_second: Option<std::num::NonZeroU32>,
}

/// The actions a user can request through the buttons & keybinds.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
enum UserAction {
    Play,
    Stop,
    ToggleSimulation,
    StepGeneration,
    ClearBoard,
    ToggleSettings,
    RebuildBoard,
}

impl From<Keybind> for UserAction {
    fn from(keybind: Keybind) -> Self {
        match keybind {
            Keybind::SettingsMenu => UserAction::ToggleSettings,
            Keybind::ToggleSimulation => UserAction::ToggleSimulation,
            Keybind::StepGeneration => UserAction::StepGeneration,
            Keybind::ClearBoard => UserAction::ClearBoard,
        }
    }
}

impl From<SettingsAction> for UserAction {
    fn from(action: SettingsAction) -> Self {
        match action {
            SettingsAction::RebuildBoard => UserAction::RebuildBoard,
        }
    }
}

/// The struct that contains the data for the gui of my app.
pub struct CanvasApp {
    /// The board being simulated.
    ///
    /// It is built on the first frame, as the size of the area it is drawn in is not known before then.
    board: Option<Board>,
    /// The pattern every newly built board is seeded with.
    seed: Option<Pattern>,

    /// The persistent settings.
    settings: Settings,
    /// The menu for changing the settings.
    settings_menu: SettingsMenu,
}

impl CanvasApp {
    pub(crate) fn new(
        creation_context: &eframe::CreationContext<'_>,
        seed: Option<Pattern>,
        overrides: Overrides,
    ) -> Self {
        let mut settings = Settings::default();

        // Load stored configurations
        if let Some(storage) = creation_context.storage {
            if let Some(stored) = eframe::get_value(storage, Settings::SAVE_KEY) {
                settings = stored;
            };
        }

        if let Some(cell_size) = overrides.cell_size {
            settings.board.cell_size = cell_size;
        }
        if let Some(ticks_per_second) = overrides.ticks_per_second {
            settings.board.ticks_per_second = ticks_per_second;
        }

        Self {
            board: None,
            seed,
            settings,
            settings_menu: SettingsMenu::default(),
        }
    }

    /// Checks if any keybinds have been pressed & records the corresponding actions.
    fn check_keybinds(&mut self, ctx: &egui::Context, actions: &mut Vec<UserAction>) {
        let keybind = &mut self.settings.keybind;

        ctx.input_mut(|input| {
            actions.extend(keybind.pressed(input).into_iter().map(UserAction::from));
        })
    }

    /// Draws the controls along the top of the window.
    fn top_panel(&self, ctx: &egui::Context, actions: &mut Vec<UserAction>) {
        egui::TopBottomPanel::top(TOP_PANEL).show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button(lang::PLAY).clicked() {
                    actions.push(UserAction::Play);
                };
                if ui.button(lang::STOP).clicked() {
                    actions.push(UserAction::Stop);
                }
                if ui.button(lang::STEP).clicked() {
                    actions.push(UserAction::StepGeneration);
                }
                if ui.button(lang::CLEAR).clicked() {
                    actions.push(UserAction::ClearBoard);
                }

                if ui.button(lang::SETTINGS).clicked() {
                    actions.push(UserAction::ToggleSettings);
                }

                if let Some(board) = &self.board {
                    ui.separator();
                    ui.label(format!(
                        "{}{}  {}{}",
                        lang::GENERATION,
                        board.generation(),
                        lang::POPULATION,
                        board.population()
                    ));
                }
            });
        });
    }
}

/// Builds a board that fills the given area.
fn build_board(settings: &BoardSettings, seed: Option<&Pattern>, width: f32, height: f32) -> Board {
    let mut board = Board::new(width, height, settings.cell_size).with_palette(settings.palette);
    board.set_ticks_per_second(settings.ticks_per_second);

    if let Some(pattern) = seed {
        crate::seed_board(&mut board, pattern);
    }

    board
}

/// Applies a user action to the board.
fn apply_action(board: &mut Board, action: UserAction) {
    match action {
        UserAction::Play => {
            board.play();
        }
        UserAction::Stop => {
            board.stop();
        }
        UserAction::ToggleSimulation => {
            if !board.play() {
                board.stop();
            }
        }
        UserAction::StepGeneration => board.advance_generation(),
        UserAction::ClearBoard => board.clear(),
        // Handled by the app.
        UserAction::ToggleSettings | UserAction::RebuildBoard => {}
    }
}

impl eframe::App for CanvasApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut actions = Vec::new();

        self.check_keybinds(ctx, &mut actions);

        let mut settings_actions = Vec::new();
        self.settings_menu
            .draw(&mut self.settings, ctx, &mut settings_actions);
        actions.extend(settings_actions.into_iter().map(UserAction::from));

        self.top_panel(ctx, &mut actions);

        for action in &actions {
            match action {
                UserAction::ToggleSettings => self.settings_menu.open = !self.settings_menu.open,
                UserAction::RebuildBoard => self.board = None,
                _ => {}
            }
        }

        // Draws the central panel to provide the area for the board.
        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::click());
                let area = response.rect;

                let board = self.board.get_or_insert_with(|| {
                    build_board(
                        &self.settings.board,
                        self.seed.as_ref(),
                        area.width(),
                        area.height(),
                    )
                });

                board.set_palette(self.settings.board.palette);
                board.set_ticks_per_second(self.settings.board.ticks_per_second);

                // Toggles the state of a cell when it is clicked.
                if response.clicked() {
                    if let Some(pointer) = response.interact_pointer_pos() {
                        let (x, y) = to_surface(area.min, pointer);
                        board.toggle_at(x, y);
                    }
                }

                for action in actions {
                    apply_action(board, action);
                }

                board.poll_at(Instant::now());
                board.render(&mut EguiSurface::new(&painter, area.min));

                // Wake up in time for the next generation.
                if let Some(wait) = board.time_until_next_tick(Instant::now()) {
                    ctx.request_repaint_after(wait);
                }
            });
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, Settings::SAVE_KEY, &self.settings);
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    /// The toggle action starts an idle board & stops a running one.
    fn toggle_simulation() {
        let mut board = Board::new(150.0, 150.0, 50.0);

        apply_action(&mut board, UserAction::ToggleSimulation);
        assert!(board.is_running());

        apply_action(&mut board, UserAction::ToggleSimulation);
        assert!(!board.is_running());
    }

    #[test]
    /// Playing twice through the buttons keeps a single running timer.
    fn play_twice() {
        let mut board = Board::new(150.0, 150.0, 50.0);

        apply_action(&mut board, UserAction::Play);
        let first = board.run_mode();
        std::thread::sleep(Duration::from_millis(2));
        apply_action(&mut board, UserAction::Play);

        assert_eq!(board.run_mode(), first);
    }

    #[test]
    /// A newly built board uses the stored settings.
    fn built_from_settings() {
        let settings = BoardSettings {
            cell_size: 25.0,
            ticks_per_second: std::num::NonZeroU32::new(5).unwrap(),
            ..Default::default()
        };
        let seed: Pattern = "###".parse().unwrap();

        let board = build_board(&settings, Some(&seed), 100.0, 75.0);
        assert_eq!(board.dimensions().rows(), 3);
        assert_eq!(board.dimensions().columns(), 4);
        assert_eq!(board.tick_period(), Duration::from_millis(200));
        assert_eq!(board.population(), 3);
    }
}
