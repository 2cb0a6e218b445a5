pub(crate) mod keybinds;

use std::num::NonZeroU32;

use gol_engine::{Colour, DEFAULT_CELL_SIZE, Palette};
use keybinds::{Keybind, KeybindHolder};

use crate::{app::SETTINGS_PANEL, lang};

#[derive(serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(default)]
pub(crate) struct Settings {
    pub(crate) board: BoardSettings,
    pub(crate) keybind: KeybindHolder,
}

impl Settings {
    /// The key used for saving the configuration with [`eframe::set_value`] & [`eframe::get_value`]
    pub(crate) const SAVE_KEY: &str = "game_of_life";
}

#[derive(serde::Deserialize, serde::Serialize, Debug, PartialEq)]
#[serde(default)]
pub(crate) struct BoardSettings {
    /// The colours used to draw the board.
    pub(crate) palette: Palette,
    /// The size of each cell. Only applies when the board is rebuilt.
    pub(crate) cell_size: f32,
    /// The amount of generations per second whilst playing.
    pub(crate) ticks_per_second: NonZeroU32,
}

impl Default for BoardSettings {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            cell_size: DEFAULT_CELL_SIZE,
            ticks_per_second: NonZeroU32::MIN,
        }
    }
}

/// Requests made by the settings menu that the app must act on.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub(crate) enum SettingsAction {
    /// Discard the current board & build a new one with the current settings.
    RebuildBoard,
}

pub(crate) struct SettingsMenu {
    // Whether the menu is open.
    pub(crate) open: bool,

    // The sub-menus, drawn in order.
    sub_menus: Box<[Box<dyn Menu>]>,
}

impl SettingsMenu {
    pub(crate) fn draw(
        &mut self,
        settings: &mut Settings,
        ctx: &egui::Context,
        actions: &mut Vec<SettingsAction>,
    ) -> Option<egui::InnerResponse<()>> {
        egui::SidePanel::left(SETTINGS_PANEL).show_animated(ctx, self.open, |ui| {
            ui.horizontal(|ui| {
                if ui.button(lang::SETTINGS_CLOSE).clicked() {
                    self.open = false;
                }
                ui.separator();
                ui.label(lang::SETTINGS_LABEL);
            });

            ui.separator();

            for menu in &mut self.sub_menus {
                menu.draw(settings, ui, actions);
            }
        })
    }
}

impl Default for SettingsMenu {
    fn default() -> Self {
        Self {
            open: false,
            sub_menus: Box::new([Box::new(BoardMenu), Box::new(KeybindMenu)]),
        }
    }
}

pub(crate) trait Menu {
    fn draw(&mut self, settings: &mut Settings, ui: &mut egui::Ui, actions: &mut Vec<SettingsAction>);
}

struct BoardMenu;
struct KeybindMenu;

/// Draws a colour picker for an engine colour, with a button to reset it.
fn colour_row(ui: &mut egui::Ui, label: &str, colour: &mut Colour, default: Colour) {
    ui.horizontal(|ui| {
        ui.label(label);

        let mut srgb = [colour.r, colour.g, colour.b];
        if ui.color_edit_button_srgb(&mut srgb).changed() {
            *colour = Colour::rgb(srgb[0], srgb[1], srgb[2]);
        }

        if ui.small_button(lang::SETTINGS_RESET).clicked() {
            *colour = default;
        }
    });
}

impl Menu for BoardMenu {
    fn draw(&mut self, settings: &mut Settings, ui: &mut egui::Ui, actions: &mut Vec<SettingsAction>) {
        let defaults = BoardSettings::default();
        let board = &mut settings.board;

        egui::CollapsingHeader::new(lang::SETTINGS_BOARD_HEADER).show(ui, |ui| {
            colour_row(
                ui,
                lang::SETTINGS_CELL_ALIVE_COLOUR,
                &mut board.palette.alive,
                defaults.palette.alive,
            );
            colour_row(
                ui,
                lang::SETTINGS_CELL_DEAD_COLOUR,
                &mut board.palette.dead,
                defaults.palette.dead,
            );
            colour_row(
                ui,
                lang::SETTINGS_GRID_LINE_COLOUR,
                &mut board.palette.grid_line,
                defaults.palette.grid_line,
            );

            ui.horizontal(|ui| {
                ui.label(lang::SETTINGS_TICKS_PER_SECOND);
                let mut ticks_per_second = board.ticks_per_second.get();
                ui.add(egui::Slider::new(&mut ticks_per_second, 1..=60));
                board.ticks_per_second = NonZeroU32::new(ticks_per_second).unwrap_or(NonZeroU32::MIN);
                if ui.small_button(lang::SETTINGS_RESET).clicked() {
                    board.ticks_per_second = defaults.ticks_per_second;
                }
            });

            ui.horizontal(|ui| {
                ui.label(lang::SETTINGS_CELL_SIZE);
                ui.add(egui::Slider::new(&mut board.cell_size, 10.0..=100.0));
                if ui.small_button(lang::SETTINGS_RESET).clicked() {
                    board.cell_size = defaults.cell_size;
                }
            });

            if ui
                .button(lang::SETTINGS_REBUILD_BOARD)
                .on_hover_text(lang::SETTINGS_REBUILD_BOARD_HOVER)
                .clicked()
            {
                actions.push(SettingsAction::RebuildBoard);
            }
        });
    }
}

impl Menu for KeybindMenu {
    fn draw(&mut self, settings: &mut Settings, ui: &mut egui::Ui, _actions: &mut Vec<SettingsAction>) {
        egui::CollapsingHeader::new(lang::SETTINGS_KEYBIND_HEADER).show(ui, |ui| {
            for keybind in enum_iterator::all::<Keybind>() {
                ui.horizontal(|ui| {
                    ui.label(keybind.label());
                    if let Some(shortcut) = settings.keybind.get_shortcut_mut(keybind) {
                        ui.add(egui_keybind::Keybind::new(shortcut, keybind.label()));
                    }
                    if ui.small_button(lang::SETTINGS_RESET).clicked() {
                        settings.keybind.reset(keybind);
                    }
                });
            }
        });
    }
}
