use egui::{InputState, Key, KeyboardShortcut, Modifiers};
use egui_keybind::{Bind, Shortcut};
use enum_iterator::Sequence;

/// The keybind identifiers that this application is listening for.
#[derive(serde::Deserialize, serde::Serialize, Debug, PartialEq, Eq, Clone, Copy, Sequence)]
pub(crate) enum Keybind {
    SettingsMenu,
    ToggleSimulation,
    StepGeneration,
    ClearBoard,
}

impl Keybind {
    /// The text shown next to the keybind in the settings menu.
    pub(crate) fn label(self) -> &'static str {
        use crate::lang;

        match self {
            Keybind::SettingsMenu => lang::KEYBIND_SETTINGS_MENU,
            Keybind::ToggleSimulation => lang::KEYBIND_TOGGLE_SIMULATION,
            Keybind::StepGeneration => lang::KEYBIND_STEP_GENERATION,
            Keybind::ClearBoard => lang::KEYBIND_CLEAR_BOARD,
        }
    }

    pub(crate) fn get_default(self) -> KeybindData {
        let shortcut = match self {
            Keybind::SettingsMenu => Shortcut::new(
                Some(KeyboardShortcut::new(
                    Modifiers::CTRL | Modifiers::SHIFT,
                    Key::D,
                )),
                None,
            ),
            Keybind::ToggleSimulation => {
                Shortcut::new(Some(KeyboardShortcut::new(Modifiers::NONE, Key::P)), None)
            }
            Keybind::StepGeneration => {
                Shortcut::new(Some(KeyboardShortcut::new(Modifiers::NONE, Key::N)), None)
            }
            Keybind::ClearBoard => {
                Shortcut::new(Some(KeyboardShortcut::new(Modifiers::CTRL, Key::Delete)), None)
            }
        };

        KeybindData {
            keybind: self,
            shortcut,
        }
    }
}

/// A combination of a keybind identifier and the input data needed to trigger the keybind.
#[derive(serde::Deserialize, serde::Serialize, Debug, Clone)]
pub(crate) struct KeybindData {
    /// Keybind identifier
    keybind: Keybind,
    /// Trigger
    shortcut: Shortcut,
}

impl PartialEq<Keybind> for KeybindData {
    fn eq(&self, other: &Keybind) -> bool {
        self.keybind == *other
    }
}

/// Holds the collection of [`Keybind`]s and their corresponding [`Shortcut`]s.
#[derive(serde::Deserialize, serde::Serialize, Debug, Clone)]
#[serde(from = "Vec<KeybindData>", into = "Vec<KeybindData>")]
pub(crate) struct KeybindHolder {
    /// The keybinds this application is listening for.
    ///
    /// It is guaranteed that each keybind will have one and exactly one entry in this vector.
    keybinds: Vec<KeybindData>,
}

impl Default for KeybindHolder {
    fn default() -> Self {
        Self {
            keybinds: enum_iterator::all::<Keybind>()
                .map(|keybind| keybind.get_default())
                .collect(),
        }
    }
}

impl From<Vec<KeybindData>> for KeybindHolder {
    /// Restores stored keybinds, adding defaults for any keybind missing from storage & dropping duplicates.
    fn from(stored: Vec<KeybindData>) -> Self {
        let mut keybinds: Vec<KeybindData> = Vec::new();
        for data in stored {
            if !keybinds.iter().any(|existing| *existing == data.keybind) {
                keybinds.push(data);
            }
        }

        for keybind in enum_iterator::all::<Keybind>() {
            if !keybinds.iter().any(|existing| *existing == keybind) {
                keybinds.push(keybind.get_default());
            }
        }

        Self { keybinds }
    }
}

impl From<KeybindHolder> for Vec<KeybindData> {
    fn from(holder: KeybindHolder) -> Self {
        holder.keybinds
    }
}

impl KeybindHolder {
    /// Returns an instance of a [`Shortcut`] that will trigger the given [`Keybind`].
    #[cfg(test)]
    pub(crate) fn get_shortcut(&self, keybind: Keybind) -> Option<Shortcut> {
        self.keybinds
            .iter()
            .find(|data| **data == keybind)
            .map(|data| data.shortcut)
    }

    /// Returns a mutable reference to the [`Shortcut`] that the given [`Keybind`] will be triggered by.
    pub(crate) fn get_shortcut_mut(&mut self, keybind: Keybind) -> Option<&mut Shortcut> {
        self.keybinds
            .iter_mut()
            .find(|data| **data == keybind)
            .map(|data| &mut data.shortcut)
    }

    /// Resets the [`Shortcut`] of the given [`Keybind`] to its default value.
    pub(crate) fn reset(&mut self, keybind: Keybind) {
        self.keybinds
            .iter_mut()
            .filter(|data| **data == keybind)
            .for_each(|data| *data = keybind.get_default());
    }

    /// Returns the [`Keybind`]s that have been triggered by the given [`InputState`].
    ///
    /// If a keybind has been pressed, then it consumes the input keys. This prevents any other matches.
    /// Due to this keybinds are checked via the most complex keybinds (ones with the most keys) first.
    pub(crate) fn pressed(&mut self, input_state: &mut InputState) -> Vec<Keybind> {
        // Ensure that the keybinds are in the correct order.
        self.sort();

        self.keybinds
            .iter()
            .filter_map(|data| data.shortcut.pressed(input_state).then_some(data.keybind))
            .collect()
    }

    /// Sorts the internal keybind data structure, such that more complex keybinds are towards the front of the vector.
    fn sort(&mut self) {
        // Not unstable so that keybind order remains consistent.
        self.keybinds.sort_by_key(|data| {
            let mut weight = u8::MAX;

            let keyboard_shortcut = match data.shortcut.keyboard() {
                Some(var) => var,
                None => return weight,
            };

            if keyboard_shortcut.modifiers.alt {
                weight -= 1;
            }
            if keyboard_shortcut.modifiers.shift {
                weight -= 1;
            }
            // Use command attribute rather than "ctrl" or "mac_cmd" to eliminate for platform independence.
            if keyboard_shortcut.modifiers.command {
                weight -= 1;
            }

            weight
        });
    }
}
