// src/config/state.rs
use super::options::GameOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: f32,
    pub window_h: f32,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: super::consts::WINDOW_W,
            window_h: super::consts::WINDOW_H,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: GameOptions,
    pub gui: GuiState,
}
