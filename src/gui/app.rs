// src/gui/app.rs
use std::{
    collections::HashMap,
    error::Error,
    sync::{Arc, Mutex},
};

use eframe::egui;

use crate::{
    collect::NetDownloader,
    config::{consts::CHROME_ALLOWANCE, state::AppState},
    scrape,
    session::Session,
};

use super::{progress::GuiProgress, screens};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Gavel",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Menu,
    Loading,
    Guess,
    Review,
    Failed,
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    pub session: Session,
    pub screen: Screen,
    /// YES/NO overlay shown before abandoning the current screen
    pub confirm_exit: bool,

    // status line (workers write here)
    pub status: Arc<Mutex<String>>,
    pub failure: String,

    // guessing flow
    pub active: usize,
    pub guess_text: String,
    pub guess_error: String,

    // uploaded textures, one per results-list index
    textures: HashMap<usize, egui::TextureHandle>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        logf!("Init: window {}x{}", state.gui.window_w, state.gui.window_h);
        Self {
            state,
            session: Session::new(),
            screen: Screen::Menu,
            confirm_exit: false,
            status: Arc::new(Mutex::new(s!("Idle"))),
            failure: s!(),
            active: 0,
            guess_text: s!(),
            guess_error: s!(),
            textures: HashMap::new(),
        }
    }

    pub fn start_collecting(&mut self, ctx: &egui::Context) {
        let opts = &self.state.options;
        let fetcher = scrape::fetcher_for(opts.source, opts.filter_index);
        let disp_height = (self.state.gui.window_h as u32).saturating_sub(CHROME_ALLOWANCE);

        let col_prog = GuiProgress::new(Arc::clone(&self.status), ctx.clone(), opts.limit);
        let asm_prog = GuiProgress::new(Arc::clone(&self.status), ctx.clone(), opts.limit);
        let done_ctx = ctx.clone();

        self.session.start(
            fetcher,
            Box::new(NetDownloader),
            opts.limit,
            opts.difficulty,
            disp_height,
            (Box::new(col_prog), Box::new(asm_prog)),
            Box::new(move || done_ctx.request_repaint()),
        );

        self.active = 0;
        self.guess_text.clear();
        self.guess_error.clear();
        self.textures.clear();
        self.confirm_exit = false;
        self.screen = Screen::Loading;
    }

    /// Back to the menu. The menu screen finishes the file cleanup once
    /// the workers settle.
    pub fn return_to_menu(&mut self) {
        self.session.cancel();
        self.textures.clear();
        self.confirm_exit = false;
        self.screen = Screen::Menu;
    }

    /// Texture for results-list index `i`, decoded and uploaded once.
    pub fn texture_for(
        &mut self,
        ctx: &egui::Context,
        i: usize,
        path: &std::path::Path,
    ) -> Option<egui::TextureHandle> {
        if let Some(t) = self.textures.get(&i) {
            return Some(t.clone());
        }
        let img = match image::open(path) {
            Ok(img) => img.to_rgba8(),
            Err(e) => {
                loge!("Texture: {} ({e})", path.display());
                return None;
            }
        };
        let size = [img.width() as usize, img.height() as usize];
        let color = egui::ColorImage::from_rgba_unmultiplied(size, img.as_raw());
        let tex = ctx.load_texture(format!("work-{i}"), color, egui::TextureOptions::LINEAR);
        self.textures.insert(i, tex.clone());
        Some(tex)
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.gui.window_w = ctx.screen_rect().width();
        self.state.gui.window_h = ctx.screen_rect().height();

        egui::CentralPanel::default().show(ctx, |ui| {
            if self.confirm_exit {
                screens::confirm(ui, self);
                return;
            }
            match self.screen {
                Screen::Menu => screens::menu::draw(ui, self),
                Screen::Loading => screens::loading::draw(ui, self),
                Screen::Guess => screens::guess::draw(ui, self),
                Screen::Review => screens::review::draw(ui, self),
                Screen::Failed => screens::failed(ui, self),
            }
        });
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        // quitting mid-collection still cleans up: wait for the workers,
        // then drop whatever was not flagged keep
        self.session.shutdown();
        logf!("Exit");
    }
}
