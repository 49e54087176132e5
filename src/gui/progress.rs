// src/gui/progress.rs
use std::sync::{Arc, Mutex};

use eframe::egui;

use crate::progress::Progress;

/// Progress sink for the egui frontend: updates the shared status line
/// and nudges the event loop awake.
pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    ctx: egui::Context,
    total: usize,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>, ctx: egui::Context, total: usize) -> Self {
        Self { status, ctx, total }
    }

    fn set_status(&self, msg: impl Into<String>) {
        *self.status.lock().unwrap() = msg.into();
        self.ctx.request_repaint();
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.set_status(s!("Loading..."));
    }
    fn log(&mut self, msg: &str) {
        self.set_status(s!(msg));
    }
    fn item_done(&mut self, done: usize) {
        if self.total == 0 {
            self.set_status(format!("Prepared {done}"));
        } else {
            self.set_status(format!("Prepared {done}/{}", self.total));
        }
    }
    fn finish(&mut self) {
        self.ctx.request_repaint();
    }
}
