// src/assemble.rs

// Consumer half of the pipeline. Blocking-reads staged items until the
// sentinel, derives display geometry and the acceptance band, and
// appends to the shared results list in arrival order.

use std::{
    sync::mpsc::Receiver,
    thread::{self, JoinHandle},
};

use crate::{
    config::{consts::REVIEW_WIDTH, options::Difficulty},
    progress::Progress,
    work::{acceptance_band, Guesswork, Staged, WorkList},
};

pub struct Assembler {
    handle: JoinHandle<Result<(), String>>,
}

impl Assembler {
    pub fn spawn(
        rx: Receiver<Option<Staged>>,
        works: WorkList,
        difficulty: Difficulty,
        disp_height: u32,
        progress: Box<dyn Progress>,
        on_done: Box<dyn FnOnce() + Send>,
    ) -> Self {
        let handle = thread::spawn(move || {
            let res = run(rx, works, difficulty, disp_height, progress);
            match &res {
                // the one handoff point from collection into gameplay
                Ok(()) => on_done(),
                Err(e) => loge!("Assemble: {e}"),
            }
            res
        });
        Self { handle }
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    pub fn join(self) -> Result<(), String> {
        self.handle
            .join()
            .unwrap_or_else(|_| Err(s!("assembler panicked")))
    }
}

fn run(
    rx: Receiver<Option<Staged>>,
    works: WorkList,
    difficulty: Difficulty,
    disp_height: u32,
    mut progress: Box<dyn Progress>,
) -> Result<(), String> {
    let factor = difficulty.factor();

    loop {
        let (art, path) = match rx.recv() {
            Ok(Some(staged)) => staged,
            // sentinel, or a producer that died without one
            Ok(None) | Err(_) => break,
        };

        // full decode up front: a corrupt file should fail here, not
        // mid-game on the guess screen
        let img = image::open(&path)
            .map_err(|e| format!("unreadable image {}: {e}", path.display()))?;
        let aspect = img.width() as f32 / img.height() as f32;
        let disp_width = (aspect * disp_height as f32).ceil() as u32;
        let review_height = (REVIEW_WIDTH as f32 / aspect).ceil() as u32;

        let (lower_bound, upper_bound) = acceptance_band(art.prices, factor);

        let item = Guesswork {
            art,
            path,
            disp_width,
            disp_height,
            review_width: REVIEW_WIDTH,
            review_height,
            lower_bound,
            upper_bound,
            keep: false,
            guess: None,
        };

        let done = {
            let mut list = works.lock().unwrap();
            list.push(item);
            list.len()
        };
        progress.item_done(done);
    }

    progress.finish();
    Ok(())
}
