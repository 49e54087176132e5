// src/session.rs

// Owns the per-session mutable state: the results list, the handoff
// channel, and the two worker handles. At most one Collector/Assembler
// pair is live at a time.

use std::{
    path::PathBuf,
    sync::{mpsc, Arc, Mutex},
};

use crate::{
    assemble::Assembler,
    collect::{Collector, Downloader},
    config::{consts::IMG_DIR, options::Difficulty},
    progress::Progress,
    scrape::Fetcher,
    work::{self, WorkList},
};

/// What the UI sees when it polls.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Collecting,
    Complete,
    Failed(String),
}

pub struct Session {
    pub works: WorkList,
    out_root: PathBuf,
    collector: Option<Collector>,
    assembler: Option<Assembler>,
    outcome: Option<Result<(), String>>,
}

impl Session {
    pub fn new() -> Self {
        Self::with_root(PathBuf::from(IMG_DIR))
    }

    /// Collect images under a different root (tests use a temp dir).
    pub fn with_root(out_root: PathBuf) -> Self {
        Self {
            works: Arc::new(Mutex::new(Vec::new())),
            out_root,
            collector: None,
            assembler: None,
            outcome: None,
        }
    }

    /// Spawn a fresh Collector/Assembler pair and return immediately.
    /// Any previous pair is stopped and joined first, so two sessions
    /// never interleave on the channel or the image folder.
    #[allow(clippy::too_many_arguments)]
    pub fn start(
        &mut self,
        fetcher: Box<dyn Fetcher>,
        downloader: Box<dyn Downloader>,
        limit: usize,
        difficulty: Difficulty,
        disp_height: u32,
        progress: (Box<dyn Progress>, Box<dyn Progress>),
        on_done: Box<dyn FnOnce() + Send>,
    ) {
        self.teardown();
        self.works.lock().unwrap().clear();
        self.outcome = None;

        logf!("Session: start limit={limit} difficulty={difficulty:?}");

        let (tx, rx) = mpsc::channel();
        let (col_prog, asm_prog) = progress;

        self.collector = Some(Collector::spawn(
            fetcher,
            downloader,
            limit,
            self.out_root.clone(),
            tx,
            col_prog,
        ));
        self.assembler = Some(Assembler::spawn(
            rx,
            Arc::clone(&self.works),
            difficulty,
            disp_height,
            asm_prog,
            on_done,
        ));
    }

    /// Cooperative cancel: stop the producer only. The consumer drains
    /// whatever was already staged and winds down on the sentinel.
    pub fn cancel(&self) {
        if let Some(c) = &self.collector {
            c.stop();
        }
    }

    /// Items assembled so far; safe to read while collecting.
    pub fn collected(&self) -> usize {
        self.works.lock().unwrap().len()
    }

    pub fn poll(&mut self) -> Phase {
        if let Some(outcome) = &self.outcome {
            return match outcome {
                Ok(()) => Phase::Complete,
                Err(e) => Phase::Failed(e.clone()),
            };
        }
        let (Some(c), Some(a)) = (&self.collector, &self.assembler) else {
            return Phase::Idle;
        };

        // A consumer that quit before the producer means the session is
        // failing; unstick the producer so the join below can happen.
        if a.is_finished() && !c.is_finished() {
            c.stop();
            return Phase::Collecting;
        }
        if !(c.is_finished() && a.is_finished()) {
            return Phase::Collecting;
        }

        let res = self.join_workers();
        self.outcome = Some(res);
        self.poll()
    }

    /// True once both workers have been joined (or never started).
    pub fn settled(&self) -> bool {
        self.collector.is_none() && self.assembler.is_none()
    }

    /// Delete images not flagged keep and clear the list.
    /// Only meaningful once the workers have settled.
    pub fn discard_works(&mut self) {
        work::remove_works(&mut self.works.lock().unwrap());
    }

    /// Full stop: cancel, wait for both workers, delete unkept files.
    /// Blocks; used when the application is going away.
    pub fn shutdown(&mut self) {
        self.teardown();
        self.discard_works();
    }

    fn join_workers(&mut self) -> Result<(), String> {
        let col = self.collector.take().map(Collector::join).unwrap_or(Ok(()));
        let asm = self.assembler.take().map(Assembler::join).unwrap_or(Ok(()));
        col.and(asm)
    }

    /// Stop and join any live pair. Blocks until both workers exit.
    fn teardown(&mut self) {
        self.cancel();
        if self.collector.is_some() || self.assembler.is_some() {
            let res = self.join_workers();
            self.outcome = Some(res);
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
