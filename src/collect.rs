// src/collect.rs

// Producer half of the collection pipeline. Drives a Fetcher in a loop,
// downloads each listing's image, and hands (Artwork, path) pairs to
// the Assembler over the channel. Terminates the stream with exactly
// one None sentinel, whatever the exit path.

use std::{
    error::Error,
    fs,
    path::{Path, PathBuf},
    sync::{
        atomic::{AtomicBool, Ordering},
        mpsc::Sender,
        Arc,
    },
    thread::{self, JoinHandle},
    time::Duration,
};

use rand::Rng;

use crate::{
    config::consts::{PACE_EVERY, PACE_PAUSE_MS},
    core::{net, sanitize},
    progress::Progress,
    scrape::Fetcher,
    work::Staged,
};

/// Image retrieval seam between the run loop and the network.
pub trait Downloader: Send {
    fn fetch_image(&mut self, url: &str, dest: &Path) -> Result<(), Box<dyn Error + Send + Sync>>;
}

/// ureq-backed downloader used by real sessions.
pub struct NetDownloader;

impl Downloader for NetDownloader {
    fn fetch_image(&mut self, url: &str, dest: &Path) -> Result<(), Box<dyn Error + Send + Sync>> {
        net::download(url, dest)
    }
}

pub struct Collector {
    stop: Arc<AtomicBool>,
    handle: JoinHandle<Result<(), String>>,
}

impl Collector {
    pub fn spawn(
        fetcher: Box<dyn Fetcher>,
        downloader: Box<dyn Downloader>,
        limit: usize,
        out_root: PathBuf,
        tx: Sender<Option<Staged>>,
        progress: Box<dyn Progress>,
    ) -> Self {
        let stop = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&stop);

        let handle = thread::spawn(move || {
            let res = run(fetcher, downloader, limit, out_root, &tx, &flag, progress);
            // one sentinel per session, on every exit path
            let _ = tx.send(None);
            if let Err(e) = &res {
                loge!("Collect: {e}");
            }
            res
        });

        Self { stop, handle }
    }

    /// Cooperative stop; takes effect at the next loop boundary, so an
    /// in-flight download still completes and gets published.
    pub fn stop(&self) {
        self.stop.store(true, Ordering::Relaxed);
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    pub fn join(self) -> Result<(), String> {
        self.handle
            .join()
            .unwrap_or_else(|_| Err(s!("collector panicked")))
    }
}

fn run(
    mut fetcher: Box<dyn Fetcher>,
    mut downloader: Box<dyn Downloader>,
    limit: usize,
    out_root: PathBuf,
    tx: &Sender<Option<Staged>>,
    stop: &AtomicBool,
    mut progress: Box<dyn Progress>,
) -> Result<(), String> {
    progress.begin(limit);

    let mut count = 0usize;
    let mut day_dir: Option<PathBuf> = None;
    let mut rng = rand::thread_rng();

    while !stop.load(Ordering::Relaxed) && count < limit {
        // bound what one adapter call may deliver, but let it return several
        let amount = rng.gen_range(1..=limit - count);
        logd!("Collect: requesting {amount} ({count}/{limit})");

        let (works, no_more) = fetcher
            .fetch_batch(amount)
            .map_err(|e| format!("fetch failed: {e}"))?;

        for work in works {
            if count >= limit {
                break; // adapter over-delivered
            }

            // one folder per day, created on first use
            let dir = match &day_dir {
                Some(d) => d.clone(),
                None => {
                    let d = out_root.join(chrono::Local::now().format("%Y-%m-%d").to_string());
                    fs::create_dir_all(&d).map_err(|e| format!("create {}: {e}", d.display()))?;
                    logf!("Collect: session folder {}", d.display());
                    day_dir = Some(d.clone());
                    d
                }
            };

            let stem = sanitize::cleanse(&work.title);
            let dest = dir.join(join!(stem.as_str(), ".jpg"));
            downloader
                .fetch_image(&work.image_url, &dest)
                .map_err(|e| format!("download {}: {e}", work.image_url))?;

            count += 1;
            progress.log(&format!("Downloaded {count}/{limit}"));

            if tx.send(Some((work, dest))).is_err() {
                // consumer hung up; nothing left to publish to
                return Ok(());
            }

            if count % PACE_EVERY == 0 {
                thread::sleep(Duration::from_millis(PACE_PAUSE_MS));
            }
        }

        if no_more {
            logf!("Collect: source exhausted at {count}/{limit}");
            break;
        }
    }

    progress.finish();
    Ok(())
}
