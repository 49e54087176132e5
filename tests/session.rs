// tests/session.rs
//
// Session lifecycle: start, poll to completion, discard, restart.
//
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use gavel::collect::Downloader;
use gavel::config::options::Difficulty;
use gavel::progress::NullProgress;
use gavel::scrape::{Batch, FetchError, Fetcher};
use gavel::session::{Phase, Session};
use gavel::work::Artwork;

struct ScriptedFetcher {
    produced: usize,
    exhaust_after: Option<usize>,
}

impl Fetcher for ScriptedFetcher {
    fn fetch_batch(&mut self, _amount: usize) -> Result<Batch, FetchError> {
        let work = Artwork {
            title: format!("Session Work {}", self.produced),
            image_url: format!("https://example.test/{}.jpg", self.produced),
            prices: (1_000, 2_000),
        };
        self.produced += 1;
        let no_more = matches!(self.exhaust_after, Some(k) if self.produced >= k);
        Ok((vec![work], no_more))
    }
}

fn fetcher(exhaust_after: Option<usize>) -> Box<dyn Fetcher> {
    Box::new(ScriptedFetcher { produced: 0, exhaust_after })
}

struct StubDownloader;

impl Downloader for StubDownloader {
    fn fetch_image(&mut self, _url: &str, dest: &Path) -> Result<(), FetchError> {
        image::RgbImage::new(50, 25).save(dest)?;
        Ok(())
    }
}

fn temp_root(tag: &str) -> PathBuf {
    std::env::temp_dir().join(format!("gavel-session-{tag}-{}", std::process::id()))
}

fn start(session: &mut Session, limit: usize, exhaust_after: Option<usize>, done: &Arc<AtomicUsize>) {
    let done = Arc::clone(done);
    session.start(
        fetcher(exhaust_after),
        Box::new(StubDownloader),
        limit,
        Difficulty::Hard,
        520,
        (Box::new(NullProgress), Box::new(NullProgress)),
        Box::new(move || {
            done.fetch_add(1, Ordering::SeqCst);
        }),
    );
}

fn poll_until_settled(session: &mut Session) -> Phase {
    let deadline = Instant::now() + Duration::from_secs(30);
    loop {
        let phase = session.poll();
        if !matches!(phase, Phase::Collecting) {
            return phase;
        }
        assert!(Instant::now() < deadline, "session never settled");
        std::thread::sleep(Duration::from_millis(5));
    }
}

#[test]
fn runs_to_completion() {
    let root = temp_root("complete");
    let mut session = Session::with_root(root.clone());
    assert_eq!(session.poll(), Phase::Idle);

    let done = Arc::new(AtomicUsize::new(0));
    start(&mut session, 3, None, &done);

    assert_eq!(poll_until_settled(&mut session), Phase::Complete);
    assert!(session.settled());
    assert_eq!(session.collected(), 3);
    assert_eq!(done.load(Ordering::SeqCst), 1);

    // polling again after completion is stable
    assert_eq!(session.poll(), Phase::Complete);

    session.discard_works();
    let _ = fs::remove_dir_all(root);
}

#[test]
fn discard_honors_keep_flags() {
    let root = temp_root("discard");
    let mut session = Session::with_root(root.clone());

    let done = Arc::new(AtomicUsize::new(0));
    start(&mut session, 3, None, &done);
    assert_eq!(poll_until_settled(&mut session), Phase::Complete);

    let paths: Vec<PathBuf> = {
        let mut works = session.works.lock().unwrap();
        works[1].keep = true;
        works.iter().map(|w| w.path.clone()).collect()
    };
    for p in &paths {
        assert!(p.is_file(), "missing staged image {}", p.display());
    }

    session.discard_works();
    assert_eq!(session.collected(), 0);
    assert!(!paths[0].is_file());
    assert!(paths[1].is_file(), "kept image was deleted");
    assert!(!paths[2].is_file());

    let _ = fs::remove_dir_all(root);
}

#[test]
fn exhaustion_completes_short() {
    let root = temp_root("exhaust");
    let mut session = Session::with_root(root.clone());

    let done = Arc::new(AtomicUsize::new(0));
    start(&mut session, 5, Some(2), &done);

    assert_eq!(poll_until_settled(&mut session), Phase::Complete);
    assert_eq!(session.collected(), 2);

    // a new round on the same session starts from a clean list
    start(&mut session, 3, None, &done);
    assert_eq!(poll_until_settled(&mut session), Phase::Complete);
    assert_eq!(session.collected(), 3);
    assert_eq!(done.load(Ordering::SeqCst), 2);

    session.discard_works();
    let _ = fs::remove_dir_all(root);
}

#[test]
fn shutdown_removes_unkept_files() {
    let root = temp_root("shutdown");
    let mut session = Session::with_root(root.clone());

    let done = Arc::new(AtomicUsize::new(0));
    start(&mut session, 50, None, &done);

    let deadline = Instant::now() + Duration::from_secs(30);
    while session.collected() < 2 {
        assert!(Instant::now() < deadline, "session made no progress");
        std::thread::sleep(Duration::from_millis(5));
    }
    let paths: Vec<PathBuf> = {
        let works = session.works.lock().unwrap();
        works.iter().map(|w| w.path.clone()).collect()
    };

    // quitting mid-collection: blocks until the workers are gone,
    // then nothing unkept survives on disk
    session.shutdown();
    assert!(session.settled());
    assert_eq!(session.collected(), 0);
    for p in &paths {
        assert!(!p.is_file(), "left behind {}", p.display());
    }

    let _ = fs::remove_dir_all(root);
}

struct FailingFetcher;

impl Fetcher for FailingFetcher {
    fn fetch_batch(&mut self, _amount: usize) -> Result<Batch, FetchError> {
        Err("server said no".into())
    }
}

#[test]
fn fetch_failure_surfaces_as_failed() {
    let root = temp_root("fail");
    let mut session = Session::with_root(root.clone());

    session.start(
        Box::new(FailingFetcher),
        Box::new(StubDownloader),
        3,
        Difficulty::Hard,
        520,
        (Box::new(NullProgress), Box::new(NullProgress)),
        Box::new(|| {}),
    );

    let phase = poll_until_settled(&mut session);
    let Phase::Failed(e) = phase else {
        panic!("expected Failed, got {phase:?}");
    };
    assert!(e.contains("fetch failed"), "unexpected message: {e}");
    assert!(e.contains("server said no"), "unexpected message: {e}");
    assert_eq!(session.collected(), 0);

    let _ = fs::remove_dir_all(root);
}

#[test]
fn cancel_stops_early() {
    let root = temp_root("cancel");
    let mut session = Session::with_root(root.clone());

    let done = Arc::new(AtomicUsize::new(0));
    start(&mut session, 50, None, &done);

    let deadline = Instant::now() + Duration::from_secs(30);
    while session.collected() < 2 {
        assert!(Instant::now() < deadline, "session made no progress");
        session.poll();
        std::thread::sleep(Duration::from_millis(5));
    }
    session.cancel();

    assert_eq!(poll_until_settled(&mut session), Phase::Complete);
    let n = session.collected();
    assert!(n >= 2);
    assert!(n < 50);

    session.discard_works();
    let _ = fs::remove_dir_all(root);
}
