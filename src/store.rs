// src/store.rs
use std::{fs, io, path::PathBuf};

use crate::config::consts::STORE_DIR;

fn page_limits_path() -> PathBuf {
    PathBuf::from(STORE_DIR).join("pagemax")
}

/// One byte per category: highest known page for that filter,
/// 0 = never probed. Missing or short files read as all zeroes.
pub fn load_page_limits(n: usize) -> Vec<u8> {
    let mut limits = fs::read(page_limits_path()).unwrap_or_default();
    limits.resize(n, 0);
    limits
}

pub fn save_page_limits(limits: &[u8]) -> io::Result<()> {
    fs::create_dir_all(STORE_DIR)?;
    fs::write(page_limits_path(), limits)
}
