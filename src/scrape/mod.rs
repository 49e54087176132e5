// src/scrape/mod.rs
pub mod artsy;
pub mod sothebys;

use std::error::Error;

use crate::config::options::SourceKind;
use crate::work::Artwork;

pub type FetchError = Box<dyn Error + Send + Sync>;

/// One call against a source: up to the requested number of records,
/// plus an exhausted flag (true = this filter has nothing more to give).
pub type Batch = (Vec<Artwork>, bool);

/// A scrape source bound to one filter, chosen once at session start.
pub trait Fetcher: Send {
    fn fetch_batch(&mut self, amount: usize) -> Result<Batch, FetchError>;
}

/// Filter labels for a source, in combo-box order.
pub fn filter_labels(source: SourceKind) -> Vec<&'static str> {
    match source {
        SourceKind::Artsy => artsy::Medium::ALL.iter().map(|m| m.label()).collect(),
        SourceKind::Sothebys => sothebys::Category::ALL.iter().map(|c| c.label()).collect(),
    }
}

pub fn fetcher_for(source: SourceKind, filter_index: usize) -> Box<dyn Fetcher> {
    match source {
        SourceKind::Artsy => {
            debug_assert!(filter_index < artsy::Medium::ALL.len());
            Box::new(artsy::ArtsyFetcher::new(artsy::Medium::ALL[filter_index]))
        }
        SourceKind::Sothebys => {
            debug_assert!(filter_index < sothebys::Category::ALL.len());
            Box::new(sothebys::SothebysFetcher::new(
                sothebys::Category::ALL[filter_index],
            ))
        }
    }
}
