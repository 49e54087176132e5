// src/scrape/sothebys.rs

// Sotheby's buy pages embed their listing state as JSON, so instead of
// chewing through markup we dig the hits array out of the page payload.
// Page counts per category are probed once and cached in the store.

use rand::Rng;
use serde_json::Value;

use super::{Batch, FetchError, Fetcher};
use crate::config::consts::{PAGE_TRIES, SOTHEBYS_HOST};
use crate::core::{html, net};
use crate::store;
use crate::work::Artwork;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    All,
    Jewelry,
    Watches,
    Handbags,
    Books,
    Art,
    Collectibles,
    Cars,
    Interiors,
    Apparel,
    Sneakers,
}

impl Category {
    pub const ALL: [Category; 11] = [
        Category::All,
        Category::Jewelry,
        Category::Watches,
        Category::Handbags,
        Category::Books,
        Category::Art,
        Category::Collectibles,
        Category::Cars,
        Category::Interiors,
        Category::Apparel,
        Category::Sneakers,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::All => "All",
            Category::Jewelry => "Jewelry",
            Category::Watches => "Watches",
            Category::Handbags => "Handbags",
            Category::Books => "Books",
            Category::Art => "Art",
            Category::Collectibles => "Collectibles",
            Category::Cars => "Cars",
            Category::Interiors => "Interiors",
            Category::Apparel => "Apparel",
            Category::Sneakers => "Sneakers",
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            Category::All => "shop-all",
            Category::Jewelry => "luxury/jewelry",
            Category::Watches => "luxury/watches",
            Category::Handbags => "fashion/handbag",
            Category::Books => "luxury/books-&-manuscripts",
            Category::Art => "art-&-design",
            Category::Collectibles => "luxury/collectibles",
            Category::Cars => "luxury/vehicles/car",
            Category::Interiors => "interiors",
            Category::Apparel => "fashion/apparel",
            Category::Sneakers => "fashion/sneaker",
        }
    }

    fn index(&self) -> usize {
        Category::ALL.iter().position(|c| c == self).unwrap_or(0)
    }
}

pub struct SothebysFetcher {
    category: Category,
}

impl SothebysFetcher {
    pub fn new(category: Category) -> Self {
        Self { category }
    }

    /// Cached page count for this category; probe the pagination once.
    fn page_limit(&self, base: &str) -> Result<u32, FetchError> {
        let idx = self.category.index();
        let mut limits = store::load_page_limits(Category::ALL.len());

        if limits[idx] == 0 {
            let body = net::get_html(base)?;
            limits[idx] = probe_page_limit(&body);
            logf!("Sothebys: {:?} spans {} page(s)", self.category, limits[idx]);
            if let Err(e) = store::save_page_limits(&limits) {
                loge!("Store: page limits not saved ({e})");
            }
        }
        Ok(limits[idx].max(1) as u32)
    }
}

impl Fetcher for SothebysFetcher {
    fn fetch_batch(&mut self, amount: usize) -> Result<Batch, FetchError> {
        let base = format!("{SOTHEBYS_HOST}/en/buy/{}", self.category.slug());
        let pagemax = self.page_limit(&base)?;
        let mut rng = rand::thread_rng();

        let mut hits = Vec::new();
        for _ in 0..PAGE_TRIES {
            let url = format!("{base}?page={}", rng.gen_range(1..=pagemax));
            logd!("Sothebys: {url}");
            hits = listing_hits(&net::get_html(&url)?);
            if !hits.is_empty() {
                break;
            }
        }

        let results = hits.len();
        let mut works = Vec::with_capacity(amount);
        for _ in 0..amount {
            if hits.is_empty() {
                break;
            }
            let pick = rng.gen_range(0..hits.len());
            if let Some(work) = artwork_from_hit(&hits.swap_remove(pick)) {
                works.push(work);
            }
        }

        // one page that could not even cover this batch: that is all
        // this category has to offer
        Ok((works, pagemax == 1 && results < amount))
    }
}

/* ---------------- payload dissection ---------------- */

/// Pagination nav → highest page number on it, 1 when there is none.
pub fn probe_page_limit(body: &str) -> u8 {
    let Some((ns, ne)) = html::next_tag_block_ci(body, "<nav", "</nav>", 0) else {
        return 1;
    };
    let nav = &body[ns..ne];

    let mut max = 1u8;
    let mut from = 0;
    while let Some((s, e)) = html::next_tag_block_ci(nav, "<li", "</li>", from) {
        if let Ok(n) = html::strip_tags(&nav[s..e]).parse::<u8>() {
            max = max.max(n);
        }
        from = e;
    }
    max
}

/// Scan the page's embedded JSON scripts for the listing hits array.
pub fn listing_hits(body: &str) -> Vec<Value> {
    const MARK: &str = "type=\"application/json\"";
    let mut from = 0;
    while let Some(rel) = body[from..].find(MARK) {
        let at = from + rel;
        let Some(open) = body[at..].find('>') else { break };
        let start = at + open + 1;
        let Some(len) = body[start..].find("</script>") else { break };

        if let Ok(v) = serde_json::from_str::<Value>(&body[start..start + len]) {
            if let Some(hits) = find_hits(&v) {
                return hits.clone();
            }
        }
        from = start + len;
    }
    Vec::new()
}

/// Depth-first search for an array of listing objects.
pub fn find_hits(v: &Value) -> Option<&Vec<Value>> {
    match v {
        Value::Array(a) => {
            if !a.is_empty()
                && a.iter()
                    .all(|x| x.get("imageUrl").is_some() && x.get("lowEstimate").is_some())
            {
                return Some(a);
            }
            a.iter().find_map(find_hits)
        }
        Value::Object(m) => m.values().find_map(find_hits),
        _ => None,
    }
}

pub fn artwork_from_hit(hit: &Value) -> Option<Artwork> {
    let title = hit.get("title")?.as_str()?.to_string();
    let image_url = full_image_url(hit.get("imageUrl")?.as_str()?);
    let low = hit.get("lowEstimate")?.as_u64()?;
    let high = hit.get("highEstimate").and_then(Value::as_u64).unwrap_or(low);
    Some(Artwork {
        title,
        image_url,
        prices: (low.min(high), low.max(high)),
    })
}

/// Image URLs come wrapped in a resizing proxy; unwrap to the original.
pub fn full_image_url(url: &str) -> String {
    match url.find("?url=") {
        Some(i) => {
            let tail = &url[i + "?url=".len()..];
            let end = tail.find('&').unwrap_or(tail.len());
            html::percent_decode(&tail[..end])
        }
        None => url.to_string(),
    }
}
