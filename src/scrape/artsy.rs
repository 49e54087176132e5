// src/scrape/artsy.rs

// Artsy lists works in a paged grid. Prices are inline text in whatever
// currency the seller picked; non-USD goes through a rate lookup, and a
// listing without a usable price is dropped in favor of another candidate.

use rand::Rng;

use super::{Batch, FetchError, Fetcher};
use crate::config::consts::{ARTSY_HOST, ARTSY_PAGE_MAX, PAGE_TRIES, RATES_PREFIX};
use crate::core::{html, net, sanitize};
use crate::work::Artwork;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Medium {
    All,
    Painting,
    Prints,
    Photography,
    Sculpture,
    WorksOnPaper,
    Design,
    MixedMedia,
}

impl Medium {
    pub const ALL: [Medium; 8] = [
        Medium::All,
        Medium::Painting,
        Medium::Prints,
        Medium::Photography,
        Medium::Sculpture,
        Medium::WorksOnPaper,
        Medium::Design,
        Medium::MixedMedia,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Medium::All => "All",
            Medium::Painting => "Painting",
            Medium::Prints => "Prints",
            Medium::Photography => "Photography",
            Medium::Sculpture => "Sculpture",
            Medium::WorksOnPaper => "Works on paper",
            Medium::Design => "Design",
            Medium::MixedMedia => "Mixed media",
        }
    }

    /// Appended to `/collect`; "ion/painting" yields `/collection/painting`.
    pub fn slug(&self) -> &'static str {
        match self {
            Medium::All => "",
            Medium::Painting => "ion/painting",
            Medium::Prints => "ion/prints",
            Medium::Photography => "ion/photography",
            Medium::Sculpture => "ion/sculpture",
            Medium::WorksOnPaper => "ion/works-on-paper",
            Medium::Design => "ion/design",
            Medium::MixedMedia => "ion/mixed-media",
        }
    }
}

// Currency prefixes we can convert through the rates API
const CURRENCIES: [(&str, &str); 10] = [
    ("C$", "cad"),
    ("€", "eur"),
    ("£", "gbp"),
    ("HK$", "hkd"),
    ("¥", "jpy"),
    ("ZAR", "zar"),
    ("CN¥", "cny"),
    ("BRL", "brl"),
    ("₱", "php"),
    ("KRW ₩", "krw"),
];

pub struct ArtsyFetcher {
    medium: Medium,
}

impl ArtsyFetcher {
    pub fn new(medium: Medium) -> Self {
        Self { medium }
    }

    /// USD per one unit of `code`, from the public rates API.
    fn rate(&self, code: &str) -> Option<f64> {
        let v = net::get_json(&join!(RATES_PREFIX, code, ".json")).ok()?;
        v.get(code)?.as_f64().filter(|r| *r > 0.0)
    }

    /// Price text → USD range, converting foreign currencies.
    /// None means "not a price we can use" (sold, POA, unknown symbol).
    fn to_usd(&self, text: &str) -> Option<(u64, u64)> {
        if text.starts_with("US$") {
            return parse_usd(text);
        }
        let (_, code) = CURRENCIES.iter().find(|(sym, _)| text.starts_with(sym))?;
        let amounts = amounts_in(text);
        let first = *amounts.first()?;
        let rate = self.rate(code)?;

        let low = (first as f64 / rate).floor() as u64;
        let high = if text.contains('-') || text.contains('–') {
            amounts
                .get(1)
                .map(|v| (*v as f64 / rate).floor() as u64)
                .unwrap_or(low)
        } else {
            low
        };
        Some((low.min(high), low.max(high)))
    }

    fn parse_item(&self, block: &str) -> Option<Artwork> {
        let at = block.find("<img")?;
        let tag_end = block[at..].find('>')? + at + 1;
        let img_tag = &block[at..tag_end];

        let image_url = full_image_url(html::attr(img_tag, "src")?)?;
        // the full-resolution variant is not served for every work
        if !net::url_ok(&image_url) {
            return None;
        }

        let prices = self.to_usd(&price_text(block)?)?;
        let title = format_title(&sanitize::normalize_entities(html::attr(img_tag, "alt")?));

        Some(Artwork { title, image_url, prices })
    }
}

impl Fetcher for ArtsyFetcher {
    fn fetch_batch(&mut self, amount: usize) -> Result<Batch, FetchError> {
        let mut rng = rand::thread_rng();
        let mut works: Vec<Artwork> = Vec::with_capacity(amount);
        let mut last_err: Option<FetchError> = None;

        for _ in 0..PAGE_TRIES {
            if works.len() >= amount {
                break;
            }

            let page = rng.gen_range(1..=ARTSY_PAGE_MAX);
            let url = format!("{ARTSY_HOST}/collect{}?page={page}", self.medium.slug());
            logd!("Artsy: {url}");

            let body = match net::get_html(&url) {
                Ok(b) => b,
                Err(e) => {
                    // transient; try another page
                    last_err = Some(e);
                    continue;
                }
            };

            let mut items = grid_items(&body);
            while works.len() < amount && !items.is_empty() {
                let pick = rng.gen_range(0..items.len());
                let block = items.swap_remove(pick);
                if let Some(work) = self.parse_item(&block) {
                    works.push(work);
                }
            }
        }

        if works.is_empty() {
            // the network never came through; anything else just means
            // a short batch and the caller will ask again
            if let Some(e) = last_err {
                return Err(e);
            }
        }

        // Artsy always has more pages to roll
        Ok((works, false))
    }
}

/* ---------------- page dissection ---------------- */

/// Split the page into one chunk per artwork grid item.
pub fn grid_items(body: &str) -> Vec<String> {
    const MARK: &str = "data-test=\"artworkGridItem\"";
    let mut parts = body.split(MARK);
    parts.next(); // preamble before the first work
    parts.map(|p| p.to_string()).collect()
}

/// Text of the bold price div within an item chunk, commas removed.
pub fn price_text(block: &str) -> Option<String> {
    let at = block.find("font-weight=\"bold\"")?;
    let open_end = block[at..].find('>')? + at + 1;
    let close = block[open_end..].find("</div>")? + open_end;
    let text = html::strip_tags(&block[open_end..close]);
    Some(sanitize::normalize_entities(&text).replace(',', ""))
}

/// `"US$1500"` or `"US$1000-US$2000"` (hyphen or en dash) → USD range.
pub fn parse_usd(text: &str) -> Option<(u64, u64)> {
    let t = text.strip_prefix("US$")?.replace('–', "-");
    let mut ends = t.split('-');
    let low = digits(ends.next()?)?;
    let high = match ends.next() {
        Some(p) => digits(p)?,
        None => low,
    };
    Some((low.min(high), low.max(high)))
}

fn digits(s: &str) -> Option<u64> {
    let d: String = s.chars().filter(|c| c.is_ascii_digit()).collect();
    d.parse().ok()
}

/// Every digit run in `text`, in order.
fn amounts_in(text: &str) -> Vec<u64> {
    let mut out = Vec::new();
    let mut cur = String::new();
    for ch in text.chars() {
        if ch.is_ascii_digit() {
            cur.push(ch);
        } else if !cur.is_empty() {
            if let Ok(v) = cur.parse() {
                out.push(v);
            }
            cur.clear();
        }
    }
    if let Ok(v) = cur.parse() {
        out.push(v);
    }
    out
}

/// The grid serves a thumbnail; the original sits percent-encoded in the
/// proxy query, with the size variant swapped for "normalized".
pub fn full_image_url(src: &str) -> Option<String> {
    let start = src.find("https%")?;
    let end = src.rfind(".jpg")? + ".jpg".len();
    if end <= start {
        return None;
    }
    let url = html::percent_decode(&src[start..end]);
    Some(url.replace("larger", "normalized").replace("large", "normalized"))
}

/// `"Artist, Work, 2001"` → `"Artist - Work (2001)"`.
pub fn format_title(alt: &str) -> String {
    let t = alt.replacen(", ", " - ", 1);
    match t.rfind(", ") {
        Some(i) if t[..i].contains(" - ") => {
            format!("{} ({})", &t[..i], &t[i + 2..])
        }
        _ => t,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_runs() {
        assert_eq!(amounts_in("€1500"), vec![1500]);
        assert_eq!(amounts_in("HK$8000-HK$12000"), vec![8000, 12000]);
        assert_eq!(amounts_in("Sold"), Vec::<u64>::new());
        assert_eq!(amounts_in("trailing 42"), vec![42]);
    }

    #[test]
    fn digit_filter() {
        assert_eq!(digits("1500"), Some(1500));
        assert_eq!(digits("US$2 000"), Some(2000));
        assert_eq!(digits("none"), None);
    }
}
