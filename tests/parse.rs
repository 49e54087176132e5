// tests/parse.rs
//
// Page dissection and payload parsing against hand-built fixtures.
//
use serde_json::json;

use gavel::core::{html, sanitize};
use gavel::scrape::{artsy, sothebys};

/* ---------------- artsy ---------------- */

#[test]
fn usd_prices() {
    assert_eq!(artsy::parse_usd("US$1500"), Some((1500, 1500)));
    assert_eq!(artsy::parse_usd("US$1000-US$2000"), Some((1000, 2000)));
    // en dash between the ends
    assert_eq!(artsy::parse_usd("US$3500\u{2013}US$4200"), Some((3500, 4200)));
    // ends reversed in the source text
    assert_eq!(artsy::parse_usd("US$900-US$400"), Some((400, 900)));

    assert_eq!(artsy::parse_usd("€100"), None);
    assert_eq!(artsy::parse_usd("Sold"), None);
    assert_eq!(artsy::parse_usd("US$"), None);
}

#[test]
fn titles() {
    assert_eq!(
        artsy::format_title("Helen Frankenthaler, Cool Summer, 1962"),
        "Helen Frankenthaler - Cool Summer (1962)"
    );
    assert_eq!(
        artsy::format_title("Helen Frankenthaler, Cool Summer"),
        "Helen Frankenthaler - Cool Summer"
    );
    assert_eq!(artsy::format_title("Untitled"), "Untitled");
}

#[test]
fn grid_dissection() {
    let body = concat!(
        "<html><div data-test=\"artworkGridItem\" class=\"a\">first</div>",
        "<div data-test=\"artworkGridItem\" class=\"b\">second</div></html>",
    );
    let items = artsy::grid_items(body);
    assert_eq!(items.len(), 2);
    assert!(items[0].contains("first"));
    assert!(items[1].contains("second"));

    assert!(artsy::grid_items("<html>no works here</html>").is_empty());
}

#[test]
fn price_div() {
    let block = concat!(
        " class=\"x\"><a href=\"/artwork/y\"><img src=\"t.jpg\" alt=\"T\">",
        "<div font-weight=\"bold\" class=\"p\"><span>US$12,500</span></div></a>",
    );
    assert_eq!(artsy::price_text(block).as_deref(), Some("US$12500"));
    assert_eq!(artsy::price_text("<div>no price</div>"), None);
}

#[test]
fn artsy_image_unwrap() {
    let src = concat!(
        "https://d7hftxdivxxvm.cloudfront.net/?height=445&quality=80",
        "&src=https%3A%2F%2Fd32dm0rphc51dk.cloudfront.net%2Fabc123%2Flarge.jpg",
        "&width=334",
    );
    assert_eq!(
        artsy::full_image_url(src).as_deref(),
        Some("https://d32dm0rphc51dk.cloudfront.net/abc123/normalized.jpg")
    );

    let src = "https://proxy/?src=https%3A%2F%2Fcdn%2Fdef%2Flarger.jpg";
    assert_eq!(
        artsy::full_image_url(src).as_deref(),
        Some("https://cdn/def/normalized.jpg")
    );

    assert_eq!(artsy::full_image_url("https://plain/thumb.png"), None);
}

/* ---------------- sothebys ---------------- */

#[test]
fn page_limit_probe() {
    let body = concat!(
        "<html><nav class=\"pagination\">",
        "<li><a>1</a></li><li><a>2</a></li><li><a>8</a></li>",
        "<li><a>Next</a></li></nav></html>",
    );
    assert_eq!(sothebys::probe_page_limit(body), 8);
    assert_eq!(sothebys::probe_page_limit("<html>single page</html>"), 1);
}

#[test]
fn hits_from_embedded_json() {
    let payload = json!({
        "props": {
            "pageProps": {
                "results": {
                    "hits": [
                        { "title": "Lot A", "imageUrl": "https://cdn/a.jpg",
                          "lowEstimate": 500, "highEstimate": 900 },
                        { "title": "Lot B", "imageUrl": "https://cdn/b.jpg",
                          "lowEstimate": 1200 },
                    ],
                    "total": 2
                }
            }
        }
    });
    let body = format!(
        "<html><script type=\"application/json\">{payload}</script></html>"
    );

    let hits = sothebys::listing_hits(&body);
    assert_eq!(hits.len(), 2);

    let a = sothebys::artwork_from_hit(&hits[0]).unwrap();
    assert_eq!(a.title, "Lot A");
    assert_eq!(a.image_url, "https://cdn/a.jpg");
    assert_eq!(a.prices, (500, 900));

    // no high estimate: collapse to the low
    let b = sothebys::artwork_from_hit(&hits[1]).unwrap();
    assert_eq!(b.prices, (1200, 1200));
}

#[test]
fn hit_search_skips_other_arrays() {
    let v = json!({
        "nav": ["home", "buy", "sell"],
        "deep": { "hits": [
            { "imageUrl": "u", "lowEstimate": 1, "title": "x" }
        ]}
    });
    let hits = sothebys::find_hits(&v).unwrap();
    assert_eq!(hits.len(), 1);

    assert!(sothebys::find_hits(&json!({ "hits": [] })).is_none());
    assert!(sothebys::find_hits(&json!([{ "imageUrl": "u" }])).is_none());
}

#[test]
fn sothebys_image_unwrap() {
    let url = concat!(
        "https://sothebys-md.brightspotcdn.com/dims4/default/abc/2147483647/",
        "resize/300x/?url=https%3A%2F%2Fmedia.sothebys.com%2Fimg%2Flot.jpg&w=300",
    );
    assert_eq!(
        sothebys::full_image_url(url),
        "https://media.sothebys.com/img/lot.jpg"
    );

    // already direct
    let direct = "https://media.sothebys.com/img/lot.jpg";
    assert_eq!(sothebys::full_image_url(direct), direct);
}

/* ---------------- core ---------------- */

#[test]
fn percent_decoding() {
    assert_eq!(html::percent_decode("a%2Fb%3Ac"), "a/b:c");
    assert_eq!(html::percent_decode("no escapes"), "no escapes");
    // malformed escapes pass through
    assert_eq!(html::percent_decode("50%zz"), "50%zz");
    assert_eq!(html::percent_decode("100%"), "100%");
}

#[test]
fn tag_stripping() {
    assert_eq!(html::strip_tags("<div><b>US$5</b>\n  <i>firm</i></div>"), "US$5 firm");
    assert_eq!(html::attr("<img src=\"x.jpg\" alt=\"A, B\">", "alt"), Some("A, B"));
    assert_eq!(html::attr("<img src=\"x.jpg\">", "alt"), None);
}

#[test]
fn file_stems() {
    assert_eq!(
        sanitize::cleanse("Mona: Lisa / \"Smile\"!"),
        "Mona Lisa Smile"
    );
    assert_eq!(sanitize::cleanse("Plain Title"), "Plain Title");
    assert_eq!(sanitize::cleanse("??!!"), "");
}
