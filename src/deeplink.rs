// src/deeplink.rs
//
// QR / shared links: `?q=` | `?biotrack=` | `?search=` seed the search box
// (first present wins, in that order) and `#<id>` / `#lot-<id>` scrolls to
// a card.

use url::Url;

use crate::data::{Catalog, FilteredView};
use crate::core::sanitize::anchor_id;

const SEARCH_KEYS: [&str; 3] = ["q", "biotrack", "search"];

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DeepLink {
    pub search: Option<String>,
    pub fragment: Option<String>,
}

impl DeepLink {
    /// Accepts a full URL or a bare `?query#fragment` / `#fragment` tail.
    /// Anything unparseable yields an empty link.
    pub fn parse(link: &str) -> Self {
        let link = link.trim();
        let parsed = Url::parse(link).or_else(|_| {
            Url::parse("http://localhost/").and_then(|base| base.join(link))
        });
        let Ok(url) = parsed else {
            logw!("Deep link: could not parse {:?}", link);
            return Self::default();
        };

        let search = SEARCH_KEYS.iter().find_map(|key| {
            url.query_pairs()
                .find(|(k, v)| k == key && !v.is_empty())
                .map(|(_, v)| v.into_owned())
        });
        let fragment = url
            .fragment()
            .filter(|f| !f.is_empty())
            .map(percent_decode);

        Self { search, fragment }
    }

    pub fn is_empty(&self) -> bool {
        self.search.is_none() && self.fragment.is_none()
    }
}

/// Fragments arrive percent-encoded ("BT%20000118"); decode via a query pair.
/// A literal '+' stays a '+'.
fn percent_decode(s: &str) -> String {
    let escaped = s.replace('+', "%2B");
    url::form_urlencoded::parse(join!("f=", &escaped).as_bytes())
        .next()
        .map(|(_, v)| v.into_owned())
        .unwrap_or_else(|| s!(s))
}

/// Candidate anchors for a fragment: as given, `lot-<raw>`,
/// then `lot-<raw lowercased, whitespace removed>`.
pub fn anchor_candidates(fragment: &str) -> [String; 3] {
    let normalized: String = fragment
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase();
    [s!(fragment), join!("lot-", fragment), join!("lot-", &normalized)]
}

/// Position within `view` of the card a fragment points at.
pub fn find_anchor(cat: &Catalog, view: &FilteredView, fragment: &str) -> Option<usize> {
    let anchors: Vec<Option<String>> = view
        .records(cat)
        .map(|r| anchor_id(r.identifier()))
        .collect();
    anchor_candidates(fragment).iter().find_map(|cand| {
        anchors
            .iter()
            .position(|a| a.as_deref() == Some(cand.as_str()))
    })
}
