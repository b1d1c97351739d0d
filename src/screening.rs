//! Keyword screens for listings and catalog entries
//!
//! Junk listings (accessories, repacks, proxies, non-English cards) never map
//! to a single-card price, so their titles are filtered before matching.
//! Sealed products are filtered on the catalog side: a catalog entry named
//! "Booster Box" is not a card, but a card listing may well mention one.

use serde::Serialize;

/// Sealed product keywords, matched against catalog entry names
pub const SEALED_KEYWORDS: &[&str] = &[
    "booster box",
    "booster pack",
    "blister pack",
    "elite trainer box",
    "etb",
    "theme deck",
    "starter deck",
    "tin ",
    "collection box",
    "premium collection",
    "vstar universe",
    "build & battle",
    "2-pack blister",
    "booster bundle",
    "garchomp c lv",
    "dialga lv",
    "sylveon collection",
];

/// Junk, accessory and foreign-language keywords, matched against listing titles
pub const JUNK_KEYWORDS: &[&str] = &[
    "mystery",
    "repack",
    "custom",
    "proxy",
    "fake",
    "replica",
    "lot of",
    "bundle of",
    "bulk ",
    "empty box",
    "read descrip",
    "keyring",
    "keychain",
    "key ring",
    "key chain",
    "pin badge",
    "pin ",
    "sticker",
    "magnet",
    "playmat",
    "play mat",
    "sleeves",
    "deck box",
    // Reference prices are for English cards only
    "italian",
    "italiano",
    "ita ",
    " ita",
    "german",
    "deutsch",
    "deu ",
    " deu",
    "glurak",
    "french",
    "français",
    "francais",
    "spanish",
    "español",
    "espanol",
    "japanese",
    "japan",
    " jpn",
    "jpn ",
    "korean",
    " kor",
    "kor ",
    "chinese",
    "china",
    "portuguese",
    "portugues",
    "dutch",
    "nederlands",
    "polish",
    "polski",
];

/// Outcome of screening one title
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ListingScreen {
    Accept,
    Junk { keyword: String },
}

impl ListingScreen {
    pub fn is_accepted(&self) -> bool {
        matches!(self, ListingScreen::Accept)
    }
}

/// Classify a raw listing title against the junk keywords.
/// Case-insensitive substring match, first keyword wins.
pub fn screen_listing(title: &str) -> ListingScreen {
    let title_lower = title.to_lowercase();

    if let Some(keyword) = first_hit(&title_lower, JUNK_KEYWORDS) {
        log::debug!("Junk listing ({}): {}", keyword, title);
        return ListingScreen::Junk {
            keyword: keyword.to_string(),
        };
    }

    ListingScreen::Accept
}

/// Sealed keyword in a catalog entry name, if any.
///
/// Sealed entries have no single-card listings, so they are left out of
/// candidate pools.
pub fn sealed_product_keyword(name: &str) -> Option<&'static str> {
    first_hit(&name.to_lowercase(), SEALED_KEYWORDS)
}

fn first_hit<'a>(text_lower: &str, keywords: &[&'a str]) -> Option<&'a str> {
    keywords.iter().copied().find(|kw| text_lower.contains(kw))
}
