//! Driving-directions deep links for a third-party maps service

use once_cell::sync::Lazy;
use url::Url;

/// Directions endpoint every link is built from
pub const DIRECTIONS_BASE: &str = "https://www.google.com/maps/dir/";

static DIRECTIONS_URL: Lazy<Url> =
    Lazy::new(|| Url::parse(DIRECTIONS_BASE).expect("directions base URL is a valid constant"));

/// Build a link that opens the maps service in driving mode towards `query`.
///
/// The query is percent-encoded as-is; any string is accepted.
pub fn build_driving_directions_link(query: &str) -> Url {
    let mut url = DIRECTIONS_URL.clone();
    url.set_query(Some(&format!(
        "api=1&destination={}&travelmode=driving",
        urlencoding::encode(query)
    )));
    url
}
