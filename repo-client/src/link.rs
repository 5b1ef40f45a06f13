//! `Link` response header parsing (RFC 8288 subset used by GitHub pagination).

/// Returns the `page` query value of the `rel="last"` link, if present.
///
/// With `per_page=1` this is the total number of items in the listing.
pub fn last_page(header: &str) -> Option<u64> {
    header.split(',').find_map(|part| {
        let mut segments = part.split(';');
        let target = segments
            .next()?
            .trim()
            .strip_prefix('<')?
            .strip_suffix('>')?;
        if !segments.any(|param| param.trim().replace(' ', "") == "rel=\"last\"") {
            return None;
        }
        let url = reqwest::Url::parse(target).ok()?;
        let page = url
            .query_pairs()
            .find(|(key, _)| key == "page")
            .and_then(|(_, value)| value.parse().ok());
        page
    })
}
