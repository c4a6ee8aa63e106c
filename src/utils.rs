/// Title-cases a search query before it is sent to the catalog.
///
/// Every letter that follows a non-letter is upper-cased and every other letter
/// is lower-cased, so `"the dark SIDE"` becomes `"The Dark Side"` and
/// `"don't"` becomes `"Don'T"`.
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut prev_is_letter = false;
    for c in input.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }
    out
}

/// Extracts the album id from the tail of a Spotify URL or URI.
///
/// Accepts `https://open.spotify.com/album/<id>` (query string, fragment and
/// trailing slash are ignored) and `spotify:album:<id>`. Returns `None` when
/// the tail is empty or is not a plain alphanumeric id.
pub fn album_id_from_url(url: &str) -> Option<String> {
    let url = url.trim();
    let url = url.split(['?', '#']).next().unwrap_or_default();

    let tail = if url.contains('/') {
        url.trim_end_matches('/').rsplit('/').next()
    } else if url.starts_with("spotify:") {
        url.rsplit(':').next()
    } else {
        None
    }?;

    if tail.is_empty() || !tail.chars().all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }
    Some(tail.to_string())
}

/// Shortens a bearer token for log output.
pub fn redact_token(token: &str) -> String {
    let prefix: String = token.chars().take(6).collect();
    format!("{}…", prefix)
}
