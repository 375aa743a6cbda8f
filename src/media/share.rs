// SPDX-License-Identifier: MPL-2.0
//! Share links for photos.

use reqwest::Url;

/// Tweet composer endpoint.
pub const SHARE_INTENT_ENDPOINT: &str = "https://twitter.com/intent/tweet";

/// Public site used in share links when none is configured.
pub const DEFAULT_SHARE_BASE_URL: &str = "https://nextjsconf-pics.vercel.app";

/// Public permalink of the photo at `index` (`<base>/p/<index>`).
#[must_use]
pub fn photo_permalink(base_url: &str, index: usize) -> String {
    format!("{}/p/{index}", base_url.trim_end_matches('/'))
}

/// Builds the tweet intent URL: `message`, a blank line, then the permalink.
#[must_use]
pub fn share_intent_url(message: &str, base_url: &str, index: usize) -> String {
    let text = format!("{message}\n\n{}", photo_permalink(base_url, index));
    match Url::parse_with_params(SHARE_INTENT_ENDPOINT, [("text", text.as_str())]) {
        Ok(url) => url.into(),
        Err(err) => {
            tracing::warn!(%err, "could not build share URL");
            SHARE_INTENT_ENDPOINT.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permalink_strips_trailing_slash() {
        assert_eq!(
            photo_permalink("https://pics.example.com/", 3),
            "https://pics.example.com/p/3"
        );
    }

    #[test]
    fn intent_url_carries_message_and_permalink() {
        let url = share_intent_url("Look at this", "https://pics.example.com", 7);
        assert!(url.starts_with(SHARE_INTENT_ENDPOINT));
        assert!(url.contains("%0A%0A"));

        let parsed = Url::parse(&url).expect("valid url");
        let text = parsed
            .query_pairs()
            .find(|(key, _)| key == "text")
            .map(|(_, value)| value.into_owned())
            .expect("text param");
        assert_eq!(text, "Look at this\n\nhttps://pics.example.com/p/7");
    }
}
