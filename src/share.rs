// Outbound share links. Building the URL is the whole job; opening it
// belongs to whatever renders the page.
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareTarget {
    Twitter,
    Facebook,
    LinkedIn,
}

impl ShareTarget {
    pub const ALL: [ShareTarget; 3] = [
        ShareTarget::Twitter,
        ShareTarget::Facebook,
        ShareTarget::LinkedIn,
    ];
}

/// Build the platform-specific share URL for a page. Deterministic:
/// same inputs, same link.
pub fn share_url(target: ShareTarget, page_url: &str, title: &str) -> Url {
    let (base, params): (&str, Vec<(&str, &str)>) = match target {
        ShareTarget::Twitter => (
            "https://twitter.com/intent/tweet",
            vec![("url", page_url), ("text", title)],
        ),
        ShareTarget::Facebook => (
            "https://www.facebook.com/sharer/sharer.php",
            vec![("u", page_url)],
        ),
        ShareTarget::LinkedIn => (
            "https://www.linkedin.com/sharing/share-offsite/",
            vec![("url", page_url)],
        ),
    };

    let mut url = Url::parse(base).expect("share bases are valid URLs");
    url.query_pairs_mut().extend_pairs(params);
    url
}
