//! Rewriting of versioned documentation URLs.
//!
//! Two URL families are recognized:
//! - guides: `https://<guides_host>/<release|vX.Y.Z>[/]`, rewritten to `vX.Y.Z`
//!   using the patch form of the target version
//! - api: `https://<api_host>/<product>/<release|X.Y>[/]`, rewritten to the
//!   target version verbatim
//!
//! The guides pass runs over the whole text before the api pass.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::config::UrlsConfig;
use crate::domain::TargetVersion;
use crate::error::Result;

/// Literal alias for "the current release" in both URL families.
pub const RELEASE_SEGMENT: &str = "release";

static DEFAULT_REWRITER: LazyLock<Rewriter> = LazyLock::new(|| {
    Rewriter::new(&UrlsConfig::default()).expect("Invalid default URL patterns")
});

/// Compiled URL patterns for one pair of documentation hosts.
#[derive(Debug, Clone)]
pub struct Rewriter {
    guides: Regex,
    api: Regex,
}

impl Rewriter {
    /// Compiles the guides and api patterns for the configured hosts.
    ///
    /// Host and product names are matched literally.
    pub fn new(urls: &UrlsConfig) -> Result<Self> {
        // A version segment is either the release alias or a dotted number.
        // Whatever else belongs to the same path segment lands in `rest`; a
        // dot only continues the segment when a word character follows it.
        let version =
            r"(?P<version>release|v?\d+(?:\.\d+)*)(?P<rest>(?:[\w\-]|\.[\w\-])*)(?P<slash>/?)";

        let guides = Regex::new(&format!(
            r"https://{}/{}",
            regex::escape(&urls.guides_host),
            version
        ))?;

        let mut products: Vec<&str> = urls.api_products.iter().map(String::as_str).collect();
        products.sort_by(|a, b| b.len().cmp(&a.len()));
        let products = products
            .iter()
            .map(|p| regex::escape(p))
            .collect::<Vec<_>>()
            .join("|");

        let api = Regex::new(&format!(
            r"https://{}/(?P<product>{})/{}",
            regex::escape(&urls.api_host),
            products,
            version
        ))?;

        Ok(Rewriter { guides, api })
    }

    /// Rewrites every recognized URL in `text` to point at `target`.
    ///
    /// Text without recognized URLs is returned unchanged.
    pub fn rewrite(&self, text: &str, target: &TargetVersion) -> String {
        let guides = self.rewrite_guides(text, target);
        self.rewrite_api(&guides, target).into_owned()
    }

    /// Replaces `release` or `vX.Y.Z` in guides URLs with the patch form of
    /// `target`, prefixed by `v`.
    pub fn rewrite_guides<'t>(&self, text: &'t str, target: &TargetVersion) -> Cow<'t, str> {
        let replacement = format!("v{}", target.patch_version());
        self.guides.replace_all(text, |caps: &Captures| {
            let segment = &caps["version"];
            let matches = caps["rest"].is_empty()
                && (segment == RELEASE_SEGMENT
                    || segment
                        .strip_prefix('v')
                        .is_some_and(|number| component_count(number) == 3));
            replace_segment(caps, &replacement, matches)
        })
    }

    /// Replaces `release` or `X.Y` in api URLs with `target` as given.
    pub fn rewrite_api<'t>(&self, text: &'t str, target: &TargetVersion) -> Cow<'t, str> {
        self.api.replace_all(text, |caps: &Captures| {
            let segment = &caps["version"];
            let matches = caps["rest"].is_empty()
                && (segment == RELEASE_SEGMENT
                    || (!segment.starts_with('v') && component_count(segment) == 2));
            replace_segment(caps, target.as_str(), matches)
        })
    }
}

impl Default for Rewriter {
    fn default() -> Self {
        DEFAULT_REWRITER.clone()
    }
}

/// Rewrites the default Ember guides and api URLs in `text` to `target`.
pub fn rewrite(text: &str, target: &str) -> String {
    DEFAULT_REWRITER.rewrite(text, &TargetVersion::new(target))
}

fn component_count(number: &str) -> usize {
    number.split('.').count()
}

/// Rebuilds the matched URL with its version segment swapped, or returns it
/// untouched when the segment has the wrong shape.
fn replace_segment(caps: &Captures, replacement: &str, matches: bool) -> String {
    let whole = &caps[0];
    match (matches, caps.get(0), caps.name("version")) {
        (true, Some(url), Some(version)) => {
            let prefix = &whole[..version.start() - url.start()];
            format!("{}{}{}", prefix, replacement, &caps["slash"])
        }
        _ => whole.to_string(),
    }
}
