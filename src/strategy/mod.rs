use url::Url;

use crate::{
    fetch::Fetcher,
    journal::{Family, PaperQuery},
    resolver::{Endpoints, Resolution},
    scrape::{self, Selector},
};

pub mod aps;
pub mod arxiv;
pub mod doi;
pub mod iop;
pub mod nature;
pub mod osa;
pub mod science;
pub mod scipost;

/// What a strategy may use while resolving: where the publishers live and how to reach them.
pub struct Env<'a> {
    pub endpoints: &'a Endpoints,
    pub fetcher: &'a Fetcher,
}

/// Turns a journal's publisher key plus volume and page into a URL for one publisher family.
pub trait Strategy {
    fn resolve(&self, key: &str, query: &PaperQuery, env: &Env<'_>) -> Resolution;
}

/// Pick the strategy for `family`.
pub fn for_family(family: Family) -> &'static dyn Strategy {
    match family {
        Family::Aps => &aps::Aps,
        Family::Science => &science::Science,
        Family::Nature => &nature::Nature,
        Family::Arxiv => &arxiv::Arxiv,
        Family::Iop => &iop::Iop,
        Family::Osa => &osa::Osa,
        Family::SciPostPhys => &scipost::SciPostPhys,
    }
}

/// `base?k1=v1&k2=v2...`, form-encoded, keeping empty values (`q=`).
pub(crate) fn search_url(base: &Url, params: &[(&str, &str)]) -> Url {
    let mut url = base.clone();
    url.query_pairs_mut().clear().extend_pairs(params);
    url
}

/// Fetch a search page and pull the paper link out of it.
///
/// `pick` receives the 200 body and returns the `href` it found; relative links are resolved
/// against the page's final URL. Anything short of a link degrades to the search page itself.
pub(crate) fn scrape_search(
    env: &Env<'_>,
    url: Url,
    pick: impl FnOnce(&str) -> Option<String>,
) -> Resolution {
    let page = match env.fetcher.get(&url) {
        Ok(page) => page,
        Err(e) => {
            tracing::debug!(%url, "search request failed: {e:#}");
            return Resolution::degraded(url.as_str(), format!("{e:#}"));
        }
    };
    if !page.is_ok() {
        tracing::debug!(status = page.status, url = %page.url, "search page returned an error");
        return Resolution::degraded(
            page.url.as_str(),
            format!("{}\n{}", page.status, page.reason),
        );
    }
    match pick(&page.body).and_then(|href| scrape::absolutise(&page.url, &href).ok()) {
        Some(link) => {
            tracing::debug!(%link, "search result found");
            Resolution::found(link.as_str())
        }
        None => Resolution::degraded(page.url.as_str(), "paper not found"),
    }
}

/// `href` of the first element matching `selector`.
pub(crate) fn first_href(html: &str, selector: &Selector<'_>) -> Option<String> {
    scrape::find_first(html, selector)?.attr("href")
}
