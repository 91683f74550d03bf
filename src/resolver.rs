use url::Url;

use crate::{
    fetch::Fetcher,
    journal::{self, PaperQuery},
    strategy::{self, Env},
};

/// Where a query lands when the journal is not one we know.
pub const FALLBACK_URL: &str = "https://scholar.google.com/";

/// Outcome of resolving a citation.
///
/// `found == false` means `url` is a best-effort landing page (a search page or the fallback)
/// rather than the paper itself; `note` then says why.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub url: String,
    pub found: bool,
    pub note: Option<String>,
}

impl Resolution {
    pub fn found(url: impl Into<String>) -> Self {
        Resolution {
            url: url.into(),
            found: true,
            note: None,
        }
    }

    pub fn degraded(url: impl Into<String>, note: impl Into<String>) -> Self {
        Resolution {
            url: url.into(),
            found: false,
            note: Some(note.into()),
        }
    }
}

/// Search endpoints of the publishers that need one.
#[derive(Clone, Debug)]
pub struct Endpoints {
    pub science: Url,
    pub nature: Url,
    pub iop: Url,
    pub osa: Url,
    pub scipost: Url,
}

impl Default for Endpoints {
    fn default() -> Self {
        fn url(s: &str) -> Url {
            Url::parse(s).expect("static endpoint URL")
        }
        Endpoints {
            science: url("https://www.science.org/action/doSearch"),
            nature: url("https://www.nature.com/search"),
            iop: url("http://iopscience.iop.org/findcontent"),
            osa: url("https://www.osapublishing.org/search.cfm"),
            scipost: url("https://scipost.org/search"),
        }
    }
}

#[cfg(test)]
impl Endpoints {
    /// Every endpoint under one local server, each publisher in its own directory.
    pub fn rooted_at(base: &str) -> Self {
        let base = Url::parse(base).expect("base URL");
        let at = |path: &str| base.join(path).expect("endpoint path");
        Endpoints {
            science: at("/science/action/doSearch"),
            nature: at("/nature/search"),
            iop: at("/iop/findcontent"),
            osa: at("/osa/search.cfm"),
            scipost: at("/scipost/search"),
        }
    }
}

/// Routes a [`PaperQuery`] to the strategy of its journal's family.
pub struct Resolver {
    endpoints: Endpoints,
    fetcher: Fetcher,
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new(Endpoints::default(), Fetcher::new())
    }
}

impl Resolver {
    pub fn new(endpoints: Endpoints, fetcher: Fetcher) -> Self {
        Resolver { endpoints, fetcher }
    }

    /// Resolve `query` to the best URL available. Never fails: unknown journals land on
    /// [`FALLBACK_URL`] and publisher trouble lands on the publisher's search page.
    pub fn resolve(&self, query: &PaperQuery) -> Resolution {
        let Some(entry) = journal::lookup(&query.journal.to_lowercase()) else {
            tracing::debug!(journal = %query.journal, "unknown journal, using fallback");
            return Resolution::degraded(
                FALLBACK_URL,
                format!("{} is not an implemented journal", query.journal),
            );
        };
        tracing::debug!(family = %entry.family, key = entry.key, %query, "dispatching");
        let env = Env {
            endpoints: &self.endpoints,
            fetcher: &self.fetcher,
        };
        strategy::for_family(entry.family).resolve(entry.key, query, &env)
    }
}
