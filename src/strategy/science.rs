use crate::{
    journal::PaperQuery,
    resolver::Resolution,
    strategy::{Env, Strategy, search_url},
};

/// Science (AAAS).
///
/// The results page is rendered client-side, so there is nothing to scrape: the search URL is
/// the answer and the browser finishes the job.
pub struct Science;

impl Strategy for Science {
    fn resolve(&self, key: &str, query: &PaperQuery, env: &Env<'_>) -> Resolution {
        let url = search_url(
            &env.endpoints.science,
            &[
                ("SeriesKey", key),
                ("quickLinkJournal", key),
                ("Volume", query.volume.as_str()),
                ("FirstPage", query.page.as_str()),
            ],
        );
        Resolution::found(url.as_str())
    }
}
