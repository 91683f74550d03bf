use crate::{
    journal::PaperQuery,
    resolver::Resolution,
    scrape::{self, Selector},
    strategy::{Env, Strategy, scrape_search, search_url},
};

/// SciPost Physics.
///
/// The site search is free text, so the query is the journal's citation abbreviation followed
/// by volume and page. Each hit is an `<h3 class="my-0">` wrapping a link to the paper.
pub struct SciPostPhys;

const RESULT_HEADING: Selector<'static> = Selector::new("h3", &[("class", "my-0")]);
const LINK: Selector<'static> = Selector::new("a", &[]);

impl Strategy for SciPostPhys {
    fn resolve(&self, key: &str, query: &PaperQuery, env: &Env<'_>) -> Resolution {
        let phrase = format!("{key} {} {}", query.volume, query.page);
        let url = search_url(&env.endpoints.scipost, &[("q", phrase.as_str())]);
        scrape_search(env, url, |html| {
            scrape::find_first(html, &RESULT_HEADING)?
                .find(&LINK)?
                .attr("href")
        })
    }
}
