use crate::{
    journal::PaperQuery,
    resolver::Resolution,
    scrape::Selector,
    strategy::{Env, Strategy, first_href, scrape_search, search_url},
};

/// Nature Portfolio journals.
///
/// nature.com's search takes plain GET parameters; the top hit is the anchor carrying the
/// "view article" tracking attribute.
pub struct Nature;

const FIRST_RESULT: Selector<'static> = Selector::new(
    "a",
    &[("itemprop", "url"), ("data-track-action", "view article")],
);

impl Strategy for Nature {
    fn resolve(&self, key: &str, query: &PaperQuery, env: &Env<'_>) -> Resolution {
        let url = search_url(
            &env.endpoints.nature,
            &[
                ("journal", key),
                ("order", "relevance"),
                ("volume", query.volume.as_str()),
                ("spage", query.page.as_str()),
            ],
        );
        scrape_search(env, url, |html| first_href(html, &FIRST_RESULT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{fetch::Fetcher, resolver::Endpoints};
    use httpmock::prelude::*;

    const RESULTS: &str = r#"<html><body><ul>
        <li><a class="c-card__link" href="/articles/415039a" itemprop="url"
               data-track="click" data-track-action="view article">Quantum phase transition</a></li>
        <li><a href="/articles/nature00000" itemprop="url" data-track-action="view article">Other</a></li>
    </ul></body></html>"#;

    fn resolve_against(server: &MockServer) -> Resolution {
        let endpoints = Endpoints::rooted_at(&server.base_url());
        let env = Env {
            endpoints: &endpoints,
            fetcher: &Fetcher::quiet(),
        };
        Nature.resolve("nature", &PaperQuery::new("Nature", "415", "39"), &env)
    }

    #[test]
    fn returns_first_article_link() {
        let server = MockServer::start();
        let search = server.mock(|when, then| {
            when.method(GET)
                .path("/nature/search")
                .query_param("journal", "nature")
                .query_param("order", "relevance")
                .query_param("volume", "415")
                .query_param("spage", "39");
            then.status(200)
                .header("content-type", "text/html")
                .body(RESULTS);
        });

        let res = resolve_against(&server);
        search.assert();
        assert!(res.found);
        assert_eq!(res.url, server.url("/articles/415039a"));
        assert!(res.note.is_none());
    }

    #[test]
    fn empty_results_fall_back_to_search_page() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/nature/search");
            then.status(200).body("<html><p>No results</p></html>");
        });

        let res = resolve_against(&server);
        assert!(!res.found);
        assert!(res.url.starts_with(&server.url("/nature/search?journal=nature")));
        assert_eq!(res.note.as_deref(), Some("paper not found"));
    }

    #[test]
    fn error_status_falls_back_to_search_page() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/nature/search");
            then.status(404);
        });

        let res = resolve_against(&server);
        assert!(!res.found);
        assert!(res.url.contains("/nature/search?"));
        assert_eq!(res.note.as_deref(), Some("404\nNot Found"));
    }
}
