use crate::{
    journal::PaperQuery,
    resolver::Resolution,
    strategy::{Env, Strategy, search_url},
};

/// IOP Publishing journals, keyed by ISSN.
///
/// `findcontent` redirects straight to the article, so the answer is wherever the request ends
/// up; no scraping needed.
pub struct Iop;

impl Strategy for Iop {
    fn resolve(&self, key: &str, query: &PaperQuery, env: &Env<'_>) -> Resolution {
        let url = search_url(
            &env.endpoints.iop,
            &[
                ("CF_JOURNAL", key),
                ("CF_VOLUME", query.volume.as_str()),
                ("CF_ISSUE", ""),
                ("CF_PAGE", query.page.as_str()),
                ("submit", "Go"),
                ("navsubmit", "Go"),
            ],
        );
        match env.fetcher.get(&url) {
            Ok(page) if page.is_ok() => Resolution::found(page.url.as_str()),
            Ok(page) => {
                tracing::debug!(status = page.status, url = %page.url, "IOP lookup returned an error");
                Resolution::degraded(
                    page.url.as_str(),
                    format!("{}\n{}", page.status, page.reason),
                )
            }
            Err(e) => {
                tracing::debug!(%url, "IOP lookup failed: {e:#}");
                Resolution::degraded(url.as_str(), format!("{e:#}"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{fetch::Fetcher, resolver::Endpoints};
    use httpmock::prelude::*;

    fn resolve_against(base: &str) -> Resolution {
        let endpoints = Endpoints::rooted_at(base);
        let env = Env {
            endpoints: &endpoints,
            fetcher: &Fetcher::quiet(),
        };
        Iop.resolve("1367-2630", &PaperQuery::new("NJP", "12", "033007"), &env)
    }

    #[test]
    fn follows_redirect_to_article() {
        let server = MockServer::start();
        let find = server.mock(|when, then| {
            when.method(GET)
                .path("/iop/findcontent")
                .query_param("CF_JOURNAL", "1367-2630")
                .query_param("CF_VOLUME", "12")
                .query_param_exists("CF_ISSUE")
                .query_param("CF_PAGE", "033007")
                .query_param("submit", "Go")
                .query_param("navsubmit", "Go");
            then.status(302)
                .header("Location", server.url("/article/10.1088/1367-2630/12/3/033007"));
        });
        server.mock(|when, then| {
            when.method(GET).path("/article/10.1088/1367-2630/12/3/033007");
            then.status(200).body("<html>article</html>");
        });

        let res = resolve_against(&server.base_url());
        find.assert();
        assert!(res.found);
        assert_eq!(res.url, server.url("/article/10.1088/1367-2630/12/3/033007"));
    }

    #[test]
    fn missing_article_keeps_final_url() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/iop/findcontent");
            then.status(404);
        });

        let res = resolve_against(&server.base_url());
        assert!(!res.found);
        assert!(res.url.contains("/iop/findcontent?CF_JOURNAL=1367-2630"));
        assert_eq!(res.note.as_deref(), Some("404\nNot Found"));
    }

    #[test]
    fn unreachable_server_returns_request_url() {
        let res = resolve_against("http://127.0.0.1:9");
        assert!(!res.found);
        assert!(res.url.starts_with("http://127.0.0.1:9/iop/findcontent?"));
        assert!(res.note.is_some());
    }
}
