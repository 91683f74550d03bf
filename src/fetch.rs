use std::time::Duration;

use anyhow::Context;
use indicatif::{ProgressBar, ProgressStyle};
use ureq::ResponseExt;
use url::Url;

const USER_AGENT: &str = "Mozilla/5.0 (compatible; getpaper/0.1; +https://doi.org)";

/// A fetched page: status, where redirects ended up, and the body when it was a 200.
#[derive(Debug)]
pub struct Page {
    pub status: u16,
    pub reason: &'static str,
    pub url: Url,
    pub body: String,
}

impl Page {
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// Blocking HTTP client shared by the search-based strategies.
///
/// Redirects are followed and non-2xx statuses come back as a [`Page`] rather than an error,
/// so callers can still fall back to the URL the server sent them to.
pub struct Fetcher {
    agent: ureq::Agent,
    spinner: bool,
}

impl Default for Fetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Fetcher {
    pub fn new() -> Self {
        let cfg = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_connect(Some(Duration::from_secs(10)))
            .build();
        Fetcher {
            agent: ureq::Agent::new_with_config(cfg),
            spinner: true,
        }
    }

    /// Same client without the progress spinner.
    pub fn quiet() -> Self {
        Fetcher {
            spinner: false,
            ..Self::new()
        }
    }

    pub fn get(&self, url: &Url) -> anyhow::Result<Page> {
        tracing::debug!(%url, "GET");
        let progress = self.progress(url);

        let res = self
            .agent
            .get(url.as_str())
            .header("User-Agent", USER_AGENT)
            .call();
        progress.finish_and_clear();
        let mut res = res.with_context(|| format!("request to {url} failed"))?;

        let status = res.status();
        let final_url = Url::parse(&res.get_uri().to_string()).unwrap_or_else(|_| url.clone());
        tracing::debug!(status = status.as_u16(), url = %final_url, "response");

        // A body that cannot be read still leaves the caller with the final URL.
        let body = if status.as_u16() == 200 {
            match res.body_mut().read_to_vec() {
                Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
                Err(e) => {
                    tracing::debug!(url = %final_url, "failed to read response body: {e}");
                    String::new()
                }
            }
        } else {
            String::new()
        };

        Ok(Page {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or(""),
            url: final_url,
            body,
        })
    }

    fn progress(&self, url: &Url) -> ProgressBar {
        if !self.spinner {
            return ProgressBar::hidden();
        }
        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
            pb.set_style(style);
        }
        pb.set_message(format!("querying {}", url.host_str().unwrap_or("server")));
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[test]
    fn returns_body_and_final_url_after_redirect() {
        let server = MockServer::start();
        let target = server.mock(|when, then| {
            when.method(GET).path("/paper");
            then.status(200).body("<html>paper</html>");
        });
        server.mock(|when, then| {
            when.method(GET).path("/find");
            then.status(302).header("Location", server.url("/paper"));
        });

        let page = Fetcher::quiet()
            .get(&Url::parse(&server.url("/find")).unwrap())
            .expect("fetch");
        target.assert();
        assert!(page.is_ok());
        assert_eq!(page.url.path(), "/paper");
        assert_eq!(page.body, "<html>paper</html>");
    }

    #[test]
    fn undecodable_body_keeps_the_final_url() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/article");
            then.status(200).body(b"<a href=\"/x\">caf\xe9</a>".as_slice());
        });
        server.mock(|when, then| {
            when.method(GET).path("/find");
            then.status(302).header("Location", server.url("/article"));
        });

        let page = Fetcher::quiet()
            .get(&Url::parse(&server.url("/find")).unwrap())
            .expect("a bad body is not a transport error");
        assert!(page.is_ok());
        assert_eq!(page.url.path(), "/article");
        assert!(page.body.starts_with(r#"<a href="/x">caf"#));
    }

    #[test]
    fn error_status_is_a_value_not_an_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/search");
            then.status(503);
        });

        let page = Fetcher::quiet()
            .get(&Url::parse(&server.url("/search")).unwrap())
            .expect("non-2xx is not a transport error");
        assert!(!page.is_ok());
        assert_eq!(page.status, 503);
        assert_eq!(page.reason, "Service Unavailable");
        assert!(page.body.is_empty());
    }

    #[test]
    fn unreachable_host_is_an_error() {
        // Port 9 (discard) is closed on any sane test machine.
        let url = Url::parse("http://127.0.0.1:9/").unwrap();
        let err = Fetcher::quiet().get(&url).unwrap_err();
        assert!(err.to_string().contains("request to http://127.0.0.1:9/ failed"));
    }
}
