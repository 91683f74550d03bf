/// Something that can show a URL to the user.
pub trait Browser {
    fn open(&self, url: &str) -> anyhow::Result<()>;
}

/// The desktop's default web browser.
pub struct SystemBrowser;

impl Browser for SystemBrowser {
    fn open(&self, url: &str) -> anyhow::Result<()> {
        tracing::debug!(url, "opening browser");
        webbrowser::open(url).map_err(|e| anyhow::anyhow!("could not open a browser for {url}: {e}"))
    }
}
