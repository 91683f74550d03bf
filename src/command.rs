use std::io::Write;

use owo_colors::{OwoColorize, Stream};

use crate::{
    autotest,
    browser::Browser,
    journal::{self, PaperQuery},
    resolver::{Resolution, Resolver},
    strategy::{arxiv, doi},
};

pub const HELP: &str = "
    getpaper: open a scientific paper from its reference.

    Give the journal, the volume and the first page. getpaper asks the journal's
    own search engine for the paper and opens it in a new browser tab; when the
    paper cannot be pinned down, the search page is opened instead.

    Examples:
        $> getpaper PRA 46 2668
        $> getpaper Nature 519 211
        $> getpaper arxiv 1706 07781

    From a DOI or an arXiv identifier:
        $> getpaper doi 10.1103/physrevx.8.031054
        $> getpaper arxiv 1706.07781

    Other commands:
        $> getpaper journals    list the implemented journals
        $> getpaper autotest    resolve a fixed set of papers without opening them

    Options (before the reference):
        -n, --no-browser        print the URL only
        -v, --verbose           log requests to stderr (repeat for more)
";

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("{code} is not an implemented journal\n{listing}", listing = journal::listing())]
    UnknownJournal { code: String },
}

/// One invocation, decided by the number of words given.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Help,
    Journals,
    Autotest,
    Doi(String),
    ArxivId(String),
    Paper(PaperQuery),
}

impl Command {
    /// Interpret the positional words. Only the three-word form can fail, and only when the
    /// journal is not in the registry.
    pub fn parse(words: &[String]) -> Result<Command, CommandError> {
        let cmd = match words {
            [option] if option.eq_ignore_ascii_case("journals") => Command::Journals,
            [option] if option.eq_ignore_ascii_case("autotest") => Command::Autotest,
            [mode, doi] if mode.eq_ignore_ascii_case("doi") => Command::Doi(doi.clone()),
            [mode, id] if mode.eq_ignore_ascii_case("arxiv") => Command::ArxivId(id.clone()),
            [code, volume, page] => {
                if !journal::is_known(code) {
                    return Err(CommandError::UnknownJournal { code: code.clone() });
                }
                Command::Paper(PaperQuery::new(code.as_str(), volume.as_str(), page.as_str()))
            }
            _ => Command::Help,
        };
        Ok(cmd)
    }
}

/// Everything a command needs to run: how to resolve, where to print, whether to open.
pub struct Session<'a> {
    pub resolver: &'a Resolver,
    pub browser: &'a dyn Browser,
    /// `false` under `--no-browser` and inside the self-test.
    pub open_browser: bool,
    pub out: &'a mut dyn Write,
}

impl Session<'_> {
    pub fn run(&mut self, command: Command) -> anyhow::Result<()> {
        match command {
            Command::Help => writeln!(self.out, "{HELP}")?,
            Command::Journals => writeln!(self.out, "{}", journal::listing())?,
            Command::Autotest => autotest::run(self)?,
            Command::Doi(id) => self.go(&doi::doi_url(&id))?,
            Command::ArxivId(id) => self.go(&arxiv::abs_url(&id))?,
            Command::Paper(query) => {
                self.paper(&query)?;
            }
        }
        Ok(())
    }

    /// Resolve a citation, report any degradation, then go to whatever URL came back.
    pub fn paper(&mut self, query: &PaperQuery) -> anyhow::Result<Resolution> {
        let res = self.resolver.resolve(query);
        if let Some(note) = &res.note {
            eprintln!(
                "{} {note}",
                "Error :".if_supports_color(Stream::Stderr, |t| t.red())
            );
        }
        self.go(&res.url)?;
        Ok(res)
    }

    fn go(&mut self, url: &str) -> anyhow::Result<()> {
        writeln!(self.out, " >>> going to {url}")?;
        if self.open_browser
            && let Err(e) = self.browser.open(url)
        {
            // The URL is already printed; failing to launch a browser is not fatal.
            eprintln!(
                "{} {e:#}",
                "warning:".if_supports_color(Stream::Stderr, |t| t.yellow())
            );
        }
        Ok(())
    }
}
