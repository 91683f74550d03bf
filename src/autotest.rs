//! Smoke test against the live publishers: one known paper per family, nothing opened.

use std::io::Write;

use crate::{command::Session, journal::PaperQuery};

pub const CASES: [(&str, &str, &str); 9] = [
    ("PRL", "48", "596"),
    ("PRA", "5", "2217"),
    ("RMP", "40", "677"),
    ("arxiv", "1706", "07781"),
    ("Nature", "415", "39"),
    ("NatPhys", "1", "23"),
    ("NJP", "12", "033007"),
    ("OL", "21", "1777"),
    ("SciPostPhys", "5", "055"),
];

pub fn run(session: &mut Session<'_>) -> anyhow::Result<()> {
    let mut quiet = Session {
        resolver: session.resolver,
        browser: session.browser,
        open_browser: false,
        out: &mut *session.out,
    };
    writeln!(quiet.out, "### Starting getpaper autotest")?;
    let mut found = 0;
    for (journal, volume, page) in CASES {
        writeln!(quiet.out, " $> getpaper {journal} {volume} {page}")?;
        if quiet.paper(&PaperQuery::new(journal, volume, page))?.found {
            found += 1;
        }
        writeln!(quiet.out)?;
    }
    writeln!(quiet.out, "### getpaper autotest finished: {found}/{} papers found", CASES.len())?;
    Ok(())
}
