//! Static table of the journals `getpaper` knows how to resolve.

use std::fmt;

/// Publisher family. Journals in the same family share one resolution mechanism.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Family {
    Aps,
    Science,
    Nature,
    Arxiv,
    Iop,
    Osa,
    SciPostPhys,
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Family::Aps => "APS",
            Family::Science => "Science",
            Family::Nature => "Nature",
            Family::Arxiv => "arXiv",
            Family::Iop => "IOP",
            Family::Osa => "OSA",
            Family::SciPostPhys => "SciPost Physics",
        };
        f.write_str(name)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct JournalEntry {
    /// Short code typed by the user; matched case-insensitively.
    pub code: &'static str,
    pub family: Family,
    /// Publisher-side name for the journal (DOI slug, search code, ISSN...).
    pub key: &'static str,
}

const fn entry(code: &'static str, family: Family, key: &'static str) -> JournalEntry {
    JournalEntry { code, family, key }
}

/// Every known journal, grouped by family.
///
/// NOTE: Ordering is the dispatch priority (APS, Science, Nature, arXiv, IOP, OSA, SciPost)
/// and also the order of the `journals` listing.
static JOURNALS: &[JournalEntry] = &[
    entry("PRL", Family::Aps, "PhysRevLett"),
    entry("PRX", Family::Aps, "PhysRevX"),
    entry("RMP", Family::Aps, "RevModPhys"),
    entry("PRA", Family::Aps, "PhysRevA"),
    entry("PRB", Family::Aps, "PhysRevB"),
    entry("PRC", Family::Aps, "PhysRevC"),
    entry("PRD", Family::Aps, "PhysRevD"),
    entry("PRE", Family::Aps, "PhysRevE"),
    entry("PRR", Family::Aps, "PhysRevResearch"),
    entry("PRApp", Family::Aps, "PhysRevApplied"),
    entry("PRXQuantum", Family::Aps, "PRXQuantum"),
    entry("Science", Family::Science, "science"),
    entry("Nature", Family::Nature, "nature"),
    entry("NatPhys", Family::Nature, "nphys"),
    entry("arxiv", Family::Arxiv, "arxiv"),
    entry("JPBold", Family::Iop, "0022-3700"),
    entry("JPB", Family::Iop, "0953-4075"),
    entry("NJP", Family::Iop, "1367-2630"),
    entry("OL", Family::Osa, "ol"),
    entry("OE", Family::Osa, "oe"),
    entry("Optica", Family::Osa, "optica"),
    entry("AO", Family::Osa, "ao"),
    // Two spellings of the same journal; the search phrase is fixed, not derived from the code.
    entry("SPP", Family::SciPostPhys, "SciPost Phys"),
    entry("SciPostPhys", Family::SciPostPhys, "SciPost Phys"),
];

/// Find the journal registered under `code`, ignoring ASCII case.
pub fn lookup(code: &str) -> Option<&'static JournalEntry> {
    JOURNALS.iter().find(|j| j.code.eq_ignore_ascii_case(code))
}

pub fn is_known(code: &str) -> bool {
    lookup(code).is_some()
}

pub fn codes() -> impl Iterator<Item = &'static str> {
    JOURNALS.iter().map(|j| j.code)
}

/// `available journals : PRL, PRX, ...`
pub fn listing() -> String {
    format!(
        "available journals : {}",
        codes().collect::<Vec<_>>().join(", ")
    )
}

/// A citation as typed by the user. Volume and page stay textual (`033007` is a valid page).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaperQuery {
    pub journal: String,
    pub volume: String,
    pub page: String,
}

impl PaperQuery {
    pub fn new(
        journal: impl Into<String>,
        volume: impl Into<String>,
        page: impl Into<String>,
    ) -> Self {
        PaperQuery {
            journal: journal.into(),
            volume: volume.into(),
            page: page.into(),
        }
    }
}

impl fmt::Display for PaperQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.journal, self.volume, self.page)
    }
}
