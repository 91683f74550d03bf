use crate::{
    journal::PaperQuery,
    resolver::Resolution,
    strategy::{Env, Strategy, doi::doi_url},
};

/// American Physical Society journals.
///
/// APS's citation search only answers POST requests, but every APS paper has a DOI of the form
/// `10.1103/{journal}.{volume}.{page}`, so the URL is built directly and doi.org does the rest.
pub struct Aps;

impl Strategy for Aps {
    fn resolve(&self, key: &str, query: &PaperQuery, _env: &Env<'_>) -> Resolution {
        Resolution::found(doi_url(&format!(
            "10.1103/{key}.{}.{}",
            query.volume, query.page
        )))
    }
}
