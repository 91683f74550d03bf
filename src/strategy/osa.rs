use crate::{
    journal::PaperQuery,
    resolver::Resolution,
    strategy::{Env, Strategy, search_url},
};

/// Optica Publishing Group (formerly OSA) journals.
///
/// The search page takes a while to produce results, so it is opened as-is rather than fetched.
pub struct Osa;

impl Strategy for Osa {
    fn resolve(&self, key: &str, query: &PaperQuery, env: &Env<'_>) -> Resolution {
        let url = search_url(
            &env.endpoints.osa,
            &[
                ("j", key),
                ("q", ""),
                ("i", ""),
                ("v", query.volume.as_str()),
                ("p", query.page.as_str()),
            ],
        );
        Resolution::found(url.as_str())
    }
}
