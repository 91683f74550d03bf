use percent_encoding::utf8_percent_encode;

use crate::{
    journal::PaperQuery,
    resolver::Resolution,
    strategy::{Env, Strategy, doi::PATH_SEGMENT_ENCODE_SET},
};

/// arXiv, addressed as `arxiv YYMM NNNNN`.
pub struct Arxiv;

impl Strategy for Arxiv {
    fn resolve(&self, _key: &str, query: &PaperQuery, _env: &Env<'_>) -> Resolution {
        Resolution::found(abs_url(&format!("{}.{}", query.volume, query.page)))
    }
}

/// `https://arxiv.org/abs/{id}` for an identifier in its dotted (or legacy `archive/NNNNNNN`)
/// form. The identifier is not checked against arXiv.
pub fn abs_url(id: &str) -> String {
    format!(
        "https://arxiv.org/abs/{}",
        utf8_percent_encode(id.trim(), PATH_SEGMENT_ENCODE_SET)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{fetch::Fetcher, resolver::Endpoints};

    #[test]
    fn joins_volume_and_page_with_a_dot() {
        let env = Env {
            endpoints: &Endpoints::default(),
            fetcher: &Fetcher::quiet(),
        };
        let res = Arxiv.resolve("arxiv", &PaperQuery::new("arxiv", "1706", "07781"), &env);
        assert!(res.found);
        assert_eq!(res.url, "https://arxiv.org/abs/1706.07781");
    }

    #[test]
    fn direct_ids_pass_through() {
        assert_eq!(abs_url("1706.07781"), "https://arxiv.org/abs/1706.07781");
        assert_eq!(abs_url("1706.07781v2"), "https://arxiv.org/abs/1706.07781v2");
        assert_eq!(
            abs_url("hep-th/9711200"),
            "https://arxiv.org/abs/hep-th/9711200"
        );
        assert_eq!(abs_url("math.GT/0309136"), "https://arxiv.org/abs/math.GT/0309136");
    }

    #[test]
    fn stray_characters_are_escaped() {
        assert_eq!(abs_url("1706 07781"), "https://arxiv.org/abs/1706%2007781");
    }
}
