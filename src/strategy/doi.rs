use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

pub(crate) const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// `https://doi.org/{doi}`. The DOI is taken as typed; only characters that would break the
/// URL path are escaped, and nothing checks that it is registered.
pub fn doi_url(doi: &str) -> String {
    let doi = doi.trim();
    format!(
        "https://doi.org/{}",
        utf8_percent_encode(doi, PATH_SEGMENT_ENCODE_SET)
    )
}
