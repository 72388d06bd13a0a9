use super::Classifier;
use crate::links::types::{ContentKind, ResolvedLink};
use regex::Regex;
use std::sync::LazyLock;

const LEGACY_MARKER: &str = "read/cv";
const ARTICLE_READ_BASE: &str = "https://www.bilibili.com/read/";

static OG_TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"property="og:title" content="(.*?)">"#).unwrap());

static READ_URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(https?://www\.bilibili\.com/read/.+?)">"#).unwrap());

static OPUS_CV_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""opus-module-copyright__right">(cv.*?)</div>"#).unwrap()
});

static DOCUMENT_TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<title>(.*?) - 哔哩哔哩</title>").unwrap());

/// Column articles, in both the legacy `read/cv` layout and the newer opus
/// layout where only the copyright footer still names the `cv` id.
#[derive(Debug, Default, Clone, Copy)]
pub struct ArticleClassifier;

impl Classifier for ArticleClassifier {
    fn kind(&self) -> ContentKind {
        ContentKind::Article
    }

    fn classify(&self, _url: &str, body: &str) -> Option<ResolvedLink> {
        classify_legacy(body).or_else(|| classify_opus(body))
    }
}

fn classify_legacy(body: &str) -> Option<ResolvedLink> {
    if !is_legacy_article_page(body) {
        return None;
    }
    let title = legacy_article_title(body)?;
    let url = legacy_article_url(body)?;
    Some(ResolvedLink::new(url, title))
}

fn classify_opus(body: &str) -> Option<ResolvedLink> {
    let cv_id = opus_cv_id(body)?;
    let title = opus_title(body)?;
    Some(ResolvedLink::new(article_url(cv_id), title))
}

pub fn is_legacy_article_page(body: &str) -> bool {
    body.contains(LEGACY_MARKER)
}

pub fn legacy_article_title(body: &str) -> Option<&str> {
    first_capture(&OG_TITLE_RE, body)
}

/// First absolute `/read/...` URL closed by `">`.
pub fn legacy_article_url(body: &str) -> Option<&str> {
    first_capture(&READ_URL_RE, body)
}

/// `cv` id from the opus copyright footer.
pub fn opus_cv_id(body: &str) -> Option<&str> {
    first_capture(&OPUS_CV_RE, body)
}

/// Document `<title>` with the ` - 哔哩哔哩` suffix removed.
pub fn opus_title(body: &str) -> Option<&str> {
    first_capture(&DOCUMENT_TITLE_RE, body)
}

pub fn article_url(cv_id: &str) -> String {
    format!("{ARTICLE_READ_BASE}{cv_id}")
}

fn first_capture<'a>(re: &Regex, body: &'a str) -> Option<&'a str> {
    re.captures(body)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim())
        .filter(|s| !s.is_empty())
}
