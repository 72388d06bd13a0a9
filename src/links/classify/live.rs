use super::Classifier;
use crate::links::types::{ContentKind, ResolvedLink};
use regex::Regex;
use std::sync::LazyLock;

const LIVE_MARKER: &str = "Bilibili Live Room";
const LIVE_ROOM_BASE: &str = "https://live.bilibili.com/";

static ROOM_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""room_id":(\d+),"#).unwrap());

static TITLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<title id="link-app-title">(.*?) - 哔哩哔哩直播，二次元弹幕直播平台"#).unwrap()
});

/// Live rooms: canonical URL is rebuilt from the embedded numeric room id.
#[derive(Debug, Default, Clone, Copy)]
pub struct LiveClassifier;

impl Classifier for LiveClassifier {
    fn kind(&self) -> ContentKind {
        ContentKind::Live
    }

    fn classify(&self, _url: &str, body: &str) -> Option<ResolvedLink> {
        if !is_live_page(body) {
            return None;
        }
        let room_id = live_room_id(body)?;
        let title = live_room_title(body).map_or_else(|| fallback_title(room_id), str::to_string);
        Some(ResolvedLink::new(live_room_url(room_id), title))
    }
}

pub fn is_live_page(body: &str) -> bool {
    body.contains(LIVE_MARKER)
}

/// First `"room_id":<digits>,` value in the embedded page state.
pub fn live_room_id(body: &str) -> Option<&str> {
    ROOM_ID_RE
        .captures(body)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

pub fn live_room_url(room_id: &str) -> String {
    format!("{LIVE_ROOM_BASE}{room_id}")
}

/// Text of the `link-app-title` element minus the platform tagline.
pub fn live_room_title(body: &str) -> Option<&str> {
    TITLE_RE
        .captures(body)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim())
        .filter(|t| !t.is_empty())
}

fn fallback_title(room_id: &str) -> String {
    format!("Live Room {room_id}")
}
