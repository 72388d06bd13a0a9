use b23link::FetchError;
use b23link::config::FetchConfig;
use b23link::links::{ClassifierChain, HttpPageFetcher, PageFetcher};
use b23link::{LogNotifier, Resolver};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// Sends `https://b23.tv/<token>` requests to `<base>/<token>` on a local
/// mock server, through the real HTTP fetcher.
pub struct RoutedFetcher {
    inner: HttpPageFetcher,
    base: String,
}

impl RoutedFetcher {
    pub fn new(base: &str, config: &FetchConfig) -> Self {
        Self {
            inner: HttpPageFetcher::new(config).expect("client builds"),
            base: base.trim_end_matches('/').to_string(),
        }
    }
}

impl PageFetcher for RoutedFetcher {
    fn fetch<'a>(
        &'a self,
        url: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String, FetchError>> + Send + 'a>> {
        let token = url.rsplit('/').next().unwrap_or_default();
        let routed = format!("{}/{token}", self.base);
        Box::pin(async move { self.inner.fetch(&routed).await })
    }
}

pub fn routed_resolver(base: &str, config: &FetchConfig) -> Resolver {
    Resolver::new(
        Box::new(RoutedFetcher::new(base, config)),
        ClassifierChain::default(),
        Arc::new(LogNotifier),
    )
}

pub fn video_page(title: &str, bv: &str) -> String {
    format!(
        r#"<!DOCTYPE html><html><head>
<meta data-vue-meta="true" property="og:type" content="video">
<meta data-vue-meta="true" property="og:title" content="{title}_哔哩哔哩_bilibili">
<meta data-vue-meta="true" property="og:url" content="https://www.bilibili.com/video/{bv}/">
</head><body></body></html>"#
    )
}

pub fn live_page(title: &str, room_id: u64) -> String {
    format!(
        r#"<!DOCTYPE html><html><head>
<title id="link-app-title">{title} - 哔哩哔哩直播，二次元弹幕直播平台</title>
<meta name="description" content="Bilibili Live Room">
</head><body><script>window.__NEPTUNE_IS_MY_WAIFU__={{"roomInitRes":{{"data":{{"room_id":{room_id},"short_id":0}}}}}}</script></body></html>"#
    )
}

pub fn opus_page(title: &str, cv: &str) -> String {
    format!(
        r#"<!DOCTYPE html><html><head><title>{title} - 哔哩哔哩</title></head>
<body><div class="opus-module-copyright"><div class="opus-module-copyright__right">{cv}</div></div></body></html>"#
    )
}
