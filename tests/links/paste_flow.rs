use super::link_harness::{routed_resolver, video_page};
use b23link::config::FetchConfig;
use b23link::{PasteOutcome, WriterTarget, handle_paste};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn paste_is_rewritten_into_target() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/p1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(video_page("Pasted", "BV1p1")))
        .mount(&server)
        .await;

    let resolver = routed_resolver(&server.uri(), &FetchConfig::default());
    let mut target = WriterTarget::new(Vec::new());

    let outcome = handle_paste(&resolver, &mut target, "【Pasted】 https://b23.tv/p1").await;

    assert_eq!(outcome, PasteOutcome::Replaced);
    assert_eq!(
        String::from_utf8(target.into_inner()).unwrap(),
        "【Pasted】 [Pasted](https://www.bilibili.com/video/BV1p1)"
    );
}

#[tokio::test]
async fn failed_paste_resolution_leaves_target_empty() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .mount(&server)
        .await;

    let resolver = routed_resolver(&server.uri(), &FetchConfig::default());
    let mut target = WriterTarget::new(Vec::new());

    let outcome = handle_paste(&resolver, &mut target, "b23.tv/broken").await;

    assert_eq!(outcome, PasteOutcome::Untouched);
    assert!(target.into_inner().is_empty());
}
