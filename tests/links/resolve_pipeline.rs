use super::link_harness::{live_page, opus_page, routed_resolver, video_page};
use b23link::config::FetchConfig;
use b23link::links::ResolutionOutcome;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn video_short_link_becomes_markdown() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/abcd1234"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(video_page("My Video Title", "BV1xx411c7abc")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let resolver = routed_resolver(&server.uri(), &FetchConfig::default());
    let out = resolver.resolve("check this https://b23.tv/abcd1234").await;

    assert!(out.modified);
    assert_eq!(
        out.text,
        "check this [My Video Title](https://www.bilibili.com/video/BV1xx411c7abc)"
    );
}

#[tokio::test]
async fn text_without_short_links_makes_no_requests() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let resolver = routed_resolver(&server.uri(), &FetchConfig::default());
    let input = "already [done](https://www.bilibili.com/video/BV1done)";
    let out = resolver.resolve(input).await;

    assert!(!out.modified);
    assert_eq!(out.text, input);
}

#[tokio::test]
async fn timed_out_link_does_not_block_the_next() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/stuck"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(video_page("Never Seen", "BV1never"))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/live1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(live_page("Studio", 8086)))
        .mount(&server)
        .await;

    let config = FetchConfig {
        timeout_secs: 1,
        ..FetchConfig::default()
    };
    let resolver = routed_resolver(&server.uri(), &config);
    let (out, reports) = resolver
        .resolve_detailed("b23.tv/stuck and b23.tv/live1")
        .await;

    assert!(out.modified);
    assert_eq!(
        out.text,
        "b23.tv/stuck and [Studio](https://live.bilibili.com/8086)"
    );
    assert_eq!(reports[0].outcome, ResolutionOutcome::FetchFailed);
}

#[tokio::test]
async fn identical_links_are_each_fetched() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/twice"))
        .respond_with(ResponseTemplate::new(200).set_body_string(opus_page("Essay", "cv999")))
        .expect(2)
        .mount(&server)
        .await;

    let resolver = routed_resolver(&server.uri(), &FetchConfig::default());
    let out = resolver.resolve("b23.tv/twice\nb23.tv/twice").await;

    assert_eq!(
        out.text,
        "[Essay](https://www.bilibili.com/read/cv999)\n[Essay](https://www.bilibili.com/read/cv999)"
    );
}

#[tokio::test]
async fn unrecognized_page_is_left_verbatim() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/odd"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let resolver = routed_resolver(&server.uri(), &FetchConfig::default());
    let (out, reports) = resolver.resolve_detailed("odd one: http://b23.tv/odd").await;

    assert!(!out.modified);
    assert_eq!(out.text, "odd one: http://b23.tv/odd");
    assert_eq!(reports[0].outcome, ResolutionOutcome::Unknown);
}
