mod common;
use common::{jst, ts};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};
use worklog::api::{MessagingApi, SearchRequest, SlackClient};
use worklog::core::assembler::{AssemblerSettings, LedgerAssembler};
use worklog::errors::AppError;

const TOKEN: &str = "xoxp-test";

fn client(server: &MockServer) -> SlackClient {
    SlackClient::new(TOKEN).with_base_url(server.uri())
}

#[tokio::test]
async fn test_search_parses_matches_and_thread_roots() {
    let server = MockServer::start().await;
    let root = ts(jst(2025, 3, 3, 9, 0));
    let reply = ts(jst(2025, 3, 4, 9, 10));
    let reply_root = ts(jst(2025, 3, 4, 9, 0));

    Mock::given(method("GET"))
        .and(path("/search.messages"))
        .and(header("authorization", "Bearer xoxp-test"))
        .and(query_param("sort", "timestamp"))
        .and(query_param("sort_dir", "asc"))
        .and(query_param("count", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ok": true,
            "messages": {
                "matches": [
                    { "ts": root, "user": "U1", "text": "開始します" },
                    {
                        "ts": reply,
                        "user": "U1",
                        "text": "開始します",
                        "permalink": format!("https://x.slack.com/archives/C1/p1?thread_ts={reply_root}&cid=C1")
                    }
                ]
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let request = SearchRequest::by_timestamp_asc("\"開始します\"", 100);
    let matches = client(&server).search_messages(&request).await.unwrap();

    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0].thread_root(), root);
    assert_eq!(matches[0].instant, jst(2025, 3, 3, 9, 0) + chrono::Duration::microseconds(100));
    assert_eq!(matches[1].thread_root(), reply_root);
    assert_eq!(matches[1].sender_id.as_deref(), Some("U1"));
}

#[tokio::test]
async fn test_search_not_ok_is_a_search_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search.messages"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "ok": false, "error": "not_authed" })),
        )
        .mount(&server)
        .await;

    let err = client(&server)
        .search_messages(&SearchRequest::by_timestamp_asc("q", 100))
        .await
        .unwrap_err();

    match err {
        AppError::Search(msg) => assert!(msg.contains("not_authed")),
        other => panic!("unexpected error {other:?}"),
    }
}

#[tokio::test]
async fn test_search_without_matches_array_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search.messages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ok": true,
            "messages": { "total": 0 }
        })))
        .mount(&server)
        .await;

    let err = client(&server)
        .search_messages(&SearchRequest::by_timestamp_asc("q", 100))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Search(_)));
}

#[tokio::test]
async fn test_search_with_bad_ts_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search.messages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ok": true,
            "messages": { "matches": [ { "ts": "yesterday", "text": "開始します" } ] }
        })))
        .mount(&server)
        .await;

    let err = client(&server)
        .search_messages(&SearchRequest::by_timestamp_asc("q", 100))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Search(_)));
}

#[tokio::test]
async fn test_replies_are_requested_inclusively() {
    let server = MockServer::start().await;
    let root = ts(jst(2025, 3, 3, 9, 0));
    let last = ts(jst(2025, 3, 3, 18, 0));

    Mock::given(method("GET"))
        .and(path("/conversations.replies"))
        .and(query_param("channel", "C123"))
        .and(query_param("ts", root.as_str()))
        .and(query_param("inclusive", "true"))
        .and(query_param("limit", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ok": true,
            "messages": [
                { "ts": root, "user": "U1", "text": "開始します" },
                { "ts": last, "user": "U1", "text": "終了します" }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let messages = client(&server)
        .fetch_thread_messages("C123", &root)
        .await
        .unwrap();

    assert_eq!(messages.len(), 2);
    assert_eq!(messages[1].text, "終了します");
}

#[tokio::test]
async fn test_reply_errors_are_thread_failures() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/conversations.replies"))
        .and(query_param("ts", "1.000001"))
        .respond_with(ResponseTemplate::new(429).set_body_string("rate limited"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/conversations.replies"))
        .and(query_param("ts", "2.000001"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true, "messages": [] })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/conversations.replies"))
        .and(query_param("ts", "3.000001"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "ok": false, "error": "thread_not_found" })),
        )
        .mount(&server)
        .await;

    let api = client(&server);
    for root in ["1.000001", "2.000001", "3.000001"] {
        let err = api.fetch_thread_messages("C123", root).await.unwrap_err();
        assert!(
            matches!(err, AppError::ThreadFetch(_)),
            "{root}: unexpected {err:?}"
        );
        assert!(!err.is_fatal_for_fetch());
    }
}

#[tokio::test]
async fn test_assembler_against_slack_api() {
    let server = MockServer::start().await;
    let root = ts(jst(2025, 3, 3, 9, 0));
    let reply = ts(jst(2025, 3, 3, 9, 1));

    Mock::given(method("GET"))
        .and(path("/search.messages"))
        .and(query_param(
            "query",
            "\"開始します\" after:2025-02-28 before:2025-04-01 in:<#C123>",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ok": true,
            "messages": {
                "matches": [
                    { "ts": root, "text": "開始します" },
                    { "ts": reply, "thread_ts": root, "text": "開始します" }
                ]
            }
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/conversations.replies"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ok": true,
            "messages": [
                { "ts": ts(jst(2025, 3, 3, 18, 45)), "user": "U1", "text": "終了します" },
                { "ts": root, "user": "U1", "text": "開始します" },
                { "ts": ts(jst(2025, 3, 3, 12, 0)), "user": "U1", "text": "休憩します" }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = client(&server);
    let settings = AssemblerSettings {
        channel_id: "C123".to_string(),
        channel_name: None,
        search_keyword: "開始します".to_string(),
        break_keywords: vec!["休憩".to_string()],
        result_limit: 100,
        request_delay: Duration::ZERO,
    };
    let mut assembler = LedgerAssembler::new(&api, settings);
    let ledger = assembler.fetch_ledger("2025-03".parse().unwrap()).await.unwrap();

    let day = &ledger.days[2];
    assert!(day.has_break_notice);
    assert_eq!(day.working_duration(), "8:45");
    assert_eq!(ledger.attended_days(), 1);
}
