use httpmock::prelude::*;
use serde_json::{json, Value};
use wesichain_core::{BaseRetriever, RetrievalError};
use wesichain_perigon::{PerigonClient, PerigonConfig, PerigonError, PerigonRetriever};

const PATH: &str = "/v1/vector/news/all";
const QUERY: &str = "Who won the recent F1 race?";

fn f1_results() -> Value {
    json!({
        "status": 200,
        "results": [
            {
                "score": 0.6573221,
                "data": {
                    "url": "https://www.sportskeeda.com/f1/ranked-no-races-since-f1-drivers-2024-grid-won-last-race",
                    "language": "en",
                    "source": {"domain": "sportskeeda.com", "location": "null"},
                    "title": "Ranked: No. of races since F1 drivers on the 2024 grid won their last race",
                    "summary": "Lewis Hamilton won the 2024 F1 Belgian GP.",
                    "topics": [{"name": "Motorsports"}, {"name": "Formula 1"}],
                    "categories": [{"name": "Sports"}],
                    "entities": [{"data": "F1", "type": "ORG"}, {"data": "McLaren", "type": "ORG"}]
                }
            },
            {
                "score": 0.6089887,
                "data": {
                    "title": "Ranked: No. of F1 podiums it took for drivers on the 2024 grid to win their first race",
                    "summary": "Only 13 drivers on the grid have won a race.",
                    "topics": [{"name": "Motorsports"}, {"name": "Formula 1"}]
                }
            }
        ]
    })
}

fn retriever_for(server: &MockServer, default_config: PerigonConfig) -> PerigonRetriever {
    let client = PerigonClient::builder()
        .api_key("api_key")
        .base_url(server.base_url())
        .default_config(default_config)
        .build()
        .unwrap();
    PerigonRetriever::new(client)
}

#[test]
fn retrieve_blocking_uses_default_config() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path(PATH)
            .header("x-api-key", "api_key")
            .json_body(json!({"prompt": QUERY, "size": 2}));
        then.status(200).json_body(f1_results());
    });

    let retriever = retriever_for(&server, PerigonConfig::default().size(2));
    let docs = retriever.retrieve_blocking(QUERY, None).unwrap();

    assert_eq!(docs.len(), 2);
    assert_eq!(
        docs[0].metadata_str("title"),
        Some("Ranked: No. of races since F1 drivers on the 2024 grid won their last race")
    );
    assert_eq!(docs[0].metadata_str("topics"), Some("Motorsports, Formula 1"));
    assert_eq!(docs[0].metadata_str("entities"), Some("F1, McLaren"));
    mock.assert();
}

#[test]
fn per_call_config_overrides_default_without_merging() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path(PATH)
            .json_body(json!({"prompt": QUERY, "size": 1}));
        then.status(200).json_body(json!({"results": []}));
    });

    let default = PerigonConfig::standard().pub_date_from("2024-08-01");
    let retriever = retriever_for(&server, default);
    let docs = retriever
        .retrieve_blocking(QUERY, Some(&PerigonConfig::default().size(1)))
        .unwrap();

    assert!(docs.is_empty());
    mock.assert();
}

#[tokio::test]
async fn retrieve_async_matches_blocking_result() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path(PATH)
                .json_body(json!({"prompt": QUERY, "size": 2}));
            then.status(200).json_body(f1_results());
        })
        .await;

    let retriever = retriever_for(&server, PerigonConfig::default().size(2));
    let docs = retriever.retrieve(QUERY, None).await.unwrap();

    assert_eq!(docs.len(), 2);
    assert_eq!(docs[1].page_content, "Only 13 drivers on the grid have won a race.");
    assert_eq!(docs[1].metadata_str("categories"), Some(""));
    mock.assert_async().await;
}

#[tokio::test]
async fn base_retriever_boxes_backend_errors() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path(PATH);
            then.status(503);
        })
        .await;

    let retriever: Box<dyn BaseRetriever> =
        Box::new(retriever_for(&server, PerigonConfig::standard()));
    let err = retriever.retrieve(QUERY).await.unwrap_err();

    match err {
        RetrievalError::Backend(inner) => {
            let mapped = inner
                .downcast_ref::<PerigonError>()
                .expect("boxed error should preserve PerigonError type");
            assert!(matches!(
                mapped,
                PerigonError::Http { status, reason }
                    if *status == 503 && reason == "Service Unavailable"
            ));
        }
        other => panic!("expected backend error, got: {other:?}"),
    }
}

#[test]
fn retrievers_can_share_one_client() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path(PATH);
        then.status(200).json_body(f1_results());
    });

    let client = std::sync::Arc::new(
        PerigonClient::builder()
            .api_key("api_key")
            .base_url(server.base_url())
            .build()
            .unwrap(),
    );
    let first = PerigonRetriever::from_shared(client.clone());
    let second = PerigonRetriever::from_shared(client);

    assert_eq!(BaseRetriever::retrieve_blocking(&first, QUERY).unwrap().len(), 2);
    assert_eq!(BaseRetriever::retrieve_blocking(&second, QUERY).unwrap().len(), 2);
    mock.assert_hits(2);
}
