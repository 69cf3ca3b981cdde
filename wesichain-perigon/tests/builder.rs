use std::time::Duration;

use wesichain_perigon::{PerigonClient, PerigonConfig, PerigonError};

#[test]
fn builder_defaults_to_standard_config_and_endpoint() {
    let client = PerigonClient::builder().api_key("key").build().unwrap();

    assert_eq!(client.endpoint(), "https://api.goperigon.com/v1/vector/news/all");
    assert_eq!(client.default_config(), &PerigonConfig::standard());
    assert_eq!(client.default_config().size, Some(10));
    assert_eq!(client.default_config().show_reprints, Some(true));
    assert!(client.default_config().filter.is_none());
    assert_eq!(client.timeout(), None);
}

#[test]
fn base_url_trailing_slash_is_trimmed() {
    let client = PerigonClient::builder()
        .api_key("key")
        .base_url("http://localhost:8080/")
        .build()
        .unwrap();

    assert_eq!(client.endpoint(), "http://localhost:8080/v1/vector/news/all");
}

#[test]
fn invalid_base_url_is_a_config_error() {
    let err = PerigonClient::builder()
        .api_key("key")
        .base_url("not a url")
        .build()
        .unwrap_err();

    assert!(matches!(err, PerigonError::Config(ref msg) if msg.contains("base_url")));
}

#[test]
fn zero_timeout_is_rejected() {
    let err = PerigonClient::builder()
        .api_key("key")
        .timeout(Duration::ZERO)
        .build()
        .unwrap_err();

    assert!(matches!(err, PerigonError::Config(_)));
}

#[test]
fn timeout_is_kept_on_client() {
    let client = PerigonClient::builder()
        .api_key("key")
        .timeout(Duration::from_secs(3))
        .build()
        .unwrap();

    assert_eq!(client.timeout(), Some(Duration::from_secs(3)));
}

#[test]
fn debug_output_redacts_api_key() {
    let builder = PerigonClient::builder().api_key("super-secret");
    assert!(!format!("{builder:?}").contains("super-secret"));

    let client = builder.build().unwrap();
    let rendered = format!("{client:?}");
    assert!(!rendered.contains("super-secret"));
    assert!(rendered.contains("<redacted>"));
}

#[test]
fn explicit_api_key_is_kept_verbatim() {
    let client = PerigonClient::builder().api_key(" key ").build().unwrap();

    assert_eq!(client.api_key(), " key ");
}
