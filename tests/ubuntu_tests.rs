//! End-to-end Ubuntu resolution against a mock Simplestreams endpoint.

mod common;

use async_trait::async_trait;
use common::{sample_catalog, sample_catalog_json};
use distro_image_resolver::cloud::Catalog;
use distro_image_resolver::providers::aws::ubuntu::{FetchCatalog, UbuntuSession};
use distro_image_resolver::{ResolveError, SelectionQuery};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const CATALOG_PATH: &str = "/releases/streams/v1/com.ubuntu.cloud:released:aws.json";

async fn mock_catalog_server() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(CATALOG_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_catalog_json()))
        .expect(1)
        .mount(&server)
        .await;
    server
}

fn session_for(server: &MockServer) -> UbuntuSession {
    UbuntuSession::with_url(format!("{}{}", server.uri(), CATALOG_PATH))
}

fn ssd_query() -> SelectionQuery {
    SelectionQuery {
        version: "16.04".to_string(),
        store: "ssd".to_string(),
        region: "us-west-1".to_string(),
        ..Default::default()
    }
}

#[tokio::test]
async fn resolves_the_single_matching_image() {
    let server = mock_catalog_server().await;
    let session = session_for(&server);

    let image = session.resolve(&ssd_query()).await.unwrap();

    assert_eq!(image.name(), "16.04.20160215");
    assert_eq!(image.image_id(), "ami-ssd-latest");
    assert_eq!(
        image.id(),
        "com.ubuntu.cloud:server:16.04:amd64:20160215:usw1sh"
    );
}

#[tokio::test]
async fn catalog_is_fetched_once_per_session() {
    // The mock expects exactly one GET; a second resolution must be served
    // from the session cache. Verified on MockServer drop.
    let server = mock_catalog_server().await;
    let session = session_for(&server);

    let ebs = session
        .resolve(&SelectionQuery {
            version: "16.04".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();
    let ssd = session.resolve(&ssd_query()).await.unwrap();

    assert_eq!(ebs.image_id(), "ami-latest");
    assert_eq!(ssd.image_id(), "ami-ssd-latest");
}

#[tokio::test]
async fn http_failure_surfaces_as_a_network_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(CATALOG_PATH))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let result = session_for(&server).resolve(&ssd_query()).await;
    assert!(matches!(result, Err(ResolveError::Network { .. })));
}

#[tokio::test]
async fn malformed_body_surfaces_as_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(CATALOG_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
        .mount(&server)
        .await;

    let result = session_for(&server).resolve(&ssd_query()).await;
    assert!(matches!(result, Err(ResolveError::Decode { .. })));
}

#[tokio::test]
async fn empty_catalog_is_a_decode_error_and_is_not_cached() {
    let server = MockServer::start().await;
    // First request: a syntactically valid but empty document. Second: the
    // real fixture. The session must retry because the failure left the
    // cache empty.
    Mock::given(method("GET"))
        .and(path(CATALOG_PATH))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "products": {} })),
        )
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(CATALOG_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_catalog_json()))
        .mount(&server)
        .await;

    let session = session_for(&server);

    let first = session.resolve(&ssd_query()).await;
    assert!(matches!(first, Err(ResolveError::Decode { .. })));

    let second = session.resolve(&ssd_query()).await.unwrap();
    assert_eq!(second.image_id(), "ami-ssd-latest");
}

struct FixtureCatalog;

#[async_trait]
impl FetchCatalog for FixtureCatalog {
    async fn fetch_catalog(&self) -> Result<Catalog, ResolveError> {
        Ok(sample_catalog())
    }
}

#[tokio::test]
async fn sessions_accept_an_injected_catalog_source() {
    let session = UbuntuSession::with_source(Box::new(FixtureCatalog));

    let image = session.resolve(&ssd_query()).await.unwrap();
    assert_eq!(image.name(), "16.04.20160215");
    assert_eq!(image.image_id(), "ami-ssd-latest");
}
