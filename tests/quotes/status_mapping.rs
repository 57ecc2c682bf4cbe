use crate::common::{TOKEN, dao_for, mock_batch, setup_server};
use iex_market_data::{ConnectionManager, ErrorKind, MarketDataConfig, MarketDataDao, MarketDataError};
use url::Url;

#[tokio::test]
async fn batch_404_is_empty_result() {
    let server = setup_server();
    let mock = mock_batch(&server, "ZZZZ,YYYY", 404, "Not Found");

    let dao = dao_for(&server);
    let quotes = dao.find_many(["ZZZZ", "YYYY"]).await.unwrap();
    mock.assert();

    assert!(quotes.is_empty());
}

#[tokio::test]
async fn batch_500_maps_to_status() {
    let server = setup_server();
    let mock = mock_batch(&server, "AAPL", 500, "{}");

    let dao = dao_for(&server);
    let err = dao.find_many(["AAPL"]).await.unwrap_err();
    mock.assert();

    assert_eq!(err.kind(), ErrorKind::Retrieval);
    match err {
        MarketDataError::Status { status, url } => {
            assert_eq!(status, 500);
            assert!(url.contains("/v1/stock/market/batch"));
            assert!(!url.contains(TOKEN), "token leaked into {url}");
        }
        other => panic!("expected Status, got {other:?}"),
    }
}

#[tokio::test]
async fn batch_402_and_429_are_retrieval_failures() {
    for code in [402_u16, 429] {
        let server = setup_server();
        let _mock = mock_batch(&server, "AAPL", code, "");

        let dao = dao_for(&server);
        let err = dao.find_one("AAPL").await.unwrap_err();

        assert_eq!(err.status(), Some(code));
        assert_eq!(err.kind(), ErrorKind::Retrieval);
    }
}

#[tokio::test]
async fn connection_refused_maps_to_http() {
    // nothing listens on the discard port
    let config = MarketDataConfig::builder()
        .host(Url::parse("http://127.0.0.1:9/v1").unwrap())
        .token(TOKEN)
        .build()
        .unwrap();
    let connections = ConnectionManager::builder().build().unwrap();
    let dao = MarketDataDao::new(connections.clone(), config);

    let err = dao.find_many(["AAPL"]).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Retrieval);
    assert!(matches!(err, MarketDataError::Http { .. }));
    assert!(!err.to_string().contains(TOKEN));
    assert_eq!(connections.outstanding_leases(), 0);
}

#[tokio::test]
async fn leases_are_returned_after_every_call() {
    let server = setup_server();
    let _ok = mock_batch(&server, "AAPL", 200, r#"{"AAPL":{"quote":{"symbol":"AAPL"}}}"#);
    let _err = mock_batch(&server, "MSFT", 503, "");

    let connections = ConnectionManager::builder().build().unwrap();
    let dao = MarketDataDao::new(connections.clone(), crate::common::config_for(&server));

    dao.find_one("AAPL").await.unwrap();
    dao.find_one("MSFT").await.unwrap_err();

    assert_eq!(connections.outstanding_leases(), 0);
}

#[tokio::test]
async fn default_manager_sends_crate_user_agent() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(httpmock::Method::GET)
            .path(crate::common::BATCH_PATH)
            .header(
                "user-agent",
                concat!("iex-market-data/", env!("CARGO_PKG_VERSION")),
            );
        then.status(200).body(r#"{"AAPL":{"quote":{"symbol":"AAPL"}}}"#);
    });

    let dao = MarketDataDao::new(ConnectionManager::default(), crate::common::config_for(&server));
    let quotes = dao.find_many(["AAPL"]).await.unwrap();

    mock.assert();
    assert_eq!(quotes.len(), 1);
}
