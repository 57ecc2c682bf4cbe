#![allow(dead_code)]

use httpmock::{Method::GET, Mock, MockServer};
use iex_market_data::{ConnectionManager, MarketDataConfig, MarketDataDao};
use std::{fs, path::Path};
use url::Url;

pub const TOKEN: &str = "test-token";
pub const BATCH_PATH: &str = "/v1/stock/market/batch";

pub fn setup_server() -> MockServer {
    MockServer::start()
}

pub fn fixture(endpoint: &str, symbol: &str, ext: &str) -> String {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");
    let filename = format!("{}_{}.{}", endpoint, symbol, ext);
    let path = dir.join(&filename);
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e))
}

pub fn config_for(server: &MockServer) -> MarketDataConfig {
    MarketDataConfig::builder()
        .host(Url::parse(&server.url("/v1")).unwrap())
        .token(TOKEN)
        .build()
        .unwrap()
}

pub fn dao_for(server: &MockServer) -> MarketDataDao {
    MarketDataDao::new(ConnectionManager::builder().build().unwrap(), config_for(server))
}

pub fn mock_batch<'a>(server: &'a MockServer, symbols: &'a str, status: u16, body: &str) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(GET)
            .path(BATCH_PATH)
            .query_param("symbols", symbols)
            .query_param("types", "quote")
            .query_param("token", TOKEN);
        then.status(status)
            .header("content-type", "application/json")
            .body(body);
    })
}
