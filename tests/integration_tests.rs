//! Integration tests using mock HTTP server
//!
//! Tests the full end-to-end flow: HTTP request → charset normalization →
//! XML decode → typed currencies and reports

use cbr_rates::config::{with_base_url, with_http_config, with_transport};
use cbr_rates::http::HttpClientConfig;
use cbr_rates::{CbrClient, Error, ErrorKind};
use chrono::NaiveDate;
use encoding_rs::WINDOWS_1251;
use pretty_assertions::assert_eq;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const CURRENCIES: &str = include_str!("fixtures/currencies.xml");
const RATE_REPORT: &str = include_str!("fixtures/rate_report.xml");

fn cp1251(text: &str) -> Vec<u8> {
    let (bytes, _, had_errors) = WINDOWS_1251.encode(text);
    assert!(!had_errors);
    bytes.into_owned()
}

fn xml_response(text: &str) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .insert_header("content-type", "application/xml; charset=windows-1251")
        .set_body_bytes(cp1251(text))
}

fn client_for(server: &MockServer) -> CbrClient {
    CbrClient::new([with_base_url(server.uri())]).unwrap()
}

// ============================================================================
// Catalog
// ============================================================================

#[tokio::test]
async fn test_fetch_currency_catalog() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/scripts/XML_valFull.asp"))
        .respond_with(xml_response(CURRENCIES))
        .expect(1)
        .mount(&mock_server)
        .await;

    let currencies = client_for(&mock_server)
        .currencies(&CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(currencies.len(), 7);
    for currency in &currencies {
        assert!(!currency.id.is_empty());
        assert!(!currency.name.is_empty());
        assert!(!currency.eng_name.is_empty());
        assert!(currency.nominal > 0);
        assert_eq!(currency.parent_code, currency.parent_code.trim());
    }
    assert!(currencies.iter().any(|c| c.iso_num_code != 0));
    assert!(currencies.iter().any(|c| !c.iso_char_code.is_empty()));
    assert!(currencies.iter().any(|c| c.iso_alpha().is_none()));

    let euro = currencies.iter().find(|c| c.id == "R01239").unwrap();
    assert_eq!(euro.name, "Евро");
    assert_eq!(euro.iso_numeric(), Some(978));
}

// ============================================================================
// Rate Report
// ============================================================================

#[tokio::test]
async fn test_fetch_rates_report_for_date() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/scripts/XML_daily.asp"))
        .and(query_param("date_req", "22/08/2015"))
        .respond_with(xml_response(RATE_REPORT))
        .expect(1)
        .mount(&mock_server)
        .await;

    let date = NaiveDate::from_ymd_opt(2015, 8, 22).unwrap();
    let report = client_for(&mock_server)
        .rates_report(&CancellationToken::new(), Some(date))
        .await
        .unwrap();

    assert_eq!(report.date, date);
    assert_eq!(report.len(), 5);

    let aud = &report.rates[0];
    assert_eq!(aud.id, "R01010");
    assert_eq!(aud.num_code, 36);
    assert_eq!(aud.char_code, "AUD");
    assert_eq!(aud.nominal, 1);
    assert_eq!(aud.name, "Австралийский доллар");
    assert!((aud.value - 49.9059).abs() < f64::EPSILON);

    let amd = report.find("amd").unwrap();
    assert_eq!(amd.nominal, 100);
    assert!((amd.unit_value().unwrap() - 0.141_565).abs() < 1e-9);
}

#[tokio::test]
async fn test_fetch_latest_rates_report_sends_no_date() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/scripts/XML_daily.asp"))
        .respond_with(xml_response(RATE_REPORT))
        .expect(1)
        .mount(&mock_server)
        .await;

    let report = client_for(&mock_server)
        .rates_report(&CancellationToken::new(), None)
        .await
        .unwrap();

    assert_eq!(report.date, NaiveDate::from_ymd_opt(2015, 8, 22).unwrap());

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url.query(), None);
}

#[tokio::test]
async fn test_report_serializes_for_callers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/scripts/XML_daily.asp"))
        .respond_with(xml_response(RATE_REPORT))
        .mount(&mock_server)
        .await;

    let report = client_for(&mock_server)
        .rates_report(&CancellationToken::new(), None)
        .await
        .unwrap();

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["date"], "2015-08-22");
    assert_eq!(json["rates"][0]["char_code"], "AUD");
    assert_eq!(json["rates"][0]["value"], 49.9059);
}

// ============================================================================
// Failures
// ============================================================================

#[tokio::test]
async fn test_error_status_is_not_decoded() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_string("<html>Internal error</html>"))
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server)
        .rates_report(&CancellationToken::new(), None)
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Transport);
    assert!(matches!(err, Error::HttpStatus { status: 500, .. }));
}

#[tokio::test]
async fn test_unknown_charset_is_a_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/scripts/XML_valFull.asp"))
        .respond_with(xml_response(
            &CURRENCIES.replace("windows-1251", "x-unknown-cyrillic"),
        ))
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server)
        .currencies(&CancellationToken::new())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::UnsupportedCharset { .. }));
}

#[tokio::test]
async fn test_bad_value_fails_whole_report() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/scripts/XML_daily.asp"))
        .respond_with(xml_response(&RATE_REPORT.replace("76,2536", "76;2536")))
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server)
        .rates_report(&CancellationToken::new(), None)
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Decode);
}

#[tokio::test]
async fn test_cancelled_before_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(xml_response(RATE_REPORT))
        .expect(0)
        .mount(&mock_server)
        .await;

    let cancel = CancellationToken::new();
    cancel.cancel();

    let client = client_for(&mock_server);
    assert!(client.currencies(&cancel).await.unwrap_err().is_cancelled());
    assert!(client
        .rates_report(&cancel, None)
        .await
        .unwrap_err()
        .is_cancelled());
}

#[tokio::test]
async fn test_cancelled_while_in_flight() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(xml_response(RATE_REPORT).set_delay(Duration::from_secs(30)))
        .mount(&mock_server)
        .await;

    let cancel = CancellationToken::new();
    let trigger = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        trigger.cancel();
    });

    let err = client_for(&mock_server)
        .rates_report(&cancel, None)
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Cancelled);
}

// ============================================================================
// Configuration
// ============================================================================

#[tokio::test]
async fn test_custom_http_config_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/scripts/XML_valFull.asp"))
        .and(header("user-agent", "rates-sync/2.0"))
        .respond_with(xml_response(CURRENCIES))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = CbrClient::new([
        with_http_config(
            HttpClientConfig::builder()
                .user_agent("rates-sync/2.0")
                .timeout(Duration::from_secs(5))
                .build(),
        ),
        with_base_url(mock_server.uri()),
    ])
    .unwrap();

    let currencies = client.currencies(&CancellationToken::new()).await.unwrap();
    assert_eq!(currencies.len(), 7);
}

#[test]
fn test_null_transport_is_rejected() {
    let err = CbrClient::new([with_transport(None)]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Configuration);
}
