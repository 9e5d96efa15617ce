use httpmock::Method::GET;
use istocks_core::FmpError;

use crate::common::{TEST_KEY, client_for, fixture, setup_server};

#[tokio::test]
async fn offline_profile_uses_recorded_fixture() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/profile")
            .query_param("symbol", "AAPL")
            .query_param("apikey", TEST_KEY);
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("profile", "AAPL", "json"));
    });

    let profile = client_for(&server).fetch_profile("AAPL").await.unwrap();

    mock.assert();
    assert_eq!(profile.symbol, "AAPL");
    assert_eq!(profile.company_name, "Apple Inc.");
    assert_eq!(profile.price, Some(211.16));
    assert_eq!(profile.market_cap, Some(3_153_953_105_200.0));
    assert_eq!(profile.volume, Some(39_765_812.0));
    assert_eq!(profile.ceo.as_deref(), Some("Mr. Timothy D. Cook"));
    assert_eq!(profile.full_time_employees.as_deref(), Some("164000"));
    assert_eq!(profile.is_actively_trading, Some(true));
    assert_eq!(profile.is_etf, Some(false));
    assert_eq!(profile.range_bounds(), Some((169.21, 260.1)));
}

#[tokio::test]
async fn profile_takes_first_element_and_tolerates_nulls() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/profile").query_param("symbol", "SPY");
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("profile", "SPY", "json"));
    });

    let profile = istocks_core::profile::fetch_profile(&client_for(&server), "SPY")
        .await
        .unwrap();

    mock.assert();
    assert_eq!(profile.symbol, "SPY");
    assert_eq!(profile.market_cap, None);
    assert_eq!(profile.last_dividend, None);
    assert_eq!(profile.industry, None);
    assert_eq!(profile.full_time_employees, None);
    assert_eq!(profile.website, None);
    assert_eq!(profile.beta, Some(1.0));
    assert_eq!(profile.is_etf, Some(true));
}

#[tokio::test]
async fn profile_empty_array_is_empty_result() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/profile").query_param("symbol", "ZZZZ");
        then.status(200)
            .header("content-type", "application/json")
            .body("[]");
    });

    let err = client_for(&server).fetch_profile("ZZZZ").await.unwrap_err();

    mock.assert();
    assert!(matches!(err, FmpError::EmptyResult), "got {err:?}");
}

#[tokio::test]
async fn profile_missing_company_name_is_decode_failure() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/profile");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"[{"symbol":"AAPL","price":211.16}]"#);
    });

    let err = client_for(&server).fetch_profile("AAPL").await.unwrap_err();

    mock.assert();
    assert!(matches!(err, FmpError::DecodeFailure(_)), "got {err:?}");
}

#[tokio::test]
async fn profile_wrong_type_for_optional_number_is_decode_failure() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/profile");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"[{"symbol":"AAPL","companyName":"Apple Inc.","price":"n/a"}]"#);
    });

    let err = client_for(&server).fetch_profile("AAPL").await.unwrap_err();

    mock.assert();
    assert!(matches!(err, FmpError::DecodeFailure(_)), "got {err:?}");
}

#[tokio::test]
async fn profile_non_2xx_raw_body_becomes_remote_error() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/profile");
        then.status(402)
            .header("content-type", "text/plain")
            .body("Premium Query Parameter: this symbol is not available under your current subscription");
    });

    let err = client_for(&server).fetch_profile("BRK.A").await.unwrap_err();

    mock.assert();
    match err {
        FmpError::RemoteError(msg) => assert!(msg.starts_with("Premium Query Parameter")),
        other => panic!("expected RemoteError, got {other:?}"),
    }
}

#[tokio::test]
async fn profile_non_2xx_empty_body_is_unexpected_status() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/profile");
        then.status(404);
    });

    let err = client_for(&server).fetch_profile("AAPL").await.unwrap_err();

    mock.assert();
    assert_eq!(err.status(), Some(404));
    assert_eq!(
        err.to_string(),
        "Received an invalid response from the server. Status code: 404"
    );
}

#[tokio::test]
async fn profile_employee_count_of_wrong_type_is_decode_failure() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/profile");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"[{"symbol":"AAPL","companyName":"Apple Inc.","fullTimeEmployees":true}]"#);
    });

    let err = client_for(&server).fetch_profile("AAPL").await.unwrap_err();

    mock.assert();
    assert!(matches!(err, FmpError::DecodeFailure(_)), "got {err:?}");
}
