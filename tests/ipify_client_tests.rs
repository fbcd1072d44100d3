//! ipify client tests against a local HTTP stub
//!
//! 本地起一个只应答一次的 TCP 服务，返回预设响应，并记录请求行。

use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::sync::mpsc;
use std::thread;

use iptracker::config::GeoApiConfig;
use iptracker::errors::LookupError;
use iptracker::services::{GeoLookup, IpifyClient, LookupQuery};

/// 启动 stub，返回 endpoint 和请求行接收端
fn serve_once(status: &'static str, body: &'static str) -> (String, mpsc::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream.try_clone().unwrap());

        let mut request_line = String::new();
        reader.read_line(&mut request_line).unwrap();
        // 读完请求头
        loop {
            let mut line = String::new();
            if reader.read_line(&mut line).unwrap() == 0 || line == "\r\n" {
                break;
            }
        }
        tx.send(request_line.trim_end().to_string()).unwrap();

        let mut stream = stream;
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        stream.write_all(response.as_bytes()).unwrap();
        stream.flush().unwrap();
    });

    (format!("http://127.0.0.1:{}/api/v2/country,city", port), rx)
}

fn client(endpoint: String) -> IpifyClient {
    IpifyClient::new(&GeoApiConfig {
        endpoint,
        api_key: "at_test".to_string(),
        timeout_secs: 5,
    })
}

const SUCCESS_BODY: &str = r#"{
    "ip": "8.8.8.8",
    "location": {
        "country": "US",
        "region": "California",
        "city": "Mountain View",
        "lat": 37.38605,
        "lng": -122.08385,
        "postalCode": "94035",
        "timezone": "-07:00",
        "geonameId": 5375480
    },
    "isp": "Google LLC"
}"#;

#[tokio::test]
async fn test_successful_ip_lookup() {
    let (endpoint, requests) = serve_once("200 OK", SUCCESS_BODY);
    let result = client(endpoint)
        .lookup(&LookupQuery::IpAddress("8.8.8.8".to_string()))
        .await
        .unwrap();

    assert_eq!(result.ip, "8.8.8.8");
    assert_eq!(result.location_text(), "Mountain View, California, US");
    assert_eq!(result.timezone_text().as_deref(), Some("UTC -07:00"));
    assert_eq!(result.isp, "Google LLC");

    let request_line = requests.recv().unwrap();
    assert!(request_line.starts_with("GET /api/v2/country,city?apiKey=at_test&ipAddress=8.8.8.8"));
}

#[tokio::test]
async fn test_domain_lookup_uses_domain_parameter() {
    let (endpoint, requests) = serve_once("200 OK", SUCCESS_BODY);
    client(endpoint)
        .lookup(&LookupQuery::Domain("dns.google".to_string()))
        .await
        .unwrap();

    let request_line = requests.recv().unwrap();
    assert!(request_line.contains("&domain=dns.google"));
    assert!(!request_line.contains("ipAddress"));
}

#[tokio::test]
async fn test_caller_lookup_has_no_address_parameter() {
    let (endpoint, requests) = serve_once("200 OK", SUCCESS_BODY);
    client(endpoint).lookup(&LookupQuery::Caller).await.unwrap();

    let request_line = requests.recv().unwrap();
    assert!(request_line.contains("?apiKey=at_test "));
}

#[tokio::test]
async fn test_error_status_with_error_body_is_no_results() {
    let (endpoint, _requests) = serve_once(
        "422 Unprocessable Entity",
        r#"{"code":422,"messages":"Input correct ip address or domain name."}"#,
    );
    let result = client(endpoint)
        .lookup(&LookupQuery::IpAddress("999.1.1.1".to_string()))
        .await;

    assert_eq!(result, Err(LookupError::NoResults));
}

#[tokio::test]
async fn test_null_location_is_no_results() {
    let (endpoint, _requests) = serve_once("200 OK", r#"{"ip":"10.0.0.1","location":null}"#);
    let result = client(endpoint)
        .lookup(&LookupQuery::IpAddress("10.0.0.1".to_string()))
        .await;

    assert_eq!(result, Err(LookupError::NoResults));
}

#[tokio::test]
async fn test_non_json_body_is_network_failure() {
    let (endpoint, _requests) = serve_once("502 Bad Gateway", "<html>bad gateway</html>");
    let result = client(endpoint).lookup(&LookupQuery::Caller).await;

    assert_eq!(result, Err(LookupError::NetworkFailure));
}
