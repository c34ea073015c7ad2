//! One-shot HTTP loader for the dataset.
//!
//! `reqwest` uses the browser `fetch` API when compiled to `wasm32`, so the
//! same call serves the web app and native hosts. There is no retry.

use crate::dataset::Dataset;
use crate::error::{HeatMapError, Result};
use reqwest::Client;

impl From<reqwest::Error> for HeatMapError {
    fn from(e: reqwest::Error) -> Self {
        HeatMapError::HttpRequest(e.to_string())
    }
}

/// GET `url` and parse the body as a [`Dataset`].
pub async fn fetch_dataset(url: &str) -> Result<Dataset> {
    fetch_dataset_with(&Client::new(), url).await
}

/// Same as [`fetch_dataset`], on a caller-provided client.
pub async fn fetch_dataset_with(client: &Client, url: &str) -> Result<Dataset> {
    log::info!("Fetching dataset from {}", url);
    let response = client.get(url).send().await?.error_for_status()?;
    let body = response.text().await?;
    log::debug!("Dataset response: {} bytes", body.len());
    Dataset::from_json(&body)
}

#[cfg(all(test, not(target_family = "wasm")))]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    const SAMPLE: &str = include_str!("../../fixtures/global-temperature-sample.json");

    /// Answer a single request with `status` and `body`, returning the URL.
    async fn serve_once(status: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
        });
        format!("http://{}/global-temperature.json", addr)
    }

    fn client() -> Client {
        Client::builder().no_proxy().build().unwrap()
    }

    #[tokio::test]
    async fn test_fetch_parses_dataset() {
        let url = serve_once("200 OK", SAMPLE).await;
        let dataset = fetch_dataset_with(&client(), &url).await.unwrap();
        assert_eq!(dataset.len(), 45);
        assert_eq!(dataset.base_temperature, 8.66);
    }

    #[tokio::test]
    async fn test_fetch_fails_on_http_error_status() {
        let url = serve_once("404 Not Found", "{}").await;
        let result = fetch_dataset_with(&client(), &url).await;
        assert!(matches!(result, Err(HeatMapError::HttpRequest(_))));
    }

    #[tokio::test]
    async fn test_fetch_rejects_malformed_body() {
        let url = serve_once("200 OK", "{\"baseTemperature\": 8.66, \"monthlyVariance\": [").await;
        let result = fetch_dataset_with(&client(), &url).await;
        assert!(matches!(result, Err(HeatMapError::JsonParse(_))));
    }
}
