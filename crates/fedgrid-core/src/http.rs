//! Minimal JSON-over-HTTP helper shared by the source clients.

use http_body_util::{BodyExt, Empty};
use hyper_util::client::legacy::Client;
use hyper_util::rt::TokioExecutor;

/// Issue a GET request and deserialize the JSON response body.
///
/// Returns an error for connection failures, non-2xx statuses, and
/// malformed bodies; callers decide whether that is fatal or degradable.
pub async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> anyhow::Result<T> {
    let uri: hyper::Uri = url
        .parse()
        .map_err(|e| anyhow::anyhow!("invalid url {url}: {e}"))?;

    let client: Client<_, Empty<bytes::Bytes>> =
        Client::builder(TokioExecutor::new()).build_http();

    let req = http::Request::builder()
        .method("GET")
        .uri(uri)
        .header("accept", "application/json")
        .header("user-agent", "fedgrid/0.1")
        .body(Empty::<bytes::Bytes>::new())?;

    let resp = client.request(req).await?;
    let status = resp.status();
    if !status.is_success() {
        anyhow::bail!("GET {url} returned {status}");
    }

    let body = resp.into_body().collect().await?.to_bytes();
    Ok(serde_json::from_slice(&body)?)
}
