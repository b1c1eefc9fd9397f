//! Thin asynchronous client for the skip availability API.
//!
//! - One `GET {base}/skips/by-location` per call; no retries and no caching.
//! - Non-2xx responses become [`FetchError::Status`] with a display-ready message.

use std::time::Duration;

use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::domain::{Location, Skip};
use crate::util::config::AppConfig;
use crate::util::version::USER_AGENT;

const SKIPS_PATH: &str = "skips/by-location";

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("http request error: {0}")]
    Http(#[from] reqwest::Error),
    /// Displays only the message so it can be shown to the user as-is.
    #[error("{message}")]
    Status { status: u16, message: String },
}

/// Anything that can list the skips offered at a location.
#[allow(async_fn_in_trait)]
pub trait SkipSource {
    async fn fetch_skips(&self, location: &Location) -> Result<Vec<Skip>, FetchError>;
}

/// Fetches skips and orders them by ascending size, keeping API order for equal sizes.
pub async fn load_skips<S: SkipSource>(
    source: &S,
    location: &Location,
) -> Result<Vec<Skip>, FetchError> {
    let mut skips = source.fetch_skips(location).await?;
    skips.sort_by_key(|skip| skip.size);
    Ok(skips)
}

#[derive(Clone, Debug)]
pub struct SkipClient {
    http: Client,
    base_url: Url,
}

impl SkipClient {
    pub fn new(config: &AppConfig) -> Result<Self, FetchError> {
        Self::with_base_url(config.api_base_url.clone(), config.request_timeout)
    }

    pub fn with_base_url(base_url: Url, timeout: Duration) -> Result<Self, FetchError> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;
        Ok(Self::from_parts(http, base_url))
    }

    pub(crate) fn from_parts(http: Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    /// `{base}/skips/by-location?postcode=..&area=..`, keeping any path prefix of the base.
    pub fn skips_url(&self, location: &Location) -> Result<Url, FetchError> {
        let mut base = self.base_url.clone();
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let mut url = base.join(SKIPS_PATH)?;
        url.query_pairs_mut()
            .append_pair("postcode", &location.postcode)
            .append_pair("area", &location.area);
        Ok(url)
    }
}

impl SkipSource for SkipClient {
    async fn fetch_skips(&self, location: &Location) -> Result<Vec<Skip>, FetchError> {
        let url = self.skips_url(location)?;
        info!(%url, "requesting skips");

        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = error_message(status, &body);
            warn!(status = status.as_u16(), %message, "skip request failed");
            return Err(FetchError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let dtos: Vec<SkipDto> = response.json().await?;
        info!(count = dtos.len(), postcode = %location.postcode, "fetched skips");
        Ok(dtos.into_iter().map(Skip::from).collect())
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Message from a JSON `message` field, else `Error {code}: {reason}`.
pub fn error_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|body| body.message)
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| {
            format!(
                "Error {}: {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or_default()
            )
            .trim_end()
            .to_string()
        })
}

#[derive(Debug, Deserialize)]
struct SkipDto {
    id: i64,
    size: u32,
    hire_period_days: u32,
    price_before_vat: f64,
    vat: f64,
    #[serde(default)]
    allowed_on_road: bool,
    #[serde(default)]
    allows_heavy_waste: bool,
    #[serde(default)]
    transport_cost: Option<f64>,
    #[serde(default)]
    per_tonne_cost: Option<f64>,
    #[serde(default)]
    postcode: Option<String>,
    #[serde(default)]
    area: Option<String>,
    #[serde(default)]
    forbidden: bool,
    #[serde(default)]
    weight_limit: Option<f64>,
    #[serde(default)]
    lead_time_days: Option<u32>,
    #[serde(default)]
    company_id: Option<i64>,
    #[serde(default)]
    created_at: Option<String>,
    #[serde(default)]
    updated_at: Option<String>,
}

impl From<SkipDto> for Skip {
    fn from(dto: SkipDto) -> Self {
        Self {
            id: dto.id,
            size: dto.size,
            hire_period_days: dto.hire_period_days,
            price_before_vat: dto.price_before_vat,
            vat: dto.vat,
            allowed_on_road: dto.allowed_on_road,
            allows_heavy_waste: dto.allows_heavy_waste,
            transport_cost: dto.transport_cost,
            per_tonne_cost: dto.per_tonne_cost,
            postcode: dto.postcode.unwrap_or_default(),
            area: dto.area.unwrap_or_default(),
            forbidden: dto.forbidden,
            weight_limit: dto.weight_limit,
            lead_time_days: dto.lead_time_days,
            company_id: dto.company_id,
            created_at: dto.created_at.unwrap_or_default(),
            updated_at: dto.updated_at.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    use super::*;
    use crate::domain::entities::fixtures::skip;
    use crate::domain::SkipState;

    const TWO_SKIPS: &str = r#"[
        {"id": 17934, "size": 8, "hire_period_days": 14, "transport_cost": null,
         "per_tonne_cost": null, "price_before_vat": 278, "vat": 20, "postcode": "NR32",
         "area": "", "forbidden": false, "created_at": "2025-04-03T13:51:46.897146",
         "updated_at": "2025-04-07T13:16:52.813", "allowed_on_road": true,
         "allows_heavy_waste": true},
        {"id": 17933, "size": 4, "hire_period_days": 14, "transport_cost": null,
         "per_tonne_cost": null, "price_before_vat": 278, "vat": 20, "postcode": "NR32",
         "area": "", "forbidden": false, "created_at": "2025-04-03T13:51:46.897146",
         "updated_at": "2025-04-07T13:16:52.813", "allowed_on_road": true,
         "allows_heavy_waste": false}
    ]"#;

    /// Serves one canned HTTP response and yields the request head it received.
    async fn serve_once(status_line: &'static str, body: &'static str) -> (Url, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut head = Vec::new();
            let mut chunk = [0_u8; 1024];
            loop {
                let read = socket.read(&mut chunk).await.unwrap();
                if read == 0 {
                    break;
                }
                head.extend_from_slice(&chunk[..read]);
                if head.windows(4).any(|window| window == b"\r\n\r\n") {
                    break;
                }
            }
            let response = format!(
                "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
            String::from_utf8_lossy(&head).into_owned()
        });
        (Url::parse(&format!("http://{addr}/api")).unwrap(), handle)
    }

    fn local_client(base_url: Url) -> SkipClient {
        let http = Client::builder().no_proxy().build().unwrap();
        SkipClient::from_parts(http, base_url)
    }

    struct FixedSource(Vec<Skip>);

    impl SkipSource for FixedSource {
        async fn fetch_skips(&self, _location: &Location) -> Result<Vec<Skip>, FetchError> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn url_keeps_base_path_and_encodes_query() {
        let location = Location::new("NR32 1AB", "Great Yarmouth");
        for base in ["https://example.test/api", "https://example.test/api/"] {
            let client = local_client(Url::parse(base).unwrap());
            assert_eq!(
                client.skips_url(&location).unwrap().as_str(),
                "https://example.test/api/skips/by-location?postcode=NR32+1AB&area=Great+Yarmouth"
            );
        }
    }

    #[test]
    fn error_message_prefers_json_message() {
        assert_eq!(
            error_message(StatusCode::INTERNAL_SERVER_ERROR, r#"{"message":"Server error"}"#),
            "Server error"
        );
    }

    #[test]
    fn error_message_falls_back_to_status() {
        assert_eq!(
            error_message(StatusCode::NOT_FOUND, "<html>not here</html>"),
            "Error 404: Not Found"
        );
        assert_eq!(
            error_message(StatusCode::BAD_GATEWAY, r#"{"detail":"upstream"}"#),
            "Error 502: Bad Gateway"
        );
        assert_eq!(
            error_message(StatusCode::SERVICE_UNAVAILABLE, r#"{"message":""}"#),
            "Error 503: Service Unavailable"
        );
    }

    #[test]
    fn dto_tolerates_nulls_and_missing_pass_through_fields() {
        let dtos: Vec<SkipDto> = serde_json::from_str(TWO_SKIPS).unwrap();
        let skips: Vec<Skip> = dtos.into_iter().map(Skip::from).collect();
        assert_eq!(skips[0].id, 17934);
        assert_eq!(skips[0].price_before_vat, 278.0);
        assert_eq!(skips[0].transport_cost, None);
        assert_eq!(skips[0].weight_limit, None);
        assert_eq!(skips[1].area, "");
        assert!(!skips[1].allows_heavy_waste);
    }

    #[tokio::test]
    async fn load_sorts_by_size_keeping_ties_in_order() {
        let source = FixedSource(vec![skip(1, 12), skip(2, 4), skip(3, 8), skip(4, 4)]);
        let skips = load_skips(&source, &Location::default()).await.unwrap();
        let ids: Vec<i64> = skips.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![2, 4, 3, 1]);
    }

    #[tokio::test]
    async fn fetch_success_yields_records_sorted_by_size() {
        let (base, request) = serve_once("200 OK", TWO_SKIPS).await;
        let client = local_client(base);

        let mut state = SkipState::default();
        let ticket = state.begin_request();
        let result = load_skips(&client, &Location::new("NR32", "Lowestoft")).await;
        state.complete(ticket, result);

        let ids: Vec<i64> = state.skips.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![17933, 17934]);

        let mut expected: Vec<Skip> = serde_json::from_str::<Vec<SkipDto>>(TWO_SKIPS)
            .unwrap()
            .into_iter()
            .map(Skip::from)
            .collect();
        expected.reverse();
        assert_eq!(state.skips, expected);
        assert_eq!(state.skips[0].size, 4);
        assert!(state.skips[1].allows_heavy_waste);
        assert!(state.error.is_none());

        let head = request.await.unwrap();
        assert!(head.starts_with("GET /api/skips/by-location?postcode=NR32&area=Lowestoft "));
    }

    #[tokio::test]
    async fn fetch_failure_surfaces_server_message() {
        let (base, _request) =
            serve_once("500 Internal Server Error", r#"{"message":"Server error"}"#).await;
        let client = local_client(base);

        let result = load_skips(&client, &Location::default()).await;
        assert!(matches!(
            result,
            Err(FetchError::Status { status: 500, .. })
        ));

        let mut state = SkipState::default();
        let ticket = state.begin_request();
        state.complete(ticket, result);
        assert_eq!(state.error.as_deref(), Some("Server error"));
        assert!(state.skips.is_empty());
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn fetch_failure_without_json_uses_status_text() {
        let (base, _request) = serve_once("503 Service Unavailable", "down").await;
        let client = local_client(base);

        let err = client.fetch_skips(&Location::default()).await.unwrap_err();
        assert_eq!(err.to_string(), "Error 503: Service Unavailable");
    }
}
