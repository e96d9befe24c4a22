// Bitstamp v2 OHLC endpoint client.
// `GET {base_url}/ohlc/{pair}/?step=&start=&end=&limit=` returns
// `{"data": {"pair": "BTC/USD", "ohlc": [{"timestamp": "1640995200", "open": "46216.93", ...}]}}`.
// Bitstamp sends every field as a string; numbers are accepted too.
// Rejected requests still come back as 200 with `{"status": "error", "reason": ...}`.

use crate::config::ApiSettings;
use crate::data::source::OhlcSource;
use crate::error::EngineError;
use crate::models::QueryWindow;
use reqwest::Client;
use serde::Deserialize;
use shared::models::OhlcRecord;
use tracing::{debug, info, warn};

// Error bodies are echoed into the failure message; keep them short.
const MAX_ERROR_BODY_CHARS: usize = 200;

#[derive(Debug, Deserialize)]
struct OhlcResponse {
    #[serde(default)]
    status: Option<String>,
    // a string, or an object of field -> messages
    #[serde(default)]
    reason: Option<serde_json::Value>,
    #[serde(default)]
    data: Option<OhlcData>,
}

#[derive(Debug, Deserialize)]
struct OhlcData {
    #[serde(default)]
    pair: Option<String>,
    #[serde(default)]
    ohlc: Vec<WireOhlc>,
}

#[derive(Debug, Deserialize)]
struct WireOhlc {
    timestamp: Numeric,
    open: Numeric,
    high: Numeric,
    low: Numeric,
    close: Numeric,
    volume: Numeric,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Numeric {
    Int(i64),
    Float(f64),
    Text(String),
}

impl Numeric {
    fn as_f64(&self, field: &str, index: usize) -> Result<f64, EngineError> {
        match self {
            Numeric::Int(v) => Ok(*v as f64),
            Numeric::Float(v) => Ok(*v),
            Numeric::Text(s) => s.trim().parse::<f64>().map_err(|e| {
                EngineError::MalformedPayload(format!("record {}: invalid '{}' value '{}': {}", index, field, s, e))
            }),
        }
    }

    fn as_timestamp(&self, index: usize) -> Result<i64, EngineError> {
        let invalid = |raw: String| {
            EngineError::MalformedPayload(format!("record {}: invalid 'timestamp' value '{}'", index, raw))
        };
        match self {
            Numeric::Int(v) => Ok(*v),
            Numeric::Float(v) if v.fract() == 0.0 => Ok(*v as i64),
            Numeric::Float(v) => Err(invalid(v.to_string())),
            Numeric::Text(s) => s.trim().parse::<i64>().map_err(|_| invalid(s.clone())),
        }
    }
}

impl WireOhlc {
    fn into_record(self, index: usize) -> Result<OhlcRecord, EngineError> {
        Ok(OhlcRecord {
            timestamp: self.timestamp.as_timestamp(index)?,
            open: self.open.as_f64("open", index)?,
            high: self.high.as_f64("high", index)?,
            low: self.low.as_f64("low", index)?,
            close: self.close.as_f64("close", index)?,
            volume: self.volume.as_f64("volume", index)?,
        })
    }
}

// Decodes one response body. A body without `data` or `data.ohlc` is an
// empty page; an API error object or records that cannot be decoded make the
// whole page malformed.
pub fn decode_page(body: &str) -> Result<Vec<OhlcRecord>, EngineError> {
    let response: OhlcResponse = serde_json::from_str(body)?;
    if response.status.as_deref() == Some("error") {
        let reason = match response.reason {
            Some(serde_json::Value::String(reason)) => reason,
            Some(other) => other.to_string(),
            None => "no reason given".to_string(),
        };
        return Err(EngineError::MalformedPayload(format!("Bitstamp API error: {}", reason)));
    }
    let Some(data) = response.data else {
        warn!("Bitstamp response has no 'data' object; treating as empty page");
        return Ok(Vec::new());
    };
    if let Some(pair) = &data.pair {
        debug!(pair = %pair, records = data.ohlc.len(), "Decoded OHLC page");
    }
    data.ohlc
        .into_iter()
        .enumerate()
        .map(|(index, wire)| wire.into_record(index))
        .collect()
}

pub struct BitstampClient {
    base_url: String,
    client: Client,
}

impl BitstampClient {
    pub fn new(settings: &ApiSettings) -> Result<Self, EngineError> {
        let base_url = settings.base_url.trim().trim_end_matches('/').to_string();
        let client = Client::builder()
            .timeout(settings.timeout())
            .build()
            .map_err(|e| EngineError::ConfigError(format!("Failed to create HTTP client: {}", e)))?;

        info!(base_url = %base_url, timeout_secs = settings.timeout_secs, "Created Bitstamp client");
        Ok(Self { base_url, client })
    }

    pub fn page_url(&self, pair: &str) -> String {
        format!("{}/ohlc/{}/", self.base_url, pair)
    }

    pub fn query_params(window: &QueryWindow) -> [(&'static str, String); 4] {
        [
            ("step", window.step.seconds().to_string()),
            ("start", window.start.to_string()),
            ("end", window.end.to_string()),
            ("limit", window.limit.to_string()),
        ]
    }
}

impl OhlcSource for BitstampClient {
    async fn fetch_page(&self, pair: &str, window: &QueryWindow) -> Result<Vec<OhlcRecord>, EngineError> {
        let url = self.page_url(pair);
        debug!(url = %url, start = window.start, end = window.end, limit = window.limit, "Requesting OHLC page");

        let response = self
            .client
            .get(&url)
            .query(&Self::query_params(window))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read response body".to_string());
            return Err(EngineError::HttpStatus {
                status: status.as_u16(),
                body: body.chars().take(MAX_ERROR_BODY_CHARS).collect(),
            });
        }

        let body = response.text().await?;
        decode_page(&body)
    }
}
