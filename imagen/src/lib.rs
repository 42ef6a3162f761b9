//! Minimal Google Imagen API client.
//!
//! This crate provides a focused client for the Generative Language API's
//! image prediction endpoint:
//! - Prompt-based portrait generation
//! - Aspect ratio and sample count control
//! - Base64 image payloads ready to embed as data URLs

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "imagen-3.0-generate-002";

/// Errors that can occur when using the Imagen client.
#[derive(Debug, Error)]
pub enum Error {
    #[error("API key not configured")]
    NoApiKey,

    #[error("Network error: {0}")]
    Network(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Response contained no images")]
    NoImage,
}

/// Imagen API client.
#[derive(Clone)]
pub struct Imagen {
    client: reqwest::Client,
    api_key: String,
    model: String,
}

impl Imagen {
    /// Create a new Imagen client with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .connect_timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to build HTTP client"),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Create an Imagen client from the GEMINI_API_KEY environment variable.
    pub fn from_env() -> Result<Self, Error> {
        let api_key = std::env::var("GEMINI_API_KEY").map_err(|_| Error::NoApiKey)?;
        Ok(Self::new(api_key))
    }

    /// Set the default model for this client.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Send a generation request and return the generated images.
    pub async fn generate(&self, request: Request) -> Result<Vec<GeneratedImage>, Error> {
        let model = request.model.clone().unwrap_or_else(|| self.model.clone());
        let api_request = build_api_request(&request);
        let headers = self.build_headers()?;

        let response = self
            .client
            .post(format!("{API_BASE}/models/{model}:predict"))
            .headers(headers)
            .json(&api_request)
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Api {
                status,
                message: body,
            });
        }

        let api_response: ApiResponse = response
            .json()
            .await
            .map_err(|e| Error::Parse(e.to_string()))?;

        let images: Vec<GeneratedImage> = api_response
            .predictions
            .into_iter()
            .map(|p| GeneratedImage {
                media_type: p.mime_type.unwrap_or_else(|| "image/png".to_string()),
                data: p.bytes_base64_encoded,
            })
            .collect();

        if images.is_empty() {
            return Err(Error::NoImage);
        }

        Ok(images)
    }

    /// Generate a single image, the common case for portraits.
    pub async fn generate_one(&self, request: Request) -> Result<GeneratedImage, Error> {
        let request = request.with_sample_count(1);
        let mut images = self.generate(request).await?;
        Ok(images.remove(0))
    }

    fn build_headers(&self) -> Result<HeaderMap, Error> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            "x-goog-api-key",
            HeaderValue::from_str(&self.api_key)
                .map_err(|e| Error::Config(format!("Invalid API key: {e}")))?,
        );
        Ok(headers)
    }
}

// ============================================================================
// Public types
// ============================================================================

/// A generation request to send to Imagen.
#[derive(Debug, Clone)]
pub struct Request {
    pub model: Option<String>,
    pub prompt: String,
    pub aspect_ratio: AspectRatio,
    pub sample_count: usize,
}

impl Request {
    /// Create a new request with the given prompt.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            model: None,
            prompt: prompt.into(),
            aspect_ratio: AspectRatio::Square,
            sample_count: 1,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_aspect_ratio(mut self, aspect_ratio: AspectRatio) -> Self {
        self.aspect_ratio = aspect_ratio;
        self
    }

    pub fn with_sample_count(mut self, sample_count: usize) -> Self {
        self.sample_count = sample_count;
        self
    }
}

/// Supported aspect ratios for generated images.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AspectRatio {
    Square,
    Portrait,
    Landscape,
    PortraitWide,
    LandscapeWide,
}

impl AspectRatio {
    /// The wire format the API expects.
    pub fn as_str(&self) -> &'static str {
        match self {
            AspectRatio::Square => "1:1",
            AspectRatio::Portrait => "3:4",
            AspectRatio::Landscape => "4:3",
            AspectRatio::PortraitWide => "9:16",
            AspectRatio::LandscapeWide => "16:9",
        }
    }
}

/// A generated image returned by the API.
#[derive(Debug, Clone)]
pub struct GeneratedImage {
    /// MIME type of the image payload.
    pub media_type: String,
    /// Base64-encoded image bytes.
    pub data: String,
}

impl GeneratedImage {
    /// Render the image as an embeddable data URL.
    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.media_type, self.data)
    }
}

// ============================================================================
// Internal API types
// ============================================================================

fn build_api_request(request: &Request) -> ApiRequest {
    ApiRequest {
        instances: vec![ApiInstance {
            prompt: request.prompt.clone(),
        }],
        parameters: ApiParameters {
            sample_count: request.sample_count,
            aspect_ratio: request.aspect_ratio.as_str().to_string(),
        },
    }
}

#[derive(Debug, Serialize)]
struct ApiRequest {
    instances: Vec<ApiInstance>,
    parameters: ApiParameters,
}

#[derive(Debug, Serialize)]
struct ApiInstance {
    prompt: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ApiParameters {
    sample_count: usize,
    aspect_ratio: String,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    predictions: Vec<ApiPrediction>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiPrediction {
    bytes_base64_encoded: String,
    #[serde(default)]
    mime_type: Option<String>,
}
