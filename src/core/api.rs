use gloo_utils::format::JsValueSerdeExt;
use serde::{Serialize, Deserialize, de::DeserializeOwned};
use std::fmt;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, Request, RequestInit, RequestMode, Response};

use super::models::{Blog, Category, User};

// error type
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    ConnectionFailed(String),
    RequestFailed(String),
    UploadFailed(String),
    Serialization(String),
    Other(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::ConnectionFailed(msg) => write!(f, "Connection failed: {}", msg),
            ApiError::RequestFailed(msg) => write!(f, "Request failed: {}", msg),
            ApiError::UploadFailed(msg) => write!(f, "Upload failed: {}", msg),
            ApiError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
            ApiError::Other(msg) => write!(f, "Error: {}", msg),
        }
    }
}

/// Body of a successful `POST /upload` response.
#[derive(Debug, Serialize, Deserialize)]
struct UploadResponse {
    #[serde(rename = "publicUrl")]
    public_url: String,
}

/// Thin fetch wrapper over the blog backend's REST endpoints.
pub struct ApiConnection {
    base_url: String,
}

impl ApiConnection {
    pub fn new() -> Self {
        Self::with_base_url("")
    }

    /// Use an explicit origin instead of same-origin relative paths.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send(&self, method: &str, path: &str, body: Option<&JsValue>) -> Result<Response, ApiError> {
        let opts = RequestInit::new();
        opts.set_method(method);
        opts.set_mode(RequestMode::Cors);
        if let Some(body) = body {
            opts.set_body(body);
        }

        let request = Request::new_with_str_and_init(&self.url(path), &opts)
            .map_err(|e| {
                log::error!("Failed to create HTTP request: {:?}", e);
                ApiError::ConnectionFailed(format!("Failed to create request: {:?}", e))
            })?;

        let window = web_sys::window()
            .ok_or_else(|| ApiError::Other("No window object".to_string()))?;
        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| {
                log::error!("HTTP request failed: {:?}", e);
                ApiError::ConnectionFailed(format!("Failed to send request: {:?}", e))
            })?;

        let resp: Response = resp_value.dyn_into()
            .map_err(|e| ApiError::Other(format!("Failed to convert response: {:?}", e)))?;

        if !resp.ok() {
            log::error!("HTTP error: status={}, status_text={}", resp.status(), resp.status_text());
            return Err(ApiError::RequestFailed(format!("HTTP {} {}", resp.status(), resp.status_text())));
        }

        Ok(resp)
    }

    async fn json_body<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
        let json = JsFuture::from(resp.json().map_err(|e| {
            ApiError::Other(format!("Failed to get JSON: {:?}", e))
        })?)
        .await
        .map_err(|e| {
            log::error!("Failed to parse JSON: {:?}", e);
            ApiError::Other(format!("Failed to parse JSON: {:?}", e))
        })?;

        json.into_serde()
            .map_err(|e| ApiError::Serialization(format!("Failed to decode response: {}", e)))
    }

    pub async fn get_categories(&self) -> Result<Vec<Category>, ApiError> {
        let resp = self.send("GET", "/api/categories", None).await?;
        Self::json_body(resp).await
    }

    pub async fn get_blogs(&self) -> Result<Vec<Blog>, ApiError> {
        let resp = self.send("GET", "/api/blogs", None).await?;
        Self::json_body(resp).await
    }

    pub async fn get_current_user(&self) -> Result<User, ApiError> {
        let resp = self.send("GET", "/api/auth/me", None).await?;
        Self::json_body(resp).await
    }

    /// Upload a single image file; returns its public URL.
    pub async fn upload_image(&self, file: &File) -> Result<String, ApiError> {
        let form = FormData::new()
            .map_err(|e| ApiError::UploadFailed(format!("Failed to create form data: {:?}", e)))?;
        form.append_with_blob("image", file)
            .map_err(|e| ApiError::UploadFailed(format!("Failed to append file: {:?}", e)))?;

        let resp = self
            .send("POST", "/upload", Some(form.as_ref()))
            .await
            .map_err(|e| ApiError::UploadFailed(e.to_string()))?;

        let body: UploadResponse = Self::json_body(resp).await?;
        log::debug!("Image uploaded: {}", body.public_url);
        Ok(body.public_url)
    }

    /// Create a blog from a multipart transfer payload. Fire-and-forget
    /// from the editor's perspective; callers refresh the list afterwards.
    pub async fn create_blog(&self, form: &FormData) -> Result<(), ApiError> {
        self.send("POST", "/api/blogs", Some(form.as_ref())).await?;
        Ok(())
    }

    /// Update a blog; the payload carries the id field.
    pub async fn update_blog(&self, form: &FormData) -> Result<(), ApiError> {
        self.send("PUT", "/api/blogs", Some(form.as_ref())).await?;
        Ok(())
    }
}

impl Default for ApiConnection {
    fn default() -> Self {
        Self::new()
    }
}
