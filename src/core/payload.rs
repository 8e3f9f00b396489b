use web_sys::{File, FormData};

use super::api::ApiError;
use super::draft::BlogDraft;
use super::models::{BlogSection, Category};

/// The serialized transfer representation of a draft, ready to be sent
/// to the backend as multipart form fields. Categories and content go
/// over the wire as JSON-encoded arrays.
#[derive(Clone, Debug, PartialEq)]
pub struct BlogPayload {
    pub id: Option<String>,
    pub title: String,
    pub description: String,
    pub categories_json: String,
    pub content_json: String,
    pub author_id: String,
    /// Public URL returned by the upload endpoint, when an image was
    /// uploaded as part of this submission.
    pub image_url: Option<String>,
}

impl BlogPayload {
    pub fn from_draft(draft: &BlogDraft, image_url: Option<String>) -> Result<Self, ApiError> {
        let categories_json = serde_json::to_string(&draft.categories)
            .map_err(|e| ApiError::Serialization(e.to_string()))?;
        let content_json = serde_json::to_string(&draft.content)
            .map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(Self {
            id: draft.id.clone(),
            title: draft.title.clone(),
            description: draft.description.clone(),
            categories_json,
            content_json,
            author_id: draft.author_id.clone(),
            image_url,
        })
    }

    /// Decode the categories field back into structured form.
    pub fn parse_categories(&self) -> Result<Vec<Category>, ApiError> {
        serde_json::from_str(&self.categories_json)
            .map_err(|e| ApiError::Serialization(e.to_string()))
    }

    /// Decode the content field back into structured form.
    pub fn parse_content(&self) -> Result<Vec<BlogSection>, ApiError> {
        serde_json::from_str(&self.content_json)
            .map_err(|e| ApiError::Serialization(e.to_string()))
    }

    /// Assemble the multipart body. The raw image file, when one was
    /// chosen, travels alongside the uploaded public URL.
    pub fn to_form_data(&self, image: Option<&File>) -> Result<FormData, ApiError> {
        let form = FormData::new()
            .map_err(|e| ApiError::Other(format!("Failed to create form data: {:?}", e)))?;
        let append = |key: &str, value: &str| {
            form.append_with_str(key, value)
                .map_err(|e| ApiError::Other(format!("Failed to append {}: {:?}", key, e)))
        };
        if let Some(id) = &self.id {
            append("id", id)?;
        }
        if let Some(file) = image {
            form.append_with_blob("image", file)
                .map_err(|e| ApiError::Other(format!("Failed to append image: {:?}", e)))?;
        }
        if let Some(url) = &self.image_url {
            append("imageUrl", url)?;
        }
        append("title", &self.title)?;
        append("description", &self.description)?;
        append("categories", &self.categories_json)?;
        append("content", &self.content_json)?;
        append("authorId", &self.author_id)?;
        Ok(form)
    }
}
