use serde::{Serialize, Deserialize};

/// A selectable blog category. Sourced from the backend, read-only here.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub title: String,
}

/// One repeatable header/body unit within a blog post's content.
/// Sections have no id of their own; position in the content list is
/// their identity.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BlogSection {
    #[serde(rename = "sectionHeader")]
    pub section_header: String,
    #[serde(rename = "sectionText")]
    pub section_text: String,
}

/// A blog post as persisted by the backend. The image is authored as a
/// raw file in the editor and only comes back as a public URL.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Blog {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub content: Vec<BlogSection>,
    #[serde(rename = "authorId", default)]
    pub author_id: String,
    #[serde(rename = "imageUrl", default)]
    pub image_url: Option<String>,
}

impl Blog {
    /// Empty template for a new post by the given author.
    pub fn template_for(author_id: &str) -> Self {
        Self {
            author_id: author_id.to_string(),
            ..Default::default()
        }
    }
}

/// The acting user. Passed into the editor explicitly rather than read
/// from ambient browser storage.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blog_deserializes_with_missing_optional_fields() {
        let blog: Blog = serde_json::from_str(r#"{"title":"Hello"}"#).unwrap();
        assert_eq!(blog.title, "Hello");
        assert!(blog.id.is_none());
        assert!(blog.categories.is_empty());
        assert!(blog.content.is_empty());
    }

    #[test]
    fn section_uses_wire_field_names() {
        let section = BlogSection {
            section_header: "Intro".to_string(),
            section_text: "Body".to_string(),
        };
        let json = serde_json::to_string(&section).unwrap();
        assert!(json.contains("\"sectionHeader\":\"Intro\""));
        assert!(json.contains("\"sectionText\":\"Body\""));
    }

    #[test]
    fn template_carries_author() {
        let blog = Blog::template_for("u1");
        assert_eq!(blog.author_id, "u1");
        assert!(blog.title.is_empty());
        assert!(blog.id.is_none());
    }
}
