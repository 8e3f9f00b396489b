use super::models::{Blog, BlogSection, Category};

/// The in-progress, locally held copy of the blog being created or
/// edited. Lives inside the editor dialog while it is open and is reset
/// to the empty template on submit or close.
///
/// Deliberately free of any browser types: the pending image file and
/// its preview URL are transient state owned by the dialog itself.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BlogDraft {
    pub id: Option<String>,
    pub title: String,
    pub description: String,
    pub categories: Vec<Category>,
    pub content: Vec<BlogSection>,
    pub author_id: String,
}

impl BlogDraft {
    /// Seed a draft from an existing blog (edit) or a template (create).
    pub fn from_blog(blog: &Blog) -> Self {
        Self {
            id: blog.id.clone(),
            title: blog.title.clone(),
            description: blog.description.clone(),
            categories: blog.categories.clone(),
            content: blog.content.clone(),
            author_id: blog.author_id.clone(),
        }
    }

    pub fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    pub fn set_description(&mut self, description: &str) {
        self.description = description.to_string();
    }

    /// Add a category to the draft. No-op if one with the same id is
    /// already selected.
    pub fn add_category(&mut self, category: Category) {
        if self.categories.iter().any(|c| c.id == category.id) {
            return;
        }
        self.categories.push(category);
    }

    pub fn remove_category(&mut self, id: &str) {
        self.categories.retain(|c| c.id != id);
    }

    /// Append a blank section to the end of the content list.
    pub fn push_section(&mut self) {
        self.content.push(BlogSection::default());
    }

    /// Remove the last section. No-op on an empty list.
    pub fn pop_section(&mut self) {
        self.content.pop();
    }

    /// Update a section's header by position. Out-of-range is a no-op.
    pub fn set_section_header(&mut self, index: usize, text: &str) {
        if let Some(section) = self.content.get_mut(index) {
            section.section_header = text.to_string();
        }
    }

    /// Update a section's body by position. Out-of-range is a no-op.
    pub fn set_section_text(&mut self, index: usize, text: &str) {
        if let Some(section) = self.content.get_mut(index) {
            section.section_text = text.to_string();
        }
    }

    /// Restore the empty template. Keeps nothing, not even the author.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
