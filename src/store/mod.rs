use leptos::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::FormData;

use crate::core::api::ApiConnection;
use crate::core::models::{Blog, Category, User};

/// What the editor dialog is currently doing. A single tagged value, so
/// "creating" and "editing" can never be active at the same time.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum DialogIntent {
    #[default]
    Closed,
    Creating(Blog),
    Editing(Blog),
}

impl DialogIntent {
    pub fn is_open(&self) -> bool {
        !matches!(self, DialogIntent::Closed)
    }

    /// The entity queued for authoring, if any.
    pub fn blog(&self) -> Option<&Blog> {
        match self {
            DialogIntent::Closed => None,
            DialogIntent::Creating(blog) | DialogIntent::Editing(blog) => Some(blog),
        }
    }
}

/// Client-side store shared through context: the blog list, the category
/// list, the acting user and the editor dialog intent.
#[derive(Clone, Copy)]
pub struct BlogStore {
    pub blogs: RwSignal<Vec<Blog>>,
    pub categories: RwSignal<Vec<Category>>,
    pub current_user: RwSignal<Option<User>>,
    pub intent: RwSignal<DialogIntent>,
}

impl BlogStore {
    pub fn new() -> Self {
        Self {
            blogs: create_rw_signal(vec![]),
            categories: create_rw_signal(vec![]),
            current_user: create_rw_signal(None),
            intent: create_rw_signal(DialogIntent::Closed),
        }
    }

    /// Queue a template entity for creation and open the dialog.
    pub fn open_create(&self, template: Blog) {
        self.intent.set(DialogIntent::Creating(template));
    }

    /// Queue an existing blog for editing and open the dialog.
    pub fn open_edit(&self, blog: Blog) {
        self.intent.set(DialogIntent::Editing(blog));
    }

    /// Clear whichever intent is active and hide the dialog.
    pub fn close_dialog(&self) {
        self.intent.set(DialogIntent::Closed);
    }

    pub fn load_blogs(&self) {
        let blogs = self.blogs;
        spawn_local(async move {
            let api = ApiConnection::new();
            match api.get_blogs().await {
                Ok(list) => {
                    log::info!("Loaded {} blogs", list.len());
                    blogs.set(list);
                }
                Err(e) => log::error!("Failed to load blogs: {}", e),
            }
        });
    }

    pub fn load_categories(&self) {
        let categories = self.categories;
        spawn_local(async move {
            let api = ApiConnection::new();
            match api.get_categories().await {
                Ok(list) => categories.set(list),
                Err(e) => log::error!("Failed to load categories: {}", e),
            }
        });
    }

    pub fn load_current_user(&self) {
        let current_user = self.current_user;
        spawn_local(async move {
            let api = ApiConnection::new();
            match api.get_current_user().await {
                Ok(user) => current_user.set(Some(user)),
                Err(e) => log::error!("Failed to load current user: {}", e),
            }
        });
    }

    /// Dispatch a create. Fire-and-forget: failures are logged here, the
    /// caller has already reset its own state.
    pub fn create_blog(&self, form: FormData) {
        let store = *self;
        spawn_local(async move {
            let api = ApiConnection::new();
            match api.create_blog(&form).await {
                Ok(()) => store.load_blogs(),
                Err(e) => log::error!("Failed to create blog: {}", e),
            }
        });
    }

    /// Dispatch an update. Same fire-and-forget contract as create.
    pub fn update_blog(&self, form: FormData) {
        let store = *self;
        spawn_local(async move {
            let api = ApiConnection::new();
            match api.update_blog(&form).await {
                Ok(()) => store.load_blogs(),
                Err(e) => log::error!("Failed to update blog: {}", e),
            }
        });
    }
}

impl Default for BlogStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intents_are_mutually_exclusive_by_construction() {
        let runtime = create_runtime();

        let store = BlogStore::new();
        assert_eq!(store.intent.get_untracked(), DialogIntent::Closed);

        store.open_create(Blog::template_for("u1"));
        assert!(store.intent.get_untracked().is_open());

        // Opening an edit replaces the create intent entirely.
        let existing = Blog {
            id: Some("42".to_string()),
            title: "Old".to_string(),
            ..Default::default()
        };
        store.open_edit(existing.clone());
        match store.intent.get_untracked() {
            DialogIntent::Editing(blog) => assert_eq!(blog, existing),
            other => panic!("expected Editing, got {:?}", other),
        }

        store.close_dialog();
        assert_eq!(store.intent.get_untracked(), DialogIntent::Closed);

        runtime.dispose();
    }

    #[test]
    fn intent_exposes_queued_blog() {
        let closed = DialogIntent::Closed;
        assert!(closed.blog().is_none());
        assert!(!closed.is_open());

        let blog = Blog {
            title: "T".to_string(),
            ..Default::default()
        };
        let creating = DialogIntent::Creating(blog.clone());
        assert_eq!(creating.blog(), Some(&blog));

        let editing = DialogIntent::Editing(blog.clone());
        assert_eq!(editing.blog(), Some(&blog));
    }
}
