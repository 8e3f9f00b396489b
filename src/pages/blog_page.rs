use leptos::*;

use crate::components::AddEditBlogModal;
use crate::core::models::Blog;
use crate::store::BlogStore;

/// Render one blog card with its edit affordance.
fn render_blog_card(blog: Blog, store: BlogStore) -> impl IntoView {
    let blog_for_edit = blog.clone();
    let category_titles = blog
        .categories
        .iter()
        .map(|c| c.title.clone())
        .collect::<Vec<_>>()
        .join(", ");

    view! {
        <div class="blog-card">
            {if let Some(url) = blog.image_url.clone() {
                view! {
                    <img class="blog-card-image" src=url alt=blog.title.clone()/>
                }.into_view()
            } else {
                view! {
                    <div class="blog-card-image-placeholder">
                        <i class="fas fa-image"></i>
                    </div>
                }.into_view()
            }}
            <div class="blog-card-body">
                <h3 class="blog-card-title">{blog.title.clone()}</h3>
                <p class="blog-card-description">{blog.description.clone()}</p>
                {if !category_titles.is_empty() {
                    view! {
                        <div class="blog-card-categories">
                            <i class="fas fa-tags"></i>
                            {category_titles}
                        </div>
                    }.into_view()
                } else {
                    view! { <div></div> }.into_view()
                }}
            </div>
            <div class="blog-card-actions">
                <button
                    class="edit-blog-btn"
                    on:click=move |_| store.open_edit(blog_for_edit.clone())
                >
                    <i class="fas fa-edit"></i>
                    "Edit"
                </button>
            </div>
        </div>
    }
}

/// Blog administration page: the post list plus the add/edit dialog.
#[component]
pub fn BlogPage() -> impl IntoView {
    let store = expect_context::<BlogStore>();

    let handle_new_post = move |_| {
        let author_id = store
            .current_user
            .get_untracked()
            .map(|u| u.id)
            .unwrap_or_default();
        store.open_create(Blog::template_for(&author_id));
    };

    view! {
        <div class="blog-page">
            <div class="blog-action-bar">
                <button
                    class="blog-action-btn new-post-btn"
                    on:click=handle_new_post
                    disabled=move || store.current_user.get().is_none()
                >
                    <i class="fas fa-plus"></i>
                    "New Post"
                </button>
                <button
                    class="blog-action-btn refresh-btn"
                    on:click=move |_| store.load_blogs()
                    title="Refresh posts"
                >
                    <i class="fas fa-sync-alt"></i>
                    "Refresh"
                </button>
            </div>

            <div class="blogs-section">
                <h2 class="section-title">
                    <i class="fas fa-blog"></i>
                    "Posts"
                </h2>
                <Show
                    when=move || !store.blogs.get().is_empty()
                    fallback=|| view! {
                        <div class="empty-state">
                            <i class="fas fa-inbox"></i>
                            <p>"No posts yet"</p>
                        </div>
                    }
                >
                    <div class="blogs-list">
                        {move || {
                            store.blogs.get().into_iter().map(|blog| {
                                render_blog_card(blog, store)
                            }).collect::<Vec<_>>()
                        }}
                    </div>
                </Show>
            </div>

            <AddEditBlogModal/>
        </div>
    }
}
