use leptos::*;

use crate::pages::BlogPage;
use crate::store::BlogStore;

// main app component
#[component]
pub fn App() -> impl IntoView {
    let store = BlogStore::new();
    provide_context(store);

    // Initial loads: category list, blog list and the acting user.
    store.load_categories();
    store.load_blogs();
    store.load_current_user();

    view! {
        <main class="container">
            <header class="app-header">
                <h1 class="app-title">
                    <i class="fas fa-blog"></i>
                    "Blog Admin"
                </h1>
                {move || {
                    if let Some(user) = store.current_user.get() {
                        view! {
                            <span class="app-user">
                                <i class="fas fa-user"></i>
                                {user.name}
                            </span>
                        }.into_view()
                    } else {
                        view! { <span class="app-user"></span> }.into_view()
                    }
                }}
            </header>
            <BlogPage/>
        </main>
    }
}
