use leptos::*;
use std::rc::Rc;

use crate::core::models::Category;

/// The draft's selected categories as a row of removable chips.
#[component]
pub fn CategoryChips(
    #[prop(into)] categories: Signal<Vec<Category>>,
    on_remove: Rc<dyn Fn(String)>,
    #[prop(into)] disabled: Signal<bool>,
) -> impl IntoView {
    let on_remove_signal = create_rw_signal(Some(on_remove));

    view! {
        <div class="category-chips">
            {move || {
                categories.get().into_iter().map(|category| {
                    let id = category.id.clone();
                    let handle_remove = move |_| {
                        if disabled.get_untracked() {
                            return;
                        }
                        let id = id.clone();
                        on_remove_signal.with_untracked(|cb_opt| {
                            if let Some(callback) = cb_opt.as_ref() {
                                callback(id);
                            }
                        });
                    };
                    view! {
                        <span class="category-chip">
                            {category.title.clone()}
                            <button
                                type="button"
                                class="chip-remove-btn"
                                on:click=handle_remove
                                title="Remove category"
                            >
                                <i class="fas fa-times"></i>
                            </button>
                        </span>
                    }
                }).collect::<Vec<_>>()
            }}
        </div>
    }
}
