use leptos::*;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys::{File, HtmlSelectElement, Url};

use crate::components::category_chips::CategoryChips;
use crate::components::form_image::FormImage;
use crate::core::api::ApiConnection;
use crate::core::draft::BlogDraft;
use crate::core::payload::BlogPayload;
use crate::store::{BlogStore, DialogIntent};

/// The add/edit blog post dialog.
///
/// Visibility is controlled entirely by the store's dialog intent: the
/// dialog opens when a blog is queued for creation or editing and the
/// draft is seeded from that entity. Submission validates the form with
/// the browser's native constraint checks, uploads the pending image if
/// one was chosen, then dispatches exactly one create or update with the
/// multipart payload. Renders nothing at all while no categories are
/// available to select.
#[component]
pub fn AddEditBlogModal() -> impl IntoView {
    let store = expect_context::<BlogStore>();

    // Draft state. The draft only exists while the dialog is open; the
    // pending image file and its preview URL live beside it.
    let draft = create_rw_signal(None::<BlogDraft>);
    let pending_image = create_rw_signal(None::<File>);
    let preview_url = create_rw_signal(None::<String>);
    let was_validated = create_rw_signal(false);
    let is_saving = create_rw_signal(false);

    let form_ref = create_node_ref::<html::Form>();

    // Object-URLs must be released when superseded or on close.
    let release_preview = move || {
        if let Some(url) = preview_url.get_untracked() {
            Url::revoke_object_url(&url).unwrap_or_else(|e| {
                log::warn!("Failed to revoke preview URL: {:?}", e);
            });
        }
        preview_url.set(None);
    };

    // Seed the draft whenever an entity is queued for authoring.
    create_effect(move |_| {
        if let Some(blog) = store.intent.get().blog() {
            draft.set(Some(BlogDraft::from_blog(blog)));
            pending_image.set(None);
            release_preview();
            was_validated.set(false);
        }
    });

    let is_editing = move || matches!(store.intent.get(), DialogIntent::Editing(_));

    // Native constraint validation; marks the form so the browser's
    // per-field feedback becomes visible, and stays visible.
    let is_form_valid = move || -> bool {
        was_validated.set(true);
        form_ref
            .get_untracked()
            .map(|form| form.check_validity())
            .unwrap_or(false)
    };

    let finalize = move || {
        draft.set(None);
        pending_image.set(None);
        release_preview();
        was_validated.set(false);
        is_saving.set(false);
        store.close_dialog();
    };

    let handle_close = move |_| {
        if is_saving.get_untracked() {
            return;
        }
        finalize();
    };

    let handle_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        if is_saving.get_untracked() {
            return;
        }
        if !is_form_valid() {
            return;
        }
        let Some(current) = draft.get_untracked() else {
            return;
        };
        let file = pending_image.get_untracked();

        is_saving.set(true);

        spawn_local(async move {
            let api = ApiConnection::new();

            // Upload the image first if one was chosen. Any failure halts
            // the submission with the draft and dialog untouched, so the
            // user can retry.
            let mut uploaded_url = None;
            if let Some(file) = &file {
                match api.upload_image(file).await {
                    Ok(url) => uploaded_url = Some(url),
                    Err(e) => {
                        log::error!("Image upload failed: {}", e);
                        is_saving.set(false);
                        return;
                    }
                }
            }

            let payload = match BlogPayload::from_draft(&current, uploaded_url) {
                Ok(payload) => payload,
                Err(e) => {
                    log::error!("Failed to serialize draft: {}", e);
                    is_saving.set(false);
                    return;
                }
            };
            let form = match payload.to_form_data(file.as_ref()) {
                Ok(form) => form,
                Err(e) => {
                    log::error!("Failed to build form data: {}", e);
                    is_saving.set(false);
                    return;
                }
            };

            match store.intent.get_untracked() {
                DialogIntent::Creating(_) => store.create_blog(form),
                DialogIntent::Editing(_) => store.update_blog(form),
                DialogIntent::Closed => {}
            }

            finalize();
        });
    };

    let handle_image_select = move |file: File| {
        release_preview();
        match Url::create_object_url_with_blob(&file) {
            Ok(url) => preview_url.set(Some(url)),
            Err(e) => log::error!("Failed to create preview URL: {:?}", e),
        }
        pending_image.set(Some(file));
    };

    let handle_category_select = move |ev: leptos::ev::Event| {
        let select: HtmlSelectElement = event_target(&ev);
        let id = select.value();
        // Snap back to the placeholder so the required constraint keeps
        // tracking the selected chips, not the last pick.
        select.set_value("");
        let Some(category) = store
            .categories
            .get_untracked()
            .into_iter()
            .find(|c| c.id == id)
        else {
            return;
        };
        draft.update(|d| {
            if let Some(d) = d.as_mut() {
                d.add_category(category);
            }
        });
    };

    let handle_remove_category = move |id: String| {
        draft.update(|d| {
            if let Some(d) = d.as_mut() {
                d.remove_category(&id);
            }
        });
    };

    let selected_categories =
        Signal::derive(move || draft.get().map(|d| d.categories).unwrap_or_default());

    // Section inputs are rendered per index and read their values
    // reactively, so edits do not rebuild the input elements.
    let section_count = create_memo(move |_| {
        draft.with(|d| d.as_ref().map(|d| d.content.len()).unwrap_or(0))
    });
    let section_header_at = move |index: usize| {
        draft.with(|d| {
            d.as_ref()
                .and_then(|d| d.content.get(index))
                .map(|s| s.section_header.clone())
                .unwrap_or_default()
        })
    };
    let section_text_at = move |index: usize| {
        draft.with(|d| {
            d.as_ref()
                .and_then(|d| d.content.get(index))
                .map(|s| s.section_text.clone())
                .unwrap_or_default()
        })
    };

    view! {
        // Nothing to author against without selectable categories.
        <Show when=move || !store.categories.get().is_empty()>
            <Show when=move || store.intent.get().is_open()>
                <div class="modal-overlay">
                    <div class="add-edit-blog-modal">
                        <div class="form-header">
                            <h3 class="form-title">
                                <i class="fas fa-edit"></i>
                                {move || if is_editing() { "Edit Blog Post" } else { "New Blog Post" }}
                            </h3>
                            <button
                                type="button"
                                class="form-close-btn"
                                on:click=handle_close
                                title="Close"
                                prop:disabled=move || is_saving.get()
                            >
                                <i class="fas fa-times"></i>
                            </button>
                        </div>

                        <form
                            class="blog-form"
                            class:was-validated=move || was_validated.get()
                            node_ref=form_ref
                            on:submit=handle_submit
                        >
                            <FormImage
                                preview=preview_url
                                on_select=Rc::new(handle_image_select)
                                disabled=is_saving
                            />

                            <div class="form-group">
                                <label for="category-select">"Categories"</label>
                                <select
                                    id="category-select"
                                    on:change=handle_category_select
                                    prop:disabled=move || is_saving.get()
                                    // Required until at least one category is
                                    // actually selected, not just picked once.
                                    prop:required=move || {
                                        !is_editing() && selected_categories.with(|c| c.is_empty())
                                    }
                                >
                                    <option value="" selected disabled>"Select a category..."</option>
                                    {move || {
                                        store.categories.get().into_iter().map(|category| {
                                            view! {
                                                <option value=category.id.clone()>
                                                    {category.title.clone()}
                                                </option>
                                            }
                                        }).collect::<Vec<_>>()
                                    }}
                                </select>
                            </div>

                            <CategoryChips
                                categories=selected_categories
                                on_remove=Rc::new(handle_remove_category)
                                disabled=is_saving
                            />

                            <div class="form-group">
                                <label for="blog-title">"Title"</label>
                                <input
                                    type="text"
                                    id="blog-title"
                                    prop:value=move || draft.get().map(|d| d.title).unwrap_or_default()
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        draft.update(|d| {
                                            if let Some(d) = d.as_mut() {
                                                d.set_title(&value);
                                            }
                                        });
                                    }
                                    prop:disabled=move || is_saving.get()
                                    required
                                />
                                <div class="valid-feedback">"Looks good!"</div>
                            </div>

                            <div class="form-group">
                                <label for="blog-description">"Description"</label>
                                <input
                                    type="text"
                                    id="blog-description"
                                    prop:value=move || draft.get().map(|d| d.description).unwrap_or_default()
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        draft.update(|d| {
                                            if let Some(d) = d.as_mut() {
                                                d.set_description(&value);
                                            }
                                        });
                                    }
                                    prop:disabled=move || is_saving.get()
                                    required
                                />
                                <div class="valid-feedback">"Looks good!"</div>
                            </div>

                            <label class="content-label">"Content"</label>
                            {move || {
                                (0..section_count.get()).map(|index| {
                                    view! {
                                        <div class="content-section">
                                            <div class="form-group">
                                                <label for=format!("section-header-{}", index)>
                                                    "Section Header"
                                                </label>
                                                <input
                                                    type="text"
                                                    id=format!("section-header-{}", index)
                                                    prop:value=move || section_header_at(index)
                                                    on:input=move |ev| {
                                                        let value = event_target_value(&ev);
                                                        draft.update(|d| {
                                                            if let Some(d) = d.as_mut() {
                                                                d.set_section_header(index, &value);
                                                            }
                                                        });
                                                    }
                                                    prop:disabled=move || is_saving.get()
                                                    required
                                                />
                                                <div class="valid-feedback">"Looks good!"</div>
                                            </div>
                                            <div class="form-group">
                                                <label for=format!("section-text-{}", index)>
                                                    "Section Text"
                                                </label>
                                                <textarea
                                                    id=format!("section-text-{}", index)
                                                    prop:value=move || section_text_at(index)
                                                    on:input=move |ev| {
                                                        let value = event_target_value(&ev);
                                                        draft.update(|d| {
                                                            if let Some(d) = d.as_mut() {
                                                                d.set_section_text(index, &value);
                                                            }
                                                        });
                                                    }
                                                    prop:disabled=move || is_saving.get()
                                                    required
                                                ></textarea>
                                                <div class="valid-feedback">"Looks good!"</div>
                                            </div>
                                        </div>
                                    }
                                }).collect::<Vec<_>>()
                            }}

                            <div class="section-controls">
                                <Show when=move || {
                                    draft.get().map(|d| !d.content.is_empty()).unwrap_or(false)
                                }>
                                    <button
                                        type="button"
                                        class="remove-section-btn"
                                        on:click=move |_| {
                                            draft.update(|d| {
                                                if let Some(d) = d.as_mut() {
                                                    d.pop_section();
                                                }
                                            });
                                        }
                                        prop:disabled=move || is_saving.get()
                                        title="Remove last section"
                                    >
                                        <i class="fas fa-trash"></i>
                                    </button>
                                </Show>
                                <button
                                    type="button"
                                    class="add-section-btn"
                                    on:click=move |_| {
                                        draft.update(|d| {
                                            if let Some(d) = d.as_mut() {
                                                d.push_section();
                                            }
                                        });
                                    }
                                    prop:disabled=move || is_saving.get()
                                    title="Add section"
                                >
                                    <i class="fas fa-plus-circle"></i>
                                </button>
                            </div>

                            <div class="form-footer">
                                <button
                                    type="button"
                                    class="close-btn"
                                    on:click=handle_close
                                    prop:disabled=move || is_saving.get()
                                >
                                    "Close"
                                </button>
                                <button
                                    type="submit"
                                    class="save-btn"
                                    prop:disabled=move || is_saving.get()
                                >
                                    {move || if is_saving.get() { "Saving..." } else { "Save changes" }}
                                </button>
                            </div>
                        </form>
                    </div>
                </div>
            </Show>
        </Show>
    }
}
