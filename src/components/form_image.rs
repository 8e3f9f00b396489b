use leptos::*;
use std::rc::Rc;
use web_sys::{File, HtmlInputElement};

/// Image picker with a live preview. The chosen file is handed to the
/// parent; the parent owns the preview object-URL and its lifetime.
#[component]
pub fn FormImage(
    #[prop(into)] preview: Signal<Option<String>>,
    on_select: Rc<dyn Fn(File)>,
    #[prop(into)] disabled: Signal<bool>,
) -> impl IntoView {
    let on_select_signal = create_rw_signal(Some(on_select));

    let handle_change = move |ev: leptos::ev::Event| {
        let input: HtmlInputElement = event_target(&ev);
        let Some(files) = input.files() else {
            return;
        };
        if let Some(file) = files.get(0) {
            on_select_signal.with_untracked(|cb_opt| {
                if let Some(callback) = cb_opt.as_ref() {
                    callback(file);
                }
            });
        }
    };

    view! {
        <div class="form-image">
            {move || {
                if let Some(url) = preview.get() {
                    view! {
                        <img class="form-image-preview" src=url alt="Selected image"/>
                    }.into_view()
                } else {
                    view! {
                        <div class="form-image-placeholder">
                            <i class="fas fa-image"></i>
                        </div>
                    }.into_view()
                }
            }}
            <input
                type="file"
                class="form-image-input"
                accept="image/*"
                on:change=handle_change
                prop:disabled=move || disabled.get()
            />
        </div>
    }
}
