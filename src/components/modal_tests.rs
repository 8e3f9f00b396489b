use super::AddEditBlogModal;
use crate::core::api::{ApiConnection, ApiError};
use crate::core::models::{Blog, Category};
use crate::store::{BlogStore, DialogIntent};
use gloo_timers::future::TimeoutFuture;
use leptos::*;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{
    DataTransfer, Element, Event, File, HtmlButtonElement, HtmlElement, HtmlFormElement,
    HtmlInputElement, HtmlSelectElement,
};

wasm_bindgen_test_configure!(run_in_browser);

/// Mount the dialog into a fresh container with two categories available
/// and hand back the container plus the store driving it. Queries are
/// scoped to the container so parallel mounts from other tests cannot
/// interfere.
fn mount_modal() -> (Element, BlogStore) {
    let document = document();
    let parent = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&parent).unwrap();

    let captured = Rc::new(Cell::new(None::<BlogStore>));
    let captured_inner = captured.clone();
    let mount_point: HtmlElement = parent.clone().unchecked_into();
    mount_to(mount_point, move || {
        let store = BlogStore::new();
        store.categories.set(vec![
            Category {
                id: "a".to_string(),
                title: "Travel".to_string(),
            },
            Category {
                id: "b".to_string(),
                title: "Food".to_string(),
            },
        ]);
        provide_context(store);
        captured_inner.set(Some(store));
        view! { <AddEditBlogModal/> }
    });

    (parent, captured.get().expect("store captured during mount"))
}

fn query(parent: &Element, selector: &str) -> Option<Element> {
    parent.query_selector(selector).unwrap()
}

fn form_el(parent: &Element) -> HtmlFormElement {
    query(parent, "form.blog-form")
        .expect("form rendered")
        .unchecked_into()
}

fn set_field(parent: &Element, selector: &str, value: &str) {
    let input: HtmlInputElement = query(parent, selector)
        .expect("input rendered")
        .unchecked_into();
    input.set_value(value);
    let ev = Event::new("input").unwrap();
    input.dispatch_event(&ev).unwrap();
}

fn pick_category(parent: &Element, id: &str) {
    let select: HtmlSelectElement = query(parent, "#category-select")
        .expect("select rendered")
        .unchecked_into();
    select.set_value(id);
    let ev = Event::new("change").unwrap();
    select.dispatch_event(&ev).unwrap();
}

fn attach_image(parent: &Element) {
    let file =
        File::new_with_str_sequence(&js_sys::Array::of1(&"img-bytes".into()), "post.png").unwrap();
    let transfer = DataTransfer::new().unwrap();
    transfer.items().add_with_file(&file).unwrap();

    let input: HtmlInputElement = query(parent, ".form-image-input")
        .expect("file input rendered")
        .unchecked_into();
    input.set_files(transfer.files().as_ref());
    let ev = Event::new("change").unwrap();
    input.dispatch_event(&ev).unwrap();
}

fn submit_form(parent: &Element) {
    let ev = Event::new("submit").unwrap();
    form_el(parent).dispatch_event(&ev).unwrap();
}

/// Wait until the in-flight submission settles (the save button is
/// disabled while saving).
async fn wait_until_idle(parent: &Element) {
    let save_btn: HtmlButtonElement = query(parent, ".save-btn")
        .expect("save button rendered")
        .unchecked_into();
    for _ in 0..50 {
        TimeoutFuture::new(100).await;
        if !save_btn.disabled() {
            return;
        }
    }
    panic!("submission never settled");
}

#[wasm_bindgen_test]
async fn submit_with_empty_required_fields_keeps_dialog_open() {
    let (parent, store) = mount_modal();

    store.open_create(Blog::template_for("u1"));
    TimeoutFuture::new(50).await;
    assert!(query(&parent, ".add-edit-blog-modal").is_some());

    // Title and description are empty, so the constraint check fails and
    // nothing may dispatch or close.
    submit_form(&parent);
    TimeoutFuture::new(100).await;

    assert!(matches!(
        store.intent.get_untracked(),
        DialogIntent::Creating(_)
    ));
    assert!(query(&parent, ".add-edit-blog-modal").is_some());
    assert!(form_el(&parent).class_name().contains("was-validated"));
}

#[wasm_bindgen_test]
async fn category_constraint_tracks_selected_chips() {
    let (parent, store) = mount_modal();

    store.open_create(Blog::template_for("u1"));
    TimeoutFuture::new(50).await;
    set_field(&parent, "#blog-title", "T");
    set_field(&parent, "#blog-description", "D");

    // All text fields filled, but no category selected yet.
    assert!(!form_el(&parent).check_validity());

    pick_category(&parent, "a");
    TimeoutFuture::new(50).await;
    assert!(form_el(&parent).check_validity());

    // The select snaps back to the placeholder; the chip holds the pick.
    let select: HtmlSelectElement = query(&parent, "#category-select")
        .unwrap()
        .unchecked_into();
    assert_eq!(select.value(), "");

    // Picking the same category again keeps a single chip.
    pick_category(&parent, "a");
    TimeoutFuture::new(50).await;
    assert_eq!(
        parent.query_selector_all(".category-chip").unwrap().length(),
        1
    );

    // Removing the last chip makes the select required again.
    let remove_btn: HtmlElement = query(&parent, ".chip-remove-btn")
        .expect("chip remove button rendered")
        .unchecked_into();
    remove_btn.click();
    TimeoutFuture::new(50).await;
    assert!(!form_el(&parent).check_validity());
}

#[wasm_bindgen_test]
async fn failed_image_upload_keeps_draft_and_dialog() {
    let (parent, store) = mount_modal();

    store.open_create(Blog::template_for("u1"));
    TimeoutFuture::new(50).await;
    set_field(&parent, "#blog-title", "T");
    set_field(&parent, "#blog-description", "D");
    pick_category(&parent, "a");
    attach_image(&parent);
    TimeoutFuture::new(50).await;
    assert!(query(&parent, ".form-image-preview").is_some());

    // The test page's server has no /upload route, so the upload step
    // gets a non-success response and must halt the submission.
    submit_form(&parent);
    wait_until_idle(&parent).await;

    assert!(matches!(
        store.intent.get_untracked(),
        DialogIntent::Creating(_)
    ));
    assert!(query(&parent, ".add-edit-blog-modal").is_some());
    // The draft and the chosen image both survive for a retry.
    assert!(query(&parent, ".form-image-preview").is_some());
    let title: HtmlInputElement = query(&parent, "#blog-title").unwrap().unchecked_into();
    assert_eq!(title.value(), "T");
}

#[wasm_bindgen_test]
async fn upload_to_unreachable_origin_reports_failure() {
    let api = ApiConnection::with_base_url("http://127.0.0.1:9");
    let file =
        File::new_with_str_sequence(&js_sys::Array::of1(&"img-bytes".into()), "post.png").unwrap();

    let err = api.upload_image(&file).await.unwrap_err();
    assert!(matches!(err, ApiError::UploadFailed(_)));
}
