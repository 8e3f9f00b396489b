pub mod add_edit_blog_modal;
pub mod category_chips;
pub mod form_image;

pub use add_edit_blog_modal::AddEditBlogModal;
pub use category_chips::CategoryChips;
pub use form_image::FormImage;

#[cfg(all(test, target_arch = "wasm32"))]
mod modal_tests;
