pub mod blog_page;

pub use blog_page::BlogPage;
