//! TUI widgets module.
//!
//! The left pane is an [`ArticleForm`] built from [`TextInput`]s; the right
//! pane is the [`ArticleView`].

pub mod article_form;
pub mod article_view;
pub mod text_input;

pub use article_form::{ArticleForm, Focus, FormAction};
pub use article_view::{ArticleContent, ArticleView};
pub use text_input::TextInput;
