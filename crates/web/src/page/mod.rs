//! The product page: view-model preparation plus a pure HTML render.

pub mod render;
pub mod view_model;

pub use render::render_page;
pub use view_model::{prepare_view_model, PageViewModel, RenderState};
