//! Form rendering module
//!
//! - `field_renderer`: text and choice field widgets
//! - `user_form`: the profile form layout

mod field_renderer;
mod user_form;

pub use user_form::draw_user_form;
