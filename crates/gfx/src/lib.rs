//! egui rendering for typed inputs: the wgpu [`Renderer`] a window draws
//! with, and [`TypedInputWidget`], the egui face of
//! [`form_controls::TypedInput`].

pub mod files;
pub mod keys;
mod renderer;
pub mod typed_input;

pub use renderer::Renderer;
pub use typed_input::{TypedInputWidget, show_typed_input};
