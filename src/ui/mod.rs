// src/ui/mod.rs
pub mod shell;
pub mod view;

pub use shell::App;
pub use view::{Line, Node, Renderer, Tone};
