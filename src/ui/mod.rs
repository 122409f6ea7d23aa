pub mod renderer;

pub use renderer::{stat_bar, Renderer};
