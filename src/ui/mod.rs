pub mod renderer;

pub use renderer::{ConsoleRenderer, NullRenderer, Renderer, TextRenderer};
