/// Image rendering adapters
mod graphviz_renderer;

pub use graphviz_renderer::GraphvizRenderer;
