//! 画像描画面の型契約（props / emits）と、その参照実装。

pub mod canvas_renderer;
pub mod render_error;
pub mod renderer_props;

pub use canvas_renderer::CanvasRenderer;
pub use render_error::RenderError;
pub use renderer_props::{
    ImageRendererEmits, ImageRendererProps, Orientation, OrientationSizes, SourceFile,
    GEN_DOWNLOAD_EVENT,
};
