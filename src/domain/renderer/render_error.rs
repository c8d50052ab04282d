use super::renderer_props::Orientation;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("画像 '{name}' の読み込みに失敗しました")]
    Decode {
        name: String,
        #[source]
        source: image::ImageError,
    },

    #[error("PNGへのエンコードに失敗しました")]
    Encode(#[source] image::ImageError),

    #[error("背景色 '{0}' を解釈できません")]
    InvalidColour(String),

    #[error("キャンバスの大きさ {width}x{height} は描画できません")]
    EmptyCanvas { width: u32, height: u32 },

    #[error("{0} の目標サイズが 0 です")]
    ZeroSize(Orientation),
}
