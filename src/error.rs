use crate::config::ConfigError;
use crate::domain::archive::ArchiveError;
use crate::domain::download::DownloadError;
use crate::domain::input_source::path_error::PathError;
use crate::domain::object_url::BlobError;
use crate::domain::renderer::RenderError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/Oエラーが発生しました")]
    Io(#[from] std::io::Error),

    #[error("パス関連のエラー")]
    Path(#[from] PathError),

    #[error("設定エラー")]
    Config(#[from] ConfigError),

    #[error("描画エラー")]
    Render(#[from] RenderError),

    #[error(transparent)]
    Blob(#[from] BlobError),

    #[error("アーカイブ生成エラー")]
    Archive(#[from] ArchiveError),

    #[error("ダウンロードエラー")]
    Download(#[from] DownloadError),

    #[error("処理対象が見つかりませんでした: {0}")]
    NoItemsProcessed(String),
}
