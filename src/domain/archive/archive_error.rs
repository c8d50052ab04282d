use crate::domain::object_url::BlobError;
use thiserror::Error;

/// アーカイブ生成時のエラー。
#[derive(Debug, Error)]
pub enum ArchiveError {
    /// 入力URLの解決に失敗した。原因はそのまま保持する。
    #[error(transparent)]
    Resolution(#[from] BlobError),

    #[error(transparent)]
    Zip(#[from] zip::result::ZipError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
