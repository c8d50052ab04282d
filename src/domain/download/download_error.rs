use crate::domain::object_url::BlobError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DownloadError {
    /// ダウンロード名として使えないファイル名。
    #[error("ダウンロード名 '{0}' は使用できません")]
    InvalidFileName(String),

    #[error("'{}' への保存に失敗しました", .path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Blob(#[from] BlobError),
}
