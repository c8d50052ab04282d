use std::path::PathBuf;
use thiserror::Error;

/// 入力・出力フォルダの検証時に発生するエラー。
#[derive(Debug, Error)]
pub enum PathError {
    #[error("パス '{}' は存在しません。", .0.display())]
    NotFound(PathBuf),

    #[error("パス '{}' はディレクトリではありません。", .0.display())]
    NotADirectory(PathBuf),

    #[error("ディレクトリ '{}' を作成できません", .path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("'{}' の走査に失敗しました", .path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}
