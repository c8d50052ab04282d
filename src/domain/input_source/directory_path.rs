use super::path_error::PathError;
use std::fmt;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 対応している画像の拡張子（小文字）。
const IMAGE_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "gif", "bmp"];

/// 存在が確認されたディレクトリへのパス。
#[derive(Debug, Clone)]
pub struct DirectoryPath {
    path: PathBuf,
}

impl DirectoryPath {
    /// パスが存在し、かつディレクトリであることを検証して生成する。
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, PathError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(PathError::NotFound(path.to_path_buf()));
        }
        if !path.is_dir() {
            return Err(PathError::NotADirectory(path.to_path_buf()));
        }

        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    /// ディレクトリがなければ作成してから検証する。
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self, PathError> {
        let path = path.as_ref();
        if !path.exists() {
            std::fs::create_dir_all(path).map_err(|source| PathError::Create {
                path: path.to_path_buf(),
                source,
            })?;
        }
        Self::new(path)
    }

    // 内部のPathBufへの参照を返す
    pub fn as_path(&self) -> &Path {
        &self.path
    }

    /// 直下にある画像ファイルをパス順に返す。サブフォルダは辿らない。
    pub fn image_files(&self) -> Result<Vec<PathBuf>, PathError> {
        let mut images = Vec::new();
        for entry in WalkDir::new(&self.path).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|source| PathError::Walk {
                path: self.path.clone(),
                source,
            })?;
            if entry.file_type().is_file() && is_image_file(entry.path()) {
                images.push(entry.into_path());
            }
        }
        // ファイル名の順序を安定させるため、パスをソートする。
        images.sort();
        Ok(images)
    }
}

impl fmt::Display for DirectoryPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

/// 拡張子で画像ファイルかどうかを簡易的に判定する。
///
/// `file_stem` がないドットファイル（`.png` など）は対象外とする。
pub fn is_image_file(path: &Path) -> bool {
    if path.file_stem().is_none() {
        return false;
    }
    match path.extension().and_then(|s| s.to_str()) {
        Some(ext) => IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()),
        None => false,
    }
}
