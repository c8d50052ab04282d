use super::download_error::DownloadError;
use super::download_object_url::{DownloadAnchor, DownloadTrigger};
use crate::domain::input_source::directory_path::DirectoryPath;
use crate::domain::object_url::{BlobResolver, BlobStore};
use std::fs;
use std::path::{Path, PathBuf};

/// ダウンロードを指定フォルダへのファイル保存として実行するトリガー。
#[derive(Debug)]
pub struct DirectoryTrigger {
    dir: DirectoryPath,
    saved: Vec<PathBuf>,
}

impl DirectoryTrigger {
    pub fn new(dir: DirectoryPath) -> Self {
        Self {
            dir,
            saved: Vec::new(),
        }
    }

    /// これまでに保存したファイルのパス。
    pub fn saved(&self) -> &[PathBuf] {
        &self.saved
    }

    // `foo.zip` のような単一のファイル名だけを許可する
    fn target_path(&self, name: &str) -> Result<PathBuf, DownloadError> {
        let is_plain = !name.is_empty()
            && name != "."
            && name != ".."
            && !name.contains(['/', '\\'])
            && Path::new(name).file_name().is_some();
        if is_plain {
            Ok(self.dir.as_path().join(name))
        } else {
            Err(DownloadError::InvalidFileName(name.to_string()))
        }
    }
}

impl DownloadTrigger for DirectoryTrigger {
    fn activate(
        &mut self,
        anchor: &DownloadAnchor<'_>,
        store: &BlobStore,
    ) -> Result<(), DownloadError> {
        let path = self.target_path(anchor.download)?;
        let data = store.resolve(anchor.href)?;
        fs::write(&path, &data).map_err(|source| DownloadError::Save {
            path: path.clone(),
            source,
        })?;

        tracing::info!(path = %path.display(), bytes = data.len(), "ファイルを保存しました");
        self.saved.push(path);
        Ok(())
    }
}
