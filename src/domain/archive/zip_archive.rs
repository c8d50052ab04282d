use super::archive_error::ArchiveError;
use serde::Deserialize;
use std::io::{Cursor, Write};
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

/// エントリの圧縮方式。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Compression {
    /// 無圧縮（既定）。
    #[default]
    Stored,
    Deflated,
}

impl From<Compression> for CompressionMethod {
    fn from(value: Compression) -> Self {
        match value {
            Compression::Stored => CompressionMethod::Stored,
            Compression::Deflated => CompressionMethod::Deflated,
        }
    }
}

/// ZIPの書き出しオプション。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArchiveOptions {
    pub compression: Compression,
}

/// 名前付きバイナリエントリを挿入順に保持するメモリ上のアーカイブ。
///
/// 同名のエントリを追加すると、最初の位置のまま内容だけが置き換わる。
#[derive(Debug, Default)]
pub struct ZipBuilder {
    entries: Vec<(String, Vec<u8>)>,
}

impl ZipBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// エントリを追加する。既存の名前なら内容を上書きする。
    pub fn file(&mut self, name: &str, data: Vec<u8>) {
        match self.entries.iter_mut().find(|(n, _)| n == name) {
            Some(entry) => {
                tracing::debug!(name, "同名のエントリを上書きします");
                entry.1 = data;
            }
            None => self.entries.push((name.to_string(), data)),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// エントリ名を挿入順に返す。
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    /// ZIPコンテナとしてシリアライズする。
    pub fn generate(self, options: ArchiveOptions) -> Result<Vec<u8>, ArchiveError> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        let file_options =
            FileOptions::default().compression_method(options.compression.into());

        for (name, data) in &self.entries {
            writer.start_file(name.as_str(), file_options)?;
            writer.write_all(data)?;
        }

        let cursor = writer.finish()?;
        Ok(cursor.into_inner())
    }
}
