//! アプリケーション設定。TOMLファイルから読み込み、省略された項目は既定値を使う。

use crate::domain::archive::{ArchiveOptions, Compression};
use crate::domain::renderer::{ImageRendererProps, OrientationSizes, SourceFile};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("設定ファイル '{}' を読み込めません", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("設定ファイル '{}' の形式が正しくありません", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct BundlerConfig {
    pub renderer: RendererConfig,
    pub archive: ArchiveConfig,
    pub logging: LoggingConfig,
}

/// 各画像の描画に使う props の既定値。
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RendererConfig {
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub background_colour: String,
    pub wanted_height: OrientationSizes,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ArchiveConfig {
    /// 保存するZIPのファイル名。
    pub name: String,
    pub compression: Compression,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// ログレベルのフィルタ（例: "info", "image_link_bundler=debug"）。
    pub level: String,
    /// JSON形式で出力するかどうか。
    pub json: bool,
}

impl BundlerConfig {
    /// `path` が指定されていれば読み込み、なければ既定値を返す。
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl RendererConfig {
    /// 入力ファイルと出力名を組み合わせて props を作る。
    pub fn props_for(&self, file: SourceFile, download_name: String) -> ImageRendererProps {
        ImageRendererProps {
            canvas_height: self.canvas_height,
            canvas_width: self.canvas_width,
            background_colour: self.background_colour.clone(),
            wanted_height: self.wanted_height,
            download_name,
            file,
        }
    }
}

impl ArchiveConfig {
    pub fn options(&self) -> ArchiveOptions {
        ArchiveOptions {
            compression: self.compression,
        }
    }
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            canvas_width: 1080,
            canvas_height: 1080,
            background_colour: "#ffffff".to_string(),
            wanted_height: OrientationSizes::default(),
        }
    }
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self {
            name: "images.zip".to_string(),
            compression: Compression::Stored,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}
