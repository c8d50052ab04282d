use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::Path;

/// 親から各レンダラーへダウンロード用リンクの生成を要求するイベント名。
pub const GEN_DOWNLOAD_EVENT: &str = "genDownloadEvent";

/// 画像の向き。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Landscape,
    Portrait,
    Square,
}

impl Orientation {
    /// 幅と高さから向きを判定する。
    pub fn of(width: u32, height: u32) -> Self {
        use std::cmp::Ordering::*;
        match width.cmp(&height) {
            Greater => Orientation::Landscape,
            Less => Orientation::Portrait,
            Equal => Orientation::Square,
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Orientation::Landscape => "landscape",
            Orientation::Portrait => "portrait",
            Orientation::Square => "square",
        };
        f.write_str(name)
    }
}

/// 向きごとの目標の高さ（px）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OrientationSizes {
    pub landscape: u32,
    pub portrait: u32,
    pub square: u32,
}

impl OrientationSizes {
    pub fn get(&self, orientation: Orientation) -> u32 {
        match orientation {
            Orientation::Landscape => self.landscape,
            Orientation::Portrait => self.portrait,
            Orientation::Square => self.square,
        }
    }
}

impl Default for OrientationSizes {
    fn default() -> Self {
        Self {
            landscape: 720,
            portrait: 1080,
            square: 960,
        }
    }
}

/// レンダラーに渡される入力ファイル。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub name: String,
    pub data: Vec<u8>,
}

impl SourceFile {
    pub fn new(name: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }

    pub fn from_path(path: &Path) -> std::io::Result<Self> {
        let name = path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("untitled")
            .to_string();
        Ok(Self::new(name, fs::read(path)?))
    }
}

/// 描画面に渡される設定一式。レンダラーはこれを読むだけで変更しない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRendererProps {
    pub canvas_height: u32,
    pub canvas_width: u32,
    pub background_colour: String,
    pub wanted_height: OrientationSizes,
    pub download_name: String,
    pub file: SourceFile,
}

/// レンダラーが発行するイベント。
pub trait ImageRendererEmits {
    /// 描画結果のリンク（オブジェクトURL文字列）が変わったときに呼ばれる。
    fn on_link_changed(&mut self, value: String);
}

impl<F> ImageRendererEmits for F
where
    F: FnMut(String),
{
    fn on_link_changed(&mut self, value: String) {
        self(value)
    }
}
