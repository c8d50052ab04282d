//! 描画した画像のオブジェクトURLを1つのZIPにまとめ、ダウンロードさせるためのライブラリ。

pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
