//! オブジェクトURLのダウンロードを起動し、その直後にURLを解放するモジュール。

pub mod directory_trigger;
pub mod download_error;
pub mod download_object_url;

pub use directory_trigger::DirectoryTrigger;
pub use download_error::DownloadError;
pub use download_object_url::{download_object_url, DownloadAnchor, DownloadTrigger};
