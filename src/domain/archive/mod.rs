//! 複数のオブジェクトURLを1つのZIPアーカイブにまとめるモジュール。

pub mod archive_error;
pub mod create_zip;
pub mod image_link;
pub mod zip_archive;

pub use archive_error::ArchiveError;
pub use create_zip::create_zip_from_object_urls;
pub use image_link::ImageLink;
pub use zip_archive::{ArchiveOptions, Compression, ZipBuilder};
