//! 一時的なBlob参照（オブジェクトURL）と、それを発行・解決・解放するストア。

pub mod blob_error;
pub mod blob_store;
pub mod object_url;

pub use blob_error::BlobError;
pub use blob_store::{BlobResolver, BlobStore};
pub use object_url::ObjectUrl;
