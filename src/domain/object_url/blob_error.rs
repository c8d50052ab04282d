use super::object_url::ObjectUrl;
use thiserror::Error;

/// オブジェクトURLの解決・解放時に発生するエラー。
///
/// 解決失敗（resolution failure）はすべてこの型で表現される。
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BlobError {
    /// ストアが発行したことのないURL（偽造、または別セッションのURL）。
    #[error("オブジェクトURL '{0}' は存在しません")]
    NotFound(ObjectUrl),

    /// すでに解放されたURLへのアクセス、または二重解放。
    #[error("オブジェクトURL '{0}' はすでに解放されています")]
    Revoked(ObjectUrl),

    /// `blob:` 形式として解釈できない文字列。
    #[error("オブジェクトURLとして解釈できません: {0}")]
    Malformed(String),
}
