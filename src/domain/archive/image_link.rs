use crate::domain::object_url::ObjectUrl;

/// アーカイブに含める1件分の参照。
///
/// `object_url` の所有権は呼び出し側に残り、アーカイブ生成では解放されない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageLink {
    pub object_url: ObjectUrl,
    pub filename: String,
}

impl ImageLink {
    pub fn new(object_url: ObjectUrl, filename: impl Into<String>) -> Self {
        Self {
            object_url,
            filename: filename.into(),
        }
    }
}
