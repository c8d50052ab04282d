use super::blob_error::BlobError;
use super::object_url::ObjectUrl;
use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicU64, Ordering};

// ストアごとに異なるオリジンを割り当て、別ストアのURLを NotFound として扱う。
static NEXT_ORIGIN: AtomicU64 = AtomicU64::new(1);

/// オブジェクトURLをバイト列に解決する機能。
///
/// アーカイブ生成はこのトレイト越しにデータを取得するため、
/// 取得に失敗する任意の実装に差し替えられる。
pub trait BlobResolver {
    fn resolve(&self, url: &ObjectUrl) -> Result<Vec<u8>, BlobError>;
}

/// セッション単位のオブジェクトURLレジストリ。
///
/// 発行したURLは明示的に `revoke` されるまで解決可能であり、
/// 自動的な解放や参照カウントは行わない。
/// 解放済みのIDは記録しておき、二重解放や解放後の利用を検出する。
#[derive(Debug)]
pub struct BlobStore {
    origin: u64,
    next_id: Cell<u64>,
    live: RefCell<HashMap<u64, Vec<u8>>>,
    revoked: RefCell<HashSet<u64>>,
}

impl BlobStore {
    pub fn new() -> Self {
        Self {
            origin: NEXT_ORIGIN.fetch_add(1, Ordering::Relaxed),
            next_id: Cell::new(1),
            live: RefCell::new(HashMap::new()),
            revoked: RefCell::new(HashSet::new()),
        }
    }

    /// バイト列を登録し、新しいオブジェクトURLを発行する。
    pub fn create_object_url(&self, data: Vec<u8>) -> ObjectUrl {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.live.borrow_mut().insert(id, data);

        let url = ObjectUrl::new(self.origin, id);
        tracing::debug!(%url, "オブジェクトURLを発行しました");
        url
    }

    /// URLを解放し、以後は解決できない状態にする。
    ///
    /// 二重解放は `BlobError::Revoked` として報告される。
    pub fn revoke(&self, url: &ObjectUrl) -> Result<(), BlobError> {
        self.check_origin(url)?;
        if self.live.borrow_mut().remove(&url.id()).is_some() {
            self.revoked.borrow_mut().insert(url.id());
            tracing::debug!(%url, "オブジェクトURLを解放しました");
            Ok(())
        } else {
            Err(self.missing(url))
        }
    }

    /// URLがまだ解決可能かどうか。
    pub fn is_live(&self, url: &ObjectUrl) -> bool {
        url.origin() == self.origin && self.live.borrow().contains_key(&url.id())
    }

    /// 未解放のURLの数。
    pub fn live_count(&self) -> usize {
        self.live.borrow().len()
    }

    fn check_origin(&self, url: &ObjectUrl) -> Result<(), BlobError> {
        if url.origin() == self.origin {
            Ok(())
        } else {
            Err(BlobError::NotFound(url.clone()))
        }
    }

    fn missing(&self, url: &ObjectUrl) -> BlobError {
        if self.revoked.borrow().contains(&url.id()) {
            BlobError::Revoked(url.clone())
        } else {
            BlobError::NotFound(url.clone())
        }
    }
}

impl Default for BlobStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BlobResolver for BlobStore {
    fn resolve(&self, url: &ObjectUrl) -> Result<Vec<u8>, BlobError> {
        self.check_origin(url)?;
        match self.live.borrow().get(&url.id()) {
            Some(data) => Ok(data.clone()),
            None => Err(self.missing(url)),
        }
    }
}
