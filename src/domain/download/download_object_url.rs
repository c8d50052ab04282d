use super::download_error::DownloadError;
use crate::domain::object_url::{BlobStore, ObjectUrl};

/// 一度だけ使われる、不可視のダウンロードアンカー。
#[derive(Debug)]
pub struct DownloadAnchor<'a> {
    pub href: &'a ObjectUrl,
    pub download: &'a str,
}

/// アンカーを「クリック」して保存処理を開始する仕組み。
///
/// 保存処理が最後まで完了したかどうかは呼び出し側に伝わらなくてよい。
pub trait DownloadTrigger {
    fn activate(&mut self, anchor: &DownloadAnchor<'_>, store: &BlobStore)
        -> Result<(), DownloadError>;
}

/// `url` のダウンロードを起動し、結果にかかわらずURLを解放します。
///
/// `url` は値で受け取るため、この関数を通した後に同じハンドルは使えません。
/// 起動に失敗した場合はそのエラーを、起動に成功して解放に失敗した場合は
/// 解放のエラー（文字列から復元された重複ハンドルの二重解放など）を返します。
/// どちらの場合もURLの解放は試みられています。
pub fn download_object_url<T>(
    store: &BlobStore,
    trigger: &mut T,
    url: ObjectUrl,
    file_name: &str,
) -> Result<(), DownloadError>
where
    T: DownloadTrigger + ?Sized,
{
    let anchor = DownloadAnchor {
        href: &url,
        download: file_name,
    };
    let activated = trigger.activate(&anchor, store);
    if let Err(e) = &activated {
        tracing::warn!(%url, file_name, error = %e, "ダウンロードの起動に失敗しました");
    }

    // 後片付け
    let revoked = store.revoke(&url);
    activated?;
    revoked?;
    Ok(())
}
