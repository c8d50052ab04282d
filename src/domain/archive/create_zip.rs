use super::archive_error::ArchiveError;
use super::image_link::ImageLink;
use super::zip_archive::{ArchiveOptions, ZipBuilder};
use crate::domain::object_url::{BlobResolver, BlobStore, ObjectUrl};

/// 複数のオブジェクトURLの内容を1つのZIPにまとめ、そのZIPのオブジェクトURLを返します。
///
/// 各リンクは入力順に1件ずつ解決され、指定のファイル名でアーカイブに追加されます。
/// ファイル名が重複した場合は後のリンクの内容で上書きされます。
///
/// # 引数
/// * `resolver`: 入力URLをバイト列に解決する実装（通常は `store` 自身）。
/// * `store`: 生成したZIPを登録するストア。
/// * `links`: アーカイブに含める `(URL, ファイル名)` の列。
/// * `options`: 圧縮方式などの書き出しオプション。
///
/// # 戻り値
/// * `Ok(ObjectUrl)`: 新しく発行されたZIPのURL。解放は呼び出し側の責任です。
/// * `Err(ArchiveError::Resolution)`: いずれかのURLが解決できなかった場合。
///   途中まで作ったアーカイブは破棄され、URLは発行されません。
///
/// 入力URLはここでは解放しません。
pub fn create_zip_from_object_urls<R>(
    resolver: &R,
    store: &BlobStore,
    links: &[ImageLink],
    options: ArchiveOptions,
) -> Result<ObjectUrl, ArchiveError>
where
    R: BlobResolver + ?Sized,
{
    let zip = links.iter().try_fold(ZipBuilder::new(), |mut zip, link| {
        let data = resolver.resolve(&link.object_url).map_err(|e| {
            tracing::error!(
                url = %link.object_url,
                filename = %link.filename,
                error = %e,
                "URLからのファイル取得またはアーカイブへの追加に失敗しました"
            );
            e
        })?;
        tracing::debug!(filename = %link.filename, bytes = data.len(), "エントリを追加");
        zip.file(&link.filename, data);
        Ok::<_, ArchiveError>(zip)
    })?;

    let entry_count = zip.len();
    let bytes = zip.generate(options)?;
    tracing::info!(entries = entry_count, bytes = bytes.len(), "ZIPアーカイブを生成しました");

    Ok(store.create_object_url(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::object_url::BlobError;
    use std::cell::RefCell;
    use std::io::{Cursor, Read};
    use zip::ZipArchive;

    fn unpack(store: &BlobStore, url: &ObjectUrl) -> Vec<(String, Vec<u8>)> {
        let bytes = store.resolve(url).expect("ZIPのURLが解決できない");
        let mut archive = ZipArchive::new(Cursor::new(bytes)).expect("ZIPとして読めない");
        (0..archive.len())
            .map(|i| {
                let mut file = archive.by_index(i).unwrap();
                let mut buf = Vec::new();
                file.read_to_end(&mut buf).unwrap();
                (file.name().to_string(), buf)
            })
            .collect()
    }

    /// 解決したURLを記録するラッパー。
    struct Recording<'a> {
        inner: &'a BlobStore,
        seen: RefCell<Vec<ObjectUrl>>,
    }

    impl BlobResolver for Recording<'_> {
        fn resolve(&self, url: &ObjectUrl) -> Result<Vec<u8>, BlobError> {
            self.seen.borrow_mut().push(url.clone());
            self.inner.resolve(url)
        }
    }

    #[test]
    fn bundles_every_link_in_order() {
        let store = BlobStore::new();
        let a = store.create_object_url(b"AAAA".to_vec());
        let b = store.create_object_url(b"BB".to_vec());
        let links = vec![ImageLink::new(a.clone(), "a.png"), ImageLink::new(b.clone(), "b.png")];

        let zip_url =
            create_zip_from_object_urls(&store, &store, &links, ArchiveOptions::default()).unwrap();

        assert_eq!(
            unpack(&store, &zip_url),
            vec![
                ("a.png".to_string(), b"AAAA".to_vec()),
                ("b.png".to_string(), b"BB".to_vec()),
            ]
        );
        // 入力URLは解放されず、ZIPのURLが1つだけ増える
        assert!(store.is_live(&a));
        assert!(store.is_live(&b));
        assert_eq!(store.live_count(), 3);
    }

    #[test]
    fn empty_input_still_returns_an_archive() {
        let store = BlobStore::new();
        let zip_url =
            create_zip_from_object_urls(&store, &store, &[], ArchiveOptions::default()).unwrap();

        assert!(store.is_live(&zip_url));
        assert!(unpack(&store, &zip_url).is_empty());
    }

    #[test]
    fn duplicate_filename_keeps_last_content() {
        let store = BlobStore::new();
        let a = store.create_object_url(b"from A".to_vec());
        let b = store.create_object_url(b"from B".to_vec());
        let links = vec![ImageLink::new(a, "x.bin"), ImageLink::new(b, "x.bin")];

        let zip_url =
            create_zip_from_object_urls(&store, &store, &links, ArchiveOptions::default()).unwrap();

        assert_eq!(unpack(&store, &zip_url), vec![("x.bin".to_string(), b"from B".to_vec())]);
    }

    #[test]
    fn unresolvable_link_aborts_without_creating_a_url() {
        let store = BlobStore::new();
        let a = store.create_object_url(b"ok".to_vec());
        let dead = store.create_object_url(b"gone".to_vec());
        let c = store.create_object_url(b"never read".to_vec());
        store.revoke(&dead).unwrap();

        let recorder = Recording {
            inner: &store,
            seen: RefCell::new(Vec::new()),
        };
        let links = vec![
            ImageLink::new(a.clone(), "a.png"),
            ImageLink::new(dead.clone(), "dead.png"),
            ImageLink::new(c.clone(), "c.png"),
        ];

        let before = store.live_count();
        let res = create_zip_from_object_urls(&recorder, &store, &links, ArchiveOptions::default());

        match res {
            Err(ArchiveError::Resolution(BlobError::Revoked(url))) => assert_eq!(url, dead),
            other => panic!("Resolution エラーを期待: {:?}", other),
        }
        // 失敗した時点で打ち切られ、後続のリンクは解決されない
        assert_eq!(*recorder.seen.borrow(), vec![a, dead]);
        assert_eq!(store.live_count(), before);
    }

    #[test]
    fn resolution_error_carries_the_original_cause() {
        let store = BlobStore::new();
        let forged: ObjectUrl = "blob:session-ffffffff/0000000000000001".parse().unwrap();
        let links = vec![ImageLink::new(forged.clone(), "f.png")];

        let err = create_zip_from_object_urls(&store, &store, &links, ArchiveOptions::default())
            .unwrap_err();

        assert_eq!(err.to_string(), BlobError::NotFound(forged).to_string());
    }
}
