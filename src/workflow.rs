//! アプリケーションのメインワークフローを定義するモジュール。
//!
//! このモジュールは、UI層（`cli`）とドメイン層（`domain`）を仲介し、
//! 画像の描画 → ZIP生成 → ダウンロード → 後片付け の流れを実装します。

use crate::cli::Args;
use image_link_bundler::config::BundlerConfig;
use image_link_bundler::domain::archive::{create_zip_from_object_urls, ImageLink};
use image_link_bundler::domain::download::{download_object_url, DirectoryTrigger};
use image_link_bundler::domain::input_source::directory_path::DirectoryPath;
use image_link_bundler::domain::object_url::{BlobStore, ObjectUrl};
use image_link_bundler::domain::renderer::{CanvasRenderer, SourceFile, GEN_DOWNLOAD_EVENT};
use image_link_bundler::error::AppError;
use std::path::{Path, PathBuf};

/// 1回の実行結果。
#[derive(Debug)]
pub struct RunSummary {
    pub image_count: usize,
    pub archive_path: PathBuf,
}

/// アプリケーションのメインロジックを実行します。
///
/// # 戻り値
/// * `Ok(RunSummary)`: ZIPの保存まで完了した場合。
/// * `Err(AppError)`: 描画できた画像が1枚もない場合や、ZIPの生成・保存に失敗した場合。
///
/// 成否にかかわらず、実行中に発行したオブジェクトURLはすべて解放されます。
pub fn run(args: &Args, config: &BundlerConfig) -> Result<RunSummary, AppError> {
    // 1. 入出力ディレクトリの検証
    let input_dir = DirectoryPath::new(&args.input_dir)?;
    let output_dir = match &args.output_dir {
        Some(dir) => DirectoryPath::create(dir)?,
        None => input_dir.clone(),
    };
    let archive_name = args
        .archive_name
        .clone()
        .unwrap_or_else(|| config.archive.name.clone());

    let image_paths = input_dir.image_files()?;
    if image_paths.is_empty() {
        return Err(AppError::NoItemsProcessed(input_dir.to_string()));
    }

    // 2. 各画像を描画してリンクを集める
    let store = BlobStore::new();
    let mut renderers: Vec<CanvasRenderer> = Vec::new();
    let mut links: Vec<ImageLink> = Vec::new();
    for path in &image_paths {
        let mut renderer = CanvasRenderer::new();
        match render_one(&mut renderer, path, config, &store) {
            Ok(link) => {
                tracing::info!(file = %path.display(), entry = %link.filename, "描画しました");
                links.push(link);
            }
            Err(e) => {
                // 1枚の失敗では止めずに次の画像へ進む
                tracing::warn!(file = %path.display(), error = %e, "描画に失敗したためスキップします");
            }
        }
        renderers.push(renderer);
    }

    // 3. ZIP生成と保存
    tracing::debug!(event = GEN_DOWNLOAD_EVENT, links = links.len(), "ダウンロードを要求します");
    let result = if links.is_empty() {
        Err(AppError::NoItemsProcessed(input_dir.to_string()))
    } else {
        bundle(&store, &links, config, &output_dir, &archive_name)
    };

    // 4. 後片付け
    for renderer in &mut renderers {
        if let Err(e) = renderer.release(&store) {
            tracing::warn!(error = %e, "リンクの解放に失敗しました");
        }
    }
    if store.live_count() > 0 {
        tracing::warn!(live = store.live_count(), "解放されていないオブジェクトURLがあります");
    }

    let archive_path = result?;
    Ok(RunSummary {
        image_count: links.len(),
        archive_path,
    })
}

// --- private なヘルパー関数 ---

/// 画像1枚を描画し、通知されたリンクから `ImageLink` を作る。
fn render_one(
    renderer: &mut CanvasRenderer,
    path: &Path,
    config: &BundlerConfig,
    store: &BlobStore,
) -> Result<ImageLink, AppError> {
    let file = SourceFile::from_path(path)?;
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("untitled");
    let props = config.renderer.props_for(file, format!("{}.png", stem));

    let mut latest: Option<String> = None;
    renderer.render(&props, store, &mut |value: String| latest = Some(value))?;

    let link = latest.ok_or_else(|| AppError::NoItemsProcessed(path.display().to_string()))?;
    let object_url: ObjectUrl = link.parse()?;
    Ok(ImageLink::new(object_url, props.download_name))
}

/// リンクをZIPにまとめ、出力先フォルダへ保存する。
fn bundle(
    store: &BlobStore,
    links: &[ImageLink],
    config: &BundlerConfig,
    output_dir: &DirectoryPath,
    archive_name: &str,
) -> Result<PathBuf, AppError> {
    let zip_url = create_zip_from_object_urls(store, store, links, config.archive.options())?;

    let mut trigger = DirectoryTrigger::new(output_dir.clone());
    download_object_url(store, &mut trigger, zip_url, archive_name)?;

    Ok(output_dir.as_path().join(archive_name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::codecs::png::PngEncoder;
    use image::{ExtendedColorType, ImageEncoder};
    use std::fs;
    use std::io::{Cursor, Read};
    use tempfile::tempdir;

    fn create_dummy_png(width: u32, height: u32) -> Vec<u8> {
        let buf = vec![128u8; (width * height * 3) as usize];
        let mut result = Vec::new();
        PngEncoder::new(&mut result)
            .write_image(&buf, width, height, ExtendedColorType::Rgb8)
            .expect("PNGのエンコードに失敗");
        result
    }

    fn args(input: &Path, output: Option<PathBuf>) -> Args {
        Args {
            input_dir: input.to_path_buf(),
            output_dir: output,
            config: None,
            archive_name: None,
        }
    }

    fn small_config() -> BundlerConfig {
        let mut config = BundlerConfig::default();
        config.renderer.canvas_width = 32;
        config.renderer.canvas_height = 32;
        config
    }

    fn entry_names(path: &Path) -> Vec<String> {
        let bytes = fs::read(path).unwrap();
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        (0..archive.len())
            .map(|i| archive.by_index(i).unwrap().name().to_string())
            .collect()
    }

    #[test]
    fn run_bundles_rendered_images_into_one_zip() {
        let input = tempdir().unwrap();
        let output = tempdir().unwrap();
        fs::write(input.path().join("b.png"), create_dummy_png(8, 4)).unwrap();
        fs::write(input.path().join("a.jpg.png"), create_dummy_png(4, 8)).unwrap();
        fs::write(input.path().join("notes.txt"), "skip me").unwrap();

        let summary = run(
            &args(input.path(), Some(output.path().to_path_buf())),
            &small_config(),
        )
        .unwrap();

        assert_eq!(summary.image_count, 2);
        assert_eq!(summary.archive_path, output.path().join("images.zip"));
        assert_eq!(entry_names(&summary.archive_path), vec!["a.jpg.png", "b.png"]);

        // 各エントリは描画済みのキャンバス
        let bytes = fs::read(&summary.archive_path).unwrap();
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut png = Vec::new();
        archive.by_name("b.png").unwrap().read_to_end(&mut png).unwrap();
        let rendered = image::load_from_memory(&png).unwrap();
        assert_eq!((rendered.width(), rendered.height()), (32, 32));
    }

    #[test]
    fn run_skips_broken_images_and_honours_archive_name() {
        let input = tempdir().unwrap();
        fs::write(input.path().join("good.png"), create_dummy_png(2, 2)).unwrap();
        fs::write(input.path().join("broken.png"), b"not really a png").unwrap();

        let mut a = args(input.path(), None);
        a.archive_name = Some("bundle.zip".to_string());
        let summary = run(&a, &small_config()).unwrap();

        assert_eq!(summary.image_count, 1);
        assert_eq!(summary.archive_path, input.path().join("bundle.zip"));
        assert_eq!(entry_names(&summary.archive_path), vec!["good.png"]);
    }

    #[test]
    fn run_without_images_is_an_error() {
        let input = tempdir().unwrap();
        fs::write(input.path().join("readme.md"), "no images here").unwrap();

        let res = run(&args(input.path(), None), &small_config());
        assert!(matches!(res, Err(AppError::NoItemsProcessed(_))));
    }

    #[test]
    fn run_reports_an_unusable_archive_name() {
        let input = tempdir().unwrap();
        fs::write(input.path().join("one.png"), create_dummy_png(2, 2)).unwrap();

        let mut a = args(input.path(), None);
        a.archive_name = Some("../outside.zip".to_string());
        let res = run(&a, &small_config());

        assert!(matches!(res, Err(AppError::Download(_))));
        assert!(!input.path().join("../outside.zip").exists());
    }
}
