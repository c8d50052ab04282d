use super::render_error::RenderError;
use super::renderer_props::{ImageRendererEmits, ImageRendererProps, Orientation};
use crate::domain::object_url::{BlobError, BlobStore, ObjectUrl};
use image::imageops::{self, FilterType};
use image::{DynamicImage, GenericImageView, ImageFormat, Rgba, RgbaImage};
use std::io::Cursor;

/// 入力画像をキャンバスの中央に描画し、PNGのオブジェクトURLとして公開する描画面。
///
/// 描画のたびに新しいURLを発行し、直前のURLは解放する。
/// 最後のURLは `release` を呼ぶまで有効。
#[derive(Debug, Default)]
pub struct CanvasRenderer {
    current: Option<ObjectUrl>,
}

impl CanvasRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// 現在公開中のリンク。
    pub fn current_link(&self) -> Option<&ObjectUrl> {
        self.current.as_ref()
    }

    /// `props` に従って描画し、`on_link_changed` で新しいリンクを通知する。
    ///
    /// # 戻り値
    /// * `Ok(ObjectUrl)`: 新しく発行したPNGのURL。
    /// * `Err(RenderError)`: デコード・設定・エンコードのいずれかに失敗した場合。
    ///   このときリンクは変わらず、通知も行わない。
    pub fn render<E>(
        &mut self,
        props: &ImageRendererProps,
        store: &BlobStore,
        emits: &mut E,
    ) -> Result<ObjectUrl, RenderError>
    where
        E: ImageRendererEmits + ?Sized,
    {
        let png = draw(props)?;
        let url = store.create_object_url(png);

        if let Some(previous) = self.current.replace(url.clone()) {
            if let Err(e) = store.revoke(&previous) {
                tracing::warn!(url = %previous, error = %e, "直前のリンクを解放できませんでした");
            }
        }

        tracing::debug!(file = %props.file.name, %url, "描画が完了しました");
        emits.on_link_changed(url.to_string());
        Ok(url)
    }

    /// 現在のリンクを解放する。リンクがなければ何もしない。
    pub fn release(&mut self, store: &BlobStore) -> Result<(), BlobError> {
        match self.current.take() {
            Some(url) => store.revoke(&url),
            None => Ok(()),
        }
    }
}

// デコード → 縮尺計算 → 合成 → PNGエンコード
fn draw(props: &ImageRendererProps) -> Result<Vec<u8>, RenderError> {
    let (canvas_w, canvas_h) = (props.canvas_width, props.canvas_height);
    if canvas_w == 0 || canvas_h == 0 {
        return Err(RenderError::EmptyCanvas {
            width: canvas_w,
            height: canvas_h,
        });
    }
    let background = parse_colour(&props.background_colour)?;

    let source =
        image::load_from_memory(&props.file.data).map_err(|source| RenderError::Decode {
            name: props.file.name.clone(),
            source,
        })?;
    let (src_w, src_h) = source.dimensions();
    let orientation = Orientation::of(src_w, src_h);
    let wanted = props.wanted_height.get(orientation);
    if wanted == 0 {
        return Err(RenderError::ZeroSize(orientation));
    }

    let (w, h) = fit_size((src_w, src_h), wanted, (canvas_w, canvas_h));
    let resized = source.resize_exact(w, h, FilterType::Lanczos3).to_rgba8();

    let mut canvas = RgbaImage::from_pixel(canvas_w, canvas_h, background);
    let x = i64::from((canvas_w - w) / 2);
    let y = i64::from((canvas_h - h) / 2);
    imageops::overlay(&mut canvas, &resized, x, y);

    let mut png = Vec::new();
    DynamicImage::ImageRgba8(canvas)
        .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
        .map_err(RenderError::Encode)?;
    Ok(png)
}

/// 高さを `wanted` に合わせて縦横比を保ったまま拡縮し、
/// キャンバスに収まらない場合はさらに縮小した大きさを返す。
pub fn fit_size(source: (u32, u32), wanted: u32, canvas: (u32, u32)) -> (u32, u32) {
    let (src_w, src_h) = (f64::from(source.0.max(1)), f64::from(source.1.max(1)));
    let (canvas_w, canvas_h) = (f64::from(canvas.0), f64::from(canvas.1));

    let mut h = f64::from(wanted);
    let mut w = src_w * h / src_h;

    let shrink = (canvas_w / w).min(canvas_h / h);
    if shrink < 1.0 {
        w *= shrink;
        h *= shrink;
    }

    let to_px = |v: f64, limit: u32| (v.round() as u32).clamp(1, limit);
    (to_px(w, canvas.0), to_px(h, canvas.1))
}

/// `#rgb` / `#rrggbb` / `#rrggbbaa` / `transparent` を解釈する。
pub fn parse_colour(value: &str) -> Result<Rgba<u8>, RenderError> {
    let invalid = || RenderError::InvalidColour(value.to_string());
    let trimmed = value.trim();

    if trimmed.eq_ignore_ascii_case("transparent") {
        return Ok(Rgba([0, 0, 0, 0]));
    }
    let hex = trimmed.strip_prefix('#').ok_or_else(invalid)?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
    let nibble = |i: usize| {
        u8::from_str_radix(&hex[i..i + 1], 16)
            .map(|n| n * 17)
            .map_err(|_| invalid())
    };

    match hex.len() {
        3 => Ok(Rgba([nibble(0)?, nibble(1)?, nibble(2)?, 255])),
        6 => Ok(Rgba([byte(0)?, byte(2)?, byte(4)?, 255])),
        8 => Ok(Rgba([byte(0)?, byte(2)?, byte(4)?, byte(6)?])),
        _ => Err(invalid()),
    }
}
