//! Подготовка изображения к загрузке на сервер. Файлы больше порога
//! уменьшаются на канвасе и перекодируются в JPEG прямо в браузере,
//! чтобы не гонять мегабайты через API.

use std::fmt;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag, CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

/// Жёсткий предел размера исходного файла: 10 МБ.
pub const MAX_UPLOAD_BYTES: f64 = 10.0 * 1024.0 * 1024.0;
/// Файлы крупнее 1 МБ пережимаются перед отправкой.
pub const COMPRESS_THRESHOLD: f64 = 1024.0 * 1024.0;
/// Длинная сторона после уменьшения.
pub const MAX_DIMENSION: u32 = 1024;
const JPEG_QUALITY: f64 = 0.8;

#[derive(Debug, Clone, PartialEq)]
pub enum ImageError {
    /// Файл превышает [`MAX_UPLOAD_BYTES`].
    TooLarge,
    /// Браузер не смог декодировать или перекодировать изображение.
    Encode(String),
}

impl fmt::Display for ImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageError::TooLarge => write!(f, "файл больше 10 МБ"),
            ImageError::Encode(msg) => write!(f, "изображение не обработано: {msg}"),
        }
    }
}

fn js_err(e: JsValue) -> ImageError {
    ImageError::Encode(format!("{e:?}"))
}

/// Вписывает размеры в квадрат [`MAX_DIMENSION`], сохраняя пропорции.
/// Изображения, уже помещающиеся в квадрат, не трогаются.
pub fn scaled_dimensions(width: u32, height: u32) -> (u32, u32) {
    let longest = width.max(height);
    if longest <= MAX_DIMENSION || longest == 0 {
        return (width, height);
    }
    let ratio = MAX_DIMENSION as f64 / longest as f64;
    let w = ((width as f64 * ratio).round() as u32).max(1);
    let h = ((height as f64 * ratio).round() as u32).max(1);
    (w, h)
}

/// Возвращает Blob, готовый к отправке: сам файл, если он мал,
/// или уменьшенный JPEG, если размер за порогом.
pub async fn prepare_upload(file: web_sys::File) -> Result<Blob, ImageError> {
    let size = file.size();
    if size > MAX_UPLOAD_BYTES {
        return Err(ImageError::TooLarge);
    }
    if size <= COMPRESS_THRESHOLD {
        return Ok(file.into());
    }
    compress(&file).await
}

async fn compress(file: &web_sys::File) -> Result<Blob, ImageError> {
    let url = web_sys::Url::create_object_url_with_blob(file).map_err(js_err)?;
    let result = load_image(&url).await;
    // URL нужен только на время декодирования.
    let _ = web_sys::Url::revoke_object_url(&url);
    let img = result?;

    let (w, h) = scaled_dimensions(img.natural_width(), img.natural_height());
    encode_jpeg(&img, w, h)
}

async fn load_image(url: &str) -> Result<HtmlImageElement, ImageError> {
    let img = HtmlImageElement::new().map_err(js_err)?;
    let loaded = js_sys::Promise::new(&mut |resolve, reject| {
        img.set_onload(Some(&resolve));
        img.set_onerror(Some(&reject));
    });
    img.set_src(url);
    JsFuture::from(loaded)
        .await
        .map_err(|_| ImageError::Encode("файл не является изображением".into()))?;
    Ok(img)
}

fn encode_jpeg(img: &HtmlImageElement, w: u32, h: u32) -> Result<Blob, ImageError> {
    let document = web_sys::window()
        .and_then(|win| win.document())
        .ok_or_else(|| ImageError::Encode("нет document".into()))?;
    let canvas: HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(js_err)?
        .dyn_into()
        .map_err(|_| ImageError::Encode("canvas не создан".into()))?;
    canvas.set_width(w);
    canvas.set_height(h);

    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(js_err)?
        .ok_or_else(|| ImageError::Encode("контекст 2d недоступен".into()))?
        .dyn_into()
        .map_err(|_| ImageError::Encode("контекст 2d недоступен".into()))?;
    ctx.draw_image_with_html_image_element_and_dw_and_dh(img, 0.0, 0.0, w as f64, h as f64)
        .map_err(js_err)?;

    let data_url = canvas
        .to_data_url_with_type_and_encoder_options("image/jpeg", &JsValue::from_f64(JPEG_QUALITY))
        .map_err(js_err)?;
    data_url_to_blob(&data_url)
}

fn data_url_to_blob(data_url: &str) -> Result<Blob, ImageError> {
    let base64 = data_url
        .split_once(";base64,")
        .map(|(_, b)| b)
        .ok_or_else(|| ImageError::Encode("неожиданный формат data-url".into()))?;
    let window = web_sys::window().ok_or_else(|| ImageError::Encode("нет window".into()))?;
    let binary = window.atob(base64).map_err(js_err)?;

    // atob отдаёт строку из кодов 0..=255, по байту на символ.
    let bytes: Vec<u8> = binary.chars().map(|c| c as u8).collect();
    let array = js_sys::Uint8Array::from(bytes.as_slice());
    let parts = js_sys::Array::of1(&array);

    let options = BlobPropertyBag::new();
    options.set_type("image/jpeg");
    Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(js_err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_image_keeps_its_dimensions() {
        assert_eq!(scaled_dimensions(800, 600), (800, 600));
        assert_eq!(scaled_dimensions(1024, 1024), (1024, 1024));
    }

    #[test]
    fn wide_image_scales_by_width() {
        assert_eq!(scaled_dimensions(2048, 1024), (1024, 512));
    }

    #[test]
    fn tall_image_scales_by_height() {
        assert_eq!(scaled_dimensions(500, 4096), (125, 1024));
    }

    #[test]
    fn narrow_strip_never_collapses_to_zero() {
        let (w, h) = scaled_dimensions(1, 100_000);
        assert_eq!(h, 1024);
        assert!(w >= 1);
    }

    #[test]
    fn zero_size_passes_through() {
        assert_eq!(scaled_dimensions(0, 0), (0, 0));
    }
}
