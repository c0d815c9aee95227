use base64::{Engine as _, engine::general_purpose::STANDARD};
use once_cell::sync::Lazy;

use crate::models::avatar::GeneratedImage;
use crate::utils::error::{AppError, AppResult};

static SVG_PREFIX: Lazy<String> = Lazy::new(|| format!("data:{};base64,", mime::IMAGE_SVG));

pub fn svg_prefix() -> &'static str {
    SVG_PREFIX.as_str()
}

pub fn encode_svg(markup: &str) -> GeneratedImage {
    GeneratedImage::from_data_uri(format!("{}{}", svg_prefix(), STANDARD.encode(markup)))
}

pub fn decode_svg(image: &GeneratedImage) -> AppResult<String> {
    let payload = image.as_str().strip_prefix(svg_prefix()).ok_or_else(|| {
        AppError::InvalidDataUri("Expected an image/svg+xml base64 data URI".to_string())
    })?;

    let bytes = STANDARD.decode(payload)?;

    String::from_utf8(bytes)
        .map_err(|e| AppError::InvalidDataUri(format!("SVG payload is not UTF-8: {}", e)))
}
