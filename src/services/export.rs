use std::fs;
use std::path::{Path, PathBuf};

use crate::models::avatar::GeneratedImage;
use crate::utils::data_uri::decode_svg;
use crate::utils::error::AppResult;

pub fn download_file_name(username: &str) -> String {
    let safe: String = username
        .chars()
        .map(|c| if matches!(c, '/' | '\\') { '_' } else { c })
        .collect();
    format!("avatar-{}.svg", safe)
}

pub fn save_avatar(dir: &Path, username: &str, image: &GeneratedImage) -> AppResult<PathBuf> {
    let markup = decode_svg(image)?;

    fs::create_dir_all(dir)?;

    let file_path = dir.join(download_file_name(username));
    fs::write(&file_path, markup.as_bytes())?;

    tracing::info!(
        "Saved avatar: {} ({} bytes)",
        file_path.display(),
        markup.len()
    );

    Ok(file_path)
}
