use crate::models::avatar::{AvatarOptions, GeneratedImage};
use crate::services::color::{color_from_hash, resolve_color};
use crate::services::hash::{generate_hash, hash_input};
use crate::utils::data_uri::encode_svg;
use crate::utils::svg::SvgCanvas;

pub const DEFAULT_TEXT_COLOR: &str = "#FFFFFF";
const MAX_INITIALS: usize = 2;

pub fn extract_initials(username: &str) -> String {
    username
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect::<String>()
        .to_uppercase()
        .chars()
        .take(MAX_INITIALS)
        .collect()
}

pub fn generate_initials_avatar(options: &AvatarOptions) -> GeneratedImage {
    let initials = extract_initials(&options.username);
    let hash = generate_hash(&hash_input(&options.username, options.seed));

    let background = resolve_color(options.background_color.as_deref(), || {
        color_from_hash(u64::from(hash))
    });
    let text = resolve_color(options.text_color.as_deref(), || {
        DEFAULT_TEXT_COLOR.to_string()
    });

    tracing::debug!(
        "Generating initials avatar: initials={:?}, hash={}, size={}",
        initials,
        hash,
        options.size
    );

    let mut canvas = SvgCanvas::new(options.size);
    canvas
        .fill(&background)
        .centered_text(&initials, f64::from(options.size) / 2.0, &text);

    encode_svg(&canvas.finish())
}
