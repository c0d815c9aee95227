use crate::models::avatar::{AvatarStyle, GeneratedImage, PixelAvatarOptions};
use crate::services::hash::{generate_hash, hash_input};
use crate::services::initials::generate_initials_avatar;
use crate::services::pixel::generate_pixel_avatar;

/// Concrete style for a request. `Random` settles on pixel or initials from the
/// parity of the username hash, so it stays reproducible.
pub fn resolve_style(options: &PixelAvatarOptions) -> AvatarStyle {
    match options.base.style {
        AvatarStyle::Random => {
            let hash = generate_hash(&hash_input(&options.base.username, options.base.seed));
            if hash % 2 == 0 {
                AvatarStyle::Pixel
            } else {
                AvatarStyle::Initials
            }
        }
        style => style,
    }
}

pub fn generate_avatar(options: &PixelAvatarOptions) -> GeneratedImage {
    match resolve_style(options) {
        AvatarStyle::Initials => generate_initials_avatar(&options.base),
        _ => generate_pixel_avatar(options),
    }
}
