pub const COLOR_MULTIPLIER: u64 = 12345;

pub const SKIN_MULTIPLIER: u64 = COLOR_MULTIPLIER;
pub const HAIR_MULTIPLIER: u64 = 54321;
pub const EYE_MULTIPLIER: u64 = 98765;
pub const BACKGROUND_MULTIPLIER: u64 = 11111;

const RGB_MASK: u64 = 0xFF_FFFF;

/// Maps a hash onto a `#rrggbb` colour. Lossy; only determinism and valid
/// syntax are promised.
pub fn color_from_hash(hash: u64) -> String {
    color_from_hash_with(hash, COLOR_MULTIPLIER)
}

pub fn color_from_hash_with(hash: u64, multiplier: u64) -> String {
    format!("#{:06x}", hash.wrapping_mul(multiplier) & RGB_MASK)
}

pub fn resolve_color(explicit: Option<&str>, derive: impl FnOnce() -> String) -> String {
    match explicit {
        Some(color) => color.to_string(),
        None => derive(),
    }
}
