pub mod config;
pub mod models;
pub mod services;
pub mod telemetry;
pub mod utils;

pub use models::avatar::{
    AvatarOptions, AvatarStyle, CustomColors, GeneratedImage, PixelAvatarOptions,
};
pub use services::avatar::generate_avatar;
pub use services::color::color_from_hash;
pub use services::hash::generate_hash;
pub use services::initials::{extract_initials, generate_initials_avatar};
pub use services::pixel::generate_pixel_avatar;
pub use services::session::AvatarSession;
pub use utils::error::{AppError, AppResult};
