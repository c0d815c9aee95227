pub mod avatar;
pub mod color;
pub mod export;
pub mod hash;
pub mod initials;
pub mod pixel;
pub mod session;
