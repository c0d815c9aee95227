use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::avatar::CustomColors;
use crate::utils::error::{AppError, AppResult};

pub const MAX_USERNAME_CHARS: usize = 64;

static HEX_COLOR_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#[0-9a-fA-F]{6}$").expect("hex color regex is valid"));

pub fn is_hex_color(color: &str) -> bool {
    HEX_COLOR_REGEX.is_match(color)
}

pub fn validate_username(username: &str) -> AppResult<()> {
    if username.is_empty() {
        return Err(AppError::Validation("Username cannot be empty".to_string()));
    }

    if username.chars().count() > MAX_USERNAME_CHARS {
        return Err(AppError::Validation(format!(
            "Username must be at most {} characters long",
            MAX_USERNAME_CHARS
        )));
    }

    if username.chars().any(char::is_control) {
        return Err(AppError::Validation(
            "Username must not contain control characters".to_string(),
        ));
    }

    Ok(())
}

pub fn validate_hex_color(field: &str, color: &str) -> AppResult<()> {
    if !is_hex_color(color) {
        return Err(AppError::Validation(format!(
            "{} must be a #RRGGBB color, got {:?}",
            field, color
        )));
    }

    Ok(())
}

impl CustomColors {
    pub fn validate(&self) -> AppResult<()> {
        validate_hex_color("Skin color", &self.skin_color)?;
        validate_hex_color("Hair color", &self.hair_color)?;
        validate_hex_color("Eye color", &self.eye_color)?;
        validate_hex_color("Background color", &self.background_color)?;
        validate_hex_color("Text color", &self.text_color)?;
        Ok(())
    }
}
