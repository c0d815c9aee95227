use std::path::{Path, PathBuf};

use rand::Rng;

use crate::config::AvatarConfig;
use crate::models::avatar::{
    AvatarOptions, AvatarStyle, CustomColors, GeneratedImage, PixelAvatarOptions,
};
use crate::services::avatar::generate_avatar;
use crate::services::color::{
    BACKGROUND_MULTIPLIER, EYE_MULTIPLIER, HAIR_MULTIPLIER, SKIN_MULTIPLIER, color_from_hash_with,
};
use crate::services::export::save_avatar;
use crate::utils::error::{AppError, AppResult};
use crate::utils::validation::validate_username;

const RANDOM_TEXT_COLOR: &str = "#ffffff";

#[derive(Debug, Clone)]
pub struct AvatarSession {
    username: String,
    style: AvatarStyle,
    seed: u32,
    colors: CustomColors,
    colors_active: bool,
    size: u32,
    export_dir: PathBuf,
}

impl Default for AvatarSession {
    fn default() -> Self {
        Self::with_config(&AvatarConfig::default())
    }
}

impl AvatarSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: &AvatarConfig) -> Self {
        Self {
            username: String::new(),
            style: AvatarStyle::Pixel,
            seed: 0,
            colors: CustomColors::default(),
            colors_active: true,
            size: config.default_size,
            export_dir: config.export_dir.clone(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn style(&self) -> AvatarStyle {
        self.style
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn colors(&self) -> &CustomColors {
        &self.colors
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn colors_active(&self) -> bool {
        self.colors_active
    }

    // empty means "nothing to render"
    pub fn set_username(&mut self, username: impl Into<String>) -> AppResult<()> {
        let username = username.into();

        if !username.is_empty() {
            if let Err(e) = validate_username(&username) {
                tracing::warn!("Rejected username: {}", e);
                return Err(e);
            }
        }

        self.username = username;
        Ok(())
    }

    pub fn set_style(&mut self, style: AvatarStyle) {
        self.style = style;
    }

    pub fn set_size(&mut self, size: u32) -> AppResult<()> {
        if size == 0 {
            return Err(AppError::Validation(
                "Avatar size must be positive".to_string(),
            ));
        }

        self.size = size;
        Ok(())
    }

    pub fn set_colors(&mut self, colors: CustomColors) -> AppResult<()> {
        if let Err(e) = colors.validate() {
            tracing::warn!("Rejected colors: {}", e);
            return Err(e);
        }

        self.colors = colors;
        self.colors_active = true;
        Ok(())
    }

    /// Bumps the seed and hands every colour slot back to the hash, so the
    /// next render differs. Setting or randomizing colours brings the
    /// overrides back.
    pub fn regenerate(&mut self) {
        self.seed = self.seed.wrapping_add(1);
        self.colors_active = false;
        tracing::debug!("Seed advanced to {}", self.seed);
    }

    pub fn randomize_colors<R: Rng>(&mut self, rng: &mut R) {
        let hash = u64::from(rng.gen_range(0..=(1u32 << 31)));
        self.colors = randomized_colors(hash);
        self.colors_active = true;
        tracing::debug!("Randomized colors: {:?}", self.colors);
    }

    pub fn options(&self) -> PixelAvatarOptions {
        let slot = |color: &String| self.colors_active.then(|| color.clone());

        let base = AvatarOptions {
            username: self.username.clone(),
            style: self.style,
            size: self.size,
            background_color: slot(&self.colors.background_color),
            text_color: slot(&self.colors.text_color),
            seed: Some(self.seed),
        };

        PixelAvatarOptions {
            base,
            skin_color: slot(&self.colors.skin_color),
            hair_color: slot(&self.colors.hair_color),
            eye_color: slot(&self.colors.eye_color),
        }
    }

    pub fn render(&self) -> Option<GeneratedImage> {
        if self.username.is_empty() {
            return None;
        }

        Some(generate_avatar(&self.options()))
    }

    pub fn download(&self) -> AppResult<PathBuf> {
        self.download_to(&self.export_dir)
    }

    pub fn download_to(&self, dir: &Path) -> AppResult<PathBuf> {
        let image = self.render().ok_or_else(|| {
            AppError::Validation("Enter a username before downloading".to_string())
        })?;

        save_avatar(dir, &self.username, &image)
    }
}

pub fn randomized_colors(hash: u64) -> CustomColors {
    CustomColors {
        skin_color: color_from_hash_with(hash, SKIN_MULTIPLIER),
        hair_color: color_from_hash_with(hash, HAIR_MULTIPLIER),
        eye_color: color_from_hash_with(hash, EYE_MULTIPLIER),
        background_color: color_from_hash_with(hash, BACKGROUND_MULTIPLIER),
        text_color: RANDOM_TEXT_COLOR.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::data_uri::decode_svg;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_empty_username_renders_nothing() {
        let session = AvatarSession::new();
        assert!(session.render().is_none());
        assert!(matches!(
            session.download_to(Path::new("unused")),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_render_uses_custom_colors() {
        let mut session = AvatarSession::new();
        session.set_username("abc").unwrap();

        let markup = decode_svg(&session.render().unwrap()).unwrap();
        assert!(markup.contains(r##"fill="#ffdbac""##));
        assert!(markup.contains(r##"fill="#4a4a4a""##));

        session.set_style(AvatarStyle::Initials);
        let markup = decode_svg(&session.render().unwrap()).unwrap();
        assert!(markup.contains(r##"<rect width="100%" height="100%" fill="#4a90e2"/>"##));
        assert!(markup.contains(">A</text>"));
    }

    #[test]
    fn test_seed_flows_into_options() {
        let mut session = AvatarSession::new();
        session.set_username("gamer").unwrap();
        assert_eq!(session.options().base.seed, Some(0));

        session.regenerate();
        session.regenerate();
        assert_eq!(session.seed(), 2);
        assert_eq!(session.options().base.seed, Some(2));
    }

    #[test]
    fn test_regenerate_changes_random_style_input() {
        let mut session = AvatarSession::new();
        session.set_username("gamer").unwrap();
        session.set_style(AvatarStyle::Random);

        let before = session.options();
        session.regenerate();
        let after = session.options();
        assert_ne!(before, after);
        assert_eq!(before.base.username, after.base.username);
    }

    #[test]
    fn test_regenerate_changes_rendered_output() {
        for style in [AvatarStyle::Pixel, AvatarStyle::Initials, AvatarStyle::Random] {
            let mut session = AvatarSession::new();
            session.set_username("gamer").unwrap();
            session.set_style(style);

            let first = session.render().unwrap();
            session.regenerate();
            let second = session.render().unwrap();
            session.regenerate();
            let third = session.render().unwrap();

            assert_ne!(first, second, "{} did not change on regenerate", style);
            assert_ne!(second, third, "{} did not change on regenerate", style);
        }
    }

    #[test]
    fn test_regenerate_hands_colors_to_hash() {
        let mut session = AvatarSession::new();
        session.set_username("gamer").unwrap();
        session.regenerate();
        assert!(!session.colors_active());

        let options = session.options();
        assert!(options.skin_color.is_none());
        assert!(options.base.background_color.is_none());

        let palette = crate::services::pixel::derive_pixel_palette(&options);
        assert_eq!(palette.skin, "#cd79d7");
        assert_eq!(palette.hair, "#cdaa10");

        session.set_style(AvatarStyle::Initials);
        let markup = decode_svg(&session.render().unwrap()).unwrap();
        assert!(markup.contains(r##"<rect width="100%" height="100%" fill="#cd79d7"/>"##));
        assert!(markup.contains(">G</text>"));
    }

    #[test]
    fn test_setting_colors_after_regenerate_restores_overrides() {
        let mut session = AvatarSession::new();
        session.set_username("gamer").unwrap();
        session.regenerate();

        session.set_colors(CustomColors::default()).unwrap();
        assert!(session.colors_active());
        let markup = decode_svg(&session.render().unwrap()).unwrap();
        assert!(markup.contains(r##"fill="#ffdbac""##));

        session.regenerate();
        session.randomize_colors(&mut StdRng::seed_from_u64(3));
        assert_eq!(session.options().skin_color.as_ref(), Some(&session.colors().skin_color));
    }

    #[test]
    fn test_render_is_repeatable() {
        let mut session = AvatarSession::new();
        session.set_username("john doe").unwrap();
        assert_eq!(session.render(), session.render());
    }

    #[test]
    fn test_randomize_colors_is_seeded_by_rng() {
        let mut first = AvatarSession::new();
        let mut second = AvatarSession::new();
        first.randomize_colors(&mut StdRng::seed_from_u64(7));
        second.randomize_colors(&mut StdRng::seed_from_u64(7));
        assert_eq!(first.colors(), second.colors());
        assert!(first.colors().validate().is_ok());
        assert_eq!(first.colors().text_color, "#ffffff");
    }

    #[test]
    fn test_randomized_colors_multipliers() {
        let colors = randomized_colors(97);
        assert_eq!(colors.skin_color, "#124599");
        assert_eq!(colors.hair_color, color_from_hash_with(97, 54321));
        assert_eq!(colors.eye_color, color_from_hash_with(97, 98765));
        assert_eq!(colors.background_color, color_from_hash_with(97, 11111));
    }

    #[test]
    fn test_invalid_input_is_rejected_without_change() {
        let mut session = AvatarSession::new();
        session.set_username("keeper").unwrap();

        assert!(session.set_username("bad\tname").is_err());
        assert_eq!(session.username(), "keeper");

        let bad = CustomColors {
            hair_color: "red".to_string(),
            ..CustomColors::default()
        };
        assert!(session.set_colors(bad).is_err());
        assert_eq!(session.colors(), &CustomColors::default());

        assert!(session.set_size(0).is_err());
        assert_eq!(session.size(), 128);
    }

    #[test]
    fn test_config_sets_size_and_export_dir() {
        let dir = std::env::temp_dir().join(format!("pixatar-session-{}", std::process::id()));
        let config = AvatarConfig {
            default_size: 64,
            export_dir: dir.clone(),
            ..AvatarConfig::default()
        };

        let mut session = AvatarSession::with_config(&config);
        session.set_username("gamer1").unwrap();
        assert_eq!(session.options().base.size, 64);

        let path = session.download().unwrap();
        assert_eq!(path, dir.join("avatar-gamer1.svg"));
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains(r#"viewBox="0 0 64 64""#));

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
