use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_SIZE: u32 = 128;

fn default_size() -> u32 {
    DEFAULT_SIZE
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AvatarStyle {
    #[default]
    Pixel,
    Initials,
    Random,
}

impl AvatarStyle {
    pub fn as_str(&self) -> &str {
        match self {
            AvatarStyle::Pixel => "pixel",
            AvatarStyle::Initials => "initials",
            AvatarStyle::Random => "random",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pixel" => Some(AvatarStyle::Pixel),
            "initials" => Some(AvatarStyle::Initials),
            "random" => Some(AvatarStyle::Random),
            _ => None,
        }
    }
}

impl fmt::Display for AvatarStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Colour fields are copied verbatim into the markup; a `None` slot is derived
/// from the username hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvatarOptions {
    pub username: String,
    #[serde(default)]
    pub style: AvatarStyle,
    #[serde(default = "default_size")]
    pub size: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    /// Appended to the username before hashing. Changing it yields a new
    /// avatar for the same name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u32>,
}

impl AvatarOptions {
    pub fn new(username: impl Into<String>, style: AvatarStyle) -> Self {
        Self {
            username: username.into(),
            style,
            size: DEFAULT_SIZE,
            background_color: None,
            text_color: None,
            seed: None,
        }
    }

    pub fn with_size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    pub fn with_background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    pub fn with_text_color(mut self, color: impl Into<String>) -> Self {
        self.text_color = Some(color.into());
        self
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = Some(seed);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PixelAvatarOptions {
    #[serde(flatten)]
    pub base: AvatarOptions,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skin_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hair_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eye_color: Option<String>,
}

impl PixelAvatarOptions {
    pub fn new(username: impl Into<String>) -> Self {
        AvatarOptions::new(username, AvatarStyle::Pixel).into()
    }

    pub fn with_size(mut self, size: u32) -> Self {
        self.base.size = size;
        self
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.base.seed = Some(seed);
        self
    }

    pub fn with_skin_color(mut self, color: impl Into<String>) -> Self {
        self.skin_color = Some(color.into());
        self
    }

    pub fn with_hair_color(mut self, color: impl Into<String>) -> Self {
        self.hair_color = Some(color.into());
        self
    }

    pub fn with_eye_color(mut self, color: impl Into<String>) -> Self {
        self.eye_color = Some(color.into());
        self
    }
}

impl From<AvatarOptions> for PixelAvatarOptions {
    fn from(base: AvatarOptions) -> Self {
        Self {
            base,
            skin_color: None,
            hair_color: None,
            eye_color: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomColors {
    pub skin_color: String,
    pub hair_color: String,
    pub eye_color: String,
    pub background_color: String,
    pub text_color: String,
}

impl Default for CustomColors {
    fn default() -> Self {
        Self {
            skin_color: "#ffdbac".to_string(),
            hair_color: "#4a4a4a".to_string(),
            eye_color: "#000000".to_string(),
            background_color: "#4a90e2".to_string(),
            text_color: "#ffffff".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GeneratedImage(String);

impl GeneratedImage {
    pub(crate) fn from_data_uri(uri: String) -> Self {
        Self(uri)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for GeneratedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for GeneratedImage {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
