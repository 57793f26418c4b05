use serde::{Deserialize, Serialize};

pub const MIN_FONT_SIZE: u8 = 12;
pub const MAX_FONT_SIZE: u8 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    Auto,
}

impl ThemeMode {
    /// The string stored in the session store for this theme.
    pub fn storage_key(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Auto => "auto",
        }
    }

    /// Parse the stored string form. Unknown strings are a read failure,
    /// handled by the caller with a fallback to the default.
    pub fn from_storage_key(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            "auto" => Some(Self::Auto),
            _ => None,
        }
    }

    /// Get the display name for this theme
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
            Self::Auto => "Auto",
        }
    }

    /// The theme that follows this one in the toggle cycle.
    pub fn next(&self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Auto,
            Self::Auto => Self::Light,
        }
    }

    /// Get all available themes
    pub fn all() -> &'static [ThemeMode] {
        &[Self::Light, Self::Dark, Self::Auto]
    }
}

/// Display and persistence preferences for the editor.
///
/// `theme` and `font_size` are written to the session store as soon as they
/// change; `auto_save` only gates whether buffer content is persisted and is
/// itself session-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorSettings {
    #[serde(default)]
    pub theme: ThemeMode,

    #[serde(default = "default_font_size")]
    pub font_size: u8,

    #[serde(default = "default_line_numbers")]
    pub show_line_numbers: bool,

    #[serde(default = "default_word_wrap")]
    pub word_wrap: bool,

    #[serde(default = "default_auto_save")]
    pub auto_save: bool,
}

fn default_font_size() -> u8 {
    14
}

fn default_line_numbers() -> bool {
    true
}

fn default_word_wrap() -> bool {
    true
}

fn default_auto_save() -> bool {
    true
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            theme: ThemeMode::default(),
            font_size: default_font_size(),
            show_line_numbers: default_line_numbers(),
            word_wrap: default_word_wrap(),
            auto_save: default_auto_save(),
        }
    }
}

/// Clamp a requested font size into the supported range.
pub fn clamp_font_size(size: u8) -> u8 {
    size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE)
}
