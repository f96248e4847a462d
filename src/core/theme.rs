//! # Themes
//!
//! A `Theme` is a plain value: a color table plus a typography scale. Views
//! receive it as a parameter. The only global is *which* theme is active,
//! exposed through `active_theme()` / `set_active_theme()` / `toggle_theme()`.
//!
//! Colors are `#RRGGBB` strings so the core stays free of any UI crate.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU8, Ordering};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeKind {
    #[default]
    Light,
    Dark,
}

impl ThemeKind {
    pub fn toggled(self) -> Self {
        match self {
            ThemeKind::Light => ThemeKind::Dark,
            ThemeKind::Dark => ThemeKind::Light,
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Some(ThemeKind::Light),
            "dark" => Some(ThemeKind::Dark),
            _ => None,
        }
    }
}

impl fmt::Display for ThemeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeKind::Light => f.write_str("light"),
            ThemeKind::Dark => f.write_str("dark"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub primary: &'static str,
    pub text_primary: &'static str,
    pub text_secondary: &'static str,
    /// Greeting line on the home screen.
    pub accent: &'static str,
    pub accent_secondary: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub body_text: &'static str,
    pub button_text: &'static str,
    pub input_background: &'static str,
    pub placeholder: &'static str,
    pub on_card: &'static str,
    /// Call-to-action buttons (same in both themes).
    pub highlight: &'static str,
    pub error: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStyle {
    pub font_family: &'static str,
    pub font_size: u16,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typography {
    pub title: TextStyle,
    pub subtitle: TextStyle,
    pub body: TextStyle,
    pub small_text: TextStyle,
    pub input: TextStyle,
}

const TYPOGRAPHY: Typography = Typography {
    title: TextStyle {
        font_family: "Montserrat-SemiBold",
        font_size: 25,
    },
    subtitle: TextStyle {
        font_family: "Montserrat-Medium",
        font_size: 18,
    },
    body: TextStyle {
        font_family: "Montserrat-Regular",
        font_size: 16,
    },
    small_text: TextStyle {
        font_family: "Montserrat-Light",
        font_size: 14,
    },
    input: TextStyle {
        font_family: "Montserrat-Regular",
        font_size: 16,
    },
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub kind: ThemeKind,
    pub colors: Palette,
    pub typography: Typography,
}

static LIGHT: Theme = Theme {
    kind: ThemeKind::Light,
    colors: Palette {
        background: "#EDEFF5",
        primary: "#92BB00",
        text_primary: "#364356",
        text_secondary: "#636D77",
        accent: "#1062E7",
        accent_secondary: "#0B49AA",
        title: "#364356",
        subtitle: "#636D77",
        body_text: "#49515A",
        button_text: "#FFFFFF",
        input_background: "#FFFFFF",
        placeholder: "#828A89",
        on_card: "#FFFFFF",
        highlight: "#DAFF56",
        error: "#FF4D4D",
    },
    typography: TYPOGRAPHY,
};

// The dark table never defined the two accent colors; the light ones are reused.
static DARK: Theme = Theme {
    kind: ThemeKind::Dark,
    colors: Palette {
        background: "#090C0B",
        primary: "#F64D4B",
        text_primary: "#FFFFFF",
        text_secondary: "#7E848D",
        accent: "#1062E7",
        accent_secondary: "#0B49AA",
        title: "#FFFFFF",
        subtitle: "#7E848D",
        body_text: "#A1A1A1",
        button_text: "#FFFFFF",
        input_background: "#1B201E",
        placeholder: "#828A89",
        on_card: "#1B201E",
        highlight: "#DAFF56",
        error: "#FF4D4D",
    },
    typography: TYPOGRAPHY,
};

impl Theme {
    pub fn light() -> &'static Theme {
        &LIGHT
    }

    pub fn dark() -> &'static Theme {
        &DARK
    }

    pub fn of(kind: ThemeKind) -> &'static Theme {
        match kind {
            ThemeKind::Light => &LIGHT,
            ThemeKind::Dark => &DARK,
        }
    }
}

// ============================================================================
// Process-wide selection
// ============================================================================

const LIGHT_TAG: u8 = 0;
const DARK_TAG: u8 = 1;

static ACTIVE: AtomicU8 = AtomicU8::new(LIGHT_TAG);

pub fn active_kind() -> ThemeKind {
    match ACTIVE.load(Ordering::Relaxed) {
        DARK_TAG => ThemeKind::Dark,
        _ => ThemeKind::Light,
    }
}

pub fn active_theme() -> &'static Theme {
    Theme::of(active_kind())
}

pub fn set_active_theme(kind: ThemeKind) {
    let tag = match kind {
        ThemeKind::Light => LIGHT_TAG,
        ThemeKind::Dark => DARK_TAG,
    };
    ACTIVE.store(tag, Ordering::Relaxed);
}

/// Flips the active theme and returns the new one.
pub fn toggle_theme() -> ThemeKind {
    let next = active_kind().toggled();
    set_active_theme(next);
    next
}
