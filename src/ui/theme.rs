//! Design System Theme Constants
//!
//! Centralized theme definitions for the player surface.
//! All colors, spacing, and sizing should be defined here.
//!
//! # Color Philosophy
//! - Near-black player background with translucent cards
//! - Violet primary blending into a pink accent for the hero elements
//!   (title, play button)
//! - Muted grays for secondary metadata
//!
//! # Usage
//! ```rust
//! use crate::ui::theme;
//!
//! let bg = theme::color::BACKGROUND;
//! let padding = theme::spacing::XL;
//! ```

use iced::Color;

// =============================================================================
// COLORS
// =============================================================================

pub mod color {
    use super::*;

    /// Player background
    /// Hex: #0c0a12
    pub const BACKGROUND: Color = Color::from_rgb(
        0x0c as f32 / 255.0,
        0x0a as f32 / 255.0,
        0x12 as f32 / 255.0,
    );

    /// Up Next cards (drawn at 50% alpha, 80% on hover)
    /// Hex: #1c1826
    pub const CARD: Color = Color::from_rgb(
        0x1c as f32 / 255.0,
        0x18 as f32 / 255.0,
        0x26 as f32 / 255.0,
    );

    /// Borders and dividers (drawn at 20% alpha)
    /// Hex: #3f3a4d
    pub const BORDER: Color = Color::from_rgb(
        0x3f as f32 / 255.0,
        0x3a as f32 / 255.0,
        0x4d as f32 / 255.0,
    );

    /// Primary text
    /// Hex: #f5f3ff
    pub const FOREGROUND: Color = Color::from_rgb(
        0xf5 as f32 / 255.0,
        0xf3 as f32 / 255.0,
        0xff as f32 / 255.0,
    );

    /// Artist, album, timestamps
    /// Hex: #a1a1b5
    pub const MUTED: Color = Color::from_rgb(
        0xa1 as f32 / 255.0,
        0xa1 as f32 / 255.0,
        0xb5 as f32 / 255.0,
    );

    /// Primary accent
    /// Hex: #8b5cf6
    pub const PRIMARY: Color = Color::from_rgb(
        0x8b as f32 / 255.0,
        0x5c as f32 / 255.0,
        0xf6 as f32 / 255.0,
    );

    /// Secondary accent, end of the hero gradient
    /// Hex: #ec4899
    pub const ACCENT: Color = Color::from_rgb(
        0xec as f32 / 255.0,
        0x48 as f32 / 255.0,
        0x99 as f32 / 255.0,
    );

    /// Create a color with alpha transparency
    pub const fn with_alpha(color: Color, alpha: f32) -> Color {
        Color {
            r: color.r,
            g: color.g,
            b: color.b,
            a: alpha,
        }
    }

    /// Slightly lighten a color for hover states
    pub fn lighten(color: Color, amount: f32) -> Color {
        Color {
            r: (color.r + amount).min(1.0),
            g: (color.g + amount).min(1.0),
            b: (color.b + amount).min(1.0),
            a: color.a,
        }
    }

    /// Linear blend between two colors, `t` in 0.0..=1.0
    pub fn mix(a: Color, b: Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        Color {
            r: a.r + (b.r - a.r) * t,
            g: a.g + (b.g - a.g) * t,
            b: a.b + (b.b - a.b) * t,
            a: a.a + (b.a - a.a) * t,
        }
    }
}

// =============================================================================
// SPACING
// =============================================================================

pub mod spacing {
    /// Icon gaps
    pub const XS: u16 = 4;

    /// Text line groups
    pub const SM: u16 = 8;

    /// Between Up Next cards
    pub const MD: u16 = 12;

    /// Card padding, action button gap
    pub const LG: u16 = 16;

    /// Main transport gap, section heading margin
    pub const XL: u16 = 24;

    /// Page padding, between player sections
    pub const XXL: u16 = 32;
}

// =============================================================================
// LAYOUT DIMENSIONS
// =============================================================================

pub mod layout {
    /// Main artwork width (3:4 portrait)
    pub const ARTWORK_WIDTH: f32 = 320.0;

    /// Main artwork height
    pub const ARTWORK_HEIGHT: f32 = 384.0;

    /// Main artwork width on wide windows
    pub const ARTWORK_WIDTH_WIDE: f32 = 384.0;

    /// Main artwork height on wide windows
    pub const ARTWORK_HEIGHT_WIDE: f32 = 480.0;

    /// Viewport width at which the larger artwork and title kick in
    pub const WIDE_BREAKPOINT: f32 = 1024.0;

    /// Size class of the window, picked from its logical width.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Breakpoint {
        Compact,
        Wide,
    }

    impl Breakpoint {
        pub fn from_width(width: f32) -> Self {
            if width >= WIDE_BREAKPOINT {
                Breakpoint::Wide
            } else {
                Breakpoint::Compact
            }
        }

        /// Main artwork size for this breakpoint.
        pub const fn artwork_size(self) -> (f32, f32) {
            match self {
                Breakpoint::Compact => (ARTWORK_WIDTH, ARTWORK_HEIGHT),
                Breakpoint::Wide => (ARTWORK_WIDTH_WIDE, ARTWORK_HEIGHT_WIDE),
            }
        }

        /// Current song title size for this breakpoint.
        pub const fn hero_text_size(self) -> u16 {
            match self {
                Breakpoint::Compact => super::typography::SIZE_HERO,
                Breakpoint::Wide => super::typography::SIZE_HERO_WIDE,
            }
        }
    }

    /// Up Next thumbnail edge
    pub const THUMBNAIL_SIZE: f32 = 48.0;

    /// Max width of the info/controls column
    pub const CONTROLS_MAX_WIDTH: f32 = 448.0;

    /// Play/pause button diameter
    pub const PLAY_BUTTON_SIZE: f32 = 64.0;

    /// Small round action buttons (like, more)
    pub const ACTION_BUTTON_SIZE: f32 = 36.0;
}

// =============================================================================
// TYPOGRAPHY
// =============================================================================

pub mod typography {
    /// Current song title
    pub const SIZE_HERO: u16 = 30;

    /// Current song title on wide windows
    pub const SIZE_HERO_WIDE: u16 = 36;

    /// "Up Next" heading
    pub const SIZE_TITLE: u16 = 24;

    /// Artist line
    pub const SIZE_LARGE: u16 = 18;

    /// Album line, card titles
    pub const SIZE_BODY: u16 = 16;

    /// Timestamps, card artist
    pub const SIZE_SMALL: u16 = 14;

    /// Play/pause glyph
    pub const ICON_LARGE: u16 = 28;

    /// Skip glyphs
    pub const ICON_MEDIUM: u16 = 22;

    /// Shuffle, repeat, like, more, volume glyphs
    pub const ICON_SMALL: u16 = 18;
}

// =============================================================================
// BORDER RADIUS
// =============================================================================

pub mod radius {
    /// Thumbnails
    pub const MD: f32 = 8.0;

    /// Up Next cards
    pub const LG: f32 = 12.0;

    /// Main artwork
    pub const XL: f32 = 24.0;

    /// Round buttons
    pub const PILL: f32 = 9999.0;
}

// =============================================================================
// CONTAINER STYLE HELPERS
// =============================================================================

use iced::widget::container;
use iced::{Background, Border, Gradient, Radians, gradient};

/// Create a standard container style with the given background color
pub fn container_style(bg: Color) -> container::Style {
    container::Style {
        background: Some(Background::Color(bg)),
        border: Border::default(),
        ..Default::default()
    }
}

/// Primary-to-accent gradient at the given angle
pub fn hero_gradient(angle: Radians) -> Background {
    Background::Gradient(Gradient::Linear(
        gradient::Linear::new(angle)
            .add_stop(0.0, color::PRIMARY)
            .add_stop(1.0, color::ACCENT),
    ))
}

/// Main artwork frame: hero gradient with large radius
pub fn artwork_frame(_theme: &iced::Theme) -> container::Style {
    container::Style {
        background: Some(hero_gradient(Radians(std::f32::consts::FRAC_PI_4))),
        border: Border {
            radius: radius::XL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Bottom-up dark scrim laid over the main artwork
pub fn artwork_scrim(_theme: &iced::Theme) -> container::Style {
    container::Style {
        background: Some(Background::Gradient(Gradient::Linear(
            gradient::Linear::new(Radians(0.0))
                .add_stop(0.0, color::with_alpha(Color::BLACK, 0.6))
                .add_stop(0.5, Color::TRANSPARENT)
                .add_stop(1.0, Color::TRANSPARENT),
        ))),
        border: Border {
            radius: radius::XL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Thumbnail frame for Up Next cards
pub fn thumbnail_frame(_theme: &iced::Theme) -> container::Style {
    container::Style {
        background: Some(hero_gradient(Radians(std::f32::consts::FRAC_PI_4))),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Divider above the Up Next section
pub fn divider_style(_theme: &iced::Theme) -> container::Style {
    container_style(color::with_alpha(color::BORDER, 0.2))
}

/// Small bordered card behind control tooltips
pub fn tooltip_style(_theme: &iced::Theme) -> container::Style {
    container::Style {
        text_color: Some(color::FOREGROUND),
        border: Border {
            color: color::with_alpha(color::BORDER, 0.6),
            width: 1.0,
            radius: radius::MD.into(),
        },
        ..container_style(color::CARD)
    }
}

/// Page background
pub fn page_style(_theme: &iced::Theme) -> container::Style {
    container::Style {
        text_color: Some(color::FOREGROUND),
        ..container_style(color::BACKGROUND)
    }
}

// =============================================================================
// BUTTON STYLE HELPERS
// =============================================================================

use iced::Theme;
use iced::widget::button;

/// Filled round button (liked state, "default" variant)
pub fn button_filled(_theme: &Theme, status: button::Status) -> button::Style {
    let bg = match status {
        button::Status::Active | button::Status::Disabled => color::PRIMARY,
        button::Status::Hovered => color::lighten(color::PRIMARY, 0.08),
        button::Status::Pressed => color::mix(color::PRIMARY, color::ACCENT, 0.5),
    };

    button::Style {
        background: Some(Background::Color(bg)),
        text_color: color::FOREGROUND,
        border: Border {
            radius: radius::PILL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Outlined round button (unliked state, "more")
pub fn button_outline(_theme: &Theme, status: button::Status) -> button::Style {
    let (bg, text) = match status {
        button::Status::Active | button::Status::Disabled => (Color::TRANSPARENT, color::MUTED),
        button::Status::Hovered => (color::with_alpha(color::CARD, 0.8), color::FOREGROUND),
        button::Status::Pressed => (color::CARD, color::FOREGROUND),
    };

    button::Style {
        background: Some(Background::Color(bg)),
        text_color: text,
        border: Border {
            color: color::BORDER,
            width: 1.0,
            radius: radius::PILL.into(),
        },
        ..Default::default()
    }
}

/// Ghost round button (shuffle, skip, repeat)
pub fn button_ghost(_theme: &Theme, status: button::Status) -> button::Style {
    let (bg, text) = match status {
        button::Status::Active | button::Status::Disabled => (Color::TRANSPARENT, color::MUTED),
        button::Status::Hovered => (color::with_alpha(color::CARD, 0.8), color::FOREGROUND),
        button::Status::Pressed => (color::CARD, color::FOREGROUND),
    };

    button::Style {
        background: Some(Background::Color(bg)),
        text_color: text,
        border: Border {
            radius: radius::PILL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Large gradient play/pause button
pub fn button_play(_theme: &Theme, status: button::Status) -> button::Style {
    let shadow = match status {
        button::Status::Hovered | button::Status::Pressed => iced::Shadow {
            color: color::with_alpha(color::ACCENT, 0.45),
            offset: iced::Vector::new(0.0, 4.0),
            blur_radius: 16.0,
        },
        _ => iced::Shadow::default(),
    };

    button::Style {
        background: Some(hero_gradient(Radians(std::f32::consts::FRAC_PI_2))),
        text_color: color::FOREGROUND,
        border: Border {
            radius: radius::PILL.into(),
            ..Default::default()
        },
        shadow,
    }
}

/// Up Next card: translucent surface that brightens on hover
pub fn button_card(_theme: &Theme, status: button::Status) -> button::Style {
    let (alpha, text) = match status {
        button::Status::Active | button::Status::Disabled => (0.5, color::FOREGROUND),
        button::Status::Hovered | button::Status::Pressed => (0.8, color::PRIMARY),
    };

    button::Style {
        background: Some(Background::Color(color::with_alpha(color::CARD, alpha))),
        text_color: text,
        border: Border {
            color: color::with_alpha(color::BORDER, 0.2),
            width: 1.0,
            radius: radius::LG.into(),
        },
        ..Default::default()
    }
}

// =============================================================================
// SLIDER STYLE HELPERS
// =============================================================================

use iced::widget::slider;
use iced::widget::slider::{Handle, HandleShape, Rail as SliderRail};

/// Standard slider style (progress, volume)
pub fn slider_style(_theme: &Theme, status: slider::Status) -> slider::Style {
    let (rail_fill, handle_color) = match status {
        slider::Status::Active => (color::PRIMARY, color::FOREGROUND),
        slider::Status::Hovered => (color::lighten(color::PRIMARY, 0.08), color::FOREGROUND),
        slider::Status::Dragged => (color::ACCENT, color::FOREGROUND),
    };

    slider::Style {
        rail: SliderRail {
            backgrounds: (
                Background::Color(rail_fill),
                Background::Color(color::with_alpha(color::BORDER, 0.6)),
            ),
            width: 4.0,
            border: Border {
                radius: 2.0.into(),
                ..Default::default()
            },
        },
        handle: Handle {
            shape: HandleShape::Circle { radius: 7.0 },
            background: Background::Color(handle_color),
            border_width: 2.0,
            border_color: color::PRIMARY,
        },
    }
}
