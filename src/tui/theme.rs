//! Color themes for the terminal demo

use ratatui::style::Color;

use crate::config::TuiTheme;

/// Colors the demo draws with, by role
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    pub surface: Color, // Footer and popups
    pub border: Color,  // Inactive cell borders
    pub text: Color,
    pub muted: Color, // Details, hints, empty slots
    pub focus: Color, // Focused cell and current tab
    pub accent: Color,
    pub good: Color,
    pub warn: Color,
    pub bad: Color,
}

pub const DUSK: Theme = Theme {
    name: "Dusk",
    background: Color::Rgb(24, 22, 36),
    surface: Color::Rgb(38, 35, 56),
    border: Color::Rgb(72, 66, 102),
    text: Color::Rgb(222, 218, 240),
    muted: Color::Rgb(150, 144, 178),
    focus: Color::Rgb(246, 196, 120),
    accent: Color::Rgb(176, 150, 240),
    good: Color::Rgb(142, 214, 160),
    warn: Color::Rgb(240, 214, 130),
    bad: Color::Rgb(236, 120, 140),
};

pub const PARCHMENT: Theme = Theme {
    name: "Parchment",
    background: Color::Rgb(244, 236, 214),
    surface: Color::Rgb(230, 218, 190),
    border: Color::Rgb(184, 166, 130),
    text: Color::Rgb(62, 48, 32),
    muted: Color::Rgb(124, 106, 80),
    focus: Color::Rgb(160, 60, 30),
    accent: Color::Rgb(70, 96, 140),
    good: Color::Rgb(64, 120, 64),
    warn: Color::Rgb(176, 120, 20),
    bad: Color::Rgb(168, 40, 40),
};

pub const MOSS: Theme = Theme {
    name: "Moss",
    background: Color::Rgb(22, 30, 24),
    surface: Color::Rgb(34, 46, 36),
    border: Color::Rgb(62, 84, 64),
    text: Color::Rgb(212, 228, 206),
    muted: Color::Rgb(138, 162, 134),
    focus: Color::Rgb(190, 230, 110),
    accent: Color::Rgb(120, 196, 178),
    good: Color::Rgb(150, 220, 130),
    warn: Color::Rgb(226, 200, 110),
    bad: Color::Rgb(222, 126, 110),
};

pub const EMBER: Theme = Theme {
    name: "Ember",
    background: Color::Rgb(30, 20, 18),
    surface: Color::Rgb(48, 30, 26),
    border: Color::Rgb(96, 56, 44),
    text: Color::Rgb(240, 222, 210),
    muted: Color::Rgb(176, 140, 126),
    focus: Color::Rgb(255, 150, 70),
    accent: Color::Rgb(236, 190, 110),
    good: Color::Rgb(170, 210, 120),
    warn: Color::Rgb(250, 206, 96),
    bad: Color::Rgb(250, 96, 80),
};

impl Theme {
    pub fn for_variant(variant: TuiTheme) -> Theme {
        match variant {
            TuiTheme::Dusk => DUSK,
            TuiTheme::Parchment => PARCHMENT,
            TuiTheme::Moss => MOSS,
            TuiTheme::Ember => EMBER,
        }
    }
}
