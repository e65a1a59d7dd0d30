use std::fmt;

use serde::{Deserialize, Serialize};

/// An sRGB color. Serialized as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Uppercase hex without the leading `#`, as DrawingML `srgbClr` expects.
    pub fn to_hex(self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Components scaled to `0.0..=1.0` for PDF color operators.
    pub fn to_unit(self) -> (f32, f32, f32) {
        (
            f32::from(self.r) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.b) / 255.0,
        )
    }
}

impl From<Rgb> for String {
    fn from(value: Rgb) -> Self {
        value.to_string()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Named slots of the fixed palette. Content refers to colors by slot so
/// the theme stays the single source of actual values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaletteColor {
    Primary,
    Accent,
    Success,
    SecondaryAccent,
    NeutralLight,
    NeutralDark,
    White,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub primary: Rgb,
    pub accent: Rgb,
    pub success: Rgb,
    pub secondary_accent: Rgb,
    pub neutral_light: Rgb,
    pub neutral_dark: Rgb,
    pub white: Rgb,
}

impl Palette {
    pub fn get(&self, slot: PaletteColor) -> Rgb {
        match slot {
            PaletteColor::Primary => self.primary,
            PaletteColor::Accent => self.accent,
            PaletteColor::Success => self.success,
            PaletteColor::SecondaryAccent => self.secondary_accent,
            PaletteColor::NeutralLight => self.neutral_light,
            PaletteColor::NeutralDark => self.neutral_dark,
            PaletteColor::White => self.white,
        }
    }

    /// Fill color for the chart series at `index`, if the palette has one.
    pub fn series(&self, index: usize) -> Option<Rgb> {
        [
            self.primary,
            self.accent,
            self.success,
            self.secondary_accent,
        ]
        .get(index)
        .copied()
    }
}

/// Abstract typeface. Each backend maps these onto concrete fonts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Typeface {
    Sans,
    SansBold,
    Mono,
}

impl Typeface {
    pub fn bold(self) -> Self {
        match self {
            Typeface::Sans | Typeface::SansBold => Typeface::SansBold,
            Typeface::Mono => Typeface::Mono,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Align {
    Left,
    Center,
}

/// A named paragraph style. Sizes and spacing are in points.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextStyle {
    pub typeface: Typeface,
    pub size: f32,
    pub leading: f32,
    pub color: PaletteColor,
    pub space_after: f32,
    pub align: Align,
}

/// Palette plus the paragraph styles shared by both renderers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Theme {
    pub palette: Palette,
    pub title: TextStyle,
    pub subtitle: TextStyle,
    pub body: TextStyle,
    /// Monospace caption used for ASCII diagrams.
    pub caption: TextStyle,
    /// White centered text inside colored callout boxes and stat cells.
    pub callout: TextStyle,
}

impl Theme {
    /// The CCSP briefing theme.
    pub fn ccsp() -> Self {
        Self {
            palette: Palette {
                primary: Rgb::new(0x66, 0x7e, 0xea),
                accent: Rgb::new(0xf5, 0x57, 0x6c),
                success: Rgb::new(0x28, 0xa7, 0x45),
                secondary_accent: Rgb::new(0x76, 0x4b, 0xa2),
                neutral_light: Rgb::new(0xf8, 0xf9, 0xfa),
                neutral_dark: Rgb::new(0x2c, 0x3e, 0x50),
                white: Rgb::new(0xff, 0xff, 0xff),
            },
            title: TextStyle {
                typeface: Typeface::SansBold,
                size: 24.0,
                leading: 28.8,
                color: PaletteColor::Primary,
                space_after: 12.0,
                align: Align::Center,
            },
            subtitle: TextStyle {
                typeface: Typeface::Sans,
                size: 12.0,
                leading: 14.4,
                color: PaletteColor::White,
                space_after: 12.0,
                align: Align::Center,
            },
            body: TextStyle {
                typeface: Typeface::Sans,
                size: 10.0,
                leading: 12.0,
                color: PaletteColor::NeutralDark,
                space_after: 8.0,
                align: Align::Left,
            },
            caption: TextStyle {
                typeface: Typeface::Mono,
                size: 8.0,
                leading: 9.6,
                color: PaletteColor::NeutralDark,
                space_after: 8.0,
                align: Align::Center,
            },
            callout: TextStyle {
                typeface: Typeface::Sans,
                size: 10.0,
                leading: 12.0,
                color: PaletteColor::White,
                space_after: 0.0,
                align: Align::Center,
            },
        }
    }

    pub fn color(&self, slot: PaletteColor) -> Rgb {
        self.palette.get(slot)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::ccsp()
    }
}
