//! Viewport presets, zoom and the active tool.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Device classes the page box can emulate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewportPreset {
    #[default]
    Desktop,
    Laptop,
    Tablet,
    Mobile,
}

impl ViewportPreset {
    pub const ALL: [ViewportPreset; 4] = [
        ViewportPreset::Desktop,
        ViewportPreset::Laptop,
        ViewportPreset::Tablet,
        ViewportPreset::Mobile,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ViewportPreset::Desktop => "desktop",
            ViewportPreset::Laptop => "laptop",
            ViewportPreset::Tablet => "tablet",
            ViewportPreset::Mobile => "mobile",
        }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        match self {
            ViewportPreset::Desktop => (1440, 900),
            ViewportPreset::Laptop => (1280, 800),
            ViewportPreset::Tablet => (768, 1024),
            ViewportPreset::Mobile => (375, 812),
        }
    }

    pub fn page_box(&self) -> PageBox {
        let (width, height) = self.dimensions();
        PageBox { width, height }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.name() == value)
    }
}

impl fmt::Display for ViewportPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (w, h) = self.dimensions();
        write!(f, "{} ({}×{})", self.name(), w, h)
    }
}

/// Unscaled page size in canvas units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageBox {
    pub width: u32,
    pub height: u32,
}

/// Zoom level in percent: a multiple of 25 within [25, 200]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub struct Zoom(u16);

impl Zoom {
    pub const MIN: u16 = 25;
    pub const MAX: u16 = 200;
    pub const STEP: u16 = 25;

    /// Clamp to bounds and round to the nearest step
    pub fn new(requested: i32) -> Self {
        let clamped = requested.clamp(Self::MIN as i32, Self::MAX as i32);
        let step = Self::STEP as i32;
        let rounded = ((clamped + step / 2) / step) * step;
        Zoom(rounded.clamp(Self::MIN as i32, Self::MAX as i32) as u16)
    }

    pub fn percent(&self) -> u16 {
        self.0
    }

    /// Scale factor applied to the page (`zoom / 100`)
    pub fn scale(&self) -> f64 {
        f64::from(self.0) / 100.0
    }

    pub fn zoom_in(&self) -> Self {
        Self::new(i32::from(self.0) + i32::from(Self::STEP))
    }

    pub fn zoom_out(&self) -> Self {
        Self::new(i32::from(self.0) - i32::from(Self::STEP))
    }
}

impl Default for Zoom {
    fn default() -> Self {
        Zoom(100)
    }
}

impl From<i32> for Zoom {
    fn from(value: i32) -> Self {
        Zoom::new(value)
    }
}

impl From<Zoom> for i32 {
    fn from(zoom: Zoom) -> Self {
        i32::from(zoom.0)
    }
}

impl fmt::Display for Zoom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Toolbar tools.
///
/// Only `Select` drives canvas pointer input; the others are placeholders
/// for drawing tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    #[default]
    Select,
    Hand,
    Text,
    Rectangle,
    Ellipse,
}

impl Tool {
    pub fn handles_pointer(&self) -> bool {
        matches!(self, Tool::Select)
    }
}
