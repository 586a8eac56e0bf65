//! Level-keyed highlight themes.
//!
//! Levels 1..=5 each get their own palette; level 6 and deeper share the
//! default theme, giving six themes in total.

/// RGBA color (0-255 per channel)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HighlightTheme {
    Level1,
    Level2,
    Level3,
    Level4,
    Level5,
    Default,
}

/// Colors a theme paints onto an element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemeStyle {
    pub background: Rgba,
    pub border: Rgba,
    pub border_width: f32,
}

impl HighlightTheme {
    pub const ALL: [HighlightTheme; 6] = [
        Self::Level1,
        Self::Level2,
        Self::Level3,
        Self::Level4,
        Self::Level5,
        Self::Default,
    ];

    /// Theme for an outline level; 0 is treated as 1.
    pub fn for_level(level: u32) -> Self {
        match level {
            0 | 1 => Self::Level1,
            2 => Self::Level2,
            3 => Self::Level3,
            4 => Self::Level4,
            5 => Self::Level5,
            _ => Self::Default,
        }
    }

    pub fn style(self) -> ThemeStyle {
        match self {
            Self::Level1 => ThemeStyle {
                background: Rgba::rgba(255, 235, 59, 90),
                border: Rgba::rgba(245, 124, 0, 255),
                border_width: 3.0,
            },
            Self::Level2 => ThemeStyle {
                background: Rgba::rgba(129, 212, 250, 90),
                border: Rgba::rgba(2, 136, 209, 255),
                border_width: 2.5,
            },
            Self::Level3 => ThemeStyle {
                background: Rgba::rgba(165, 214, 167, 90),
                border: Rgba::rgba(56, 142, 60, 255),
                border_width: 2.0,
            },
            Self::Level4 => ThemeStyle {
                background: Rgba::rgba(206, 147, 216, 80),
                border: Rgba::rgba(123, 31, 162, 255),
                border_width: 2.0,
            },
            Self::Level5 => ThemeStyle {
                background: Rgba::rgba(255, 171, 145, 80),
                border: Rgba::rgba(230, 74, 25, 255),
                border_width: 1.5,
            },
            Self::Default => ThemeStyle {
                background: Rgba::rgba(207, 216, 220, 80),
                border: Rgba::rgba(96, 125, 139, 255),
                border_width: 1.5,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deep_levels_share_default() {
        assert_eq!(HighlightTheme::for_level(6), HighlightTheme::Default);
        assert_eq!(HighlightTheme::for_level(42), HighlightTheme::Default);
        assert_eq!(HighlightTheme::for_level(0), HighlightTheme::Level1);
    }

    #[test]
    fn six_distinct_palettes() {
        let backgrounds: std::collections::HashSet<Rgba> =
            HighlightTheme::ALL.iter().map(|t| t.style().background).collect();
        assert_eq!(backgrounds.len(), 6);
    }
}
