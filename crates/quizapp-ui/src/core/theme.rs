//! Brand palette and design tokens for the Quiz App Web UI.

use crate::core::breakpoints::{BREAKPOINTS, Breakpoint};

/// A single color token with a stable name and hex value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorToken {
    /// Semantic identifier for the shade (e.g., "500").
    pub name: &'static str,
    /// Hex RGB value for the shade.
    pub hex: &'static str,
}

/// Collection of related tokens (e.g., primary shades).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    /// Palette identifier.
    pub id: &'static str,
    /// Ordered list of shades from lightest to darkest.
    pub shades: &'static [ColorToken],
}

impl Palette {
    /// Hex value for a named shade.
    #[must_use]
    pub fn shade(&self, name: &str) -> Option<&'static str> {
        self.shades
            .iter()
            .find(|token| token.name == name)
            .map(|token| token.hex)
    }
}

/// Brand purple used for headings, links and the primary button.
pub const APP_PURPLE: Palette = Palette {
    id: "appPurple",
    shades: &[
        ColorToken {
            name: "50",
            hex: "#F3E8FF",
        },
        ColorToken {
            name: "100",
            hex: "#E3CCFD",
        },
        ColorToken {
            name: "200",
            hex: "#CBA3FA",
        },
        ColorToken {
            name: "300",
            hex: "#B27AF5",
        },
        ColorToken {
            name: "400",
            hex: "#9A56EC",
        },
        ColorToken {
            name: "500",
            hex: "#7F3BD9",
        },
        ColorToken {
            name: "600",
            hex: "#6A2DBC",
        },
        ColorToken {
            name: "700",
            hex: "#55229A",
        },
        ColorToken {
            name: "800",
            hex: "#3F1875",
        },
        ColorToken {
            name: "900",
            hex: "#2A0F50",
        },
    ],
};

/// Neutral grays for text, placeholders and input fills.
pub const GRAY: Palette = Palette {
    id: "gray",
    shades: &[
        ColorToken {
            name: "50",
            hex: "#F7FAFC",
        },
        ColorToken {
            name: "100",
            hex: "#EDF2F7",
        },
        ColorToken {
            name: "200",
            hex: "#E2E8F0",
        },
        ColorToken {
            name: "300",
            hex: "#CBD5E0",
        },
        ColorToken {
            name: "400",
            hex: "#A0AEC0",
        },
        ColorToken {
            name: "500",
            hex: "#718096",
        },
        ColorToken {
            name: "600",
            hex: "#4A5568",
        },
        ColorToken {
            name: "700",
            hex: "#2D3748",
        },
        ColorToken {
            name: "800",
            hex: "#1A202C",
        },
        ColorToken {
            name: "900",
            hex: "#171923",
        },
    ],
};

/// Success feedback palette.
pub const SUCCESS: Palette = Palette {
    id: "success",
    shades: &[
        ColorToken {
            name: "100",
            hex: "#DCF5E6",
        },
        ColorToken {
            name: "500",
            hex: "#2F9E5B",
        },
        ColorToken {
            name: "700",
            hex: "#1E6B3C",
        },
    ],
};

/// Error feedback palette.
pub const ERROR: Palette = Palette {
    id: "error",
    shades: &[
        ColorToken {
            name: "100",
            hex: "#FDE2E2",
        },
        ColorToken {
            name: "500",
            hex: "#D63A3A",
        },
        ColorToken {
            name: "700",
            hex: "#992424",
        },
    ],
};

/// Palettes exposed by [`Theme::quiz`].
pub const PALETTES: [Palette; 4] = [APP_PURPLE, GRAY, SUCCESS, ERROR];

/// Spacing scale in pixels.
pub const SPACING: [u8; 6] = [4, 8, 12, 16, 24, 32];
/// Corner radius tokens in pixels.
pub const RADII: [u16; 3] = [4, 8, 9999];

/// Static theme object handed to the theme context at bootstrap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    /// Theme identifier written to `data-theme`.
    pub name: &'static str,
    /// Color palettes.
    pub palettes: &'static [Palette],
    /// Spacing scale.
    pub spacing: &'static [u8],
    /// Radius scale.
    pub radii: &'static [u16],
    /// Responsive breakpoints.
    pub breakpoints: &'static [Breakpoint],
}

impl Theme {
    /// The quiz app's single theme.
    #[must_use]
    pub const fn quiz() -> Self {
        Self {
            name: "quiz",
            palettes: &PALETTES,
            spacing: &SPACING,
            radii: &RADII,
            breakpoints: &BREAKPOINTS,
        }
    }

    /// Look up a color by palette id and shade name.
    #[must_use]
    pub fn color(&self, palette: &str, shade: &str) -> Option<&'static str> {
        self.palettes
            .iter()
            .find(|p| p.id == palette)
            .and_then(|p| p.shade(shade))
    }

    /// CSS custom properties for every token, in declaration order.
    #[must_use]
    pub fn css_variables(&self) -> Vec<(String, String)> {
        let mut vars = Vec::new();
        for palette in self.palettes {
            for token in palette.shades {
                vars.push((
                    format!("--color-{}-{}", palette.id, token.name),
                    token.hex.to_string(),
                ));
            }
        }
        for (idx, px) in self.spacing.iter().enumerate() {
            vars.push((format!("--space-{}", idx + 1), format!("{px}px")));
        }
        for (idx, px) in self.radii.iter().enumerate() {
            vars.push((format!("--radius-{}", idx + 1), format!("{px}px")));
        }
        for bp in self.breakpoints {
            vars.push((format!("--bp-{}", bp.name), format!("{}px", bp.min_width)));
        }
        vars
    }

    /// Inline style declaration list for the document root.
    #[must_use]
    pub fn root_style(&self) -> String {
        self.css_variables()
            .into_iter()
            .map(|(name, value)| format!("{name}: {value};"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palettes_have_expected_lengths() {
        assert_eq!(APP_PURPLE.shades.len(), 10);
        assert_eq!(GRAY.shades.len(), 10);
        assert!(SUCCESS.shades.len() >= 3);
        assert!(ERROR.shades.len() >= 3);
    }

    #[test]
    fn color_lookup_resolves_known_tokens() {
        let theme = Theme::quiz();
        assert_eq!(theme.color("appPurple", "500"), Some("#7F3BD9"));
        assert_eq!(theme.color("appPurple", "950"), None);
        assert_eq!(theme.color("teal", "500"), None);
    }

    #[test]
    fn css_variables_cover_colors_spacing_and_breakpoints() {
        let vars = Theme::quiz().css_variables();
        assert!(vars.contains(&("--color-appPurple-600".to_string(), "#6A2DBC".to_string())));
        assert!(vars.contains(&("--space-4".to_string(), "16px".to_string())));
        assert!(vars.contains(&("--bp-mobileM".to_string(), "375px".to_string())));
    }

    #[test]
    fn root_style_is_semicolon_separated() {
        let style = Theme::quiz().root_style();
        assert!(style.starts_with("--color-appPurple-50: #F3E8FF;"));
        assert!(style.ends_with("--bp-xl: 1280px;"));
    }
}
