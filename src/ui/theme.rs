use colored::{Color, Colorize};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Named set of terminal colors for the game's visual elements. Not to be
/// confused with board themes (the content the cards are generated from).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisualStyle {
    pub name: String,
    pub colors: HashMap<String, ColorConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorConfig {
    pub foreground: Option<String>,
    pub style: Vec<String>,
}

pub struct StyleManager {
    styles: HashMap<String, VisualStyle>,
    current_style: String,
}

impl StyleManager {
    pub fn new() -> Self {
        let mut manager = Self {
            styles: HashMap::new(),
            current_style: "default".to_string(),
        };

        manager.load_default_styles();
        manager
    }

    pub fn set_style(&mut self, style_name: &str) -> bool {
        if self.styles.contains_key(style_name) {
            self.current_style = style_name.to_string();
            true
        } else {
            false
        }
    }

    pub fn get_current_style(&self) -> &VisualStyle {
        self.styles
            .get(&self.current_style)
            .unwrap_or_else(|| self.styles.get("default").unwrap())
    }

    pub fn apply_style(&self, text: &str, element: &str) -> String {
        let style = self.get_current_style();

        if let Some(color_config) = style.colors.get(element) {
            let mut styled_text = text.to_string();

            if let Some(fg_color) = &color_config.foreground {
                if let Some(color) = parse_color(fg_color) {
                    styled_text = styled_text.color(color).to_string();
                }
            }

            for attr in &color_config.style {
                styled_text = match attr.as_str() {
                    "bold" => styled_text.bold().to_string(),
                    "italic" => styled_text.italic().to_string(),
                    "underline" => styled_text.underline().to_string(),
                    "dimmed" => styled_text.dimmed().to_string(),
                    _ => styled_text,
                };
            }

            styled_text
        } else {
            text.to_string()
        }
    }

    pub fn list_styles(&self) -> Vec<String> {
        self.styles.keys().cloned().collect()
    }

    fn load_default_styles(&mut self) {
        let entry = |fg: &str, attrs: &[&str]| ColorConfig {
            foreground: Some(fg.to_string()),
            style: attrs.iter().map(|s| s.to_string()).collect(),
        };

        // Default style
        let mut default_colors = HashMap::new();
        default_colors.insert("title".to_string(), entry("cyan", &["bold"]));
        default_colors.insert("banner".to_string(), entry("yellow", &["bold"]));
        default_colors.insert("hud".to_string(), entry("yellow", &[]));
        default_colors.insert("card_back".to_string(), entry("bright_black", &["dimmed"]));
        default_colors.insert("card_face".to_string(), entry("white", &[]));
        default_colors.insert("card_matched".to_string(), entry("green", &["bold"]));
        default_colors.insert("error".to_string(), entry("red", &["bold"]));
        default_colors.insert("success".to_string(), entry("green", &["bold"]));
        default_colors.insert("warning".to_string(), entry("yellow", &["bold"]));
        default_colors.insert("info".to_string(), entry("blue", &[]));
        default_colors.insert("separator".to_string(), entry("bright_black", &["dimmed"]));

        self.styles.insert(
            "default".to_string(),
            VisualStyle {
                name: "default".to_string(),
                colors: default_colors,
            },
        );

        // Dark style
        let mut dark_colors = HashMap::new();
        dark_colors.insert("title".to_string(), entry("bright_cyan", &["bold"]));
        dark_colors.insert("banner".to_string(), entry("bright_yellow", &["bold"]));
        dark_colors.insert("hud".to_string(), entry("bright_yellow", &[]));
        dark_colors.insert("card_back".to_string(), entry("black", &["dimmed"]));
        dark_colors.insert("card_face".to_string(), entry("bright_white", &[]));
        dark_colors.insert("card_matched".to_string(), entry("bright_green", &["bold"]));
        dark_colors.insert("error".to_string(), entry("bright_red", &["bold"]));
        dark_colors.insert("success".to_string(), entry("bright_green", &["bold"]));
        dark_colors.insert("warning".to_string(), entry("bright_yellow", &["bold"]));
        dark_colors.insert("info".to_string(), entry("bright_blue", &[]));
        dark_colors.insert("separator".to_string(), entry("bright_black", &["dimmed"]));

        self.styles.insert(
            "dark".to_string(),
            VisualStyle {
                name: "dark".to_string(),
                colors: dark_colors,
            },
        );
    }
}

impl Default for StyleManager {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_color(color_name: &str) -> Option<Color> {
    match color_name.to_lowercase().as_str() {
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "white" => Some(Color::White),
        "bright_black" => Some(Color::BrightBlack),
        "bright_red" => Some(Color::BrightRed),
        "bright_green" => Some(Color::BrightGreen),
        "bright_yellow" => Some(Color::BrightYellow),
        "bright_blue" => Some(Color::BrightBlue),
        "bright_magenta" => Some(Color::BrightMagenta),
        "bright_cyan" => Some(Color::BrightCyan),
        "bright_white" => Some(Color::BrightWhite),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_manager_creation() {
        let manager = StyleManager::new();
        assert_eq!(manager.current_style, "default");
        assert!(manager.styles.contains_key("default"));
        assert!(manager.styles.contains_key("dark"));
    }

    #[test]
    fn test_set_style() {
        let mut manager = StyleManager::new();

        assert!(manager.set_style("dark"));
        assert_eq!(manager.current_style, "dark");

        assert!(!manager.set_style("nonexistent"));
        assert_eq!(manager.current_style, "dark"); // Should remain unchanged
    }

    #[test]
    fn test_apply_style() {
        let manager = StyleManager::new();

        let styled = manager.apply_style("Moves: 3", "hud");
        assert!(!styled.is_empty());

        // Unknown element passes through unstyled
        let unstyled = manager.apply_style("Test", "nonexistent");
        assert_eq!(unstyled, "Test");
    }

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("red"), Some(Color::Red));
        assert_eq!(parse_color("RED"), Some(Color::Red));
        assert_eq!(parse_color("bright_green"), Some(Color::BrightGreen));
        assert_eq!(parse_color("invalid"), None);
    }
}
