use console::Style;

/// Terminal color handling for report text
pub struct Terminal {
    pub supports_color: bool,
}

impl Terminal {
    pub fn new() -> Self {
        Self {
            supports_color: console::colors_enabled(),
        }
    }

    /// Never emits escape codes
    #[cfg(test)]
    pub fn plain() -> Self {
        Self {
            supports_color: false,
        }
    }

    /// Green for healthy, red otherwise
    pub fn health_style(&self, healthy: bool) -> Style {
        if healthy {
            Style::new().green()
        } else {
            Style::new().red().bold()
        }
    }

    pub fn heading_style(&self) -> Style {
        Style::new().bold()
    }

    /// Apply `style` to already padded text so column widths stay intact
    pub fn paint(&self, text: &str, style: &Style) -> String {
        if !self.supports_color {
            return text.to_string();
        }
        style.apply_to(text).force_styling(true).to_string()
    }
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new()
    }
}
