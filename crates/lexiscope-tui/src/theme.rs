use ratatui::style::{Color, Modifier, Style};

/// Color theme for the TUI.
pub struct Theme {
    pub header_fg: Color,
    pub header_bg: Color,
    pub border: Color,
    pub text: Color,
    pub dim: Color,
    pub highlight_bg: Color,
    pub accent: Color,
    pub selected: Color,
    pub error: Color,
    pub spinner: Color,
    pub footer_fg: Color,
    pub footer_bg: Color,

    /// Single-hue bars (category totals, histogram).
    pub bar: Color,
    /// Heatmap cell for an empty bucket.
    pub heat_zero: Color,
    /// Heatmap ramp endpoints (low -> high), interpolated per cell.
    pub heat_low: (u8, u8, u8),
    pub heat_high: (u8, u8, u8),
    /// Categorical palette cycled over selected words.
    pub series: [Color; 10],
}

impl Theme {
    /// Hacker-green terminal theme.
    pub fn hacker() -> Self {
        Self {
            header_fg: Color::Black,
            header_bg: Color::Rgb(0, 210, 0),
            border: Color::DarkGray,
            text: Color::White,
            dim: Color::DarkGray,
            highlight_bg: Color::Rgb(30, 50, 30),
            accent: Color::Cyan,
            selected: Color::Rgb(0, 210, 0),
            error: Color::Red,
            spinner: Color::Cyan,
            footer_fg: Color::DarkGray,
            footer_bg: Color::Reset,

            bar: Color::Rgb(0, 180, 0),
            heat_zero: Color::Rgb(25, 35, 25),
            heat_low: (20, 80, 20),
            heat_high: (120, 255, 120),
            series: [
                Color::Rgb(0, 210, 0),
                Color::Cyan,
                Color::Yellow,
                Color::Magenta,
                Color::Rgb(255, 140, 0),
                Color::Rgb(80, 160, 255),
                Color::Rgb(255, 100, 100),
                Color::Rgb(160, 255, 160),
                Color::Rgb(200, 160, 255),
                Color::Rgb(180, 180, 60),
            ],
        }
    }

    /// Modern theme: white text, electric blue accents, classic ten-color palette.
    pub fn modern() -> Self {
        Self {
            header_fg: Color::White,
            header_bg: Color::Rgb(30, 60, 120),
            border: Color::Rgb(60, 60, 80),
            text: Color::White,
            dim: Color::Rgb(120, 120, 140),
            highlight_bg: Color::Rgb(30, 40, 80),
            accent: Color::Rgb(60, 140, 255),
            selected: Color::Rgb(60, 140, 255),
            error: Color::Rgb(255, 80, 80),
            spinner: Color::Rgb(60, 140, 255),
            footer_fg: Color::Rgb(120, 120, 140),
            footer_bg: Color::Reset,

            bar: Color::Rgb(70, 130, 180),
            heat_zero: Color::Rgb(30, 30, 40),
            heat_low: (255, 237, 160),
            heat_high: (189, 0, 38),
            series: [
                Color::Rgb(31, 119, 180),
                Color::Rgb(255, 127, 14),
                Color::Rgb(44, 160, 44),
                Color::Rgb(214, 39, 40),
                Color::Rgb(148, 103, 189),
                Color::Rgb(140, 86, 75),
                Color::Rgb(227, 119, 194),
                Color::Rgb(127, 127, 127),
                Color::Rgb(188, 189, 34),
                Color::Rgb(23, 190, 207),
            ],
        }
    }

    /// Palette color for the i-th series, cycling past ten.
    pub fn series_color(&self, index: usize) -> Color {
        self.series[index % self.series.len()]
    }

    /// Interpolated heat color for a cell value against the column max.
    pub fn heat_color(&self, value: u64, max: u64) -> Color {
        if value == 0 || max == 0 {
            return self.heat_zero;
        }
        let t = value as f64 / max as f64;
        let lerp = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Color::Rgb(
            lerp(self.heat_low.0, self.heat_high.0),
            lerp(self.heat_low.1, self.heat_high.1),
            lerp(self.heat_low.2, self.heat_high.2),
        )
    }

    pub fn header_style(&self) -> Style {
        Style::default()
            .fg(self.header_fg)
            .bg(self.header_bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn highlight_style(&self) -> Style {
        Style::default()
            .bg(self.highlight_bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn footer_style(&self) -> Style {
        Style::default().fg(self.footer_fg).bg(self.footer_bg)
    }

    pub fn placeholder_style(&self) -> Style {
        Style::default().fg(self.dim).add_modifier(Modifier::ITALIC)
    }

    pub fn selected_style(&self) -> Style {
        Style::default()
            .fg(self.selected)
            .add_modifier(Modifier::BOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heat_color_endpoints() {
        let theme = Theme::modern();
        assert_eq!(theme.heat_color(0, 100), theme.heat_zero);
        let (r, g, b) = theme.heat_high;
        assert_eq!(theme.heat_color(100, 100), Color::Rgb(r, g, b));
    }

    #[test]
    fn series_colors_cycle() {
        let theme = Theme::hacker();
        assert_eq!(theme.series_color(0), theme.series_color(10));
        assert_eq!(theme.series_color(3), theme.series_color(13));
    }
}
