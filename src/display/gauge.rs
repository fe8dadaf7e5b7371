//! Score gauge rendering
//!
//! Renders the health score as a color-coded box: red below 50, amber below
//! 75, green at 75 and above.

/// Gauge color bands for the health score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GaugeColor {
    Red,
    Amber,
    Green,
}

impl GaugeColor {
    /// Pick the band for a score
    pub fn for_score(score: u8) -> Self {
        if score >= 75 {
            GaugeColor::Green
        } else if score >= 50 {
            GaugeColor::Amber
        } else {
            GaugeColor::Red
        }
    }

    /// ANSI escape code for this band
    pub fn ansi(&self) -> &'static str {
        match self {
            GaugeColor::Red => "\x1b[31m",
            GaugeColor::Amber => "\x1b[33m",
            GaugeColor::Green => "\x1b[32m",
        }
    }

    /// Wrap text in this band's color
    pub fn paint(&self, text: &str) -> String {
        format!("{}{}\x1b[0m", self.ansi(), text)
    }
}

/// Render the score gauge with its message underneath
pub fn render_gauge(score: u8, message: &str) -> String {
    let color = GaugeColor::for_score(score);
    let mut output = String::new();
    output.push_str(&color.paint("  ┌───────┐"));
    output.push('\n');
    output.push_str(&color.paint(&format!("  │  {:>3}  │", score)));
    output.push('\n');
    output.push_str(&color.paint("  └───────┘"));
    output.push('\n');
    output.push_str(&format!("  {}\n", message));
    output
}
