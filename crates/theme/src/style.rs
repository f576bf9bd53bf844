use crate::colors::Color;

/// Colours used to paint one bar-chart icon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraphStyle {
    pub background: Color,
    pub foreground: Color,
}
