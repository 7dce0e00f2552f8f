//! Score Counter
//!
//! A monotonically non-decreasing carrot count plus its cached display
//! text. The text is refreshed synchronously on every collection so the
//! HUD never lags the counter.

#[derive(Debug, Clone)]
pub struct Score {
    collected: u32,
    label: String,
}

impl Score {
    pub fn new() -> Self {
        Self {
            collected: 0,
            label: Self::render(0),
        }
    }

    fn render(collected: u32) -> String {
        format!("Carrots: {}", collected)
    }

    /// Count one collected carrot and refresh the display text.
    pub fn increment(&mut self) {
        self.collected += 1;
        self.label = Self::render(self.collected);
    }

    pub fn collected(&self) -> u32 {
        self.collected
    }

    /// The HUD text, e.g. `"Carrots: 3"`.
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl Default for Score {
    fn default() -> Self {
        Self::new()
    }
}
