use log::Level;

/// Element id the markup uses for the game surface.
pub const DEFAULT_CANVAS_ID: &str = "canvas";

/// Startup knobs for the bootstrap.
#[derive(Debug, Clone, PartialEq)]
pub struct BootConfig {
    pub canvas_id: String,
    pub log_level: Level,
}

impl Default for BootConfig {
    fn default() -> Self {
        Self {
            canvas_id: DEFAULT_CANVAS_ID.to_string(),
            log_level: Level::Debug,
        }
    }
}

impl BootConfig {
    pub fn with_canvas_id(mut self, id: impl Into<String>) -> Self {
        self.canvas_id = id.into();
        self
    }

    pub fn with_log_level(mut self, level: Level) -> Self {
        self.log_level = level;
        self
    }
}
