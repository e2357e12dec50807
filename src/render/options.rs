//! Rendering options.

/// Options controlling HTML output.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Largest heading tag to emit; levels above it render at the ceiling.
    /// The render tree itself keeps stored levels untouched.
    pub heading_ceiling: u8,

    /// Prefix for CSS classes on emitted elements; `None` emits no class
    /// attributes.
    pub class_prefix: Option<String>,

    /// Emit one top-level element per line with nested elements indented
    pub pretty: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            heading_ceiling: 6,
            class_prefix: None,
            pretty: false,
        }
    }
}

impl RenderOptions {
    /// Create options with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the heading tag ceiling, kept within `h1`..`h6`.
    pub fn with_heading_ceiling(mut self, ceiling: u8) -> Self {
        self.heading_ceiling = ceiling.clamp(1, 6);
        self
    }

    /// Set a CSS class prefix.
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = Some(prefix.into());
        self
    }

    /// Enable or disable pretty output.
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}
