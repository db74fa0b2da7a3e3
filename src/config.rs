//! Render options for a binding pass

/// Configuration for a single render pass
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Include column labels as the first physical row
    pub include_header: bool,
    /// Mark every column for automatic width sizing after rendering
    pub auto_size: bool,
    /// Title to apply to the sink before rendering
    pub title: Option<String>,
}

impl RenderOptions {
    /// Create options with all defaults: no header, no auto-size, no title
    pub fn new() -> Self {
        Self::default()
    }

    /// Include column labels as the first row
    pub fn with_header(mut self, include: bool) -> Self {
        self.include_header = include;
        self
    }

    /// Enable automatic column width sizing
    pub fn with_auto_size(mut self, auto_size: bool) -> Self {
        self.auto_size = auto_size;
        self
    }

    /// Set the sheet title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}
