//! Navigation state.

/// Top-level screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Contributions table
    #[default]
    Contributions,

    /// Product catalogue with the editor drawer
    Products,
}

impl View {
    pub const ALL: [View; 2] = [Self::Contributions, Self::Products];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Contributions => "Contributions",
            Self::Products => "Products",
        }
    }
}
