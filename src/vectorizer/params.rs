use serde::{Deserialize, Serialize};

/// What `CountVectorizer::fit_transform` does with a vocabulary fitted by an
/// earlier call on the same instance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitMode {
    /// Keep the vocabulary and append unseen tokens.
    /// Rows of later calls are as wide as the accumulated vocabulary.
    #[default]
    Accumulate,
    /// Start every call from an empty vocabulary.
    Reset,
}

pub const DEFAULT_DECIMALS: u32 = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VectorizerParams {
    fit_mode: FitMode,
    /// Digits kept after the decimal point at every rounding step
    /// (TF, IDF and the final TF-IDF product).
    decimals: u32,
}

impl VectorizerParams {
    pub fn new(fit_mode: FitMode, decimals: u32) -> Self {
        Self { fit_mode, decimals }
    }

    #[must_use]
    pub fn with_fit_mode(mut self, fit_mode: FitMode) -> Self {
        self.fit_mode = fit_mode;
        self
    }

    #[must_use]
    pub fn with_decimals(mut self, decimals: u32) -> Self {
        self.decimals = decimals;
        self
    }

    #[must_use]
    pub fn fit_mode(&self) -> FitMode {
        self.fit_mode
    }

    #[must_use]
    pub fn decimals(&self) -> u32 {
        self.decimals
    }
}

impl Default for VectorizerParams {
    fn default() -> Self {
        Self {
            fit_mode: FitMode::default(),
            decimals: DEFAULT_DECIMALS,
        }
    }
}
