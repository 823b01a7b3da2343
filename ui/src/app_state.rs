use std::ops::Deref;
use std::sync::Arc;

#[derive(Debug, PartialEq, Eq)]
pub struct AppStateData {
    pub product: &'static str,
    pub tagline: &'static str,
    pub model: &'static str,
}

/// Stable, non-reactive application context. Provided once at the top of
/// the tree; screens read branding and the advertised model name from it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppState(Arc<AppStateData>);

impl Deref for AppState {
    type Target = AppStateData;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AppState {
    pub fn new() -> Self {
        Self(Arc::new(AppStateData {
            product: "PhishGuard AI",
            tagline: "Blockchain-Secured Detection",
            model: api::MODEL_NAME,
        }))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
