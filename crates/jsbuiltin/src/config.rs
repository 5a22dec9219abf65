//! Host capability options for a [`Realm`](crate::realm::Realm).

/// Options applied when a realm bootstraps its intrinsics.
///
/// ```
/// use jsbuiltin::RealmOptions;
/// let options = RealmOptions::default().with_symbols(false);
/// assert!(!options.symbols);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RealmOptions {
    /// Whether the host has a symbol primitive. When off, the `Symbol`
    /// global is absent and no symbols can be created.
    pub symbols: bool,
}

impl Default for RealmOptions {
    fn default() -> Self {
        Self { symbols: true }
    }
}

impl RealmOptions {
    pub fn with_symbols(mut self, enabled: bool) -> Self {
        self.symbols = enabled;
        self
    }
}
