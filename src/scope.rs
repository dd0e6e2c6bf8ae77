//! Provider scope
//!
//! Explicit dependency injection for the facade: the host constructs
//! [`Overlays`](crate::Overlays) once, installs it into an [`OverlayScope`],
//! and passes the scope down its component tree. Looking up the handle from
//! an empty scope is a usage error, reported synchronously at the call site.

use crate::{
    error::{Error, Result},
    handle::Overlays,
};

/// Carrier for the overlay handle within a component tree.
#[derive(Debug, Clone, Default)]
pub struct OverlayScope {
    handle: Option<Overlays>,
}

impl OverlayScope {
    /// A scope with no provider installed.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A scope with the given provider installed.
    pub fn provide(handle: Overlays) -> Self {
        Self {
            handle: Some(handle),
        }
    }

    /// Install a provider into this scope.
    pub fn install(&mut self, handle: Overlays) {
        self.handle = Some(handle);
    }

    /// Fetch the overlay handle.
    ///
    /// Fails with [`Error::NoProvider`] when called outside an installed
    /// provider scope.
    pub fn handle(&self) -> Result<Overlays> {
        self.handle.clone().ok_or(Error::NoProvider)
    }

    pub fn is_provided(&self) -> bool {
        self.handle.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OverlayConfig;

    #[test]
    fn empty_scope_reports_usage_error() {
        let scope = OverlayScope::empty();
        assert!(matches!(scope.handle(), Err(Error::NoProvider)));
    }

    #[test]
    fn provided_scope_hands_out_the_facade() {
        let scope = OverlayScope::provide(Overlays::new(OverlayConfig::default()));
        assert!(scope.is_provided());
        assert!(scope.handle().is_ok());
    }

    #[test]
    fn install_upgrades_an_empty_scope() {
        let mut scope = OverlayScope::empty();
        assert!(!scope.is_provided());
        scope.install(Overlays::new(OverlayConfig::default()));
        assert!(scope.handle().is_ok());
    }
}
