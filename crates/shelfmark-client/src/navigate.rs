//! Navigation after a successful submission.

/// Where a successful registration sends the user.
pub const LOGIN_ROUTE: &str = "/login";

/// Receives route changes requested by a controller.
pub trait Navigator {
    fn navigate(&mut self, route: &str);
}

/// A navigator that records every route it is sent to.
#[derive(Debug, Clone, Default)]
pub struct RouteHistory {
    visited: Vec<String>,
}

impl RouteHistory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visited(&self) -> &[String] {
        &self.visited
    }

    pub fn current(&self) -> Option<&str> {
        self.visited.last().map(String::as_str)
    }
}

impl Navigator for RouteHistory {
    fn navigate(&mut self, route: &str) {
        log::debug!("Navigating to {}", route);
        self.visited.push(route.to_string());
    }
}
