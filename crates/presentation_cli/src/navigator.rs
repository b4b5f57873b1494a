//! Terminal navigation after a 401

use api_client::Navigator;
use tracing::warn;

/// Tells the user to log in again instead of switching pages
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalNavigator;

impl Navigator for TerminalNavigator {
    fn navigate(&self, route: &str) {
        warn!(route = %route, "Session cleared after unauthorized response");
        eprintln!("🔒 Session expired. Run `trivesha-cli auth login` to sign in again.");
    }
}
