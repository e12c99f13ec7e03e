//! Terminal rendering of core notifications.

use hamster_core::{Notice, NoticeLevel, Notifier};
use tracing::debug;

/// Prints notifications to stderr so stdout stays clean for listings.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalNotifier;

impl TerminalNotifier {
    pub const fn new() -> Self {
        Self
    }
}

/// One notification as shown in the terminal.
pub fn render(notice: &Notice) -> String {
    match notice.level {
        NoticeLevel::Success => format!("✅ {notice}"),
        NoticeLevel::Error => format!("❌ {notice}"),
    }
}

impl Notifier for TerminalNotifier {
    fn notify(&self, notice: Notice) {
        debug!(level = ?notice.level, message = %notice.message, "Notification");
        eprintln!("{}", render(&notice));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_levels() {
        assert_eq!(render(&Notice::success("Component added")), "✅ Component added");
        assert_eq!(render(&Notice::error("Save failed")), "❌ Save failed");
    }
}
