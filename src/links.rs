//! External link actions.

use std::io;

/// Launch the platform default browser on `url`, detached.
///
/// Fire-and-forget: the spawn can fail (no handler installed), but once the
/// browser owns the navigation any further failure is its business, not
/// ours.
pub fn open_in_browser(url: &str) -> io::Result<()> {
    open::that_detached(url)
}
