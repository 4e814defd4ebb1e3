/// The focused-window commands the bridge can issue.
///
/// Every method tolerates zero focused windows: the command is skipped and
/// `false` returned. That is a no-op, not an error.
pub trait WindowTarget {
    /// Minimize the focused window. Returns whether one existed.
    fn minimize_focused(&mut self) -> bool;
    /// Maximize, or restore if already maximized. Returns whether one existed.
    fn toggle_maximize_focused(&mut self) -> bool;
    /// Close the focused window. Returns whether one existed.
    fn close_focused(&mut self) -> bool;
    /// `false` when nothing is focused.
    fn focused_is_maximized(&self) -> bool;
}
