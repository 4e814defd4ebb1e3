//! Recoverable error boundary around the routed screens.
//!
//! Only rendering errors from descendant screens reach the boundary. Host
//! and bridge failures arrive as rejected bridge promises and are handled by
//! the global handlers instead.
//!
//! The fallback markup is rendered here. `shell.js` inserts the empty-slot
//! rendering and fills the `message` and `trace` slots with the caught error.

use crate::markup::escape_html;

pub const FALLBACK_TITLE: &str = "Application Error";
pub const FALLBACK_SUMMARY: &str = "Something went wrong. Please try restarting the application.";
pub const RELOAD_LABEL: &str = "Reload Application";

/// Slot holding the error message.
pub const MESSAGE_SLOT: &str = "message";
/// Slot holding the component trace; its `<details>` is dropped when empty.
pub const TRACE_SLOT: &str = "trace";

/// A rendering error thrown by a screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaughtError {
    pub message: String,
    /// Component trace, when the renderer provides one.
    pub component_stack: Option<String>,
}

impl CaughtError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            component_stack: None,
        }
    }

    pub fn with_component_stack(mut self, stack: impl Into<String>) -> Self {
        self.component_stack = Some(stack.into());
        self
    }
}

/// The only way out of the fallback screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecoveryAction {
    /// Full reload of the presentation process.
    Reload,
}

impl RecoveryAction {
    /// Value of the button's `data-action` attribute.
    pub fn name(self) -> &'static str {
        match self {
            Self::Reload => "reload",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Reload => RELOAD_LABEL,
        }
    }
}

/// What the boundary renders instead of the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fallback {
    pub message: String,
    pub component_stack: Option<String>,
}

impl Fallback {
    pub fn for_error(error: &CaughtError) -> Self {
        Self {
            message: error.message.clone(),
            component_stack: error.component_stack.clone(),
        }
    }

    /// Both slots present and empty, for `shell.js` to fill.
    pub fn template() -> Self {
        Self {
            message: String::new(),
            component_stack: Some(String::new()),
        }
    }

    pub fn actions(&self) -> &'static [RecoveryAction] {
        &[RecoveryAction::Reload]
    }

    pub fn html(&self) -> String {
        let mut html = format!(
            "<div class=\"cellar-fallback\"><h1>{FALLBACK_TITLE}</h1><p>{FALLBACK_SUMMARY}</p>\
             <p data-slot=\"{MESSAGE_SLOT}\">{}</p>",
            escape_html(&self.message)
        );
        if let Some(stack) = &self.component_stack {
            html.push_str(&format!(
                "<details data-optional=\"{TRACE_SLOT}\"><summary>Stack Trace</summary>\
                 <pre data-slot=\"{TRACE_SLOT}\">{}</pre></details>",
                escape_html(stack)
            ));
        }
        for action in self.actions() {
            html.push_str(&format!(
                "<button type=\"button\" data-action=\"{}\">{}</button>",
                action.name(),
                action.label()
            ));
        }
        html.push_str("</div>");
        html
    }
}
