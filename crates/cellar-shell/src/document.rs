//! The bootstrap document loaded into the main window.
//!
//! `index.html` pulls in `shell.js`, which installs the global error
//! handlers and keeps `#root` in step with the URL fragment. Which view a
//! path gets and the markup for not-found, loading and the error fallback
//! are all decided on the Rust side and embedded as `config`; the script
//! looks paths up, loads screen scripts and fills the fallback slots.

use serde_json::json;

use crate::boundary::{Fallback, MESSAGE_SLOT, TRACE_SLOT};
use crate::markup::{escape_html, loading_html, not_found_html};
use crate::routes::{RouteTable, Screen};

pub const INDEX_FILE: &str = "index.html";
pub const SHELL_FILE: &str = "shell.js";

/// Entries kept by `window.__cellarErrors()`, newest first.
pub const MAX_RECORDED_ERRORS: usize = 100;

#[derive(Debug, Clone)]
pub struct ShellDocument {
    pub title: String,
    pub background: String,
    pub routes: RouteTable,
}

impl ShellDocument {
    pub fn new(title: impl Into<String>, background: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            background: background.into(),
            routes: RouteTable::default(),
        }
    }

    pub fn index_html(&self) -> String {
        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{title}</title>
<style>
  html, body {{ margin: 0; height: 100%; background: {background}; font-family: system-ui, sans-serif; }}
  #root {{ height: 100%; }}
  .cellar-center {{ display: flex; align-items: center; justify-content: center; height: 100%; text-align: center; }}
  .cellar-fallback pre {{ max-height: 16rem; overflow: auto; text-align: left; font-size: 12px; }}
</style>
</head>
<body>
<div id="root"></div>
<script src="{shell}"></script>
</body>
</html>
"#,
            title = escape_html(&self.title),
            background = escape_html(&self.background),
            shell = SHELL_FILE,
        )
    }

    /// Everything `shell.js` reads at runtime.
    pub fn config(&self) -> serde_json::Value {
        json!({
            "views": self.routes.to_json(),
            "notFoundHtml": not_found_html(),
            "loadingHtml": loading_html(),
            "fallbackHtml": Fallback::template().html(),
            "slots": { "message": MESSAGE_SLOT, "trace": TRACE_SLOT },
            "maxErrors": MAX_RECORDED_ERRORS,
        })
    }

    pub fn shell_js(&self) -> String {
        format!("(function (config) {{\n{SHELL_BODY}}})({});\n", self.config())
    }

    /// Placeholder script for `screen`, registering a render function.
    pub fn screen_script(screen: Screen) -> String {
        let path = json!(screen.path());
        let title = json!(screen.title());
        format!(
            "window.__cellarScreens = window.__cellarScreens || {{}};\n\
             window.__cellarScreens[{path}] = function (root) {{\n  \
             var heading = document.createElement('h2');\n  \
             heading.textContent = {title};\n  \
             root.appendChild(heading);\n\
             }};\n"
        )
    }
}

const SHELL_BODY: &str = r#"  'use strict';
  var errorLog = [];
  function recordError(message, stack, componentStack) {
    errorLog.unshift({
      message: message || 'Unknown error',
      stack: stack || null,
      componentStack: componentStack || null,
      timestamp: new Date().toISOString(),
      url: window.location.href
    });
    if (errorLog.length > config.maxErrors) { errorLog.length = config.maxErrors; }
  }
  window.addEventListener('error', function (event) {
    console.error('Global error:', event.message);
    recordError(event.message, event.error && event.error.stack);
  });
  window.addEventListener('unhandledrejection', function (event) {
    console.error('Unhandled promise rejection:', event.reason);
    recordError('Unhandled Promise Rejection: ' + event.reason, event.reason && event.reason.stack);
  });
  Object.defineProperty(window, '__cellarErrors', {
    value: function () { return errorLog.slice(); }
  });

  var screens = window.__cellarScreens = window.__cellarScreens || {};
  var loading = {};
  var caught = null;

  function loadScreen(path, view) {
    if (screens[path]) { return Promise.resolve(screens[path]); }
    if (!loading[path]) {
      loading[path] = new Promise(function (resolve, reject) {
        var script = document.createElement('script');
        script.src = view.module;
        script.onload = function () {
          if (screens[path]) { resolve(screens[path]); }
          else { reject(new Error('Screen did not register: ' + path)); }
        };
        script.onerror = function () {
          delete loading[path];
          reject(new Error('Failed to load ' + view.module));
        };
        document.head.appendChild(script);
      });
    }
    return loading[path];
  }

  function slot(root, name) {
    return root.querySelector('[data-slot="' + name + '"]');
  }

  function showFallback(root) {
    root.innerHTML = config.fallbackHtml;
    slot(root, config.slots.message).textContent = caught.message;
    if (caught.componentStack) {
      slot(root, config.slots.trace).textContent = caught.componentStack;
    } else {
      var details = root.querySelector('[data-optional="' + config.slots.trace + '"]');
      details.parentNode.removeChild(details);
    }
    root.querySelectorAll('[data-action="reload"]').forEach(function (button) {
      button.addEventListener('click', function () { window.location.reload(); });
    });
  }

  function screenFailed(root, error) {
    console.error('Uncaught error:', error);
    caught = {
      message: (error && error.message) || String(error),
      componentStack: (error && error.stack) || null
    };
    recordError(caught.message, null, caught.componentStack);
    showFallback(root);
  }

  function currentPath() {
    var hash = window.location.hash.replace(/^#/, '');
    return hash.split(/[?#]/)[0].replace(/^\/+|\/+$/g, '');
  }

  function render() {
    var root = document.getElementById('root');
    if (!root) { throw new Error('Root element not found'); }
    if (caught) { showFallback(root); return; }

    var path = currentPath();
    var view = config.views[path];
    if (!view) { root.innerHTML = config.notFoundHtml; return; }
    if (view.redirect) { window.location.replace('#' + view.redirect); return; }

    root.innerHTML = config.loadingHtml;
    loadScreen(path, view).then(function (screen) {
      if (currentPath() !== path) { return; }
      try {
        root.innerHTML = '';
        screen(root, window.cellarAPI);
      } catch (error) {
        screenFailed(root, error);
      }
    }, function (error) {
      screenFailed(root, error);
    });
  }

  window.addEventListener('hashchange', render);
  if (document.readyState === 'loading') {
    document.addEventListener('DOMContentLoaded', render);
  } else {
    render();
  }
"#;
