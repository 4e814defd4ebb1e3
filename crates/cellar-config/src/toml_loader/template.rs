//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# Cellar Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[app]
# name = "Liquor Store Management System"
# version = "1.0.1"

[runtime]
# mode = "production"       # production, development (or CELLAR_ENV)

[api]
# base_url = "http://localhost:5000/api"   # or CELLAR_API_URL

[window]
# width = 1366
# height = 768
# min_width = 1280
# min_height = 720
# background = "#f9fafb"

[content]
# dev_url = "http://localhost:5173/"       # or CELLAR_DEV_SERVER_URL
# index_path = "/opt/cellar/dist/index.html"

[retry]
# Development only: reload the dev server after a failed load.
# delay_ms = 2000
# backoff = 1.0
# max_retries = 10

[logging]
# level = "info"            # debug, info, warn, error (or CELLAR_LOG)
"##
}
