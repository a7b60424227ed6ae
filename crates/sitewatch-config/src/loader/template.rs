//! Starter config file with inline documentation comments.

/// Generate the starter TOML content.
pub(crate) fn default_config_toml() -> String {
    r##"# sitewatch configuration
# Relative paths resolve against the directory containing this file.
# Every key can be overridden with a SITEWATCH_* environment variable.

# Directory watched for changes.
working_directory = "public"

# Directory served to the browser.
server_root = "public"

# Files that trigger a reload when they change.
watch_patterns = ["**/*.html", "**/*.css", "**/*.js"]

# On-screen notifications.
notify = false

# Verbose diagnostic output.
debug = true

# Wait this long after a change before reloading (milliseconds, >= 0).
reload_delay_ms = 500

# Uncomment to serve over HTTPS. Both files must exist.
# [tls]
# key_path = "certs/localhost-key.pem"
# cert_path = "certs/localhost.pem"
"##
    .to_string()
}
