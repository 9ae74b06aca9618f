//! Test utilities and helper functions for the htmlcompressor test suite

use kodegen_tools_htmlcompressor::{
    MinifyError, ScriptMinifyOptions, StyleMinifyOptions,
};
use std::sync::Once;

static TRACING: Once = Once::new();

/// Route pipeline logs to the test output, filtered by `RUST_LOG`
#[allow(dead_code)]
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Creates a test HTML document with specified content
#[allow(dead_code)]
pub fn create_test_html(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>{title}</title>
</head>
<body>
    {body}
</body>
</html>"#
    )
}

/// Script "minifier" that drops all whitespace, so tests can see it ran
#[allow(dead_code)]
pub fn squash_script(source: &str, _options: &ScriptMinifyOptions) -> Result<String, MinifyError> {
    Ok(source.split_whitespace().collect())
}

/// Style "minifier" that drops all whitespace
#[allow(dead_code)]
pub fn squash_style(source: &str, _options: &StyleMinifyOptions) -> Result<String, MinifyError> {
    Ok(source.split_whitespace().collect())
}

/// Script minifier that rejects anything containing `syntax error`
#[allow(dead_code)]
pub fn strict_script(source: &str, options: &ScriptMinifyOptions) -> Result<String, MinifyError> {
    if source.contains("syntax error") {
        return Err(MinifyError::Parse(format!("cannot parse {source:?}")));
    }
    squash_script(source, options)
}
