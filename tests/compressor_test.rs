//! End-to-end tests for the compression pipeline

use kodegen_tools_htmlcompressor::{
    CompressError, CompressorConfig, HtmlCompressor, MinifyError, RegionKind,
    ScriptMinifyOptions, StyleMinifyOptions, compress_html,
};
use std::sync::Arc;
use std::thread;

mod common;

use common::{create_test_html, init_tracing, squash_script, squash_style, strict_script};

fn plain() -> HtmlCompressor {
    init_tracing();
    HtmlCompressor::new(CompressorConfig::default()).expect("default config is valid")
}

fn with_script_compression() -> HtmlCompressor {
    init_tracing();
    let config = CompressorConfig::builder()
        .compress_script(true)
        .build()
        .expect("valid config");
    HtmlCompressor::new(config)
        .expect("valid config")
        .with_script_minifier(strict_script)
}

fn with_style_compression() -> HtmlCompressor {
    init_tracing();
    let config = CompressorConfig::builder()
        .compress_style(true)
        .build()
        .expect("valid config");
    HtmlCompressor::new(config)
        .expect("valid config")
        .with_style_minifier(squash_style)
}

#[test]
fn test_collapses_whitespace_outside_regions() {
    assert_eq!(plain().compress("a   b\n\n  c").unwrap(), "a b c");
}

#[test]
fn test_strips_comments() {
    assert_eq!(
        plain().compress("<p>x<!-- remove\nme -->y</p>").unwrap(),
        "<p>xy</p>"
    );
}

#[test]
fn test_non_ascii_lookalike_tags_are_plain_text() {
    let html = "<p>  x  </p><\u{17f}cript>a   b</\u{17f}cript>";
    assert_eq!(
        plain().compress(html).unwrap(),
        "<p> x </p><\u{17f}cript>a b</\u{17f}cript>"
    );
}

#[test]
fn test_trims_output() {
    assert_eq!(plain().compress("\n\n  <p>x</p>\n\n").unwrap(), "<p>x</p>");
}

#[test]
fn test_region_only_documents_round_trip() {
    let regions = [
        "<pre class=\"code\">\n  fn main() {\n\t\tprintln!();  }\n</pre>",
        "<TEXTAREA name=\"t\">  line1\n\n  line2 </TEXTAREA>",
        "<script type=\"text/javascript\">\n  var  a = 1;   // keep\n</script>",
        "<style>\n  p  {  color: red;  }\n</style>",
    ];
    for region in regions {
        let document = format!("\n  <!-- lead -->\n {region}  \n\n");
        assert_eq!(plain().compress(&document).unwrap(), region);
    }
}

#[test]
fn test_script_order_is_preserved() {
    let blocks: Vec<String> = (1..=5)
        .map(|n| format!("<script>\n  // block {n}\n  run({n});\n</script>"))
        .collect();
    let document = blocks.join("\n\n<hr>\n\n");

    assert_eq!(plain().compress(&document).unwrap(), blocks.join(" <hr> "));

    let minified = with_script_compression().compress(&document).unwrap();
    let positions: Vec<usize> = (1..=5)
        .map(|n| minified.find(&format!("run({n});")).expect("block present"))
        .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn test_script_inside_pre_is_not_minified() {
    let html = "<pre><script>a  b</script></pre>";
    assert_eq!(with_script_compression().compress(html).unwrap(), html);
}

#[test]
fn test_pre_inside_script_string_is_kept_verbatim() {
    let html = "<script>\n  document.write('<pre>  x  </pre>');\n</script>";
    assert_eq!(plain().compress(html).unwrap(), html);
}

#[test]
fn test_empty_style_never_reaches_minifier() {
    let config = CompressorConfig::builder()
        .compress_style(true)
        .build()
        .unwrap();
    let compressor = HtmlCompressor::new(config).unwrap().with_style_minifier(
        |_: &str, _: &StyleMinifyOptions| -> Result<String, MinifyError> {
            panic!("minifier must not be called for an empty payload")
        },
    );
    assert_eq!(compressor.compress("<style></style>").unwrap(), "<style></style>");
}

#[test]
fn test_minifies_script_and_style_payloads() {
    let config = CompressorConfig::builder()
        .compress_script(true)
        .compress_style(true)
        .build()
        .unwrap();
    let compressor = HtmlCompressor::new(config)
        .unwrap()
        .with_script_minifier(squash_script)
        .with_style_minifier(squash_style);

    let html = "<head>\n  <style media=\"screen\">\n p { margin: 0 }\n</style>\n  \
                <script defer>\n var a = 1;\n</script>\n</head>";
    assert_eq!(
        compressor.compress(html).unwrap(),
        "<head> <style media=\"screen\">p{margin:0}</style> <script defer>vara=1;</script>\n</head>"
    );
}

#[test]
fn test_style_untouched_when_only_script_compression_enabled() {
    let html = "<style>\n  a { b: c }\n</style><script> x  y </script>";
    assert_eq!(
        with_script_compression().compress(html).unwrap(),
        "<style>\n  a { b: c }\n</style><script>xy</script>"
    );
    assert_eq!(
        with_style_compression().compress(html).unwrap(),
        "<style>a{b:c}</style><script> x  y </script>"
    );
}

#[test]
fn test_minifier_failure_fails_the_run() {
    let html = "<p>ok</p><script>syntax error</script>";
    let err = with_script_compression().compress(html).unwrap_err();
    match err {
        CompressError::Minify { kind, source } => {
            assert_eq!(kind, RegionKind::Script);
            assert!(matches!(source, MinifyError::Parse(_)));
        }
        other => panic!("expected minify failure, got {other:?}"),
    }
}

#[test]
fn test_minifier_failure_ignored_when_compression_disabled() {
    let html = "<script>syntax error</script>";
    assert_eq!(plain().compress(html).unwrap(), html);
}

#[test]
fn test_placeholder_text_in_input_is_detected() {
    let html = "<p>%%%COMPRESS~PRE~0%%%</p><pre> a </pre>";
    let err = plain().compress(html).unwrap_err();
    assert!(matches!(
        err,
        CompressError::PlaceholderCollision { ref prefix } if prefix == "%%%COMPRESS~"
    ));
}

#[test]
fn test_comment_spliced_placeholder_is_detected() {
    // Commented-out script must not be revived through a spliced token.
    let revive = "<!-- <script>evil()</script> -->%%%COMPRESS<!---->~SCRIPT~0%%%";
    // Spliced token ahead of a real one must not be reported as internal.
    let shadow = "%%%COMPRESS<!---->~SCRIPT~0%%%<script>a</script>";

    for html in [revive, shadow] {
        let err = plain().compress(html).unwrap_err();
        assert!(!err.is_internal());
        assert!(matches!(err, CompressError::PlaceholderCollision { .. }));
    }
}

#[test]
fn test_comment_spliced_custom_prefix_is_detected() {
    let config = CompressorConfig::builder()
        .placeholder_prefix("@@HTMLCOMPRESSOR@@")
        .placeholder_suffix("@@")
        .build()
        .unwrap();
    let compressor = HtmlCompressor::new(config).unwrap();
    let html = "<!-- <pre>x</pre> -->@@HTML<!-- -->COMPRESSOR@@PRE~0@@";
    assert!(matches!(
        compressor.compress(html),
        Err(CompressError::PlaceholderCollision { .. })
    ));
}

#[test]
fn test_custom_prefix_lets_default_token_through() {
    let config = CompressorConfig::builder()
        .placeholder_prefix("@@HTMLCOMPRESSOR@@")
        .placeholder_suffix("@@")
        .build()
        .unwrap();
    let compressor = HtmlCompressor::new(config).unwrap();
    assert_eq!(
        compressor
            .compress("<p>%%%COMPRESS~PRE~0%%%</p>  <pre> a </pre>")
            .unwrap(),
        "<p>%%%COMPRESS~PRE~0%%%</p> <pre> a </pre>"
    );
}

#[test]
fn test_commented_out_region_is_dropped_without_shifting() {
    let html = "<!-- <pre>old</pre> --><pre>new</pre>\n\n<!-- <script>x</script> --><script>y</script>";
    assert_eq!(
        plain().compress(html).unwrap(),
        "<pre>new</pre> <script>y</script>"
    );
}

#[test]
fn test_full_document() {
    let html = create_test_html(
        "Compressed",
        "<pre>\n x  y\n</pre>\n    <!-- c -->\n    <p>  hi  </p>\n    <textarea>\n\n</textarea>",
    );
    let output = plain().compress(&html).unwrap();

    assert!(output.starts_with("<!DOCTYPE html>"));
    assert!(output.ends_with("</html>"));
    assert!(output.contains("<pre>\n x  y\n</pre>"));
    assert!(output.contains("<textarea>\n\n</textarea>"));
    assert!(output.contains("<p> hi </p>"));
    assert!(!output.contains("<!-- c -->"));

    let outside_regions = output
        .replace("<pre>\n x  y\n</pre>", "PRE")
        .replace("<textarea>\n\n</textarea>", "TEXTAREA");
    assert!(!outside_regions.contains("  "));
}

#[test]
fn test_compress_html_convenience() {
    let config = CompressorConfig::default();
    assert_eq!(
        compress_html("<b>  x  </b>", &config).unwrap(),
        "<b> x </b>"
    );
    assert_eq!(compress_html("", &config).unwrap(), "");
}

#[test]
fn test_concurrent_runs_share_one_compressor() {
    let compressor = Arc::new(with_script_compression());
    let handles: Vec<_> = (0..8)
        .map(|n| {
            let compressor = Arc::clone(&compressor);
            thread::spawn(move || {
                let html = format!("<div>  {n}  </div><script> f({n}) </script><pre> {n} </pre>");
                (n, compressor.compress(&html).unwrap())
            })
        })
        .collect();

    for handle in handles {
        let (n, output) = handle.join().expect("thread completes");
        assert_eq!(
            output,
            format!("<div> {n} </div><script>f({n})</script><pre> {n} </pre>")
        );
    }
}

#[test]
fn test_script_options_follow_config() {
    let config = CompressorConfig::builder()
        .compress_script(true)
        .js_no_rename_locals(true)
        .js_preserve_semicolons(true)
        .js_disable_optimizations(true)
        .js_line_wrap_width(80)
        .build()
        .unwrap();
    let compressor = HtmlCompressor::new(config).unwrap().with_script_minifier(
        |source: &str, options: &ScriptMinifyOptions| -> Result<String, MinifyError> {
            Ok(format!(
                "{}|{}|{}|{}|{}",
                source.trim(),
                options.no_rename_locals,
                options.preserve_semicolons,
                options.disable_optimizations,
                options.line_wrap_width
            ))
        },
    );
    assert_eq!(
        compressor.compress("<script> go() </script>").unwrap(),
        "<script>go()|true|true|true|80</script>"
    );
}
