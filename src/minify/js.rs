//! JavaScript minification via oxc

use oxc::allocator::Allocator;
use oxc::codegen::{Codegen, CodegenOptions};
use oxc::minifier::{CompressOptions, MangleOptions, Minifier, MinifierOptions};
use oxc::parser::Parser;
use oxc::span::SourceType;

use super::{ScriptMinifier, ScriptMinifyOptions};
use crate::error::MinifyError;

/// Script minifier backed by [`oxc`]
///
/// `no_rename_locals` turns mangling off and `disable_optimizations` turns
/// compression off. oxc always drops redundant semicolons and never wraps
/// lines, so those two options are ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct OxcScriptMinifier;

impl OxcScriptMinifier {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ScriptMinifier for OxcScriptMinifier {
    fn minify(&self, source: &str, options: &ScriptMinifyOptions) -> Result<String, MinifyError> {
        if options.preserve_semicolons || options.line_wrap().is_some() {
            log::debug!("oxc ignores semicolon preservation and line wrapping");
        }

        let allocator = Allocator::default();
        let parsed = Parser::new(&allocator, source, SourceType::cjs()).parse();
        if !parsed.errors.is_empty() {
            let messages: Vec<String> = parsed.errors.iter().map(ToString::to_string).collect();
            return Err(MinifyError::Parse(messages.join("; ")));
        }

        let mut program = parsed.program;
        let minifier_options = MinifierOptions {
            mangle: (!options.no_rename_locals).then(MangleOptions::default),
            compress: (!options.disable_optimizations).then(CompressOptions::default),
        };
        let minified = Minifier::new(minifier_options).minify(&allocator, &mut program);

        let code = Codegen::new()
            .with_options(CodegenOptions::minify())
            .with_scoping(minified.scoping)
            .build(&program)
            .code;

        log::debug!(
            "minified script from {} to {} bytes",
            source.len(),
            code.len()
        );
        Ok(code)
    }
}
