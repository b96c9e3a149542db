//! Dependency extraction: find every static inclusion call in a module's
//! text, rewrite its argument to a canonical id, and report the resolved
//! dependency paths.
//!
//! oxc stays fully contained in this module: text goes in, text and paths
//! come out. Resolution policy is injected as a closure so the syntax layer
//! knows nothing about extension probing or graph bookkeeping.

use std::path::{Path, PathBuf};

use oxc_allocator::Allocator;
use oxc_ast::ast::{Argument, CallExpression, Expression};
use oxc_ast_visit::{VisitMut, walk_mut};
use oxc_codegen::Codegen;
use oxc_parser::Parser;
use oxc_span::{Atom, SourceType};

use crate::module_id::ModuleId;
use crate::{Error, Result};

/// Outcome of one extraction pass over a module's text.
#[derive(Debug)]
pub struct Extraction {
    /// The module text with every inclusion argument rewritten to a
    /// canonical id.
    pub source: String,
    /// Resolved absolute dependency paths, in traversal order.
    pub dependencies: Vec<PathBuf>,
}

/// Parse `source`, rewrite every `include_primitive('<request>')` call whose
/// first argument is a string literal, and print the result.
///
/// `resolve` maps a raw request to its canonical id and resolved path; its
/// first failure aborts the extraction. Calls with a non-literal or absent
/// first argument are left untouched. Traversal follows the parser's source
/// order, so the dependency list is stable across builds.
pub fn rewrite_includes<F>(
    source: &str,
    path: &Path,
    include_primitive: &str,
    resolve: F,
) -> Result<Extraction>
where
    F: FnMut(&str) -> Result<(ModuleId, PathBuf)>,
{
    let allocator = Allocator::default();
    let parsed = Parser::new(&allocator, source, SourceType::cjs()).parse();

    if !parsed.errors.is_empty() {
        let message = parsed
            .errors
            .iter()
            .map(|error| format!("{error:?}"))
            .collect::<Vec<_>>()
            .join("; ");
        return Err(Error::Parse {
            path: path.to_path_buf(),
            message,
        });
    }

    let mut program = parsed.program;
    let mut rewriter = IncludeRewriter {
        allocator: &allocator,
        include_primitive,
        resolve,
        dependencies: Vec::new(),
        failure: None,
    };
    rewriter.visit_program(&mut program);

    if let Some(failure) = rewriter.failure {
        return Err(failure);
    }

    let code = Codegen::new().build(&program).code;
    Ok(Extraction {
        source: code,
        dependencies: rewriter.dependencies,
    })
}

struct IncludeRewriter<'a, 'p, F> {
    allocator: &'a Allocator,
    include_primitive: &'p str,
    resolve: F,
    dependencies: Vec<PathBuf>,
    failure: Option<Error>,
}

impl<'a, F> IncludeRewriter<'a, '_, F>
where
    F: FnMut(&str) -> Result<(ModuleId, PathBuf)>,
{
    fn rewrite_call(&mut self, call: &mut CallExpression<'a>) {
        if self.failure.is_some() {
            return;
        }
        let Expression::Identifier(ident) = &call.callee else {
            return;
        };
        if ident.name.as_str() != self.include_primitive {
            return;
        }
        let Some(Argument::StringLiteral(literal)) = call.arguments.first_mut() else {
            return;
        };

        let request = literal.value.as_str().to_string();
        match (self.resolve)(&request) {
            Ok((id, resolved)) => {
                let rewritten: &str = self.allocator.alloc_str(id.as_str());
                literal.value = Atom::from(rewritten);
                literal.raw = None;
                self.dependencies.push(resolved);
            }
            Err(error) => self.failure = Some(error),
        }
    }
}

impl<'a, F> VisitMut<'a> for IncludeRewriter<'a, '_, F>
where
    F: FnMut(&str) -> Result<(ModuleId, PathBuf)>,
{
    fn visit_call_expression(&mut self, call: &mut CallExpression<'a>) {
        self.rewrite_call(call);
        walk_mut::walk_call_expression(self, call);
    }
}
