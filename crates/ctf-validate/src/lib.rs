//! Structural semantic validator for the CTF metadata AST.
//!
//! [`validate`] runs the two passes in fixed order: the parent-link pass
//! (`ctf_ast::link_parents`) followed by the semantic-check pass
//! (`check::check_tree`), emitting a progress line around each and
//! returning the first non-zero error code it encounters.

mod check;
pub mod error;
mod rules;
pub mod sink;

use std::rc::Rc;

use ctf_ast::Node;

pub use error::ValidationError;
pub use sink::{DiagnosticSink, VecSink, WriteSink};

fn fail<T>(sink: &mut dyn DiagnosticSink, err: ValidationError) -> Result<T, ValidationError> {
    sink.emit_line(&err.to_string());
    Err(err)
}

/// Runs both passes over `root` and returns the upstream-style return code:
/// `0` on success, a negative errno-equivalent on the first failure.
pub fn validate(root: &Rc<Node>, sink: &mut dyn DiagnosticSink) -> i32 {
    match validate_checked(root, sink) {
        Ok(()) => 0,
        Err(err) => err.code(),
    }
}

/// Same as [`validate`] but surfaces the [`ValidationError`] itself rather
/// than flattening it to a return code, for callers that want to match on
/// the failure kind.
pub fn validate_checked(root: &Rc<Node>, sink: &mut dyn DiagnosticSink) -> Result<(), ValidationError> {
    sink.emit_line("CTF visitor: parent links creation...");
    ctf_ast::link_parents(root);
    sink.emit_line("CTF visitor: parent links creation... done.");

    sink.emit_line("CTF visitor: semantic check...");
    check::check_tree(root, sink)?;
    sink.emit_line("CTF visitor: semantic check... done.");
    Ok(())
}
