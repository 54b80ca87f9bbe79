//! The single-pass rewrite visitor.
//!
//! Walks a parsed module once, replacing every text-bearing node that
//! contains Vietnamese diacritics with a call to the translation function,
//! and collecting the catalog entries produced along the way. Markup
//! context is known structurally: JSX text children and JSX attribute
//! string values are rewritten through their own typed visitor hooks and
//! wrapped in a `JSXExprContainer` so the call stays valid markup content,
//! while plain expression positions receive the call directly.
//!
//! A replaced node's substitute is never re-visited, so literals nested
//! inside a moved sub-expression are left alone — matching the behavior of
//! a one-shot extraction pass.

use std::path::Path;

use swc_common::util::take::Take;
use swc_common::{DUMMY_SP, SourceMap, SourceMapper, Span, SyntaxContext};
use swc_ecma_ast::{
    CallExpr, Callee, Expr, ExprOrSpread, Ident, JSXAttrValue, JSXElementChild, JSXExpr,
    JSXExprContainer, KeyValueProp, Lit, Module, ObjectLit, Prop, PropName, PropOrSpread, Str,
};
use swc_ecma_visit::{VisitMut, VisitMutWith};

use crate::config::TRANSLATION_FN;
use crate::utils::contains_vietnamese;

use super::keygen::{KeyGenerator, normalize_text};
use super::template::{RewrittenTemplate, rewrite_template};

/// Per-file result of the rewrite pass.
pub struct FileExtraction {
    /// Key→text pairs in encounter order (pre-order over the tree).
    pub entries: Vec<(String, String)>,
    /// True if at least one node was replaced; gates the import injection
    /// and the re-print (untouched files are copied byte-for-byte).
    pub rewritten: bool,
}

/// Rewrite `module` in place and collect its catalog entries.
///
/// `relative_path` is the file's path under the source root; it seeds the
/// synthetic-key prefix.
pub fn rewrite_module(
    module: &mut Module,
    source_map: &SourceMap,
    relative_path: &Path,
) -> FileExtraction {
    let mut rewriter = TextRewriter {
        source_map,
        keygen: KeyGenerator::new(relative_path),
        entries: Vec::new(),
        rewritten: false,
    };
    module.visit_mut_with(&mut rewriter);

    FileExtraction {
        entries: rewriter.entries,
        rewritten: rewriter.rewritten,
    }
}

struct TextRewriter<'a> {
    source_map: &'a SourceMap,
    keygen: KeyGenerator,
    entries: Vec<(String, String)>,
    rewritten: bool,
}

impl TextRewriter<'_> {
    /// Raw source snippet for a span, falling back to the cooked value when
    /// the span cannot be resolved.
    fn raw_text(&self, span: Span, cooked: &str) -> String {
        self.source_map
            .span_to_snippet(span)
            .unwrap_or_else(|_| cooked.to_string())
    }

    /// `t("<key>")`
    fn lookup_call(&mut self, raw: &str) -> Expr {
        let text = normalize_text(raw);
        let key = self.keygen.key_for(&text);
        self.entries.push((key.clone(), text));
        self.rewritten = true;
        t_call(vec![str_arg(key)])
    }

    /// `t("<text>", { "<name>": <expr>, ... })`
    fn interpolation_call(&mut self, rewritten: RewrittenTemplate) -> Expr {
        let RewrittenTemplate { text, params } = rewritten;
        self.entries.push((text.clone(), text.clone()));
        self.rewritten = true;

        let props = params
            .into_iter()
            .map(|(name, expr)| {
                PropOrSpread::Prop(Box::new(Prop::KeyValue(KeyValueProp {
                    key: PropName::Str(Str::from(name)),
                    value: expr,
                })))
            })
            .collect();

        t_call(vec![
            str_arg(text),
            ExprOrSpread {
                spread: None,
                expr: Box::new(Expr::Object(ObjectLit {
                    span: DUMMY_SP,
                    props,
                })),
            },
        ])
    }

    /// Replacement for an expression-position candidate, or None when the
    /// node is not a candidate.
    fn rewrite_expr(&mut self, expr: &mut Expr) -> Option<Expr> {
        match expr {
            Expr::Lit(Lit::Str(s)) => {
                let cooked = s.value.as_str()?;
                let raw = self.raw_text(s.span, cooked);
                if !contains_vietnamese(&raw) {
                    return None;
                }
                Some(self.lookup_call(&raw))
            }
            // uninterpolated backtick strings are not candidates, only
            // templates with at least one `${...}` span
            Expr::Tpl(tpl) if !tpl.exprs.is_empty() => {
                let raw = self.source_map.span_to_snippet(tpl.span).ok()?;
                if !contains_vietnamese(&raw) {
                    return None;
                }
                let rewritten = rewrite_template(tpl.take(), &raw, self.source_map);
                Some(self.interpolation_call(rewritten))
            }
            _ => None,
        }
    }
}

impl VisitMut for TextRewriter<'_> {
    fn visit_mut_expr(&mut self, expr: &mut Expr) {
        if let Some(replacement) = self.rewrite_expr(expr) {
            *expr = replacement;
            return;
        }
        expr.visit_mut_children_with(self);
    }

    fn visit_mut_jsx_element_child(&mut self, child: &mut JSXElementChild) {
        if let JSXElementChild::JSXText(text) = child
            && contains_vietnamese(&text.value)
        {
            let call = self.lookup_call(&text.value);
            *child = JSXElementChild::JSXExprContainer(jsx_container(call));
            return;
        }
        child.visit_mut_children_with(self);
    }

    fn visit_mut_jsx_attr_value(&mut self, value: &mut JSXAttrValue) {
        if let JSXAttrValue::Str(s) = value
            && let Some(cooked) = s.value.as_str()
        {
            let raw = self.raw_text(s.span, cooked);
            if contains_vietnamese(&raw) {
                let call = self.lookup_call(&raw);
                *value = JSXAttrValue::JSXExprContainer(jsx_container(call));
                return;
            }
        }
        value.visit_mut_children_with(self);
    }
}

fn t_call(args: Vec<ExprOrSpread>) -> Expr {
    Expr::Call(CallExpr {
        span: DUMMY_SP,
        ctxt: SyntaxContext::empty(),
        callee: Callee::Expr(Box::new(Expr::Ident(Ident::new_no_ctxt(
            TRANSLATION_FN.into(),
            DUMMY_SP,
        )))),
        args,
        type_args: None,
    })
}

fn str_arg(value: String) -> ExprOrSpread {
    ExprOrSpread {
        spread: None,
        expr: Box::new(Expr::Lit(Lit::Str(Str::from(value)))),
    }
}

fn jsx_container(expr: Expr) -> JSXExprContainer {
    JSXExprContainer {
        span: DUMMY_SP,
        expr: JSXExpr::Expr(Box::new(expr)),
    }
}
