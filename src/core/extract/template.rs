//! Template-literal rewriting.
//!
//! An interpolated template like `` `Xin chào ${user.name}` `` becomes the
//! catalog text `"Xin chào {{UserName}}"` plus a parameter list binding each
//! placeholder name to the original sub-expression, which the node replacer
//! turns into `t("Xin chào {{UserName}}", { "UserName": user.name })`.

use swc_common::{SourceMap, SourceMapper, Spanned};
use swc_ecma_ast::{Expr, Tpl};

use super::keygen::normalize_text;

/// Outcome of rewriting one template node. `text` is both the catalog key
/// and the catalog value (templates are always self-keyed, regardless of
/// length); `params` preserves the sub-expressions in source order.
pub struct RewrittenTemplate {
    pub text: String,
    /// Placeholder name → original sub-expression. Names are unique only
    /// within this template; two sub-expressions may derive the same name,
    /// in which case both properties are kept (see below).
    pub params: Vec<(String, Box<Expr>)>,
}

/// Rewrite an interpolated template into placeholder form.
///
/// `raw` is the template's original source snippet (backticks included).
/// Parameter names are derived from each sub-expression's source text:
/// text with a space gets a synthetic `var<n>` name (counter local to this
/// template), a member access has its optional-chaining markers stripped
/// and its segments upper-camel-cased (`user?.name` → `UserName`), anything
/// else is used verbatim.
///
/// Substitution replaces only the first still-unreplaced `${expr}` (then
/// `${ expr }`) occurrence per sub-expression. A pattern that never
/// matches — e.g. a quoted-string sub-expression whose quotes were
/// stripped during normalization — leaves its interpolation literally in
/// the catalog text, unresolved at runtime; its object property still
/// carries the value. Observed catalog output depends on this, so it is
/// covered by tests rather than changed.
pub fn rewrite_template(tpl: Tpl, raw: &str, source_map: &SourceMap) -> RewrittenTemplate {
    let mut text = normalize_text(raw);
    let mut synthetic_index = 0usize;
    let mut params = Vec::with_capacity(tpl.exprs.len());

    for expr in tpl.exprs {
        let source = source_map
            .span_to_snippet(expr.span())
            .map(|snippet| normalize_text(&snippet))
            .unwrap_or_default();

        let name = if source.contains(' ') {
            let name = format!("var{}", synthetic_index);
            synthetic_index += 1;
            name
        } else if source.contains('.') {
            upper_camel_case(&source.replace('?', ""))
        } else {
            source.clone()
        };

        let placeholder = format!("{{{{{}}}}}", name);
        text = text.replacen(&format!("${{{}}}", source), &placeholder, 1);
        text = text.replacen(&format!("${{ {} }}", source), &placeholder, 1);

        params.push((name, expr));
    }

    RewrittenTemplate { text, params }
}

/// `user.profile.name` → `UserProfileName`.
fn upper_camel_case(path: &str) -> String {
    path.split('.')
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}
