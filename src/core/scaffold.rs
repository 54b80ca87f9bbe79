//! Runtime scaffold generation.
//!
//! Every run writes one `i18n.ts` module under the output root. Rewritten
//! files import `t` from it; it scopes every lookup to the namespace the
//! run was invoked with.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::config::RUNTIME_MODULE;

/// Source text of the runtime module for the given namespace.
pub fn runtime_module_source(namespace: &str) -> String {
    format!(
        r#"import i18next, {{ TOptions, StringMap }} from 'i18next';

export const NAMESPACE = '{namespace}';

export const t = (keys: string | string[], options?: TOptions<StringMap>): string => {{
  return i18next.t(keys, {{...options, ns: NAMESPACE}})
}}
"#
    )
}

/// Write the runtime module as `<output_root>/i18n.ts`.
pub fn write_runtime_module(output_root: &Path, namespace: &str) -> Result<PathBuf> {
    let path = output_root.join(format!("{RUNTIME_MODULE}.ts"));
    fs::create_dir_all(output_root)
        .with_context(|| format!("Failed to create directory: {}", output_root.display()))?;
    fs::write(&path, runtime_module_source(namespace))
        .with_context(|| format!("Failed to write file: {}", path.display()))?;
    Ok(path)
}
