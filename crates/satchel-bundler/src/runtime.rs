//! Runtime emission: synthesize one self-executing asset per chunk.
//!
//! The asset carries a module table (canonical id → instantiation
//! function), a minimal `require` that caches exports by id, and the entry
//! module's body inlined as the initiator. The exports container is
//! registered in the cache *before* the module body runs, so a module
//! reached through an inclusion cycle sees a partially populated exports
//! object instead of recursing forever.

use std::fmt::Write as _;

use satchel_graph::ModuleGraph;

use crate::chunk::Chunk;
use crate::{Error, Result};

/// Render the self-contained runtime text for `chunk`.
///
/// Guarantees of the emitted code: a module body executes at most once per
/// asset instantiation, and two `require` calls for the same id return the
/// identical exports object.
pub fn render_chunk(chunk: &Chunk, graph: &ModuleGraph) -> Result<String> {
    let entry = graph.get(&chunk.entry).ok_or_else(|| Error::MissingModule {
        chunk: chunk.name.clone(),
        id: chunk.entry.clone(),
    })?;

    let mut table = String::new();
    for id in &chunk.modules {
        let module = graph.get(id).ok_or_else(|| Error::MissingModule {
            chunk: chunk.name.clone(),
            id: id.clone(),
        })?;
        let _ = write!(
            table,
            "    {}: (module) => {{\n{}\n    }},\n",
            js_string(id.as_str()),
            module.source
        );
    }

    Ok(format!(
        r#"(() => {{
  var modules = {{
{table}  }};
  var cache = {{}};
  var require = (moduleId) => {{
    if (cache[moduleId]) {{
      return cache[moduleId].exports;
    }}
    var module = (cache[moduleId] = {{ exports: {{}} }});
    modules[moduleId](module);
    return module.exports;
  }};
{entry_body}
}})();
"#,
        entry_body = entry.source
    ))
}

/// Quote `value` as a JavaScript string literal.
fn js_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for ch in value.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            other => out.push(other),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use std::fs;

    use satchel_graph::{FsLoader, GraphBuilder, ModuleGraph};

    use super::*;
    use crate::chunk;

    #[test]
    fn js_string_escapes_specials() {
        assert_eq!(js_string("src/a.js"), "\"src/a.js\"");
        assert_eq!(js_string("a\"b\\c"), "\"a\\\"b\\\\c\"");
    }

    #[test]
    fn rendered_asset_contains_table_runtime_and_entry_body() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join("b.js"), "module.exports = 42;\n").unwrap();
        fs::write(root.join("a.js"), "const b = require('./b');\n").unwrap();

        let extensions = vec![".js".to_string()];
        let mut graph = ModuleGraph::new();
        let mut builder = GraphBuilder::new(root, &extensions, &FsLoader);
        let entry = builder
            .build_entry(&mut graph, "main", &root.join("a.js"))
            .unwrap();
        let chunk = chunk::assemble("main", entry, &graph);

        let asset = render_chunk(&chunk, &graph).unwrap();

        // module table keyed by canonical ids
        assert!(asset.contains("\"b.js\": (module) => {"));
        assert!(asset.contains("\"a.js\": (module) => {"));
        // the entry body runs directly and references the rewritten id
        assert!(asset.contains("require(\"b.js\")"));
        // loader runtime with cache-before-execute ordering
        let register = asset
            .find("cache[moduleId] = { exports: {} }")
            .expect("cache registration");
        let execute = asset
            .find("modules[moduleId](module)")
            .expect("module execution");
        assert!(register < execute);
        // self-executing wrapper
        assert!(asset.starts_with("(() => {"));
        assert!(asset.trim_end().ends_with("})();"));
    }

    #[test]
    fn missing_entry_module_is_an_error() {
        let graph = ModuleGraph::new();
        let chunk = Chunk {
            name: "main".to_string(),
            entry: satchel_graph::ModuleId::from_path(
                std::path::Path::new("/p"),
                std::path::Path::new("/p/a.js"),
            )
            .unwrap(),
            modules: Vec::new(),
        };

        let err = render_chunk(&chunk, &graph).unwrap_err();
        assert!(matches!(err, Error::MissingModule { .. }));
    }
}
