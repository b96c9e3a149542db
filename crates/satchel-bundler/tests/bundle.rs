//! End-to-end bundling tests over real fixture trees.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use regex::Regex;

use satchel_bundler::{
    BuildResult, Compiler, Config, Error, FnTransform, LoaderRule, Module,
};
use satchel_config::Entry;

fn write(root: &Path, name: &str, content: &str) {
    let path = root.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn config_for(root: &Path, entry: &str) -> Config {
    let mut config = Config::with_entry(entry);
    config.context = Some(root.to_path_buf());
    config
}

fn module<'a>(result: &'a BuildResult, id: &str) -> &'a Module {
    result
        .modules
        .iter()
        .find(|module| module.id.as_str() == id)
        .unwrap_or_else(|| panic!("module '{id}' not in result"))
}

#[test]
fn single_entry_with_one_dependency() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write(root, "src/a.js", "const b = require('./b');\n");
    write(root, "src/b.js", "module.exports = 42;\n");

    let compiler = Compiler::new(config_for(root, "src/a.js")).unwrap();
    let result = compiler.run().unwrap();

    // one chunk named main, two modules
    assert_eq!(result.chunks.len(), 1);
    assert_eq!(result.chunks[0].name, "main");
    assert_eq!(result.modules.len(), 2);
    assert_eq!(result.chunks[0].modules.len(), 2);

    // the asset landed at dist/main.js and is self-contained
    assert_eq!(result.assets.len(), 1);
    let asset_path = root.join("dist/main.js");
    assert!(asset_path.is_file());
    let content = fs::read_to_string(&asset_path).unwrap();
    assert_eq!(content, result.assets[0].content);
    assert!(content.contains("\"src/b.js\": (module) => {"));
    assert!(content.contains("module.exports = 42"));
    assert!(content.contains("require(\"src/b.js\")"));

    // both source files were registered for watching
    assert_eq!(result.file_dependencies.len(), 2);
}

#[test]
fn shared_module_appears_once_with_both_owners() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write(root, "x.js", "const shared = require('./shared');\n");
    write(root, "y.js", "const shared = require('./shared');\n");
    write(root, "shared.js", "module.exports = 'shared';\n");

    let mut config = config_for(root, "x.js");
    let mut entries = indexmap::IndexMap::new();
    entries.insert("x".to_string(), "x.js".into());
    entries.insert("y".to_string(), "y.js".into());
    config.entry = Entry::Named(entries);

    let compiler = Compiler::new(config).unwrap();
    let result = compiler.run().unwrap();

    // one module instance, owned by both entries
    let shared = module(&result, "shared.js");
    let owners: Vec<&str> = shared.entries.iter().map(String::as_str).collect();
    assert_eq!(owners, ["x", "y"]);
    assert_eq!(result.modules.len(), 3);

    // both chunks carry it
    for chunk in &result.chunks {
        assert!(
            chunk
                .modules
                .iter()
                .any(|id| id.as_str() == "shared.js"),
            "chunk '{}' misses shared.js",
            chunk.name
        );
    }

    // one asset per entry
    assert!(root.join("dist/x.js").is_file());
    assert!(root.join("dist/y.js").is_file());
}

#[test]
fn missing_dependency_fails_and_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write(root, "a.js", "require('./missing');\n");

    let compiler = Compiler::new(config_for(root, "a.js")).unwrap();
    let error = compiler.run().unwrap_err();

    match error {
        Error::Graph(satchel_graph::Error::Resolve { request, .. }) => {
            assert_eq!(request, "./missing");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(!root.join("dist").exists());
}

#[test]
fn missing_entry_fails_with_a_resolution_error() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();

    let compiler = Compiler::new(config_for(root, "absent.js")).unwrap();
    assert!(matches!(
        compiler.run().unwrap_err(),
        Error::Graph(satchel_graph::Error::Resolve { .. })
    ));
}

#[test]
fn entry_resolves_through_configured_extensions() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write(root, "src/index.js", "module.exports = 'entry';\n");

    // entry spelled without extension
    let compiler = Compiler::new(config_for(root, "src/index")).unwrap();
    let result = compiler.run().unwrap();

    assert_eq!(result.modules[0].id.as_str(), "src/index.js");
}

#[test]
fn programmatic_transforms_apply_right_to_left() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write(root, "index.js", "module.exports = 1;\n");

    let mut compiler = Compiler::new(config_for(root, "index.js")).unwrap();
    compiler.add_rule(
        LoaderRule::new(Regex::new(r"\.js$").unwrap())
            .with_transform(Arc::new(FnTransform::new("t1", |source: String, _: &Path| {
                Ok(format!("{source}var applied_t1 = true;\n"))
            })))
            .with_transform(Arc::new(FnTransform::new("t2", |source: String, _: &Path| {
                Ok(format!("{source}var applied_t2 = true;\n"))
            }))),
    );

    let result = compiler.run().unwrap();
    let source = &module(&result, "index.js").source;

    // use = [t1, t2] runs t1(t2(code)): t2 appends first, t1 appends last
    let t2_at = source.find("applied_t2").expect("t2 ran");
    let t1_at = source.find("applied_t1").expect("t1 ran");
    assert!(t2_at < t1_at, "expected t1(t2(code)) ordering in {source}");
}

#[test]
fn configured_rule_strips_debugger_statements() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write(root, "index.js", "module.exports = 1;\n");

    let mut config = config_for(root, "index.js");
    config.module.rules.push(satchel_config::Rule {
        test: r"\.js$".to_string(),
        transforms: vec!["strip-debugger".to_string()],
    });
    write(root, "index.js", "debugger;\nmodule.exports = 1;\n");

    let compiler = Compiler::new(config).unwrap();
    let result = compiler.run().unwrap();

    assert!(!module(&result, "index.js").source.contains("debugger"));
}

#[test]
fn back_to_back_builds_are_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write(root, "a.js", "const b = require('./b');\nconst c = require('./c');\n");
    write(root, "b.js", "module.exports = require('./c');\n");
    write(root, "c.js", "module.exports = 3;\n");

    let compiler = Compiler::new(config_for(root, "a.js")).unwrap();
    compiler.run().unwrap();
    let first = fs::read(root.join("dist/main.js")).unwrap();
    compiler.run().unwrap();
    let second = fs::read(root.join("dist/main.js")).unwrap();

    assert_eq!(first, second);
}

#[test]
fn cyclic_includes_build_and_emit_cycle_tolerant_runtime() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write(root, "a.js", "require('./b');\nmodule.exports = 'a';\n");
    write(root, "b.js", "require('./a');\nmodule.exports = 'b';\n");

    let compiler = Compiler::new(config_for(root, "a.js")).unwrap();
    let result = compiler.run().unwrap();

    assert_eq!(result.modules.len(), 2);
    let content = &result.assets[0].content;
    // cache registration precedes module execution, so the cycle resolves
    let register = content.find("cache[moduleId] = { exports: {} }").unwrap();
    let execute = content.find("modules[moduleId](module)").unwrap();
    assert!(register < execute);
}

#[test]
fn output_pattern_and_directory_are_honored() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write(root, "index.js", "module.exports = 1;\n");

    let mut config = config_for(root, "index.js");
    config.output.path = "build/js".into();
    config.output.filename = "[name].bundle.js".to_string();

    let compiler = Compiler::new(config).unwrap();
    let result = compiler.run().unwrap();

    let expected = root.canonicalize().unwrap().join("build/js/main.bundle.js");
    assert_eq!(result.assets[0].path, expected);
    assert!(result.assets[0].path.is_file());
}

#[test]
fn build_result_serializes_with_conventional_keys() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write(root, "index.js", "module.exports = 1;\n");

    let compiler = Compiler::new(config_for(root, "index.js")).unwrap();
    let result = compiler.run().unwrap();

    let json = serde_json::to_value(&result).unwrap();
    assert!(json["assets"].is_array());
    assert!(json["fileDependencies"].is_array());
    assert_eq!(json["chunks"][0]["module"], "index.js");
    assert!(json["chunks"][0]["relativeModules"].is_array());
}
