//! Tests that run the JS compiler driver under node against stub packages.

use heft::CompilerError;
use heft::adapter::{BridgeRequest, JsBridge, JsRuntime, SvelteGenerate};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const STUB_PACKAGE_JSON: &str = r#"{
  "name": "stubsvelte",
  "type": "module",
  "exports": {
    "./compiler": "./compiler.js"
  }
}
"#;

// Echoes the requested target and the source so the test can see both
// made it through the request.
const STUB_COMPILER: &str = r#"export function compile(source, options) {
  return { js: { code: `/*${options.generate}*/export default ${JSON.stringify(source)}` } };
}
"#;

fn node_available() -> bool {
    std::process::Command::new("node")
        .arg("--version")
        .output()
        .is_ok_and(|out| out.status.success())
}

fn create_stub_project() -> TempDir {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let pkg = temp.path().join("node_modules/stubsvelte");
    fs::create_dir_all(&pkg).expect("create package dir");
    fs::write(pkg.join("package.json"), STUB_PACKAGE_JSON).expect("write package.json");
    fs::write(pkg.join("compiler.js"), STUB_COMPILER).expect("write compiler.js");
    temp
}

async fn run_svelte(cwd: &Path, generate: SvelteGenerate) -> Result<String, CompilerError> {
    let request = BridgeRequest::Svelte {
        filename: "App.svelte",
        source: "<h1>ü</h1>",
        compiler: "stubsvelte/compiler",
        generate,
    };
    JsBridge::new(JsRuntime::Node).run(&request, cwd).await
}

#[tokio::test]
async fn test_svelte_request_round_trips_through_driver() {
    if !node_available() {
        eprintln!("Skipping test_svelte_request_round_trips_through_driver: node not on PATH");
        return;
    }
    let project = create_stub_project();

    let code = run_svelte(project.path(), SvelteGenerate::Client)
        .await
        .expect("driver should succeed");
    assert_eq!(code, "/*client*/export default \"<h1>ü</h1>\"");

    let legacy = run_svelte(project.path(), SvelteGenerate::Dom)
        .await
        .expect("driver should succeed");
    assert!(legacy.starts_with("/*dom*/"), "{legacy}");
}

#[tokio::test]
async fn test_missing_compiler_package_is_exit_error() {
    if !node_available() {
        eprintln!("Skipping test_missing_compiler_package_is_exit_error: node not on PATH");
        return;
    }
    // No node_modules at all, so `@vue/compiler-sfc` cannot resolve.
    let project = TempDir::new().expect("Failed to create temp dir");
    let request = BridgeRequest::Vue {
        filename: "App.vue",
        source: "<template><p>hi</p></template>",
        id: "app",
    };

    let err = JsBridge::new(JsRuntime::Node)
        .run(&request, project.path())
        .await
        .expect_err("missing package should fail");

    match err {
        CompilerError::Exit { exit_code, stderr } => {
            assert_ne!(exit_code, 0);
            assert!(!stderr.is_empty());
            assert!(stderr.contains("@vue/compiler-sfc"), "{stderr}");
        }
        other => panic!("expected exit error, got {other:?}"),
    }
}
