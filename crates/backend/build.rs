use std::env;
use std::fs;
use std::path::Path;

// Copies the workspace config.toml (and the sample data directory) next to
// the built binary, so `cargo run -p backend` finds them out of the box.
fn main() {
    println!("cargo:rerun-if-changed=../../config.toml");

    let out_dir = env::var("OUT_DIR").unwrap();
    let profile = env::var("PROFILE").unwrap();

    // OUT_DIR is target/<profile>/build/backend-xxx/out; walk up to target/<profile>
    let out_path = Path::new(&out_dir);
    let target_dir = out_path
        .ancestors()
        .find(|p| p.ends_with(&profile))
        .expect("Could not find target profile directory");

    let workspace_root = Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .and_then(|p| p.parent())
        .expect("Could not find workspace root");

    let source_config = workspace_root.join("config.toml");
    if source_config.exists() {
        fs::copy(&source_config, target_dir.join("config.toml"))
            .unwrap_or_else(|e| panic!("Failed to copy config.toml: {}", e));
    }

    let source_data = workspace_root.join("data");
    if source_data.is_dir() {
        let dest_data = target_dir.join("data");
        fs::create_dir_all(&dest_data).expect("Failed to create data directory");
        for entry in fs::read_dir(&source_data).expect("Failed to read data directory") {
            let entry = entry.expect("Failed to read data directory entry");
            if entry.path().is_file() {
                fs::copy(entry.path(), dest_data.join(entry.file_name()))
                    .unwrap_or_else(|e| panic!("Failed to copy data file: {}", e));
            }
        }
    }
}
