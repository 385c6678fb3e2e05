//! Embedded asset catalog (prompt template and `init` scaffolding).
//!
//! Assets are compiled into the binary and resolved by path relative to
//! `src/assets/`.

use include_dir::{Dir, include_dir};

static ASSETS_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets");

/// Files written by `civlab init`, as (asset path, destination relative to the workspace).
pub const INIT_FILES: [(&str, &str); 2] =
    [("init/civlab.toml", "civlab.toml"), ("init/scenarios.yaml", "config/scenarios.yaml")];

/// Read an embedded asset by its relative path (e.g. `"prompts/feedback_prompt.j2"`).
pub fn read_asset(path: &str) -> Option<String> {
    ASSETS_DIR.get_file(path).and_then(|file| file.contents_utf8()).map(|s| s.to_string())
}
