//! Build script for liquidus-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Parses oven.toml into the embedded profile table

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::PathBuf;

fn main() {
    setup_linker();
    generate_profile_table();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Parse oven.toml and generate the embedded profile table
///
/// Only syntax and field shape are checked here; semantic profile
/// validation (t=0 start, strictly increasing times, resting
/// temperature) stays at startup so a bad profile is refused the same
/// way at runtime regardless of where it came from.
fn generate_profile_table() {
    println!("cargo:rerun-if-changed=oven.toml");

    let raw = fs::read_to_string("oven.toml")
        .expect("oven.toml not found; the firmware requires an embedded profile configuration");

    let doc: toml::Value = toml::from_str(&raw).expect("oven.toml: invalid TOML syntax");

    let min_rest_temp_c = doc
        .get("safety")
        .and_then(|s| s.get("min_rest_temp_c"))
        .and_then(as_number)
        .expect("oven.toml: [safety] min_rest_temp_c missing or not a number");

    let checkpoints = doc
        .get("profile")
        .and_then(|p| p.get("checkpoint"))
        .and_then(|c| c.as_array())
        .expect("oven.toml: no [[profile.checkpoint]] entries");

    let mut rows = String::new();
    for (i, cp) in checkpoints.iter().enumerate() {
        let time = cp
            .get("t")
            .and_then(|v| v.as_integer())
            .unwrap_or_else(|| panic!("oven.toml: checkpoint {i} missing integer `t`"));
        let temp = cp
            .get("temp")
            .and_then(as_number)
            .unwrap_or_else(|| panic!("oven.toml: checkpoint {i} missing numeric `temp`"));

        assert!(
            (0..=u32::MAX as i64).contains(&time),
            "oven.toml: checkpoint {i} time out of range"
        );
        assert!(
            temp.is_finite(),
            "oven.toml: checkpoint {i} temperature is not finite"
        );

        rows.push_str(&format!("    Checkpoint::new({time}, {temp:?}),\n"));
    }

    let generated = format!(
        "// Generated from oven.toml by build.rs - do not edit\n\
         pub const MIN_REST_TEMP_C: f32 = {min_rest_temp_c:?};\n\
         \n\
         pub const PROFILE_TABLE: &[Checkpoint] = &[\n{rows}];\n"
    );

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    fs::write(out_dir.join("profile_data.rs"), generated).unwrap();
}

fn as_number(value: &toml::Value) -> Option<f64> {
    value
        .as_float()
        .or_else(|| value.as_integer().map(|i| i as f64))
}
