use std::env;
use std::fs;
use std::path::Path;

fn main() {
    println!("cargo:rerun-if-changed=config.toml");

    let config_path = Path::new("config.toml");
    if !config_path.exists() {
        return;
    }

    // Copy config.toml next to the built executable
    let Ok(out_dir) = env::var("OUT_DIR") else {
        return;
    };
    let Some(target_dir) = Path::new(&out_dir).ancestors().nth(3) else {
        return;
    };

    if let Err(e) = fs::copy(config_path, target_dir.join("config.toml")) {
        println!("cargo:warning=could not copy config.toml: {}", e);
    }
}
