use std::env;
use std::fs;
use std::path::Path;

/// Claves que la app lee con option_env! (ver src/config.rs)
const KNOWN_KEYS: &[&str] = &["BACKEND_URL", "ENVIRONMENT", "ENABLE_LOGGING"];

fn main() {
    let env_file = Path::new(".env");

    if env_file.exists() {
        println!("cargo:rerun-if-changed=.env");

        if let Ok(contents) = fs::read_to_string(env_file) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }

                let Some((key, value)) = line.split_once('=') else {
                    continue;
                };
                let key = key.trim();
                let value = value.trim().trim_matches('"');

                if !KNOWN_KEYS.contains(&key) {
                    println!("cargo:warning=Clave desconocida en .env ignorada: {}", key);
                    continue;
                }

                // Las variables del entorno real tienen prioridad sobre .env
                if env::var(key).is_err() {
                    println!("cargo:rustc-env={}={}", key, value);
                }
            }
        }
    }

    for key in KNOWN_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }
    println!("cargo:rerun-if-changed=build.rs");
}
