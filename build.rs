use std::env;
use std::fs;
use std::path::Path;

/// Claves que la app lee con `option_env!` (ver src/config.rs)
const CONFIG_KEYS: &[&str] = &[
    "BACKEND_URL",
    "IBGE_URL",
    "ENABLE_LOGGING",
    "SURFACE_LOAD_ERRORS",
    "MAP_ZOOM",
    "MAP_TILE_URL",
];

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env");
    for key in CONFIG_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }

    let env_file = Path::new(".env");
    let Ok(contents) = fs::read_to_string(env_file) else {
        println!("cargo:warning=Sin archivo .env: se usan los valores por defecto (ver .env.example)");
        return;
    };

    for (key, value) in contents.lines().filter_map(parse_line) {
        if !CONFIG_KEYS.contains(&key) {
            println!("cargo:warning=Clave desconocida en .env: {}", key);
            continue;
        }
        // Las variables del entorno real tienen prioridad sobre .env
        if env::var(key).is_err() {
            println!("cargo:rustc-env={}={}", key, value);
        }
    }
}

/// `KEY=VALUE`, ignorando comentarios, líneas vacías y comillas alrededor del valor
fn parse_line(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    let (key, value) = line.split_once('=')?;
    let value = value.trim().trim_matches('"');
    Some((key.trim(), value))
}
