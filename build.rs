use std::env;
use std::path::Path;

use url::Url;

#[path = "src/config/labels.rs"]
mod labels;

/// Production values, forwarded to the compiler for `option_env!`
const PRODUCTION_KEYS: [&str; 5] = [
    "COFFEE_SHOP_API_SERVER_URL",
    "COFFEE_SHOP_AUTH_DOMAIN_PREFIX",
    "COFFEE_SHOP_AUTH_AUDIENCE",
    "COFFEE_SHOP_AUTH_CLIENT_ID",
    "COFFEE_SHOP_AUTH_CALLBACK_URL",
];

const URL_KEYS: [&str; 2] = ["COFFEE_SHOP_API_SERVER_URL", "COFFEE_SHOP_AUTH_CALLBACK_URL"];

const DOMAIN_PREFIX_KEY: &str = "COFFEE_SHOP_AUTH_DOMAIN_PREFIX";

fn main() {
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let env_file = Path::new(&manifest_dir).join(".env.production");

    // Exported variables take precedence over the file
    if env_file.exists() {
        dotenvy::from_path(&env_file)
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", env_file.display(), e));
        println!("cargo:rerun-if-changed={}", env_file.display());
    }
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=src/config/labels.rs");

    let mut missing = Vec::new();

    for key in PRODUCTION_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);

        let Ok(value) = env::var(key) else {
            missing.push(key);
            continue;
        };

        if value.trim().is_empty() {
            panic!("{} is set but empty", key);
        }
        if URL_KEYS.contains(&key) {
            check_absolute_url(key, &value);
        }
        if key == DOMAIN_PREFIX_KEY && !labels::is_hostname_segment(&value) {
            panic!(
                "{} must be dot-separated hostname labels (ASCII alphanumerics and '-'), got {}",
                key, value
            );
        }

        println!("cargo:rustc-env={}={}", key, value);
    }

    let production_selected = env::var_os("CARGO_FEATURE_PRODUCTION").is_some();

    if production_selected && !missing.is_empty() {
        panic!(
            "No configuration declared for variant 'production': missing {}",
            missing.join(", ")
        );
    }

    if !missing.is_empty() && missing.len() < PRODUCTION_KEYS.len() {
        println!(
            "cargo:warning=Incomplete production configuration, missing {}",
            missing.join(", ")
        );
    }
}

fn check_absolute_url(key: &str, value: &str) {
    let url = Url::parse(value)
        .unwrap_or_else(|e| panic!("{} is not an absolute URL ({}): {}", key, value, e));

    if !matches!(url.scheme(), "http" | "https") || !url.has_host() {
        panic!("{} must be an http(s) URL with a host, got {}", key, value);
    }
}
