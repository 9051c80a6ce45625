use std::fs;

const CONFIG_PATH: &str = "src/default_config.toml";

// Every bundled default must exist and be a boolean, so that
// `Config::compiled_default` never falls back silently.
const REQUIRED_FLAGS: &[(&str, &str)] = &[
    ("headings", "close_open_lists"),
    ("output", "trailing_newline"),
];

fn main() {
    println!("cargo:rerun-if-changed={CONFIG_PATH}");

    let content = fs::read_to_string(CONFIG_PATH).expect("Failed to read default_config.toml");
    let table = match content.parse::<toml::Table>() {
        Ok(table) => table,
        Err(e) => panic!("Invalid default_config.toml: {e}"),
    };

    for (section, key) in REQUIRED_FLAGS {
        let value = table
            .get(*section)
            .and_then(|s| s.get(*key))
            .unwrap_or_else(|| panic!("default_config.toml is missing [{section}] {key}"));
        if !value.is_bool() {
            panic!("default_config.toml: [{section}] {key} must be a boolean");
        }
    }
}
