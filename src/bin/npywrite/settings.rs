use std::env;
use std::path::Path;

pub fn key_or_default(key: &str, default: &str) -> String {
    match env::var(key) {
        Ok(val) => val,
        Err(_) => default.into(),
    }
}

pub fn key_or_none(key: &str) -> Option<String> {
    match env::var(key) {
        Ok(val) => Some(val),
        Err(_) => None,
    }
}

/// "true" and "1" switch a flag on, "false" and "0" off, anything else keeps the cli value
pub fn flag_or_env(cli_setting: bool, key: &str) -> bool {
    match key_or_none(key) {
        Some(s) => match s.as_ref() {
            "true" | "1" => true,
            "false" | "0" => false,
            _ => cli_setting,
        },
        None => cli_setting,
    }
}

/// input: string. csv file to read
/// output: string. .npy file to write
/// has_headers: boolean. skip the first csv record
/// log_file: optional string. also log to this file
#[derive(Clone, Debug)]
pub struct Settings {
    pub input: String,
    pub output: String,
    pub has_headers: bool,
    pub log_file: Option<String>,
    pub verbosity: u8,
}

/// `data/foo.csv` -> `data/foo.npy`
pub fn default_output(input: &str) -> String {
    Path::new(input)
        .with_extension("npy")
        .to_string_lossy()
        .into_owned()
}
