use std::path::PathBuf;

pub fn default_config_path() -> PathBuf {
    PathBuf::from("pubcheck.yaml")
}

pub fn default_model() -> String {
    "phi3:mini".to_string()
}

pub fn default_base_url() -> String {
    "http://localhost:11434".to_string()
}

pub fn default_timeout_sec() -> u64 {
    300
}

pub fn default_concurrency() -> usize {
    4
}

pub fn default_min_content_chars() -> usize {
    25 // Matches the submission form's minimum
}

pub fn default_true() -> bool {
    true
}
