pub const CONFIG_FILE: &str = "egor.yaml";
pub mod defaults {
    pub const SERVER_PORT: i64 = 1200;
    pub const LANG: &str = "cpp";
    pub const META_FILE: &str = "egor-meta.json";
    pub const VERSION: &str = "0.1.0";
}
pub mod permission {
    pub const CONFIG_MODE: u32 = 0o600;
}
