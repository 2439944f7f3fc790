// Route path constants - single source of truth for all API paths

pub const API: &str = "/api";
pub const HEALTH: &str = "/health";
