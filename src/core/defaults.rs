//! Compiled-in defaults for the endpoint sweep.

/// Deployment tree swept when no root argument is given.
pub const DEFAULT_ROOT: &str = "/app/aton/wapps/aldrovandi";

/// File extensions eligible for patching, compared ASCII case-insensitively.
pub const PATCH_EXTENSIONS: &[&str] = &["js", "json", "html", "py", "config"];

/// Directory names pruned from traversal at any depth.
pub const SKIP_DIRS: &[&str] = &["node_modules"];
