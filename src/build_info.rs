//! Compile-time build metadata exposed to the CLI.

/// Semver package version from `Cargo.toml`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// VCS commit hash captured at build time.
pub const GIT_COMMIT: &str = env!("AGENT_PROFILES_BUILD_GIT_HASH");

/// Build timestamp captured at compile time.
pub const BUILD_TIMESTAMP: &str = env!("AGENT_PROFILES_BUILD_TIMESTAMP");

/// Version block used by `agent-profiles --version`.
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\ncommit: ",
    env!("AGENT_PROFILES_BUILD_GIT_HASH"),
    "\nbuilt: ",
    env!("AGENT_PROFILES_BUILD_TIMESTAMP")
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_version_includes_expected_lines() {
        assert!(LONG_VERSION.starts_with(VERSION));
        assert!(LONG_VERSION.contains(&format!("commit: {GIT_COMMIT}")));
        assert!(LONG_VERSION.contains(&format!("built: {BUILD_TIMESTAMP}")));
    }
}
