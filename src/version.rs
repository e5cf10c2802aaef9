/// Version string embedded by `build.rs`: `GIT_VERSION` from the build
/// environment, `git describe`, or `v<package version>-dev`.
pub const GIT_VERSION: &str = env!("GIT_VERSION");
