//! Platform identity strings reported over the bridge.
//!
//! The presentation layer expects the conventional desktop-runtime names
//! (`darwin`, `win32`, `x64`) rather than Rust's target names.

/// Map a Rust `target_os` name to the reported platform string.
pub fn platform_for_os(os: &str) -> &str {
    match os {
        "macos" => "darwin",
        "windows" => "win32",
        other => other,
    }
}

/// Map a Rust `target_arch` name to the reported architecture string.
pub fn arch_for_target(arch: &str) -> &str {
    match arch {
        "x86_64" => "x64",
        "x86" => "ia32",
        "aarch64" => "arm64",
        other => other,
    }
}

pub fn platform_name() -> &'static str {
    platform_for_os(std::env::consts::OS)
}

pub fn arch_name() -> &'static str {
    arch_for_target(std::env::consts::ARCH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_os_names() {
        assert_eq!(platform_for_os("macos"), "darwin");
        assert_eq!(platform_for_os("windows"), "win32");
        assert_eq!(platform_for_os("linux"), "linux");
        assert_eq!(platform_for_os("freebsd"), "freebsd");
    }

    #[test]
    fn maps_arch_names() {
        assert_eq!(arch_for_target("x86_64"), "x64");
        assert_eq!(arch_for_target("aarch64"), "arm64");
        assert_eq!(arch_for_target("x86"), "ia32");
        assert_eq!(arch_for_target("riscv64"), "riscv64");
    }

    #[test]
    fn current_platform_is_not_empty() {
        assert!(!platform_name().is_empty());
        assert!(!arch_name().is_empty());
    }
}
