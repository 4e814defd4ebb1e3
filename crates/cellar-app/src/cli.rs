use std::path::PathBuf;

use clap::Parser;

/// Cellar: desktop point-of-sale shell for the liquor store.
#[derive(Parser, Debug)]
#[command(name = "cellar", version, about)]
pub struct Args {
    /// Run in development mode (load the dev server, open dev tools).
    #[arg(long)]
    pub dev: bool,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter directive (e.g. `debug`, `cellar=debug,info`).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Write the packaged presentation bundle to DIR and exit.
    #[arg(long, value_name = "DIR")]
    pub export_shell: Option<PathBuf>,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["cellar"]).unwrap();
        assert!(!args.dev);
        assert!(args.config.is_none());
        assert!(args.log_level.is_none());
        assert!(args.export_shell.is_none());
    }

    #[test]
    fn all_flags() {
        let args = Args::try_parse_from([
            "cellar",
            "--dev",
            "--config",
            "/etc/cellar.toml",
            "--log-level",
            "debug",
            "--export-shell",
            "dist",
        ])
        .unwrap();
        assert!(args.dev);
        assert_eq!(args.config, Some(PathBuf::from("/etc/cellar.toml")));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert_eq!(args.export_shell, Some(PathBuf::from("dist")));
    }

    #[test]
    fn rejects_unknown_flag() {
        assert!(Args::try_parse_from(["cellar", "--execute", "ls"]).is_err());
    }
}
