use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "stint", about = concat!("stint v", env!("CARGO_PKG_VERSION"), " - backlog, ready, done"), version)]
pub struct Cli {
    /// Data directory holding the list stores (default: current directory)
    #[arg(short = 'C', long = "dir")]
    pub dir: Option<PathBuf>,

    /// Read configuration from this file instead of <dir>/stint.toml
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write debug logs to <dir>/stint.log
    #[arg(long)]
    pub verbose: bool,
}

impl Cli {
    pub fn data_dir(&self) -> PathBuf {
        self.dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_current_directory() {
        let cli = Cli::try_parse_from(["stint"]).unwrap();
        assert_eq!(cli.data_dir(), PathBuf::from("."));
        assert!(cli.config.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn accepts_dir_config_and_verbose() {
        let cli =
            Cli::try_parse_from(["stint", "-C", "/tmp/lists", "--config", "my.toml", "--verbose"])
                .unwrap();
        assert_eq!(cli.data_dir(), PathBuf::from("/tmp/lists"));
        assert_eq!(cli.config, Some(PathBuf::from("my.toml")));
        assert!(cli.verbose);

        let long = Cli::try_parse_from(["stint", "--dir", "x"]).unwrap();
        assert_eq!(long.data_dir(), PathBuf::from("x"));
    }

    #[test]
    fn rejects_subcommands() {
        assert!(Cli::try_parse_from(["stint", "list"]).is_err());
    }
}
