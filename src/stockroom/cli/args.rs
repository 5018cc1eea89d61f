use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "stockroom", version)]
#[command(about = "Interactive inventory manager backed by a CSV file", long_about = None)]
pub struct Cli {
    /// Data file to load at start and save on exit (overrides stockroom.json)
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Keep previous output instead of clearing the screen before each redraw
    #[arg(long)]
    pub no_clear: bool,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_flags() {
        let cli = Cli::try_parse_from(["stockroom"]).unwrap();
        assert!(cli.file.is_none());
        assert!(!cli.no_clear);
        assert!(!cli.verbose);
    }

    #[test]
    fn parses_all_flags() {
        let cli =
            Cli::try_parse_from(["stockroom", "-f", "shop.csv", "--no-clear", "-v"]).unwrap();
        assert_eq!(cli.file, Some(PathBuf::from("shop.csv")));
        assert!(cli.no_clear);
        assert!(cli.verbose);
    }

    #[test]
    fn rejects_subcommands() {
        assert!(Cli::try_parse_from(["stockroom", "add"]).is_err());
    }
}
