use std::path::PathBuf;

use clap::Parser;

/// Recents: lay out the windows of a desktop inside an overview tile.
#[derive(Parser, Debug)]
#[command(name = "recents", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override (e.g. debug, recents=trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// JSON file with the desktop's windows. Read from stdin when omitted.
    #[arg(short = 'w', long)]
    pub windows: Option<PathBuf>,

    /// Tile width in pixels.
    #[arg(long, default_value_t = 400)]
    pub width: i32,

    /// Tile height in pixels, including the title margin.
    #[arg(long, default_value_t = 220)]
    pub height: i32,

    /// Give every window a dedicated surface instead of using the pool.
    #[arg(long)]
    pub direct: bool,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["recents"]).unwrap();
        assert!(args.config.is_none());
        assert!(args.windows.is_none());
        assert_eq!((args.width, args.height), (400, 220));
        assert!(!args.direct);
    }

    #[test]
    fn all_flags() {
        let args = Args::try_parse_from([
            "recents",
            "--config",
            "/tmp/recents.toml",
            "--log-level",
            "debug",
            "-w",
            "windows.json",
            "--width",
            "640",
            "--height",
            "360",
            "--direct",
        ])
        .unwrap();
        assert_eq!(args.config, Some(PathBuf::from("/tmp/recents.toml")));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert_eq!(args.windows, Some(PathBuf::from("windows.json")));
        assert_eq!((args.width, args.height), (640, 360));
        assert!(args.direct);
    }

    #[test]
    fn rejects_non_numeric_size() {
        assert!(Args::try_parse_from(["recents", "--width", "wide"]).is_err());
    }
}
