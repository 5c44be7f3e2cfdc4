use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    about = "Replays a recorded trackball session and reports the helper geometry per frame",
    version
)]
pub struct Args {
    /// Path to the RON session to replay
    #[arg(long)]
    pub session: PathBuf,

    /// Optional RON arcball configuration (radius bounds, key bindings)
    #[arg(long)]
    pub arcball_config: Option<PathBuf>,

    /// Optional RON helper configuration (visibility, colors, tessellation)
    #[arg(long)]
    pub helper_config: Option<PathBuf>,

    /// Path to write the JSON report to instead of stdout
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Pretty-print the JSON report
    #[arg(long)]
    pub pretty: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_args() {
        let args = Args::try_parse_from([
            "tb-replay",
            "--session",
            "demos/drag.ron",
            "--helper-config",
            "helper.ron",
            "--pretty",
        ])
        .unwrap();
        assert_eq!(args.session, PathBuf::from("demos/drag.ron"));
        assert_eq!(args.helper_config, Some(PathBuf::from("helper.ron")));
        assert!(args.arcball_config.is_none());
        assert!(args.output.is_none());
        assert!(args.pretty);
    }

    #[test]
    fn test_session_is_required() {
        assert!(Args::try_parse_from(["tb-replay", "--pretty"]).is_err());
    }
}
