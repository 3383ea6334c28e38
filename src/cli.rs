use crate::types::OutputMode;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "matrix-summary")]
#[command(about = "Summarize CI build and test result logs into a failure report")]
#[command(version)]
pub struct CliArgs {
    /// Directory containing result logs
    #[arg(long, short = 'd', value_name = "DIR")]
    pub dir: PathBuf,

    /// Display a Markdown-formatted table
    #[arg(long, conflicts_with = "github_log")]
    pub markdown: bool,

    /// Display a single-line GitHub Actions log annotation
    #[arg(long = "github_log")]
    pub github_log: bool,
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        CliArgs::parse()
    }

    /// The output mode the flags select
    pub fn output_mode(&self) -> OutputMode {
        if self.markdown {
            OutputMode::Markdown
        } else if self.github_log {
            OutputMode::GithubLog
        } else {
            OutputMode::Log
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_select_output_mode() {
        let args = CliArgs { dir: PathBuf::from("logs"), markdown: false, github_log: false };
        assert_eq!(args.output_mode(), OutputMode::Log);

        let args = CliArgs { dir: PathBuf::from("logs"), markdown: true, github_log: false };
        assert_eq!(args.output_mode(), OutputMode::Markdown);

        let args = CliArgs { dir: PathBuf::from("logs"), markdown: false, github_log: true };
        assert_eq!(args.output_mode(), OutputMode::GithubLog);
    }

    #[test]
    fn test_output_flags_conflict() {
        let parsed = CliArgs::try_parse_from([
            "matrix-summary",
            "--dir",
            "logs",
            "--markdown",
            "--github_log",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_dir_is_required() {
        assert!(CliArgs::try_parse_from(["matrix-summary", "--markdown"]).is_err());
    }

    #[test]
    fn test_short_dir_flag() {
        let args = CliArgs::try_parse_from(["matrix-summary", "-d", "test_logs"]).unwrap();
        assert_eq!(args.dir, PathBuf::from("test_logs"));
        assert_eq!(args.output_mode(), OutputMode::Log);
    }
}
