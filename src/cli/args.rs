//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! The tool takes no arguments. Anything passed on the command line,
//! including `--help`, `--version`, and bytes that are not UTF-8, is
//! accepted and ignored.

use clap::Parser;
use std::ffi::OsString;

/// Verification stub for the dbtpl duplicate function fix
#[derive(Parser, Debug, Default)]
#[command(name = "dbtpl-fixcheck")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Ignored
    #[arg(
        hide = true,
        trailing_var_arg = true,
        allow_hyphen_values = true,
        num_args = 0..,
        value_parser = clap::value_parser!(OsString)
    )]
    pub ignored: Vec<OsString>,
}

impl Cli {
    /// Parse command-line arguments.
    ///
    /// Never fails: arguments clap cannot parse are dropped along with the
    /// rest.
    pub fn parse_args() -> Self {
        Self::try_parse().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments() {
        let cli = Cli::try_parse_from(["dbtpl-fixcheck"]).unwrap();
        assert!(cli.ignored.is_empty());
    }

    #[test]
    fn arbitrary_arguments_are_captured() {
        let cli =
            Cli::try_parse_from(["dbtpl-fixcheck", "--help", "-x", "schema.sql", "--version"])
                .unwrap();
        assert_eq!(cli.ignored, ["--help", "-x", "schema.sql", "--version"]);
    }

    #[test]
    fn leading_double_dash_is_accepted() {
        assert!(Cli::try_parse_from(["dbtpl-fixcheck", "--", "anything"]).is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_argument_is_captured() {
        use std::os::unix::ffi::OsStringExt;

        let raw = OsString::from_vec(vec![0x66, 0xff, 0x6f]);
        let cli = Cli::try_parse_from([OsString::from("dbtpl-fixcheck"), raw.clone()]).unwrap();
        assert_eq!(cli.ignored, [raw]);
    }

    #[test]
    fn command_carries_no_version_or_author() {
        use clap::CommandFactory;
        let cmd = Cli::command();
        assert!(cmd.get_version().is_none());
        assert!(cmd.get_author().is_none());
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
