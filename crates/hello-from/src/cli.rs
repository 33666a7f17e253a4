use std::borrow::Cow;
use std::ffi::OsString;

use clap::Parser;

#[derive(Parser)]
#[command(name = "hello-from")]
#[command(about = "Print a greeting with a \"from\" label")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Label printed after "from" (defaults to the toolchain version); extra values are ignored
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<OsString>,
}

impl Cli {
    /// Parse raw process arguments, treating every one after the binary name as a value
    pub fn parse_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::parse_from(escaped(args))
    }

    #[cfg(test)]
    pub fn try_parse_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::try_parse_from(escaped(args))
    }

    pub fn message(&self) -> Option<Cow<'_, str>> {
        self.args.first().map(|arg| arg.to_string_lossy())
    }
}

// A leading `--` puts clap in trailing mode, so a later `--` is kept as a value
fn escaped<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args = args.into_iter().map(Into::into);
    let bin = args.next().unwrap_or_else(|| OsString::from("hello-from"));
    std::iter::once(bin)
        .chain(std::iter::once(OsString::from("--")))
        .chain(args)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_no_args() {
        let cli = Cli::try_parse_args(["hello-from"]).unwrap();
        assert_eq!(cli.message(), None);
    }

    #[test]
    fn test_cli_parse_message() {
        let cli = Cli::try_parse_args(["hello-from", "X"]).unwrap();
        assert_eq!(cli.message().as_deref(), Some("X"));
    }

    #[test]
    fn test_cli_takes_first_of_many() {
        let cli = Cli::try_parse_args(["hello-from", "first", "second"]).unwrap();
        assert_eq!(cli.message().as_deref(), Some("first"));
    }

    #[test]
    fn test_cli_flags_are_messages() {
        for flag in ["--help", "-h", "--version", "-V"] {
            let cli = Cli::try_parse_args(["hello-from", flag]);
            assert!(cli.is_ok(), "Failed to parse {}", flag);
            assert_eq!(cli.unwrap().message().as_deref(), Some(flag));
        }
    }

    #[test]
    fn test_cli_double_dash_is_message() {
        let cli = Cli::try_parse_args(["hello-from", "--"]).unwrap();
        assert_eq!(cli.message().as_deref(), Some("--"));

        let cli = Cli::try_parse_args(["hello-from", "--", "X"]).unwrap();
        assert_eq!(cli.message().as_deref(), Some("--"));
    }

    #[cfg(unix)]
    #[test]
    fn test_cli_non_utf8_message() {
        use std::os::unix::ffi::OsStringExt;

        let arg = OsString::from_vec(b"a\xffb".to_vec());
        let cli = Cli::try_parse_args([OsString::from("hello-from"), arg]).unwrap();
        assert_eq!(cli.message().as_deref(), Some("a\u{FFFD}b"));
    }
}
