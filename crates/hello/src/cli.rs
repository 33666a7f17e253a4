use std::ffi::OsString;

use clap::Parser;

#[derive(Parser)]
#[command(name = "hello")]
#[command(about = "Print a greeting from the embedded config")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Accepted and ignored
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    pub args: Vec<OsString>,
}
