use structopt::StructOpt;
use structopt::clap::AppSettings;

/// Converts a number between hexadecimal, decimal, octal and binary.
///
/// Usage: radixconv [flag] [value] [flag]
/// Run `radixconv -?` for the list of flags.
#[derive(StructOpt, Debug, Default)]
#[structopt(
    name = "radixconv",
    verbatim_doc_comment,
    settings = &[
        AppSettings::AllowLeadingHyphen,
        AppSettings::DisableHelpFlags,
        AppSettings::DisableVersion,
        AppSettings::TrailingVarArg,
    ],
)]
pub struct Opt {
    /// Source flag, value and destination flag, e.g. `-h 1A -d`.
    /// Flags like `-h` must reach the converter verbatim, so they are kept as plain arguments.
    #[structopt(name = "ARGS", allow_hyphen_values = true)]
    pub args: Vec<String>,
}

impl Opt {
    pub fn new<S: Into<String>>(args: Vec<S>) -> Self {
        return Opt { args: args.into_iter().map(|a| a.into()).collect() };
    }
}
