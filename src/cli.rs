use crate::option;
use crate::convert;
use crate::error;

use radix_rs as rx;
use std::io;

const HELP_FLAG: &str = "-?";

/// Runs the command described by `opt`.
/// Results go to `writer`. Non-fatal diagnostics go to `err_writer`; fatal ones are returned.
pub fn dispatch(opt: &option::Opt, writer: &mut dyn io::Write, err_writer: &mut dyn io::Write)
    -> Result<(), error::Error> {
    let args = &opt.args;
    if args.len() == 1 {
        if args[0] == HELP_FLAG {
            help(writer)?;
            return Ok(());
        }
        return Err(error::Error::Usage("Unrecognized flag.".into()));
    }
    if args.len() != 3 {
        return Err(error::Error::Usage("Invalid syntax.".into()));
    }
    return run(&args[0], &args[1], &args[2], writer, err_writer);
}

fn run(src_flag: &str, digits: &str, dst_flag: &str, writer: &mut dyn io::Write, err_writer: &mut dyn io::Write)
    -> Result<(), error::Error> {
    if ! src_flag.starts_with('-') || ! dst_flag.starts_with('-') {
        return Err(error::Error::Usage("Unrecognized flag.".into()));
    }

    let src = base_of(src_flag)?;
    let num_digits = count_digits(digits);
    let max = src.max_input_digits();
    if num_digits > max {
        return Err(error::Error::LengthLimit { digits: num_digits, max });
    }
    let dst = base_of(dst_flag)?;
    if digits.matches('.').count() > 1 {
        return Err(error::Error::Usage(rx::Error::MultiplePoints(digits.into()).to_string()));
    }

    // the trivial case is echoed verbatim
    if src == dst {
        writeln!(writer, "{}", digits)?;
        return Ok(());
    }
    return convert::convert(digits, src, dst, writer, err_writer);
}

fn base_of(flag: &str) -> Result<rx::Base, error::Error> {
    let mut chars = flag.chars().skip(1);
    return match (chars.next(), chars.next()) {
        (Some(c), None) => rx::Base::from_flag(c),
        _ => None,
    }.ok_or_else(|| error::Error::UnknownFlag(flag.into()));
}

// The decimal point doesn't count.
fn count_digits(digits: &str) -> usize {
    return digits.chars().filter(|c| *c != '.').count();
}

fn help(writer: &mut dyn io::Write) -> io::Result<()> {
    writeln!(writer, "Proper usage: {} [flag] [value] [flag]", env!("CARGO_PKG_NAME"))?;
    writeln!(writer, "Available Flags:")?;
    // widest base first
    for base in rx::Base::ALL.iter().rev() {
        writeln!(writer, "-{}\t{}", base.flag(), base)?;
    }
    writeln!(writer, "First flag indicates the base of value; second flag indicates the new base to convert to.")?;
    return Ok(());
}
