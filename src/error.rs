use std::io;
use std::fmt;

pub const HELP_HINT: &str = "Type radixconv -? for help.";

#[derive(Debug)]
pub enum Error {
    /// Wrong argument count or malformed flag syntax.
    Usage(String),
    UnknownFlag(String),
    LengthLimit{digits: usize, max: usize},
    Convert(radix_rs::Error),
    Io(io::Error),
}

impl Error {
    pub fn error_code(&self) -> exitcode::ExitCode {
        return match self {
            Error::Io(_) => exitcode::IOERR,
            _ => 1,
        };
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        return match self {
            Error::Convert(source) => Some(source),
            Error::Io(source) => Some(source),
            _ => None,
        };
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Usage(message) => write!(f, "{} {}", message, HELP_HINT),
            Error::UnknownFlag(flag)
                => write!(f, "Unrecognized flag. Flag must be -d, -h, -o, or -b, got {}.", flag),
            Error::LengthLimit{digits, max}
                => write!(f, "Max length is 8 digits (4 for hexadecimal). Got {} digits, {} allowed.", digits, max),
            Error::Convert(source) => write!(f, "{}", source),
            Error::Io(source) => write!(f, "Error writing output\nCaused By: {}", source),
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        return Error::Io(err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hint_only_on_usage() {
        let usage = Error::Usage("Invalid syntax.".into());
        assert_eq!("Invalid syntax. Type radixconv -? for help.", usage.to_string());
        let convert = Error::Convert(radix_rs::Error::ValueOutOfRange{value: -1.0, base: radix_rs::Base::Binary});
        assert_eq!("The value -1 is invalid in base 2.", convert.to_string());
        assert_eq!(1, convert.error_code());
    }

    #[test]
    fn io_error_code() {
        let err = Error::from(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
        assert_eq!(exitcode::IOERR, err.error_code());
    }
}
