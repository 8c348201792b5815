use crate::error;

use radix_rs as rx;
use std::io;

/// Converts `digits` from `src` to `dst` and writes the result line to `writer`.
/// Invalid digits are reported to `err_writer` and count as zero; they don't fail the conversion.
pub fn convert(digits: &str, src: rx::Base, dst: rx::Base, writer: &mut dyn io::Write, err_writer: &mut dyn io::Write)
    -> Result<(), error::Error> {

    let conversion = rx::Converter::new(src, dst)
        .convert(digits)
        .map_err(map_convert_err)?;
    for invalid in conversion.invalid_digits.iter() {
        writeln!(err_writer, "{}", invalid)?;
    }
    writeln!(writer, "{}", conversion.output)?;
    return Ok(());
}

fn map_convert_err(err: rx::Error) -> error::Error {
    if let rx::Error::MultiplePoints(_) = err {
        return error::Error::Usage(err.to_string());
    }
    return error::Error::Convert(err);
}
