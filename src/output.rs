//! Plain-text export of entropy fields.
//!
//! One line per image row, top to bottom; values left to right separated by
//! a single space. Values are printed with a fixed number of significant
//! digits in the style of C's `%g`.

use crate::error::{MapError, Result};
use crate::field::EntropyField;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Formats `value` with `digits` significant digits, `%g` style: trailing
/// zeros are dropped and exponent notation is used when the decimal exponent
/// is below -4 or at least `digits`.
pub fn format_significant(value: f64, digits: usize) -> String {
    let digits = digits.max(1);
    if value == 0.0 {
        return "0".to_string();
    }
    if !value.is_finite() {
        return if value.is_nan() {
            "nan".to_string()
        } else if value > 0.0 {
            "inf".to_string()
        } else {
            "-inf".to_string()
        };
    }

    // Rounding to `digits` first decides the exponent, as %g does
    let scientific = format!("{:.*e}", digits - 1, value);
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((&scientific, "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= digits as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exponent.abs())
    } else {
        let decimals = (digits as i32 - 1 - exponent).max(0) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

/// Writes `field` as text to `writer`.
pub fn write_text<W: Write>(field: &EntropyField, precision: usize, writer: &mut W) -> std::io::Result<()> {
    for row in field.rows() {
        let mut first = true;
        for &value in row {
            if !first {
                writer.write_all(b" ")?;
            }
            first = false;
            writer.write_all(format_significant(f64::from(value), precision).as_bytes())?;
        }
        writer.write_all(b"\n")?;
    }
    Ok(())
}

/// Writes `field` to the text file at `path`.
pub fn write_field(field: &EntropyField, path: &Path, precision: usize) -> Result<()> {
    let io_err = |source| MapError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    write_text(field, precision, &mut writer).map_err(io_err)?;
    writer.flush().map_err(io_err)
}

/// Output file for `input`: `<stem>_entropy_{w}x{w}.txt` in `output_dir`, or
/// next to the input when no directory is given.
pub fn output_path(input: &Path, output_dir: Option<&Path>, window: usize) -> PathBuf {
    let stem = input.file_stem().unwrap_or_default().to_string_lossy();
    let name = format!("{stem}_entropy_{window}x{window}.txt");
    match output_dir {
        Some(dir) => dir.join(name),
        None => input.with_file_name(name),
    }
}
