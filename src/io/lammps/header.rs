use crate::io::error::Error;
use crate::io::tokenizer::LineCursor;
use crate::io::{ParseOptions, TiltPolicy};
use crate::model::header::Header;

const ATOMS: &str = "atoms";
const ATOM_TYPES: &str = "atom types";
const X_BOUNDS: &str = "xlo xhi";
const Y_BOUNDS: &str = "ylo yhi";
const Z_BOUNDS: &str = "zlo zhi";
const TILT: &str = "xy xz yz";

/// Reads the header block, up to and including the blank line that
/// separates it from the `Atoms` section.
///
/// Lines are read strictly by position: each one is checked for its
/// keyword, never searched for.
pub fn read(cursor: &mut LineCursor<'_>, options: &ParseOptions) -> Result<Header, Error> {
    cursor.skip("title line")?;

    let num_atoms = read_count(cursor, ATOMS, "atom count")?;
    let num_atom_types = read_count(cursor, ATOM_TYPES, "atom type count")?;
    let [xlo, xhi] = read_floats(cursor, X_BOUNDS, "x bounds line", ["xlo", "xhi"])?;
    let [ylo, yhi] = read_floats(cursor, Y_BOUNDS, "y bounds line", ["ylo", "yhi"])?;
    let [zlo, zhi] = read_floats(cursor, Z_BOUNDS, "z bounds line", ["zlo", "zhi"])?;
    let [xy, xz, yz] = read_tilt(cursor, options.tilt)?;

    let header = Header {
        num_atoms,
        num_atom_types,
        xlo,
        xhi,
        ylo,
        yhi,
        zlo,
        zhi,
        xy,
        xz,
        yz,
    };

    tracing::debug!(
        num_atoms,
        num_atom_types,
        bounds = ?[xlo, xhi, ylo, yhi, zlo, zhi],
        tilt = ?[xy, xz, yz],
        "parsed LAMMPS data header"
    );

    Ok(header)
}

fn read_count(
    cursor: &mut LineCursor<'_>,
    keyword: &'static str,
    field: &'static str,
) -> Result<usize, Error> {
    let line = cursor.next_line(|| format!("the '{keyword}' header line"))?;
    line.require(keyword)?;
    line.tokens().require(field, "count line", 1)
}

fn read_floats<const N: usize>(
    cursor: &mut LineCursor<'_>,
    keyword: &'static str,
    record: &'static str,
    fields: [&'static str; N],
) -> Result<[f32; N], Error> {
    let line = cursor.next_line(|| format!("the '{keyword}' header line"))?;
    line.require(keyword)?;

    let mut tokens = line.tokens();
    let mut values = [0.0; N];
    for (value, field) in values.iter_mut().zip(fields) {
        *value = tokens.require(field, record, N)?;
    }
    Ok(values)
}

fn read_tilt(cursor: &mut LineCursor<'_>, policy: TiltPolicy) -> Result<[f32; 3], Error> {
    let line = cursor.next_line(|| format!("the '{TILT}' header line"))?;

    if policy == TiltPolicy::Optional && !line.contains(TILT) {
        // The line just read is the header separator.
        tracing::debug!(line = line.number, "no tilt line, treating box as orthogonal");
        return Ok([0.0; 3]);
    }

    line.require(TILT)?;
    let mut tokens = line.tokens();
    let mut tilt = [0.0; 3];
    for (value, field) in tilt.iter_mut().zip(["xy", "xz", "yz"]) {
        *value = tokens.require(field, "tilt line", 3)?;
    }

    cursor.skip("the blank line after the header")?;
    Ok(tilt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::error::ErrorKind;

    const TRICLINIC: &str = "LAMMPS data file\n\
        3 atoms\n\
        2 atom types\n\
        -1.5 10.0 xlo xhi\n\
        0.0 20.0 ylo yhi\n\
        0.0 30.0 zlo zhi\n\
        1.0 2.0 3.0 xy xz yz\n\
        \n\
        Atoms # atomic\n";

    fn read_str(text: &str, options: &ParseOptions) -> Result<(Header, usize), Error> {
        let mut cursor = LineCursor::new(text);
        let header = read(&mut cursor, options)?;
        Ok((header, cursor.consumed()))
    }

    #[test]
    fn reads_counts_bounds_and_tilt() {
        let (header, consumed) = read_str(TRICLINIC, &ParseOptions::default()).unwrap();

        assert_eq!(header.num_atoms, 3);
        assert_eq!(header.num_atom_types, 2);
        assert_eq!((header.xlo, header.xhi), (-1.5, 10.0));
        assert_eq!((header.ylo, header.yhi), (0.0, 20.0));
        assert_eq!((header.zlo, header.zhi), (0.0, 30.0));
        assert_eq!((header.xy, header.xz, header.yz), (1.0, 2.0, 3.0));
        assert!(header.is_triclinic());
        assert_eq!(consumed, 8, "header ends after the separator line");
    }

    #[test]
    fn atom_count_line_must_mention_atoms() {
        let text = TRICLINIC.replace("3 atoms", "3 particles");
        let err = read_str(&text, &ParseOptions::default()).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::MissingKeyword);
        assert_eq!(err.line(), Some(2));
    }

    #[test]
    fn reordered_lines_are_not_searched_for() {
        let text = TRICLINIC.replace(
            "-1.5 10.0 xlo xhi\n0.0 20.0 ylo yhi",
            "0.0 20.0 ylo yhi\n-1.5 10.0 xlo xhi",
        );
        let err = read_str(&text, &ParseOptions::default()).unwrap_err();

        match err {
            Error::MissingKeyword { line, keyword, .. } => {
                assert_eq!(line, 4);
                assert_eq!(keyword, "xlo xhi");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn negative_atom_count_is_malformed() {
        let text = TRICLINIC.replace("3 atoms", "-3 atoms");
        let err = read_str(&text, &ParseOptions::default()).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::MalformedNumber);
    }

    #[test]
    fn bounds_line_with_missing_value_is_malformed() {
        let text = TRICLINIC.replace("-1.5 10.0 xlo xhi", "-1.5 xlo xhi");
        let err = read_str(&text, &ParseOptions::default()).unwrap_err();

        match err {
            Error::MalformedNumber { field, token, .. } => {
                assert_eq!(field, "xhi");
                assert_eq!(token, "xlo");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_tilt_line_fails_by_default() {
        let text = TRICLINIC.replace("1.0 2.0 3.0 xy xz yz\n", "");
        let err = read_str(&text, &ParseOptions::default()).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::MissingKeyword);
        assert_eq!(err.line(), Some(7));
    }

    #[test]
    fn missing_tilt_line_is_accepted_when_optional() {
        let text = TRICLINIC.replace("1.0 2.0 3.0 xy xz yz\n", "");
        let options = ParseOptions {
            tilt: TiltPolicy::Optional,
        };
        let (header, consumed) = read_str(&text, &options).unwrap();

        assert_eq!((header.xy, header.xz, header.yz), (0.0, 0.0, 0.0));
        assert!(!header.is_triclinic());
        assert_eq!(consumed, 7);
    }

    #[test]
    fn truncated_header_reports_end_of_input() {
        let err = read_str("title\n3 atoms\n", &ParseOptions::default()).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::UnexpectedEndOfInput);
        assert_eq!(err.line(), Some(3));
    }
}
