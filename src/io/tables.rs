//! Row-oriented numeric tables: position input, mass input and force output.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::distributed::ProgressReporter;
use crate::io::Delimiter;
use crate::models::{FromCoordinates, PointSet, ToCoordinates, Vector3D};
use crate::utils::ForceError;

/// Non-blank lines of `text` with their 1-based line numbers.
fn rows(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line))
        .filter(|(_, line)| !line.trim().is_empty())
}

fn parse_field(line: usize, field: &str) -> Result<f64, ForceError> {
    field.parse::<f64>().map_err(|_| ForceError::Malformed {
        line,
        reason: format!("\"{}\" is not a number", field),
    })
}

/// Parses a position table: exactly three numeric fields per row.
///
/// # Examples
///
/// ```
/// use rs_pairforce::io::{parse_positions, Delimiter};
/// use rs_pairforce::models::Vector3D;
///
/// let positions = parse_positions("0 0 0\n 1.5  2 -3\n", Delimiter::Space).unwrap();
/// assert_eq!(positions, vec![Vector3D::new(0.0, 0.0, 0.0), Vector3D::new(1.5, 2.0, -3.0)]);
///
/// assert!(parse_positions("1 2\n", Delimiter::Space).is_err());
/// ```
pub fn parse_positions(text: &str, delimiter: Delimiter) -> Result<Vec<Vector3D>, ForceError> {
    rows(text)
        .map(|(line, row)| {
            let fields = delimiter.split(row);
            if fields.len() != 3 {
                return Err(ForceError::Malformed {
                    line,
                    reason: format!("expected 3 fields, found {}", fields.len()),
                });
            }
            Ok(Vector3D::from_coord([
                parse_field(line, fields[0])?,
                parse_field(line, fields[1])?,
                parse_field(line, fields[2])?,
            ]))
        })
        .collect()
}

/// Parses a mass table: the first field of every row is the mass, the rest is ignored.
pub fn parse_masses(text: &str, delimiter: Delimiter) -> Result<Vec<f64>, ForceError> {
    rows(text)
        .map(|(line, row)| {
            let fields = delimiter.split(row);
            match fields.first() {
                Some(field) => parse_field(line, field),
                None => Err(ForceError::Malformed { line, reason: "missing mass field".to_string() }),
            }
        })
        .collect()
}

fn read_text(path: &Path) -> Result<String, ForceError> {
    if !path.is_file() {
        return Err(ForceError::MissingInput(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(|source| ForceError::io(path, source))
}

pub fn read_positions(path: &Path, delimiter: Delimiter) -> Result<Vec<Vector3D>, ForceError> {
    parse_positions(&read_text(path)?, delimiter)
}

pub fn read_masses(path: &Path, delimiter: Delimiter) -> Result<Vec<f64>, ForceError> {
    parse_masses(&read_text(path)?, delimiter)
}

/// Reads both input tables and pairs them, reporting each file as it is loaded.
///
/// # Errors
///
/// `MissingInput` if either file does not exist, `Malformed` on a bad row, and
/// `LengthMismatch` if the row counts differ.
pub fn load_point_set(
    positions_path: &Path,
    masses_path: &Path,
    delimiter: Delimiter,
    reporter: &dyn ProgressReporter,
) -> Result<PointSet, ForceError> {
    reporter.info(format_args!("load positions from \"{}\"", positions_path.display()));
    let positions = read_positions(positions_path, delimiter)?;
    reporter.info(format_args!("read {} rows", positions.len()));

    reporter.info(format_args!("load masses from \"{}\"", masses_path.display()));
    let masses = read_masses(masses_path, delimiter)?;
    reporter.info(format_args!("read {} rows", masses.len()));

    PointSet::new(positions, masses)
}

/// Writes one row of three fields per vector.
///
/// Values use the shortest representation that parses back to the same `f64`.
pub fn write_vectors<W: Write>(writer: &mut W, vectors: &[Vector3D], delimiter: Delimiter) -> std::io::Result<()> {
    let separator = delimiter.as_char();
    for v in vectors {
        let (x, y, z) = v.to_coord();
        writeln!(writer, "{}{}{}{}{}", x, separator, y, separator, z)?;
    }
    Ok(())
}

/// Writes one value per row.
pub fn write_scalars<W: Write>(writer: &mut W, values: &[f64]) -> std::io::Result<()> {
    for value in values {
        writeln!(writer, "{}", value)?;
    }
    Ok(())
}

fn create_file(path: &Path) -> Result<BufWriter<File>, ForceError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| ForceError::io(parent, source))?;
        }
    }
    let file = File::create(path).map_err(|source| ForceError::io(path, source))?;
    Ok(BufWriter::new(file))
}

/// Saves a force matrix, creating missing parent directories.
pub fn write_forces(
    path: &Path,
    forces: &[Vector3D],
    delimiter: Delimiter,
    reporter: &dyn ProgressReporter,
) -> Result<(), ForceError> {
    reporter.info(format_args!("save results to \"{}\"", path.display()));
    let mut writer = create_file(path)?;
    write_vectors(&mut writer, forces, delimiter)
        .and_then(|_| writer.flush())
        .map_err(|source| ForceError::io(path, source))
}

/// Saves a point set as a position table and a mass table.
pub fn write_point_set(
    points: &PointSet,
    positions_path: &Path,
    masses_path: &Path,
    delimiter: Delimiter,
) -> Result<(), ForceError> {
    let mut writer = create_file(positions_path)?;
    write_vectors(&mut writer, points.positions(), delimiter)
        .and_then(|_| writer.flush())
        .map_err(|source| ForceError::io(positions_path, source))?;

    let mut writer = create_file(masses_path)?;
    write_scalars(&mut writer, points.masses())
        .and_then(|_| writer.flush())
        .map_err(|source| ForceError::io(masses_path, source))
}
