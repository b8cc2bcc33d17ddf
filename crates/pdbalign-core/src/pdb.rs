//! Fixed-column PDB reading and writing.
//!
//! Only `ATOM`/`HETATM` coordinate records are materialized; every other
//! record type (`TER`, `REMARK`, `END`, ...) is skipped. Writing emits the
//! PDB v3.3 column layout so filtered structures stay consumable by
//! downstream structural-biology tools.

use std::{
    fs::File,
    io::{self, BufRead, Read, Write},
    path::Path,
};

use flate2::read::GzDecoder;

use crate::{
    error::{ParseError, ParseErrorKind},
    record::{AtomRecord, Coord},
    structure::Structure,
};

/// Read one PDB file into a [`Structure`], transparently decompressing
/// `.gz` inputs. The entry id is taken from the file stem.
pub fn load_file(path: impl AsRef<Path>) -> Result<Structure, ParseError> {
    let path_ref = path.as_ref();
    let file = File::open(path_ref).map_err(|err| ParseError::from(err).with_path(path_ref))?;
    let mut reader: Box<dyn Read> = if path_ref
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("gz"))
        .unwrap_or(false)
    {
        Box::new(GzDecoder::new(file))
    } else {
        Box::new(file)
    };

    let mut buf = String::new();
    reader
        .read_to_string(&mut buf)
        .map_err(|err| ParseError::from(err).with_path(path_ref))?;
    let mut structure = parse_str(&buf).map_err(|err| err.with_path(path_ref))?;
    if structure.entry_id.is_none() {
        structure.entry_id = path_ref
            .file_stem()
            .and_then(|stem| stem.to_str())
            .map(|stem| stem.to_string());
    }
    Ok(structure)
}

/// Parse PDB text from any buffered reader.
pub fn parse_reader<R: BufRead>(mut reader: R) -> Result<Structure, ParseError> {
    let mut buf = String::new();
    reader.read_to_string(&mut buf)?;
    parse_str(&buf)
}

pub fn parse_str(input: &str) -> Result<Structure, ParseError> {
    let mut records = Vec::new();
    for (number, line) in input.lines().enumerate() {
        if let Some(record) = parse_record_line(line, number + 1)? {
            records.push(record);
        }
    }
    Ok(Structure::new(records))
}

/// Parse a single line. Returns `Ok(None)` for record types other than
/// `ATOM`/`HETATM`.
fn parse_record_line(line: &str, number: usize) -> Result<Option<AtomRecord>, ParseError> {
    let record_name = column(line, 0, 6);
    let marker = record_name.trim();
    if marker != "ATOM" && marker != "HETATM" {
        return Ok(None);
    }
    // Coordinate columns end at 54; anything shorter cannot be a valid
    // coordinate record.
    if line.len() < 54 {
        return Err(ParseError::new(
            ParseErrorKind::MalformedRecord,
            format!(
                "line {number}: coordinate record truncated at {} columns",
                line.len()
            ),
        ));
    }

    let serial = parse_int(column(line, 6, 11), "serial", number)?;
    let atom_name = column(line, 12, 16).to_string();
    let alt_loc = column_char(line, 16);
    let residue_name = column(line, 17, 20).to_string();
    let chain_id = column(line, 21, 22).to_string();
    let residue_seq = parse_int(column(line, 22, 26), "residue number", number)?;
    let insertion_code = column_char(line, 26);
    let x = parse_float(column(line, 30, 38), "x coordinate", number)?;
    let y = parse_float(column(line, 38, 46), "y coordinate", number)?;
    let z = parse_float(column(line, 46, 54), "z coordinate", number)?;
    let occupancy = parse_float_or(column(line, 54, 60), 1.0, "occupancy", number)?;
    let b_factor = parse_float_or(column(line, 60, 66), 0.0, "temperature factor", number)?;
    let element = {
        let symbol = column(line, 76, 78).trim();
        if symbol.is_empty() {
            None
        } else {
            Some(symbol.to_string())
        }
    };

    Ok(Some(AtomRecord {
        serial,
        record_name: record_name.to_string(),
        atom_name,
        alt_loc,
        residue_name,
        chain_id,
        residue_seq,
        insertion_code,
        coord: Coord::new(x, y, z),
        occupancy,
        b_factor,
        element,
    }))
}

/// Serialize a structure back to PDB text.
pub fn to_pdb_string(structure: &Structure) -> String {
    let mut out = String::new();
    for record in structure.records() {
        out.push_str(&format_record(record));
        out.push('\n');
    }
    out.push_str("END\n");
    out
}

pub fn write_file(path: impl AsRef<Path>, structure: &Structure) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(to_pdb_string(structure).as_bytes())
}

fn format_record(record: &AtomRecord) -> String {
    format!(
        "{:<6}{:>5} {:<4}{}{:>3} {}{:>4}{}   {:>8.3}{:>8.3}{:>8.3}{:>6.2}{:>6.2}          {:>2}",
        record.record_name.trim(),
        record.serial,
        pad_atom_name(record.name()),
        record.alt_loc.unwrap_or(' '),
        record.residue(),
        record.chain_id.chars().next().filter(|c| !c.is_whitespace()).unwrap_or(' '),
        record.residue_seq,
        record.insertion_code.unwrap_or(' '),
        record.coord.x,
        record.coord.y,
        record.coord.z,
        record.occupancy,
        record.b_factor,
        record.element.as_deref().unwrap_or(""),
    )
}

/// Atom names shorter than four characters start in column 14, leaving
/// column 13 for two-letter element symbols.
fn pad_atom_name(name: &str) -> String {
    if name.len() >= 4 {
        name.to_string()
    } else {
        format!(" {name:<3}")
    }
}

/// Byte-column slice of `line`, tolerant of short lines.
fn column(line: &str, start: usize, end: usize) -> &str {
    let end = end.min(line.len());
    if start >= end {
        return "";
    }
    line.get(start..end).unwrap_or("")
}

fn column_char(line: &str, index: usize) -> Option<char> {
    line.get(index..index + 1)
        .and_then(|s| s.chars().next())
        .filter(|c| !c.is_whitespace())
}

fn parse_int(field: &str, what: &str, line: usize) -> Result<i32, ParseError> {
    let trimmed = field.trim();
    trimmed.parse::<i32>().map_err(|_| {
        ParseError::new(
            ParseErrorKind::InvalidNumber,
            format!("line {line}: invalid {what} '{trimmed}'"),
        )
    })
}

fn parse_float(field: &str, what: &str, line: usize) -> Result<f64, ParseError> {
    let trimmed = field.trim();
    trimmed.parse::<f64>().map_err(|_| {
        ParseError::new(
            ParseErrorKind::InvalidNumber,
            format!("line {line}: invalid {what} '{trimmed}'"),
        )
    })
}

fn parse_float_or(field: &str, default: f64, what: &str, line: usize) -> Result<f64, ParseError> {
    let trimmed = field.trim();
    if trimmed.is_empty() {
        return Ok(default);
    }
    trimmed.parse::<f64>().map_err(|_| {
        ParseError::new(
            ParseErrorKind::InvalidNumber,
            format!("line {line}: invalid {what} '{trimmed}'"),
        )
    })
}
