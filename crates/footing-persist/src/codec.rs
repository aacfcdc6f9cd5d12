//! Text encoding of a placement layer.
//!
//! Encoding is lossy by construction: a line carries the structure id,
//! pivot and rotation, but not the object's size or which map it came
//! from. Callers that rebuild a layer look the size up from the
//! structure id.

use std::fmt;
use std::fmt::Write as _;

use footing_core::{GridCoord, Rotation, StructureId};
use footing_index::{OccupancyKey, OccupancyMap, PlacementLayer};
use indexmap::IndexSet;

use crate::error::PersistError;
use crate::FIELD_SEPARATOR;

/// One decoded save line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SaveEntry {
    /// Catalog id of the placed structure.
    pub structure_id: StructureId,
    /// Pivot cell the object was placed at.
    pub origin: GridCoord,
    /// Rotation the object was placed with.
    pub rotation: Rotation,
}

impl fmt::Display for SaveEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{sep}{}{sep}{}",
            self.structure_id,
            self.origin,
            self.rotation,
            sep = FIELD_SEPARATOR
        )
    }
}

fn write_map<K: OccupancyKey>(out: &mut String, map: &OccupancyMap<K>) {
    for (_, record) in map.iter() {
        let entry = SaveEntry {
            structure_id: record.structure_id(),
            origin: record.origin(),
            rotation: record.rotation(),
        };
        // Writing into a String cannot fail.
        let _ = writeln!(out, "{entry}");
    }
}

/// Flatten `layer` to text: one `\n`-terminated line per occupied key,
/// cells first then edges.
///
/// An empty layer serializes to the empty string.
pub fn serialize(layer: &PlacementLayer) -> String {
    let mut out = String::new();
    write_map(&mut out, layer.cells());
    write_map(&mut out, layer.edges());
    out
}

/// Split saved text into lines.
///
/// Text that ends in `\n` does not produce a trailing empty line, so the
/// result of `deserialize(&serialize(layer))` has exactly one line per
/// occupied key. A final line without a terminator is kept.
pub fn deserialize(text: &str) -> Vec<String> {
    let mut lines: Vec<String> = text.split('\n').map(str::to_owned).collect();
    if lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    lines
}

fn malformed(line: &str, detail: impl fmt::Display) -> PersistError {
    PersistError::MalformedLine {
        line: line.to_owned(),
        detail: detail.to_string(),
    }
}

/// Decode one `structureId:origin:rotation` line.
///
/// Surrounding whitespace, including a `\r` left by CRLF files, is
/// ignored.
pub fn parse_line(line: &str) -> Result<SaveEntry, PersistError> {
    let trimmed = line.trim();
    let fields: Vec<&str> = trimmed.split(FIELD_SEPARATOR).collect();
    let [id, origin, rotation] = fields.as_slice() else {
        return Err(malformed(
            line,
            format_args!("expected 3 fields, found {}", fields.len()),
        ));
    };

    let structure_id = id
        .trim()
        .parse::<u32>()
        .map(StructureId)
        .map_err(|e| malformed(line, format_args!("structure id: {e}")))?;
    let origin = origin
        .parse::<GridCoord>()
        .map_err(|e| malformed(line, e))?;
    let rotation = rotation
        .parse::<Rotation>()
        .map_err(|e| malformed(line, e))?;

    Ok(SaveEntry {
        structure_id,
        origin,
        rotation,
    })
}

/// Decode `lines` and collapse the per-key duplicates a multi-key object
/// leaves behind, keeping first-occurrence order.
///
/// Blank lines are skipped. The first malformed line aborts decoding.
pub fn dedup_entries<I, S>(lines: I) -> Result<Vec<SaveEntry>, PersistError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = IndexSet::new();
    for line in lines {
        let line = line.as_ref();
        if line.trim().is_empty() {
            continue;
        }
        seen.insert(parse_line(line)?);
    }
    Ok(seen.into_iter().collect())
}
