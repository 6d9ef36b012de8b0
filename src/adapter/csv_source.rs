//! CSV parcel input.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim, WriterBuilder};
use serde::Deserialize;
use tracing::{debug, info};

use super::RecordSource;
use crate::error::{DispatchError, Result};
use crate::models::ParcelRecord;

/// Column headings, each with the shorter aliases also accepted.
const COLUMNS: [(&str, &[&str]); 5] = [
    ("Parcel ID", &[]),
    ("Name", &[]),
    ("Weight (kg)", &["Weight"]),
    ("Volume (m³)", &["Volume"]),
    ("Destination", &[]),
];

#[derive(Debug, Deserialize)]
struct CsvParcel {
    #[serde(rename = "Parcel ID")]
    id: String,
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Weight (kg)", alias = "Weight")]
    weight: f64,
    #[serde(rename = "Volume (m³)", alias = "Volume")]
    volume: f64,
    #[serde(rename = "Destination")]
    destination: String,
}

/// Reads parcel records from CSV with a header row.
///
/// # Examples
///
/// ```
/// use u_dispatch::adapter::{CsvRecordSource, RecordSource};
///
/// let data = "Parcel ID,Name,Weight (kg),Volume (m³),Destination\n\
///             P1,Rice,300,100,HCMC\n";
/// let records = CsvRecordSource::new(data.as_bytes()).load_records().unwrap();
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].destination(), "HCMC");
/// ```
pub struct CsvRecordSource<R> {
    reader: R,
}

impl<R: Read> CsvRecordSource<R> {
    /// Wraps any byte source.
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl CsvRecordSource<BufReader<File>> {
    /// Opens a CSV file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "opening parcel file");
        Ok(Self::new(BufReader::new(File::open(path)?)))
    }
}

impl<R: Read> RecordSource for CsvRecordSource<R> {
    fn load_records(&mut self) -> Result<Vec<ParcelRecord>> {
        let mut reader = ReaderBuilder::new()
            .trim(Trim::All)
            .from_reader(&mut self.reader);

        let headers = reader
            .headers()
            .map_err(|e| DispatchError::config("header", e.to_string()))?
            .clone();
        check_columns(&headers)?;

        let mut seen = HashSet::new();
        let mut records = Vec::new();
        for (idx, row) in reader.deserialize::<CsvParcel>().enumerate() {
            // Header is line 1.
            let line = idx + 2;
            let row = row.map_err(|e| DispatchError::config(format!("row {line}"), e.to_string()))?;
            let record = validate_row(row, line)?;
            if !seen.insert(record.id().to_string()) {
                return Err(DispatchError::config(
                    "Parcel ID",
                    format!("duplicate identifier `{}` on row {line}", record.id()),
                ));
            }
            records.push(record);
        }

        info!(records = records.len(), "parcel records loaded");
        Ok(records)
    }
}

fn check_columns(headers: &StringRecord) -> Result<()> {
    let present: HashSet<&str> = headers.iter().collect();
    let missing: Vec<&str> = COLUMNS
        .iter()
        .filter(|(name, aliases)| {
            !present.contains(name) && !aliases.iter().any(|a| present.contains(a))
        })
        .map(|(name, _)| *name)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(DispatchError::config(
            missing.join(", "),
            "required column is missing",
        ))
    }
}

fn validate_row(row: CsvParcel, line: usize) -> Result<ParcelRecord> {
    if row.id.is_empty() {
        return Err(DispatchError::config(
            "Parcel ID",
            format!("empty identifier on row {line}"),
        ));
    }
    if row.destination.is_empty() {
        return Err(DispatchError::config(
            "Destination",
            format!("empty destination on row {line}"),
        ));
    }
    if !(row.weight.is_finite() && row.weight >= 0.0) {
        return Err(DispatchError::config(
            "Weight (kg)",
            format!("invalid weight {} on row {line}", row.weight),
        ));
    }
    if !(row.volume.is_finite() && row.volume >= 0.0) {
        return Err(DispatchError::config(
            "Volume (m³)",
            format!("invalid volume {} on row {line}", row.volume),
        ));
    }
    Ok(ParcelRecord::new(
        row.id,
        row.name,
        row.weight,
        row.volume,
        row.destination,
    ))
}

/// Writes records as CSV with the standard headings.
pub fn write_records<W: Write>(records: &[ParcelRecord], writer: W) -> Result<()> {
    let mut out = WriterBuilder::new().from_writer(writer);
    out.write_record(COLUMNS.iter().map(|(name, _)| *name))
        .map_err(std::io::Error::from)?;
    for r in records {
        out.write_record([
            r.id().to_string(),
            r.name().to_string(),
            r.weight().to_string(),
            r.volume().to_string(),
            r.destination().to_string(),
        ])
        .map_err(std::io::Error::from)?;
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load(data: &str) -> Result<Vec<ParcelRecord>> {
        CsvRecordSource::new(data.as_bytes()).load_records()
    }

    #[test]
    fn test_load_full_headers() {
        let data = "Parcel ID,Name,Weight (kg),Volume (m³),Destination\n\
                    1, Rice ,300,100,HCMC\n\
                    2,Steel,250,50,Da Nang\n";
        let records = load(data).expect("valid csv");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0], ParcelRecord::new("1", "Rice", 300.0, 100.0, "HCMC"));
        assert_eq!(records[1].destination(), "Da Nang");
    }

    #[test]
    fn test_load_short_headers() {
        let data = "Parcel ID,Name,Weight,Volume,Destination\nA,x,1.5,0,Dalat\n";
        let records = load(data).expect("valid csv");
        assert_eq!(records[0].weight(), 1.5);
        assert_eq!(records[0].volume(), 0.0);
    }

    #[test]
    fn test_missing_columns_named() {
        let data = "Parcel ID,Name,Destination\n1,x,HCMC\n";
        match load(data) {
            Err(DispatchError::Configuration { field, .. }) => {
                assert_eq!(field, "Weight (kg), Volume (m³)");
            }
            other => panic!("expected configuration error, got {other:?}"),
        }
    }

    #[test]
    fn test_unparseable_row_named() {
        let data = "Parcel ID,Name,Weight (kg),Volume (m³),Destination\n1,x,heavy,1,HCMC\n";
        match load(data) {
            Err(DispatchError::Configuration { field, .. }) => assert_eq!(field, "row 2"),
            other => panic!("expected configuration error, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_values_rejected() {
        let header = "Parcel ID,Name,Weight (kg),Volume (m³),Destination\n";
        assert!(load(&format!("{header}1,x,-3,1,HCMC\n")).is_err());
        assert!(load(&format!("{header}1,x,3,1,\n")).is_err());
        assert!(load(&format!("{header},x,3,1,HCMC\n")).is_err());
        assert!(load(&format!("{header}1,x,3,1,HCMC\n1,y,2,1,Dalat\n")).is_err());
    }

    #[test]
    fn test_empty_file_body() {
        let data = "Parcel ID,Name,Weight (kg),Volume (m³),Destination\n";
        assert!(load(data).expect("valid csv").is_empty());
    }

    #[test]
    fn test_write_then_load() {
        let records = vec![
            ParcelRecord::new("1", "Rice", 300.0, 100.5, "HCMC"),
            ParcelRecord::new("2", "Tea, green", 2.25, 0.0, "Da Nang"),
        ];
        let mut buf = Vec::new();
        write_records(&records, &mut buf).expect("written");
        let back = CsvRecordSource::new(buf.as_slice())
            .load_records()
            .expect("loaded");
        assert_eq!(back, records);
    }
}
