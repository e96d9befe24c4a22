// CSV export of a fetched dataset, and the reader for files we exported.
// Header: Timestamp,Open,High,Low,Close,Volume
// Example row: 2022-01-01 00:15:00,46216.93,46929.04,46216.93,46656.33,19.96
use crate::error::EngineError;
use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use shared::models::OhlcRecord;
use shared::utils::{format_timestamp, parse_timestamp};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

pub const HEADER: [&str; 6] = ["Timestamp", "Open", "High", "Low", "Close", "Volume"];
pub const MIME_TYPE: &str = "text/csv";

pub struct OhlcCsv;

impl OhlcCsv {
    pub fn write<W: Write>(records: &[OhlcRecord], writer: W) -> Result<(), EngineError> {
        let mut wtr = WriterBuilder::new().has_headers(false).from_writer(writer);
        wtr.write_record(HEADER)?;
        for record in records {
            wtr.write_record([
                format_timestamp(record.timestamp),
                record.open.to_string(),
                record.high.to_string(),
                record.low.to_string(),
                record.close.to_string(),
                record.volume.to_string(),
            ])?;
        }
        wtr.flush()?;
        Ok(())
    }

    pub fn to_csv_string(records: &[OhlcRecord]) -> Result<String, EngineError> {
        let mut buf = Vec::new();
        Self::write(records, &mut buf)?;
        String::from_utf8(buf).map_err(|e| EngineError::CsvDataFormatError(format!("Export is not UTF-8: {}", e)))
    }

    pub fn save(records: &[OhlcRecord], path: &Path) -> Result<(), EngineError> {
        let file = File::create(path)?;
        Self::write(records, BufWriter::new(file))
    }

    pub fn read<R: Read>(reader: R) -> Result<Vec<OhlcRecord>, EngineError> {
        let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(reader);
        let headers = rdr.headers()?.clone();

        let mut records = Vec::new();
        for (idx, result) in rdr.records().enumerate() {
            // +2: one for the header row, one for 1-based line numbers
            let line = idx + 2;
            let row = result?;

            let timestamp_str = Self::required_field(&row, &headers, "Timestamp", line)?;
            let timestamp = parse_timestamp(timestamp_str).map_err(|e| {
                EngineError::CsvDataFormatError(format!("Error parsing 'Timestamp' at line {}: {}", line, e))
            })?;

            records.push(OhlcRecord {
                timestamp,
                open: Self::number_field(&row, &headers, "Open", line)?,
                high: Self::number_field(&row, &headers, "High", line)?,
                low: Self::number_field(&row, &headers, "Low", line)?,
                close: Self::number_field(&row, &headers, "Close", line)?,
                volume: Self::number_field(&row, &headers, "Volume", line)?,
            });
        }
        Ok(records)
    }

    pub fn load(path: &Path) -> Result<Vec<OhlcRecord>, EngineError> {
        let file = File::open(path)?;
        Self::read(BufReader::new(file))
    }

    // Looks the column up by header name so reordered files still load.
    fn required_field<'a>(row: &'a StringRecord, headers: &StringRecord, name: &str, line: usize) -> Result<&'a str, EngineError> {
        headers
            .iter()
            .position(|header| header == name)
            .and_then(|pos| row.get(pos))
            .ok_or_else(|| EngineError::CsvDataFormatError(format!("Missing '{}' field at line {}", name, line)))
    }

    fn number_field(row: &StringRecord, headers: &StringRecord, name: &str, line: usize) -> Result<f64, EngineError> {
        let raw = Self::required_field(row, headers, name, line)?;
        raw.trim().parse::<f64>().map_err(|e| {
            EngineError::CsvDataFormatError(format!("Error parsing '{}' at line {}: '{}': {}", name, line, raw, e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn sample_records() -> Vec<OhlcRecord> {
        vec![
            OhlcRecord { timestamp: 1_640_995_200, open: 46216.93, high: 46929.04, low: 46216.93, close: 46656.33, volume: 19.96 },
            OhlcRecord { timestamp: 1_640_996_100, open: 46656.33, high: 46750.0, low: 46500.0, close: 46700.01, volume: 0.0 },
        ]
    }

    fn create_test_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_export_format() {
        let csv = OhlcCsv::to_csv_string(&sample_records()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "Timestamp,Open,High,Low,Close,Volume");
        assert_eq!(lines[1], "2022-01-01 00:00:00,46216.93,46929.04,46216.93,46656.33,19.96");
        assert_eq!(lines[2], "2022-01-01 00:15:00,46656.33,46750,46500,46700.01,0");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_export_empty_dataset_has_header_only() {
        let csv = OhlcCsv::to_csv_string(&[]).unwrap();
        assert_eq!(csv, "Timestamp,Open,High,Low,Close,Volume\n");
    }

    #[test]
    fn test_save_then_load_same_rows() {
        let records = sample_records();
        let file = NamedTempFile::new().unwrap();
        OhlcCsv::save(&records, file.path()).unwrap();
        let loaded = OhlcCsv::load(file.path()).unwrap();
        assert_eq!(loaded, records);
    }

    #[test]
    fn test_read_reordered_columns() {
        let file = create_test_csv("\
Volume,Timestamp,Close,Low,High,Open
19.96,2022-01-01 00:00:00,46656.33,46216.93,46929.04,46216.93");
        let loaded = OhlcCsv::load(file.path()).unwrap();
        assert_eq!(loaded, vec![sample_records()[0]]);
    }

    #[test]
    fn test_read_missing_column() {
        let file = create_test_csv("\
Timestamp,Open,High,Low,Close
2022-01-01 00:00:00,1,2,0.5,1.5");
        let err = OhlcCsv::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("Missing 'Volume' field at line 2"));
    }

    #[test]
    fn test_read_bad_number() {
        let file = create_test_csv("\
Timestamp,Open,High,Low,Close,Volume
2022-01-01 00:00:00,abc,2,0.5,1.5,3");
        let err = OhlcCsv::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("Error parsing 'Open' at line 2"));
    }

    #[test]
    fn test_read_bad_timestamp() {
        let file = create_test_csv("\
Timestamp,Open,High,Low,Close,Volume
1640995200,1,2,0.5,1.5,3");
        let err = OhlcCsv::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("Error parsing 'Timestamp' at line 2"));
    }

    #[test]
    fn test_load_missing_file() {
        let result = OhlcCsv::load(Path::new("non_existent_file.csv"));
        assert!(matches!(result, Err(EngineError::IoError { .. })));
    }
}
