//! Record loading from CSV or JSON files.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use anomaly_facade::{Chronological, YearMonth};
use anyhow::{bail, Context, Result};
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// JSON inputs are either a bare array or an object wrapping one.
#[derive(Deserialize)]
#[serde(untagged)]
enum JsonRecords<T> {
    Bare(Vec<T>),
    Wrapped {
        #[serde(alias = "series", alias = "rows")]
        data: Vec<T>,
    },
}

/// Reject records whose month lies outside 1-12.
fn checked_period<T: Chronological>(record: &T) -> Result<YearMonth> {
    let period = record.period();
    Ok(YearMonth::new(period.year, period.month)?)
}

/// Parse CSV with a header row naming the record fields.
pub fn parse_csv<T, R>(reader: R) -> Result<Vec<T>>
where
    T: DeserializeOwned + Chronological,
    R: Read,
{
    let mut reader = csv::Reader::from_reader(reader);
    let mut records = Vec::new();
    for (index, record) in reader.deserialize().enumerate() {
        // one-based, after the header
        let line = index + 2;
        let record: T = record.with_context(|| format!("invalid CSV record on line {line}"))?;
        checked_period(&record).with_context(|| {
            let period = record.period();
            format!(
                "invalid CSV record on line {line} (year {}, month {})",
                period.year, period.month
            )
        })?;
        records.push(record);
    }
    Ok(records)
}

/// Parse a JSON array of records, or an object with a `data`/`series`/`rows` array.
pub fn parse_json<T, R>(reader: R) -> Result<Vec<T>>
where
    T: DeserializeOwned + Chronological,
    R: Read,
{
    let records: JsonRecords<T> =
        serde_json::from_reader(reader).context("input is not a JSON array of records")?;
    let records = match records {
        JsonRecords::Bare(data) | JsonRecords::Wrapped { data } => data,
    };
    for (index, record) in records.iter().enumerate() {
        checked_period(record).with_context(|| {
            let period = record.period();
            format!(
                "invalid JSON record #{} (year {}, month {})",
                index + 1,
                period.year,
                period.month
            )
        })?;
    }
    Ok(records)
}

/// Load records from `path`, choosing the format from its extension.
///
/// Unknown extensions are tried as CSV first, then JSON.
pub fn load_records<T>(path: &Path) -> Result<Vec<T>>
where
    T: DeserializeOwned + Chronological,
{
    let open = || {
        File::open(path)
            .map(BufReader::new)
            .with_context(|| format!("failed to open {}", path.display()))
    };

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    let records = match ext.as_str() {
        "csv" => parse_csv(open()?)?,
        "json" => parse_json(open()?)?,
        _ => match parse_csv(open()?) {
            Ok(records) if !records.is_empty() => records,
            _ => parse_json(open()?)?,
        },
    };

    if records.is_empty() {
        bail!("no records found in {}", path.display());
    }
    tracing::info!(count = records.len(), path = %path.display(), "loaded records");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anomaly_facade::MonthlyEventCounts;
    use trend_facade::TimePoint;

    #[test]
    fn test_parse_csv_time_points() {
        let data = "year,month,value\n2025,1,120\n2025,2,124.5\n";
        let points: Vec<TimePoint> = parse_csv(data.as_bytes()).unwrap();
        assert_eq!(
            points,
            vec![TimePoint::new(2025, 1, 120.0), TimePoint::new(2025, 2, 124.5)]
        );
    }

    #[test]
    fn test_parse_csv_event_counts() {
        let data = "year,month,new_members,resigned_members,expelled_members\n2025,3,12,4,1\n";
        let rows: Vec<MonthlyEventCounts> = parse_csv(data.as_bytes()).unwrap();
        assert_eq!(rows, vec![MonthlyEventCounts::new(2025, 3, 12.0, 4.0, 1.0)]);
    }

    #[test]
    fn test_parse_csv_reports_line() {
        let data = "year,month,value\n2025,1,120\n2025,x,3\n";
        let err = parse_csv::<TimePoint, _>(data.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("line 3"));
    }

    #[test]
    fn test_parse_json_bare_array() {
        let data = r#"[{"year":2025,"month":1,"value":10}]"#;
        let points: Vec<TimePoint> = parse_json(data.as_bytes()).unwrap();
        assert_eq!(points, vec![TimePoint::new(2025, 1, 10.0)]);
    }

    #[test]
    fn test_parse_json_wrapped() {
        let data = r#"{"rows":[{"year":2025,"month":2,"new_members":5}]}"#;
        let rows: Vec<MonthlyEventCounts> = parse_json(data.as_bytes()).unwrap();
        assert_eq!(rows, vec![MonthlyEventCounts::new(2025, 2, 5.0, 0.0, 0.0)]);
    }

    #[test]
    fn test_parse_csv_rejects_out_of_range_month() {
        let data = "year,month,value\n2025,11,10\n2025,12,12\n2025,13,14\n";
        let err = parse_csv::<TimePoint, _>(data.as_bytes()).unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("line 4 (year 2025, month 13)"), "{message}");
        assert!(message.contains("Invalid month: 13"), "{message}");

        let data = "year,month,new_members\n2025,0,10\n";
        let err = parse_csv::<MonthlyEventCounts, _>(data.as_bytes()).unwrap_err();
        assert!(format!("{err:#}").contains("Invalid month: 0"));
    }

    #[test]
    fn test_parse_json_rejects_out_of_range_month() {
        let data = r#"[{"year":2025,"month":12,"value":1},{"year":2025,"month":13,"value":2}]"#;
        let err = parse_json::<TimePoint, _>(data.as_bytes()).unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("record #2 (year 2025, month 13)"), "{message}");
        assert!(message.contains("Invalid month: 13"), "{message}");
    }

    #[test]
    fn test_parse_json_rejects_scalars() {
        assert!(parse_json::<TimePoint, _>("42".as_bytes()).is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_records::<TimePoint>(Path::new("/nonexistent/members.csv")).unwrap_err();
        assert!(err.to_string().contains("failed to open"));
    }
}
