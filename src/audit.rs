//! Deletion audit log.

use std::io::Write;
use std::path::Path;

use chrono::{DateTime, Local};

use crate::Result;

/// Fixed tag opening every audit record.
const TAG: &str = "DELETED FILE:";

/// Timestamp layout inside an audit record.
const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Writes one record per deleted file to the audit sink.
///
/// Each record is a single line of the form
///
/// ```text
/// DELETED FILE:2026/08/24 10:15:02 logs/old.log
/// ```
///
/// with no space between the tag and the local-time timestamp, and one
/// space before the path. Nothing else is ever written to the sink.
pub struct AuditLog<'w> {
    sink: &'w mut dyn Write,
}

impl<'w> AuditLog<'w> {
    /// Creates an audit log writing to `sink`.
    pub fn new(sink: &'w mut dyn Write) -> Self {
        Self { sink }
    }

    /// Records one deletion. Call only after the file is actually gone.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`](crate::Error::Io) if the sink write fails.
    pub fn record(&mut self, path: &Path) -> Result<()> {
        let line = format_record(&Local::now(), path);
        self.sink.write_all(line.as_bytes())?;
        Ok(())
    }
}

fn format_record(now: &DateTime<Local>, path: &Path) -> String {
    format!("{}{} {}\n", TAG, now.format(TIMESTAMP_FORMAT), path.display())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_record_layout() {
        let now = Local.with_ymd_and_hms(2026, 3, 9, 14, 5, 2).unwrap();
        let line = format_record(&now, Path::new("tmp/a.log"));
        assert_eq!(line, "DELETED FILE:2026/03/09 14:05:02 tmp/a.log\n");
    }

    #[test]
    fn test_record_writes_one_line() {
        let mut buffer = Vec::new();
        let mut log = AuditLog::new(&mut buffer);
        log.record(Path::new("data/x.log")).unwrap();
        log.record(Path::new("data/y.log")).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("DELETED FILE:"));
        assert!(lines[0].ends_with(" data/x.log"));
        assert!(lines[1].ends_with(" data/y.log"));
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_record_timestamp_parses_back() {
        let mut buffer = Vec::new();
        AuditLog::new(&mut buffer)
            .record(Path::new("a.log"))
            .unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let rest = text.strip_prefix("DELETED FILE:").unwrap();
        let stamp = &rest[..19];
        assert!(
            chrono::NaiveDateTime::parse_from_str(stamp, TIMESTAMP_FORMAT).is_ok(),
            "timestamp should parse with the declared layout: {stamp}"
        );
        assert_eq!(&rest[19..20], " ");
    }

    #[test]
    fn test_record_write_failure_propagates() {
        struct Broken;
        impl Write for Broken {
            fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(
                    std::io::ErrorKind::BrokenPipe,
                    "pipe closed",
                ))
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let mut sink = Broken;
        let err = AuditLog::new(&mut sink)
            .record(Path::new("a.log"))
            .unwrap_err();
        assert!(matches!(err, crate::Error::Io(_)));
    }
}
