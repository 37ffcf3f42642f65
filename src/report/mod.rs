// Thu May 7 2026 - Alex

pub mod c_decl;
pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonReport;

use crate::layout::{LayoutError, ResolvedLayout};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

/// Everything a report writer needs: the resolved layouts plus
/// generation metadata and aggregate statistics.
#[derive(Debug, Clone)]
pub struct LayoutReport {
    pub version: String,
    pub generated_at: String,
    pub layouts: Vec<ResolvedLayout>,
    pub statistics: ReportStatistics,
}

#[derive(Debug, Clone, Default)]
pub struct ReportStatistics {
    pub total_types: usize,
    pub total_fields: usize,
    pub total_holes: usize,
    pub total_bytes: u64,
    pub total_padding_bytes: u64,
    pub average_padding_percentage: f64,
}

impl LayoutReport {
    pub fn new(layouts: Vec<ResolvedLayout>) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            generated_at: current_timestamp(),
            statistics: ReportStatistics::compute(&layouts),
            layouts,
        }
    }
}

impl ReportStatistics {
    pub fn compute(layouts: &[ResolvedLayout]) -> Self {
        let total_types = layouts.len();
        let total_fields = layouts.iter().map(|l| l.fields.len()).sum();
        let total_holes = layouts.iter().map(|l| l.holes.len()).sum();
        let total_bytes = layouts.iter().map(|l| l.size).sum();
        let total_padding_bytes = layouts.iter().map(|l| l.total_padding()).sum();
        let average_padding_percentage = if layouts.is_empty() {
            0.0
        } else {
            layouts.iter().map(|l| l.padding_percentage()).sum::<f64>() / layouts.len() as f64
        };

        Self {
            total_types,
            total_fields,
            total_holes,
            total_bytes,
            total_padding_bytes,
            average_padding_percentage,
        }
    }
}

/// The one-line form shared by the bare run and the terse report.
pub fn sizeof_line(name: &str, size: u64) -> String {
    format!("sizeof({}) = {}", name, size)
}

/// Seconds since the epoch with millisecond precision.
fn current_timestamp() -> String {
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(elapsed) => format!("{}.{:03}", elapsed.as_secs(), elapsed.subsec_millis()),
        Err(_) => "0.000".to_string(),
    }
}

pub fn write_string_to_file(path: &Path, contents: &str) -> Result<(), LayoutError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(contents.as_bytes())?;
    // An unflushed BufWriter swallows write errors in its Drop.
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::demo;

    #[test]
    fn test_statistics_over_demo_layouts() {
        let report = LayoutReport::new(demo::layouts(&Config::default()).unwrap());
        assert_eq!(2, report.statistics.total_types);
        assert_eq!(4, report.statistics.total_fields);
        assert_eq!(2, report.statistics.total_holes);
        assert_eq!(16, report.statistics.total_bytes);
        assert_eq!(6, report.statistics.total_padding_bytes);
        assert!((report.statistics.average_padding_percentage - 37.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_statistics_empty() {
        let stats = ReportStatistics::compute(&[]);
        assert_eq!(0, stats.total_types);
        assert_eq!(0.0, stats.average_padding_percentage);
    }

    #[test]
    fn test_sizeof_line() {
        assert_eq!("sizeof(S1) = 8", sizeof_line("S1", 8));
    }

    #[test]
    fn test_timestamp_shape() {
        let stamp = current_timestamp();
        let (secs, millis) = stamp.split_once('.').unwrap();
        assert!(secs.parse::<u64>().is_ok());
        assert_eq!(3, millis.len());
        assert!(millis.parse::<u32>().is_ok());
    }

    #[test]
    fn test_report_carries_package_version() {
        let report = LayoutReport::new(Vec::new());
        assert_eq!(env!("CARGO_PKG_VERSION"), report.version);
    }

    #[test]
    fn test_write_round_trip() {
        let path = std::env::temp_dir().join(format!("clayout_write_{}.txt", std::process::id()));
        write_string_to_file(&path, "sizeof(S1) = 8\n").unwrap();
        assert_eq!("sizeof(S1) = 8\n", std::fs::read_to_string(&path).unwrap());
        std::fs::remove_file(&path).ok();
    }

    #[test]
    #[cfg(target_os = "linux")]
    fn test_write_failure_is_reported() {
        // /dev/full accepts the open and fails the flush.
        let err = write_string_to_file(Path::new("/dev/full"), "sizeof(S1) = 8\n");
        assert!(matches!(err, Err(LayoutError::Io(_))));
    }
}
