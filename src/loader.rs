//! Record ingestion
//!
//! Reads one grouping per line, followed by its subjects, all separated by the
//! configured delimiter:
//!
//! ```text
//! Apollo 13 (1995)/Hanks, Tom/Bacon, Kevin/Paxton, Bill
//! ```

use crate::config::LoaderConfig;
use crate::graph::{CastGraphBuilder, GraphError};
use crate::query::CastGraph;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed record on line {line}: {reason}")]
    Malformed { line: usize, reason: String },

    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),
}

pub type LoadResult<T> = Result<T, LoadError>;

/// A parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record<'a> {
    pub grouping: &'a str,
    pub subjects: Vec<&'a str>,
}

/// Parse one line. Returns `Ok(None)` for a blank line that should be skipped.
pub fn parse_record<'a>(
    line: &'a str,
    line_no: usize,
    config: &LoaderConfig,
) -> LoadResult<Option<Record<'a>>> {
    let content = if config.trim { line.trim() } else { line };
    if content.is_empty() && config.skip_blank_lines {
        return Ok(None);
    }

    let mut fields = content.split(config.delimiter).map(|field| {
        if config.trim {
            field.trim()
        } else {
            field
        }
    });

    let grouping = fields.next().unwrap_or_default();
    if grouping.is_empty() {
        return Err(LoadError::Malformed {
            line: line_no,
            reason: "missing grouping name".to_string(),
        });
    }

    let subjects = fields.filter(|s| !s.is_empty()).collect();
    Ok(Some(Record { grouping, subjects }))
}

/// Feed every record from `reader` into `builder`
pub fn ingest<R: BufRead>(
    builder: &mut CastGraphBuilder,
    reader: R,
    config: &LoaderConfig,
) -> LoadResult<usize> {
    let mut records = 0;

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = i + 1;
        let Some(record) = parse_record(&line, line_no, config)? else {
            continue;
        };

        if record.subjects.is_empty() {
            warn!("Grouping '{}' on line {} has no subjects", record.grouping, line_no);
        }

        builder.add_record(record.grouping, record.subjects.iter().copied())?;
        records += 1;
    }

    debug!("Ingested {} records", records);
    Ok(records)
}

pub fn load_from_reader<R: BufRead>(reader: R, config: &LoaderConfig) -> LoadResult<CastGraph> {
    let mut builder = CastGraphBuilder::new();
    let records = ingest(&mut builder, reader, config)?;
    info!(
        "Loaded {} records into {} vertices and {} edges",
        records,
        builder.vertex_count(),
        builder.edge_count()
    );
    Ok(builder.build())
}

pub fn load_from_path(path: impl AsRef<Path>, config: &LoaderConfig) -> LoadResult<CastGraph> {
    let path = path.as_ref();
    info!("Loading cast data from {:?}", path);
    let file = File::open(path)?;
    load_from_reader(BufReader::new(file), config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_record() {
        let config = LoaderConfig::default();
        let record = parse_record("Diner (1982)/ Bacon, Kevin /Rourke, Mickey", 1, &config)
            .unwrap()
            .unwrap();

        assert_eq!(record.grouping, "Diner (1982)");
        assert_eq!(record.subjects, vec!["Bacon, Kevin", "Rourke, Mickey"]);
    }

    #[test]
    fn test_parse_record_skips_blank_and_empty_fields() {
        let config = LoaderConfig::default();
        assert_eq!(parse_record("   ", 3, &config).unwrap(), None);

        let record = parse_record("M//A/", 1, &config).unwrap().unwrap();
        assert_eq!(record.subjects, vec!["A"]);
    }

    #[test]
    fn test_parse_record_rejects_missing_grouping() {
        let config = LoaderConfig::default();
        let err = parse_record("/A/B", 7, &config).unwrap_err();
        assert!(matches!(err, LoadError::Malformed { line: 7, .. }));
    }

    #[test]
    fn test_custom_delimiter() {
        let config = LoaderConfig {
            delimiter: '|',
            ..LoaderConfig::default()
        };
        let record = parse_record("M|A/B|C", 1, &config).unwrap().unwrap();
        assert_eq!(record.subjects, vec!["A/B", "C"]);
    }

    #[test]
    fn test_load_from_reader() {
        let data = "M1/X/Y\n\nM2/Y/Z\nM3/A/B\n";
        let graph = load_from_reader(Cursor::new(data), &LoaderConfig::default()).unwrap();

        assert_eq!(graph.subject_count(), 5);
        assert_eq!(graph.grouping_count(), 3);
        assert_eq!(graph.component_count(), 2);
        assert_eq!(graph.components(), vec!["X", "A"]);
    }

    #[test]
    fn test_load_reports_line_numbers() {
        let data = "M1/X\n/Y\n";
        let err = load_from_reader(Cursor::new(data), &LoaderConfig::default()).unwrap_err();
        assert_eq!(err.to_string(), "Malformed record on line 2: missing grouping name");
    }
}
