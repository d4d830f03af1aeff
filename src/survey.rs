//! Budgeted survey
//!
//! Issues one full subject-details query per subject until a wall-clock
//! budget runs out. The budget is checked before each query starts; a query
//! that has started always runs to completion.

use crate::config::SurveyConfig;
use crate::graph::GraphResult;
use crate::query::CastGraph;
use rayon::prelude::*;
use serde::Serialize;
use std::time::Instant;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SurveyReport {
    /// Queries completed within the budget
    pub queries: usize,
    /// Subjects available to query
    pub subjects: usize,
    pub elapsed_ms: u64,
    pub budget_secs: u64,
    /// True if the budget ran out before every subject was queried
    pub budget_exhausted: bool,
}

pub fn run_survey(graph: &CastGraph, config: &SurveyConfig) -> GraphResult<SurveyReport> {
    let budget = config.budget();
    let names: Vec<&str> = graph.subjects().collect();
    let start = Instant::now();

    let queries = if config.parallel {
        names
            .par_iter()
            .map(|name| {
                if start.elapsed() >= budget {
                    return Ok(0);
                }
                graph.subject_details(name).map(|query| {
                    query.summary();
                    1
                })
            })
            .collect::<GraphResult<Vec<usize>>>()?
            .into_iter()
            .sum()
    } else {
        let mut queries = 0;
        for name in &names {
            if start.elapsed() >= budget {
                break;
            }
            graph.subject_details(name)?.summary();
            queries += 1;
        }
        queries
    };

    let report = SurveyReport {
        queries,
        subjects: names.len(),
        elapsed_ms: start.elapsed().as_millis() as u64,
        budget_secs: config.budget_secs,
        budget_exhausted: queries < names.len(),
    };

    info!(
        "Survey finished: {}/{} queries in {} ms",
        report.queries, report.subjects, report.elapsed_ms
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::CastGraphBuilder;

    fn graph() -> CastGraph {
        let mut builder = CastGraphBuilder::new();
        builder.add_record("M1", ["A", "B", "C"]).unwrap();
        builder.add_record("M2", ["C", "D"]).unwrap();
        builder.add_record("M3", ["E"]).unwrap();
        builder.build()
    }

    #[test]
    fn test_sequential_survey_covers_every_subject() {
        let config = SurveyConfig {
            budget_secs: 60,
            parallel: false,
        };
        let report = run_survey(&graph(), &config).unwrap();

        assert_eq!(report.queries, 5);
        assert_eq!(report.subjects, 5);
        assert!(!report.budget_exhausted);
    }

    #[test]
    fn test_parallel_survey_covers_every_subject() {
        let config = SurveyConfig {
            budget_secs: 60,
            parallel: true,
        };
        let report = run_survey(&graph(), &config).unwrap();

        assert_eq!(report.queries, 5);
        assert!(!report.budget_exhausted);
    }

    #[test]
    fn test_zero_budget_issues_no_queries() {
        for parallel in [false, true] {
            let config = SurveyConfig {
                budget_secs: 0,
                parallel,
            };
            let report = run_survey(&graph(), &config).unwrap();

            assert_eq!(report.queries, 0);
            assert!(report.budget_exhausted);
        }
    }
}
