//! Batch command implementation

use anyhow::Result;
use chrono::NaiveDateTime;
use clap::{Args, ValueEnum};
use hablar_core::Parser;
use rayon::prelude::*;
use std::path::PathBuf;

use super::{datetime, gender, normalize, number, Session};
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{Outcome, Record};
use crate::progress::ProgressReporter;

/// What to do with each line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Operation {
    /// Read the number in each line
    Number,
    /// Rewrite number words as digits
    Normalize,
    /// Extract a date and time from each line
    Datetime,
    /// Classify the last word of each line
    Gender,
}

/// Arguments for the batch command
#[derive(Debug, Args)]
pub struct BatchArgs {
    /// Input files (supports glob patterns)
    #[arg(short, long, required = true, num_args = 1..)]
    pub input: Vec<String>,

    /// Operation applied to every non-blank line
    #[arg(short = 'm', long, value_enum, default_value_t = Operation::Normalize)]
    pub mode: Operation,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Number of worker threads (default: config, then CPU count)
    #[arg(short = 't', long, value_name = "COUNT")]
    pub threads: Option<usize>,

    /// Reference "now" for datetime mode, as YYYY-MM-DD HH:MM:SS
    #[arg(short = 'r', long, value_name = "TIME", value_parser = datetime::parse_reference)]
    pub reference: Option<NaiveDateTime>,

    /// Drop definite articles in normalize mode
    #[arg(short = 'a', long)]
    pub remove_articles: bool,
}

impl BatchArgs {
    /// Execute the batch command
    pub fn execute(&self, session: &Session) -> Result<()> {
        let files = resolve_patterns(&self.input)?;
        log::info!("Processing {} file(s) in {:?} mode", files.len(), self.mode);

        let parser = session.parser()?;
        let remove_articles = self.remove_articles || session.config.processing.remove_articles;
        let reference = self.reference();

        let threads = self.worker_threads(session);
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .map_err(|e| CliError::ProcessingError(e.to_string()))?;
        log::debug!("Using {threads} worker thread(s)");

        let mut progress = ProgressReporter::new(session.quiet || self.output.is_none());
        progress.init_files(files.len() as u64);

        let mut formatter = session.formatter(self.output.as_deref())?;
        for file in &files {
            let lines = FileReader::read_lines(file)?;
            let records: Vec<Record> = pool.install(|| {
                lines
                    .par_iter()
                    .map(|line| Record {
                        input: line.clone(),
                        outcome: self.apply(&parser, line, reference, remove_articles),
                    })
                    .collect()
            });

            let found = records.iter().filter(|r| r.outcome.is_found()).count();
            log::debug!(
                "{}: {found}/{} line(s) matched",
                file.display(),
                records.len()
            );

            for record in &records {
                formatter.format_record(record)?;
            }
            progress.file_completed(&file.display().to_string(), records.len());
        }
        formatter.finish()?;
        progress.finish();

        Ok(())
    }

    fn worker_threads(&self, session: &Session) -> usize {
        self.threads
            .filter(|&n| n > 0)
            .or(Some(session.config.performance.worker_threads).filter(|&n| n > 0))
            .unwrap_or_else(num_cpus::get)
    }

    /// Clock shared by every line of the batch
    fn reference(&self) -> NaiveDateTime {
        self.reference
            .unwrap_or_else(|| chrono::Local::now().naive_local())
    }

    fn apply(
        &self,
        parser: &Parser,
        line: &str,
        reference: NaiveDateTime,
        remove_articles: bool,
    ) -> Outcome {
        match self.mode {
            Operation::Number => number::read(parser, line),
            Operation::Normalize => normalize::rewrite(parser, line, remove_articles),
            Operation::Datetime => datetime::extract(parser, line, Some(reference)),
            Operation::Gender => gender::infer_line(parser, line),
        }
    }
}
