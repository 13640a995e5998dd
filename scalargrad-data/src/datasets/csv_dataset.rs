// scalargrad-data/src/datasets/csv_dataset.rs

use super::traits::Dataset;
use scalargrad_core::{Result, Sample, ScalarGradError};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Layout of a delimited numeric file.
///
/// Column indices are zero-based. Blank lines and lines starting with `#` are skipped.
#[derive(Debug, Clone)]
pub struct CsvOptions {
    pub delimiter: char,
    pub has_header: bool,
    pub feature_columns: Vec<usize>,
    pub target_column: usize,
    /// Applied to the raw target value of every record.
    pub target_map: Option<fn(f64) -> f64>,
}

impl Default for CsvOptions {
    fn default() -> Self {
        CsvOptions {
            delimiter: ',',
            has_header: false,
            feature_columns: Vec::new(),
            target_column: 0,
            target_map: None,
        }
    }
}

fn survived_label(raw: f64) -> f64 {
    if raw == 1.0 {
        1.0
    } else {
        -1.0
    }
}

impl CsvOptions {
    pub fn new(feature_columns: Vec<usize>, target_column: usize) -> Self {
        CsvOptions {
            feature_columns,
            target_column,
            ..Self::default()
        }
    }

    /// Road-accident records: an id, five features (age, gender, speed of impact, helmet
    /// used, seatbelt used) and the survival flag, which becomes `1.0` or `-1.0`.
    pub fn road_accident() -> Self {
        CsvOptions {
            target_map: Some(survived_label),
            ..Self::new(vec![1, 2, 3, 4, 5], 6)
        }
    }

    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }

    pub fn with_target_map(mut self, target_map: fn(f64) -> f64) -> Self {
        self.target_map = Some(target_map);
        self
    }

    fn validate(&self) -> Result<()> {
        if self.feature_columns.is_empty() {
            return Err(ScalarGradError::InvalidConfig(
                "CsvOptions needs at least one feature column".to_string(),
            ));
        }
        if self.feature_columns.contains(&self.target_column) {
            return Err(ScalarGradError::InvalidConfig(format!(
                "column {} is both a feature and the target",
                self.target_column
            )));
        }
        Ok(())
    }
}

/// Labelled samples read from a delimited text file, held in memory.
#[derive(Debug, Clone)]
pub struct CsvDataset {
    samples: Vec<Sample>,
    options: CsvOptions,
}

impl CsvDataset {
    pub fn from_path<P: AsRef<Path>>(path: P, options: CsvOptions) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            ScalarGradError::Io(format!("cannot open '{}': {}", path.display(), e))
        })?;
        let dataset = Self::from_reader(BufReader::new(file), options)?;
        log::info!("Loaded {} samples from '{}'", dataset.len(), path.display());
        Ok(dataset)
    }

    /// Parses every record of `reader`. Line numbers in errors are one-based.
    pub fn from_reader<R: BufRead>(reader: R, options: CsvOptions) -> Result<Self> {
        options.validate()?;

        let mut samples = Vec::new();
        let mut header_pending = options.has_header;
        for (line_num, line_result) in reader.lines().enumerate() {
            let line = line_result?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if header_pending {
                header_pending = false;
                log::debug!("Skipping header: {}", line);
                continue;
            }
            samples.push(parse_record(line, line_num + 1, &options)?);
        }

        if samples.is_empty() {
            log::warn!("CSV input contained no records");
        }
        Ok(CsvDataset { samples, options })
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn into_samples(self) -> Vec<Sample> {
        self.samples
    }

    pub fn options(&self) -> &CsvOptions {
        &self.options
    }

    /// Number of features per sample.
    pub fn num_features(&self) -> usize {
        self.options.feature_columns.len()
    }
}

fn parse_record(line: &str, line_num: usize, options: &CsvOptions) -> Result<Sample> {
    let fields: Vec<&str> = line.split(options.delimiter).map(str::trim).collect();
    let field = |column: usize| -> Result<f64> {
        let raw = fields.get(column).ok_or_else(|| ScalarGradError::Parse {
            line: line_num,
            column,
            message: format!("record has only {} fields", fields.len()),
        })?;
        raw.parse::<f64>().map_err(|e| ScalarGradError::Parse {
            line: line_num,
            column,
            message: format!("'{}': {}", raw, e),
        })
    };

    let features = options
        .feature_columns
        .iter()
        .map(|&c| field(c))
        .collect::<Result<Vec<f64>>>()?;
    let raw_target = field(options.target_column)?;
    let target = match options.target_map {
        Some(map) => map(raw_target),
        None => raw_target,
    };
    Ok(Sample::new(features, target))
}

impl Dataset for CsvDataset {
    type Item = Sample;

    fn get(&self, index: usize) -> Result<Sample> {
        self.samples
            .get(index)
            .cloned()
            .ok_or(ScalarGradError::IndexOutOfBounds {
                index,
                len: self.samples.len(),
            })
    }

    fn len(&self) -> usize {
        self.samples.len()
    }
}

#[cfg(test)]
#[path = "csv_dataset_test.rs"]
mod tests;
