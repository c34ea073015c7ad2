//! Dataset model for the monthly global land-surface temperature series.
//!
//! The JSON document has the shape
//! `{ "baseTemperature": f64, "monthlyVariance": [{ "year", "month", "variance" }] }`.
//! Absolute temperature for a record is `baseTemperature + variance`.

use crate::error::{HeatMapError, Result};
use serde::{Deserialize, Serialize};

/// Default source of the dataset.
pub const DATASET_URL: &str =
    "https://raw.githubusercontent.com/freeCodeCamp/ProjectReferenceData/master/global-temperature.json";

/// One month of the series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthRecord {
    pub year: i32,
    /// Calendar month, 1 = January.
    pub month: u32,
    /// Deviation from the base temperature.
    pub variance: f64,
}

impl MonthRecord {
    /// Absolute temperature for this record.
    pub fn temperature(&self, base_temperature: f64) -> f64 {
        base_temperature + self.variance
    }
}

/// The fetched document. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub base_temperature: f64,
    pub monthly_variance: Vec<MonthRecord>,
}

/// Inclusive `[min, max]` of a numeric field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub min: f64,
    pub max: f64,
}

impl Extent {
    /// Single pass over `values`. `None` when there are no values.
    pub fn of<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        values.into_iter().fold(None, |acc, v| match acc {
            None => Some(Extent { min: v, max: v }),
            Some(e) => Some(Extent {
                min: e.min.min(v),
                max: e.max.max(v),
            }),
        })
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// The same extent moved by `offset`.
    pub fn shifted(&self, offset: f64) -> Self {
        Extent {
            min: self.min + offset,
            max: self.max + offset,
        }
    }
}

impl Dataset {
    /// Parse and validate a dataset document.
    pub fn from_json(json: &str) -> Result<Self> {
        let dataset: Dataset = serde_json::from_str(json)?;
        dataset.validate()?;
        log::info!(
            "Parsed dataset: {} monthly records, base temperature {}",
            dataset.len(),
            dataset.base_temperature
        );
        Ok(dataset)
    }

    /// Reject records that cannot be placed on the chart.
    pub fn validate(&self) -> Result<()> {
        if !self.base_temperature.is_finite() {
            return Err(HeatMapError::InvalidFormat(format!(
                "baseTemperature is not finite: {}",
                self.base_temperature
            )));
        }
        for record in &self.monthly_variance {
            if !(1..=12).contains(&record.month) {
                return Err(HeatMapError::InvalidMonth {
                    year: record.year,
                    month: record.month,
                });
            }
            if !record.variance.is_finite() {
                return Err(HeatMapError::InvalidFormat(format!(
                    "variance for {}-{:02} is not finite",
                    record.year, record.month
                )));
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.monthly_variance.len()
    }

    pub fn is_empty(&self) -> bool {
        self.monthly_variance.is_empty()
    }

    /// Earliest and latest year in the series.
    pub fn year_range(&self) -> Result<(i32, i32)> {
        let mut years = self.monthly_variance.iter().map(|r| r.year);
        let first = years.next().ok_or(HeatMapError::EmptyDataset)?;
        Ok(years.fold((first, first), |(lo, hi), y| (lo.min(y), hi.max(y))))
    }

    pub fn variance_extent(&self) -> Result<Extent> {
        Extent::of(self.monthly_variance.iter().map(|r| r.variance))
            .ok_or(HeatMapError::EmptyDataset)
    }

    /// Extent of absolute temperatures. Always the variance extent moved by
    /// the base temperature.
    pub fn temperature_extent(&self) -> Result<Extent> {
        Ok(self.variance_extent()?.shifted(self.base_temperature))
    }
}
