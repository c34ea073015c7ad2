//! Scales that map dataset values onto chart coordinates and colors.
//!
//! Four scales are derived from a [`Dataset`], always from scratch:
//!
//! - `x`: linear, year → horizontal pixel
//! - `y`: band, month (1..=12) → top of an equal-height row
//! - `color`: quantize, variance → one of the bucket colors
//! - `legend`: linear over absolute temperature plus the bucket edges, for
//!   the legend strip's axis
//!
//! The legend buckets are the color buckets moved by the base temperature.
//! They are never computed independently, so a legend edge always matches a
//! color edge.

use crate::config::ChartConfig;
use crate::dataset::{Dataset, Extent};
use crate::error::{HeatMapError, Result};
use crate::months::MONTHS;
use crate::ticks;

/// Continuous linear map from `domain` to `range`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// A degenerate domain maps everything to the middle of the range.
    pub fn scale(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let t = if d1 == d0 {
            0.5
        } else {
            (value - d0) / (d1 - d0)
        };
        r0 + t * (r1 - r0)
    }

    pub fn invert(&self, px: f64) -> f64 {
        LinearScale::new(self.range, self.domain).scale(px)
    }

    pub fn ticks(&self, count: usize) -> Vec<f64> {
        ticks::ticks(self.domain.0, self.domain.1, count)
    }

    pub fn tick_format(&self, count: usize) -> impl Fn(f64) -> String {
        ticks::default_tick_format(self.domain.0, self.domain.1, count)
    }
}

/// Discrete ordered domain onto equal, contiguous bands. No padding.
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale {
    domain: Vec<u32>,
    range: (f64, f64),
    step: f64,
}

impl BandScale {
    pub fn new(domain: Vec<u32>, range: (f64, f64)) -> Self {
        let step = if domain.is_empty() {
            0.0
        } else {
            (range.1 - range.0) / domain.len() as f64
        };
        Self {
            domain,
            range,
            step,
        }
    }

    pub fn domain(&self) -> &[u32] {
        &self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Start of the band for `value`, if it is in the domain.
    pub fn scale(&self, value: u32) -> Option<f64> {
        let index = self.domain.iter().position(|v| *v == value)?;
        Some(self.range.0 + index as f64 * self.step)
    }

    pub fn bandwidth(&self) -> f64 {
        self.step
    }

    /// Domain value whose band contains `px`.
    pub fn locate(&self, px: f64) -> Option<u32> {
        if self.step <= 0.0 || px < self.range.0 || px >= self.range.1 {
            return None;
        }
        let index = ((px - self.range.0) / self.step).floor() as usize;
        self.domain.get(index).copied()
    }
}

/// Continuous domain onto `range.len()` outputs of equal input width.
#[derive(Debug, Clone, PartialEq)]
pub struct QuantizeScale {
    domain: Extent,
    range: Vec<String>,
    thresholds: Vec<f64>,
}

impl QuantizeScale {
    pub fn new(domain: Extent, range: Vec<String>) -> Self {
        let n = range.len().saturating_sub(1) as f64;
        let thresholds = (0..range.len().saturating_sub(1))
            .map(|i| {
                let i = i as f64;
                ((i + 1.0) * domain.max - (i - n) * domain.min) / (n + 1.0)
            })
            .collect();
        Self {
            domain,
            range,
            thresholds,
        }
    }

    pub fn domain(&self) -> Extent {
        self.domain
    }

    pub fn range(&self) -> &[String] {
        &self.range
    }

    /// Interior bucket edges, ascending.
    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    pub fn len(&self) -> usize {
        self.range.len()
    }

    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }

    /// Index of the bucket holding `value`. A value on an edge belongs to
    /// the upper bucket; values outside the domain clamp to the ends.
    pub fn bucket(&self, value: f64) -> usize {
        self.thresholds.partition_point(|t| *t <= value)
    }

    pub fn scale(&self, value: f64) -> &str {
        &self.range[self.bucket(value)]
    }

    /// Input interval covered by bucket `index`.
    pub fn bucket_extent(&self, index: usize) -> Option<Extent> {
        if index >= self.range.len() {
            return None;
        }
        let min = if index == 0 {
            self.domain.min
        } else {
            self.thresholds[index - 1]
        };
        let max = self
            .thresholds
            .get(index)
            .copied()
            .unwrap_or(self.domain.max);
        Some(Extent { min, max })
    }

    /// Same buckets and colors over a domain moved by `offset`.
    pub fn shifted(&self, offset: f64) -> Self {
        QuantizeScale::new(self.domain.shifted(offset), self.range.clone())
    }
}

/// Everything the legend strip needs, in absolute temperature.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendScale {
    /// Temperature → pixel inside the legend strip.
    pub axis: LinearScale,
    /// The color buckets over temperature.
    pub buckets: QuantizeScale,
    /// Bucket edges: `min + i * step` for `i` in `0..=buckets`.
    pub tick_values: Vec<f64>,
}

impl LegendScale {
    fn new(color: &QuantizeScale, base_temperature: f64, width: f64) -> Self {
        let buckets = color.shifted(base_temperature);
        let extent = buckets.domain();
        let count = buckets.len();
        let step = if count == 0 {
            0.0
        } else {
            extent.span() / count as f64
        };
        let tick_values = (0..=count).map(|i| extent.min + i as f64 * step).collect();
        Self {
            axis: LinearScale::new((extent.min, extent.max), (0.0, width)),
            buckets,
            tick_values,
        }
    }

    /// Tick labels with two decimals.
    pub fn tick_labels(&self) -> Vec<String> {
        self.tick_values
            .iter()
            .map(|v| ticks::format_fixed(*v, 2))
            .collect()
    }
}

/// The four scales derived from one dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct Scales {
    pub x: LinearScale,
    pub y: BandScale,
    pub color: QuantizeScale,
    pub legend: LegendScale,
    /// Width of one year column.
    pub cell_width: f64,
    pub years: (i32, i32),
    pub base_temperature: f64,
}

impl Scales {
    /// Build every scale from scratch. Fails on an empty dataset.
    pub fn build(dataset: &Dataset, config: &ChartConfig) -> Result<Self> {
        if dataset.is_empty() {
            return Err(HeatMapError::EmptyDataset);
        }
        if config.colors.is_empty() {
            return Err(HeatMapError::InvalidFormat(
                "no bucket colors configured".to_string(),
            ));
        }

        let (first_year, last_year) = dataset.year_range()?;
        let variance = dataset.variance_extent()?;

        let x = LinearScale::new((first_year as f64, last_year as f64), config.x_range());
        let year_span = last_year as f64 - first_year as f64;
        let cell_width = config.plot_width() / (year_span + 1.0);

        let y = BandScale::new(MONTHS.to_vec(), config.y_range());
        let color = QuantizeScale::new(variance, config.colors.clone());
        let legend = LegendScale::new(&color, dataset.base_temperature, config.legend.width);

        log::debug!(
            "Scales built: years {}..={}, variance [{:.3}, {:.3}], cell width {:.3}",
            first_year,
            last_year,
            variance.min,
            variance.max,
            cell_width
        );

        Ok(Self {
            x,
            y,
            color,
            legend,
            cell_width,
            years: (first_year, last_year),
            base_temperature: dataset.base_temperature,
        })
    }

    /// Horizontal position of a year column.
    pub fn year_x(&self, year: i32) -> f64 {
        self.x.scale(year as f64)
    }

    /// Horizontal position of `year + offset`, which may fall outside `i32`.
    pub fn year_offset_x(&self, year: i32, offset: i32) -> f64 {
        self.x.scale(year as f64 + offset as f64)
    }

    /// Pixel distance between adjacent year columns.
    pub fn year_step(&self) -> f64 {
        let (first, last) = self.years;
        if last == first {
            self.cell_width
        } else {
            let (r0, r1) = self.x.range();
            (r1 - r0) / (last as f64 - first as f64)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::MonthRecord;

    const SAMPLE: &str = include_str!("../../fixtures/global-temperature-sample.json");
    const EPSILON: f64 = 1e-9;

    fn two_record_dataset() -> Dataset {
        Dataset {
            base_temperature: 10.0,
            monthly_variance: vec![
                MonthRecord {
                    year: 2000,
                    month: 1,
                    variance: -1.0,
                },
                MonthRecord {
                    year: 2001,
                    month: 1,
                    variance: 1.0,
                },
            ],
        }
    }

    #[test]
    fn test_two_record_scenario() {
        let dataset = two_record_dataset();
        let scales = Scales::build(&dataset, &ChartConfig::default()).unwrap();

        assert_eq!(scales.color.domain(), Extent { min: -1.0, max: 1.0 });
        assert_eq!(scales.color.bucket(-1.0), 0);
        assert_eq!(scales.color.scale(-1.0), "#55CCFF");
        assert_eq!(scales.color.bucket(1.0), 5);
        assert_eq!(scales.color.scale(1.0), "#FFCC00");
    }

    #[test]
    fn test_buckets_partition_the_domain() {
        let dataset = Dataset::from_json(SAMPLE).unwrap();
        let scales = Scales::build(&dataset, &ChartConfig::default()).unwrap();
        let color = &scales.color;
        let domain = color.domain();
        let width = domain.span() / 6.0;

        let mut previous_max = domain.min;
        for i in 0..color.len() {
            let bucket = color.bucket_extent(i).unwrap();
            assert!((bucket.min - previous_max).abs() < EPSILON, "bucket {} not contiguous", i);
            assert!((bucket.span() - width).abs() < EPSILON, "bucket {} not equal width", i);
            // Interior points of a bucket map to that bucket.
            assert_eq!(color.bucket(bucket.min + bucket.span() / 2.0), i);
            previous_max = bucket.max;
        }
        assert!((previous_max - domain.max).abs() < EPSILON);
        assert!(color.bucket_extent(6).is_none());
    }

    #[test]
    fn test_edges_go_to_upper_bucket_and_outliers_clamp() {
        let color = QuantizeScale::new(
            Extent { min: 0.0, max: 6.0 },
            crate::config::BUCKET_COLORS.iter().map(|c| c.to_string()).collect(),
        );
        assert_eq!(color.thresholds(), &[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(color.bucket(1.0), 1);
        assert_eq!(color.bucket(0.999), 0);
        assert_eq!(color.bucket(-50.0), 0);
        assert_eq!(color.bucket(50.0), 5);
    }

    #[test]
    fn test_equal_variance_gets_equal_color() {
        let mut dataset = Dataset::from_json(SAMPLE).unwrap();
        dataset.monthly_variance.push(MonthRecord {
            year: 1900,
            month: 6,
            variance: -0.568,
        });
        let scales = Scales::build(&dataset, &ChartConfig::default()).unwrap();
        let colors: Vec<&str> = dataset
            .monthly_variance
            .iter()
            .filter(|r| r.variance == -0.568)
            .map(|r| scales.color.scale(r.variance))
            .collect();
        assert_eq!(colors.len(), 2);
        assert_eq!(colors[0], colors[1]);
    }

    #[test]
    fn test_x_is_monotonic_in_year() {
        let dataset = Dataset::from_json(SAMPLE).unwrap();
        let scales = Scales::build(&dataset, &ChartConfig::default()).unwrap();

        assert_eq!(scales.year_x(1753), 120.0);
        assert_eq!(scales.year_x(2015), 1260.0);
        let mut last = f64::NEG_INFINITY;
        for year in 1753..=2015 {
            let x = scales.year_x(year);
            assert!(x >= last);
            last = x;
        }
        assert_eq!(scales.year_x(1900), scales.year_x(1900));
    }

    #[test]
    fn test_cell_width_covers_every_year() {
        let dataset = Dataset::from_json(SAMPLE).unwrap();
        let scales = Scales::build(&dataset, &ChartConfig::default()).unwrap();
        assert!((scales.cell_width - 1140.0 / 263.0).abs() < EPSILON);
        assert!((scales.year_step() - 1140.0 / 262.0).abs() < EPSILON);
    }

    #[test]
    fn test_month_bands_ordered_and_disjoint() {
        let dataset = two_record_dataset();
        let scales = Scales::build(&dataset, &ChartConfig::default()).unwrap();
        let y = &scales.y;
        let band = y.bandwidth();
        assert!((band - 460.0 / 12.0).abs() < EPSILON);

        assert_eq!(y.scale(1), Some(80.0));
        for month in 1..12 {
            let top = y.scale(month).unwrap();
            let next = y.scale(month + 1).unwrap();
            assert!(top < next, "January must sit above December");
            assert!((next - (top + band)).abs() < EPSILON);
        }
        assert!((y.scale(12).unwrap() + band - 540.0).abs() < EPSILON);
        assert_eq!(y.scale(13), None);
    }

    #[test]
    fn test_band_locate_inverts_scale() {
        let y = BandScale::new(MONTHS.to_vec(), (80.0, 540.0));
        for month in MONTHS {
            let top = y.scale(month).unwrap();
            assert_eq!(y.locate(top + y.bandwidth() / 2.0), Some(month));
        }
        assert_eq!(y.locate(79.9), None);
        assert_eq!(y.locate(540.0), None);
    }

    #[test]
    fn test_legend_ticks_match_color_edges() {
        let dataset = Dataset::from_json(SAMPLE).unwrap();
        let scales = Scales::build(&dataset, &ChartConfig::default()).unwrap();
        let legend = &scales.legend;
        let temperature = dataset.temperature_extent().unwrap();

        assert_eq!(legend.tick_values.len(), 7);
        assert!((legend.tick_values[0] - temperature.min).abs() < EPSILON);
        assert!((legend.tick_values[6] - temperature.max).abs() < EPSILON);
        for (i, edge) in scales.color.thresholds().iter().enumerate() {
            assert!((legend.tick_values[i + 1] - (edge + dataset.base_temperature)).abs() < 1e-6);
        }
        for record in &dataset.monthly_variance {
            let temp = record.temperature(dataset.base_temperature);
            assert_eq!(
                legend.buckets.scale(temp),
                scales.color.scale(record.variance)
            );
        }

        assert_eq!(legend.axis.range(), (0.0, 300.0));
        assert_eq!(legend.tick_labels()[0], "6.44");
        assert_eq!(legend.tick_labels()[6], "10.04");
    }

    #[test]
    fn test_single_year_dataset() {
        let dataset = Dataset {
            base_temperature: 8.0,
            monthly_variance: vec![MonthRecord {
                year: 1990,
                month: 3,
                variance: 0.5,
            }],
        };
        let scales = Scales::build(&dataset, &ChartConfig::default()).unwrap();
        assert_eq!(scales.cell_width, 1140.0);
        assert_eq!(scales.year_x(1990), 690.0);
        assert_eq!(scales.color.scale(0.5), "#FFCC00");
    }

    #[test]
    fn test_full_i32_year_range() {
        let dataset = Dataset {
            base_temperature: 8.0,
            monthly_variance: vec![
                MonthRecord {
                    year: i32::MIN,
                    month: 1,
                    variance: -1.0,
                },
                MonthRecord {
                    year: i32::MAX,
                    month: 12,
                    variance: 1.0,
                },
            ],
        };
        let scales = Scales::build(&dataset, &ChartConfig::default()).unwrap();
        assert!(scales.cell_width > 0.0 && scales.cell_width.is_finite());
        assert_eq!(scales.year_x(i32::MIN), 120.0);
        assert_eq!(scales.year_x(i32::MAX), 1260.0);
        assert!(scales.year_step().is_finite());
        assert!(scales.year_offset_x(i32::MAX, 10) > 1260.0);
    }

    #[test]
    fn test_empty_dataset_is_rejected() {
        let dataset = Dataset {
            base_temperature: 8.66,
            monthly_variance: Vec::new(),
        };
        assert!(matches!(
            Scales::build(&dataset, &ChartConfig::default()),
            Err(HeatMapError::EmptyDataset)
        ));
    }

    #[test]
    fn test_linear_invert() {
        let x = LinearScale::new((1753.0, 2015.0), (120.0, 1260.0));
        assert!((x.invert(x.scale(1900.0)) - 1900.0).abs() < EPSILON);
    }
}
