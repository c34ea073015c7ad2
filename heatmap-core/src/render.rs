//! Render pipeline: dataset → scales → drawing surface.
//!
//! The [`Renderer`] owns the one [`Surface`] of the chart. Every call to
//! [`Renderer::render`] clears the surface and redraws it from scratch, so
//! rendering the same dataset twice still leaves one surface with one cell
//! per record.

use crate::config::ChartConfig;
use crate::dataset::Dataset;
use crate::error::Result;
use crate::months::{month_name, MONTHS};
use crate::scale::Scales;
use crate::surface::{Axis, AxisOrient, Cell, Legend, Surface, Swatch, Tick};

/// Tick count hint for the year axis.
const YEAR_TICKS: usize = 10;

pub struct Renderer {
    config: ChartConfig,
    surface: Option<Surface>,
    surfaces_created: usize,
}

impl Renderer {
    pub fn new(config: ChartConfig) -> Self {
        Self {
            config,
            surface: None,
            surfaces_created: 0,
        }
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// The drawing root, once the first render has created it.
    pub fn surface(&self) -> Option<&Surface> {
        self.surface.as_ref()
    }

    pub fn surface_mut(&mut self) -> Option<&mut Surface> {
        self.surface.as_mut()
    }

    /// How many drawing roots this renderer has ever created.
    pub fn surfaces_created(&self) -> usize {
        self.surfaces_created
    }

    /// Clear the surface and draw `dataset` into it.
    ///
    /// An empty dataset returns [`HeatMapError::EmptyDataset`] and leaves
    /// the surface cleared.
    ///
    /// [`HeatMapError::EmptyDataset`]: crate::error::HeatMapError::EmptyDataset
    pub fn render(&mut self, dataset: &Dataset) -> Result<&Surface> {
        let config = &self.config;
        let created = &mut self.surfaces_created;
        let surface = self.surface.get_or_insert_with(|| {
            *created += 1;
            log::debug!("Creating drawing surface {}x{}", config.width, config.height);
            Surface::new(config)
        });

        surface.clear();
        let scales = match Scales::build(dataset, config) {
            Ok(scales) => scales,
            Err(e) => {
                log::warn!("Nothing to render: {}", e);
                return Err(e);
            }
        };

        surface.x_axis = Some(year_axis(&scales, config));
        surface.y_axis = Some(month_axis(&scales, config));
        draw_cells(surface, dataset, &scales);
        surface.legend = Some(legend(&scales, config));
        surface.scales = Some(scales);

        log::info!("Rendered {} cells", surface.cells.len());
        Ok(&*surface)
    }
}

fn year_axis(scales: &Scales, config: &ChartConfig) -> Axis {
    let format = scales.x.tick_format(YEAR_TICKS);
    let ticks = scales
        .x
        .ticks(YEAR_TICKS)
        .into_iter()
        .map(|value| Tick {
            value,
            offset: scales.x.scale(value),
            label: format(value),
        })
        .collect();
    Axis {
        id: Some("x-axis".to_string()),
        orient: AxisOrient::Bottom,
        translate: (0.0, config.height - config.margin.bottom),
        range: scales.x.range(),
        ticks,
    }
}

fn month_axis(scales: &Scales, config: &ChartConfig) -> Axis {
    let half_band = scales.y.bandwidth() / 2.0;
    let ticks = MONTHS
        .iter()
        .filter_map(|&month| {
            let top = scales.y.scale(month)?;
            Some(Tick {
                value: month as f64,
                offset: top + half_band,
                label: month_name(month)?.to_string(),
            })
        })
        .collect();
    Axis {
        id: Some("y-axis".to_string()),
        orient: AxisOrient::Left,
        translate: (config.margin.left, 0.0),
        range: scales.y.range(),
        ticks,
    }
}

fn draw_cells(surface: &mut Surface, dataset: &Dataset, scales: &Scales) {
    let height = scales.y.bandwidth();
    for record in &dataset.monthly_variance {
        let Some(y) = scales.y.scale(record.month) else {
            log::warn!(
                "Skipping record {}-{} outside the month bands",
                record.year,
                record.month
            );
            continue;
        };
        surface.push_cell(Cell {
            record: *record,
            temperature: record.temperature(dataset.base_temperature),
            x: scales.year_x(record.year),
            y,
            width: scales.cell_width,
            height,
            fill: scales.color.scale(record.variance).to_string(),
            stroke: None,
        });
    }
}

fn legend(scales: &Scales, config: &ChartConfig) -> Legend {
    let legend = &config.legend;
    let buckets = scales.legend.buckets.range();
    let swatch_width = legend.width / buckets.len() as f64;
    let swatches = buckets
        .iter()
        .enumerate()
        .map(|(i, color)| Swatch {
            x: i as f64 * swatch_width,
            width: swatch_width,
            height: legend.height,
            fill: color.clone(),
        })
        .collect();

    let ticks = scales
        .legend
        .tick_values
        .iter()
        .zip(scales.legend.tick_labels())
        .map(|(&value, label)| Tick {
            value,
            offset: scales.legend.axis.scale(value),
            label,
        })
        .collect();

    Legend {
        translate: (
            config.width / 2.0 - legend.width / 2.0,
            legend.height + legend.margin,
        ),
        swatches,
        axis: Axis {
            id: None,
            orient: AxisOrient::Bottom,
            translate: (0.0, legend.height),
            range: scales.legend.axis.range(),
            ticks,
        },
    }
}
