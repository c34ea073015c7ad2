//! The drawing root and the elements drawn into it.
//!
//! A [`Surface`] is created once by the [`Renderer`](crate::render::Renderer)
//! and reused for every render. It holds plain data (positions, labels,
//! colors) that a host turns into SVG elements; it never touches the DOM.

use crate::config::ChartConfig;
use crate::dataset::MonthRecord;
use crate::scale::Scales;
use crate::tooltip::TooltipController;
use std::collections::HashMap;

/// Which side of the plot an axis is drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisOrient {
    Bottom,
    Left,
}

/// One tick mark and its label.
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub value: f64,
    /// Position along the axis, in the axis' own coordinates.
    pub offset: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    pub id: Option<String>,
    pub orient: AxisOrient,
    pub translate: (f64, f64),
    /// Extent of the domain line.
    pub range: (f64, f64),
    pub ticks: Vec<Tick>,
}

impl Axis {
    pub const TICK_SIZE: f64 = 6.0;
    pub const TICK_PADDING: f64 = 3.0;

    /// Path data for the domain line, with outer ticks at both ends.
    pub fn domain_path(&self) -> String {
        let (r0, r1) = self.range;
        let outer = Self::TICK_SIZE;
        match self.orient {
            AxisOrient::Bottom => format!("M{r0},{outer}V0H{r1}V{outer}"),
            AxisOrient::Left => format!("M{},{r0}H0V{r1}H{}", -outer, -outer),
        }
    }

    /// SVG `transform` placing the axis.
    pub fn transform(&self) -> String {
        translate(self.translate)
    }

    /// Distance from the domain line to a tick label.
    pub fn label_offset(&self) -> f64 {
        Self::TICK_SIZE + Self::TICK_PADDING
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    pub color: String,
    pub width: f64,
}

/// One colored rectangle per monthly record.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub record: MonthRecord,
    pub temperature: f64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: String,
    /// Set while the cell is hovered.
    pub stroke: Option<Stroke>,
}

impl Cell {
    /// Zero-based month, as exposed in `data-month`.
    pub fn data_month(&self) -> u32 {
        self.record.month - 1
    }

    pub fn contains(&self, px: f64, py: f64) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Swatch {
    pub x: f64,
    pub width: f64,
    pub height: f64,
    pub fill: String,
}

/// Color legend: swatches in bucket order over an axis of bucket edges.
#[derive(Debug, Clone, PartialEq)]
pub struct Legend {
    pub translate: (f64, f64),
    pub swatches: Vec<Swatch>,
    pub axis: Axis,
}

impl Legend {
    pub fn transform(&self) -> String {
        translate(self.translate)
    }
}

fn translate((x, y): (f64, f64)) -> String {
    format!("translate({x},{y})")
}

/// The single drawing root of the chart.
#[derive(Debug, Clone)]
pub struct Surface {
    width: f64,
    height: f64,
    pub(crate) scales: Option<Scales>,
    pub(crate) x_axis: Option<Axis>,
    pub(crate) y_axis: Option<Axis>,
    pub(crate) legend: Option<Legend>,
    pub(crate) cells: Vec<Cell>,
    pub(crate) cell_index: HashMap<(i32, u32), usize>,
    pub(crate) tooltip: TooltipController,
}

impl Surface {
    pub(crate) fn new(config: &ChartConfig) -> Self {
        Self {
            width: config.width,
            height: config.height,
            scales: None,
            x_axis: None,
            y_axis: None,
            legend: None,
            cells: Vec::new(),
            cell_index: HashMap::new(),
            tooltip: TooltipController::new(&config.tooltip),
        }
    }

    /// Remove everything drawn so far and hide the tooltip.
    pub fn clear(&mut self) {
        self.scales = None;
        self.x_axis = None;
        self.y_axis = None;
        self.legend = None;
        self.cells.clear();
        self.cell_index.clear();
        self.tooltip.reset();
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn scales(&self) -> Option<&Scales> {
        self.scales.as_ref()
    }

    pub fn x_axis(&self) -> Option<&Axis> {
        self.x_axis.as_ref()
    }

    pub fn y_axis(&self) -> Option<&Axis> {
        self.y_axis.as_ref()
    }

    pub fn legend(&self) -> Option<&Legend> {
        self.legend.as_ref()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn tooltip(&self) -> &TooltipController {
        &self.tooltip
    }

    pub(crate) fn push_cell(&mut self, cell: Cell) {
        let key = (cell.record.year, cell.record.month);
        // Later cells paint over earlier ones, so they win the hit test.
        self.cell_index.insert(key, self.cells.len());
        self.cells.push(cell);
    }

    /// Index of the cell under `(px, py)`, if any.
    pub fn cell_at(&self, px: f64, py: f64) -> Option<usize> {
        let scales = self.scales.as_ref()?;
        let month = scales.y.locate(py)?;
        let (first_year, last_year) = scales.years;
        let column = ((px - scales.year_x(first_year)) / scales.year_step()).floor();
        if !column.is_finite() || column < 0.0 || column > last_year as f64 - first_year as f64 {
            return None;
        }
        let year = i32::try_from(i64::from(first_year) + column as i64).ok()?;
        let index = *self.cell_index.get(&(year, month))?;
        self.cells[index].contains(px, py).then_some(index)
    }

    /// Pointer entered cell `index`. Returns whether the tooltip is shown.
    pub fn pointer_enter(&mut self, index: usize) -> bool {
        match &self.scales {
            Some(scales) => self.tooltip.enter(index, &mut self.cells, scales),
            None => false,
        }
    }

    /// Pointer left cell `index`.
    pub fn pointer_leave(&mut self, index: usize) {
        self.tooltip.leave(index, &mut self.cells);
    }

    /// Hover tracking for hosts that only report pointer coordinates.
    pub fn pointer_move(&mut self, px: f64, py: f64) {
        let hit = self.cell_at(px, py);
        let active = self.tooltip.active_cell();
        if hit == active {
            return;
        }
        if let Some(previous) = active {
            self.pointer_leave(previous);
        }
        if let Some(index) = hit {
            self.pointer_enter(index);
        }
    }
}
