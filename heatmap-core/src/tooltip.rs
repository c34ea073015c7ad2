//! Hover tooltip state machine.
//!
//! There is one tooltip for the whole chart. Entering a cell moves it next to
//! that cell and rewrites its three lines; leaving the cell hides it. The
//! controller owns the box and text elements, and it also owns the hovered
//! cell's highlight stroke.

use crate::config::TooltipConfig;
use crate::dataset::MonthRecord;
use crate::months::month_name;
use crate::scale::Scales;
use crate::surface::{Cell, Stroke};
use crate::ticks::format_fixed;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TooltipState {
    Hidden,
    Visible { cell: usize },
}

#[derive(Debug, Clone, PartialEq)]
pub struct TooltipText {
    pub id: &'static str,
    /// Baseline relative to the tooltip group.
    pub y: f64,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TooltipBox {
    pub width: f64,
    pub height: f64,
    pub fill: String,
    pub opacity: f64,
}

const TEXT_IDS: [&str; 3] = ["tooltip-text1", "tooltip-text2", "tooltip-text3"];

/// `Year: …`, `Month: …`, `Temperature: …` for one record.
pub fn tooltip_lines(record: &MonthRecord, base_temperature: f64) -> [String; 3] {
    let month = month_name(record.month).unwrap_or("Unknown");
    [
        format!("Year: {}", record.year),
        format!("Month: {}", month),
        format!(
            "Temperature: {}",
            format_fixed(record.temperature(base_temperature), 3)
        ),
    ]
}

#[derive(Debug, Clone)]
pub struct TooltipController {
    config: TooltipConfig,
    state: TooltipState,
    translate: (f64, f64),
    tooltip_box: TooltipBox,
    lines: [TooltipText; 3],
}

impl TooltipController {
    pub fn new(config: &TooltipConfig) -> Self {
        let lines = [0, 1, 2].map(|i| TooltipText {
            id: TEXT_IDS[i],
            y: config.line_spacing * (i + 1) as f64,
            text: String::new(),
        });
        Self {
            config: config.clone(),
            state: TooltipState::Hidden,
            translate: (0.0, 0.0),
            tooltip_box: TooltipBox {
                width: 0.0,
                height: 0.0,
                fill: config.fill.clone(),
                opacity: config.opacity,
            },
            lines,
        }
    }

    pub fn state(&self) -> TooltipState {
        self.state
    }

    pub fn is_visible(&self) -> bool {
        matches!(self.state, TooltipState::Visible { .. })
    }

    pub fn active_cell(&self) -> Option<usize> {
        match self.state {
            TooltipState::Visible { cell } => Some(cell),
            TooltipState::Hidden => None,
        }
    }

    pub fn translate(&self) -> (f64, f64) {
        self.translate
    }

    pub fn tooltip_box(&self) -> &TooltipBox {
        &self.tooltip_box
    }

    pub fn lines(&self) -> &[TooltipText; 3] {
        &self.lines
    }

    /// Hidden → Visible for `index`. A previously highlighted cell is cleared
    /// first. Returns false if `index` is out of bounds.
    pub fn enter(&mut self, index: usize, cells: &mut [Cell], scales: &Scales) -> bool {
        if index >= cells.len() {
            log::warn!("Pointer entered unknown cell {}", index);
            return false;
        }
        if let TooltipState::Visible { cell } = self.state {
            if cell != index {
                if let Some(previous) = cells.get_mut(cell) {
                    previous.stroke = None;
                }
            }
        }

        let cell = &mut cells[index];
        let texts = tooltip_lines(&cell.record, scales.base_temperature);
        let longest = texts.iter().map(|t| t.chars().count()).max().unwrap_or(0);
        for (line, text) in self.lines.iter_mut().zip(texts) {
            line.text = text;
        }

        self.tooltip_box.width = self.config.char_width * longest as f64;
        self.tooltip_box.height = 3.0 * self.config.line_height + 2.0 * self.config.padding;
        self.translate = (
            scales.year_offset_x(cell.record.year, self.config.year_offset),
            cell.y,
        );
        cell.stroke = Some(Stroke {
            color: self.config.highlight_stroke.clone(),
            width: self.config.highlight_stroke_width,
        });
        self.state = TooltipState::Visible { cell: index };
        true
    }

    /// Visible → Hidden when leaving the active cell.
    pub fn leave(&mut self, index: usize, cells: &mut [Cell]) {
        if self.active_cell() != Some(index) {
            return;
        }
        if let Some(cell) = cells.get_mut(index) {
            cell.stroke = None;
        }
        self.state = TooltipState::Hidden;
    }

    /// Back to Hidden without touching any cell. Used when the cells are
    /// being thrown away.
    pub fn reset(&mut self) {
        self.state = TooltipState::Hidden;
        self.translate = (0.0, 0.0);
        self.tooltip_box.width = 0.0;
        self.tooltip_box.height = 0.0;
        for line in &mut self.lines {
            line.text.clear();
        }
    }
}
