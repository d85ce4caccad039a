use crate::{
    components::{Line, Rectangle, Text},
    course::Weekday,
    geometry::{AxisBounds, TimeBlock},
    render::CanvasSize,
    utils::{format_minutes, label_color},
};
use svg::{node::element::Group, Document};

const PADDING: f32 = 30.0;
const TITLE_FONT_SIZE: i32 = 22;
const DAY_FONT_SIZE: i32 = 14;
const HOUR_FONT_SIZE: i32 = 12;
const LABEL_FONT_SIZE: i32 = 12;
const HOUR_LABEL_GUTTER: f32 = PADDING * 2.0;
/// Header band to grid height ratio is 1:8.
const HEADER_SHARE: f32 = 1.0 / 9.0;
const LEGEND_COLUMNS: usize = 4;
const LEGEND_ROW_HEIGHT: f32 = 20.0;
const LEGEND_SWATCH: f32 = 12.0;
/// The legend never takes more than this share of the canvas height.
const LEGEND_MAX_SHARE: f32 = 0.25;
/// Smallest grid kept on any canvas, in pixels.
const MIN_GRID_HEIGHT: f32 = 60.0;
const MIN_GRID_WIDTH: f32 = 70.0;
/// Upper bound on horizontal grid lines; long ranges switch to coarser steps.
const MAX_GRID_LINES: u32 = 96;

/// Pixel positions of every region of the chart, derived from the canvas
/// size and the visible time range.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub width: f32,
    pub height: f32,
    pub grid_left: f32,
    pub grid_right: f32,
    pub header_top: f32,
    pub grid_top: f32,
    pub grid_bottom: f32,
    pub legend_top: f32,
    /// Legend rows that fit below the grid.
    pub legend_rows: usize,
    pub view_start: u32,
    pub view_end: u32,
}

impl Layout {
    pub fn new(canvas: CanvasSize, bounds: &AxisBounds, legend_entries: usize) -> Self {
        let width = canvas.width as f32;
        let height = canvas.height as f32;
        let wanted_rows = (legend_entries + LEGEND_COLUMNS - 1) / LEGEND_COLUMNS;
        let room_for_rows =
            ((height * LEGEND_MAX_SHARE - PADDING / 2.0) / LEGEND_ROW_HEIGHT).max(0.0) as usize;
        let legend_rows = wanted_rows.min(room_for_rows.max(1));
        let legend_height = if legend_rows == 0 {
            0.0
        } else {
            legend_rows as f32 * LEGEND_ROW_HEIGHT + PADDING / 2.0
        };
        let header_top = PADDING * 2.0;
        let chart_bottom = (height - PADDING - legend_height)
            .max(header_top + MIN_GRID_HEIGHT / (1.0 - HEADER_SHARE));
        let grid_top = header_top + (chart_bottom - header_top) * HEADER_SHARE;
        let (view_start, view_end) = bounds.visible_range();
        Layout {
            width,
            height,
            grid_left: HOUR_LABEL_GUTTER,
            grid_right: (width - PADDING).max(HOUR_LABEL_GUTTER + MIN_GRID_WIDTH),
            header_top,
            grid_top,
            grid_bottom: chart_bottom,
            legend_top: chart_bottom + PADDING / 2.0,
            legend_rows,
            view_start,
            view_end,
        }
    }

    pub fn day_width(&self) -> f32 {
        (self.grid_right - self.grid_left) / Weekday::ALL.len() as f32
    }

    pub fn day_x(&self, slot: u8) -> f32 {
        self.grid_left + slot as f32 * self.day_width()
    }

    /// Earlier minutes map higher up the page.
    pub fn minute_y(&self, minute: u32) -> f32 {
        let span = (self.view_end - self.view_start) as f32;
        let offset = minute as f32 - self.view_start as f32;
        self.grid_top + offset / span * (self.grid_bottom - self.grid_top)
    }
}

pub fn new_document(layout: &Layout) -> Document {
    Document::new()
        .set("viewBox", (0, 0, layout.width as i32, layout.height as i32))
        .set("width", layout.width as i32)
        .set("height", layout.height as i32)
        .add(
            Rectangle::default()
                .size(layout.width, layout.height)
                .fill("white")
                .stroke("none")
                .as_svg(),
        )
}

pub fn render_title_text(doc: Document, layout: &Layout, user: &str, theme: &str) -> Document {
    doc.add(
        Text::default()
            .text(&format!("{}'s Study Timetable", user))
            .position(layout.width / 2.0, PADDING + TITLE_FONT_SIZE as f32 / 2.0)
            .font_size(TITLE_FONT_SIZE)
            .font_weight("bold")
            .fill(theme)
            .text_anchor("middle")
            .as_svg(),
    )
}

pub fn render_weekday_header(mut doc: Document, layout: &Layout, theme: &str) -> Document {
    let band_height = layout.grid_top - layout.header_top;
    for day in Weekday::ALL.iter() {
        let x = layout.day_x(day.slot());
        doc = doc
            .add(
                Rectangle::default()
                    .position(x, layout.header_top)
                    .size(layout.day_width(), band_height)
                    .fill(theme)
                    .stroke_width(1.5)
                    .as_svg(),
            )
            .add(
                Text::default()
                    .text(day.name())
                    .position(
                        x + layout.day_width() / 2.0,
                        layout.header_top + band_height / 2.0,
                    )
                    .font_size(DAY_FONT_SIZE)
                    .centered()
                    .as_svg(),
            );
    }
    doc
}

pub fn render_day_lines(mut doc: Document, layout: &Layout) -> Document {
    for slot in 0..=Weekday::ALL.len() as u8 {
        doc = doc.add(
            Line::default()
                .vertical(layout.day_x(slot), layout.grid_top, layout.grid_bottom)
                .stroke_width(1.5)
                .opacity(0.5)
                .as_svg(),
        );
    }
    doc
}

/// Hour lines with `HH:00` labels, dashed lines on the half hour.
pub fn render_hour_lines(mut doc: Document, layout: &Layout) -> Document {
    let span = layout.view_end - layout.view_start;
    let step = if span <= MAX_GRID_LINES * 30 {
        30
    } else {
        (span / MAX_GRID_LINES / 60 + 1) * 60
    };
    let mut minute = layout.view_start;
    while minute <= layout.view_end {
        let y = layout.minute_y(minute);
        if minute % 60 == 0 {
            doc = doc
                .add(
                    Line::default()
                        .horizontal(layout.grid_left, layout.grid_right, y)
                        .stroke("lightgrey")
                        .as_svg(),
                )
                .add(
                    Text::default()
                        .text(&format!("{:02}:00", (minute / 60) % 24))
                        .position(layout.grid_left - 6.0, y)
                        .font_size(HOUR_FONT_SIZE)
                        .fill("grey")
                        .text_anchor("end")
                        .as_svg(),
                );
        } else {
            doc = doc.add(
                Line::default()
                    .horizontal(layout.grid_left, layout.grid_right, y)
                    .stroke("lightgrey")
                    .dashed("2 4")
                    .as_svg(),
            );
        }
        minute += step;
    }
    doc
}

/// Rectangle for one course plus its short label, grouped so a caller can
/// attach attributes to the pair.
pub fn block_group(layout: &Layout, block: &TimeBlock) -> Group {
    let x = layout.day_x(block.weekday_slot);
    let y = layout.minute_y(block.start_minutes);
    let w = layout.day_width();
    let h = layout.minute_y(block.end_minutes) - y;
    let tooltip = format!(
        "{} ({} - {})",
        block.name,
        format_minutes(block.start_minutes),
        format_minutes(block.end_minutes)
    );
    Group::new()
        .add(
            Rectangle::default()
                .position(x, y)
                .size(w, h)
                .fill(block.color)
                .tooltip(&tooltip)
                .as_svg(),
        )
        .add(
            Text::default()
                .text(&block.label)
                .position(x + w / 2.0, y + h / 2.0)
                .font_size(LABEL_FONT_SIZE)
                .font_weight("bold")
                .fill(label_color(block.color))
                .centered()
                .as_svg(),
        )
}

/// One swatch and name per course. When the rows run out, the last slot
/// says how many courses were left out.
pub fn render_legend(mut doc: Document, layout: &Layout, blocks: &[TimeBlock]) -> Document {
    let column_width = (layout.grid_right - layout.grid_left) / LEGEND_COLUMNS as f32;
    let slot = |i: usize| {
        (
            layout.grid_left + (i % LEGEND_COLUMNS) as f32 * column_width,
            layout.legend_top + (i / LEGEND_COLUMNS) as f32 * LEGEND_ROW_HEIGHT,
        )
    };
    let capacity = layout.legend_rows * LEGEND_COLUMNS;
    let shown = if blocks.len() > capacity {
        capacity.saturating_sub(1)
    } else {
        blocks.len()
    };
    for (i, block) in blocks.iter().take(shown).enumerate() {
        let (x, y) = slot(i);
        doc = doc
            .add(
                Rectangle::default()
                    .position(x, y)
                    .size(LEGEND_SWATCH, LEGEND_SWATCH)
                    .fill(block.color)
                    .corner_radius(2.0)
                    .as_svg(),
            )
            .add(
                Text::default()
                    .text(&block.name)
                    .position(x + LEGEND_SWATCH + 6.0, y + LEGEND_SWATCH / 2.0)
                    .font_size(LABEL_FONT_SIZE)
                    .fill("dimgrey")
                    .as_svg(),
            );
    }
    if shown < blocks.len() && capacity > 0 {
        let (x, y) = slot(shown);
        doc = doc.add(
            Text::default()
                .text(&format!("+{} more", blocks.len() - shown))
                .position(x, y + LEGEND_SWATCH / 2.0)
                .font_size(LABEL_FONT_SIZE)
                .fill("dimgrey")
                .as_svg(),
        );
    }
    doc
}
