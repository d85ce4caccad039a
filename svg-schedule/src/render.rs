use std::{fmt, str::FromStr};

use svg::Document;
use tracing::debug;

use crate::{
    error::ScheduleError,
    geometry::Timetable,
    interactive, ui,
    ui::Layout,
};

/// Canvas dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl CanvasSize {
    pub const MIN_WIDTH: u32 = 400;
    pub const MIN_HEIGHT: u32 = 300;
}

impl Default for CanvasSize {
    fn default() -> Self {
        CanvasSize {
            width: 1200,
            height: 900,
        }
    }
}

impl FromStr for CanvasSize {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ScheduleError::InvalidCanvasSize(s.to_string());
        let (w, h) = s.split_once(|c| c == 'x' || c == 'X').ok_or_else(invalid)?;
        let width: u32 = w.trim().parse().map_err(|_| invalid())?;
        let height: u32 = h.trim().parse().map_err(|_| invalid())?;
        if width < Self::MIN_WIDTH || height < Self::MIN_HEIGHT {
            return Err(invalid());
        }
        Ok(CanvasSize { width, height })
    }
}

impl fmt::Display for CanvasSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Whose timetable this is; shown in the title.
    pub user: String,
    /// Any SVG/CSS color; fills the weekday header and colors the title.
    pub theme: String,
    pub canvas: CanvasSize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            user: "Student".to_string(),
            theme: "skyblue".to_string(),
            canvas: CanvasSize::default(),
        }
    }
}

/// The two render surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// A standalone SVG image with a legend.
    #[default]
    Static,
    /// An HTML page embedding the SVG, with hover details per course.
    Interactive,
}

impl RenderMode {
    pub fn extension(self) -> &'static str {
        match self {
            RenderMode::Static => "svg",
            RenderMode::Interactive => "html",
        }
    }

    pub fn render(self, table: &Timetable, options: &RenderOptions) -> String {
        debug!(
            mode = %self,
            blocks = table.blocks.len(),
            canvas = %options.canvas,
            "rendering timetable"
        );
        match self {
            RenderMode::Static => render_static(table, options).to_string(),
            RenderMode::Interactive => interactive::render_page(table, options),
        }
    }
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RenderMode::Static => "static",
            RenderMode::Interactive => "interactive",
        })
    }
}

impl FromStr for RenderMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "static" => Ok(RenderMode::Static),
            "interactive" | "dynamic" => Ok(RenderMode::Interactive),
            other => Err(format!(
                "unknown render mode '{}', expected 'static' or 'interactive'",
                other
            )),
        }
    }
}

/// Everything both surfaces share: title, weekday band and time grid.
pub(crate) fn render_frame(layout: &Layout, options: &RenderOptions) -> Document {
    let mut doc = ui::new_document(layout);
    doc = ui::render_title_text(doc, layout, &options.user, &options.theme);
    doc = ui::render_weekday_header(doc, layout, &options.theme);
    doc = ui::render_hour_lines(doc, layout);
    ui::render_day_lines(doc, layout)
}

fn render_static(table: &Timetable, options: &RenderOptions) -> Document {
    let layout = Layout::new(options.canvas, &table.bounds, table.blocks.len());
    let mut doc = render_frame(&layout, options);
    for block in &table.blocks {
        doc = doc.add(ui::block_group(&layout, block));
    }
    ui::render_legend(doc, &layout, &table.blocks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{course::load, geometry::build_blocks, utils::ColorStrategy};

    fn sample() -> Timetable {
        let input = "course_name,credits,day,start_time,duration,room,lecturer\n\
                     Algorithms,5,Monday,09:00,90,Room 3,Dr. X\n\
                     Statistics,4,Wednesday,13:00,60,Hall A,Dr. Y\n";
        build_blocks(&load(input.as_bytes()).unwrap(), ColorStrategy::Spread).unwrap()
    }

    #[test]
    fn parses_canvas_sizes() {
        assert_eq!(
            "800x600".parse::<CanvasSize>().unwrap(),
            CanvasSize {
                width: 800,
                height: 600
            }
        );
        assert!("800".parse::<CanvasSize>().is_err());
        assert!("wide x tall".parse::<CanvasSize>().is_err());
        assert!("10x10".parse::<CanvasSize>().is_err());
    }

    #[test]
    fn parses_modes() {
        assert_eq!("static".parse::<RenderMode>(), Ok(RenderMode::Static));
        assert_eq!("interactive".parse::<RenderMode>(), Ok(RenderMode::Interactive));
        assert_eq!("dynamic".parse::<RenderMode>(), Ok(RenderMode::Interactive));
        assert!("pdf".parse::<RenderMode>().is_err());
    }

    #[test]
    fn static_chart_draws_frame_blocks_and_legend() {
        let svg = RenderMode::Static.render(&sample(), &RenderOptions::default());
        assert!(svg.contains("<svg"));
        assert!(svg.contains("Student's Study Timetable"));
        for day in crate::course::Weekday::ALL.iter() {
            assert!(svg.contains(day.name()));
        }
        // background + 7 header cells + 2 blocks + 2 legend swatches
        assert_eq!(svg.matches("<rect").count(), 12);
        assert!(svg.contains("Algori"));
        assert!(svg.contains("Algorithms (09:00 - 10:30)"));
        assert!(svg.contains("07:00"));
        assert!(svg.contains("16:00"));
    }

    #[test]
    fn rendering_is_repeatable() {
        let table = sample();
        let options = RenderOptions::default();
        let first = RenderMode::Static.render(&table, &options);
        let second = RenderMode::Static.render(&table, &options);
        assert_eq!(first, second);
        let page = RenderMode::Interactive.render(&table, &options);
        assert_eq!(page, RenderMode::Interactive.render(&table, &options));
    }

    #[test]
    fn saves_svg_like_the_component_demo() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("image.svg");
        let layout = Layout::new(CanvasSize::default(), &sample().bounds, 0);
        svg::save(&path, &render_frame(&layout, &RenderOptions::default())).unwrap();
        assert!(std::fs::read_to_string(&path).unwrap().contains("Monday"));
    }
}
