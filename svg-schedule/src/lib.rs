//! Weekly study timetables: course rows from a CSV become positioned time
//! blocks, which are drawn as an SVG chart or an interactive HTML page.

mod components;
mod course;
mod error;
mod geometry;
mod interactive;
mod render;
mod ui;
mod utils;

pub use course::{load, load_path, CourseRecord, Weekday, REQUIRED_COLUMNS};
pub use error::{Result, ScheduleError};
pub use geometry::{
    build_blocks, AxisBounds, TimeBlock, Timetable, AXIS_PADDING_MINUTES, LABEL_LENGTH,
};
pub use render::{CanvasSize, RenderMode, RenderOptions};
pub use utils::{ColorStrategy, CSS4_COLORS};
