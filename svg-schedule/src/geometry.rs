use serde::Serialize;
use tracing::debug;

use crate::{
    course::{CourseRecord, Weekday},
    error::{Result, ScheduleError},
    utils::{truncate, ColorStrategy},
};

/// Minutes of empty space kept above the earliest and below the latest course.
pub const AXIS_PADDING_MINUTES: i32 = 120;
/// Characters of the course name drawn inside a block.
pub const LABEL_LENGTH: usize = 6;

/// Where and how one course meeting is drawn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeBlock {
    pub day: Weekday,
    pub weekday_slot: u8,
    pub start_minutes: u32,
    pub duration_minutes: u32,
    pub end_minutes: u32,
    pub label: String,
    pub name: String,
    pub color: &'static str,
    pub credits: u32,
    pub room: String,
    pub lecturer: String,
}

/// Vertical range in minutes since midnight. `y_min` may be negative and
/// `y_max` may pass 1440; render surfaces decide how to clip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AxisBounds {
    pub y_min: i32,
    pub y_max: i32,
}

impl AxisBounds {
    /// Hour-aligned visible range: `y_min` floored to the hour and kept at or
    /// after midnight, `y_max` ceiled to the hour.
    pub fn visible_range(&self) -> (u32, u32) {
        let low = i64::from(self.y_min.max(0)) / 60 * 60;
        let high = (i64::from(self.y_max) + 59).div_euclid(60) * 60;
        (low as u32, high.max(low + 60) as u32)
    }
}

/// Bottom of the padded axis for one course, or `None` when it would not fit
/// in an `i32`.
pub(crate) fn padded_end(start_minutes: u32, duration_minutes: u32) -> Option<i32> {
    let end = i64::from(start_minutes)
        + i64::from(duration_minutes)
        + i64::from(AXIS_PADDING_MINUTES);
    i32::try_from(end).ok()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Timetable {
    pub blocks: Vec<TimeBlock>,
    pub bounds: AxisBounds,
}

/// Turns course records into drawable blocks, one per record and in the same
/// order, plus the axis bounds covering all of them.
pub fn build_blocks(records: &[CourseRecord], colors: ColorStrategy) -> Result<Timetable> {
    if records.is_empty() {
        return Err(ScheduleError::EmptyDataset);
    }

    let mut blocks = Vec::with_capacity(records.len());
    let mut y_max = i32::MIN;
    for (i, record) in records.iter().enumerate() {
        let start_minutes = record.start_minutes();
        let bottom = padded_end(start_minutes, record.duration_minutes).ok_or_else(|| {
            ScheduleError::malformed(
                None,
                format!(
                    "course '{}' runs for {} minutes, past the end of the time axis",
                    record.name, record.duration_minutes
                ),
            )
        })?;
        y_max = y_max.max(bottom);
        blocks.push(TimeBlock {
            day: record.day,
            weekday_slot: record.day.slot(),
            start_minutes,
            duration_minutes: record.duration_minutes,
            end_minutes: start_minutes + record.duration_minutes,
            label: truncate(&record.name, LABEL_LENGTH),
            name: record.name.clone(),
            color: colors.choose(i, &record.name),
            credits: record.credits,
            room: record.room.clone(),
            lecturer: record.lecturer.clone(),
        });
    }

    let earliest = blocks.iter().map(|b| b.start_minutes).min().unwrap_or(0);
    let bounds = AxisBounds {
        y_min: earliest as i32 - AXIS_PADDING_MINUTES,
        y_max,
    };

    debug!(
        blocks = blocks.len(),
        y_min = bounds.y_min,
        y_max = bounds.y_max,
        "built time blocks"
    );
    Ok(Timetable { blocks, bounds })
}
