use std::{collections::HashSet, fmt, fs::File, io::Read, path::Path, str::FromStr};

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    error::{Result, ScheduleError},
    geometry::padded_end,
};

pub const REQUIRED_COLUMNS: [&str; 7] = [
    "course_name",
    "credits",
    "day",
    "start_time",
    "duration",
    "room",
    "lecturer",
];

/// Days of the week in column order. The discriminant is the column index,
/// so Sunday is the leftmost column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Weekday {
    Sunday = 0,
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    pub fn slot(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            Weekday::Sunday => "Sunday",
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Case-sensitive: only the full English name is accepted.
impl FromStr for Weekday {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Weekday::ALL
            .iter()
            .copied()
            .find(|day| day.name() == s)
            .ok_or_else(|| format!("unrecognized day '{}'", s))
    }
}

/// One weekly meeting of a course, as read from the input table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseRecord {
    pub name: String,
    pub credits: u32,
    pub day: Weekday,
    pub start: NaiveTime,
    pub duration_minutes: u32,
    pub room: String,
    pub lecturer: String,
}

impl CourseRecord {
    pub fn start_minutes(&self) -> u32 {
        self.start.hour() * 60 + self.start.minute()
    }
}

#[derive(Debug, Deserialize)]
struct RawCourse {
    course_name: String,
    credits: String,
    day: String,
    start_time: String,
    duration: String,
    room: String,
    lecturer: String,
}

impl RawCourse {
    fn parse(self, line: usize) -> Result<CourseRecord> {
        let at = Some(line);
        let credits = self.credits.parse::<u32>().map_err(|_| {
            ScheduleError::malformed(
                at,
                format!("credits '{}' is not a whole number", self.credits),
            )
        })?;
        let day = self
            .day
            .parse::<Weekday>()
            .map_err(|reason| ScheduleError::malformed(at, reason))?;
        let start = parse_clock_time(&self.start_time).ok_or_else(|| {
            ScheduleError::malformed(
                at,
                format!("start time '{}' is not HH:MM on a 24-hour clock", self.start_time),
            )
        })?;
        let duration = self.duration.parse::<i64>().map_err(|_| {
            ScheduleError::malformed(
                at,
                format!("duration '{}' is not a number of minutes", self.duration),
            )
        })?;
        if duration < 0 {
            return Err(ScheduleError::malformed(
                at,
                format!("duration {} is negative", duration),
            ));
        }
        let too_large = || {
            ScheduleError::malformed(
                at,
                format!("duration {} is too large for a {} start", duration, self.start_time),
            )
        };
        let duration_minutes = u32::try_from(duration).map_err(|_| too_large())?;
        let start_minutes = start.hour() * 60 + start.minute();
        if padded_end(start_minutes, duration_minutes).is_none() {
            return Err(too_large());
        }

        Ok(CourseRecord {
            name: self.course_name,
            credits,
            day,
            start,
            duration_minutes,
            room: self.room,
            lecturer: self.lecturer,
        })
    }
}

/// Parses `HH:MM` with exactly two digits on each side of the colon.
fn parse_clock_time(s: &str) -> Option<NaiveTime> {
    let bytes = s.as_bytes();
    let shaped = bytes.len() == 5
        && bytes[2] == b':'
        && [0, 1, 3, 4].iter().all(|&i| bytes[i].is_ascii_digit());
    if !shaped {
        return None;
    }
    NaiveTime::parse_from_str(s, "%H:%M").ok()
}

/// Reads every course row from a CSV source, in file order.
///
/// The whole read fails on the first bad row; no partial list is returned.
pub fn load<R: Read>(source: R) -> Result<Vec<CourseRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(source);

    let headers = reader.headers()?.clone();
    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|column| !headers.iter().any(|h| h == *column))
        .collect();
    if !missing.is_empty() {
        return Err(ScheduleError::malformed(
            Some(1),
            format!("missing required column(s): {}", missing.join(", ")),
        ));
    }

    let mut seen = HashSet::new();
    let mut courses = Vec::new();
    for result in reader.records() {
        let record = result?;
        let line = record.position().map_or(0, |p| p.line() as usize);
        let raw: RawCourse = record
            .deserialize(Some(&headers))
            .map_err(|e| ScheduleError::malformed(Some(line), e.to_string()))?;
        let course = raw.parse(line)?;
        if !seen.insert(course.name.clone()) {
            return Err(ScheduleError::malformed(
                Some(line),
                format!("duplicate course name '{}'", course.name),
            ));
        }
        courses.push(course);
    }

    debug!(courses = courses.len(), "loaded course table");
    Ok(courses)
}

pub fn load_path(path: impl AsRef<Path>) -> Result<Vec<CourseRecord>> {
    let path = path.as_ref();
    debug!(path = %path.display(), "reading course table");
    load(File::open(path)?)
}
