use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScheduleError>;

#[derive(Error, Debug)]
pub enum ScheduleError {
    /// A row or the header of the course table could not be understood.
    #[error("malformed input{}: {}", at_line(.line), .reason)]
    MalformedInput { line: Option<usize>, reason: String },

    #[error("no courses to display: the input has a header but no rows")]
    EmptyDataset,

    #[error("invalid canvas size '{0}', expected WIDTHxHEIGHT (e.g. 1200x900)")]
    InvalidCanvasSize(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn at_line(line: &Option<usize>) -> String {
    match line {
        Some(line) => format!(" at line {}", line),
        None => String::new(),
    }
}

impl ScheduleError {
    pub(crate) fn malformed(line: Option<usize>, reason: impl Into<String>) -> Self {
        ScheduleError::MalformedInput {
            line,
            reason: reason.into(),
        }
    }
}

impl From<csv::Error> for ScheduleError {
    fn from(e: csv::Error) -> Self {
        let line = e.position().map(|p| p.line() as usize);
        let message = e.to_string();
        match e.into_kind() {
            csv::ErrorKind::Io(io) => ScheduleError::Io(io),
            _ => ScheduleError::malformed(line, message),
        }
    }
}
