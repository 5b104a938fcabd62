use crate::hex::FormatError;

#[derive(thiserror::Error, Debug)]
pub enum RomError {
    #[error("invalid record: {0}")]
    Format(#[from] FormatError),
    #[error("extended segment address records are not supported")]
    UnsupportedRecord,
    #[error("program too large: needs {required} bytes (record ends at {end:#06x}), ROM holds {capacity}")]
    Capacity {
        end: usize,
        required: usize,
        capacity: usize,
    },
    #[error("input ended without an end-of-file record")]
    MissingEndOfFile,
    #[error("no data records before end-of-file")]
    EmptyImage,
    #[error("line {line}: {source}")]
    Line {
        line: usize,
        #[source]
        source: Box<RomError>,
    },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl RomError {
    pub fn at_line(self, line: usize) -> Self {
        RomError::Line {
            line,
            source: Box::new(self),
        }
    }

    /// The error with any line context peeled off.
    pub fn innermost(&self) -> &RomError {
        match self {
            RomError::Line { source, .. } => source.innermost(),
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, RomError>;
