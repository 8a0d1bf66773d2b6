use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq)]
pub enum LibraryError {
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    DuplicateTitle {
        message: String,
    },
    NotFound {
        message: String,
    },
    // I/O or decode failure while loading or saving the catalog file. A failed
    // save may leave the previous file or nothing behind the temp file.
    Persistence {
        message: String,
        reason_code: Option<String>,
    },
}

impl LibraryError {
    pub fn validation(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Validation { message: message.to_string(), reason_code }
    }

    pub fn duplicate_title(message: &str) -> LibraryError {
        LibraryError::DuplicateTitle { message: message.to_string() }
    }

    pub fn not_found(message: &str) -> LibraryError {
        LibraryError::NotFound { message: message.to_string() }
    }

    pub fn persistence(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Persistence { message: message.to_string(), reason_code }
    }
}

impl From<std::io::Error> for LibraryError {
    fn from(err: std::io::Error) -> Self {
        LibraryError::persistence(
            format!("catalog io {:?}", err).as_str(), Some(format!("{:?}", err.kind())))
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::persistence(
            format!("catalog json parsing {}", err).as_str(), Some(format!("{:?}", err.classify())))
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::Validation { message, .. } => {
                write!(f, "{}", message)
            }
            LibraryError::DuplicateTitle { message } => {
                write!(f, "{}", message)
            }
            LibraryError::NotFound { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Persistence { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
        }
    }
}

impl std::error::Error for LibraryError {}

/// A specialized Result type for catalog operations.
pub type LibraryResult<T> = Result<T, LibraryError>;

// Genre is the fixed set of shelves a book can be filed under. The serialized
// names are the ones written to the catalog file.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum Genre {
    Fiction,
    #[serde(rename = "Non-Fiction")]
    NonFiction,
    Mystery,
    Fantasy,
    #[serde(rename = "Science Fiction")]
    ScienceFiction,
    Biography,
    History,
    Other,
}

impl Genre {
    pub const ALL: [Genre; 8] = [
        Genre::Fiction,
        Genre::NonFiction,
        Genre::Mystery,
        Genre::Fantasy,
        Genre::ScienceFiction,
        Genre::Biography,
        Genre::History,
        Genre::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::Fiction => "Fiction",
            Genre::NonFiction => "Non-Fiction",
            Genre::Mystery => "Mystery",
            Genre::Fantasy => "Fantasy",
            Genre::ScienceFiction => "Science Fiction",
            Genre::Biography => "Biography",
            Genre::History => "History",
            Genre::Other => "Other",
        }
    }
}

impl FromStr for Genre {
    type Err = LibraryError;

    // Exact names only; anything else is rejected rather than mapped to Other.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Genre::ALL.iter()
            .find(|g| g.as_str() == s)
            .copied()
            .ok_or_else(|| LibraryError::validation(
                format!("unrecognized genre {:?}", s).as_str(), Some("genre".to_string())))
    }
}

impl Display for Genre {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
