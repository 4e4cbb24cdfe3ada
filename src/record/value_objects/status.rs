//! Affiliation status value object.
//!
//! Classifies the directory's free-form affiliation type into a small, fixed
//! set of categories. Classification is a decision table evaluated top to
//! bottom; the first matching rule wins.

use crate::error::{ValidationError, ValidationResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A person's relationship to the institution.
///
/// | variant     | meaning                                       |
/// |-------------|-----------------------------------------------|
/// | `Staff`     | non-faculty employee                          |
/// | `Faculty`   | tenured or tenure-track faculty               |
/// | `Undergrad` | undergraduate student                         |
/// | `Grad`      | graduate or professional student              |
/// | `Alumni`    | alumnus                                       |
/// | `Temporary` | temporary or casual employee                  |
/// | `Unknown`   | status could not be determined from the entry |
///
/// ## Examples
///
/// ```rust
/// use directory_record::record::value_objects::{AffiliationStatus, StatusInputs};
///
/// let inputs = StatusInputs {
///     status: Some("academic"),
///     title1: Some("Professor"),
///     ..Default::default()
/// };
/// assert_eq!(AffiliationStatus::classify(&inputs), AffiliationStatus::Faculty);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AffiliationStatus {
    Staff,
    Faculty,
    Undergrad,
    Grad,
    Alumni,
    Temporary,
    #[default]
    Unknown,
}

/// Raw canonical values the classifier looks at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusInputs<'a> {
    pub status: Option<&'a str>,
    pub title1: Option<&'a str>,
    pub title2: Option<&'a str>,
    pub college: Option<&'a str>,
}

/// College codes whose students are undergraduates.
const UNDERGRAD_COLLEGES: [&str; 7] = ["AS", "AR", "AG", "IL", "HE", "EN", "UN"];

/// Outcome of a matching rule.
#[derive(Debug, Clone, Copy)]
enum Outcome {
    Fixed(AffiliationStatus),
    /// Faculty when either working title starts with "Prof", otherwise staff
    ByTitle,
    /// Undergrad for an undergraduate college, otherwise grad
    ByCollege,
}

/// Status prefix -> outcome, evaluated in order.
const RULES: [(&str, Outcome); 5] = [
    ("staff", Outcome::Fixed(AffiliationStatus::Staff)),
    ("acad", Outcome::ByTitle),
    ("student", Outcome::ByCollege),
    ("alumni", Outcome::Fixed(AffiliationStatus::Alumni)),
    ("temp", Outcome::Fixed(AffiliationStatus::Temporary)),
];

impl AffiliationStatus {
    /// Classify a raw affiliation type.
    ///
    /// Prefix tests are anchored at the start of the raw status and are
    /// case-sensitive. A missing status and an unrecognized one both yield
    /// [`AffiliationStatus::Unknown`].
    pub fn classify(inputs: &StatusInputs<'_>) -> Self {
        let Some(status) = inputs.status else {
            return AffiliationStatus::Unknown;
        };

        RULES
            .iter()
            .find(|(prefix, _)| status.starts_with(prefix))
            .map(|(_, outcome)| outcome.resolve(inputs))
            .unwrap_or(AffiliationStatus::Unknown)
    }

    /// The canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            AffiliationStatus::Staff => "staff",
            AffiliationStatus::Faculty => "faculty",
            AffiliationStatus::Undergrad => "undergrad",
            AffiliationStatus::Grad => "grad",
            AffiliationStatus::Alumni => "alumni",
            AffiliationStatus::Temporary => "temporary",
            AffiliationStatus::Unknown => "unknown",
        }
    }

    /// Whether the status is one of the student categories.
    pub fn is_student(&self) -> bool {
        matches!(self, AffiliationStatus::Undergrad | AffiliationStatus::Grad)
    }

    /// Whether the status is one of the employee categories.
    pub fn is_employee(&self) -> bool {
        matches!(
            self,
            AffiliationStatus::Staff | AffiliationStatus::Faculty | AffiliationStatus::Temporary
        )
    }

    /// Whether a category was determined.
    pub fn is_known(&self) -> bool {
        *self != AffiliationStatus::Unknown
    }
}

impl Outcome {
    fn resolve(self, inputs: &StatusInputs<'_>) -> AffiliationStatus {
        match self {
            Outcome::Fixed(status) => status,
            Outcome::ByTitle => {
                let is_professor = [inputs.title1, inputs.title2]
                    .into_iter()
                    .flatten()
                    .any(|title| title.starts_with("Prof"));
                if is_professor {
                    AffiliationStatus::Faculty
                } else {
                    AffiliationStatus::Staff
                }
            }
            Outcome::ByCollege => match inputs.college {
                Some(college) if UNDERGRAD_COLLEGES.contains(&college) => {
                    AffiliationStatus::Undergrad
                }
                _ => AffiliationStatus::Grad,
            },
        }
    }
}

impl fmt::Display for AffiliationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AffiliationStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> ValidationResult<Self> {
        match s {
            "staff" => Ok(AffiliationStatus::Staff),
            "faculty" => Ok(AffiliationStatus::Faculty),
            "undergrad" => Ok(AffiliationStatus::Undergrad),
            "grad" => Ok(AffiliationStatus::Grad),
            "alumni" => Ok(AffiliationStatus::Alumni),
            "temporary" => Ok(AffiliationStatus::Temporary),
            "unknown" => Ok(AffiliationStatus::Unknown),
            _ => Err(ValidationError::UnknownStatus {
                value: s.to_string(),
            }),
        }
    }
}
