use std::fmt;
use std::str::FromStr;

/// A single student entry.
///
/// The id is fixed at construction; the text fields stay public so the
/// normalizer can rewrite them in place.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    id: i32,
    pub first_name: String,
    pub last_name: String,
    /// Single precision, so `{:.2}` rounds the way a C `float` printed
    /// with `%.2f` does (3.005 -> "3.01").
    pub gpa: f32,
    pub major: String,
}

impl Record {
    pub fn new(
        id: i32,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        gpa: f32,
        major: impl Into<String>,
    ) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            gpa,
            major: major.into(),
        }
    }

    pub fn id(&self) -> i32 {
        self.id
    }
}

/// Renders the record as `<id> <first> <last> <gpa:.2> <major>`, without a
/// line terminator.
impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {:.2} {}",
            self.id, self.first_name, self.last_name, self.gpa, self.major
        )
    }
}

/// Parses one roster line: five whitespace separated fields, in the same
/// order the record is displayed.
impl FromStr for Record {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let fields: Vec<&str> = s.split_whitespace().collect();
        if fields.len() != 5 {
            return Err(format!("expected 5 fields, found {}", fields.len()));
        }

        let id = fields[0]
            .parse::<i32>()
            .map_err(|_| format!("invalid id {:?}", fields[0]))?;
        let gpa = fields[3]
            .parse::<f32>()
            .map_err(|_| format!("invalid gpa {:?}", fields[3]))?;

        Ok(Record::new(id, fields[1], fields[2], gpa, fields[4]))
    }
}
