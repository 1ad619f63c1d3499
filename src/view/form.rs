use time::Date;
use time::macros::format_description;

use crate::models::NewParty;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Description,
    Date,
    Location,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Description, Field::Date, Field::Location];

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Description => "Description",
            Field::Date => "Date",
            Field::Location => "Location",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("{} is required", .0.label())]
    Missing(Field),

    #[error("invalid date {input:?}: {reason}")]
    InvalidDate { input: String, reason: String },
}

/// Draft values of the "Add a new party" form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartyForm {
    name: String,
    description: String,
    date: String,
    location: String,
}

impl PartyForm {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Description => &self.description,
            Field::Date => &self.date,
            Field::Location => &self.location,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Description => &mut self.description,
            Field::Date => &mut self.date,
            Field::Location => &mut self.location,
        };
        *slot = value.into();
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Trim every field, check presence and turn the date into a timestamp.
    pub fn submit(&self) -> Result<NewParty, FormError> {
        let required = |field: Field| {
            let value = self.value(field).trim();
            if value.is_empty() {
                Err(FormError::Missing(field))
            } else {
                Ok(value.to_string())
            }
        };

        let name = required(Field::Name)?;
        let description = required(Field::Description)?;
        let date = to_iso_timestamp(&required(Field::Date)?)?;
        let location = required(Field::Location)?;

        Ok(NewParty {
            name,
            description,
            date,
            location,
        })
    }
}

/// `2024-12-31` -> `2024-12-31T00:00:00.000Z`.
///
/// Date-only input is taken as midnight UTC.
pub fn to_iso_timestamp(input: &str) -> Result<String, FormError> {
    let invalid = |reason: String| FormError::InvalidDate {
        input: input.to_string(),
        reason,
    };

    let date = Date::parse(input, format_description!("[year]-[month]-[day]"))
        .map_err(|e| invalid(e.to_string()))?;
    date.midnight()
        .assume_utc()
        .format(format_description!(
            "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z"
        ))
        .map_err(|e| invalid(e.to_string()))
}
