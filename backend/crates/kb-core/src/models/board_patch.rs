use crate::{CoreError, CoreResult};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Partial board update. `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardPatch {
    pub title: Option<String>,
    pub color: Option<String>,
    pub description: Option<String>,
}

impl BoardPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.color.is_none() && self.description.is_none()
    }

    /// Trims the title and the color. A field that is present but blank is
    /// rejected; leave it `None` to keep the current value.
    #[track_caller]
    pub fn validated(mut self) -> CoreResult<Self> {
        self.title = Self::non_blank(self.title.take(), "title")?;
        self.color = Self::non_blank(self.color.take(), "color")?;
        Ok(self)
    }

    #[track_caller]
    fn non_blank(value: Option<String>, field: &str) -> CoreResult<Option<String>> {
        let Some(value) = value else {
            return Ok(None);
        };
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(CoreError::Validation {
                message: format!("board {} cannot be empty", field),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Ok(Some(trimmed.to_string()))
    }
}
