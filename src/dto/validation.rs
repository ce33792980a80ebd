//! Validation helpers for DTOs.

use serde::Deserialize;
use utoipa::IntoParams;
use validator::{Validate, ValidationError, ValidationErrors};

/// Validates that a player name is usable as a league key.
///
/// # Examples
///
/// ```ignore
/// validate_player_name("Cleo")   // Ok
/// validate_player_name("")       // Err - empty
/// validate_player_name(" Cleo")  // Err - surrounding whitespace
/// ```
pub fn validate_player_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        let mut err = ValidationError::new("player_name_empty");
        err.message = Some("Player name must not be empty".into());
        return Err(err);
    }

    if name.trim() != name {
        let mut err = ValidationError::new("player_name_whitespace");
        err.message = Some("Player name must not start or end with whitespace".into());
        return Err(err);
    }

    if name.chars().any(char::is_control) {
        let mut err = ValidationError::new("player_name_format");
        err.message = Some("Player name must not contain control characters".into());
        return Err(err);
    }

    Ok(())
}

/// Path parameters of the `/players/{name}` routes.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Path)]
pub struct PlayerPath {
    /// Player name, matched exactly.
    pub name: String,
}

impl Validate for PlayerPath {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if let Err(e) = validate_player_name(&self.name) {
            errors.add("name", e);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
