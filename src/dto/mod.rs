pub mod health;
pub mod league;
pub mod validation;
