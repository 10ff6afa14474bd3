use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "customer")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub age: i32,
    /// Textual gender name, `MALE` or `FEMALE`.
    pub gender: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Values accepted in the `gender` column.
pub const GENDERS: [&str; 2] = ["MALE", "FEMALE"];

pub fn validate_name(name: &str) -> Result<(), ModelError> {
    if name.trim().is_empty() { return Err(ModelError::invalid("name", "must not be blank")); }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), ModelError> {
    if !email.contains('@') { return Err(ModelError::invalid("email", "missing `@`")); }
    Ok(())
}

pub fn validate_age(age: i32) -> Result<(), ModelError> {
    if age < 0 { return Err(ModelError::invalid("age", "must not be negative")); }
    Ok(())
}

/// Checked whenever a stored gender is decoded.
pub fn validate_gender(gender: &str) -> Result<(), ModelError> {
    if !GENDERS.contains(&gender) {
        return Err(ModelError::UnknownGender(gender.to_string()));
    }
    Ok(())
}
