use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use models::errors::ModelError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Textual name used for persistence.
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "MALE",
            Gender::Female => "FEMALE",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        models::customer::validate_gender(s)?;
        Ok(if s == Gender::Male.as_str() { Gender::Male } else { Gender::Female })
    }
}

/// A persisted customer. The id is assigned by the storage backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub age: i32,
    pub gender: Gender,
}

/// A customer that has not been stored yet, hence has no id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCustomer {
    pub name: String,
    pub email: String,
    pub age: i32,
    pub gender: Gender,
}

impl NewCustomer {
    pub fn with_id(self, id: i32) -> Customer {
        Customer { id, name: self.name, email: self.email, age: self.age, gender: self.gender }
    }
}

/// Registration input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerRegistration {
    pub name: String,
    pub email: String,
    pub age: i32,
    pub gender: Gender,
}

impl From<CustomerRegistration> for NewCustomer {
    fn from(r: CustomerRegistration) -> Self {
        Self { name: r.name, email: r.email, age: r.age, gender: r.gender }
    }
}

/// Partial update input; `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerUpdate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub age: Option<i32>,
}

impl TryFrom<models::customer::Model> for Customer {
    type Error = ModelError;

    fn try_from(m: models::customer::Model) -> Result<Self, Self::Error> {
        Ok(Customer { id: m.id, name: m.name, email: m.email, age: m.age, gender: m.gender.parse()? })
    }
}
