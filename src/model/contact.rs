use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactPerson {
    pub name: String,
    pub phone: String,
    pub role: String,
}

/// Company contact card served on the contact page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub company_name: String,
    pub address: String,
    pub suburb: String,
    pub state: String,
    pub postcode: String,
    pub country: String,
    pub contacts: Vec<ContactPerson>,
    pub email: String,
}
