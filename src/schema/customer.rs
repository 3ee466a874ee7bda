//! Built-in customer record schema
//!
//! Shape of a create-customer payload:
//! - name: required string, at least 3 characters
//! - birthDate: required `DD/MM/YYYY` date
//! - status: optional, `active` or `inactive`
//! - addresses: optional array of { street, number, complement? }
//! - contacts: optional array of { email, phone, favorite }

use super::types::{FieldSchema, Schema};

/// Registry name of the customer schema
pub const CUSTOMER_SCHEMA: &str = "customer";

/// Allowed customer statuses
pub const CUSTOMER_STATUSES: [&str; 2] = ["active", "inactive"];

pub fn address_schema() -> Schema {
    Schema::new()
        .field("street", FieldSchema::required_string())
        .field("number", FieldSchema::required_string())
        .field("complement", FieldSchema::optional_string())
}

pub fn contact_schema() -> Schema {
    Schema::new()
        .field("email", FieldSchema::required_string())
        .field("phone", FieldSchema::required_string())
        .field("favorite", FieldSchema::required_boolean())
}

pub fn schema() -> Schema {
    Schema::new()
        .field("name", FieldSchema::required_string().min_length(3))
        .field("birthDate", FieldSchema::required_string().date())
        .field(
            "status",
            FieldSchema::optional_string().one_of(CUSTOMER_STATUSES),
        )
        .field("addresses", FieldSchema::optional_array_of(address_schema()))
        .field("contacts", FieldSchema::optional_array_of(contact_schema()))
}
