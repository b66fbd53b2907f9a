mod directory;
mod models;

use crate::Customer;

pub(crate) fn customer(id: &str, name: &str, phone: &str, cuts: i64) -> Customer {
    Customer {
        id: id.to_string(),
        name: name.to_string(),
        phone_number: phone.to_string(),
        cuts_remaining: cuts,
    }
}

/// Twelve customers with distinct names, a few shared balances, and mixed case.
pub(crate) fn roster() -> Vec<Customer> {
    vec![
        customer("c01", "Ada", "+4512345678", 3),
        customer("c02", "bob", "+4511112222", 10),
        customer("c03", "Carla", "+4533334444", 9),
        customer("c04", "dave", "+4555556666", 0),
        customer("c05", "Eve", "+4577778888", 10),
        customer("c06", "Frank", "+4599990000", 1),
        customer("c07", "Gina", "+4612345678", 2),
        customer("c08", "hans", "+4622223333", 7),
        customer("c09", "Ida", "+4644445555", 9),
        customer("c10", "Jonas", "+4666667777", 12),
        customer("c11", "Karla", "+4688889999", 4),
        customer("c12", "Lars", "+4600001111", 5),
    ]
}
