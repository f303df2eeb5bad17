pub mod validation;

pub use validation::{validate_name, MAX_NAME_LEN};
