use crate::constants::REQUEST_ID_LENGTH;

/// Generates a request identifier.
///
/// The identifier is 30 characters long and made of uppercase English letters
/// (`A-Z`) and digits (`0-9`), drawn with the `nanoid` generator.
///
/// # Examples
/// ```
/// use pam_client::utils::id::new_request_id;
/// let id = new_request_id();
/// assert_eq!(id.len(), 30);
/// ```
pub fn new_request_id() -> String {
    let alphabet: Vec<char> = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789".chars().collect();
    nanoid::nanoid!(REQUEST_ID_LENGTH, &alphabet)
}
