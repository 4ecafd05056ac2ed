pub mod contact_info;
pub mod driver_response;
pub mod presentation;
pub mod sign_in;
#[cfg(test)]
pub(crate) mod test_support;
