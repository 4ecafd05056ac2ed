pub mod clients;
pub mod protocol;
