pub mod a001_network_switch;
pub mod a002_contact_request;
pub mod common;
