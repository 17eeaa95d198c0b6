pub mod a002_contact_request;
