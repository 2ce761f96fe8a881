// Profile management: the remote store boundary, CV parsing, and handlers.

pub mod cv_parser;
pub mod handlers;
pub mod store;
