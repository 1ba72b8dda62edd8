//! Request and response bodies

pub mod quote;
