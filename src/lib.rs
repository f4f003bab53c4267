// src/lib.rs
//! Bulk row updates against a remote spreadsheet: fetch the rows at the
//! caller's indices, merge the new values into what is stored, and write the
//! result back in one request.

pub mod settings;
pub mod sheets;
