//! Core library for the resume-helper command line application.
//!
//! The library implements the data reconciliation layer of a structured
//! résumé editor: the canonical schema lives in [`model`], the foreign-schema
//! absorption in [`normalize`], the repeating-section form representation in
//! [`form`], persistence-slot adapters and export/import byte handling under
//! [`io`], and the orchestration of save, restore, export, import, and clear
//! in [`session`].

pub mod error;
pub mod form;
pub mod io;
pub mod model;
pub mod normalize;
pub mod session;

pub use error::{Result, ResumeError};
