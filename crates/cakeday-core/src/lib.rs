//! Celebration rules for forum posts: which anniversary and birthday
//! indicators a viewer sees next to a subject, and which of the subject's
//! dates that viewer may receive at all.
//!
//! Everything here is a pure function over explicit inputs. Settings,
//! viewer and "today" are always passed in, so evaluations can run in
//! parallel and never touch I/O.

pub mod calendar;
pub mod error;
pub mod exposure;
pub mod navigation;
pub mod person;
pub mod profile;
pub mod resolver;
pub mod settings;


pub use error::{Error, Result};
