//! Printable summaries of a tenure record list.
//!
//! Documents are HTML built with `quick-xml`'s writer, so every piece of user
//! text (job titles, company names) is escaped on the way out.

mod html;
mod summary;

pub mod error;

pub use error::{Error, Result};
pub use summary::{ReportContext, ReportStyle, render};
