//! Ingestion of generated metric reports.
//!
//! One report file per abstraction level: locate it, parse its rows, strip
//! bookkeeping columns, and resolve entity names against the analyzed
//! source checkout.

pub mod locator;
pub mod paths;
pub mod reader;
pub mod sanitize;
