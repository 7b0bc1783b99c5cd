//! `ant-output` — simulation output writers.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`row`]      | Plain data row types (`ForagerSnapshotRow`, …)            |
//! | [`writer`]   | The `OutputWriter` backend trait                          |
//! | [`csv`]      | `CsvWriter` — two-file CSV backend                        |
//! | [`observer`] | `SimOutputObserver<W>` — bridges `SimObserver` to a writer|
//! | [`error`]    | `OutputError`, `OutputResult<T>`                          |

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{ForagerSnapshotRow, TickSummaryRow};
pub use writer::OutputWriter;
