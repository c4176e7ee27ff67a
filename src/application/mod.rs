//! Application layer: the selection engine and the dashboard controller.
//!
//! `engine` holds the pure functions that turn a site selection and a payload
//! range into chart tables. `dashboard` keeps the widget state and calls the
//! engine whenever a widget changes, pushing the results to a `ChartSink`.

pub mod dashboard;
pub mod engine;
