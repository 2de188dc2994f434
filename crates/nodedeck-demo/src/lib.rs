/// nodedeck demo application
///
/// Browser showcase for the filter card component. Split into a
/// library so the harness rules in `state` stay testable off the
/// browser; `app` renders them.

pub mod app;
pub mod state;
