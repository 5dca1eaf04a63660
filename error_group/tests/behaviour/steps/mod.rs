//! Step definitions registered with `rstest-bdd`.

mod error_steps;
mod status_steps;
