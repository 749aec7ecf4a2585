//! Display formatting for plans and operation results.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! the wrappers in this module add context for lists and operation
//! outcomes. Everything renders as markdown, which the CLI prints through
//! its terminal renderer.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │    Wrappers     │    │    Markdown     │
//! │ (Plan, Week...) │───▶│ (PlanSummaries, │───▶│     Output      │
//! │                 │    │  CreateResult)  │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Presentation conventions never leak into the data: the week table shows
//! the long run of the final week as `RACE!`, while the stored label stays
//! "Long Run".
//!
//! ```rust
//! use jiff::{civil::date, Timestamp};
//! use marathon_core::{
//!     context::{FixedClock, SequentialIds},
//!     display::CreateResult,
//!     generator::PlanGenerator,
//! };
//!
//! let generator = PlanGenerator::with_sources(
//!     SequentialIds::default(),
//!     FixedClock(Timestamp::UNIX_EPOCH),
//! );
//! let plan = generator.create_marathon_plan(date(2024, 10, 15), 50.0, "runner");
//!
//! let output = CreateResult::new(plan).to_string();
//! assert!(output.contains("Created plan with ID"));
//! assert!(output.contains("## Week 18"));
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use collections::PlanSummaries;
pub use datetime::{LocalDateTime, LongDate};
pub use results::{CreateResult, DeleteResult};
pub use status::OperationStatus;
