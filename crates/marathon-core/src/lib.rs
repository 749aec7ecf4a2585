//! Core library for the marathon training planner.
//!
//! Given a race date and a peak weekly mileage, [`generator`] builds an
//! 18-week plan: a base/build phase, a peak in week 16, and a two-week
//! taper ending on race day. Every week has a fixed shape of three easy
//! runs, two workouts, a long run on Saturday and a rest day on Sunday.
//!
//! The generator is pure. Saving, loading, listing and duplicating plans go
//! through the async [`Planner`], which validates input, checks plan
//! ownership, and persists plans in SQLite via [`db`].
//!
//! # Display Architecture
//!
//! Domain models implement [`std::fmt::Display`] as markdown, and the
//! wrappers in [`display`] add context for lists and operation results.
//! The CLI renders that markdown in the terminal.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use jiff::civil::date;
//! use marathon_core::{params::{CreateMarathonPlan, ListPlans}, PlannerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = PlannerBuilder::new()
//!     .with_database_path(Some("marathon.db"))
//!     .build()
//!     .await?;
//!
//! let plan = planner
//!     .create_marathon_plan(&CreateMarathonPlan {
//!         marathon_date: date(2024, 10, 15),
//!         peak_weekly_mileage: 50.0,
//!         user_id: "runner".to_string(),
//!     })
//!     .await?;
//! println!("{plan}");
//!
//! let plans = planner
//!     .list_plans(&ListPlans { user_id: "runner".to_string() })
//!     .await?;
//! for summary in &plans.0 {
//!     println!("{} on {}", summary.id, summary.marathon_date);
//! }
//! # Ok(())
//! # }
//! ```

pub mod context;
pub mod db;
pub mod display;
pub mod duplicate;
pub mod error;
pub mod generator;
pub mod models;
pub mod params;
pub mod planner;
pub mod store;

// Re-export commonly used types
pub use context::{Clock, FixedClock, IdGenerator, SequentialIds, SystemClock, UuidGenerator};
pub use db::Database;
pub use display::{CreateResult, DeleteResult, OperationStatus, PlanSummaries};
pub use error::{ErrorKind, PlannerError, Result};
pub use generator::{create_marathon_plan, PlanGenerator};
pub use models::{Plan, PlanSummary, TrainingDay, Week, WorkoutKind};
pub use params::{CreateMarathonPlan, DuplicatePlan, ListPlans, PlanRef};
pub use planner::{Planner, PlannerBuilder};
pub use store::PlanStore;
