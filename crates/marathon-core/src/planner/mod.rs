//! Async planner facade over the plan generator and the SQLite store.
//!
//! [`Planner`] is the layer callers talk to. It validates user input, asks
//! the generator for a plan, and persists or loads plans through the store.
//! Store access runs on tokio's blocking pool with a fresh connection per
//! operation, so the planner itself holds no connection and is cheap to
//! share.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │     Planner     │    │    Generator    │    │      Store      │
//! │  (validation,   │───▶│  (pure, no I/O) │    │   (via db/)     │
//! │   ownership)    │───────────────────────────▶│                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use jiff::civil::date;
//! use marathon_core::{params::CreateMarathonPlan, PlannerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = PlannerBuilder::new()
//!     .with_database_path(Some("/tmp/marathon.db"))
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
//! assert_eq!(plan.weeks.len(), 18);
//! # Ok(())
//! # }
//! ```

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use crate::{
    context::{Clock, IdGenerator},
    generator::PlanGenerator,
};

pub mod builder;
pub mod plan_ops;


pub use builder::PlannerBuilder;

/// Generator wired to shared identifier and time sources.
pub type SharedGenerator = PlanGenerator<Arc<dyn IdGenerator>, Arc<dyn Clock>>;

/// Main planner interface for creating and managing marathon plans.
pub struct Planner {
    pub(crate) db_path: PathBuf,
    pub(crate) generator: SharedGenerator,
}

impl Planner {
    pub(crate) fn new(db_path: PathBuf, generator: SharedGenerator) -> Self {
        Self { db_path, generator }
    }

    /// Path of the SQLite file backing this planner.
    pub fn database_path(&self) -> &Path {
        &self.db_path
    }
}
