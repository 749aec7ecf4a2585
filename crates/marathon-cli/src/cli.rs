//! Command-line argument wrappers and command handlers.
//!
//! Core parameter types carry no clap derives. Each wrapper here owns the
//! CLI-specific parsing (flags, help text, date parsing) and converts into
//! the core type with `into_params`, adding the acting user from the global
//! `--user` flag:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Planner
//! ```

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use jiff::civil::Date;
use log::debug;
use marathon_core::{
    display::{CreateResult, DeleteResult, OperationStatus},
    params::{parse_marathon_date, CreateMarathonPlan, DuplicatePlan, ListPlans, PlanRef},
    Plan, Planner,
};
use uuid::Uuid;

use crate::renderer::TerminalRenderer;

/// Clap value parser for `YYYY-MM-DD` race dates.
fn parse_date(text: &str) -> std::result::Result<Date, String> {
    parse_marathon_date(text).map_err(|e| e.to_string())
}

/// Generate a plan from a race date and a peak weekly mileage
#[derive(Args)]
pub struct CreatePlanArgs {
    /// Race day in YYYY-MM-DD format; the plan ends on this date
    #[arg(short, long, value_parser = parse_date)]
    pub date: Date,
    /// Target mileage of the peak week, between 20 and 100
    #[arg(short, long)]
    pub peak: f64,
    /// Print the plan as JSON instead of markdown
    #[arg(long)]
    pub json: bool,
}

impl CreatePlanArgs {
    pub fn into_params(self, user_id: &str) -> CreateMarathonPlan {
        CreateMarathonPlan {
            marathon_date: self.date,
            peak_weekly_mileage: self.peak,
            user_id: user_id.to_string(),
        }
    }
}

/// Show a saved plan with every week and day
#[derive(Args)]
pub struct ShowPlanArgs {
    /// ID of the plan to display
    pub id: Uuid,
    /// Print the plan as JSON instead of markdown
    #[arg(long)]
    pub json: bool,
}

/// Copy a saved plan onto a new race date
#[derive(Args)]
pub struct DuplicatePlanArgs {
    /// ID of the plan to copy
    pub id: Uuid,
    /// Race day of the copy in YYYY-MM-DD format
    #[arg(short, long, value_parser = parse_date)]
    pub date: Date,
}

impl DuplicatePlanArgs {
    pub fn into_params(self, user_id: &str) -> DuplicatePlan {
        DuplicatePlan {
            id: self.id,
            marathon_date: self.date,
            user_id: user_id.to_string(),
        }
    }
}

/// Delete a saved plan permanently
#[derive(Args)]
pub struct DeletePlanArgs {
    /// ID of the plan to delete
    pub id: Uuid,
}

#[derive(Subcommand)]
pub enum PlanCommands {
    /// Generate and save a new plan
    #[command(alias = "c")]
    Create(CreatePlanArgs),
    /// Generate a plan without saving it
    Preview(CreatePlanArgs),
    /// List your saved plans
    #[command(aliases = ["l", "ls"])]
    List,
    /// Show a saved plan
    #[command(alias = "s")]
    Show(ShowPlanArgs),
    /// Copy a plan onto a new race date
    #[command(alias = "dup")]
    Duplicate(DuplicatePlanArgs),
    /// Delete a plan permanently
    #[command(aliases = ["d", "rm"])]
    Delete(DeletePlanArgs),
}

/// Runs plan commands against the planner and renders the results.
pub struct Cli {
    planner: Planner,
    renderer: TerminalRenderer,
    user: String,
}

impl Cli {
    pub fn new(planner: Planner, renderer: TerminalRenderer, user: String) -> Self {
        Self {
            planner,
            renderer,
            user,
        }
    }

    pub async fn handle_plan_command(&self, command: PlanCommands) -> Result<()> {
        match command {
            PlanCommands::Create(args) => self.create_plan(args).await,
            PlanCommands::Preview(args) => self.preview_plan(args).await,
            PlanCommands::List => self.list_plans().await,
            PlanCommands::Show(args) => self.show_plan(args.id, args.json).await,
            PlanCommands::Duplicate(args) => self.duplicate_plan(args).await,
            PlanCommands::Delete(args) => self.delete_plan(args.id).await,
        }
    }

    async fn create_plan(&self, args: CreatePlanArgs) -> Result<()> {
        let json = args.json;
        let params = args.into_params(&self.user);
        debug!("create_plan: {params:?}");

        let plan = self
            .planner
            .create_marathon_plan(&params)
            .await
            .context("Failed to create plan")?;

        if json {
            return print_json(&plan);
        }
        self.renderer.render(&CreateResult::new(plan).to_string())
    }

    async fn preview_plan(&self, args: CreatePlanArgs) -> Result<()> {
        let json = args.json;
        let params = args.into_params(&self.user);

        let plan = self
            .planner
            .preview_marathon_plan(&params)
            .await
            .context("Failed to generate plan")?;

        if json {
            return print_json(&plan);
        }
        self.renderer.render(&plan.to_string())?;
        self.renderer.render(&format!(
            "\n{}",
            OperationStatus::notice("Preview only, nothing was saved.")
        ))
    }

    /// Lists the acting user's plans, latest race first.
    pub async fn list_plans(&self) -> Result<()> {
        let params = ListPlans {
            user_id: self.user.clone(),
        };
        let summaries = self
            .planner
            .list_plans(&params)
            .await
            .context("Failed to list plans")?;

        self.renderer.render(&summaries.to_string())
    }

    async fn show_plan(&self, id: Uuid, json: bool) -> Result<()> {
        let plan = self
            .planner
            .show_plan(&self.plan_ref(id))
            .await
            .with_context(|| format!("Failed to show plan {id}"))?;

        if json {
            return print_json(&plan);
        }
        self.renderer.render(&plan.to_string())
    }

    async fn duplicate_plan(&self, args: DuplicatePlanArgs) -> Result<()> {
        let source = args.id;
        let plan = self
            .planner
            .duplicate_plan(&args.into_params(&self.user))
            .await
            .with_context(|| format!("Failed to duplicate plan {source}"))?;

        self.renderer.render(&CreateResult::new(plan).to_string())
    }

    async fn delete_plan(&self, id: Uuid) -> Result<()> {
        let summary = self
            .planner
            .delete_plan(&self.plan_ref(id))
            .await
            .with_context(|| format!("Failed to delete plan {id}"))?;

        self.renderer.render(&DeleteResult::new(summary).to_string())
    }

    fn plan_ref(&self, id: Uuid) -> PlanRef {
        PlanRef {
            id,
            user_id: self.user.clone(),
        }
    }
}

fn print_json(plan: &Plan) -> Result<()> {
    let json = plan.to_json_pretty().context("Failed to serialize plan")?;
    println!("{json}");
    Ok(())
}
