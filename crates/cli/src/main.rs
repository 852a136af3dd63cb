//! FinQuest CLI - financial-literacy progress in the terminal.

use std::fmt;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use finquest_core::{format_currency, ModuleId};
use finquest_progress::{
    validate_budget, validate_expense, validate_saving_goal, AwardOutcome, CompletionState,
    Dashboard, ProgressTracker, Session,
};
use finquest_storage::JsonFileStore;
use rust_decimal::Decimal;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "finquest")]
#[command(about = "Financial-literacy learning progress tracker", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Directory holding FinQuest data
    #[arg(short, long, default_value = ".finquest", global = true)]
    data_dir: PathBuf,

    /// Override today's date (YYYY-MM-DD)
    #[arg(long, global = true)]
    today: Option<NaiveDate>,

    /// Increase log verbosity
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the demo user
    Demo,
    /// Record today's login and show the dashboard
    Status {
        /// Print the dashboard as JSON
        #[arg(long)]
        json: bool,
    },
    /// Complete a learning module
    Complete {
        /// Module: budgeting, saving, invest, expense
        module: ModuleId,
        /// Badge to grant instead of the module's own
        #[arg(long)]
        badge: Option<String>,
        /// Points to grant instead of the default
        #[arg(long)]
        points: Option<u64>,
    },
    /// Check a monthly budget
    Budget {
        /// Monthly income
        #[arg(allow_negative_numbers = true)]
        income: Decimal,
        /// Monthly expenses
        #[arg(allow_negative_numbers = true)]
        expenses: Decimal,
    },
    /// Check an annual saving goal
    SavingGoal {
        /// Monthly income
        #[arg(allow_negative_numbers = true)]
        income: Decimal,
        /// Monthly expenses
        #[arg(allow_negative_numbers = true)]
        expenses: Decimal,
        /// Annual saving goal
        #[arg(allow_negative_numbers = true)]
        goal: Decimal,
    },
    /// Check an expense against the wallet
    Expense {
        /// Expense amount
        #[arg(allow_negative_numbers = true)]
        amount: Decimal,
        /// Balance to check against (defaults to the wallet balance)
        #[arg(long, allow_negative_numbers = true)]
        balance: Option<Decimal>,
    },
    /// Print the user record as JSON
    Export,
    /// Replace the user record from a JSON file
    Import {
        /// Path to the JSON file
        path: PathBuf,
    },
    /// Delete all user data
    Clear,
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let today = cli.today.unwrap_or_else(|| chrono::Local::now().date_naive());
    let store = JsonFileStore::new(&cli.data_dir)
        .with_context(|| format!("opening data directory {}", cli.data_dir.display()))?;
    let mut tracker = ProgressTracker::new(store);
    debug!("Using data directory {}", tracker.store().root().display());

    match cli.command {
        Commands::Demo => {
            let user = tracker.init_demo_user(today)?;
            println!(
                "Demo user {} created with {} points.",
                user.username.as_deref().unwrap_or("DemoUser"),
                user.points
            );
        }
        Commands::Status { json } => {
            signed_in(tracker.record_login(today)?)?;
            let view = signed_in(tracker.dashboard()?)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                let user = signed_in(tracker.current_user()?)?;
                println!("{}", user.username.as_deref().unwrap_or("Learner"));
                print!("{}", DashboardText(&view));
                println!("Wallet: {}", format_currency(user.wallet_balance));
                let badges: Vec<_> = user.badges.iter().collect();
                if !badges.is_empty() {
                    println!("Badges: {}", badges.join(", "));
                }
            }
        }
        Commands::Complete { module, badge, points } => {
            let outcome = match (badge, points) {
                (None, None) => tracker.complete_module_with_default_reward(module)?,
                (badge, points) => {
                    let badge = badge.unwrap_or_else(|| module.badge().to_string());
                    let points = points.unwrap_or(tracker.config().points_per_module);
                    tracker.complete_module(module, &badge, points)?
                }
            };
            println!("{}", render_award(&signed_in(outcome)?));
        }
        Commands::Budget { income, expenses } => match validate_budget(income, expenses) {
            Ok(check) if check.is_balanced => {
                println!("Balanced budget. Surplus: {}", format_currency(check.surplus));
            }
            Ok(check) => {
                println!("Budget is not balanced. Shortfall: {}", format_currency(check.surplus.abs()));
            }
            Err(e) => bail!(e),
        },
        Commands::SavingGoal { income, expenses, goal } => {
            let check = validate_saving_goal(income, expenses, goal)?;
            let verdict = if check.is_realistic { "Realistic goal." } else { "Goal exceeds a year of surplus." };
            println!("{}", verdict);
            println!("Max annual savings: {}", format_currency(check.max_annual_savings));
            println!("Monthly required:   {}", format_currency(check.monthly_required));
        }
        Commands::Expense { amount, balance } => {
            let balance = match balance {
                Some(balance) => balance,
                None => signed_in(tracker.current_user()?)?.wallet_balance,
            };
            let check = validate_expense(amount, balance)?;
            if check.will_overspend {
                println!("Warning: this overspends by {}", format_currency(check.remaining_amount));
            } else {
                println!("Remaining balance: {}", format_currency(check.new_balance));
            }
        }
        Commands::Export => {
            println!("{}", tracker.export_user_data()?);
        }
        Commands::Import { path } => {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("reading {}", path.display()))?;
            if !tracker.import_user_data(&json)? {
                bail!("{} is not a valid user record", path.display());
            }
            info!("Imported {}", path.display());
            println!("User data imported.");
        }
        Commands::Clear => {
            tracker.clear_all_data()?;
            println!("All user data cleared.");
        }
    }

    Ok(())
}

/// Unwrap a session, sending signed-out users to the entry point.
fn signed_in<T>(session: Session<T>) -> Result<T> {
    match session {
        Session::Active(value) => Ok(value),
        Session::Unauthenticated => bail!("No user found. Run `finquest demo` to get started."),
    }
}

fn render_award(outcome: &AwardOutcome) -> String {
    match outcome {
        AwardOutcome::Granted { badge, points_awarded, total_points, tip, .. } => format!(
            "🎉 Success! You earned {} points and the \"{}\" badge! (total {})\n\n{}",
            points_awarded, badge, total_points, tip
        ),
        AwardOutcome::AlreadyCompleted { module } => {
            format!("You have already completed {}!", module.title())
        }
    }
}

/// Plain-text dashboard for the terminal.
struct DashboardText<'a>(&'a Dashboard);

impl fmt::Display for DashboardText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let view = self.0;
        writeln!(f, "{}", view.title)?;
        writeln!(f, "Streak: {} day(s) - {}", view.streak, view.streak_message)?;
        writeln!(f, "Points: {}", view.stats.total_points)?;
        writeln!(f, "Progress: {:.0}% Complete", view.progress.percentage)?;
        match view.progress.state() {
            CompletionState::AllComplete => writeln!(
                f,
                "🎉 Congratulations! All modules completed! You are now a Financial Expert!"
            )?,
            CompletionState::Partial => writeln!(f, "{} module(s) remaining", view.progress.remaining)?,
        }
        if view.next_milestone.reached {
            writeln!(f, "All milestones reached!")?;
        } else {
            writeln!(
                f,
                "Next milestone: {} ({} points to go)",
                view.next_milestone.milestone, view.next_milestone.points_needed
            )?;
        }
        writeln!(f, "{}", view.recommendation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use finquest_core::User;
    use finquest_progress::dashboard;

    #[test]
    fn test_cli_parses_commands() {
        let cli = Cli::try_parse_from(["finquest", "complete", "invest", "--points", "60"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Complete { module: ModuleId::Invest, badge: None, points: Some(60) }
        ));

        let cli = Cli::try_parse_from(["finquest", "--today", "2026-10-18", "budget", "1000", "-5"]).unwrap();
        assert_eq!(cli.today, NaiveDate::from_ymd_opt(2026, 10, 18));
        assert!(matches!(cli.command, Commands::Budget { .. }));

        assert!(Cli::try_parse_from(["finquest", "complete", "crypto"]).is_err());
    }

    #[test]
    fn test_signed_in_requires_user() {
        assert_eq!(signed_in(Session::Active(3)).unwrap(), 3);
        let err = signed_in::<u8>(Session::Unauthenticated).unwrap_err();
        assert!(err.to_string().contains("finquest demo"));
    }

    #[test]
    fn test_dashboard_text_states() {
        let mut user = User::demo(NaiveDate::from_ymd_opt(2026, 10, 18).unwrap());
        let text = DashboardText(&dashboard(&user)).to_string();
        assert!(text.contains("25% Complete"));
        assert!(text.contains("3 module(s) remaining"));
        assert!(text.contains("Next milestone: 100 (50 points to go)"));

        for module in ModuleId::ALL {
            user.completed_modules.insert(module, true);
        }
        user.points = 300;
        let text = DashboardText(&dashboard(&user)).to_string();
        assert!(text.contains("100% Complete"));
        assert!(text.contains("Financial Expert"));
        assert!(text.contains("All milestones reached!"));
    }

    #[test]
    fn test_render_award() {
        let text = render_award(&AwardOutcome::AlreadyCompleted { module: ModuleId::Saving });
        assert_eq!(text, "You have already completed Smart Saving!");
    }
}
