use clap::Subcommand;
use serde_json::Value;

use revenue_core::dashboard::Preferences;
use revenue_core::model::{CategoryFilter, TimeFilter};

use crate::prefs_store::JsonFilePreferenceStore;
use crate::Context;

#[derive(Subcommand)]
pub enum PrefsCommand {
    /// Print the saved filter preferences
    Show,
    /// Change one or both saved filters
    Set {
        /// Recency window: 1m, 3m, 6m or 1y
        #[arg(long)]
        time: Option<TimeFilter>,

        /// Property category or "all"
        #[arg(long)]
        category: Option<CategoryFilter>,
    },
    /// Restore the defaults (6m, all)
    Reset,
}

pub fn run_prefs(cmd: PrefsCommand, ctx: &Context) -> Result<Value, Box<dyn std::error::Error>> {
    let mut store = JsonFilePreferenceStore::new(ctx.prefs_path.clone());

    let prefs = match cmd {
        PrefsCommand::Show => Preferences::restore(&store)?,
        PrefsCommand::Set { time, category } => {
            if time.is_none() && category.is_none() {
                return Err("prefs set needs --time and/or --category".into());
            }
            let current = Preferences::restore(&store)?;
            let updated = Preferences {
                time_filter: time.unwrap_or(current.time_filter),
                category_filter: category.unwrap_or(current.category_filter),
            };
            updated.persist(&mut store)?;
            updated
        }
        PrefsCommand::Reset => {
            let defaults = Preferences::default();
            defaults.persist(&mut store)?;
            defaults
        }
    };

    Ok(serde_json::json!({
        "path": ctx.prefs_path.display().to_string(),
        "preferences": prefs,
    }))
}
