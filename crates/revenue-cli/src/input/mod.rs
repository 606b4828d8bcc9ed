pub mod file;
pub mod stdin;

use revenue_core::model::DashboardData;

use crate::Context;

/// Dataset from `--data`, else piped stdin, else the built-in sample.
pub fn load_dataset(ctx: &Context) -> Result<DashboardData, Box<dyn std::error::Error>> {
    let data: DashboardData = if let Some(ref path) = ctx.data {
        tracing::info!(path = %path, "loading dataset file");
        file::read_data(path)?
    } else if let Some(data) = stdin::read_stdin()? {
        tracing::info!("loading dataset from stdin");
        data
    } else {
        tracing::info!("using built-in sample dataset");
        DashboardData::sample()
    };
    data.validate()?;
    Ok(data)
}
