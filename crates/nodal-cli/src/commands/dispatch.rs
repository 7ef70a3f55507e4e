use nodal_core::ProductType;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::FocalMechanism(args) => {
            commands::search::handle(ProductType::FocalMechanism, &args, ctx, flags).await
        }
        Commands::MomentTensor(args) => {
            commands::search::handle(ProductType::MomentTensor, &args, ctx, flags).await
        }
        Commands::Shell(args) => commands::shell::handle(&args, ctx, flags).await,
    }
}
