use anyhow::bail;
use nodal_core::ProductType;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SearchArgs;
use crate::commands::shared::export::write_export;
use crate::commands::shared::search::{SearchOutcome, present, run_search};
use crate::context::AppContext;

/// Handle `nodal focal-mechanism` and `nodal moment-tensor`.
///
/// One search, printed, then exported unless `--no-export` is given.
pub async fn handle(
    product_type: ProductType,
    args: &SearchArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut session = ctx.new_session(product_type);
    if let Some(file_name) = &args.export.file_name {
        session.set_file_name(file_name.clone());
    }

    let window = args.window.to_window(product_type);
    let outcome = run_search(&mut session, &ctx.catalog, &window, flags.quiet).await;

    let shown = present(&session, flags.format, &mut std::io::stdout().lock())?;
    check_outcome(product_type, outcome, shown)?;
    if !shown || args.export.no_export {
        return Ok(());
    }

    let dir = ctx.export_dir(args.export.out_dir.as_deref());
    if let Some(path) = write_export(&session, &dir)?
        && !flags.quiet
    {
        eprintln!("exported {}", path.display());
    }
    Ok(())
}

/// A search that failed outright and produced no rows is a command failure.
/// Rows collected before a later page failed are still shown and exported.
fn check_outcome(product_type: ProductType, outcome: SearchOutcome, shown: bool) -> anyhow::Result<()> {
    if outcome.search_failed && !shown {
        bail!("{product_type} search failed");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(kept: usize, search_failed: bool) -> SearchOutcome {
        SearchOutcome {
            kept,
            search_failed,
            ..Default::default()
        }
    }

    #[test]
    fn failed_search_without_rows_is_an_error() {
        let err = check_outcome(ProductType::MomentTensor, outcome(0, true), false).unwrap_err();
        assert_eq!(err.to_string(), "moment-tensor search failed");
    }

    #[test]
    fn partial_results_after_a_failed_page_succeed() {
        assert!(check_outcome(ProductType::FocalMechanism, outcome(2, true), true).is_ok());
    }

    #[test]
    fn empty_search_without_failure_succeeds() {
        assert!(check_outcome(ProductType::FocalMechanism, outcome(0, false), false).is_ok());
    }
}
