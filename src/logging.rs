use anyhow::Result;
use tracing_subscriber::fmt;

/// Installs the global subscriber when verbose output is requested. Quiet by
/// default; the CLI owns all user-facing messages.
pub fn init(verbose: bool) -> Result<()> {
    if !verbose {
        return Ok(());
    }
    let _ = fmt()
        .with_target(false)
        .with_level(true)
        .try_init();
    Ok(())
}
