//! Check command implementation.

use super::load_draft;
use crate::cli::CheckArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use giftmatch_gatekeeper::Gatekeeper;

/// Execute the check command.
///
/// Prints every problem with the file, or the constraints as the engine will
/// read them.
pub fn execute_check(args: CheckArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let draft = load_draft(&args.file)?;
    let gatekeeper = Gatekeeper::new(config.validation_config(args.strict));

    let result = gatekeeper.validate(&draft);
    if !result.is_accepted() {
        println!("{}", formatter.format_rejections(&result.reasons));
        return Err(CliError::InvalidInput(format!(
            "{} has {} problem(s)",
            args.file.display(),
            result.reasons.len()
        )));
    }

    let exchange = gatekeeper.admit(&draft)?;
    println!("{}", formatter.format_constraints(&exchange)?);
    println!(
        "{}",
        formatter.success(&format!(
            "'{}' is valid: {} participants, {} constraints",
            exchange.name,
            exchange.participants.len(),
            exchange.constraints.len()
        ))
    );

    Ok(())
}
