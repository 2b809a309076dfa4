//! Draw command implementation.

use super::load_draft;
use crate::cli::DrawArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use giftmatch_domain::Exchange;
use giftmatch_engine::{MatchOutcome, MatchingEngine};
use giftmatch_gatekeeper::{ExchangeDraft, Gatekeeper};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

/// Execute the draw command.
pub fn execute_draw(args: DrawArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let draft = load_draft(&args.file)?;
    // Stalled rounds are reported by the engine's own warnings
    let (exchange, _) = draw_exchange(&draft, config, args.seed, args.retries, args.strict)?;

    match args.for_name {
        Some(name) => {
            let giver = exchange
                .participant_named(&name)
                .ok_or_else(|| CliError::NotFound(format!("participant '{}'", name)))?;
            let giftee = exchange
                .giftee_for_name(&name)
                .ok_or_else(|| CliError::NotFound(format!("giftee of '{}'", name)))?;
            println!("{}", formatter.format_assignment(giver, giftee)?);
        }
        None => println!("{}", formatter.format_matching(&exchange)?),
    }

    Ok(())
}

/// Admit a draft and draw a matching for it.
///
/// A seed makes the draw reproducible; without one the generator is seeded
/// from the operating system. `retries` overrides the configured retries per
/// round.
pub fn draw_exchange(
    draft: &ExchangeDraft,
    config: &Config,
    seed: Option<u64>,
    retries: Option<usize>,
    strict: bool,
) -> Result<(Exchange, MatchOutcome)> {
    let exchange = Gatekeeper::new(config.validation_config(strict)).admit(draft)?;

    let mut engine_config = config.engine.clone();
    if let Some(retries) = retries {
        engine_config = engine_config.with_retries_per_round(retries);
    }

    let mut rng = match seed {
        Some(seed) => {
            debug!("Seeding draw with {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let engine = MatchingEngine::new(engine_config);
    let outcome = engine.find_matching(&exchange.participants, &exchange.constraints, &mut rng)?;
    let exchange = exchange.with_matching(outcome.matching.clone());

    Ok((exchange, outcome))
}
