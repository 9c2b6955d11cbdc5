//! Storefront definitions
//!
//! Each storefront module provides a `PageExtractor` for its listing markup
//! and a `plan` function that turns its configuration into a `SourcePlan`.
//! Adding a storefront means adding a module here; the crawl loop is shared.

pub mod bored_game;
mod markup;
pub mod pokevolt;
pub mod tcg_republic;

use crate::config::Config;
use crate::crawler::SourcePlan;

pub use markup::{compile, element_text, first_attr, has_class, select_first};

/// Builds crawl plans for every enabled storefront in catalog order
///
/// # Returns
///
/// * `Ok(Vec<SourcePlan>)` - Bored Game Company, TCG Republic, PokeVolt (when enabled)
/// * `Err(CatalogError)` - A storefront selector failed to compile
pub fn build_plans(config: &Config) -> crate::Result<Vec<SourcePlan>> {
    let mut plans = Vec::with_capacity(3);

    if config.bored_game_company.enabled {
        plans.push(bored_game::plan(&config.bored_game_company)?);
    }
    if config.tcg_republic.enabled {
        plans.push(tcg_republic::plan(&config.tcg_republic)?);
    }
    if config.pokevolt.enabled {
        plans.push(pokevolt::plan(&config.pokevolt)?);
    }

    Ok(plans)
}
