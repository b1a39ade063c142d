//! Parlay engine CLI
//!
//! Thin operator surface over the engine: list markets, evaluate a
//! parlay, submit a simulated placement.

use anyhow::anyhow;
use clap::{Parser, Subcommand};
use parlay_engine::{
    config::Config,
    error::EngineError,
    evaluator::ParlayEvaluator,
    placement::{ParlaySubmitter, SimulatedAdapter},
    store::ParlayStore,
    supply::{GammaSupply, MarketSnapshot, SupplyService},
    types::{OutcomeSide, ParlayResult},
};
use rust_decimal::Decimal;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "parlay-engine")]
#[command(about = "Parlay probability and risk engine for prediction markets")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// List currently tradable markets
    Markets {
        /// Number of markets to show
        #[arg(short, long, default_value = "10")]
        limit: usize,
    },
    /// Evaluate a parlay without submitting it
    Evaluate {
        /// Legs as market-id:side pairs, e.g. demo-btc-100k:yes
        #[arg(long = "leg", required = true)]
        legs: Vec<String>,
        /// Stake in dollars
        #[arg(short, long, default_value = "10")]
        stake: Decimal,
    },
    /// Evaluate and submit a parlay to the simulated adapter
    Submit {
        /// Legs as market-id:side pairs, e.g. demo-btc-100k:yes
        #[arg(long = "leg", required = true)]
        legs: Vec<String>,
        /// Stake in dollars
        #[arg(short, long, default_value = "10")]
        stake: Decimal,
    },
    /// Poll the market supply and print each refresh
    Watch {
        /// Number of markets to show per refresh
        #[arg(short, long, default_value = "5")]
        limit: usize,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = Config::load(&cli.config)?;

    let supply = SupplyService::new(
        Box::new(GammaSupply::new(&config.supply)?),
        config
            .fallback_markets
            .iter()
            .cloned()
            .map(|m| m.into_market())
            .collect(),
    );

    match cli.command {
        Commands::Markets { limit } => {
            let snapshot = fetch_snapshot(&supply).await;
            for market in snapshot.markets.iter().take(limit) {
                println!(
                    "{:<24} yes {:>5.2}  no {:>5.2}  [{}]  {}",
                    market.id, market.yes_price, market.no_price, market.platform, market.question
                );
            }
        }
        Commands::Evaluate { legs, stake } => {
            let snapshot = fetch_snapshot(&supply).await;
            let store = build_store(&config, &snapshot, &legs)?;
            let evaluator = ParlayEvaluator::new(config.evaluator.clone());
            let result = evaluator.evaluate(store.legs(), stake);
            print_result(store.len(), stake, &result);
        }
        Commands::Submit { legs, stake } => {
            let snapshot = fetch_snapshot(&supply).await;
            let mut store = build_store(&config, &snapshot, &legs)?;
            let evaluator = ParlayEvaluator::new(config.evaluator.clone());
            let result = evaluator.evaluate(store.legs(), stake);
            print_result(store.len(), stake, &result);

            let submitter = ParlaySubmitter::new(
                &config.placement,
                Box::new(SimulatedAdapter::new(&config.placement)),
            );
            let ticket = submitter.submit(&mut store, stake, &result).await?;
            println!(
                "\nsubmitted {} legs for ${} (simulated, recorded in {})",
                ticket.legs.len(),
                ticket.stake,
                config.placement.audit_file.display()
            );
        }
        Commands::Watch { limit } => {
            let interval = Duration::from_secs(config.supply.refresh_interval_secs);
            loop {
                let snapshot = fetch_snapshot(&supply).await;
                println!("{} markets available:", snapshot.markets.len());
                for market in snapshot.markets.iter().take(limit) {
                    println!(
                        "  {:<24} yes {:>5.2}  no {:>5.2}  {}",
                        market.id, market.yes_price, market.no_price, market.question
                    );
                }
                tokio::time::sleep(interval).await;
            }
        }
    }

    Ok(())
}

async fn fetch_snapshot(supply: &SupplyService) -> MarketSnapshot {
    let snapshot = supply.snapshot().await;
    if !snapshot.is_live() {
        println!("WARNING: live market data unavailable, showing built-in DEMO markets\n");
    }
    snapshot
}

fn build_store(
    config: &Config,
    snapshot: &MarketSnapshot,
    leg_args: &[String],
) -> anyhow::Result<ParlayStore> {
    let mut store = ParlayStore::new(&config.store);
    for arg in leg_args {
        let (market_id, side) = arg
            .split_once(':')
            .ok_or_else(|| anyhow!("leg must be market-id:side, got '{}'", arg))?;
        let side: OutcomeSide = side.parse()?;
        let market = snapshot
            .markets
            .iter()
            .find(|m| m.id == market_id)
            .ok_or_else(|| EngineError::MarketNotFound(market_id.to_string()))?;
        store.add_leg(market, side)?;
    }
    Ok(store)
}

fn print_result(leg_count: usize, stake: Decimal, result: &ParlayResult) {
    println!("legs:                 {}", leg_count);
    println!("stake:                ${:.2}", stake);
    println!("combined probability: {}", result.combined_probability);
    println!("implied odds:         {}", result.implied_odds);
    match result.potential_payout {
        Some(payout) => println!("potential payout:     ${:.2}", payout),
        None => println!("potential payout:     unbounded (zero-probability parlay)"),
    }
    println!("expected value:       ${:.2}", result.expected_value);
    println!("risk level:           {}", result.risk_level);
    println!("recommendation:       {}", result.recommendation);
}
