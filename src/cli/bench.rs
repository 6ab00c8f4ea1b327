//! Bench command
//!
//! `sigil bench` - Compare cold and cached profiler construction

use anyhow::{bail, Context, Result};
use sigil_core::{Character, CharacterProfiler, Profile, SymbologyCache};
use std::time::{Duration, Instant};
use tracing::info;

/// Benchmark measurements
#[derive(Debug, Clone)]
pub struct BenchReport {
    /// First construction (cache miss)
    pub cold: Duration,
    /// All later constructions (cache hits)
    pub warm_total: Duration,
    /// Number of later constructions
    pub warm_runs: usize,
    /// Profile of the sample character
    pub profile: Profile,
}

impl BenchReport {
    /// Mean time of one cached construction
    pub fn warm_average(&self) -> Duration {
        self.warm_total / self.warm_runs as u32
    }

    /// Cold time divided by the mean cached time
    pub fn speedup(&self) -> f64 {
        let average = self.warm_average().as_secs_f64();
        if average > 0.0 {
            self.cold.as_secs_f64() / average
        } else {
            f64::INFINITY
        }
    }
}

/// Character profiled after the timed constructions
pub fn sample_character() -> Character {
    let mut character = Character::default()
        .with_name("TestCharacter")
        .with_origin("Celestial")
        .with_role("Mage")
        .with_traits(["Brave", "Wise", "Mysterious"])
        .with_zodiac_sign("Aries")
        .with_name_meaning("Star");
    character.abilities = vec!["Magic".to_string()];
    character.goals = vec!["Test".to_string()];
    character
}

/// Time `iterations` profiler constructions against a freshly cleared cache
pub fn measure(cache: &SymbologyCache, document: &str, iterations: usize) -> Result<BenchReport> {
    if iterations < 2 {
        bail!("iterations must be at least 2 (got {iterations})");
    }

    cache.clear()?;

    let start = Instant::now();
    let profiler = CharacterProfiler::new(cache, document)
        .with_context(|| format!("Failed to load symbology document {document}"))?;
    let cold = start.elapsed();

    let warm_runs = iterations - 1;
    let start = Instant::now();
    let profilers = (0..warm_runs)
        .map(|_| CharacterProfiler::new(cache, document))
        .collect::<sigil_core::Result<Vec<_>>>()?;
    let warm_total = start.elapsed();
    drop(profilers);

    let profile = profiler.profile_character(&sample_character());

    Ok(BenchReport {
        cold,
        warm_total,
        warm_runs,
        profile,
    })
}

/// Run bench command
pub fn run(document: &str, iterations: usize) -> Result<()> {
    let cache = SymbologyCache::new();
    let report = measure(&cache, document, iterations)?;
    info!(
        cold_us = report.cold.as_micros() as u64,
        warm_runs = report.warm_runs,
        "Benchmark finished"
    );

    println!("Performance Benchmark: CharacterProfiler caching");
    println!("{}", "=".repeat(60));
    println!(
        "First instantiation (cache miss): {:.4} seconds",
        report.cold.as_secs_f64()
    );
    println!(
        "Subsequent {} instantiations (cache hits): {:.4} seconds",
        report.warm_runs,
        report.warm_total.as_secs_f64()
    );
    println!(
        "Average time per cached instantiation: {:.4} seconds",
        report.warm_average().as_secs_f64()
    );
    println!("Performance improvement: {:.1}x faster", report.speedup());

    println!("\nFunctionality Test:");
    println!("Core Symbol: {}", report.profile.core);
    println!(
        "Personality Symbols: {}",
        sigil_core::render_symbol_list(&report.profile.personality)
    );
    println!("Role Symbol: {}", report.profile.role);

    Ok(())
}
