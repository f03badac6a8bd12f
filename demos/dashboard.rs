//! demos/dashboard.rs
//!
//! Loads the OWID COVID-19 table and prints every dashboard view for a
//! location, switching the selection once to show the event handler at work.
//!
//! cargo run --example dashboard -- Netherlands Belgium

use covid_insight::{CovidInsightError, Dashboard, DerivedViews, RenderSurface};

/// Renders views as plain text on stdout.
struct TextSurface;

impl RenderSurface for TextSurface {
    fn render(&mut self, location: &str, views: &DerivedViews) {
        println!("=== {} ===", location);
        println!("{}", views.mortality.describe(location));
        println!(
            "World map: {} rows over {} animation frames",
            views.global.frame.height(),
            views.global.animation_dates().map(|d| d.len()).unwrap_or(0)
        );
        println!("Geographical death distribution:\n{}", views.geo.tail(Some(3)));
        println!("Stringency index over time:\n{}", views.policy.tail(Some(5)));
        println!(
            "Trends in cases and deaths ({} rows):\n{}",
            views.cases_deaths.len(),
            views.cases_deaths.frame.tail(Some(4))
        );
        println!(
            "Vaccination progress ({} rows):\n{}",
            views.vaccination.len(),
            views.vaccination.frame.tail(Some(6))
        );
    }
}

#[tokio::main]
async fn main() -> Result<(), CovidInsightError> {
    // Set RUST_LOG=info (or debug) to see loader and pipeline messages
    env_logger::init();

    let table = covid_insight::load().await?;
    let mut dashboard = Dashboard::new(table)?;
    println!("{} selectable locations", dashboard.locations().len());

    let mut surface = TextSurface;
    let selections: Vec<String> = std::env::args().skip(1).collect();
    if selections.is_empty() {
        dashboard.select_first(&mut surface)?;
    }
    for location in &selections {
        dashboard.select(location, &mut surface)?;
    }

    // Cached: a second load does not hit the network.
    let again = covid_insight::load().await?;
    assert!(std::ptr::eq(table, again));

    Ok(())
}
