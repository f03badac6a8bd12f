//! demos/graph_views.rs
//!
//! Draws the policy, cases/deaths and vaccination views of one location with
//! `plotlars`. Plots open in the browser.
//!
//! cargo run --example graph_views --features demos -- Netherlands

use std::error::Error;

use covid_insight::{
    Dashboard, DerivedViews, LongSeries, RenderSurface, COL_DATE,
    COL_STRINGENCY_INDEX,
};
use plotlars::{Legend, Plot, Rgb, Text, TimeSeriesPlot};
use polars::prelude::*;

struct PlotSurface;

impl RenderSurface for PlotSurface {
    fn render(&mut self, location: &str, views: &DerivedViews) {
        println!("{}", views.mortality.describe(location));

        plot_series(
            &views.policy,
            COL_STRINGENCY_INDEX,
            &[],
            &format!("Stringency Index Over Time ({})", location),
            "Stringency Index",
        );

        let dates = views.policy.column(COL_DATE).ok();
        for (series, title) in [
            (&views.cases_deaths, "Trends in Cases and Deaths Over Time"),
            (&views.vaccination, "Vaccination Progress Over Time"),
        ] {
            let Some(dates) = dates else { continue };
            match widen(dates, series) {
                Ok(wide) => {
                    let names: Vec<&str> =
                        series.metrics().iter().map(|m| m.column_name()).collect();
                    plot_series(&wide, names[0], &names[1..], title, "Number of People");
                }
                Err(e) => eprintln!("Could not plot {}: {}", title, e),
            }
        }
    }
}

/// Turns a long-form series back into one column per metric, for plotting
/// libraries that take wide frames.
fn widen(dates: &Column, series: &LongSeries) -> PolarsResult<DataFrame> {
    let mut columns = vec![dates.clone()];
    for metric in series.metrics() {
        columns.push(Column::new(
            metric.column_name().into(),
            series.values_for(*metric)?,
        ));
    }
    DataFrame::new(columns)
}

fn plot_series(data: &DataFrame, y: &str, additional: &[&str], title: &str, y_title: &str) {
    TimeSeriesPlot::builder()
        .data(data)
        .x(COL_DATE)
        .y(y)
        .additional_series(additional.to_vec())
        .colors(vec![Rgb(235, 117, 0), Rgb(69, 157, 230), Rgb(90, 180, 90)])
        .plot_title(Text::from(title).size(18))
        .legend(&Legend::new().x(0.05).y(0.9))
        .x_title("Date")
        .y_title(y_title)
        .build()
        .plot();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let location = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "Netherlands".to_string());

    let table = covid_insight::load().await?;
    let mut dashboard = Dashboard::new(table)?;
    let views = dashboard.select(&location, &mut PlotSurface)?;

    // The world map frame for the last animation step.
    if let Some(last) = views.global.animation_dates()?.last() {
        println!("World map on {}:\n{}", last, views.global.at(*last)?.head(Some(10)));
    }
    Ok(())
}
