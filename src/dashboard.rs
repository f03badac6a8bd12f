//! The location selector and the event handler that re-derives views when it changes.
//!
//! A [`Dashboard`] borrows an already loaded [`RawTable`], offers every
//! location in it as a choice and, whenever a location is selected, runs
//! [`derive_views`] and hands the result to a [`RenderSurface`]. The dataset
//! is never fetched again from here.

use crate::error::CovidInsightError;
use crate::pipeline::derive_views;
use crate::types::raw_table::RawTable;
use crate::types::views::DerivedViews;
use log::{debug, info};

/// Something that draws the derived views: a chart backend, a terminal
/// printer, a test recorder. It only receives data, nothing flows back.
pub trait RenderSurface {
    fn render(&mut self, location: &str, views: &DerivedViews);
}

struct Selection {
    location: String,
    views: DerivedViews,
}

pub struct Dashboard<'a> {
    table: &'a RawTable,
    locations: Vec<String>,
    current: Option<Selection>,
}

impl<'a> Dashboard<'a> {
    /// Builds the selector population from the table's distinct locations.
    pub fn new(table: &'a RawTable) -> Result<Dashboard<'a>, CovidInsightError> {
        let locations = table.locations()?;
        info!("Dashboard ready with {} locations", locations.len());
        Ok(Dashboard {
            table,
            locations,
            current: None,
        })
    }

    /// Every selectable location, each exactly once, in order of first appearance.
    pub fn locations(&self) -> &[String] {
        &self.locations
    }

    /// The current selection, if any.
    pub fn selected(&self) -> Option<&str> {
        self.current.as_ref().map(|s| s.location.as_str())
    }

    /// Views of the current selection, if any.
    pub fn views(&self) -> Option<&DerivedViews> {
        self.current.as_ref().map(|s| &s.views)
    }

    /// Handles a selector change: derives the views for `location` and renders them.
    ///
    /// Re-selecting the current location re-renders the views it already
    /// has without deriving them again. A location that is not in
    /// [`Dashboard::locations`] is not an error; its views are simply empty.
    pub fn select<R: RenderSurface>(
        &mut self,
        location: &str,
        surface: &mut R,
    ) -> Result<&DerivedViews, CovidInsightError> {
        let selection = match self.current.take() {
            Some(selection) if selection.location == location => {
                debug!("Selection unchanged ({}), re-rendering", location);
                selection
            }
            previous => {
                debug!("Selection changed to {}", location);
                match derive_views(self.table, location) {
                    Ok(views) => Selection {
                        location: location.to_string(),
                        views,
                    },
                    Err(e) => {
                        // a failed derivation leaves the previous selection in place
                        self.current = previous;
                        return Err(e);
                    }
                }
            }
        };

        let selection = self.current.insert(selection);
        surface.render(&selection.location, &selection.views);
        Ok(&selection.views)
    }

    /// Selects the first location, like a select box does on first display.
    /// Returns `Ok(None)` for an empty table.
    pub fn select_first<R: RenderSurface>(
        &mut self,
        surface: &mut R,
    ) -> Result<Option<&DerivedViews>, CovidInsightError> {
        let Some(first) = self.locations.first().cloned() else {
            return Ok(None);
        };
        self.select(&first, surface).map(Some)
    }
}
