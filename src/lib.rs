mod dashboard;
mod dataset;
mod error;
mod frame_ext;
mod pipeline;
mod types;

pub use error::CovidInsightError;

pub use dashboard::{Dashboard, RenderSurface};
pub use dataset::data_loader::DatasetLoader;
pub use dataset::error::DatasetError;
pub use dataset::provider::{load, DatasetProvider, OWID_COVID_DATA_URL};
pub use frame_ext::CovidFrameExt;
pub use pipeline::derive_views;

pub use types::columns::*;
pub use types::metric::{Metric, UnknownMetric};
pub use types::raw_table::RawTable;
pub use types::views::global_frame::GlobalFrame;
pub use types::views::mortality::{MortalitySnapshot, MORTALITY_UNAVAILABLE_TEXT};
pub use types::views::series::{LongSeries, SeriesPoint};
pub use types::views::DerivedViews;
