use crate::openmeteo::FetchError;
use crate::paginate::{self, PageWindow, PAGE_SIZE};
use crate::series::ForecastSeries;

/// Where the session is in its load lifecycle. A session starts `Loading`
/// and settles into exactly one of `Ready` or `Failed`.
#[derive(Debug)]
pub enum LoadStatus {
    Loading,
    Ready,
    Failed(FetchError),
}

/// Owns the loaded series and the 1-based page cursor.
///
/// All pagination state changes go through [`next`](Self::next) and
/// [`prev`](Self::prev), which clamp at the page bounds so the pure
/// paginator never sees an out-of-range page.
pub struct DashboardController {
    status: LoadStatus,
    series: Option<ForecastSeries>,
    page: usize,
}

impl DashboardController {
    pub fn new() -> Self {
        Self {
            status: LoadStatus::Loading,
            series: None,
            page: 1,
        }
    }

    /// Run the one-shot fetch and settle into `Ready` or `Failed`.
    pub fn load<F>(&mut self, fetch: F)
    where
        F: FnOnce() -> Result<ForecastSeries, FetchError>,
    {
        match fetch() {
            Ok(series) => {
                self.series = Some(series);
                self.page = 1;
                self.status = LoadStatus::Ready;
            }
            Err(err) => {
                log::warn!("forecast load failed: {err}");
                self.status = LoadStatus::Failed(err);
            }
        }
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn series(&self) -> Option<&ForecastSeries> {
        self.series.as_ref()
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn total_pages(&self) -> usize {
        self.series
            .as_ref()
            .map_or(0, |series| paginate::total_pages(series.len(), PAGE_SIZE))
    }

    /// Window for the page currently in view.
    pub fn window(&self) -> Option<PageWindow<'_>> {
        self.series
            .as_ref()
            .map(|series| paginate::window(series, self.page, PAGE_SIZE))
    }

    pub fn next(&mut self) {
        if self.has_next() {
            self.page += 1;
        }
    }

    pub fn prev(&mut self) {
        if self.has_prev() {
            self.page -= 1;
        }
    }

    pub fn has_next(&self) -> bool {
        self.page() < self.total_pages()
    }

    pub fn has_prev(&self) -> bool {
        self.page() > 1
    }
}

impl Default for DashboardController {
    fn default() -> Self {
        Self::new()
    }
}
