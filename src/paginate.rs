use chrono::NaiveDateTime;

use crate::series::ForecastSeries;

/// Readings shown per page of the table and chart.
pub const PAGE_SIZE: usize = 10;

/// One page of a series, recomputed from `(series, page)` on every read.
///
/// `times` and `temperatures` are the index-aligned slices
/// `series[start..end]` in original order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageWindow<'a> {
    pub times: &'a [NaiveDateTime],
    pub temperatures: &'a [f64],
    pub start: usize,
    pub end: usize,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
}

impl PageWindow<'_> {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

pub fn total_pages(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size)
}

/// Slice out page `page` (1-based) of the series.
///
/// An empty series has no pages at all, so any requested page yields an
/// empty window with `total_pages == 0`. For a non-empty series the caller
/// must pass a page in `1..=total_pages`; anything else is a caller bug and
/// panics rather than being clamped here — clamping is the controller's job.
pub fn window(series: &ForecastSeries, page: usize, page_size: usize) -> PageWindow<'_> {
    let total = total_pages(series.len(), page_size);

    if series.is_empty() {
        return PageWindow {
            times: &[],
            temperatures: &[],
            start: 0,
            end: 0,
            page,
            page_size,
            total_pages: 0,
        };
    }

    assert!(
        (1..=total).contains(&page),
        "page {page} outside 1..={total}"
    );

    let start = (page - 1) * page_size;
    let end = (start + page_size).min(series.len());

    PageWindow {
        times: &series.times()[start..end],
        temperatures: &series.temperatures()[start..end],
        start,
        end,
        page,
        page_size,
        total_pages: total,
    }
}
