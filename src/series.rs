use chrono::NaiveDateTime;

/// Hourly forecast for the dashboard's fixed location.
///
/// The two arrays are index-aligned: `temperatures()[i]` is the reading
/// taken at `times()[i]`. The fields are private so a series can only be
/// built through [`ForecastSeries::new`] and never mutated afterwards; a
/// session replaces the whole series or keeps none at all.
#[derive(Clone, Debug, PartialEq)]
pub struct ForecastSeries {
    times: Vec<NaiveDateTime>,
    temperatures: Vec<f64>,
}

impl ForecastSeries {
    pub fn new(times: Vec<NaiveDateTime>, temperatures: Vec<f64>) -> Self {
        debug_assert_eq!(times.len(), temperatures.len());
        Self {
            times,
            temperatures,
        }
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    pub fn times(&self) -> &[NaiveDateTime] {
        &self.times
    }

    pub fn temperatures(&self) -> &[f64] {
        &self.temperatures
    }
}
