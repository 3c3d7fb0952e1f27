use aquaprobe_readings::catalog::SensorCatalog;
use aquaprobe_readings::reading::Reading;
use aquaprobe_readings::sensor::SensorKind;
use aquaprobe_vis::chart::ChartScope;
use aquaprobe_vis::view::DashboardView;

use crate::fetch::client::StationClient;
use crate::fetch::error::Result as FetchResult;

/// The source a cycle pulls readings from.
pub(crate) trait ReadingSource {
    fn latest_all(&self) -> FetchResult<Vec<Reading>>;

    fn history(&self, kind: SensorKind) -> FetchResult<Vec<Reading>>;
}

impl ReadingSource for StationClient {
    fn latest_all(&self) -> FetchResult<Vec<Reading>> {
        StationClient::latest_all(self)
    }

    fn history(&self, kind: SensorKind) -> FetchResult<Vec<Reading>> {
        StationClient::history(self, kind)
    }
}

/// The output a cycle hands its assembled view to.
pub(crate) trait ViewSink {
    fn show(&mut self, view: DashboardView);
}

/// One polling cycle: fetch the latest readings and the active sensor's
/// history, then hand the assembled view to the sink.
///
/// A failed fetch produces the no-data view instead; the error goes to
/// stderr and the session keeps its cadence.
pub(crate) struct Cycle<'a, S> {
    source: &'a S,
    catalog: &'a SensorCatalog,
    active: SensorKind,
    scope: ChartScope,
}

impl<'a, S: ReadingSource> Cycle<'a, S> {
    pub fn new(
        source: &'a S,
        catalog: &'a SensorCatalog,
        active: SensorKind,
        scope: ChartScope,
    ) -> Cycle<'a, S> {
        Self {
            source,
            catalog,
            active,
            scope,
        }
    }

    pub fn run<K: ViewSink>(&self, sink: &mut K) {
        match self.fetch() {
            Ok((latest, history)) => {
                let view = DashboardView::data(&latest, &history, self.catalog, self.scope);
                sink.show(view);
            }
            Err(error) => {
                eprintln!("An error occurred while fetching readings: {error}");
                sink.show(DashboardView::no_data(self.catalog));
            }
        }
    }

    fn fetch(&self) -> FetchResult<(Vec<Reading>, Vec<Reading>)> {
        let latest = self.source.latest_all()?;
        let history = self.source.history(self.active)?;

        Ok((latest, history))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use aquaprobe_readings::catalog::Language;
    use chrono::NaiveDate;
    use reqwest::StatusCode;

    use crate::fetch::error::FetchError;

    struct FakeSource {
        fail: bool,
    }

    impl ReadingSource for FakeSource {
        fn latest_all(&self) -> FetchResult<Vec<Reading>> {
            if self.fail {
                return Err(FetchError::Response {
                    status_code: StatusCode::INTERNAL_SERVER_ERROR,
                    message: String::from("database gone"),
                });
            }

            Ok(vec![reading(SensorKind::AirTemperature, 23.456)])
        }

        fn history(&self, kind: SensorKind) -> FetchResult<Vec<Reading>> {
            assert!(!self.fail, "history must not be fetched after a failure");

            Ok(vec![reading(kind, 23.456)])
        }
    }

    struct RecordingSink {
        views: Vec<DashboardView>,
    }

    impl ViewSink for RecordingSink {
        fn show(&mut self, view: DashboardView) {
            self.views.push(view);
        }
    }

    fn reading(kind: SensorKind, value: f64) -> Reading {
        Reading {
            kind,
            value,
            timestamp: NaiveDate::from_ymd_opt(2024, 3, 1)
                .unwrap()
                .and_hms_opt(14, 30, 0)
                .unwrap(),
            id: None,
        }
    }

    #[test]
    fn a_successful_cycle_shows_the_data_view() {
        let catalog = SensorCatalog::new(Language::En);
        let source = FakeSource { fail: false };
        let cycle = Cycle::new(
            &source,
            &catalog,
            SensorKind::AirTemperature,
            ChartScope::Overview,
        );
        let mut sink = RecordingSink { views: Vec::new() };

        cycle.run(&mut sink);

        assert_eq!(sink.views.len(), 1);

        let view = &sink.views[0];
        assert!(view.banner.is_none());
        assert!(view.chart.is_some());
        assert_eq!(view.cards[0].value, "23.46°C");
        assert_eq!(view.rows.len(), 1);
    }

    #[test]
    fn a_failed_cycle_shows_the_banner_exactly_once() {
        let catalog = SensorCatalog::new(Language::En);
        let source = FakeSource { fail: true };
        let cycle = Cycle::new(
            &source,
            &catalog,
            SensorKind::AirTemperature,
            ChartScope::Overview,
        );
        let mut sink = RecordingSink { views: Vec::new() };

        cycle.run(&mut sink);

        assert_eq!(sink.views.len(), 1);

        let view = &sink.views[0];
        assert!(view.banner.is_some());
        assert!(view.cards.is_empty());
        assert!(view.rows.is_empty());
        assert!(view.chart.is_none());
    }
}
