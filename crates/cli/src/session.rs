use aquaprobe_readings::catalog::Language;
use aquaprobe_readings::catalog::SensorCatalog;
use aquaprobe_readings::sensor::SensorKind;
use aquaprobe_vis::chart::ChartScope;
use aquaprobe_vis::dashboard::Dashboard;
use aquaprobe_vis::view::DashboardView;

use crate::cli::PathExt;
use crate::cli::SnapshotArgs;
use crate::cli::WatchArgs;
use crate::cycle::Cycle;
use crate::cycle::ViewSink;
use crate::error::CliError;
use crate::fetch::client::StationClient;
use crate::poll::IntervalTicker;
use crate::poll::OneShot;
use crate::poll::PageKind;
use crate::poll::PollingSession;
use crate::poll::Ticker;

/// Everything a page resolves before its polling session starts: the
/// language from the URL, the label catalog from the language, and the
/// selected sensor through the catalog.
pub(crate) struct PageContext {
    pub catalog: SensorCatalog,
    pub kind: PageKind,
    pub active: SensorKind,
    pub scope: ChartScope,
}

impl PageContext {
    pub fn resolve(url: &str, sensor: Option<&str>) -> Result<PageContext, CliError> {
        let language = Language::detect(url);
        let catalog = SensorCatalog::new(language);
        let kind = PageKind::from_url(url);

        let active = match sensor {
            Some(label) => catalog.kind_for_label(label)?,
            None => SensorKind::ALL[0],
        };

        let scope = match kind {
            PageKind::Details => ChartScope::Details,
            _ => ChartScope::Overview,
        };

        Ok(PageContext {
            catalog,
            kind,
            active,
            scope,
        })
    }
}

/// A language-switch link points at a bare language root; it takes the
/// normal full-load path instead of an in-site transition.
pub(crate) fn is_transition(url: &str) -> bool {
    let trimmed = url.trim_end_matches('/');
    let last = trimmed.rsplit('/').next().unwrap_or(trimmed);

    !matches!(last, "vi" | "fr" | "en")
}

/// Owns at most one polling session and swaps it wholesale on
/// navigation, so two timers can never overlap.
pub(crate) struct Coordinator {
    context: PageContext,
    session: PollingSession,
}

impl Coordinator {
    pub fn enter(url: &str, sensor: Option<&str>) -> Result<Coordinator, CliError> {
        let context = PageContext::resolve(url, sensor)?;
        let session = PollingSession::new(context.kind);

        Ok(Self { context, session })
    }

    /// Swap to a new page, tearing the previous session down first.
    ///
    /// Returns `false` without touching the session when the URL is a
    /// language-switch link, which is not intercepted.
    pub fn navigate(&mut self, url: &str, sensor: Option<&str>) -> Result<bool, CliError> {
        if !is_transition(url) {
            return Ok(false);
        }

        self.context = PageContext::resolve(url, sensor)?;
        self.session = PollingSession::new(self.context.kind);

        Ok(true)
    }

    pub fn context(&self) -> &PageContext {
        &self.context
    }

    /// Drive the current page's session to completion.
    pub fn run<T: Ticker>(&mut self, client: &StationClient, dashboard: Dashboard, ticker: T) {
        let cycle = Cycle::new(
            client,
            &self.context.catalog,
            self.context.active,
            self.context.scope,
        );
        let mut sink = FileSink { dashboard };

        self.session.run(|| cycle.run(&mut sink), ticker);
    }
}

struct FileSink {
    dashboard: Dashboard,
}

impl ViewSink for FileSink {
    fn show(&mut self, view: DashboardView) {
        if let Err(error) = self.dashboard.render(&view) {
            eprintln!("An error occurred while writing the dashboard: {error}");
        }
    }
}

pub(crate) fn watch(args: WatchArgs) -> Result<(), CliError> {
    let mut coordinator = Coordinator::enter(&args.page.url, args.page.sensor.as_deref())?;
    let output = args.page.output.or_current_dir()?;

    let dashboard = Dashboard::init(&output)?;
    let ticker = IntervalTicker::new(args.interval_ms);

    println!(
        "aquaprobe polls `{endpoint}` every {interval}ms and writes the dashboard to `{path}`",
        endpoint = args.page.endpoint,
        interval = args.interval_ms,
        path = dashboard.root_path().display()
    );

    let client = StationClient::new(args.page.endpoint);
    coordinator.run(&client, dashboard, ticker);

    Ok(())
}

pub(crate) fn snapshot(args: SnapshotArgs) -> Result<(), CliError> {
    let mut coordinator = Coordinator::enter(&args.page.url, args.page.sensor.as_deref())?;
    let output = args.page.output.or_current_dir()?;

    let dashboard = Dashboard::init(&output)?;
    let client = StationClient::new(args.page.endpoint);

    coordinator.run(&client, dashboard, OneShot);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn the_context_rebuilds_the_catalog_per_language() {
        let mut coordinator = Coordinator::enter("https://site/en/index.html", None).unwrap();
        assert_eq!(coordinator.context().catalog.language(), Language::En);

        let moved = coordinator
            .navigate("https://site/fr/details.html", None)
            .unwrap();

        assert!(moved);
        assert_eq!(coordinator.context().catalog.language(), Language::Fr);
        assert_eq!(coordinator.context().kind, PageKind::Details);
        assert_eq!(coordinator.context().scope, ChartScope::Details);
    }

    #[test]
    fn language_switch_links_are_not_intercepted() {
        let mut coordinator = Coordinator::enter("https://site/en/index.html", None).unwrap();

        let moved = coordinator.navigate("https://site/fr/", None).unwrap();

        assert!(!moved);
        assert_eq!(coordinator.context().catalog.language(), Language::En);
    }

    #[test]
    fn the_active_sensor_resolves_through_the_catalog() {
        let context =
            PageContext::resolve("https://site/en/details.html", Some("Salinity")).unwrap();

        assert_eq!(context.active, SensorKind::Salinity);
    }

    #[test]
    fn an_unknown_sensor_label_fails_before_any_request() {
        let error = PageContext::resolve("https://site/en/details.html", Some("Humidity"));

        assert!(matches!(error, Err(CliError::Catalog(_))));
    }

    #[test]
    fn the_default_active_sensor_is_the_first_catalog_entry() {
        let context = PageContext::resolve("https://site/index.html", None).unwrap();

        assert_eq!(context.active, SensorKind::ALL[0]);
    }

    #[test]
    fn page_transitions_are_detected() {
        assert!(is_transition("https://site/en/details.html"));
        assert!(!is_transition("https://site/vi/"));
        assert!(!is_transition("https://site/en"));
        assert!(!is_transition("fr"));
    }
}
