//! Typed view models for the dashboard page.
//!
//! Every section is a value built from readings first and rendered
//! second, so the displayed format (two-decimal values, unit suffixes,
//! endpoint-format timestamps) lives in one place.

use aquaprobe_readings::catalog::SensorCatalog;
use aquaprobe_readings::reading::Reading;
use aquaprobe_readings::reading::TIMESTAMP_FORMAT;
use aquaprobe_readings::sensor::SensorKind;

use serde::Serialize;

use crate::chart::Chart;
use crate::chart::ChartScope;

/// One dashboard summary card.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct SummaryCard {
    /// The localized sensor label.
    pub label: &'static str,

    /// The formatted value, unit suffix included.
    pub value: String,
}

impl SummaryCard {
    /// Build the cards for the latest readings, in catalog order.
    /// Kinds with no matching reading yield no card.
    pub fn from_latest(readings: &[Reading], catalog: &SensorCatalog) -> Vec<SummaryCard> {
        SensorKind::ALL
            .into_iter()
            .filter_map(|kind| {
                readings
                    .iter()
                    .find(|reading| reading.kind == kind)
                    .map(|reading| SummaryCard {
                        label: catalog.label_for(kind),
                        value: display_value(reading.value, kind),
                    })
            })
            .collect()
    }
}

/// One row of the history table.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct TableRow {
    /// The reading id when the endpoint provides one, else the
    /// one-based position in the response.
    pub position: u64,

    /// The value formatted to two decimal places, without a unit.
    pub value: String,

    /// The timestamp, rendered back in the endpoint's own format.
    pub timestamp: String,
}

impl TableRow {
    /// Build the rows for a history response.
    ///
    /// The table is always replaced wholesale, never patched row by row.
    pub fn from_history(readings: &[Reading]) -> Vec<TableRow> {
        readings
            .iter()
            .enumerate()
            .map(|(index, reading)| TableRow {
                position: reading.id.unwrap_or(index as u64 + 1),
                value: format!("{:.2}", reading.value),
                timestamp: reading.timestamp.format(TIMESTAMP_FORMAT).to_string(),
            })
            .collect()
    }
}

/// The localized overlay shown when a polling cycle cannot produce data.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct Banner {
    /// The localized no-data message.
    pub message: &'static str,
}

impl Banner {
    /// The no-data banner in the catalog's language.
    pub fn no_data(catalog: &SensorCatalog) -> Banner {
        Self {
            message: catalog.no_data_message(),
        }
    }
}

/// Everything one render pass puts on the page.
#[derive(Debug)]
pub struct DashboardView {
    /// The summary cards, empty on a failed cycle.
    pub cards: Vec<SummaryCard>,

    /// The history table rows, empty on a failed cycle.
    pub rows: Vec<TableRow>,

    /// The chart, absent on a failed cycle.
    pub chart: Option<Chart>,

    /// The no-data overlay, present only on a failed cycle.
    pub banner: Option<Banner>,
}

impl DashboardView {
    /// The view of a successful polling cycle.
    pub fn data(
        latest: &[Reading],
        history: &[Reading],
        catalog: &SensorCatalog,
        scope: ChartScope,
    ) -> DashboardView {
        Self {
            cards: SummaryCard::from_latest(latest, catalog),
            rows: TableRow::from_history(history),
            chart: Some(Chart::new(history, scope)),
            banner: None,
        }
    }

    /// The view of a failed polling cycle: the localized overlay over a
    /// dimmed content area, no data sections.
    pub fn no_data(catalog: &SensorCatalog) -> DashboardView {
        Self {
            cards: Vec::new(),
            rows: Vec::new(),
            chart: None,
            banner: Some(Banner::no_data(catalog)),
        }
    }
}

/// Format a value the way the summary cards display it: two decimal
/// places followed by the kind's unit suffix.
pub fn display_value(value: f64, kind: SensorKind) -> String {
    format!("{:.2}{}", value, kind.unit())
}

#[cfg(test)]
mod tests {
    use super::*;

    use aquaprobe_readings::catalog::Language;
    use chrono::NaiveDate;

    fn reading(kind: SensorKind, value: f64, id: Option<u64>) -> Reading {
        Reading {
            kind,
            value,
            timestamp: NaiveDate::from_ymd_opt(2024, 3, 1)
                .unwrap()
                .and_hms_opt(14, 30, 0)
                .unwrap(),
            id,
        }
    }

    #[test]
    fn temperature_cards_round_to_two_decimals_and_carry_the_unit() {
        let catalog = SensorCatalog::new(Language::En);
        let readings = vec![reading(SensorKind::AirTemperature, 23.456, None)];

        let cards = SummaryCard::from_latest(&readings, &catalog);

        assert_eq!(
            cards,
            vec![SummaryCard {
                label: "Air temperature",
                value: String::from("23.46°C"),
            }]
        );
    }

    #[test]
    fn pressure_cards_carry_the_station_suffix() {
        let catalog = SensorCatalog::new(Language::En);
        let readings = vec![reading(SensorKind::Pressure, 1013.0, None)];

        let cards = SummaryCard::from_latest(&readings, &catalog);

        assert_eq!(cards[0].value, "1013.00pHa");
    }

    #[test]
    fn unitless_cards_display_bare_numbers() {
        let catalog = SensorCatalog::new(Language::En);
        let readings = vec![reading(SensorKind::Ph, 7.2, None)];

        let cards = SummaryCard::from_latest(&readings, &catalog);

        assert_eq!(cards[0].value, "7.20");
    }

    #[test]
    fn kinds_without_a_reading_yield_no_card() {
        let catalog = SensorCatalog::new(Language::En);
        let readings = vec![
            reading(SensorKind::WaterTemperature, 18.0, None),
            reading(SensorKind::Chlorine, 0.4, None),
        ];

        let cards = SummaryCard::from_latest(&readings, &catalog);

        let labels: Vec<&str> = cards.iter().map(|card| card.label).collect();
        assert_eq!(labels, vec!["Chlorine", "Water temperature"]);
    }

    #[test]
    fn rows_prefer_the_reading_id_over_the_position() {
        let readings = vec![
            reading(SensorKind::Ph, 7.2, Some(731)),
            reading(SensorKind::Ph, 7.1, None),
        ];

        let rows = TableRow::from_history(&readings);

        assert_eq!(rows[0].position, 731);
        assert_eq!(rows[1].position, 2);
        assert_eq!(rows[0].value, "7.20");
        assert_eq!(rows[0].timestamp, "2024/03/01 14:30");
    }

    #[test]
    fn the_no_data_view_carries_only_the_banner() {
        let catalog = SensorCatalog::new(Language::Fr);

        let view = DashboardView::no_data(&catalog);

        assert!(view.cards.is_empty());
        assert!(view.rows.is_empty());
        assert!(view.chart.is_none());
        assert_eq!(view.banner.unwrap().message, catalog.no_data_message());
    }
}
