use serde::Serialize;
use tinytemplate::TinyTemplate;

use crate::error::Result;
use crate::view::Banner;
use crate::view::DashboardView;
use crate::view::SummaryCard;
use crate::view::TableRow;

pub(crate) struct TemplateEngine;

impl TemplateEngine {
    const INDEX_TEMPLATE_NAME: &str = "index";
    const INDEX_TEMPLATE: &str = include_str!("./template/index.html.tt");

    pub fn new() -> TemplateEngine {
        Self
    }

    pub fn render(&self, context: &Context) -> Result<String> {
        let mut template = TinyTemplate::new();
        template.add_template(Self::INDEX_TEMPLATE_NAME, Self::INDEX_TEMPLATE)?;

        let text = template.render(Self::INDEX_TEMPLATE_NAME, context)?;

        Ok(text)
    }
}

#[derive(Serialize)]
pub(crate) struct Context<'v> {
    cards: &'v [SummaryCard],
    rows: &'v [TableRow],
    banner: Option<&'v Banner>,
    chart: Option<ChartContext>,
}

#[derive(Serialize)]
pub(crate) struct ChartContext {
    mount: String,
    trace: String,
    layout: String,
}

impl<'v> Context<'v> {
    pub fn from_view(view: &'v DashboardView) -> Result<Context<'v>> {
        let chart = match view.chart {
            Some(ref chart) => Some(ChartContext {
                mount: chart.mount.to_string(),
                trace: serde_json::to_string(&chart.spec.trace)?,
                layout: serde_json::to_string(&chart.spec.layout)?,
            }),
            None => None,
        };

        Ok(Context {
            cards: &view.cards,
            rows: &view.rows,
            banner: view.banner.as_ref(),
            chart,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use aquaprobe_readings::catalog::Language;
    use aquaprobe_readings::catalog::SensorCatalog;
    use aquaprobe_readings::reading::Reading;
    use aquaprobe_readings::sensor::SensorKind;
    use chrono::NaiveDate;

    use crate::chart::ChartScope;

    fn history() -> Vec<Reading> {
        vec![Reading {
            kind: SensorKind::AirTemperature,
            value: 23.456,
            timestamp: NaiveDate::from_ymd_opt(2024, 3, 1)
                .unwrap()
                .and_hms_opt(14, 30, 0)
                .unwrap(),
            id: Some(7),
        }]
    }

    #[test]
    fn a_data_view_renders_cards_rows_and_the_chart() {
        let catalog = SensorCatalog::new(Language::En);
        let history = history();
        let view = DashboardView::data(&history, &history, &catalog, ChartScope::Overview);

        let context = Context::from_view(&view).unwrap();
        let page = TemplateEngine::new().render(&context).unwrap();

        assert!(page.contains("Air temperature"));
        assert!(page.contains("23.46°C"));
        assert!(page.contains("2024/03/01 14:30"));
        assert!(page.contains("Plotly.newPlot"));
        assert!(!page.contains("banner"));
    }

    #[test]
    fn a_no_data_view_renders_the_banner_and_nothing_else() {
        let catalog = SensorCatalog::new(Language::En);
        let view = DashboardView::no_data(&catalog);

        let context = Context::from_view(&view).unwrap();
        let page = TemplateEngine::new().render(&context).unwrap();

        assert!(page.contains(catalog.no_data_message()));
        assert!(!page.contains("Plotly.newPlot"));
        assert!(!page.contains("<td>"));
    }
}
