//! ReportBuilder: lays a risk file and its aggregate out as pages.

use tracing::{debug, info};

use riskq_charts::{cascade_series, impact_series, scenario_series};
use riskq_core::config::ReportConfig;
use riskq_core::errors::ExportError;
use riskq_core::models::AnalysisData;
use riskq_core::records::{CodeField, RiskFile, Scenario};
use riskq_scales::describe_or_default;

use crate::model::{Block, ChartSeries, KeyValueRow, Page, Report};

pub const UNAVAILABLE_MESSAGE: &str = "Aggregated data unavailable";

pub struct ReportBuilder {
    config: ReportConfig,
}

impl ReportBuilder {
    pub fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    pub fn build(&self, risk_file: &RiskFile, data: &AnalysisData) -> Result<Report, ExportError> {
        let _span = riskq_core::export_span!(risk_file.id).entered();

        if data.risk_file_id != risk_file.id {
            return Err(ExportError::Render {
                message: format!(
                    "aggregate for {} does not belong to risk file {}",
                    data.risk_file_id, risk_file.id
                ),
            });
        }

        let blocks = self.blocks(risk_file, data);
        let pages = paginate(blocks, self.config.blocks_per_page);
        let title = format!("{}: {}", self.config.title_prefix, risk_file.title);
        let report = Report::new(title, risk_file.id.clone(), pages)?;

        info!(
            pages = report.page_count(),
            available = data.available,
            "report built"
        );
        Ok(report)
    }

    fn blocks(&self, risk_file: &RiskFile, data: &AnalysisData) -> Vec<Block> {
        let mut blocks = vec![Block::Heading {
            level: 1,
            text: risk_file.title.clone(),
        }];
        if let Some(definition) = &risk_file.definition {
            blocks.push(Block::Paragraph {
                text: definition.clone(),
            });
        }
        blocks.push(Block::KeyValue {
            rows: vec![
                KeyValueRow::new("Risk type", risk_file.risk_type.as_str()),
                KeyValueRow::new("Category", risk_file.category.label()),
            ],
        });

        for scenario in Scenario::ALL {
            blocks.push(Block::Heading {
                level: 2,
                text: format!("{} scenario", scenario.label()),
            });
            blocks.push(Block::KeyValue {
                rows: code_rows(risk_file, scenario),
            });
            if let Some(aggregate) = data.scenario(scenario) {
                blocks.push(Block::KeyValue {
                    rows: vec![
                        KeyValueRow::new("Quality", aggregate.quality.as_str()),
                        KeyValueRow::new(
                            "Probability",
                            format!("{:.2}", aggregate.probability.value),
                        ),
                        KeyValueRow::new("Total impact", format!("{:.2}", aggregate.total_impact)),
                    ],
                });
                blocks.push(Block::Chart {
                    title: format!("{} impact", scenario.label()),
                    series: ChartSeries::Bars(impact_series(aggregate)),
                });
            }
        }

        if !data.available {
            debug!("aggregate unavailable, adding placeholder block");
            blocks.push(Block::Unavailable {
                message: UNAVAILABLE_MESSAGE.to_string(),
            });
            return blocks;
        }

        blocks.push(Block::Heading {
            level: 2,
            text: "Risk matrix".to_string(),
        });
        blocks.push(Block::KeyValue {
            rows: vec![
                KeyValueRow::new("Submissions", data.submissions.to_string()),
                KeyValueRow::new("Overall quality", data.overall_quality().as_str()),
            ],
        });
        blocks.push(Block::Chart {
            title: "Probability and impact per scenario".to_string(),
            series: ChartSeries::Scenarios(scenario_series(data)),
        });

        if !data.causes.is_empty() {
            blocks.push(Block::Heading {
                level: 2,
                text: "Causes".to_string(),
            });
            blocks.push(Block::Chart {
                title: "Cascade probability per cause".to_string(),
                series: ChartSeries::Bars(cascade_series(data)),
            });
        }
        blocks
    }
}

impl Default for ReportBuilder {
    fn default() -> Self {
        Self::new(ReportConfig::default())
    }
}

/// The risk file's own coded estimate for each field, with its interval.
fn code_rows(risk_file: &RiskFile, scenario: Scenario) -> Vec<KeyValueRow> {
    let codes = risk_file.scenario(scenario);
    CodeField::ALL
        .into_iter()
        .map(|field| {
            let code = codes.get(field);
            let display = describe_or_default(code);
            let value = match code {
                Some(code) if !display.unit.is_empty() => {
                    format!("{code}: {} {}", display.interval, display.unit)
                }
                Some(code) => format!("{code}: {}", display.interval),
                None => display.interval.to_string(),
            };
            KeyValueRow::new(field.label(), value)
        })
        .collect()
}

fn paginate(blocks: Vec<Block>, per_page: usize) -> Vec<Page> {
    let per_page = per_page.max(1);
    let mut pages = Vec::with_capacity(blocks.len().div_ceil(per_page));
    let mut current = Vec::with_capacity(per_page);
    for block in blocks {
        current.push(block);
        if current.len() == per_page {
            pages.push(Page {
                number: pages.len() + 1,
                blocks: std::mem::take(&mut current),
            });
        }
    }
    if !current.is_empty() {
        pages.push(Page {
            number: pages.len() + 1,
            blocks: current,
        });
    }
    pages
}
