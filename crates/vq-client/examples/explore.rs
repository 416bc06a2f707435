//! Minimal terminal front end for the explorer session.
//!
//! Reads prompts from stdin, prints the derived About Data pills and a
//! one-line chart summary for each result.
//!
//! ```sh
//! cargo run --example explore -- http://127.0.0.1:8000
//! ```

use anyhow::Result;
use std::io::{self, BufRead, Write};
use vq_client::{ExplorerSession, SessionConfig};
use vq_describe::{ChartPort, RenderPort, SectionView};
use vq_model::QueryResult;

struct TerminalPanel;

impl RenderPort for TerminalPanel {
    fn render_section(&mut self, view: &SectionView) {
        println!("[{}]", view.kind.as_str());
        match view.placeholder {
            Some(marker) => println!("  ({marker})"),
            None => {
                for pill in &view.pills {
                    println!("  {} {} — {}", pill.icon.as_str(), pill.label, pill.tooltip_body);
                }
            }
        }
    }
}

impl ChartPort for TerminalPanel {
    fn render_chart(&mut self, result: &QueryResult) {
        println!(
            "chart: {} ({} rows, fields: {})",
            result.chart_type,
            result.dataset.len(),
            result.fields.join(", ")
        );
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let api_url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "http://127.0.0.1:8000".to_string());
    let config = SessionConfig::new()
        .with_schema_url(format!("{api_url}/data_schema.json"))
        .with_api_url(api_url);

    let mut session = ExplorerSession::new(config, TerminalPanel);
    session.run_initial_query().await.ok();

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let Some(line) = stdin.lock().lines().next() else {
            break;
        };
        let prompt = line?;
        if prompt.trim().is_empty() {
            continue;
        }
        if let Err(err) = session.ask(prompt.trim()).await {
            eprintln!("query failed: {err}");
        }
    }

    Ok(())
}
