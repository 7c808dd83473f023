//! Rendering of migration plans for display

use crate::config::{OutputConfig, OutputFormat};
use crate::error::Result;
use crate::MigrationPlan;

/// Render `plan` in the configured format
pub fn render_plan(plan: &MigrationPlan, config: &OutputConfig) -> Result<String> {
    let rendered = match config.format {
        OutputFormat::Text => render_text(plan, config),
        OutputFormat::Json => {
            let mut json = if config.include_reverse {
                serde_json::to_string_pretty(plan)?
            } else {
                serde_json::to_string_pretty(&plan.without_reverse())?
            };
            json.push('\n');
            json
        }
        OutputFormat::Yaml => {
            if config.include_reverse {
                serde_yaml::to_string(plan)?
            } else {
                serde_yaml::to_string(&plan.without_reverse())?
            }
        }
    };
    Ok(rendered)
}

fn render_text(plan: &MigrationPlan, config: &OutputConfig) -> String {
    let mut out = String::new();

    out.push_str(&config.forward_header);
    out.push('\n');
    for statement in &plan.forward {
        out.push_str(statement);
        out.push('\n');
    }

    if config.include_reverse {
        out.push('\n');
        out.push_str(&config.reverse_header);
        out.push('\n');
        for statement in plan.reverse_statements() {
            out.push_str(statement);
            out.push('\n');
        }
    }

    out
}
