use crate::parser::AgentBlock;
use crate::pipeline::PipelineReport;

/// Render a block as `"thought": ...,` / `"message": ...,` / `"data": {...}` lines
pub fn render_block(block: &AgentBlock) -> Result<String, serde_json::Error> {
    Ok(format!(
        "\"thought\": {},\n\"message\": {},\n\"data\": {}\n",
        serde_json::to_string(&block.thought)?,
        serde_json::to_string(&block.message)?,
        serde_json::to_string_pretty(&block.to_wire().data)?,
    ))
}

/// Human-readable run transcript: both stages, the finalized block and the package
pub fn render_report(report: &PipelineReport) -> Result<String, serde_json::Error> {
    let mut out = String::new();

    out.push_str(&format!("\n== Planner ({} ms) ==\n", report.planner.elapsed_ms));
    out.push_str(&render_block(&report.planner.block)?);

    out.push_str(&format!("\n== Reviewer ({} ms) ==\n", report.reviewer.elapsed_ms));
    out.push_str(&render_block(&report.reviewer.block)?);

    out.push_str("\n== Finalized output ==\n");
    out.push_str(&render_block(&report.finalized)?);

    out.push_str("\n== Publish Package ==\n");
    out.push_str(&serde_json::to_string_pretty(&report.package)?);
    out.push('\n');

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::{Pipeline, Prompts, Submission};
    use crate::provider::stub::StubClient;
    use serde_json::{json, Value};
    use std::sync::Arc;
    use std::time::Duration;

    #[test]
    fn test_render_block_layout() {
        let block = AgentBlock {
            thought: "says \"hi\"".to_string(),
            message: "m".to_string(),
            tags: vec!["a".to_string()],
            summary: "S.".to_string(),
            issues: vec![json!("x")],
        };

        let text = render_block(&block).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], r#""thought": "says \"hi\"","#);
        assert_eq!(lines[1], r#""message": "m","#);
        assert_eq!(lines[2], r#""data": {"#);

        let data_text = text.split_once("\"data\": ").unwrap().1;
        let data: Value = serde_json::from_str(data_text).unwrap();
        assert_eq!(data, json!({"tags": ["a"], "summary": "S.", "issues": ["x"]}));
    }

    #[tokio::test]
    async fn test_render_report_sections() {
        let client = Arc::new(
            StubClient::new([
                r#"{"thought":"plan","message":"Planner says hi","data":{"tags":["News"],"summary":"Draft summary"},"issues":[]}"#,
                r#"{"thought":"review","message":"Reviewer fixed it","data":{"tags":["  Weather ","Storm"],"summary":"A storm hit the coast"},"issues":["summary lacked a period"]}"#,
            ])
            .with_delay(Duration::from_millis(5)),
        );
        let report = Pipeline::new(client, Prompts::default())
            .run(Submission::new(
                "Coastal Storm Update",
                "Heavy rain and wind reached the coast overnight.",
            ))
            .await
            .unwrap();

        let text = render_report(&report).unwrap();

        let planner_header = format!("== Planner ({} ms) ==", report.planner.elapsed_ms);
        let reviewer_header = format!("== Reviewer ({} ms) ==", report.reviewer.elapsed_ms);
        let positions: Vec<usize> = [
            planner_header.as_str(),
            reviewer_header.as_str(),
            "== Finalized output ==",
            "== Publish Package ==",
        ]
        .iter()
        .map(|header| text.find(header).unwrap_or_else(|| panic!("missing {header}")))
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{text}");
        assert!(report.planner.elapsed_ms >= 5);
        assert!(report.reviewer.elapsed_ms >= 5);

        let finalized = &text[positions[2]..positions[3]];
        assert!(finalized.contains(r#""thought": "Consolidated schema-checked output.","#));
        let data_text = finalized.split_once("\"data\": ").unwrap().1;
        let data: Value = serde_json::from_str(data_text.trim()).unwrap();
        assert_eq!(
            data,
            json!({
                "tags": ["weather", "storm", "coastal"],
                "summary": "A storm hit the coast.",
                "issues": ["summary lacked a period"]
            })
        );

        let package_text = text[positions[3]..].split_once('\n').unwrap().1;
        let package: Value = serde_json::from_str(package_text.trim()).unwrap();
        assert_eq!(package["title"], "Coastal Storm Update");
        assert_eq!(package["tags"], data["tags"]);
        assert_eq!(package["issues"], json!(["summary lacked a period"]));
    }
}
