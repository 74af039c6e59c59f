//! Output formatting for analysis results.
//!
//! Supports two output formats:
//! - Pretty: colored terminal output for human readability
//! - JSON: the service envelope re-emitted for programmatic consumption
//!
//! Rendering is a pure projection of the current request state; the same
//! state always produces the same text.

use colored::*;
use std::fmt::Write as _;

use crate::client::AnalyzeResponse;
use crate::model::{AnalysisResult, ConditionalRef, MethodInfo, NamedRef};
use crate::session::RequestState;

/// Shown while a request is in flight.
pub const LOADING_LINE: &str = "Analyzing...";

/// Shown when the service found neither classes nor top-level methods.
pub const EMPTY_RESULT_NOTICE: &str = "No classes or methods found.";

/// Literal used for an empty sub-list.
const NONE_LITERAL: &str = "None";

/// Render the current request state as display text.
///
/// Idle renders nothing; Loading a progress line; Failed the error
/// message; Succeeded the full result tree (or the empty-result notice).
pub fn render(state: &RequestState) -> String {
    match state {
        RequestState::Idle => String::new(),
        RequestState::Loading => format!("{}\n", LOADING_LINE),
        RequestState::Failed(message) => format!("{} {}\n", "Error:".red().bold(), message),
        RequestState::Succeeded(result) => render_result(result),
    }
}

fn render_result(result: &AnalysisResult) -> String {
    if result.is_empty() {
        return format!("{}\n", EMPTY_RESULT_NOTICE.dimmed());
    }

    let mut out = String::new();
    let _ = writeln!(out, "{}", "Analysis Result".cyan().bold());
    let _ = writeln!(out);

    for cls in &result.classes {
        let _ = writeln!(out, "  Class: {}", cls.class_name.green().bold());
        if let Some(superclass) = &cls.superclass {
            let _ = writeln!(out, "    {}{}", "Inherits from: ".dimmed(), superclass);
        }

        if cls.methods.is_empty() {
            let _ = writeln!(out, "    Methods: {}", NONE_LITERAL.dimmed());
        } else {
            let _ = writeln!(out, "    Methods:");
            for method in &cls.methods {
                write_method(&mut out, method, 6);
            }
        }
        let _ = writeln!(out);
    }

    if !result.top_level.methods.is_empty() {
        let _ = writeln!(out, "  {}", "Top-level methods:".cyan().bold());
        for method in &result.top_level.methods {
            write_method(&mut out, method, 4);
        }
        let _ = writeln!(out);
    }

    out
}

/// Write one method block: signature header plus the four sub-lists.
fn write_method(out: &mut String, method: &MethodInfo, indent: usize) {
    let pad = " ".repeat(indent);
    let signature = format!("{}({})", method.name, method.arguments.join(", "));
    let _ = writeln!(
        out,
        "{}{} {}",
        pad,
        signature.yellow(),
        format!("(line {})", method.line_number).dimmed()
    );

    let detail = " ".repeat(indent + 2);
    let _ = writeln!(
        out,
        "{}Instance variables: {}",
        detail,
        join_refs(&method.instance_variables)
    );
    let _ = writeln!(
        out,
        "{}Local variables: {}",
        detail,
        join_refs(&method.local_variables)
    );
    let _ = writeln!(
        out,
        "{}Method calls: {}",
        detail,
        join_refs(&method.method_calls)
    );
    let _ = writeln!(
        out,
        "{}Conditionals: {}",
        detail,
        join_conditionals(&method.conditionals)
    );
}

/// Join named references as "name (line N)", comma-separated, in original
/// order; the literal "None" when empty.
pub fn join_refs(refs: &[NamedRef]) -> String {
    if refs.is_empty() {
        return NONE_LITERAL.to_string();
    }
    refs.iter()
        .map(|r| format!("{} (line {})", r.name, r.line_number))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Join conditionals as "condition (line N)", comma-separated, in original
/// order; the literal "None" when empty.
pub fn join_conditionals(conds: &[ConditionalRef]) -> String {
    if conds.is_empty() {
        return NONE_LITERAL.to_string();
    }
    conds
        .iter()
        .map(|c| format!("{} (line {})", c.condition, c.line_number))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Render the outcome in JSON format: the service envelope re-emitted.
pub fn render_json(state: &RequestState) -> anyhow::Result<String> {
    let envelope = match state {
        RequestState::Succeeded(result) => AnalyzeResponse {
            success: true,
            result: Some(result.clone()),
            error: None,
        },
        RequestState::Failed(message) => AnalyzeResponse {
            success: false,
            result: None,
            error: Some(message.clone()),
        },
        RequestState::Idle | RequestState::Loading => {
            anyhow::bail!("no completed analysis to render")
        }
    };
    Ok(serde_json::to_string_pretty(&envelope)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_color() {
        colored::control::set_override(false);
    }

    fn result_from(json: &str) -> RequestState {
        RequestState::Succeeded(serde_json::from_str(json).unwrap())
    }

    #[test]
    fn test_idle_renders_nothing() {
        no_color();
        assert_eq!(render(&RequestState::Idle), "");
    }

    #[test]
    fn test_loading_renders_indicator() {
        no_color();
        assert_eq!(render(&RequestState::Loading), "Analyzing...\n");
    }

    #[test]
    fn test_failed_renders_message() {
        no_color();
        let out = render(&RequestState::Failed("boom".to_string()));
        assert_eq!(out, "Error: boom\n");
    }

    #[test]
    fn test_empty_result_renders_notice() {
        no_color();
        let state = result_from(r#"{"classes": [], "top_level": {"methods": []}}"#);
        assert_eq!(render(&state), "No classes or methods found.\n");
    }

    #[test]
    fn test_single_class_no_methods() {
        no_color();
        let state = result_from(
            r#"{"classes": [{"class_name": "Foo", "methods": []}], "top_level": {"methods": []}}"#,
        );
        let out = render(&state);
        assert!(out.contains("Class: Foo"));
        assert!(out.contains("Methods: None"));
        assert!(!out.contains("Inherits from"));
        assert!(!out.contains("Top-level methods"));
    }

    #[test]
    fn test_superclass_rendered_only_when_present() {
        no_color();
        let state = result_from(
            r#"{"classes": [{"class_name": "Dog", "superclass": "Animal", "methods": []}],
                "top_level": {"methods": []}}"#,
        );
        assert!(render(&state).contains("Inherits from: Animal"));
    }

    #[test]
    fn test_block_counts_match_input_order() {
        no_color();
        let state = result_from(
            r#"{"classes": [
                  {"class_name": "Alpha", "methods": []},
                  {"class_name": "Beta", "methods": []}
                ],
                "top_level": {"methods": [
                  {"name": "helper_one", "line_number": 1},
                  {"name": "helper_two", "line_number": 9},
                  {"name": "helper_three", "line_number": 20}
                ]}}"#,
        );
        let out = render(&state);

        assert_eq!(out.matches("Class: ").count(), 2);
        assert_eq!(out.matches("Instance variables:").count(), 3);

        let alpha = out.find("Alpha").unwrap();
        let beta = out.find("Beta").unwrap();
        assert!(alpha < beta);

        let one = out.find("helper_one").unwrap();
        let two = out.find("helper_two").unwrap();
        let three = out.find("helper_three").unwrap();
        assert!(one < two && two < three);
    }

    #[test]
    fn test_method_sub_lists_join_format() {
        no_color();
        let state = result_from(
            r#"{"classes": [{"class_name": "Order", "methods": [{
                  "name": "total",
                  "arguments": ["discount", "tax"],
                  "line_number": 12,
                  "instance_variables": [
                    {"name": "@items", "line_number": 13},
                    {"name": "@rate", "line_number": 14}
                  ],
                  "local_variables": [],
                  "method_calls": [{"name": "sum", "line_number": 13}],
                  "conditionals": [{"condition": "discount > 0", "line_number": 15}]
                }]}],
                "top_level": {"methods": []}}"#,
        );
        let out = render(&state);

        assert!(out.contains("total(discount, tax) (line 12)"));
        assert!(out.contains("Instance variables: @items (line 13), @rate (line 14)"));
        assert!(out.contains("Local variables: None"));
        assert!(out.contains("Method calls: sum (line 13)"));
        assert!(out.contains("Conditionals: discount > 0 (line 15)"));
    }

    #[test]
    fn test_join_refs_empty_is_none_literal() {
        assert_eq!(join_refs(&[]), "None");
        assert_eq!(join_conditionals(&[]), "None");
    }

    #[test]
    fn test_render_json_success_envelope() {
        let state = result_from(r#"{"classes": [], "top_level": {"methods": []}}"#);
        let json = render_json(&state).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["success"], true);
        assert!(value["result"].is_object());
        assert!(value.get("error").is_none());
    }

    #[test]
    fn test_render_json_failure_envelope() {
        let state = RequestState::Failed("nope".to_string());
        let json = render_json(&state).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["success"], false);
        assert_eq!(value["error"], "nope");
    }

    #[test]
    fn test_render_json_requires_completed_state() {
        assert!(render_json(&RequestState::Idle).is_err());
        assert!(render_json(&RequestState::Loading).is_err());
    }
}
