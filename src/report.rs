use cool_config::Config;
use cool_semantic::Diagnostics;

pub fn render_text(diagnostics: &Diagnostics, config: &Config) -> String {
    let mut out = String::new();

    for error in diagnostics.errors() {
        out.push_str(error);
        out.push('\n');
    }

    if config.show_warnings {
        for warning in diagnostics.warnings() {
            out.push_str(warning);
            out.push('\n');
        }
    }

    out
}

pub fn render_json(diagnostics: &Diagnostics) -> crate::error::Result<String> {
    Ok(serde_json::to_string_pretty(diagnostics)?)
}

pub fn exit_code(diagnostics: &Diagnostics, config: &Config) -> u8 {
    if diagnostics.has_errors() || (config.deny_warnings && !diagnostics.warnings().is_empty()) {
        1
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use cool_core::Line;
    use cool_semantic::SemanticAnalyzer;
    use cool_syntax::Program;

    use super::*;

    fn sample() -> Diagnostics {
        let mut diagnostics = Diagnostics::default();
        diagnostics.error(Line::new(4), "If condition must be Bool");
        diagnostics.warn(Line::new(7), "Unused local variable: 'x'");
        diagnostics
    }

    #[test]
    fn test_text_report_lists_errors_then_warnings() {
        let rendered = render_text(&sample(), &Config::default());

        assert_eq!(
            rendered,
            "Error (Line 4): If condition must be Bool\nWarning (Line 7): Unused local variable: 'x'\n"
        );
    }

    #[test]
    fn test_hidden_warnings_are_not_rendered() {
        let config = Config { show_warnings: false, deny_warnings: false };
        let rendered = render_text(&sample(), &config);

        assert_eq!(rendered, "Error (Line 4): If condition must be Bool\n");
    }

    #[test]
    fn test_clean_report_renders_nothing() {
        let rendered = render_text(&Diagnostics::default(), &Config::default());

        assert!(rendered.is_empty());
    }

    #[test]
    fn test_exit_code_is_zero_for_a_clean_run() {
        let mut diagnostics = Diagnostics::default();
        diagnostics.warn(Line::new(2), "Unused parameter: 'p'");

        assert_eq!(exit_code(&Diagnostics::default(), &Config::default()), 0);
        assert_eq!(exit_code(&diagnostics, &Config::default()), 0);
    }

    #[test]
    fn test_exit_code_is_one_when_errors_exist() {
        assert_eq!(exit_code(&sample(), &Config::default()), 1);
    }

    #[test]
    fn test_deny_warnings_fails_the_run() {
        let mut diagnostics = Diagnostics::default();
        diagnostics.warn(Line::new(2), "Unused parameter: 'p'");
        let config = Config { show_warnings: true, deny_warnings: true };

        assert_eq!(exit_code(&diagnostics, &config), 1);
        assert_eq!(exit_code(&Diagnostics::default(), &config), 0);
    }

    #[test]
    fn test_json_report_shape() {
        let mut diagnostics = Diagnostics::default();
        diagnostics.error(Line::new(1), "If condition must be Bool");

        let rendered = render_json(&diagnostics).unwrap();
        assert_eq!(
            rendered,
            "{\n  \"errors\": [\n    \"Error (Line 1): If condition must be Bool\"\n  ],\n  \"warnings\": []\n}"
        );
    }

    // the same handoff the binary does: parser JSON in, report text out
    #[test]
    fn test_tree_file_end_to_end() {
        let tree = r#"{
            "classes": [
                {
                    "name": "Main",
                    "inherits": null,
                    "features": [
                        {
                            "Method": {
                                "name": "main",
                                "formals": [],
                                "return_type": "Object",
                                "body": {
                                    "Let": {
                                        "bindings": [
                                            {
                                                "name": "x",
                                                "declared_type": "Int",
                                                "init": null,
                                                "line": 3
                                            }
                                        ],
                                        "body": {
                                            "Assign": {
                                                "name": "x",
                                                "value": {
                                                    "String": { "value": "oops", "line": 4 }
                                                },
                                                "line": 4
                                            }
                                        },
                                        "line": 3
                                    }
                                },
                                "line": 2
                            }
                        }
                    ],
                    "line": 1
                }
            ]
        }"#;

        let program: Program = serde_json::from_str(tree).unwrap();
        let mut analyzer = SemanticAnalyzer::new();
        let diagnostics = analyzer.analyze(&program);

        let rendered = render_text(&diagnostics, &Config::default());
        assert_eq!(
            rendered,
            "Error (Line 4): Type mismatch. Cannot assign String to Int\nWarning (Line 3): Unused local variable: 'x'\n"
        );
        assert_eq!(exit_code(&diagnostics, &Config::default()), 1);
    }
}
