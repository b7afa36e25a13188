//! End-to-end parses through `parse_document`.

use tokenport_core::{
    parse_csv_with_diagnostics, parse_document, CanonicalModel, DocumentFormat, ParseErrorKind,
    RawDocument, Rgba, TokenValue,
};

fn parse(name: &str, text: &str) -> CanonicalModel {
    let doc = RawDocument::from_file(name, text).expect("supported extension");
    parse_document(&doc).expect("document parses")
}

#[test]
fn csv_spreadsheet_export() {
    let model = parse(
        "tokens.csv",
        "collection,variable,value\nColors,primary-blue,#0066FF\nSpacing,small,8px\n",
    );

    let expected: CanonicalModel = serde_json::from_value(serde_json::json!({
        "Colors": {"primary-blue": {"r": 0.0, "g": 102.0 / 255.0, "b": 1.0, "a": 1.0}},
        "Spacing": {"small": "8px"}
    }))
    .unwrap();
    assert_eq!(model, expected);
}

#[test]
fn csv_with_broken_rows_keeps_the_rest() {
    let text = "\
collection,variable,value
Colors,primary,#0066FF
Colors,secondary
,orphan,#FFFFFF
Radius,sm,4
Radius,md,
Radius,lg,12px
";
    let (model, skipped) = parse_csv_with_diagnostics(text);
    assert_eq!(model.token_count(), 3);
    assert_eq!(model.get("Radius", "sm"), Some(&TokenValue::Number(4.0)));
    assert_eq!(model.get("Radius", "lg"), Some(&TokenValue::String("12px".into())));
    let lines: Vec<_> = skipped.iter().filter_map(|e| e.line).collect();
    assert_eq!(lines, vec![3, 4, 6]);
    assert!(skipped.iter().all(|e| e.kind == ParseErrorKind::MissingField));
}

#[test]
fn simple_json_with_default_collection() {
    let model = parse("tokens.json", r##"{"Colors": {"red": "#FF0000"}, "flag": true}"##);
    assert_eq!(model.collection_names().collect::<Vec<_>>(), vec!["Colors", "Default"]);
    assert_eq!(model.get("Colors", "red"), Some(&TokenValue::String("#FF0000".into())));
    assert_eq!(model.get("Default", "flag"), Some(&TokenValue::Boolean(true)));
}

#[test]
fn dtcg_theme_file() {
    let text = r##"{
        "$description": "Acme theme",
        "color": {
            "$type": "color",
            "base": {
                "white": {"$value": "#FFFFFF"},
                "overlay": {"$value": "#00000080"}
            },
            "accent": {"$value": "blue"}
        },
        "size": {
            "radius": {"$value": "4", "$type": "number"},
            "gutter": {"$value": "1.5em"},
            "visible": {"$value": "false"}
        }
    }"##;
    let model = parse("theme.tokens.json", text);

    assert_eq!(model.len(), 2);
    assert_eq!(model.token_count(), 6);
    assert_eq!(
        model.get("color", "base/white"),
        Some(&TokenValue::Color(Rgba::new(1.0, 1.0, 1.0, 1.0)))
    );
    assert_eq!(
        model.get("color", "base/overlay"),
        Some(&TokenValue::Color(Rgba::new(0.0, 0.0, 0.0, 128.0 / 255.0)))
    );
    assert_eq!(model.get("size", "radius"), Some(&TokenValue::Number(4.0)));
    assert_eq!(model.get("size", "gutter"), Some(&TokenValue::String("1.5em".into())));
    assert_eq!(model.get("size", "visible"), Some(&TokenValue::Boolean(false)));
}

#[test]
fn malformed_json_never_yields_a_model() {
    let doc = RawDocument::new(DocumentFormat::Json, "{\"Colors\": {\"red\": \"#FF0000\",}}");
    let err = parse_document(&doc).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::InvalidSyntax);
    assert!(err.message.contains("trailing comma"), "{}", err.message);
}

#[test]
fn parsing_is_deterministic() {
    let text = r#"{"B": {"z": {"y": 1}, "a": 2}, "A": {"k": "v"}, "top": 3}"#;
    let first = parse("t.json", text);
    let second = parse("t.json", text);
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
    assert_eq!(first.collection_names().collect::<Vec<_>>(), vec!["B", "A", "Default"]);
}
