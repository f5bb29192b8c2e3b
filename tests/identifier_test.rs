//! Identifier resolution tests

use toolgate::utils::errors::RouterError;
use toolgate::ToolId;

#[test]
fn test_resolve_well_formed_identifier() {
    let id = ToolId::resolve("srv__tool").unwrap();
    assert_eq!(id.provider, "srv");
    assert_eq!(id.capability, "tool");
}

#[test]
fn test_resolve_keeps_inner_single_underscores() {
    let id = ToolId::resolve("todo_api__fetch_all_todos").unwrap();
    assert_eq!(id.provider, "todo_api");
    assert_eq!(id.capability, "fetch_all_todos");
}

#[test]
fn test_resolve_rejects_unseparated_name() {
    let err = ToolId::resolve("nodash").unwrap_err();
    assert!(matches!(err, RouterError::MalformedIdentifier(_)));
    assert!(err.to_string().contains("nodash"));
}

#[test]
fn test_resolve_rejects_three_components() {
    assert!(matches!(
        ToolId::resolve("a__b__c"),
        Err(RouterError::MalformedIdentifier(_))
    ));
}

#[test]
fn test_resolve_rejects_empty_sides() {
    for identifier in ["__tool", "srv__", "__", ""] {
        assert!(
            ToolId::resolve(identifier).is_err(),
            "expected '{}' to be rejected",
            identifier
        );
    }
}

#[test]
fn test_resolve_rejects_quadruple_underscore() {
    // "a____b" splits into three components on "__"
    assert!(ToolId::resolve("a____b").is_err());
}
