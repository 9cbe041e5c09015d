use super::*;

#[test]
fn test_query_parameters_are_appended_in_order() {
    let uri = resolve(
        "https://h/v2/pet/findByStatus",
        &[
            ParameterValue::query("status", "sold"),
            ParameterValue::query("any", "many"),
        ],
    )
    .unwrap();

    assert_eq!(uri.as_str(), "https://h/v2/pet/findByStatus?status=sold&any=many");
    assert_eq!(uri.url().query(), Some("status=sold&any=many"));
}

#[test]
fn test_query_parameter_also_fills_its_placeholder() {
    let uri = resolve(
        "https://h/v2/pet/{findByStatus}",
        &[ParameterValue::query("findByStatus", "sold")],
    )
    .unwrap();

    assert_eq!(uri.to_string(), "https://h/v2/pet/sold?findByStatus=sold");
}

#[test]
fn test_path_parameters_replace_every_occurrence() {
    let uri = resolve(
        "https://h/{v}/pet/{petId}/{v}",
        &[ParameterValue::path("petId", "7"), ParameterValue::path("v", "v2")],
    )
    .unwrap();

    assert_eq!(uri.as_str(), "https://h/v2/pet/7/v2");
    assert_eq!(uri.url().path(), "/v2/pet/7/v2");
}

#[test]
fn test_empty_query_values_are_skipped() {
    let uri = resolve(
        "https://h/v2/store/order",
        &[
            ParameterValue::query("page", ""),
            ParameterValue::query("size", "10"),
        ],
    )
    .unwrap();
    assert_eq!(uri.as_str(), "https://h/v2/store/order?size=10");

    let uri = resolve("https://h/v2/store/order", &[ParameterValue::query("page", "")]).unwrap();
    assert_eq!(uri.as_str(), "https://h/v2/store/order");
}

#[test]
fn test_path_and_query_with_same_name_are_not_merged() {
    let uri = resolve(
        "https://h/pet/{id}",
        &[ParameterValue::path("id", "5"), ParameterValue::query("id", "5")],
    )
    .unwrap();

    assert_eq!(uri.as_str(), "https://h/pet/5?id=5");
}

#[test]
fn test_unresolved_placeholder_is_left_in_place() {
    let uri = resolve("https://h/pet/{petId}", &[ParameterValue::path("other", "1")]).unwrap();

    assert_eq!(uri.as_str(), "https://h/pet/{petId}");
    assert_eq!(uri.url().path(), "/pet/%7BpetId%7D");
}

#[test]
fn test_placeholder_names_are_case_sensitive() {
    let uri = resolve("https://h/pet/{petId}", &[ParameterValue::path("petid", "1")]).unwrap();

    assert_eq!(uri.as_str(), "https://h/pet/{petId}");
}

#[test]
fn test_other_locations_take_no_part() {
    let uri = resolve(
        "https://h/pet/{api_key}",
        &[
            ParameterValue::new("api_key", "secret", ParameterLocation::Header),
            ParameterValue::new("body", "{}", ParameterLocation::Body),
        ],
    )
    .unwrap();

    assert_eq!(uri.as_str(), "https://h/pet/{api_key}");
    assert_eq!(uri.url().query(), None);
}

#[test]
fn test_invalid_address_is_an_error() {
    let err = resolve("/relative/{id}", &[ParameterValue::path("id", "1")]).unwrap_err();

    match err {
        CatalogError::InvalidUri { uri, .. } => assert_eq!(uri, "/relative/1"),
        other => panic!("Expected InvalidUri, got {:?}", other),
    }
}
