#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{decode, encode};
use graph_beta_models::{AppDataLocation, AppDataLocationCollectionResponse};
use graph_serialization::AdditionalDataHolder;
use serde_json::json;

#[test]
fn test_decode_and_reencode_omits_unset_fields() {
    let location: AppDataLocation = decode(
        &json!({"appId": "x", "isDefault": true}),
        AppDataLocation::create_from_discriminator_value,
    );

    assert_eq!(location.app_id(), Some("x"));
    assert_eq!(location.is_default(), Some(true));
    assert_eq!(location.domain(), None);
    assert_eq!(location.location(), None);
    assert_eq!(location.odata_type(), None);
    assert!(location.additional_data().is_empty());

    assert_eq!(encode(&location), r#"{"appId":"x","isDefault":true}"#);
}

#[test]
fn test_null_members_stay_unset() {
    let location: AppDataLocation = decode(
        &json!({"appId": null, "domain": "contoso.com", "isDefault": null}),
        AppDataLocation::create_from_discriminator_value,
    );
    assert_eq!(location.app_id(), None);
    assert_eq!(location.is_default(), None);
    assert_eq!(location.domain(), Some("contoso.com"));
    assert_eq!(encode(&location), r#"{"domain":"contoso.com"}"#);
}

#[test]
fn test_empty_model_encodes_to_empty_object() {
    assert_eq!(encode(&AppDataLocation::new()), "{}");
}

#[test]
fn test_collection_page_keeps_order_and_pagination() {
    let body = json!({
        "@odata.count": 3,
        "@odata.nextLink": "https://graph.example/beta/appDataLocations?$skiptoken=2",
        "value": [
            {"appId": "c"},
            {"appId": "a"},
            {"appId": "b", "isDefault": false}
        ]
    });
    let page: AppDataLocationCollectionResponse =
        decode(&body, AppDataLocationCollectionResponse::create_from_discriminator_value);

    assert_eq!(page.odata_count(), Some(3));
    assert_eq!(
        page.odata_next_link(),
        Some("https://graph.example/beta/appDataLocations?$skiptoken=2")
    );
    let ids: Vec<_> = page
        .value()
        .unwrap()
        .iter()
        .filter_map(AppDataLocation::app_id)
        .collect();
    assert_eq!(ids, vec!["c", "a", "b"]);

    assert_eq!(
        encode(&page),
        concat!(
            r#"{"@odata.count":3,"#,
            r#""@odata.nextLink":"https://graph.example/beta/appDataLocations?$skiptoken=2","#,
            r#""value":[{"appId":"c"},{"appId":"a"},{"appId":"b","isDefault":false}]}"#
        )
    );
}
