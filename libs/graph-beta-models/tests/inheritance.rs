#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{decode, encode};
use graph_beta_models::{
    AuthenticationListener, AuthenticationListenerKind, BaseCollectionPaginationCountResponse,
    DeviceManagementTroubleshootingEvent, DeviceShellScript, EnrollmentTroubleshootingEvent, Entity,
    InvokeUserFlowListener, WorkingHours,
};
use graph_serialization::Model;
use serde_json::json;

fn is_superset<T: Model, P: Model>() -> bool {
    let child = T::field_deserializers();
    P::field_deserializers()
        .names()
        .into_iter()
        .all(|name| child.contains(name))
}

#[test]
fn test_child_registries_contain_every_ancestor_entry() {
    assert!(is_superset::<AuthenticationListener, Entity>());
    assert!(is_superset::<InvokeUserFlowListener, AuthenticationListener>());
    assert!(is_superset::<InvokeUserFlowListener, Entity>());
    assert!(is_superset::<EnrollmentTroubleshootingEvent, DeviceManagementTroubleshootingEvent>());
    assert!(is_superset::<DeviceShellScript, Entity>());
}

#[test]
fn test_child_entries_stay_out_of_parent_registry() {
    let listener = AuthenticationListener::field_deserializers();
    assert_eq!(listener.names(), vec!["@odata.type", "id", "priority", "sourceFilter"]);
    assert!(!listener.contains("userFlow"));
    assert!(InvokeUserFlowListener::field_deserializers().contains("userFlow"));
    assert_eq!(Entity::field_deserializers().names(), vec!["@odata.type", "id"]);
}

#[test]
fn test_pagination_keys_use_annotation_names() {
    assert_eq!(
        BaseCollectionPaginationCountResponse::field_deserializers().names(),
        vec!["@odata.count", "@odata.nextLink"]
    );
}

#[test]
fn test_new_initialises_parent_and_tag_only() {
    let listener = InvokeUserFlowListener::new();
    assert_eq!(listener.odata_type(), Some("#microsoft.graph.invokeUserFlowListener"));
    assert_eq!(listener.id(), None);
    assert_eq!(listener.priority(), None);
    assert!(listener.user_flow().is_none());

    assert_eq!(WorkingHours::new().odata_type(), None);
    assert_eq!(<WorkingHours as Model>::ODATA_TYPE, None);
}

#[test]
fn test_cleared_tag_is_restored_by_concrete_factory() {
    let mut listener = InvokeUserFlowListener::new();
    listener.set_odata_type(None);
    assert_eq!(encode(&listener), "{}");

    let decoded = decode(&json!({}), InvokeUserFlowListener::create_from_discriminator_value);
    assert_eq!(decoded.odata_type(), Some("#microsoft.graph.invokeUserFlowListener"));
    assert_ne!(decoded, listener);

    let AuthenticationListenerKind::Listener(base) =
        decode(&json!({}), AuthenticationListenerKind::create_from_discriminator_value)
    else {
        panic!("untagged payload resolves to the base listener");
    };
    assert_eq!(base.odata_type(), Some("#microsoft.graph.authenticationListener"));
}

#[test]
fn test_inherited_setters_reach_embedded_parent() {
    let mut listener = InvokeUserFlowListener::new();
    listener.set_id(Some("l-9".to_owned()));
    listener.set_priority(Some(2));

    assert_eq!(listener.id(), Some("l-9"));
    assert_eq!(
        encode(&listener),
        r##"{"id":"l-9","@odata.type":"#microsoft.graph.invokeUserFlowListener","priority":2}"##
    );
}
