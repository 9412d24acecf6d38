//! Models selectable with `--model`, keyed by their wire type name.

use graph_beta_models::{
    AppDataLocation, AppDataLocationCollectionResponse, AppLogCollectionRequest,
    AuthenticationListenerCollectionResponse, AuthenticationListenerKind,
    AuthenticationSourceFilter, CustomerPayment, CustomerPaymentCollectionResponse,
    DeviceManagementTroubleshootingEventCollectionResponse,
    DeviceManagementTroubleshootingEventKind, DeviceShellScript,
    DeviceShellScriptCollectionResponse, EntityKind, EnrollmentTroubleshootingEventCollectionResponse,
    KeyValuePair, MobileAppTroubleshootingEventCollectionResponse,
    OnTokenIssuanceStartHandlerKind, WorkingHours,
};
use graph_serialization::Parsable;
use graph_serialization_json::{CodecError, JsonCodecConfig, create_from_bytes};

/// A payload decoded into one of the catalog's models.
pub struct Decoded {
    /// Rust name of the concrete type the payload resolved to.
    pub type_name: &'static str,
    pub value: Box<dyn Parsable>,
}

pub type DecodeFn = fn(&[u8], &JsonCodecConfig) -> Result<Decoded, CodecError>;

pub struct ModelEntry {
    pub name: &'static str,
    pub decode: DecodeFn,
    /// Known `@odata.type` tags; only polymorphic families have them.
    pub tags: Option<fn() -> Vec<&'static str>>,
}

fn short_type_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}

macro_rules! model {
    ($name:literal => $ty:ty) => {
        ModelEntry {
            name: $name,
            decode: |bytes, config| {
                let value: $ty = create_from_bytes(bytes, <$ty>::create_from_discriminator_value, config)?;
                Ok(Decoded {
                    type_name: short_type_name::<$ty>(),
                    value: Box::new(value),
                })
            },
            tags: None,
        }
    };
}

macro_rules! family {
    ($name:literal => $ty:ty) => {
        ModelEntry {
            name: $name,
            decode: |bytes, config| {
                let value: $ty = create_from_bytes(bytes, <$ty>::create_from_discriminator_value, config)?;
                Ok(Decoded {
                    type_name: value.type_name(),
                    value: Box::new(value),
                })
            },
            tags: Some(|| <$ty>::discriminator_map().tags()),
        }
    };
}

static MODELS: &[ModelEntry] = &[
    family!("entity" => EntityKind),
    family!("authenticationListener" => AuthenticationListenerKind),
    family!("deviceManagementTroubleshootingEvent" => DeviceManagementTroubleshootingEventKind),
    family!("onTokenIssuanceStartHandler" => OnTokenIssuanceStartHandlerKind),
    model!("appDataLocation" => AppDataLocation),
    model!("appLogCollectionRequest" => AppLogCollectionRequest),
    model!("authenticationSourceFilter" => AuthenticationSourceFilter),
    model!("customerPayment" => CustomerPayment),
    model!("deviceShellScript" => DeviceShellScript),
    model!("keyValuePair" => KeyValuePair),
    model!("workingHours" => WorkingHours),
    model!("appDataLocationCollectionResponse" => AppDataLocationCollectionResponse),
    model!("authenticationListenerCollectionResponse" => AuthenticationListenerCollectionResponse),
    model!("customerPaymentCollectionResponse" => CustomerPaymentCollectionResponse),
    model!(
        "deviceManagementTroubleshootingEventCollectionResponse"
            => DeviceManagementTroubleshootingEventCollectionResponse
    ),
    model!("deviceShellScriptCollectionResponse" => DeviceShellScriptCollectionResponse),
    model!(
        "enrollmentTroubleshootingEventCollectionResponse"
            => EnrollmentTroubleshootingEventCollectionResponse
    ),
    model!(
        "mobileAppTroubleshootingEventCollectionResponse"
            => MobileAppTroubleshootingEventCollectionResponse
    ),
];

pub fn models() -> &'static [ModelEntry] {
    MODELS
}

/// Exact, case-sensitive lookup.
pub fn find(name: &str) -> Option<&'static ModelEntry> {
    MODELS.iter().find(|entry| entry.name == name)
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_names_are_unique() {
        let mut seen = HashSet::new();
        for entry in models() {
            assert!(seen.insert(entry.name), "duplicate {}", entry.name);
        }
    }

    #[test]
    fn test_lookup_is_exact() {
        assert!(find("deviceShellScript").is_some());
        assert!(find("DeviceShellScript").is_none());
    }

    #[test]
    fn test_family_decode_reports_resolved_type() {
        let entry = find("authenticationListener").unwrap();
        let decoded = (entry.decode)(
            br##"{"@odata.type":"#microsoft.graph.invokeUserFlowListener"}"##,
            &JsonCodecConfig::default(),
        )
        .unwrap();
        assert_eq!(decoded.type_name, "InvokeUserFlowListener");
        assert!((entry.tags.unwrap())().contains(&"#microsoft.graph.invokeUserFlowListener"));
    }

    #[test]
    fn test_plain_model_has_no_tags() {
        let entry = find("workingHours").unwrap();
        assert!(entry.tags.is_none());
        let decoded = (entry.decode)(br#"{"daysOfWeek":["monday"]}"#, &JsonCodecConfig::default())
            .unwrap();
        assert_eq!(decoded.type_name, "WorkingHours");
    }
}
