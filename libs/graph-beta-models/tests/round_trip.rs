#![allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]

mod common;

use chrono::{NaiveDate, NaiveTime};
use common::{decode, encode, encode_value};
use graph_beta_models::{
    AppLogUploadState, CustomerPayment, DayOfWeek, DeviceEnrollmentType,
    DeviceManagementTroubleshootingEventKind, DeviceShellScript, RunAsAccountType, WorkingHours,
};
use graph_serialization::{GraphEnum, IsoDuration, ParseError, Parsable, ParsableFactory};
use graph_serialization_json::{CodecError, JsonCodecConfig, create_from_bytes};
use serde_json::{Value, json};

/// Decode `body`, encode it again and compare the JSON values.
fn assert_round_trip<T: Parsable>(body: &Value, factory: ParsableFactory<T>) -> T {
    let decoded = decode(body, factory);
    assert_eq!(&encode_value(&decoded), body);
    decoded
}

#[test]
fn test_device_shell_script_all_populated() {
    let body = json!({
        "id": "9b2c6a3e",
        "@odata.type": "#microsoft.graph.deviceShellScript",
        "blockExecutionNotifications": true,
        "createdDateTime": "2023-06-01T08:30:00Z",
        "description": "Rotates local logs",
        "displayName": "log-rotate",
        "executionFrequency": "PT12H",
        "fileName": "rotate.sh",
        "lastModifiedDateTime": "2023-06-02T09:00:00+02:00",
        "retryCount": 3,
        "roleScopeTagIds": ["0", "4"],
        "runAsAccount": "system",
        "runSummary": {
            "id": "summary",
            "@odata.type": "#microsoft.graph.deviceManagementScriptRunSummary",
            "errorDeviceCount": 1,
            "successDeviceCount": 40
        },
        "scriptContent": "IyEvYmluL3NoCmVjaG8gaGk="
    });
    let script = assert_round_trip(&body, DeviceShellScript::create_from_discriminator_value);

    assert_eq!(script.execution_frequency(), Some("PT12H".parse::<IsoDuration>().unwrap()));
    assert_eq!(script.run_as_account(), Some(&RunAsAccountType::System));
    assert_eq!(
        script.script_content().map(|c| c.to_vec()),
        Some(b"#!/bin/sh\necho hi".to_vec())
    );
    assert_eq!(script.run_summary().and_then(|s| s.success_device_count()), Some(40));
    assert_eq!(script.role_scope_tag_ids().map(<[String]>::len), Some(2));
}

#[test]
fn test_device_shell_script_all_unset() {
    let script = DeviceShellScript::new();
    let encoded = encode(&script);
    assert_eq!(encoded, r##"{"@odata.type":"#microsoft.graph.deviceShellScript"}"##);

    let decoded = decode(
        &serde_json::from_str(&encoded).unwrap(),
        DeviceShellScript::create_from_discriminator_value,
    );
    assert_eq!(decoded, script);
}

#[test]
fn test_duration_with_repeated_unit_is_rejected() {
    for bad in ["PT5M3M", "P1D2D", "PT1S1H"] {
        let body = json!({
            "@odata.type": "#microsoft.graph.deviceShellScript",
            "executionFrequency": bad,
        });
        let err = create_from_bytes(
            body.to_string().as_bytes(),
            DeviceShellScript::create_from_discriminator_value,
            &JsonCodecConfig::default(),
        )
        .unwrap_err();

        let CodecError::Parse(err) = err else {
            panic!("expected a parse error for {bad}, got {err:?}");
        };
        assert_eq!(err.path(), "executionFrequency");
        assert!(matches!(
            err.root_cause(),
            ParseError::InvalidValue { kind: "duration", value } if value == bad
        ));
    }
}

#[test]
fn test_customer_payment_primitives() {
    let body = json!({
        "id": "p-1",
        "@odata.type": "#microsoft.graph.customerPayment",
        "amount": 1250.75,
        "appliesToInvoiceId": "3f2504e0-4f89-11d3-9a0c-0305e82c3301",
        "customerNumber": "C0042",
        "lineNumber": 10000,
        "postingDate": "2024-02-29"
    });
    let payment = assert_round_trip(&body, CustomerPayment::create_from_discriminator_value);

    assert_eq!(payment.amount(), Some(1250.75));
    assert_eq!(payment.line_number(), Some(10000));
    assert_eq!(payment.posting_date(), NaiveDate::from_ymd_opt(2024, 2, 29));
    assert_eq!(
        payment.applies_to_invoice_id().map(|id| id.to_string()),
        Some("3f2504e0-4f89-11d3-9a0c-0305e82c3301".to_owned())
    );
    assert_eq!(payment.customer_id(), None);
}

#[test]
fn test_working_hours_enum_collection_and_times() {
    let body = json!({
        "daysOfWeek": ["monday", "tuesday", "friday"],
        "endTime": "17:30:00",
        "startTime": "08:00:00"
    });
    let hours = assert_round_trip(&body, WorkingHours::create_from_discriminator_value);

    assert_eq!(
        hours.days_of_week(),
        Some(&[DayOfWeek::Monday, DayOfWeek::Tuesday, DayOfWeek::Friday][..])
    );
    assert_eq!(hours.start_time(), NaiveTime::from_hms_opt(8, 0, 0));
    assert_eq!(DayOfWeek::VARIANTS.len(), 7);
}

#[test]
fn test_troubleshooting_event_nested_collections() {
    let body = json!({
        "id": "evt-1",
        "@odata.type": "#microsoft.graph.mobileAppTroubleshootingEvent",
        "additionalInformation": [
            {"name": "b", "value": "2"},
            {"name": "a", "value": "1"}
        ],
        "correlationId": "corr",
        "eventDateTime": "2024-03-01T10:00:00Z",
        "troubleshootingErrorDetails": {
            "failure": "install failed",
            "resources": [{"link": "https://learn.example/x", "text": "docs"}]
        },
        "appLogCollectionRequests": [
            {
                "id": "req-1",
                "@odata.type": "#microsoft.graph.appLogCollectionRequest",
                "customLogFolders": ["/var/log"],
                "status": "completed"
            }
        ],
        "history": [{"occurrenceDateTime": "2024-03-01T09:59:00Z"}],
        "userId": "u-1"
    });
    let event = assert_round_trip(
        &body,
        DeviceManagementTroubleshootingEventKind::create_from_discriminator_value,
    );

    let DeviceManagementTroubleshootingEventKind::MobileApp(mobile) = &event else {
        panic!("expected a mobile app event, got {event:?}");
    };
    let names: Vec<_> = mobile
        .additional_information()
        .unwrap()
        .iter()
        .filter_map(|pair| pair.name())
        .collect();
    assert_eq!(names, vec!["b", "a"]);
    let requests = mobile.app_log_collection_requests().unwrap();
    assert_eq!(requests[0].status(), Some(&AppLogUploadState::Completed));
    assert_eq!(mobile.user_id(), Some("u-1"));
}

#[test]
fn test_enrollment_event_renamed_enum_members() {
    let body = json!({
        "@odata.type": "#microsoft.graph.enrollmentTroubleshootingEvent",
        "enrollmentType": "windowsAzureADJoin",
        "failureCategory": "deviceNotSupported",
        "osVersion": "10.0.22631"
    });
    let event = assert_round_trip(
        &body,
        DeviceManagementTroubleshootingEventKind::create_from_discriminator_value,
    );
    let DeviceManagementTroubleshootingEventKind::Enrollment(enrollment) = &event else {
        panic!("expected an enrollment event, got {event:?}");
    };
    assert_eq!(
        enrollment.enrollment_type(),
        Some(&DeviceEnrollmentType::WindowsAzureAdJoin)
    );
    assert_eq!(enrollment.os_version(), Some("10.0.22631"));
}

#[test]
fn test_unknown_members_survive_round_trip() {
    let body = json!({
        "id": "s-1",
        "@odata.type": "#microsoft.graph.deviceShellScript",
        "displayName": "x",
        "futureProperty": {"nested": [1, 2, 3]},
        "futureNull": null
    });
    assert_round_trip(&body, DeviceShellScript::create_from_discriminator_value);
}
