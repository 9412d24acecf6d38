//! Intune troubleshooting events.

use chrono::{DateTime, FixedOffset};
use graph_serialization::AdditionalData;
use graph_serialization_macros::{GraphEnum, GraphModel, GraphPolymorphic};

use crate::collection::collection_response;
use crate::entity::Entity;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, GraphEnum)]
pub enum DeviceEnrollmentType {
    Unknown,
    UserEnrollment,
    DeviceEnrollmentManager,
    AppleBulkWithUser,
    AppleBulkWithoutUser,
    #[graph(rename = "windowsAzureADJoin")]
    WindowsAzureAdJoin,
    WindowsBulkUserless,
    WindowsAutoEnrollment,
    WindowsBulkAzureDomainJoin,
    WindowsCoManagement,
    #[graph(rename = "windowsAzureADJoinUsingDeviceAuth")]
    WindowsAzureAdJoinUsingDeviceAuth,
    AppleUserEnrollment,
    AppleUserEnrollmentWithServiceAccount,
    AzureAdJoinUsingAzureVmExtension,
    AndroidEnterpriseDedicatedDevice,
    AndroidEnterpriseFullyManaged,
    AndroidEnterpriseCorporateWorkProfile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, GraphEnum)]
pub enum DeviceEnrollmentFailureReason {
    Unknown,
    Authentication,
    Authorization,
    AccountValidation,
    UserValidation,
    DeviceNotSupported,
    InMaintenance,
    BadRequest,
    FeatureNotSupported,
    EnrollmentRestrictionsEnforced,
    ClientDisconnected,
    UserAbandonment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, GraphEnum)]
pub enum AppLogUploadState {
    Pending,
    Completed,
    Failed,
    UnknownFutureValue,
}

#[derive(Debug, Clone, PartialEq, GraphModel)]
pub struct KeyValuePair {
    #[graph(additional_data)]
    additional_data: AdditionalData,
    name: Option<String>,
    odata_type: Option<String>,
    value: Option<String>,
}

/// Link to a document explaining a troubleshooting failure.
#[derive(Debug, Clone, PartialEq, GraphModel)]
pub struct DeviceManagementTroubleshootingErrorResource {
    #[graph(additional_data)]
    additional_data: AdditionalData,
    link: Option<String>,
    odata_type: Option<String>,
    text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, GraphModel)]
pub struct DeviceManagementTroubleshootingErrorDetails {
    #[graph(additional_data)]
    additional_data: AdditionalData,
    context: Option<String>,
    failure: Option<String>,
    failure_details: Option<String>,
    odata_type: Option<String>,
    remediation: Option<String>,
    resources: Option<Vec<DeviceManagementTroubleshootingErrorResource>>,
}

#[derive(Debug, Clone, PartialEq, GraphModel)]
#[graph(odata_type = "#microsoft.graph.deviceManagementTroubleshootingEvent")]
pub struct DeviceManagementTroubleshootingEvent {
    #[graph(parent)]
    entity: Entity,
    additional_information: Option<Vec<KeyValuePair>>,
    correlation_id: Option<String>,
    event_date_time: Option<DateTime<FixedOffset>>,
    event_name: Option<String>,
    troubleshooting_error_details: Option<DeviceManagementTroubleshootingErrorDetails>,
}

#[derive(Debug, Clone, PartialEq, GraphModel)]
#[graph(odata_type = "#microsoft.graph.appleVppTokenTroubleshootingEvent")]
pub struct AppleVppTokenTroubleshootingEvent {
    #[graph(parent)]
    event: DeviceManagementTroubleshootingEvent,
    token_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, GraphModel)]
#[graph(odata_type = "#microsoft.graph.enrollmentTroubleshootingEvent")]
pub struct EnrollmentTroubleshootingEvent {
    #[graph(parent)]
    event: DeviceManagementTroubleshootingEvent,
    device_id: Option<String>,
    enrollment_type: Option<DeviceEnrollmentType>,
    failure_category: Option<DeviceEnrollmentFailureReason>,
    failure_reason: Option<String>,
    managed_device_identifier: Option<String>,
    operating_system: Option<String>,
    os_version: Option<String>,
    user_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, GraphModel)]
#[graph(odata_type = "#microsoft.graph.appLogCollectionRequest")]
pub struct AppLogCollectionRequest {
    #[graph(parent)]
    entity: Entity,
    completed_date_time: Option<DateTime<FixedOffset>>,
    custom_log_folders: Option<Vec<String>>,
    error_message: Option<String>,
    status: Option<AppLogUploadState>,
}

#[derive(Debug, Clone, PartialEq, GraphModel)]
pub struct MobileAppTroubleshootingHistoryItem {
    #[graph(additional_data)]
    additional_data: AdditionalData,
    occurrence_date_time: Option<DateTime<FixedOffset>>,
    odata_type: Option<String>,
    troubleshooting_error_details: Option<DeviceManagementTroubleshootingErrorDetails>,
}

#[derive(Debug, Clone, PartialEq, GraphModel)]
#[graph(odata_type = "#microsoft.graph.mobileAppTroubleshootingEvent")]
pub struct MobileAppTroubleshootingEvent {
    #[graph(parent)]
    event: DeviceManagementTroubleshootingEvent,
    app_log_collection_requests: Option<Vec<AppLogCollectionRequest>>,
    application_id: Option<String>,
    history: Option<Vec<MobileAppTroubleshootingHistoryItem>>,
    managed_device_identifier: Option<String>,
    user_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, GraphPolymorphic)]
pub enum DeviceManagementTroubleshootingEventKind {
    #[graph(base)]
    Event(DeviceManagementTroubleshootingEvent),
    AppleVppToken(AppleVppTokenTroubleshootingEvent),
    Enrollment(EnrollmentTroubleshootingEvent),
    MobileApp(MobileAppTroubleshootingEvent),
}

collection_response!(
    DeviceManagementTroubleshootingEventCollectionResponse => DeviceManagementTroubleshootingEventKind
);
collection_response!(
    EnrollmentTroubleshootingEventCollectionResponse => EnrollmentTroubleshootingEvent
);
collection_response!(
    MobileAppTroubleshootingEventCollectionResponse => MobileAppTroubleshootingEvent
);
collection_response!(AppLogCollectionRequestCollectionResponse => AppLogCollectionRequest);
