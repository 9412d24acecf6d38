#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Graph beta data-transfer objects.
//!
//! Each type is a plain struct of `Option` properties whose codec is derived
//! with `graph-serialization-macros`. Subtypes embed their parent and deref to
//! it; families that share an abstract base are decoded through the matching
//! `*Kind` enum, which picks the variant from the payload's `@odata.type`.
//!
//! ```ignore
//! use graph_beta_models::AuthenticationListenerKind;
//! use graph_serialization_json::{JsonCodecConfig, create_from_bytes};
//!
//! let listener = create_from_bytes(
//!     br##"{"@odata.type":"#microsoft.graph.invokeUserFlowListener","priority":1}"##,
//!     AuthenticationListenerKind::create_from_discriminator_value,
//!     &JsonCodecConfig::default(),
//! )?;
//! assert_eq!(listener.base().priority(), Some(1));
//! ```

pub mod app_data_location;
pub mod authentication;
pub mod collection;
pub mod customer_payment;
pub mod device_shell_script;
pub mod entity;
pub mod troubleshooting;
pub mod working_hours;

pub use app_data_location::{AppDataLocation, AppDataLocationCollectionResponse};
pub use authentication::{
    AuthenticationListener, AuthenticationListenerCollectionResponse, AuthenticationListenerKind,
    AuthenticationSourceFilter, B2xIdentityUserFlow, CustomExtensionConfiguration,
    IdentityUserFlow, InvokeUserFlowListener, OnInteractiveAuthFlowStartHandler,
    OnInteractiveAuthFlowStartListener, OnTokenIssuanceStartCustomExtensionHandler,
    OnTokenIssuanceStartHandler, OnTokenIssuanceStartHandlerKind, OnTokenIssuanceStartListener,
    UserFlowType,
};
pub use collection::BaseCollectionPaginationCountResponse;
pub use customer_payment::{CustomerPayment, CustomerPaymentCollectionResponse};
pub use device_shell_script::{
    DeviceManagementScriptRunSummary, DeviceShellScript, DeviceShellScriptCollectionResponse,
    RunAsAccountType,
};
pub use entity::{Entity, EntityKind};
pub use troubleshooting::{
    AppLogCollectionRequest, AppLogCollectionRequestCollectionResponse, AppLogUploadState,
    AppleVppTokenTroubleshootingEvent, DeviceEnrollmentFailureReason, DeviceEnrollmentType,
    DeviceManagementTroubleshootingErrorDetails, DeviceManagementTroubleshootingErrorResource,
    DeviceManagementTroubleshootingEvent, DeviceManagementTroubleshootingEventCollectionResponse,
    DeviceManagementTroubleshootingEventKind, EnrollmentTroubleshootingEvent,
    EnrollmentTroubleshootingEventCollectionResponse, KeyValuePair, MobileAppTroubleshootingEvent,
    MobileAppTroubleshootingEventCollectionResponse, MobileAppTroubleshootingHistoryItem,
};
pub use working_hours::{DayOfWeek, WorkingHours};
