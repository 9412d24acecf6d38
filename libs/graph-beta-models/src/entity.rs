//! The `entity` root every addressable resource embeds, and the dispatch
//! over all entity types this crate knows.

use graph_serialization::AdditionalData;
use graph_serialization_macros::{GraphModel, GraphPolymorphic};

use crate::authentication::{
    AuthenticationListener, B2xIdentityUserFlow, IdentityUserFlow, InvokeUserFlowListener,
    OnInteractiveAuthFlowStartListener, OnTokenIssuanceStartListener,
};
use crate::customer_payment::CustomerPayment;
use crate::device_shell_script::{DeviceManagementScriptRunSummary, DeviceShellScript};
use crate::troubleshooting::{
    AppLogCollectionRequest, AppleVppTokenTroubleshootingEvent,
    DeviceManagementTroubleshootingEvent, EnrollmentTroubleshootingEvent,
    MobileAppTroubleshootingEvent,
};

#[derive(Debug, Clone, PartialEq, GraphModel)]
pub struct Entity {
    #[graph(additional_data)]
    additional_data: AdditionalData,
    /// The unique identifier for an entity. Read-only.
    id: Option<String>,
    odata_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, GraphPolymorphic)]
pub enum EntityKind {
    #[graph(base)]
    Entity(Entity),
    AuthenticationListener(AuthenticationListener),
    InvokeUserFlowListener(InvokeUserFlowListener),
    OnTokenIssuanceStartListener(OnTokenIssuanceStartListener),
    OnInteractiveAuthFlowStartListener(OnInteractiveAuthFlowStartListener),
    IdentityUserFlow(IdentityUserFlow),
    B2xIdentityUserFlow(B2xIdentityUserFlow),
    DeviceManagementTroubleshootingEvent(DeviceManagementTroubleshootingEvent),
    AppleVppTokenTroubleshootingEvent(AppleVppTokenTroubleshootingEvent),
    EnrollmentTroubleshootingEvent(EnrollmentTroubleshootingEvent),
    MobileAppTroubleshootingEvent(MobileAppTroubleshootingEvent),
    AppLogCollectionRequest(AppLogCollectionRequest),
    DeviceShellScript(DeviceShellScript),
    DeviceManagementScriptRunSummary(DeviceManagementScriptRunSummary),
    CustomerPayment(CustomerPayment),
}
