//! Authentication event listeners and the user flows they invoke.
//!
//! `AuthenticationListener` is abstract on the service side; payloads name the
//! concrete listener through `@odata.type` and are decoded through
//! [`AuthenticationListenerKind`].

use graph_serialization::AdditionalData;
use graph_serialization_macros::{GraphEnum, GraphModel, GraphPolymorphic};

use crate::collection::collection_response;
use crate::entity::Entity;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, GraphEnum)]
pub enum UserFlowType {
    SignUp,
    SignIn,
    SignUpOrSignIn,
    PasswordReset,
    ProfileUpdate,
    ResourceOwner,
    UnknownFutureValue,
}

/// Applications an authentication listener applies to.
#[derive(Debug, Clone, PartialEq, GraphModel)]
pub struct AuthenticationSourceFilter {
    #[graph(additional_data)]
    additional_data: AdditionalData,
    include_applications: Option<Vec<String>>,
    odata_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, GraphModel)]
#[graph(odata_type = "#microsoft.graph.authenticationListener")]
pub struct AuthenticationListener {
    #[graph(parent)]
    entity: Entity,
    /// Evaluation order among listeners of the same event.
    priority: Option<i32>,
    source_filter: Option<AuthenticationSourceFilter>,
}

#[derive(Debug, Clone, PartialEq, GraphModel)]
#[graph(odata_type = "#microsoft.graph.identityUserFlow")]
pub struct IdentityUserFlow {
    #[graph(parent)]
    entity: Entity,
    user_flow_type: Option<UserFlowType>,
    user_flow_type_version: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, GraphModel)]
#[graph(odata_type = "#microsoft.graph.b2xIdentityUserFlow")]
pub struct B2xIdentityUserFlow {
    #[graph(parent)]
    user_flow: IdentityUserFlow,
}

#[derive(Debug, Clone, PartialEq, GraphModel)]
#[graph(odata_type = "#microsoft.graph.invokeUserFlowListener")]
pub struct InvokeUserFlowListener {
    #[graph(parent)]
    listener: AuthenticationListener,
    user_flow: Option<B2xIdentityUserFlow>,
}

/// Overrides applied when calling a custom extension.
#[derive(Debug, Clone, PartialEq, GraphModel)]
pub struct CustomExtensionConfiguration {
    #[graph(additional_data)]
    additional_data: AdditionalData,
    maximum_retries: Option<i32>,
    odata_type: Option<String>,
    timeout_in_milliseconds: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, GraphModel)]
#[graph(odata_type = "#microsoft.graph.onTokenIssuanceStartHandler")]
pub struct OnTokenIssuanceStartHandler {
    #[graph(additional_data)]
    additional_data: AdditionalData,
    odata_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, GraphModel)]
#[graph(odata_type = "#microsoft.graph.onTokenIssuanceStartCustomExtensionHandler")]
pub struct OnTokenIssuanceStartCustomExtensionHandler {
    #[graph(parent)]
    handler: OnTokenIssuanceStartHandler,
    configuration: Option<CustomExtensionConfiguration>,
    custom_extension_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, GraphPolymorphic)]
pub enum OnTokenIssuanceStartHandlerKind {
    #[graph(base)]
    Handler(OnTokenIssuanceStartHandler),
    CustomExtension(OnTokenIssuanceStartCustomExtensionHandler),
}

#[derive(Debug, Clone, PartialEq, GraphModel)]
#[graph(odata_type = "#microsoft.graph.onTokenIssuanceStartListener")]
pub struct OnTokenIssuanceStartListener {
    #[graph(parent)]
    listener: AuthenticationListener,
    handler: Option<OnTokenIssuanceStartHandlerKind>,
}

#[derive(Debug, Clone, PartialEq, GraphModel)]
pub struct OnInteractiveAuthFlowStartHandler {
    #[graph(additional_data)]
    additional_data: AdditionalData,
    is_sign_up_allowed: Option<bool>,
    odata_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, GraphModel)]
#[graph(odata_type = "#microsoft.graph.onInteractiveAuthFlowStartListener")]
pub struct OnInteractiveAuthFlowStartListener {
    #[graph(parent)]
    listener: AuthenticationListener,
    handler: Option<OnInteractiveAuthFlowStartHandler>,
}

#[derive(Debug, Clone, PartialEq, GraphPolymorphic)]
pub enum AuthenticationListenerKind {
    #[graph(base)]
    Listener(AuthenticationListener),
    InvokeUserFlow(InvokeUserFlowListener),
    OnTokenIssuanceStart(OnTokenIssuanceStartListener),
    OnInteractiveAuthFlowStart(OnInteractiveAuthFlowStartListener),
}

collection_response!(AuthenticationListenerCollectionResponse => AuthenticationListenerKind);
