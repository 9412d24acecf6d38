//! macOS shell scripts run by Intune on enrolled devices.

use chrono::{DateTime, FixedOffset};
use graph_serialization::{ByteArray, IsoDuration};
use graph_serialization_macros::{GraphEnum, GraphModel};

use crate::collection::collection_response;
use crate::entity::Entity;

/// Execution context of a script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, GraphEnum)]
pub enum RunAsAccountType {
    System,
    User,
}

#[derive(Debug, Clone, PartialEq, GraphModel)]
#[graph(odata_type = "#microsoft.graph.deviceManagementScriptRunSummary")]
pub struct DeviceManagementScriptRunSummary {
    #[graph(parent)]
    entity: Entity,
    error_device_count: Option<i32>,
    error_user_count: Option<i32>,
    success_device_count: Option<i32>,
    success_user_count: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, GraphModel)]
#[graph(odata_type = "#microsoft.graph.deviceShellScript")]
pub struct DeviceShellScript {
    #[graph(parent)]
    entity: Entity,
    block_execution_notifications: Option<bool>,
    created_date_time: Option<DateTime<FixedOffset>>,
    description: Option<String>,
    display_name: Option<String>,
    /// Interval between runs; unset means the script runs once.
    execution_frequency: Option<IsoDuration>,
    file_name: Option<String>,
    last_modified_date_time: Option<DateTime<FixedOffset>>,
    retry_count: Option<i32>,
    role_scope_tag_ids: Option<Vec<String>>,
    run_as_account: Option<RunAsAccountType>,
    run_summary: Option<DeviceManagementScriptRunSummary>,
    script_content: Option<ByteArray>,
}

collection_response!(DeviceShellScriptCollectionResponse => DeviceShellScript);
