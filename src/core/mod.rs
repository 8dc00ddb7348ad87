//! Core report types shared by the extraction and linking stages.

use serde::{Serialize, Serializer};
use std::collections::HashMap;

/// Parameter name to value mapping loaded from one flow's `parameters.prop`.
pub type ParameterTable = HashMap<String, String>;

/// Column headers of the extraction report, in write order.
pub const REPORT_COLUMNS: [&str; 12] = [
    "UID",
    "Package",
    "Iflow",
    "IflowID",
    "IflowVersion",
    "AdapterType",
    "TransportProtocol",
    "AdapterDirection",
    "AdapterName",
    "AdapterVersion",
    "AdapterAddress",
    "IsParametrized",
];

pub const CALLS_COLUMN: &str = "CallsIflow";
pub const CALLED_BY_COLUMN: &str = "IsCalledByIflow";

/// Adapter type whose addresses take part in call linking.
pub const PROCESS_DIRECT: &str = "ProcessDirect";
pub const SENDER: &str = "Sender";
pub const RECEIVER: &str = "Receiver";

/// One adapter (`messageFlow` element) of one integration flow.
///
/// Field order matches [`REPORT_COLUMNS`]; the struct serializes straight
/// into a report row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AdapterRecord {
    #[serde(rename = "UID")]
    pub uid: String,
    #[serde(rename = "Package")]
    pub package: String,
    #[serde(rename = "Iflow")]
    pub iflow: Option<String>,
    #[serde(rename = "IflowID")]
    pub iflow_id: Option<String>,
    #[serde(rename = "IflowVersion")]
    pub iflow_version: Option<String>,
    #[serde(rename = "AdapterType")]
    pub adapter_type: Option<String>,
    #[serde(rename = "TransportProtocol")]
    pub transport_protocol: Option<String>,
    #[serde(rename = "AdapterDirection")]
    pub adapter_direction: Option<String>,
    #[serde(rename = "AdapterName")]
    pub adapter_name: Option<String>,
    #[serde(rename = "AdapterVersion")]
    pub adapter_version: Option<String>,
    #[serde(rename = "AdapterAddress")]
    pub adapter_address: Option<String>,
    #[serde(rename = "IsParametrized", serialize_with = "serialize_flag")]
    pub is_parametrized: bool,
}

/// Provenance shared by every adapter of one integration flow.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlowInfo {
    pub uid: String,
    pub package: String,
    pub iflow: Option<String>,
    pub iflow_id: Option<String>,
    pub iflow_version: Option<String>,
}

impl AdapterRecord {
    /// Start a record carrying the flow's provenance and no adapter data.
    pub fn for_flow(flow: &FlowInfo) -> Self {
        Self {
            uid: flow.uid.clone(),
            package: flow.package.clone(),
            iflow: flow.iflow.clone(),
            iflow_id: flow.iflow_id.clone(),
            iflow_version: flow.iflow_version.clone(),
            ..Default::default()
        }
    }
}

// Reports are consumed by spreadsheet tooling that expects `True` / `False`.
fn serialize_flag<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(if *value { "True" } else { "False" })
}
