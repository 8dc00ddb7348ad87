//! Adapter address lookup through the fixed per-type key table.

/// Property keys holding the endpoint address for an adapter type.
///
/// JMS adapters keep sender and receiver queues under different keys, so the
/// direction selects the candidate list there.
pub fn address_keys(adapter_type: &str, direction: Option<&str>) -> &'static [&'static str] {
    match adapter_type {
        "HTTPS" => &["urlPath"],
        "HTTP" => &["httpAddressWithoutQuery"],
        "SFTP" | "PollingSFTP" => &["host"],
        "JMS" => match direction {
            Some("Sender") => &["QueueName_inbound"],
            Some("Receiver") => &["QueueName_outbound"],
            _ => &[],
        },
        "ProcessDirect" | "HCIOData" | "SOAP" => &["address"],
        "JDBC" => &["alias"],
        _ => &[],
    }
}

/// Pick the raw (unresolved) address from a flow's adapter properties.
///
/// `properties` is in document order with unique keys. Typed keys are tried
/// first; failing that, the first non-empty property whose key mentions `url`
/// is used.
pub fn select_address<'a>(
    properties: &'a [(String, Option<String>)],
    adapter_type: Option<&str>,
    direction: Option<&str>,
) -> Option<&'a str> {
    let lookup = |key: &str| {
        properties
            .iter()
            .find(|(k, _)| k == key)
            .and_then(|(_, v)| v.as_deref())
    };

    let typed = adapter_type
        .map(|t| address_keys(t, direction))
        .unwrap_or(&[])
        .iter()
        .filter_map(|&key| lookup(key))
        .find(|value| !value.is_empty());

    typed.or_else(|| {
        properties
            .iter()
            .filter(|(key, _)| key.to_lowercase().contains("url"))
            .filter_map(|(_, value)| value.as_deref())
            .find(|value| !value.is_empty())
    })
}
