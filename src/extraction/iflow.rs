//! Adapter extraction from `.iflw` (BPMN) documents.
//!
//! Every `messageFlow` element is an adapter candidate. Its configuration sits
//! in `extensionElements/property` entries, each holding a `key` and a `value`
//! child. Tags are matched by local name, so `bpmn2:messageFlow` and
//! `ifl:property` match regardless of their namespace prefix.

use super::address::select_address;
use super::parameters::resolve_address;
use crate::core::{AdapterRecord, FlowInfo, ParameterTable};
use crate::errors::{AsisError, Result};
use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;
use std::path::Path;

/// Ordered, key-unique adapter properties of one `extensionElements` block.
pub type PropertyList = Vec<(String, Option<String>)>;

/// Read and extract all adapters from the `.iflw` file at `path`.
pub fn extract_iflow_file(
    path: &Path,
    flow: &FlowInfo,
    parameters: &ParameterTable,
) -> Result<Vec<AdapterRecord>> {
    let xml = std::fs::read_to_string(path)?;
    extract_message_flows(&xml, flow, parameters).map_err(|e| AsisError::xml(path, e))
}

/// Extract one record per `messageFlow` that declares a `ComponentType`.
pub fn extract_message_flows(
    xml: &str,
    flow: &FlowInfo,
    parameters: &ParameterTable,
) -> std::result::Result<Vec<AdapterRecord>, quick_xml::Error> {
    let mut walker = FlowWalker::new(flow, parameters);
    let mut reader = Reader::from_str(xml);

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                let name = local_name(&e);
                walker.open(&name);
            }
            Event::Empty(e) => {
                let name = local_name(&e);
                walker.open(&name);
                walker.close();
            }
            Event::End(_) => walker.close(),
            Event::Text(t) => walker.text(&t.unescape()?),
            Event::CData(c) => walker.text(&String::from_utf8_lossy(&c.into_inner())),
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(walker.records)
}

fn local_name(e: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(e.local_name().as_ref()).into_owned()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TextField {
    Key,
    Value,
}

struct OpenFlow {
    depth: usize,
    record: AdapterRecord,
}

struct OpenExtension {
    depth: usize,
    properties: PropertyList,
}

struct OpenProperty {
    depth: usize,
    key: Option<String>,
    value: Option<String>,
}

/// Streaming state over the element stack.
struct FlowWalker<'a> {
    flow: &'a FlowInfo,
    parameters: &'a ParameterTable,
    stack: Vec<String>,
    current_flow: Option<OpenFlow>,
    extension: Option<OpenExtension>,
    property: Option<OpenProperty>,
    text_field: Option<TextField>,
    records: Vec<AdapterRecord>,
}

impl<'a> FlowWalker<'a> {
    fn new(flow: &'a FlowInfo, parameters: &'a ParameterTable) -> Self {
        Self {
            flow,
            parameters,
            stack: Vec::new(),
            current_flow: None,
            extension: None,
            property: None,
            text_field: None,
            records: Vec::new(),
        }
    }

    fn open(&mut self, name: &str) {
        self.stack.push(name.to_string());
        let depth = self.stack.len();

        match name {
            "messageFlow" if self.current_flow.is_none() => {
                self.current_flow = Some(OpenFlow {
                    depth,
                    record: AdapterRecord::for_flow(self.flow),
                });
            }
            "extensionElements"
                if self
                    .current_flow
                    .as_ref()
                    .is_some_and(|f| f.depth + 1 == depth) =>
            {
                self.extension = Some(OpenExtension {
                    depth,
                    properties: PropertyList::new(),
                });
            }
            "property" if self.extension.is_some() => {
                self.property = Some(OpenProperty {
                    depth,
                    key: None,
                    value: None,
                });
            }
            "key" | "value" => {
                if self.property.as_ref().is_some_and(|p| p.depth + 1 == depth) {
                    self.text_field = Some(if name == "key" {
                        TextField::Key
                    } else {
                        TextField::Value
                    });
                }
            }
            _ => {}
        }
    }

    fn close(&mut self) {
        let depth = self.stack.len();
        self.stack.pop();

        if self.text_field.is_some()
            && self.property.as_ref().is_some_and(|p| p.depth + 1 == depth)
        {
            self.text_field = None;
        }

        if self.property.as_ref().is_some_and(|p| p.depth == depth) {
            if let (Some(property), Some(extension)) = (self.property.take(), &mut self.extension) {
                insert_property(&mut extension.properties, property.key, property.value);
            }
        }

        if self.extension.as_ref().is_some_and(|x| x.depth == depth) {
            if let (Some(extension), Some(open)) = (self.extension.take(), &mut self.current_flow) {
                apply_properties(&mut open.record, &extension.properties, self.parameters);
            }
        }

        if self.current_flow.as_ref().is_some_and(|f| f.depth == depth) {
            if let Some(open) = self.current_flow.take() {
                if open.record.adapter_type.is_some() {
                    self.records.push(open.record);
                } else {
                    log::trace!("Dropping messageFlow without ComponentType");
                }
            }
        }
    }

    fn text(&mut self, text: &str) {
        let (Some(field), Some(property)) = (self.text_field, self.property.as_mut()) else {
            return;
        };
        let slot = match field {
            TextField::Key => &mut property.key,
            TextField::Value => &mut property.value,
        };
        slot.get_or_insert_with(String::new).push_str(text);
    }
}

fn insert_property(properties: &mut PropertyList, key: Option<String>, value: Option<String>) {
    let Some(key) = key.filter(|k| !k.is_empty()) else {
        return;
    };
    let value = value.filter(|v| !v.is_empty());

    match properties.iter_mut().find(|(k, _)| *k == key) {
        Some(existing) => existing.1 = value,
        None => properties.push((key, value)),
    }
}

/// Map known property keys onto the record and resolve its address.
pub fn apply_properties(
    record: &mut AdapterRecord,
    properties: &[(String, Option<String>)],
    parameters: &ParameterTable,
) {
    let get = |key: &str| {
        properties
            .iter()
            .find(|(k, _)| k == key)
            .and_then(|(_, v)| v.clone())
    };

    record.adapter_type = get("ComponentType");
    record.adapter_direction = get("direction");
    record.adapter_name = get("Name");
    record.transport_protocol = get("TransportProtocol");
    record.adapter_version = get("componentVersion");

    let raw = select_address(
        properties,
        record.adapter_type.as_deref(),
        record.adapter_direction.as_deref(),
    );

    match raw {
        Some(raw) => {
            let resolved = resolve_address(raw, parameters);
            record.is_parametrized |= resolved.parametrized;
            record.adapter_address = Some(resolved.value);
        }
        None => record.adapter_address = None,
    }
}
