// Test utility module for asismap integration tests
#![allow(dead_code)]

use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};
use zip::write::SimpleFileOptions;

/// One adapter (`messageFlow`) inside a fixture flow.
#[derive(Debug, Clone)]
pub struct AdapterFixture {
    pub properties: Vec<(String, String)>,
}

impl AdapterFixture {
    pub fn new(properties: &[(&str, &str)]) -> Self {
        Self {
            properties: properties
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    pub fn process_direct(direction: &str, address: &str) -> Self {
        Self::new(&[
            ("ComponentType", "ProcessDirect"),
            ("direction", direction),
            ("Name", "ProcessDirect"),
            ("TransportProtocol", "Not Applicable"),
            ("componentVersion", "1.1"),
            ("address", address),
        ])
    }
}

/// One flow bundle inside a fixture package.
#[derive(Debug, Clone)]
pub struct FlowFixture {
    /// Entry name inside the package; extensionless names mimic real exports.
    pub entry_name: String,
    pub bundle_name: String,
    pub symbolic_name: String,
    pub version: String,
    pub adapters: Vec<AdapterFixture>,
    pub parameters: Option<String>,
    pub include_iflw: bool,
}

impl FlowFixture {
    pub fn new(entry_name: &str, bundle_name: &str) -> Self {
        Self {
            entry_name: entry_name.to_string(),
            bundle_name: bundle_name.to_string(),
            symbolic_name: format!("com.example.{}", entry_name),
            version: "1.0.0".to_string(),
            adapters: Vec::new(),
            parameters: None,
            include_iflw: true,
        }
    }

    pub fn adapter(mut self, adapter: AdapterFixture) -> Self {
        self.adapters.push(adapter);
        self
    }

    pub fn parameters(mut self, content: &str) -> Self {
        self.parameters = Some(content.to_string());
        self
    }

    pub fn without_iflw(mut self) -> Self {
        self.include_iflw = false;
        self
    }

    pub fn iflw_xml(&self) -> String {
        let flows: String = self
            .adapters
            .iter()
            .enumerate()
            .map(|(i, adapter)| {
                let props: String = adapter
                    .properties
                    .iter()
                    .map(|(k, v)| {
                        format!(
                            "<ifl:property><key>{}</key><value>{}</value></ifl:property>",
                            k, v
                        )
                    })
                    .collect();
                format!(
                    r#"<bpmn2:messageFlow id="MessageFlow_{i}" sourceRef="Participant_1" targetRef="StartEvent_2">
                         <bpmn2:extensionElements>{props}</bpmn2:extensionElements>
                       </bpmn2:messageFlow>"#
                )
            })
            .collect();

        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<bpmn2:definitions xmlns:bpmn2="http://www.omg.org/spec/BPMN/20100524/MODEL" xmlns:ifl="http:///com.sap.ifl.model/Ifl.xsd" id="Definitions_1">
  <bpmn2:collaboration id="Collaboration_1" name="Default Collaboration">
    {flows}
  </bpmn2:collaboration>
  <bpmn2:process id="Process_1" name="Integration Process">
    <bpmn2:sequenceFlow id="SequenceFlow_1" sourceRef="StartEvent_2" targetRef="EndEvent_2"/>
  </bpmn2:process>
</bpmn2:definitions>
"#
        )
    }

    pub fn manifest(&self) -> String {
        format!(
            "Manifest-Version: 1.0\r\nBundle-ManifestVersion: 2\r\nBundle-Name: {}\r\nBundle-SymbolicName: {}; singleton:=true\r\nBundle-Version: {}\r\nOrigin-Bundle-SymbolicName: {}\r\n",
            self.bundle_name, self.symbolic_name, self.version, self.symbolic_name
        )
    }

    pub fn to_zip_bytes(&self) -> Vec<u8> {
        let mut entries: Vec<(String, Vec<u8>)> =
            vec![("META-INF/MANIFEST.MF".to_string(), self.manifest().into_bytes())];
        if self.include_iflw {
            entries.push((
                format!(
                    "src/main/resources/scenarioflows/integrationflow/{}.iflw",
                    self.entry_name
                ),
                self.iflw_xml().into_bytes(),
            ));
        }
        if let Some(params) = &self.parameters {
            entries.push((
                "src/main/resources/parameters.prop".to_string(),
                params.clone().into_bytes(),
            ));
        }
        zip_bytes(&entries)
    }
}

/// A package export holding several flow bundles.
#[derive(Debug, Clone)]
pub struct PackageFixture {
    pub name: Option<String>,
    pub flows: Vec<FlowFixture>,
}

impl PackageFixture {
    pub fn new(name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            flows: Vec::new(),
        }
    }

    pub fn unnamed() -> Self {
        Self {
            name: None,
            flows: Vec::new(),
        }
    }

    pub fn flow(mut self, flow: FlowFixture) -> Self {
        self.flows.push(flow);
        self
    }

    pub fn to_zip_bytes(&self) -> Vec<u8> {
        let mut entries: Vec<(String, Vec<u8>)> = Vec::new();
        if let Some(name) = &self.name {
            entries.push((
                "ExportInformation.info".to_string(),
                format!("#Export\nVersion=1.0\nName={}\n", name).into_bytes(),
            ));
        }
        for flow in &self.flows {
            entries.push((flow.entry_name.clone(), flow.to_zip_bytes()));
        }
        zip_bytes(&entries)
    }

    pub fn write_to(&self, dir: &Path, file_name: &str) -> PathBuf {
        let path = dir.join(file_name);
        std::fs::write(&path, self.to_zip_bytes()).expect("Failed to write package zip");
        path
    }
}

pub fn zip_bytes(entries: &[(String, Vec<u8>)]) -> Vec<u8> {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    for (name, data) in entries {
        writer
            .start_file(name.as_str(), SimpleFileOptions::default())
            .expect("Failed to start zip entry");
        writer.write_all(data).expect("Failed to write zip entry");
    }
    writer
        .finish()
        .expect("Failed to finish zip")
        .into_inner()
}

/// Column value of `row` by header name.
pub fn cell<'a>(table: &'a asismap::Table, row: usize, column: &str) -> &'a str {
    let index = table
        .column(column)
        .unwrap_or_else(|| panic!("missing column {column}"));
    &table.rows[row][index]
}

/// Index of the first row whose `column` equals `value`.
pub fn find_row(table: &asismap::Table, column: &str, value: &str) -> usize {
    (0..table.rows.len())
        .find(|&row| cell(table, row, column) == value)
        .unwrap_or_else(|| panic!("no row with {column} = {value}"))
}

/// Order Management: two flows sharing one ProcessDirect address.
pub fn order_management_package() -> PackageFixture {
    PackageFixture::new("Order Management")
        .flow(
            FlowFixture::new("Create_Order", "Create Order")
                .adapter(AdapterFixture::new(&[
                    ("ComponentType", "HTTPS"),
                    ("direction", "Sender"),
                    ("Name", "HTTPS"),
                    ("TransportProtocol", "HTTPS"),
                    ("componentVersion", "1.5"),
                    ("urlPath", "/orders/create"),
                ]))
                .adapter(AdapterFixture::process_direct("Receiver", "{{queueParam}}"))
                .parameters("#Generated\nqueueParam=Orders/Out/\n"),
        )
        .flow(
            FlowFixture::new("Process_Order", "Process Order")
                .adapter(AdapterFixture::process_direct("Sender", "orders/out")),
        )
}
