use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use tracing::debug;

use crate::errors::KdumpCheckError;
use crate::models::{CertificationReport, Hardware};

pub const ROOT_ELEMENT: &str = "certification-test";

const VERSION_ATTR: &[u8] = b"rhcert-version";
const RELEASE_ATTR: &[u8] = b"rhcert-release";

/// Leaf elements under `<hardware>` that feed the report header.
#[derive(Debug, Clone, Copy)]
enum HardwareField {
    Release,
    Model,
    Make,
    Vendor,
    OsRelease,
    OsProduct,
}

impl HardwareField {
    /// Resolve a path relative to the root element.
    fn from_path(path: &[Vec<u8>]) -> Option<Self> {
        match path {
            [hw, leaf] if hw.as_slice() == b"hardware" => match leaf.as_slice() {
                b"release" => Some(Self::Release),
                b"model" => Some(Self::Model),
                b"make" => Some(Self::Make),
                b"vendor" => Some(Self::Vendor),
                _ => None,
            },
            [hw, os, leaf] if hw.as_slice() == b"hardware" && os.as_slice() == b"os" => {
                match leaf.as_slice() {
                    b"release" => Some(Self::OsRelease),
                    b"product" => Some(Self::OsProduct),
                    _ => None,
                }
            }
            _ => None,
        }
    }

    fn slot<'a>(&self, hw: &'a mut Hardware) -> &'a mut String {
        match self {
            Self::Release => &mut hw.release,
            Self::Model => &mut hw.model,
            Self::Make => &mut hw.make,
            Self::Vendor => &mut hw.vendor,
            Self::OsRelease => &mut hw.os.release,
            Self::OsProduct => &mut hw.os.product,
        }
    }
}

fn malformed(e: impl std::fmt::Display) -> KdumpCheckError {
    KdumpCheckError::MalformedDocument(e.to_string())
}

/// Decode an uploaded document into a [`CertificationReport`].
///
/// The inner markup of the root element is kept byte-for-byte as the log
/// text; entities inside it are not decoded here. Anything after the root
/// element is ignored.
pub fn parse_report(bytes: &[u8]) -> Result<CertificationReport, KdumpCheckError> {
    let text = std::str::from_utf8(bytes)
        .map_err(|e| malformed(format!("document is not valid UTF-8: {}", e)))?;
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let mut reader = Reader::from_str(text);
    reader.config_mut().check_end_names = true;

    let mut report = CertificationReport::default();

    // Locate the root element, skipping prolog content.
    let body_start = loop {
        match reader.read_event().map_err(malformed)? {
            Event::Start(e) => {
                read_root_attributes(&e, &mut report)?;
                break reader.buffer_position() as usize;
            }
            Event::Empty(e) => {
                read_root_attributes(&e, &mut report)?;
                debug!("Root element is empty");
                return Ok(report);
            }
            Event::Eof => {
                return Err(malformed(format!("missing <{}> root element", ROOT_ELEMENT)));
            }
            _ => {}
        }
    };

    let mut path: Vec<Vec<u8>> = Vec::new();
    let mut current: Option<HardwareField> = None;

    let body_end = loop {
        let before = reader.buffer_position() as usize;
        match reader.read_event().map_err(malformed)? {
            Event::Start(e) => {
                path.push(e.local_name().as_ref().to_vec());
                current = HardwareField::from_path(&path);
                if let Some(field) = current {
                    field.slot(&mut report.hardware).clear();
                }
            }
            Event::Empty(_) => {}
            Event::End(_) => {
                if path.pop().is_none() {
                    break before;
                }
                current = None;
            }
            Event::Text(e) => {
                if let Some(field) = current {
                    let value = e.unescape().map_err(malformed)?;
                    field.slot(&mut report.hardware).push_str(&value);
                }
            }
            Event::CData(e) => {
                if let Some(field) = current {
                    field.slot(&mut report.hardware).push_str(&String::from_utf8_lossy(&e));
                }
            }
            Event::Eof => {
                return Err(malformed(format!("unexpected end of document inside <{}>", ROOT_ELEMENT)));
            }
            _ => {}
        }
    };

    trim_hardware(&mut report.hardware);
    report.log_text = text[body_start..body_end].to_string();

    debug!(
        kernel_release = %report.hardware.release,
        log_bytes = report.log_text.len(),
        "Decoded certification report"
    );

    Ok(report)
}

fn read_root_attributes(
    e: &BytesStart<'_>,
    report: &mut CertificationReport,
) -> Result<(), KdumpCheckError> {
    if e.local_name().as_ref() != ROOT_ELEMENT.as_bytes() {
        return Err(malformed(format!(
            "expected <{}> root element, found <{}>",
            ROOT_ELEMENT,
            String::from_utf8_lossy(e.name().as_ref())
        )));
    }

    for attr in e.attributes() {
        let attr = attr.map_err(malformed)?;
        let value = attr.unescape_value().map_err(malformed)?;
        match attr.key.local_name().as_ref() {
            VERSION_ATTR => report.rhcert_version = value.into_owned(),
            RELEASE_ATTR => report.rhcert_release = value.into_owned(),
            _ => {}
        }
    }

    Ok(())
}

fn trim_hardware(hw: &mut Hardware) {
    for value in [
        &mut hw.release,
        &mut hw.model,
        &mut hw.make,
        &mut hw.vendor,
        &mut hw.os.release,
        &mut hw.os.product,
    ] {
        let trimmed = value.trim();
        if trimmed.len() != value.len() {
            *value = trimmed.to_string();
        }
    }
}
