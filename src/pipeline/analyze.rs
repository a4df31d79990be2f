use std::path::Path;

use tracing::{debug, info};

use crate::config::UploadConfig;
use crate::errors::KdumpCheckError;
use crate::extraction::Extractor;
use crate::models::AnalysisReport;
use crate::parser::parse_report;
use crate::upload::StagedUpload;

/// Decode then extract. Decode failures end the analysis; extraction cannot fail.
pub fn analyze_document(extractor: &Extractor, bytes: &[u8]) -> Result<AnalysisReport, KdumpCheckError> {
    let report = parse_report(bytes)?;
    let extraction = extractor.extract(&report);
    Ok(AnalysisReport::new(&report, extraction))
}

/// Stage an uploaded file on disk, analyze it, and remove it again.
pub fn analyze_upload(
    extractor: &Extractor,
    upload: &UploadConfig,
    upload_id: &str,
    bytes: &[u8],
) -> Result<AnalysisReport, KdumpCheckError> {
    if bytes.len() as u64 > upload.max_bytes {
        return Err(KdumpCheckError::PayloadTooLarge(upload.max_bytes));
    }

    let staged = StagedUpload::stage(&upload.staging_dir(), upload_id, bytes)?;
    let data = staged.read()?;
    let report = analyze_document(extractor, &data)?;

    info!(
        upload_id,
        bytes = staged.len(),
        kernel_release = %report.kernel_release,
        vmcore_status = %report.extraction.vmcore_status,
        "Upload analyzed"
    );

    Ok(report)
}

/// Analyze a report already on local disk.
pub async fn analyze_file(extractor: &Extractor, path: &Path) -> Result<AnalysisReport, KdumpCheckError> {
    let bytes = tokio::fs::read(path).await?;
    debug!(path = %path.display(), bytes = bytes.len(), "Read report file");
    analyze_document(extractor, &bytes)
}
