use crate::dispatcher::{ChannelDispatcher, DispatchTarget};
use safar_core::platform::Platform;
use safar_core::storage::KeyValueStore;
use safar_core::{phone, validate, CoreResult};
use safar_message::{format_booking_message, format_enquiry_message};
use safar_shared::models::record::RecordKind;
use safar_shared::models::submission::{BookingSubmission, EnquirySubmission};
use safar_store::BackupRecorder;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Pipeline settings supplied by the embedding application.
#[derive(Debug, Clone)]
pub struct PipelineSettings {
    /// Operator number submissions are dispatched to.
    pub operator_phone: String,
    /// Country code used to normalize the operator number.
    pub country_code: String,
    /// Artificial processing delay applied after validation.
    pub processing_delay: Duration,
}

impl PipelineSettings {
    pub fn new(operator_phone: impl Into<String>) -> Self {
        Self {
            operator_phone: operator_phone.into(),
            country_code: phone::DEFAULT_COUNTRY_CODE.to_string(),
            processing_delay: Duration::from_millis(1000),
        }
    }
}

impl From<&safar_store::app_config::Config> for PipelineSettings {
    fn from(config: &safar_store::app_config::Config) -> Self {
        Self {
            operator_phone: config.operator.whatsapp_number.clone(),
            country_code: config.operator.country_code.clone(),
            processing_delay: Duration::from_millis(config.dispatch.processing_delay_ms),
        }
    }
}

/// What the caller gets back from a completed submission.
#[derive(Debug, Clone)]
pub struct SubmissionReceipt {
    /// Id of the backup record written for this submission.
    pub record_id: i64,
    /// Best-effort handoff outcome. `false` means the caller should
    /// advise the user that manual sending may be needed.
    pub sent: bool,
}

/// The end-to-end submission flow: validate, wait out the processing
/// delay, write the local backup, then hand the formatted message to the
/// channel dispatcher. One logical flow per submission; resubmission
/// guarding (busy flag) is the caller's job.
pub struct SubmissionPipeline {
    dispatcher: ChannelDispatcher,
    recorder: BackupRecorder,
    settings: PipelineSettings,
}

impl SubmissionPipeline {
    pub fn new(
        platform: Arc<dyn Platform>,
        store: Arc<dyn KeyValueStore>,
        settings: PipelineSettings,
    ) -> Self {
        Self {
            dispatcher: ChannelDispatcher::new(platform),
            recorder: BackupRecorder::new(store),
            settings,
        }
    }

    /// Run a booking request through the pipeline. Validation failures
    /// surface before any side effect.
    pub async fn submit_booking(
        &self,
        submission: &BookingSubmission,
    ) -> CoreResult<SubmissionReceipt> {
        validate::validate_booking(submission)?;
        if submission.check_out < submission.check_in {
            // Inverted ranges are accepted, only flagged for the operator.
            warn!(
                "booking has check-out {} before check-in {}",
                submission.check_out, submission.check_in
            );
        }
        let message = format_booking_message(submission);
        self.finish(RecordKind::Booking, submission, message).await
    }

    /// Run a general enquiry through the pipeline.
    pub async fn submit_enquiry(
        &self,
        submission: &EnquirySubmission,
    ) -> CoreResult<SubmissionReceipt> {
        validate::validate_enquiry(submission)?;
        let message = format_enquiry_message(submission);
        self.finish(RecordKind::Enquiry, submission, message).await
    }

    async fn finish<T: Serialize + Clone>(
        &self,
        kind: RecordKind,
        submission: &T,
        message: String,
    ) -> CoreResult<SubmissionReceipt> {
        tokio::time::sleep(self.settings.processing_delay).await;

        let record = self.recorder.record(kind, submission).await;

        let target = DispatchTarget {
            phone: phone::format_phone_number(
                &self.settings.operator_phone,
                &self.settings.country_code,
            ),
            message,
        };
        let sent = self.dispatcher.send(&target).await;

        if sent {
            info!("{} {} dispatched", kind, record.id);
        } else {
            warn!(
                "{} {} handed off with errors, user may need to send manually",
                kind, record.id
            );
        }

        Ok(SubmissionReceipt {
            record_id: record.id,
            sent,
        })
    }
}
