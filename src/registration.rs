use crate::models::*;
use crate::processing::{ImageAttachment, ImagePreview};
use crate::submission::{ContractorClient, SubmitReceipt};
use crate::utils::ContractorError;
use crate::validation::FormValidator;
use std::path::Path;

/// Result of pressing "submit".
#[derive(Debug)]
pub enum SubmissionOutcome {
    /// Blocked by the validation gate; nothing was sent.
    Invalid(FormValidationResult),
    Submitted(SubmitReceipt),
    Failed(ContractorError),
}

impl SubmissionOutcome {
    pub fn is_submitted(&self) -> bool {
        matches!(self, SubmissionOutcome::Submitted(_))
    }
}

/// The registration form: validation gate, selected image and the client
/// that saves the contractor.
pub struct ContractorRegistration {
    client: ContractorClient,
    validator: FormValidator,
    image: Option<ImageAttachment>,
}

impl ContractorRegistration {
    pub fn new(client: ContractorClient) -> Self {
        ContractorRegistration {
            client,
            validator: FormValidator::new(),
            image: None,
        }
    }

    /// Replace the selected image and return its preview.
    pub fn select_image<P: AsRef<Path>>(&mut self, path: P) -> Result<ImagePreview, ContractorError> {
        let attachment = ImageAttachment::open(path)?;
        let preview = attachment.preview();
        self.image = Some(attachment);
        Ok(preview)
    }

    pub fn clear_image(&mut self) {
        self.image = None;
    }

    pub fn image(&self) -> Option<&ImageAttachment> {
        self.image.as_ref()
    }

    /// Run the gate and, if it passes, build the body that would be posted.
    pub fn prepare(&self, form: &mut ContractorForm) -> Result<ContractorPayload, FormValidationResult> {
        let validation = self.validator.validate(form);
        if !validation.is_valid {
            return Err(validation);
        }

        let image = self.image.as_ref().map(ImageAttachment::text);
        Ok(ContractorPayload::from_form(form, image))
    }

    /// Validate and send. Holding `&mut self` for the whole call keeps a
    /// second submission from starting while one is in flight.
    pub async fn submit(&mut self, form: &mut ContractorForm) -> SubmissionOutcome {
        let payload = match self.prepare(form) {
            Ok(payload) => payload,
            Err(validation) => {
                for issue in &validation.issues {
                    log::debug!("{}: {}", issue.field, issue.message);
                }
                return SubmissionOutcome::Invalid(validation);
            }
        };

        match self.client.submit(&payload).await {
            Ok(receipt) => SubmissionOutcome::Submitted(receipt),
            Err(e) => SubmissionOutcome::Failed(e),
        }
    }
}
