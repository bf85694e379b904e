use anyhow::Context;
use ch_core::{
    RegisteredEmailAddressFiling, RegisteredOfficeAddressFiling, ADDRESS_CHANGE_DESCRIPTION,
    EMAIL_CHANGE_DESCRIPTION,
};
use tracing::{debug, warn};

use super::http::FilingApi;
use super::types::{FilingOutcome, FilingStage, ValidationFailed};
use crate::modules::system::Reporter;

enum Payload<'p> {
    Address(&'p RegisteredOfficeAddressFiling),
    Email(&'p RegisteredEmailAddressFiling),
}

impl Payload<'_> {
    fn description(&self) -> &'static str {
        match self {
            Self::Address(_) => ADDRESS_CHANGE_DESCRIPTION,
            Self::Email(_) => EMAIL_CHANGE_DESCRIPTION,
        }
    }

    fn step(&self) -> &'static str {
        match self {
            Self::Address(_) => "file address",
            Self::Email(_) => "file email",
        }
    }
}

/// Files a change of registered office address: create, submit, validate, close.
pub(crate) async fn file_address(
    api: &dyn FilingApi,
    reporter: &dyn Reporter,
    company_number: &str,
    address: &RegisteredOfficeAddressFiling,
) -> anyhow::Result<FilingOutcome> {
    run(api, reporter, company_number, Payload::Address(address)).await
}

/// Files a change of registered email address: create, submit, close.
pub(crate) async fn file_email(
    api: &dyn FilingApi,
    reporter: &dyn Reporter,
    company_number: &str,
    email: &RegisteredEmailAddressFiling,
) -> anyhow::Result<FilingOutcome> {
    run(api, reporter, company_number, Payload::Email(email)).await
}

async fn run(
    api: &dyn FilingApi,
    reporter: &dyn Reporter,
    company_number: &str,
    payload: Payload<'_>,
) -> anyhow::Result<FilingOutcome> {
    let mut stage = FilingStage::Start;
    let result = advance(api, reporter, company_number, &payload, &mut stage).await;
    if let Err(err) = &result {
        debug!(stage = ?stage, company_number, "filing aborted: {err:#}");
    }
    result
}

async fn advance(
    api: &dyn FilingApi,
    reporter: &dyn Reporter,
    company_number: &str,
    payload: &Payload<'_>,
    stage: &mut FilingStage,
) -> anyhow::Result<FilingOutcome> {
    reporter.info(&format!(
        "Creating filing transaction for {company_number}..."
    ));
    let created = api
        .create_transaction(company_number, payload.description())
        .await
        .context("create transaction")?;
    if created.id.is_empty() {
        anyhow::bail!("create transaction: server returned no transaction id");
    }
    let transaction_id = created.id;
    *stage = FilingStage::Created;
    debug!(transaction_id = %transaction_id, "transaction created");

    match payload {
        Payload::Address(address) => api
            .file_registered_office_address(&transaction_id, address)
            .await
            .context(payload.step())?,
        Payload::Email(email) => api
            .file_registered_email_address(&transaction_id, email)
            .await
            .context(payload.step())?,
    }
    *stage = FilingStage::Submitted;

    if matches!(payload, Payload::Address(_)) {
        match api.get_address_validation(&transaction_id).await {
            Ok(validation) if !validation.valid => {
                reporter.error("Validation failed:");
                for message in &validation.errors {
                    reporter.error(&format!("  - {message}"));
                }
                return Err(ValidationFailed {
                    errors: validation.errors,
                }
                .into());
            }
            Ok(_) => {
                *stage = FilingStage::Validated;
            }
            Err(err) => {
                warn!(transaction_id = %transaction_id, "validation status unavailable: {err:#}");
                reporter.warn("Could not check validation status (filing may still proceed)");
            }
        }
    }

    reporter.info("Submitting filing...");
    let closed = api
        .close_transaction(&transaction_id)
        .await
        .context("submit transaction")?;
    *stage = FilingStage::Closed;

    Ok(FilingOutcome {
        transaction_id: if closed.id.is_empty() {
            transaction_id
        } else {
            closed.id
        },
        status: closed.status,
    })
}
