use std::time::Duration;
use farm_data::Inquiry;
use uuid::Uuid;

/// Where contact-form inquiries go. Nothing is actually sent anywhere yet; we just wait a bit so
/// the form behaves like it's talking to something.
#[derive(Clone, Debug)]
pub struct Submitter {
	pub delay: Duration,
	/// Makes every submission fail so that the error page can be seen (and tested)
	pub force_failure: bool
}

impl Default for Submitter {
	fn default() -> Self {
		Self {
			delay: Duration::from_millis(1000),
			force_failure: false
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Receipt {
	pub reference: Uuid
}

#[derive(Debug, PartialEq, Eq)]
pub enum SubmitErr {
	Simulated
}

impl SubmitErr {
	pub fn title(&self) -> &'static str {
		match self {
			Self::Simulated => "Error sending message"
		}
	}

	pub fn description(&self) -> &'static str {
		match self {
			Self::Simulated => "Please try again or contact us directly."
		}
	}
}

impl std::fmt::Display for SubmitErr {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Simulated => f.write_str("submission failed (forced by CONTACT_FORCE_FAILURE)")
		}
	}
}

impl std::error::Error for SubmitErr {}

impl Submitter {
	pub async fn submit(&self, inquiry: &Inquiry) -> Result<Receipt, SubmitErr> {
		tracing::info!(
			"Submitting {} inquiry from {} <{}>: '{}'",
			inquiry.inquiry_type.slug(),
			inquiry.name,
			inquiry.email,
			inquiry.subject
		);

		tokio::time::sleep(self.delay).await;

		if self.force_failure {
			tracing::warn!("Failing inquiry from {} on purpose", inquiry.email);
			return Err(SubmitErr::Simulated);
		}

		let receipt = Receipt { reference: Uuid::new_v4() };
		tracing::info!("Inquiry from {} accepted as {}", inquiry.email, receipt.reference);
		Ok(receipt)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use farm_data::InquiryType;

	fn inquiry() -> Inquiry {
		Inquiry {
			name: "Pat".into(),
			email: "pat@example.com".into(),
			phone: None,
			company: Some("Pat's Diner".into()),
			inquiry_type: InquiryType::Wholesale,
			subject: "Weekly order".into(),
			message: "Do you deliver on Tuesdays?".into()
		}
	}

	#[tokio::test(start_paused = true)]
	async fn succeeds_after_the_delay() {
		let submitter = Submitter::default();
		let started = tokio::time::Instant::now();

		let receipt = submitter.submit(&inquiry()).await;

		assert!(receipt.is_ok());
		assert!(started.elapsed() >= Duration::from_millis(1000));
	}

	#[tokio::test]
	async fn forced_failure() {
		let submitter = Submitter { delay: Duration::ZERO, force_failure: true };
		let err = submitter.submit(&inquiry()).await.unwrap_err();

		assert_eq!(err, SubmitErr::Simulated);
		assert_eq!(err.title(), "Error sending message");
	}
}
