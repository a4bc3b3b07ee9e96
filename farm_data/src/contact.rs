use serde::{Deserialize, Serialize};

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum InquiryType {
	General,
	Orders,
	Wholesale,
	Events,
	FarmVisits,
	Partnerships,
	Media,
	Other
}

impl InquiryType {
	pub const ALL: [Self; 8] = [
		Self::General,
		Self::Orders,
		Self::Wholesale,
		Self::Events,
		Self::FarmVisits,
		Self::Partnerships,
		Self::Media,
		Self::Other
	];

	#[must_use]
	pub fn slug(self) -> &'static str {
		match self {
			Self::General => "general",
			Self::Orders => "orders",
			Self::Wholesale => "wholesale",
			Self::Events => "events",
			Self::FarmVisits => "farm-visits",
			Self::Partnerships => "partnerships",
			Self::Media => "media",
			Self::Other => "other"
		}
	}

	#[must_use]
	pub fn label(self) -> &'static str {
		match self {
			Self::General => "General Inquiry",
			Self::Orders => "Orders & Products",
			Self::Wholesale => "Wholesale & Bulk Orders",
			Self::Events => "Events & Farmers Markets",
			Self::FarmVisits => "Farm Visits & Tours",
			Self::Partnerships => "Business Partnerships",
			Self::Media => "Media & Press",
			Self::Other => "Other"
		}
	}

	#[must_use]
	pub fn from_slug(slug: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|ty| ty.slug() == slug)
	}
}

/// Exactly what came in from the form. Everything's a string since nothing has been checked yet.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ContactForm {
	pub name: String,
	pub email: String,
	pub phone: String,
	pub company: String,
	pub inquiry_type: String,
	pub subject: String,
	pub message: String
}

/// A [`ContactForm`] that has everything it needs
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Inquiry {
	pub name: String,
	pub email: String,
	pub phone: Option<String>,
	pub company: Option<String>,
	pub inquiry_type: InquiryType,
	pub subject: String,
	pub message: String
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
	Name,
	Email,
	InquiryType,
	Subject,
	Message
}

impl Field {
	#[must_use]
	pub fn label(self) -> &'static str {
		match self {
			Self::Name => "Full Name",
			Self::Email => "Email Address",
			Self::InquiryType => "Inquiry Type",
			Self::Subject => "Subject",
			Self::Message => "Message"
		}
	}
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormProblem {
	Missing(Field),
	UnknownInquiryType(String)
}

impl std::fmt::Display for FormProblem {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Missing(field) => write!(f, "{} is required", field.label()),
			Self::UnknownInquiryType(ty) => write!(f, "'{ty}' isn't a type of inquiry we know about")
		}
	}
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormErr(pub Vec<FormProblem>);

impl std::fmt::Display for FormErr {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let problems = self.0.iter()
			.map(ToString::to_string)
			.collect::<Vec<_>>();
		f.write_str(&problems.join("; "))
	}
}

impl std::error::Error for FormErr {}

fn non_empty(s: &str) -> Option<String> {
	let s = s.trim();
	(!s.is_empty()).then(|| s.to_owned())
}

impl ContactForm {
	/// Only checks that the required fields have something in them (and that the inquiry type is
	/// one we offer); whether an email address is real is somebody else's problem.
	pub fn validate(&self) -> Result<Inquiry, FormErr> {
		let mut problems = Vec::new();

		let mut required = |field: Field, value: &str| {
			let value = non_empty(value);
			if value.is_none() {
				problems.push(FormProblem::Missing(field));
			}
			value
		};

		let name = required(Field::Name, &self.name);
		let email = required(Field::Email, &self.email);
		let inquiry_slug = required(Field::InquiryType, &self.inquiry_type);
		let subject = required(Field::Subject, &self.subject);
		let message = required(Field::Message, &self.message);

		let inquiry_type = inquiry_slug.and_then(|slug| {
			let ty = InquiryType::from_slug(&slug);
			if ty.is_none() {
				problems.push(FormProblem::UnknownInquiryType(slug));
			}
			ty
		});

		match (name, email, inquiry_type, subject, message) {
			(Some(name), Some(email), Some(inquiry_type), Some(subject), Some(message)) if problems.is_empty() =>
				Ok(Inquiry {
					name,
					email,
					phone: non_empty(&self.phone),
					company: non_empty(&self.company),
					inquiry_type,
					subject,
					message
				}),
			_ => Err(FormErr(problems))
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn filled_in() -> ContactForm {
		ContactForm {
			name: "Pat Doe".into(),
			email: "pat@example.com".into(),
			phone: String::new(),
			company: "  ".into(),
			inquiry_type: "farm-visits".into(),
			subject: "A tour".into(),
			message: "Can our class come by in October?".into()
		}
	}

	#[test]
	fn complete_form_validates() {
		let inquiry = filled_in().validate().unwrap();
		assert_eq!(inquiry.inquiry_type, InquiryType::FarmVisits);
		assert_eq!(inquiry.phone, None);
		assert_eq!(inquiry.company, None);
		assert_eq!(inquiry.name, "Pat Doe");
	}

	#[test]
	fn blank_form_lists_every_required_field() {
		let err = ContactForm::default().validate().unwrap_err();
		assert_eq!(err.0, vec![
			FormProblem::Missing(Field::Name),
			FormProblem::Missing(Field::Email),
			FormProblem::Missing(Field::InquiryType),
			FormProblem::Missing(Field::Subject),
			FormProblem::Missing(Field::Message),
		]);
	}

	#[test]
	fn whitespace_does_not_count() {
		let form = ContactForm { subject: " \t ".into(), ..filled_in() };
		assert_eq!(form.validate().unwrap_err().0, vec![FormProblem::Missing(Field::Subject)]);
	}

	#[test]
	fn unknown_inquiry_type() {
		let form = ContactForm { inquiry_type: "complaints".into(), ..filled_in() };
		let err = form.validate().unwrap_err();
		assert_eq!(err.0, vec![FormProblem::UnknownInquiryType("complaints".into())]);
		assert_eq!(err.to_string(), "'complaints' isn't a type of inquiry we know about");
	}

	#[test]
	fn every_inquiry_type_has_a_unique_slug() {
		for ty in InquiryType::ALL {
			assert_eq!(InquiryType::from_slug(ty.slug()), Some(ty));
		}
		assert_eq!(InquiryType::from_slug("all"), None);
		assert_eq!(InquiryType::from_slug(""), None);
	}
}
