mod catalog;
mod contact;
mod display;
mod events;
mod expansion;
mod faq;
mod filter;
mod updates;

pub use catalog::{Product, ProductCategory, PRODUCTS};
pub use contact::{ContactForm, Field, FormErr, FormProblem, Inquiry, InquiryType};
pub use display::{
	badge_style_for, capitalized, format_date, format_price, format_timestamp, star_rating,
	BadgeStyle, DateStyle, Star
};
pub use events::{Event, EventType, EVENTS};
pub use expansion::{Chevron, ExpansionSet};
pub use faq::{FaqCategory, FaqEntry, FAQ_ENTRIES};
pub use filter::{featured, filter, Kind, Pick, Record, Selection, UnknownKind};
pub use updates::{FarmUpdate, FARM_UPDATES, FEED_PAGE};

pub const FARM_NAME: &str = "Glenn Leigh Farms LLC";
pub const PHONE: &str = "(555) 123-4567";
pub const PHONE_LINK: &str = "tel:(555)123-4567";
pub const EMAIL: &str = "info@glennleighfarms.com";
pub const ADDRESS: &str = "123 Farm Road, Countryside, ST 12345";

pub const BASE_STYLE: &str = r#"
* {
	--background: #fbf8f1;
	--foreground: #2f2a1f;
	--muted: #ece6d6;
	--muted-text: #6d6453;
	--primary: #4f6b2f;
	--primary-text: #fbf8f1;
	--border-color: #d8cfb9;
	--card-background: #ffffff;
	box-sizing: border-box;
	font-family: ui-sans-serif, system-ui, sans-serif;
	color: var(--foreground);
}
body {
	margin: 0;
	background-color: var(--background);
}
h1, h2, h3 {
	font-family: Georgia, "Times New Roman", serif;
}
a {
	color: var(--primary);
	text-decoration: none;
}
section {
	padding: 48px 24px;
}
section.muted {
	background-color: var(--muted);
}
.hero {
	text-align: center;
	padding: 72px 24px;
	background: linear-gradient(135deg, #e4ead8, var(--background), var(--muted));
}
.hero p, .section-intro {
	max-width: 720px;
	margin: 16px auto;
	color: var(--muted-text);
	font-size: 18px;
}
.section-title {
	text-align: center;
}
.grid {
	display: grid;
	grid-template-columns: repeat(auto-fill, minmax(240px, 1fr));
	gap: 24px;
	max-width: 1200px;
	margin: 24px auto;
}
.card {
	background-color: var(--card-background);
	border: 1px solid var(--border-color);
	border-radius: 10px;
	overflow: hidden;
}
.card-body {
	padding: 16px 20px;
}
.card img {
	width: 100%;
	aspect-ratio: 4 / 3;
	object-fit: cover;
	background-color: var(--muted);
}
.card .description, .muted-text {
	color: var(--muted-text);
}
.button, button, input[type=submit] {
	display: inline-block;
	border: 1px solid var(--primary);
	border-radius: 6px;
	padding: 8px 14px;
	background-color: var(--primary);
	color: var(--primary-text);
	cursor: pointer;
	font-size: 15px;
}
.button.outline {
	background-color: transparent;
	color: var(--primary);
}
button:disabled {
	opacity: 0.5;
	cursor: not-allowed;
}
.badge {
	display: inline-block;
	border-radius: 999px;
	padding: 2px 10px;
	font-size: 13px;
	border: 1px solid var(--border-color);
}
.badge-green { background-color: #dcfce7; color: #166534; }
.badge-purple { background-color: #f3e8ff; color: #6b21a8; }
.badge-blue { background-color: #dbeafe; color: #1e40af; }
.badge-orange { background-color: #ffedd5; color: #9a3412; }
.badge-gray { background-color: #f3f4f6; color: #1f2937; }
.empty-state {
	text-align: center;
	padding: 48px 0;
	color: var(--muted-text);
}
input, textarea, select {
	width: 100%;
	padding: 8px 10px;
	border: 1px solid var(--border-color);
	border-radius: 6px;
	background-color: var(--card-background);
	font-size: 15px;
}
"#;
