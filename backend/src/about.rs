use axum::{http::StatusCode, response::Response};
use horrorshow::{html, RenderOnce, TemplateBuffer};

use crate::layout::{into_response, Nav, Page};

const STYLE: &str = r"
#timeline {
	max-width: 800px;
	margin: 0 auto;
	border-left: 2px solid var(--border-color);
	padding-left: 24px;
}
#timeline .card {
	margin-bottom: 18px;
}
.member {
	text-align: center;
}
.member img {
	width: 128px;
	height: 128px;
	border-radius: 50%;
	object-fit: cover;
	margin-top: 20px;
}
.member .role {
	color: var(--primary);
	font-weight: bold;
}
.stat {
	text-align: center;
}
.stat .figure {
	font-size: 32px;
	font-weight: bold;
	color: var(--primary);
}
#science {
	max-width: 900px;
	margin: 32px auto 0 auto;
}
.value {
	text-align: center;
}
";

struct Milestone {
	year: &'static str,
	title: &'static str,
	description: &'static str
}

struct Member {
	name: &'static str,
	role: &'static str,
	bio: &'static str,
	image: &'static str,
	experience: &'static str
}

const TIMELINE: [Milestone; 5] = [
	Milestone {
		year: "1995",
		title: "Farm Founded",
		description: "Glenn Leigh establishes the family farm with a commitment to sustainable agriculture and quality livestock."
	},
	Milestone {
		year: "2005",
		title: "First Expansion",
		description: "Expanded operations to include premium beef production, implementing the first version of the Glenn Leigh method."
	},
	Milestone {
		year: "2015",
		title: "Organic Certification",
		description: "Achieved organic certification and began direct-to-consumer sales through local farmers markets."
	},
	Milestone {
		year: "2020",
		title: "Digital Transformation",
		description: "Launched online store and delivery service, bringing farm-fresh products directly to customers' homes."
	},
	Milestone {
		year: "2025",
		title: "Sustainable Innovation",
		description: "Implemented cutting-edge sustainable farming technologies and expanded product line to include pork and farm accessories."
	},
];

const TEAM: [Member; 4] = [
	Member {
		name: "Glenn Leigh",
		role: "Founder & CEO",
		bio: "Third-generation farmer with over 30 years of experience in sustainable agriculture. Passionate about preserving farming traditions while embracing innovation.",
		image: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=400&h=400&fit=crop&crop=face",
		experience: "30+ years"
	},
	Member {
		name: "Sarah Mitchell",
		role: "Farm Manager",
		bio: "Agricultural science graduate with expertise in organic farming practices and animal husbandry. Dedicated to maintaining the highest standards of animal welfare.",
		image: "https://images.unsplash.com/photo-1494790108755-2616b612b786?w=400&h=400&fit=crop&crop=face",
		experience: "15+ years"
	},
	Member {
		name: "Michael Chen",
		role: "Operations Director",
		bio: "MBA with a background in food supply chain management. Ensures our products reach customers with maximum freshness and quality.",
		image: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=400&h=400&fit=crop&crop=face",
		experience: "12+ years"
	},
	Member {
		name: "Emma Rodriguez",
		role: "Customer Relations",
		bio: "Passionate about connecting customers with farm-fresh products. Manages our community outreach and customer service programs.",
		image: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=400&h=400&fit=crop&crop=face",
		experience: "8+ years"
	},
];

const PRINCIPLES: [(&str, &str); 4] = [
	("Regenerative Agriculture", "Our farming practices focus on soil health, biodiversity, and ecosystem restoration. We use crop rotation, cover cropping, and minimal tillage to build healthy soil."),
	("Animal Welfare First", "All our livestock are raised in spacious, natural environments with access to pasture. We never use hormones or unnecessary antibiotics."),
	("Quality from Start to Finish", "From breeding to processing, every step is carefully monitored to ensure the highest quality. Our meat is dry-aged for optimal flavor and tenderness."),
	("Environmental Stewardship", "We implement water conservation, renewable energy, and waste reduction practices. Our carbon footprint is 40% lower than conventional farming."),
];

const STATS: [(&str, &str); 3] = [
	("40%", "Lower carbon footprint than conventional farming"),
	("3x", "Higher soil biodiversity index"),
	("100%", "Grass-fed and pasture-raised livestock"),
];

const RESULTS: [&str; 4] = [
	"Meat quality and nutritional density",
	"Soil health and water retention",
	"Animal welfare and stress reduction",
	"Environmental sustainability metrics",
];

const VALUES: [(&str, &str); 3] = [
	("Integrity", "Honest, transparent practices in everything we do"),
	("Community", "Building strong relationships with customers and neighbors"),
	("Tradition", "Honoring farming heritage while embracing innovation"),
];

pub async fn about_us() -> Response {
	into_response(StatusCode::OK, Page {
		title: "About Us - Glenn Leigh Farms LLC",
		description: "Learn about Glenn Leigh Farms' rich history, our dedicated team, and the science behind the Glenn Leigh method of sustainable farming.",
		current: Some(Nav::AboutUs),
		style: STYLE,
		content: AboutPage
	})
}

struct AboutPage;

impl RenderOnce for AboutPage {
	fn render_once(self, tmpl: &mut TemplateBuffer) {
		tmpl << html! {
			section(class = "hero") {
				h1 : "About Glenn Leigh Farms";
				p : "Three generations of farming excellence, sustainable practices, and unwavering commitment to quality. Discover the story behind our premium farm-fresh products.";
			}
			section {
				h2(class = "section-title") : "Our Farm History";
				p(class = "section-intro") : "From humble beginnings to becoming a leader in sustainable agriculture.";
				div(id = "timeline") {
					@ for milestone in &TIMELINE {
						div(class = "card") {
							div(class = "card-body") {
								span(class = "badge badge-gray") : milestone.year;
								h3 : milestone.title;
								p(class = "description") : milestone.description;
							}
						}
					}
				}
			}
			section(class = "muted") {
				h2(class = "section-title") : "Meet Our Team";
				p(class = "section-intro") : "Passionate individuals dedicated to sustainable farming and quality products.";
				div(class = "grid") {
					@ for member in &TEAM {
						div(class = "card member") {
							img(src = member.image, alt = member.name);
							div(class = "card-body") {
								h3 : member.name;
								p(class = "role") : member.role;
								span(class = "badge") : format!("{} experience", member.experience);
								p(class = "description") : member.bio;
							}
						}
					}
				}
			}
			section {
				h2(class = "section-title") : "The Glenn Leigh Method";
				p(class = "section-intro") : "Our scientifically-backed approach to sustainable farming that produces superior quality meat while caring for our environment.";
				div(class = "grid") {
					@ for (title, description) in PRINCIPLES {
						div(class = "card") {
							div(class = "card-body") {
								h3 : title;
								p(class = "description") : description;
							}
						}
					}
				}
				div(id = "science", class = "card") {
					div(class = "card-body") {
						h3(class = "section-title") : "The Science Behind Our Success";
						div(class = "grid") {
							@ for (figure, meaning) in STATS {
								div(class = "stat") {
									div(class = "figure") : figure;
									p(class = "muted-text") : meaning;
								}
							}
						}
						h4 : "Research-Backed Results";
						p(class = "muted-text") : "Our method has been validated by independent agricultural studies showing significant improvements in:";
						ul {
							@ for result in RESULTS {
								li : result;
							}
						}
					}
				}
			}
			section(class = "muted") {
				h2(class = "section-title") : "Our Core Values";
				div(class = "grid") {
					@ for (value, meaning) in VALUES {
						div(class = "value") {
							h3 : value;
							p(class = "muted-text") : meaning;
						}
					}
				}
			}
		};
	}
}
