use shared::domain::{Profile, ProfileSectionKind, Recommendation};
use url::Url;

use crate::{
    banner,
    tree::{Element, Node},
};

pub const JOB_CARD_CLASS: &str = "job-card";
pub const NOT_AVAILABLE: &str = "Not available";
pub const NO_ADDITIONAL_INSIGHTS: &str = "No additional insights";
pub const UNNAMED_JOB: &str = "Unnamed Job";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTier {
    Success,
    Warning,
    Secondary,
}

impl BadgeTier {
    pub fn for_percent(percent: f64) -> Self {
        if percent >= 80.0 {
            Self::Success
        } else if percent >= 60.0 {
            Self::Warning
        } else {
            Self::Secondary
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "bg-success",
            Self::Warning => "bg-warning",
            Self::Secondary => "bg-secondary",
        }
    }
}

fn heading(kind: ProfileSectionKind) -> &'static str {
    match kind {
        ProfileSectionKind::WorkStyle => "Work Style",
        ProfileSectionKind::Environment => "Ideal Environment",
        ProfileSectionKind::InteractionLevel => "Interaction Level",
        ProfileSectionKind::TaskPreference => "Task Preferences",
        ProfileSectionKind::AdditionalInsights => "Additional Insights",
    }
}

fn missing_description(kind: ProfileSectionKind) -> &'static str {
    match kind {
        ProfileSectionKind::AdditionalInsights => NO_ADDITIONAL_INSIGHTS,
        _ => NOT_AVAILABLE,
    }
}

/// Contents of the profile region: the legacy strengths list when present,
/// then the analysis sections.
pub fn profile_view(profile: &Profile) -> Vec<Node> {
    let mut nodes: Vec<Node> = Vec::new();

    let strengths = profile.strengths();
    if !strengths.is_empty() {
        nodes.push(
            Element::new("div")
                .class("mb-4")
                .child(Element::new("h3").text("Strengths"))
                .child(
                    Element::new("ul").id("new-strengths-list").children(
                        strengths
                            .iter()
                            .map(|strength| Node::from(Element::new("li").text(strength.as_str()))),
                    ),
                )
                .into(),
        );
    }

    let mut analysis = Element::new("div").class("analysis-section");
    for kind in ProfileSectionKind::ALL {
        let section = profile.section(kind);
        let description = section
            .and_then(|s| s.description.as_deref())
            .filter(|text| !text.is_empty())
            .unwrap_or(missing_description(kind));
        let explanation = section
            .and_then(|s| s.explanation.as_deref())
            .unwrap_or_default();

        analysis = analysis
            .child(Element::new("h3").text(heading(kind)))
            .child(
                Element::new("p")
                    .class("mb-2")
                    .attr("data-section", kind.key())
                    .child(Element::new("strong").text(description)),
            )
            .child(
                Element::new("p")
                    .class("text-muted mb-4")
                    .attr("data-section", kind.key())
                    .text(explanation),
            );
    }
    nodes.push(analysis.into());

    nodes
}

/// Contents of the recommendations region. An empty list yields a single
/// informational banner.
pub fn recommendation_views(recommendations: &[Recommendation]) -> Vec<Node> {
    if recommendations.is_empty() {
        return vec![banner::info_banner(banner::NO_RECOMMENDATIONS)];
    }
    recommendations.iter().map(job_card).collect()
}

pub fn match_badge(percent: f64) -> Node {
    let tier = BadgeTier::for_percent(percent);
    Element::new("span")
        .class(&format!("badge rounded-pill {}", tier.css_class()))
        .text(format!("{percent}% Match"))
        .into()
}

pub fn job_card(job: &Recommendation) -> Node {
    let mut location_line = Element::new("p").class("mb-1");
    if let Some(company) = job.company() {
        location_line = location_line
            .child(Element::new("i").class("bi bi-building me-1"))
            .text(company);
    }
    if job.company().is_some() && job.location().is_some() {
        location_line = location_line.text(" - ");
    }
    if let Some(location) = job.location() {
        location_line = location_line
            .child(Element::new("i").class("bi bi-geo-alt me-1"))
            .text(location);
    }

    let header = Element::new("div")
        .class("d-flex justify-content-between align-items-start")
        .child(
            Element::new("div")
                .child(
                    Element::new("h3")
                        .class("h5 mb-1")
                        .text(job.title().unwrap_or(UNNAMED_JOB)),
                )
                .child(location_line),
        )
        .child(
            Element::new("div")
                .class("match-score")
                .child(match_badge(job.display_percent())),
        );

    let mut card = Element::new("div")
        .class("job-card mb-4 p-4 border rounded shadow-sm")
        .child(header)
        .child(
            Element::new("div").class("mt-3").child(
                Element::new("p")
                    .class("text-muted mb-2")
                    .text(job.summary().unwrap_or_default()),
            ),
        );

    let highlights = job.highlights();
    if !highlights.is_empty() {
        card = card.child(tag_list(
            "Why this matches your profile:",
            "bi bi-check-circle-fill text-success me-1",
            highlights,
        ));
    }

    let challenges = job.challenges();
    if !challenges.is_empty() {
        card = card.child(tag_list(
            "Potential challenges:",
            "bi bi-info-circle-fill text-warning me-1",
            challenges,
        ));
    }

    if let Some(url) = job.url().filter(|url| is_web_link(url)) {
        card = card.child(
            Element::new("div").class("mt-3").child(
                Element::new("a")
                    .attr("href", url)
                    .class("btn btn-outline-primary btn-sm")
                    .attr("target", "_blank")
                    .attr("rel", "noopener noreferrer")
                    .child(Element::new("i").class("bi bi-box-arrow-up-right me-1"))
                    .text("View Full Job Posting"),
            ),
        );
    }

    card.into()
}

fn tag_list(caption: &str, icon: &str, tags: &[String]) -> Element {
    Element::new("div")
        .class("highlights-section mt-2")
        .child(
            Element::new("p")
                .class("mb-1 small text-secondary")
                .text(caption),
        )
        .child(
            Element::new("div").class("d-flex flex-wrap").children(tags.iter().map(|tag| {
                Node::from(
                    Element::new("span")
                        .class("badge bg-light text-dark me-2 mb-1 p-2")
                        .child(Element::new("i").class(icon))
                        .text(tag.as_str()),
                )
            })),
        )
}

/// Only absolute `http`/`https` postings are linked.
fn is_web_link(raw: &str) -> bool {
    Url::parse(raw.trim()).is_ok_and(|url| matches!(url.scheme(), "http" | "https"))
}
