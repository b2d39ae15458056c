use std::{collections::BTreeMap, fmt};

use serde::{Deserialize, Serialize};

use crate::{decode, error::ContractError};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(#[serde(deserialize_with = "decode::string_or_number")] pub String);

        impl $name {
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }
    };
}

id_newtype!(QuestionId);
id_newtype!(AssessmentId);

impl AssessmentId {
    /// Accepts a non-blank identifier, e.g. from the `assessment_id` query parameter.
    pub fn parse(raw: &str) -> Result<Self, ContractError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ContractError::EmptyAssessmentId);
        }
        Ok(Self(trimmed.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    #[default]
    SingleChoice,
    FreeResponse,
    /// Unrecognized type string; rendered like a choice question.
    #[serde(other)]
    Other,
}

impl QuestionKind {
    pub fn is_free_response(self) -> bool {
        self == Self::FreeResponse
    }
}

/// One `(value, label)` pair, encoded on the wire as a two-element array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceOption(
    #[serde(deserialize_with = "decode::string_or_number")] pub String,
    pub String,
);

impl ChoiceOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self(value.into(), label.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    pub fn label(&self) -> &str {
        &self.1
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    #[serde(default, deserialize_with = "decode::lenient_text")]
    pub text: Option<String>,
    #[serde(rename = "type", default, deserialize_with = "decode::or_default")]
    pub kind: QuestionKind,
    #[serde(default, deserialize_with = "decode::flag")]
    pub optional: bool,
    #[serde(
        default,
        deserialize_with = "decode::lenient_list",
        skip_serializing_if = "Option::is_none"
    )]
    pub options: Option<Vec<ChoiceOption>>,
}

impl Question {
    /// Prompt text, empty when the backend sent none.
    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or_default()
    }

    /// Form field name shared by every input of this question.
    pub fn field_name(&self) -> String {
        format!("q{}", self.id)
    }

    pub fn options(&self) -> &[ChoiceOption] {
        self.options.as_deref().unwrap_or_default()
    }

    pub fn is_required(&self) -> bool {
        !self.optional
    }
}

/// Form field name → submitted value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet(BTreeMap<String, String>);

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.0.insert(field.into(), value.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, String)> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileSection {
    #[serde(default, deserialize_with = "decode::lenient_text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "decode::lenient_text")]
    pub explanation: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileSectionKind {
    WorkStyle,
    Environment,
    InteractionLevel,
    TaskPreference,
    AdditionalInsights,
}

impl ProfileSectionKind {
    /// Display order of the profile sections.
    pub const ALL: [Self; 5] = [
        Self::WorkStyle,
        Self::Environment,
        Self::InteractionLevel,
        Self::TaskPreference,
        Self::AdditionalInsights,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::WorkStyle => "work_style",
            Self::Environment => "environment",
            Self::InteractionLevel => "interaction_level",
            Self::TaskPreference => "task_preference",
            Self::AdditionalInsights => "additional_insights",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default, deserialize_with = "decode::lenient")]
    pub work_style: Option<ProfileSection>,
    #[serde(default, deserialize_with = "decode::lenient")]
    pub environment: Option<ProfileSection>,
    #[serde(default, deserialize_with = "decode::lenient")]
    pub interaction_level: Option<ProfileSection>,
    #[serde(default, deserialize_with = "decode::lenient")]
    pub task_preference: Option<ProfileSection>,
    #[serde(default, deserialize_with = "decode::lenient")]
    pub additional_insights: Option<ProfileSection>,
    /// Legacy flat list kept by older assessments.
    #[serde(default, deserialize_with = "decode::lenient_strings")]
    pub strengths: Option<Vec<String>>,
}

impl Profile {
    pub fn section(&self, kind: ProfileSectionKind) -> Option<&ProfileSection> {
        match kind {
            ProfileSectionKind::WorkStyle => self.work_style.as_ref(),
            ProfileSectionKind::Environment => self.environment.as_ref(),
            ProfileSectionKind::InteractionLevel => self.interaction_level.as_ref(),
            ProfileSectionKind::TaskPreference => self.task_preference.as_ref(),
            ProfileSectionKind::AdditionalInsights => self.additional_insights.as_ref(),
        }
    }

    pub fn strengths(&self) -> &[String] {
        self.strengths.as_deref().unwrap_or_default()
    }
}

/// Fit score as sent by the backend.
///
/// The contract carries two encodings: a JSON number is already a 0–100
/// percentage, while a numeric string is a 0–1 fraction. Both are accepted
/// until the backend settles on one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MatchScore {
    Percent(f64),
    Fraction(String),
}

impl MatchScore {
    /// Percentage to display. Numbers pass through, strings are scaled and
    /// rounded; an unparseable string counts as zero.
    pub fn display_percent(&self) -> f64 {
        match self {
            Self::Percent(value) => *value,
            Self::Fraction(raw) => raw
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|value| value.is_finite())
                .map(|value| (value * 100.0).round())
                .unwrap_or(0.0),
        }
    }

    fn is_present(&self) -> bool {
        match self {
            Self::Percent(value) => *value != 0.0 && !value.is_nan(),
            Self::Fraction(raw) => !raw.is_empty(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(default, deserialize_with = "decode::lenient_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "decode::lenient_text")]
    pub company: Option<String>,
    #[serde(default, deserialize_with = "decode::lenient_text")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "decode::lenient_text")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "decode::lenient")]
    pub match_score: Option<MatchScore>,
    #[serde(default, deserialize_with = "decode::lenient")]
    pub fit_score: Option<MatchScore>,
    #[serde(default, deserialize_with = "decode::lenient_text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "decode::lenient_text")]
    pub reasoning: Option<String>,
    #[serde(default, deserialize_with = "decode::lenient_strings")]
    pub strengths: Option<Vec<String>>,
    #[serde(default, deserialize_with = "decode::lenient_strings")]
    pub highlights: Option<Vec<String>>,
    #[serde(default, deserialize_with = "decode::lenient_strings")]
    pub challenges: Option<Vec<String>>,
    #[serde(default, deserialize_with = "decode::lenient_strings")]
    pub considerations: Option<Vec<String>>,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|text| !text.is_empty())
}

impl Recommendation {
    pub fn title(&self) -> Option<&str> {
        non_empty(&self.title)
    }

    pub fn company(&self) -> Option<&str> {
        non_empty(&self.company)
    }

    pub fn location(&self) -> Option<&str> {
        non_empty(&self.location)
    }

    pub fn url(&self) -> Option<&str> {
        non_empty(&self.url)
    }

    /// `match_score`, else `fit_score`.
    pub fn score(&self) -> Option<&MatchScore> {
        self.match_score
            .as_ref()
            .filter(|score| score.is_present())
            .or_else(|| self.fit_score.as_ref().filter(|score| score.is_present()))
    }

    pub fn display_percent(&self) -> f64 {
        self.score().map(MatchScore::display_percent).unwrap_or(0.0)
    }

    /// `description`, else `reasoning`.
    pub fn summary(&self) -> Option<&str> {
        non_empty(&self.description).or_else(|| non_empty(&self.reasoning))
    }

    /// `strengths`, else `highlights`.
    pub fn highlights(&self) -> &[String] {
        self.strengths
            .as_deref()
            .or(self.highlights.as_deref())
            .unwrap_or_default()
    }

    /// `challenges`, else `considerations`.
    pub fn challenges(&self) -> &[String] {
        self.challenges
            .as_deref()
            .or(self.considerations.as_deref())
            .unwrap_or_default()
    }
}
