// SPDX-License-Identifier: Apache-2.0
// © Folio Contributors <https://github.com/folio-dev/folio>
//! The portfolio document: one JSON-serializable record holding all
//! editable content, plus the built-in defaults and the shape-completion
//! rules used when overlaying stored data onto them.
//!
//! Field and enum spellings on the wire (`profileImage`, `ongoingWorks`,
//! `"in-progress"`, …) are fixed: documents persisted by earlier builds of
//! the page must keep parsing unchanged.

use crate::collection::fresh_id;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Upper bound for a skill's proficiency level.
pub const MAX_SKILL_LEVEL: u8 = 100;

/// The singleton portfolio document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioData {
    /// Display name.
    pub name: String,
    /// Short biography shown on the hero section.
    pub bio: String,
    /// Profile photo as a URL or inline data URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    /// Skill ratings. Items carry no id; identity is array position.
    pub skills: Vec<Skill>,
    /// Contact links by channel.
    pub contacts: Contacts,
    /// In-flight project items.
    pub ongoing_works: Vec<OngoingWork>,
    /// Courses and education items.
    pub courses: Vec<Course>,
    /// Certification items.
    pub certifications: Vec<Certification>,
}

/// A single skill rating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    /// Skill name.
    pub name: String,
    /// Proficiency, 0–100.
    pub level: u8,
    /// Which column the skill renders under.
    pub category: SkillCategory,
}

/// Skill grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    /// Hard/technical skills.
    Technical,
    /// Soft skills.
    Soft,
}

impl SkillCategory {
    /// Wire spelling of the category.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Technical => "technical",
            Self::Soft => "soft",
        }
    }
}

impl Skill {
    /// Build a skill with `level` clamped to [0, `MAX_SKILL_LEVEL`].
    pub fn new(name: impl Into<String>, level: u8, category: SkillCategory) -> Self {
        Self {
            name: name.into(),
            level: level.min(MAX_SKILL_LEVEL),
            category,
        }
    }

    /// The placeholder skill created by the "add skill" affordance.
    pub fn template(category: SkillCategory) -> Self {
        Self::new(format!("New {} skill", category.as_str()), 50, category)
    }

    /// Return this skill with its level clamped into range.
    #[must_use]
    pub fn clamped(mut self) -> Self {
        self.level = self.level.min(MAX_SKILL_LEVEL);
        self
    }
}

/// Contact links by channel. Absent channels are simply not rendered.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Contacts {
    /// Email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// GitHub profile URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    /// LinkedIn profile URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    /// Instagram profile URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    /// WhatsApp number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whatsapp: Option<String>,
}

/// An in-flight project item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OngoingWork {
    /// Creation-time id (Unix millis as a string).
    pub id: String,
    /// Project title.
    pub title: String,
    /// One-paragraph description.
    pub description: String,
    /// Pipeline stage.
    pub status: WorkStatus,
}

/// Pipeline stage of an ongoing work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkStatus {
    /// Not started yet.
    Planning,
    /// Actively being built.
    Development,
    /// Under test.
    Testing,
    /// In review.
    Review,
}

impl OngoingWork {
    /// The placeholder item created by the "add project" affordance.
    pub fn template() -> Self {
        Self {
            id: fresh_id(),
            title: "New Project".into(),
            description: "Project description...".into(),
            status: WorkStatus::Planning,
        }
    }
}

/// A course or education item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Creation-time id (Unix millis as a string).
    pub id: String,
    /// Course title.
    pub title: String,
    /// Institution name.
    pub institution: String,
    /// Free-form period, e.g. `"2020 - 2024"`.
    pub period: String,
    /// Completion state.
    pub status: CourseStatus,
}

/// Completion state of a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CourseStatus {
    /// Finished.
    Completed,
    /// Currently attending.
    InProgress,
    /// Planned for later.
    Upcoming,
}

impl Course {
    /// The placeholder item created by the "add course" affordance.
    pub fn template() -> Self {
        Self {
            id: fresh_id(),
            title: "New Course".into(),
            institution: "Institution Name".into(),
            period: "2024 - Present".into(),
            status: CourseStatus::InProgress,
        }
    }
}

/// A certification item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certification {
    /// Creation-time id (Unix millis as a string).
    pub id: String,
    /// Certification title.
    pub title: String,
    /// Issuing body.
    pub issuer: String,
    /// Issue date, `YYYY-MM-DD`.
    pub date: String,
    /// Public credential URL, when one exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credential_url: Option<String>,
}

impl Certification {
    /// The placeholder item created by the "add certification" affordance.
    /// `date` is supplied by the caller (the affordance uses today's date).
    pub fn template(date: impl Into<String>) -> Self {
        Self {
            id: fresh_id(),
            title: "New Certification".into(),
            issuer: "Certification Body".into(),
            date: date.into(),
            credential_url: None,
        }
    }
}

impl Default for PortfolioData {
    fn default() -> Self {
        Self {
            name: "Your Name".into(),
            bio: "A passionate developer creating amazing experiences with modern web \
                  technologies. Always learning, always building, always improving."
                .into(),
            profile_image: None,
            skills: vec![
                Skill::new("React", 90, SkillCategory::Technical),
                Skill::new("TypeScript", 85, SkillCategory::Technical),
                Skill::new("Node.js", 80, SkillCategory::Technical),
                Skill::new("Python", 75, SkillCategory::Technical),
                Skill::new("Problem Solving", 95, SkillCategory::Soft),
                Skill::new("Team Collaboration", 90, SkillCategory::Soft),
                Skill::new("Communication", 85, SkillCategory::Soft),
            ],
            contacts: Contacts {
                email: Some("your.email@example.com".into()),
                github: Some("https://github.com/yourusername".into()),
                linkedin: Some("https://linkedin.com/in/yourusername".into()),
                instagram: Some("https://instagram.com/yourusername".into()),
                whatsapp: Some("+1234567890".into()),
            },
            ongoing_works: vec![
                OngoingWork {
                    id: "1".into(),
                    title: "Modern Portfolio Website".into(),
                    description: "Building a responsive, dynamic portfolio with React and \
                                  TypeScript"
                        .into(),
                    status: WorkStatus::Development,
                },
                OngoingWork {
                    id: "2".into(),
                    title: "AI-Powered Task Manager".into(),
                    description: "Developing an intelligent task management system with ML \
                                  recommendations"
                        .into(),
                    status: WorkStatus::Planning,
                },
            ],
            courses: vec![
                Course {
                    id: "1".into(),
                    title: "Computer Science".into(),
                    institution: "University Name".into(),
                    period: "2020 - 2024".into(),
                    status: CourseStatus::Completed,
                },
                Course {
                    id: "2".into(),
                    title: "Advanced React Development".into(),
                    institution: "Online Platform".into(),
                    period: "2024 - Present".into(),
                    status: CourseStatus::InProgress,
                },
            ],
            certifications: vec![
                Certification {
                    id: "1".into(),
                    title: "AWS Certified Developer".into(),
                    issuer: "Amazon Web Services".into(),
                    date: "2024-01-15".into(),
                    credential_url: Some("https://aws.amazon.com/certification/".into()),
                },
                Certification {
                    id: "2".into(),
                    title: "React Professional Certificate".into(),
                    issuer: "Meta".into(),
                    date: "2023-11-20".into(),
                    credential_url: Some(
                        "https://coursera.org/professional-certificates/meta-react-native".into(),
                    ),
                },
            ],
        }
    }
}

impl PortfolioData {
    /// Overlay stored JSON onto the built-in defaults, field by field at the
    /// top level only. A field that is absent or fails to deserialize keeps
    /// its default; collections present in the stored value replace the
    /// default wholesale (no deep merge). A value that is not a JSON object
    /// yields pure defaults.
    #[must_use]
    pub fn from_stored(raw: &Value) -> Self {
        let Some(map) = raw.as_object() else {
            return Self::default();
        };
        let defaults = Self::default();
        let skills: Vec<Skill> = overlay(map, "skills", defaults.skills);
        Self {
            name: overlay(map, "name", defaults.name),
            bio: overlay(map, "bio", defaults.bio),
            profile_image: overlay(map, "profileImage", defaults.profile_image),
            skills: skills.into_iter().map(Skill::clamped).collect(),
            contacts: overlay(map, "contacts", defaults.contacts),
            ongoing_works: overlay(map, "ongoingWorks", defaults.ongoing_works),
            courses: overlay(map, "courses", defaults.courses),
            certifications: overlay(map, "certifications", defaults.certifications),
        }
    }
}

fn overlay<T>(map: &Map<String, Value>, key: &str, default: T) -> T
where
    T: DeserializeOwned,
{
    map.get(key)
        .and_then(|value| serde_json::from_value(value.clone()).ok())
        .unwrap_or(default)
}
