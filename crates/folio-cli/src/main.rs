// SPDX-License-Identifier: Apache-2.0
// © Folio Contributors <https://github.com/folio-dev/folio>
//! Folio CLI
//!
//! Terminal front-end over the portfolio core: shows the document and, once
//! edit mode is unlocked, edits fields and collections in place. All state
//! lives under the platform config dir via the filesystem store.

use anyhow::{anyhow, bail, Result};
use clap::Parser;
use folio_core::{
    collection::indexed, read_data_url, Certification, CollectionEditor, Course, CourseStatus,
    DocumentField, DocumentStore, EditGate, KvService, OngoingWork, Palette, PortfolioData, Prefs,
    Skill, SkillCategory, ToggleOutcome, WorkStatus, DEFAULT_EDIT_SECRET,
};
use folio_store_fs::FsKvStore;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Command to execute
    #[clap(subcommand)]
    cmd: Command,
}

#[derive(clap::Subcommand, Debug)]
enum Command {
    /// Print the current document
    Show,
    /// Unlock edit mode with the password
    Unlock {
        /// Edit-mode password
        password: String,
    },
    /// Lock edit mode
    Lock,
    /// Toggle edit mode (prompts for the password when locked)
    Toggle,
    /// Set the display name
    SetName {
        /// New name
        name: String,
    },
    /// Set the biography
    SetBio {
        /// New bio text
        bio: String,
    },
    /// Set the profile photo from an image file (stored as a data URL)
    SetPhoto {
        /// Path to the image file
        path: PathBuf,
    },
    /// Clear the profile photo
    ClearPhoto,
    /// Set a contact link
    SetContact {
        /// Channel: email, github, linkedin, instagram or whatsapp
        channel: String,
        /// Link or address; omit to clear the channel
        value: Option<String>,
    },
    /// Add a skill
    AddSkill {
        /// Skill name
        name: String,
        /// Proficiency 0-100
        #[clap(long, default_value_t = 50)]
        level: u8,
        /// Category: technical or soft
        #[clap(long, default_value = "technical")]
        category: String,
    },
    /// Replace the skill at a position
    EditSkill {
        /// Zero-based position
        index: usize,
        /// New name
        name: String,
        /// Proficiency 0-100
        #[clap(long, default_value_t = 50)]
        level: u8,
        /// Category: technical or soft
        #[clap(long, default_value = "technical")]
        category: String,
    },
    /// Remove the skill at a position
    RemoveSkill {
        /// Zero-based position
        index: usize,
    },
    /// Add a course (omitted fields use the placeholder values)
    AddCourse {
        /// Course title
        #[clap(long)]
        title: Option<String>,
        /// Institution name
        #[clap(long)]
        institution: Option<String>,
        /// Free-form period
        #[clap(long)]
        period: Option<String>,
        /// Status: completed, in-progress or upcoming
        #[clap(long)]
        status: Option<String>,
    },
    /// Edit a course by id (omitted fields keep their value)
    EditCourse {
        /// Course id
        id: String,
        /// Course title
        #[clap(long)]
        title: Option<String>,
        /// Institution name
        #[clap(long)]
        institution: Option<String>,
        /// Free-form period
        #[clap(long)]
        period: Option<String>,
        /// Status: completed, in-progress or upcoming
        #[clap(long)]
        status: Option<String>,
    },
    /// Remove a course by id
    RemoveCourse {
        /// Course id
        id: String,
    },
    /// Add an ongoing work (omitted fields use the placeholder values)
    AddWork {
        /// Project title
        #[clap(long)]
        title: Option<String>,
        /// Description
        #[clap(long)]
        description: Option<String>,
        /// Status: planning, development, testing or review
        #[clap(long)]
        status: Option<String>,
    },
    /// Edit an ongoing work by id (omitted fields keep their value)
    EditWork {
        /// Work id
        id: String,
        /// Project title
        #[clap(long)]
        title: Option<String>,
        /// Description
        #[clap(long)]
        description: Option<String>,
        /// Status: planning, development, testing or review
        #[clap(long)]
        status: Option<String>,
    },
    /// Remove an ongoing work by id
    RemoveWork {
        /// Work id
        id: String,
    },
    /// Add a certification (omitted fields use the placeholder values)
    AddCert {
        /// Issue date, YYYY-MM-DD; defaults to today
        #[clap(long)]
        date: Option<String>,
        /// Certification title
        #[clap(long)]
        title: Option<String>,
        /// Issuing body
        #[clap(long)]
        issuer: Option<String>,
        /// Public credential URL
        #[clap(long)]
        credential_url: Option<String>,
    },
    /// Edit a certification by id (omitted fields keep their value)
    EditCert {
        /// Certification id
        id: String,
        /// Certification title
        #[clap(long)]
        title: Option<String>,
        /// Issuing body
        #[clap(long)]
        issuer: Option<String>,
        /// Issue date, YYYY-MM-DD
        #[clap(long)]
        date: Option<String>,
        /// Public credential URL
        #[clap(long)]
        credential_url: Option<String>,
    },
    /// Remove a certification by id
    RemoveCert {
        /// Certification id
        id: String,
    },
    /// Toggle between light and dark theme
    Theme,
    /// Select a color palette: blue-violet or sunset
    SetPalette {
        /// Palette name
        palette: String,
    },
}

/// Storage lives under the platform config dir unless `FOLIO_CONFIG_DIR`
/// points somewhere else (used by tests and portable setups).
fn service() -> Result<KvService<FsKvStore>> {
    let store = match std::env::var_os("FOLIO_CONFIG_DIR") {
        Some(dir) => FsKvStore::with_base(PathBuf::from(dir))?,
        None => FsKvStore::new()?,
    };
    Ok(KvService::new(store))
}

fn gate() -> Result<EditGate<FsKvStore>> {
    Ok(EditGate::open(service()?, DEFAULT_EDIT_SECRET))
}

/// Every mutating command goes through here; the document is only editable
/// while the gate is unlocked.
fn store_for_editing() -> Result<DocumentStore<FsKvStore>> {
    if !gate()?.is_unlocked() {
        bail!("edit mode is locked; run `folio unlock <password>` first");
    }
    Ok(DocumentStore::open(service()?))
}

fn parse_category(raw: &str) -> Result<SkillCategory> {
    match raw {
        "technical" => Ok(SkillCategory::Technical),
        "soft" => Ok(SkillCategory::Soft),
        other => Err(anyhow!("unknown skill category: {other}")),
    }
}

fn parse_course_status(raw: &str) -> Result<CourseStatus> {
    match raw {
        "completed" => Ok(CourseStatus::Completed),
        "in-progress" => Ok(CourseStatus::InProgress),
        "upcoming" => Ok(CourseStatus::Upcoming),
        other => Err(anyhow!("unknown course status: {other}")),
    }
}

fn parse_work_status(raw: &str) -> Result<WorkStatus> {
    match raw {
        "planning" => Ok(WorkStatus::Planning),
        "development" => Ok(WorkStatus::Development),
        "testing" => Ok(WorkStatus::Testing),
        "review" => Ok(WorkStatus::Review),
        other => Err(anyhow!("unknown work status: {other}")),
    }
}

fn course_editor() -> CollectionEditor<Course, impl Fn(&Course) -> &str> {
    CollectionEditor::new(|course: &Course| course.id.as_str())
}

fn work_editor() -> CollectionEditor<OngoingWork, impl Fn(&OngoingWork) -> &str> {
    CollectionEditor::new(|work: &OngoingWork| work.id.as_str())
}

fn cert_editor() -> CollectionEditor<Certification, impl Fn(&Certification) -> &str> {
    CollectionEditor::new(|cert: &Certification| cert.id.as_str())
}

fn print_document(doc: &PortfolioData) {
    println!("{}", doc.name);
    println!("{}\n", doc.bio);
    if let Some(image) = &doc.profile_image {
        let label = if image.starts_with("data:") {
            "(inline data URL)"
        } else {
            image.as_str()
        };
        println!("photo: {label}\n");
    }

    println!("skills:");
    for (index, skill) in doc.skills.iter().enumerate() {
        println!(
            "  [{index}] {} - {}/100 ({})",
            skill.name,
            skill.level,
            skill.category.as_str()
        );
    }

    println!("\nongoing works:");
    for work in &doc.ongoing_works {
        println!("  [{}] {} ({:?})", work.id, work.title, work.status);
    }

    println!("\ncourses:");
    for course in &doc.courses {
        println!(
            "  [{}] {} @ {} ({}, {:?})",
            course.id, course.title, course.institution, course.period, course.status
        );
    }

    println!("\ncertifications:");
    for cert in &doc.certifications {
        println!("  [{}] {} - {} ({})", cert.id, cert.title, cert.issuer, cert.date);
    }

    println!("\ncontacts:");
    for (channel, value) in [
        ("email", &doc.contacts.email),
        ("github", &doc.contacts.github),
        ("linkedin", &doc.contacts.linkedin),
        ("instagram", &doc.contacts.instagram),
        ("whatsapp", &doc.contacts.whatsapp),
    ] {
        if let Some(value) = value {
            println!("  {channel}: {value}");
        }
    }
}

#[allow(clippy::too_many_lines)]
fn main() -> Result<()> {
    tracing_subscriber::fmt().with_target(false).init();
    let args = Args::parse();

    match args.cmd {
        Command::Show => {
            let store = DocumentStore::open(service()?);
            print_document(store.document());
        }
        Command::Unlock { password } => {
            let mut gate = gate()?;
            if gate.enable(&password) {
                println!("edit mode unlocked");
            } else {
                bail!("incorrect password");
            }
        }
        Command::Lock => {
            gate()?.disable();
            println!("edit mode locked");
        }
        Command::Toggle => match gate()?.toggle() {
            ToggleOutcome::Locked => println!("edit mode locked"),
            ToggleOutcome::PasswordRequired => {
                println!("edit mode is locked; run `folio unlock <password>`");
            }
        },
        Command::SetName { name } => {
            store_for_editing()?.update(DocumentField::Name(name));
        }
        Command::SetBio { bio } => {
            store_for_editing()?.update(DocumentField::Bio(bio));
        }
        Command::SetPhoto { path } => {
            let mut store = store_for_editing()?;
            let url = read_data_url(&path)?;
            store.update(DocumentField::ProfileImage(Some(url)));
        }
        Command::ClearPhoto => {
            store_for_editing()?.update(DocumentField::ProfileImage(None));
        }
        Command::SetContact { channel, value } => {
            let mut store = store_for_editing()?;
            let mut contacts = store.document().contacts.clone();
            let slot = match channel.as_str() {
                "email" => &mut contacts.email,
                "github" => &mut contacts.github,
                "linkedin" => &mut contacts.linkedin,
                "instagram" => &mut contacts.instagram,
                "whatsapp" => &mut contacts.whatsapp,
                other => bail!("unknown contact channel: {other}"),
            };
            *slot = value;
            store.update(DocumentField::Contacts(contacts));
        }
        Command::AddSkill {
            name,
            level,
            category,
        } => {
            let mut store = store_for_editing()?;
            let skill = Skill::new(name, level, parse_category(&category)?);
            let skills = indexed::add(&store.document().skills, skill);
            store.update(DocumentField::Skills(skills));
        }
        Command::EditSkill {
            index,
            name,
            level,
            category,
        } => {
            let mut store = store_for_editing()?;
            let skill = Skill::new(name, level, parse_category(&category)?);
            let skills = indexed::edit(&store.document().skills, index, skill);
            store.update(DocumentField::Skills(skills));
        }
        Command::RemoveSkill { index } => {
            let mut store = store_for_editing()?;
            let skills = indexed::remove(&store.document().skills, index);
            store.update(DocumentField::Skills(skills));
        }
        Command::AddCourse {
            title,
            institution,
            period,
            status,
        } => {
            let mut store = store_for_editing()?;
            let mut course = Course::template();
            if let Some(title) = title {
                course.title = title;
            }
            if let Some(institution) = institution {
                course.institution = institution;
            }
            if let Some(period) = period {
                course.period = period;
            }
            if let Some(status) = status {
                course.status = parse_course_status(&status)?;
            }
            let courses = course_editor().add(&store.document().courses, course);
            store.update(DocumentField::Courses(courses));
        }
        Command::EditCourse {
            id,
            title,
            institution,
            period,
            status,
        } => {
            let mut store = store_for_editing()?;
            let mut course = store
                .document()
                .courses
                .iter()
                .find(|course| course.id == id)
                .cloned()
                .ok_or_else(|| anyhow!("no course with id {id}"))?;
            if let Some(title) = title {
                course.title = title;
            }
            if let Some(institution) = institution {
                course.institution = institution;
            }
            if let Some(period) = period {
                course.period = period;
            }
            if let Some(status) = status {
                course.status = parse_course_status(&status)?;
            }
            let courses = course_editor().edit(&store.document().courses, &id, course);
            store.update(DocumentField::Courses(courses));
        }
        Command::RemoveCourse { id } => {
            let mut store = store_for_editing()?;
            let courses = course_editor().remove(&store.document().courses, &id);
            store.update(DocumentField::Courses(courses));
        }
        Command::AddWork {
            title,
            description,
            status,
        } => {
            let mut store = store_for_editing()?;
            let mut work = OngoingWork::template();
            if let Some(title) = title {
                work.title = title;
            }
            if let Some(description) = description {
                work.description = description;
            }
            if let Some(status) = status {
                work.status = parse_work_status(&status)?;
            }
            let works = work_editor().add(&store.document().ongoing_works, work);
            store.update(DocumentField::OngoingWorks(works));
        }
        Command::EditWork {
            id,
            title,
            description,
            status,
        } => {
            let mut store = store_for_editing()?;
            let mut work = store
                .document()
                .ongoing_works
                .iter()
                .find(|work| work.id == id)
                .cloned()
                .ok_or_else(|| anyhow!("no ongoing work with id {id}"))?;
            if let Some(title) = title {
                work.title = title;
            }
            if let Some(description) = description {
                work.description = description;
            }
            if let Some(status) = status {
                work.status = parse_work_status(&status)?;
            }
            let works = work_editor().edit(&store.document().ongoing_works, &id, work);
            store.update(DocumentField::OngoingWorks(works));
        }
        Command::RemoveWork { id } => {
            let mut store = store_for_editing()?;
            let works = work_editor().remove(&store.document().ongoing_works, &id);
            store.update(DocumentField::OngoingWorks(works));
        }
        Command::AddCert {
            date,
            title,
            issuer,
            credential_url,
        } => {
            let mut store = store_for_editing()?;
            let date =
                date.unwrap_or_else(|| chrono::Local::now().format("%Y-%m-%d").to_string());
            let mut cert = Certification::template(date);
            if let Some(title) = title {
                cert.title = title;
            }
            if let Some(issuer) = issuer {
                cert.issuer = issuer;
            }
            cert.credential_url = credential_url;
            let certs = cert_editor().add(&store.document().certifications, cert);
            store.update(DocumentField::Certifications(certs));
        }
        Command::EditCert {
            id,
            title,
            issuer,
            date,
            credential_url,
        } => {
            let mut store = store_for_editing()?;
            let mut cert = store
                .document()
                .certifications
                .iter()
                .find(|cert| cert.id == id)
                .cloned()
                .ok_or_else(|| anyhow!("no certification with id {id}"))?;
            if let Some(title) = title {
                cert.title = title;
            }
            if let Some(issuer) = issuer {
                cert.issuer = issuer;
            }
            if let Some(date) = date {
                cert.date = date;
            }
            if let Some(credential_url) = credential_url {
                cert.credential_url = Some(credential_url);
            }
            let certs = cert_editor().edit(&store.document().certifications, &id, cert);
            store.update(DocumentField::Certifications(certs));
        }
        Command::RemoveCert { id } => {
            let mut store = store_for_editing()?;
            let certs = cert_editor().remove(&store.document().certifications, &id);
            store.update(DocumentField::Certifications(certs));
        }
        Command::Theme => {
            let mut prefs = Prefs::open(service()?);
            println!("theme: {}", prefs.toggle_theme().as_str());
        }
        Command::SetPalette { palette } => {
            let palette = Palette::parse(&palette)
                .ok_or_else(|| anyhow!("unknown palette: {palette}"))?;
            Prefs::open(service()?).set_palette(palette);
        }
    }

    Ok(())
}
