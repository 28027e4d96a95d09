//! Domain Records
//!
//! Wire shapes of the platform's resources and their table columns. Only
//! the fields the dashboard shows are modeled; unknown fields are ignored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::resource::{FilterSelect, Resource};
use crate::table::{status_badge, status_badge_for, Cell, CellFormat, Column, Header};

/// A reference the backend may send populated or as a bare id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Related {
    Populated(RelatedDoc),
    Id(String),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedDoc {
    #[serde(rename = "_id", alias = "id", default)]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl Related {
    pub fn id(&self) -> &str {
        match self {
            Related::Populated(doc) => &doc.id,
            Related::Id(id) => id,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Related::Populated(doc) => doc
                .name
                .as_deref()
                .or(doc.title.as_deref())
                .or(doc.full_name.as_deref())
                .or(doc.email.as_deref())
                .unwrap_or(&doc.id),
            Related::Id(id) => id,
        }
    }
}

fn related(value: &Option<Related>, format: &CellFormat) -> Cell {
    match value {
        Some(r) => format.name(r.label()),
        None => Cell::Empty,
    }
}

fn money(value: Option<f64>) -> Cell {
    match value {
        Some(v) if v == 0.0 => Cell::Text("Free".to_string()),
        Some(v) => Cell::Text(format!("${:.2}", v)),
        None => Cell::Empty,
    }
}

fn minutes(value: Option<u32>) -> Cell {
    value.map_or(Cell::Empty, |m| Cell::Text(format!("{} min", m)))
}

fn number(value: Option<u32>) -> Cell {
    value.map_or(Cell::Empty, |n| Cell::Text(n.to_string()))
}

fn default_true() -> bool {
    true
}

const PUBLISH_STATES: &[(&str, &str)] = &[("published", "Published"), ("draft", "Draft")];

// ========================
// Category
// ========================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Resource for Category {
    const PATH: &'static str = "categories";
    const SINGULAR: &'static str = "category";
    const PLURAL: &'static str = "categories";

    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> String {
        self.name.clone()
    }

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("image", Header::Static("Image"), |c, _| Cell::ImageWithTooltip {
                src: c.image.clone(),
                alt: c.name.clone(),
                tooltip: c.name.clone(),
            }),
            Column::new("name", Header::Sortable { label: "Name", field: "name" }, |c, f| f.name(&c.name)),
            Column::new("description", Header::Static("Description"), |c, f| f.description(c.description.as_deref())),
            Column::new("status", Header::Static("Status"), |c, _| status_badge(c.is_active, "Active", "Inactive")),
            Column::new("createdAt", Header::Sortable { label: "Created", field: "createdAt" }, |c, f| {
                f.datetime(c.created_at.as_ref())
            }),
        ]
    }

    fn filters() -> Vec<FilterSelect> {
        vec![FilterSelect::new("status", "Status", &[("active", "Active"), ("inactive", "Inactive")])]
    }

    fn detail_fields(&self, format: &CellFormat) -> Vec<(&'static str, Cell)> {
        vec![
            ("Name", Cell::Text(self.name.clone())),
            ("Description", self.description.clone().map_or(Cell::Empty, Cell::Text)),
            ("Status", status_badge(self.is_active, "Active", "Inactive")),
            ("Created", format.datetime(self.created_at.as_ref())),
        ]
    }
}

// ========================
// Book
// ========================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub is_published: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Resource for Book {
    const PATH: &'static str = "books";
    const SINGULAR: &'static str = "book";
    const PLURAL: &'static str = "books";

    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> String {
        self.title.clone()
    }

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("cover", Header::Static("Cover"), |b, _| Cell::ImageWithTooltip {
                src: b.cover_image.clone(),
                alt: b.title.clone(),
                tooltip: b.author.clone().map_or_else(|| b.title.clone(), |a| format!("{} by {}", b.title, a)),
            }),
            Column::new("title", Header::Sortable { label: "Title", field: "title" }, |b, f| f.name(&b.title)),
            Column::new("author", Header::Static("Author"), |b, f| {
                b.author.as_deref().map_or(Cell::Empty, |a| f.name(a))
            }),
            Column::new("price", Header::Sortable { label: "Price", field: "price" }, |b, _| money(b.price)),
            Column::new("status", Header::Static("Status"), |b, _| status_badge(b.is_published, "Published", "Draft")),
            Column::new("createdAt", Header::Sortable { label: "Created", field: "createdAt" }, |b, f| {
                f.datetime(b.created_at.as_ref())
            }),
        ]
    }

    fn filters() -> Vec<FilterSelect> {
        vec![FilterSelect::new("status", "Status", PUBLISH_STATES)]
    }

    fn detail_fields(&self, format: &CellFormat) -> Vec<(&'static str, Cell)> {
        vec![
            ("Title", Cell::Text(self.title.clone())),
            ("Author", self.author.clone().map_or(Cell::Empty, Cell::Text)),
            ("Description", self.description.clone().map_or(Cell::Empty, Cell::Text)),
            ("Price", money(self.price)),
            ("Status", status_badge(self.is_published, "Published", "Draft")),
            ("Created", format.datetime(self.created_at.as_ref())),
        ]
    }
}

// ========================
// Course
// ========================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub category: Option<Related>,
    #[serde(default)]
    pub instructor: Option<Related>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Resource for Course {
    const PATH: &'static str = "courses";
    const SINGULAR: &'static str = "course";
    const PLURAL: &'static str = "courses";

    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> String {
        self.title.clone()
    }

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("course", Header::Sortable { label: "Course", field: "title" }, |c, f| {
                Cell::ImageWithTooltip {
                    src: c.thumbnail.clone(),
                    alt: f.name(&c.title).display_text(),
                    tooltip: c.title.clone(),
                }
            }),
            Column::new("category", Header::Static("Category"), |c, f| related(&c.category, f)),
            Column::new("instructor", Header::Static("Instructor"), |c, f| related(&c.instructor, f)),
            Column::new("price", Header::Sortable { label: "Price", field: "price" }, |c, _| money(c.price)),
            Column::new("status", Header::Static("Status"), |c, _| status_badge_for(&c.status, &["published"])),
            Column::new("createdAt", Header::Sortable { label: "Created", field: "createdAt" }, |c, f| {
                f.datetime(c.created_at.as_ref())
            }),
        ]
    }

    fn filters() -> Vec<FilterSelect> {
        vec![FilterSelect::new("status", "Status", PUBLISH_STATES)]
    }

    fn row_links(id: &str) -> Vec<(&'static str, String)> {
        vec![
            ("Sections", format!("/sections?courseId={}", id)),
            ("Lessons", format!("/lessons?courseId={}", id)),
        ]
    }

    fn detail_fields(&self, format: &CellFormat) -> Vec<(&'static str, Cell)> {
        vec![
            ("Title", Cell::Text(self.title.clone())),
            ("Description", self.description.clone().map_or(Cell::Empty, Cell::Text)),
            ("Category", self.category.as_ref().map_or(Cell::Empty, |c| Cell::Text(c.label().to_string()))),
            ("Instructor", self.instructor.as_ref().map_or(Cell::Empty, |c| Cell::Text(c.label().to_string()))),
            ("Price", money(self.price)),
            ("Status", status_badge_for(&self.status, &["published"])),
            ("Created", format.datetime(self.created_at.as_ref())),
        ]
    }
}

// ========================
// Section
// ========================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub course: Option<Related>,
    #[serde(default)]
    pub order: Option<u32>,
    #[serde(default)]
    pub lesson_count: Option<u32>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Resource for Section {
    const PATH: &'static str = "sections";
    const SINGULAR: &'static str = "section";
    const PLURAL: &'static str = "sections";

    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> String {
        self.title.clone()
    }

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("order", Header::Sortable { label: "#", field: "order" }, |s, _| number(s.order)),
            Column::new("title", Header::Sortable { label: "Title", field: "title" }, |s, f| f.name(&s.title)),
            Column::new("course", Header::Static("Course"), |s, f| related(&s.course, f)),
            Column::new("lessons", Header::Static("Lessons"), |s, _| number(s.lesson_count)),
            Column::new("createdAt", Header::Sortable { label: "Created", field: "createdAt" }, |s, f| {
                f.datetime(s.created_at.as_ref())
            }),
        ]
    }

    fn detail_fields(&self, format: &CellFormat) -> Vec<(&'static str, Cell)> {
        vec![
            ("Title", Cell::Text(self.title.clone())),
            ("Course", self.course.as_ref().map_or(Cell::Empty, |c| Cell::Text(c.label().to_string()))),
            ("Order", number(self.order)),
            ("Lessons", number(self.lesson_count)),
            ("Created", format.datetime(self.created_at.as_ref())),
        ]
    }
}

// ========================
// Lesson
// ========================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub course: Option<Related>,
    #[serde(default)]
    pub section: Option<Related>,
    /// Minutes
    #[serde(default)]
    pub duration: Option<u32>,
    #[serde(default)]
    pub is_preview: bool,
    #[serde(default)]
    pub order: Option<u32>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Resource for Lesson {
    const PATH: &'static str = "lessons";
    const SINGULAR: &'static str = "lesson";
    const PLURAL: &'static str = "lessons";

    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> String {
        self.title.clone()
    }

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("order", Header::Sortable { label: "#", field: "order" }, |l, _| number(l.order)),
            Column::new("title", Header::Sortable { label: "Title", field: "title" }, |l, f| f.name(&l.title)),
            Column::new("section", Header::Static("Section"), |l, f| related(&l.section, f)),
            Column::new("course", Header::Static("Course"), |l, f| related(&l.course, f)),
            Column::new("duration", Header::Static("Duration"), |l, _| minutes(l.duration)),
            Column::new("preview", Header::Static("Preview"), |l, _| status_badge(l.is_preview, "Free preview", "Locked")),
            Column::new("createdAt", Header::Sortable { label: "Created", field: "createdAt" }, |l, f| {
                f.datetime(l.created_at.as_ref())
            }),
        ]
    }

    fn detail_fields(&self, format: &CellFormat) -> Vec<(&'static str, Cell)> {
        vec![
            ("Title", Cell::Text(self.title.clone())),
            ("Description", self.description.clone().map_or(Cell::Empty, Cell::Text)),
            ("Course", self.course.as_ref().map_or(Cell::Empty, |c| Cell::Text(c.label().to_string()))),
            ("Section", self.section.as_ref().map_or(Cell::Empty, |s| Cell::Text(s.label().to_string()))),
            ("Duration", minutes(self.duration)),
            ("Preview", status_badge(self.is_preview, "Free preview", "Locked")),
            ("Created", format.datetime(self.created_at.as_ref())),
        ]
    }
}

// ========================
// Quiz
// ========================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub course: Option<Related>,
    #[serde(default)]
    pub passing_score: Option<u32>,
    #[serde(default)]
    pub question_count: Option<u32>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Resource for Quiz {
    const PATH: &'static str = "quizzes";
    const SINGULAR: &'static str = "quiz";
    const PLURAL: &'static str = "quizzes";

    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> String {
        self.title.clone()
    }

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("title", Header::Sortable { label: "Title", field: "title" }, |q, f| f.name(&q.title)),
            Column::new("description", Header::Static("Description"), |q, f| f.description(q.description.as_deref())),
            Column::new("course", Header::Static("Course"), |q, f| related(&q.course, f)),
            Column::new("questions", Header::Static("Questions"), |q, _| number(q.question_count)),
            Column::new("passingScore", Header::Static("Pass mark"), |q, _| {
                q.passing_score.map_or(Cell::Empty, |s| Cell::Text(format!("{}%", s)))
            }),
            Column::new("status", Header::Static("Status"), |q, _| status_badge_for(&q.status, &["published"])),
            Column::new("createdAt", Header::Sortable { label: "Created", field: "createdAt" }, |q, f| {
                f.datetime(q.created_at.as_ref())
            }),
        ]
    }

    fn filters() -> Vec<FilterSelect> {
        vec![FilterSelect::new("status", "Status", PUBLISH_STATES)]
    }

    fn row_links(id: &str) -> Vec<(&'static str, String)> {
        vec![
            ("Add questions", format!("/quizzes/{}/questions/new", id)),
            ("Questions", format!("/questions?quizId={}", id)),
        ]
    }

    fn detail_fields(&self, format: &CellFormat) -> Vec<(&'static str, Cell)> {
        vec![
            ("Title", Cell::Text(self.title.clone())),
            ("Description", self.description.clone().map_or(Cell::Empty, Cell::Text)),
            ("Course", self.course.as_ref().map_or(Cell::Empty, |c| Cell::Text(c.label().to_string()))),
            ("Questions", number(self.question_count)),
            ("Status", status_badge_for(&self.status, &["published"])),
            ("Created", format.datetime(self.created_at.as_ref())),
        ]
    }
}

// ========================
// Quiz question
// ========================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionOption {
    pub text: String,
    #[serde(default)]
    pub is_correct: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub quiz: Option<Related>,
    pub question: String,
    #[serde(default)]
    pub question_type: String,
    #[serde(default)]
    pub options: Vec<QuestionOption>,
    #[serde(default)]
    pub order: Option<u32>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl QuizQuestion {
    pub fn correct_answer(&self) -> Option<&str> {
        self.options.iter().find(|o| o.is_correct).map(|o| o.text.as_str())
    }
}

impl Resource for QuizQuestion {
    const PATH: &'static str = "quiz-questions";
    const SINGULAR: &'static str = "question";
    const PLURAL: &'static str = "questions";

    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> String {
        self.question.clone()
    }

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("order", Header::Sortable { label: "#", field: "order" }, |q, _| number(q.order)),
            Column::new("question", Header::Static("Question"), |q, f| f.description(Some(&q.question))),
            Column::new("type", Header::Static("Type"), |q, _| Cell::Text(q.question_type.clone())),
            Column::new("options", Header::Static("Options"), |q, _| Cell::Text(q.options.len().to_string())),
            Column::new("answer", Header::Static("Correct answer"), |q, f| {
                q.correct_answer().map_or(Cell::Empty, |a| f.name(a))
            }),
            Column::new("quiz", Header::Static("Quiz"), |q, f| related(&q.quiz, f)),
        ]
    }

    fn filters() -> Vec<FilterSelect> {
        vec![FilterSelect::new(
            "questionType",
            "Type",
            &[("multiple-choice", "Multiple choice"), ("true-false", "True / False")],
        )]
    }

    fn detail_fields(&self, _format: &CellFormat) -> Vec<(&'static str, Cell)> {
        vec![
            ("Question", Cell::Text(self.question.clone())),
            ("Type", Cell::Text(self.question_type.clone())),
            ("Options", Cell::Text(self.options.iter().map(|o| o.text.as_str()).collect::<Vec<_>>().join(" / "))),
            ("Correct answer", self.correct_answer().map_or(Cell::Empty, |a| Cell::Text(a.to_string()))),
        ]
    }
}

// ========================
// Certificate
// ========================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certificate {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub certificate_id: Option<String>,
    #[serde(default)]
    pub student: Option<Related>,
    #[serde(default)]
    pub course: Option<Related>,
    #[serde(default)]
    pub issued_at: Option<DateTime<Utc>>,
}

impl Resource for Certificate {
    const PATH: &'static str = "certificates";
    const SINGULAR: &'static str = "certificate";
    const PLURAL: &'static str = "certificates";

    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> String {
        self.certificate_id.clone().unwrap_or_else(|| self.id.clone())
    }

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("certificateId", Header::Static("Certificate No."), |c, _| {
                Cell::Text(c.certificate_id.clone().unwrap_or_else(|| c.id.clone()))
            }),
            Column::new("student", Header::Static("Student"), |c, f| related(&c.student, f)),
            Column::new("course", Header::Static("Course"), |c, f| related(&c.course, f)),
            Column::new("issuedAt", Header::Sortable { label: "Issued", field: "issuedAt" }, |c, f| {
                f.datetime(c.issued_at.as_ref())
            }),
        ]
    }

    fn detail_fields(&self, format: &CellFormat) -> Vec<(&'static str, Cell)> {
        vec![
            ("Certificate No.", Cell::Text(self.label())),
            ("Student", self.student.as_ref().map_or(Cell::Empty, |s| Cell::Text(s.label().to_string()))),
            ("Course", self.course.as_ref().map_or(Cell::Empty, |c| Cell::Text(c.label().to_string()))),
            ("Issued", format.datetime(self.issued_at.as_ref())),
        ]
    }
}

// ========================
// Live class
// ========================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveClass {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub course: Option<Related>,
    #[serde(default)]
    pub instructor: Option<Related>,
    #[serde(default)]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub duration: Option<u32>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub meeting_link: Option<String>,
}

impl Resource for LiveClass {
    const PATH: &'static str = "live-classes";
    const SINGULAR: &'static str = "live class";
    const PLURAL: &'static str = "live classes";

    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> String {
        self.title.clone()
    }

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("title", Header::Sortable { label: "Title", field: "title" }, |l, f| f.name(&l.title)),
            Column::new("course", Header::Static("Course"), |l, f| related(&l.course, f)),
            Column::new("instructor", Header::Static("Instructor"), |l, f| related(&l.instructor, f)),
            Column::new("startTime", Header::Sortable { label: "Starts", field: "startTime" }, |l, f| {
                f.datetime(l.start_time.as_ref())
            }),
            Column::new("duration", Header::Static("Duration"), |l, _| minutes(l.duration)),
            Column::new("status", Header::Static("Status"), |l, _| status_badge_for(&l.status, &["scheduled", "live"])),
        ]
    }

    fn filters() -> Vec<FilterSelect> {
        vec![FilterSelect::new(
            "status",
            "Status",
            &[("scheduled", "Scheduled"), ("live", "Live"), ("completed", "Completed"), ("cancelled", "Cancelled")],
        )]
    }

    fn detail_fields(&self, format: &CellFormat) -> Vec<(&'static str, Cell)> {
        vec![
            ("Title", Cell::Text(self.title.clone())),
            ("Description", self.description.clone().map_or(Cell::Empty, Cell::Text)),
            ("Course", self.course.as_ref().map_or(Cell::Empty, |c| Cell::Text(c.label().to_string()))),
            ("Starts", format.datetime(self.start_time.as_ref())),
            ("Duration", minutes(self.duration)),
            ("Meeting link", self.meeting_link.clone().map_or(Cell::Empty, Cell::Text)),
            ("Status", status_badge_for(&self.status, &["scheduled", "live"])),
        ]
    }
}

// ========================
// Support request
// ========================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportRequest {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub subject: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub user: Option<Related>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Resource for SupportRequest {
    const PATH: &'static str = "support";
    const SINGULAR: &'static str = "support request";
    const PLURAL: &'static str = "support requests";

    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> String {
        self.subject.clone()
    }

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("subject", Header::Static("Subject"), |s, f| f.name(&s.subject)),
            Column::new("message", Header::Static("Message"), |s, f| f.description(s.message.as_deref())),
            Column::new("user", Header::Static("From"), |s, f| related(&s.user, f)),
            Column::new("priority", Header::Static("Priority"), |s, _| {
                s.priority.as_deref().map_or(Cell::Empty, |p| status_badge_for(p, &["high"]))
            }),
            Column::new("status", Header::Static("Status"), |s, _| status_badge_for(&s.status, &["open", "in-progress"])),
            Column::new("createdAt", Header::Sortable { label: "Received", field: "createdAt" }, |s, f| {
                f.datetime(s.created_at.as_ref())
            }),
        ]
    }

    fn filters() -> Vec<FilterSelect> {
        vec![
            FilterSelect::new(
                "status",
                "Status",
                &[("open", "Open"), ("in-progress", "In progress"), ("resolved", "Resolved"), ("closed", "Closed")],
            ),
            FilterSelect::new("priority", "Priority", &[("low", "Low"), ("medium", "Medium"), ("high", "High")]),
        ]
    }

    fn detail_fields(&self, format: &CellFormat) -> Vec<(&'static str, Cell)> {
        vec![
            ("Subject", Cell::Text(self.subject.clone())),
            ("Message", self.message.clone().map_or(Cell::Empty, Cell::Text)),
            ("From", self.user.as_ref().map_or(Cell::Empty, |u| Cell::Text(u.label().to_string()))),
            ("Priority", self.priority.clone().map_or(Cell::Empty, Cell::Text)),
            ("Status", status_badge_for(&self.status, &["open", "in-progress"])),
            ("Received", format.datetime(self.created_at.as_ref())),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::ListQuery;
    use crate::table::TableBody;
    use serde_json::json;

    #[test]
    fn test_related_accepts_id_or_document() {
        let course: Course = serde_json::from_value(json!({
            "_id": "c1",
            "title": "Rust",
            "category": "cat-9",
            "instructor": {"_id": "u1", "fullName": "Ada Lovelace", "email": "ada@example.com"},
            "status": "published"
        }))
        .expect("course");
        assert_eq!(course.category.as_ref().map(Related::id), Some("cat-9"));
        assert_eq!(course.instructor.as_ref().map(Related::label), Some("Ada Lovelace"));
    }

    #[test]
    fn test_plain_id_alias() {
        let category: Category = serde_json::from_value(json!({"id": "k1", "name": "Design"})).expect("category");
        assert_eq!(category.id, "k1");
        assert!(category.is_active);
    }

    #[test]
    fn test_long_course_title_truncates_in_composite_cell() {
        let course: Course = serde_json::from_value(json!({
            "_id": "c1",
            "title": "The Complete Rust Programming Bootcamp 2024",
            "thumbnail": "https://cdn.example.com/c1.png",
            "status": "draft"
        }))
        .expect("course");
        let table = Course::render(&[course], &ListQuery::new(10), &CellFormat::default());
        let row = table.row("c1").expect("row");
        assert_eq!(
            row.cells[0],
            Cell::ImageWithTooltip {
                src: Some("https://cdn.example.com/c1.png".into()),
                alt: "The Complete Rus...".into(),
                tooltip: "The Complete Rust Programming Bootcamp 2024".into(),
            }
        );
    }

    #[test]
    fn test_empty_message_uses_plural() {
        let table = LiveClass::render(&[], &ListQuery::new(10), &CellFormat::default());
        let expected_colspan = LiveClass::columns().len() + 1;
        assert_eq!(
            table.body,
            TableBody::Empty { message: "No live classes found".into(), colspan: expected_colspan }
        );
        assert_eq!(LiveClass::title(), "All Live classes");
    }

    #[test]
    fn test_correct_answer_lookup() {
        let question: QuizQuestion = serde_json::from_value(json!({
            "_id": "q1",
            "question": "2 + 2?",
            "questionType": "multiple-choice",
            "options": [{"text": "3"}, {"text": "4", "isCorrect": true}]
        }))
        .expect("question");
        assert_eq!(question.correct_answer(), Some("4"));
    }
}
