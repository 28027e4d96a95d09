//! Question Draft Workflow
//!
//! A quiz's questions are authored locally one at a time, collected into an
//! ordered draft list, and posted together in one bulk request.
//!
//! Drafts live in an arena keyed by a stable [`DraftId`] with a separate
//! order vector, and the correct answer is tracked by option id, so moving
//! things around never changes what they are.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::api::{Api, MessageResponse, Transport};
use crate::error::{AdminError, AdminResult, FormSection, ValidationErrors};

/// Endpoint receiving a whole draft list at once
pub const BULK_QUESTIONS_PATH: &str = "quiz-questions/bulk";

pub const MIN_OPTIONS: usize = 2;
pub const MAX_OPTIONS: usize = 6;
const DEFAULT_OPTIONS: usize = 4;

/// Client-side identity of a draft question or option
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DraftId(u64);

impl fmt::Display for DraftId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "draft-{}", self.0)
    }
}

#[derive(Debug, Clone, Default)]
pub struct IdAllocator {
    last: u64,
}

impl IdAllocator {
    pub fn next_id(&mut self) -> DraftId {
        self.last += 1;
        DraftId(self.last)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionType {
    #[default]
    MultipleChoice,
    TrueFalse,
}

impl QuestionType {
    pub const ALL: [QuestionType; 2] = [QuestionType::MultipleChoice, QuestionType::TrueFalse];

    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionType::MultipleChoice => "multiple-choice",
            QuestionType::TrueFalse => "true-false",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }

    pub fn label(&self) -> &'static str {
        match self {
            QuestionType::MultipleChoice => "Multiple choice",
            QuestionType::TrueFalse => "True / False",
        }
    }

    /// Whether option texts and count are fixed
    pub fn fixed_options(&self) -> bool {
        matches!(self, QuestionType::TrueFalse)
    }

    fn blank_options(&self, ids: &mut IdAllocator) -> Vec<DraftOption> {
        match self {
            QuestionType::MultipleChoice => (0..DEFAULT_OPTIONS)
                .map(|_| DraftOption { id: ids.next_id(), text: String::new() })
                .collect(),
            QuestionType::TrueFalse => ["True", "False"]
                .into_iter()
                .map(|text| DraftOption { id: ids.next_id(), text: text.to_string() })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftOption {
    pub id: DraftId,
    pub text: String,
}

/// A validated question waiting in the draft list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftQuestion {
    pub id: DraftId,
    pub text: String,
    pub question_type: QuestionType,
    pub options: Vec<DraftOption>,
    pub correct_option_id: Option<DraftId>,
    /// 1-based position in the draft list
    pub order: u32,
}

impl DraftQuestion {
    pub fn validate(&self) -> ValidationErrors {
        validate_parts(&self.text, &self.options, self.correct_option_id)
    }

    pub fn correct_option(&self) -> Option<&DraftOption> {
        self.correct_option_id
            .and_then(|id| self.options.iter().find(|o| o.id == id))
    }
}

fn validate_parts(text: &str, options: &[DraftOption], correct: Option<DraftId>) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    if text.trim().is_empty() {
        errors.push("text", FormSection::Details, "Question text is required");
    }
    if options.len() < MIN_OPTIONS {
        errors.push("options", FormSection::Options, format!("At least {} options are required", MIN_OPTIONS));
    }
    for (index, option) in options.iter().enumerate() {
        if option.text.trim().is_empty() {
            errors.push(
                format!("options.{}", index),
                FormSection::Options,
                format!("Option {} is empty", index + 1),
            );
        }
    }
    match correct {
        Some(id) if options.iter().any(|o| o.id == id) => {}
        _ => errors.push("correctOption", FormSection::Options, "Choose the correct option"),
    }
    errors
}

/// Move the element at `from` so it ends up at `to`, shifting the rest.
pub fn reorder<T>(items: &mut Vec<T>, from: usize, to: usize) -> bool {
    if from >= items.len() || to >= items.len() || from == to {
        return false;
    }
    let item = items.remove(from);
    items.insert(to, item);
    true
}

/// The single-question form
#[derive(Debug, Clone)]
pub struct QuestionForm {
    editing: Option<DraftId>,
    text: String,
    question_type: QuestionType,
    options: Vec<DraftOption>,
    correct: Option<DraftId>,
    section: FormSection,
    errors: ValidationErrors,
}

impl QuestionForm {
    pub fn blank(ids: &mut IdAllocator) -> Self {
        let question_type = QuestionType::default();
        Self {
            editing: None,
            text: String::new(),
            question_type,
            options: question_type.blank_options(ids),
            correct: None,
            section: FormSection::Details,
            errors: ValidationErrors::new(),
        }
    }

    fn from_draft(draft: &DraftQuestion) -> Self {
        Self {
            editing: Some(draft.id),
            text: draft.text.clone(),
            question_type: draft.question_type,
            options: draft.options.clone(),
            correct: draft.correct_option_id,
            section: FormSection::Details,
            errors: ValidationErrors::new(),
        }
    }

    /// Draft being edited, if this form was loaded from the list
    pub fn editing(&self) -> Option<DraftId> {
        self.editing
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    pub fn question_type(&self) -> QuestionType {
        self.question_type
    }

    /// Switching type replaces the options with that type's blank set.
    pub fn set_question_type(&mut self, question_type: QuestionType, ids: &mut IdAllocator) {
        if question_type == self.question_type {
            return;
        }
        self.question_type = question_type;
        self.options = question_type.blank_options(ids);
        self.correct = None;
    }

    pub fn options(&self) -> &[DraftOption] {
        &self.options
    }

    pub fn set_option_text(&mut self, id: DraftId, text: &str) -> bool {
        if self.question_type.fixed_options() {
            return false;
        }
        match self.options.iter_mut().find(|o| o.id == id) {
            Some(option) => {
                option.text = text.to_string();
                true
            }
            None => false,
        }
    }

    pub fn can_add_option(&self) -> bool {
        !self.question_type.fixed_options() && self.options.len() < MAX_OPTIONS
    }

    pub fn can_remove_option(&self) -> bool {
        !self.question_type.fixed_options() && self.options.len() > MIN_OPTIONS
    }

    pub fn add_option(&mut self, ids: &mut IdAllocator) -> Option<DraftId> {
        if !self.can_add_option() {
            return None;
        }
        let id = ids.next_id();
        self.options.push(DraftOption { id, text: String::new() });
        Some(id)
    }

    pub fn remove_option(&mut self, id: DraftId) -> bool {
        if !self.can_remove_option() {
            return false;
        }
        let before = self.options.len();
        self.options.retain(|o| o.id != id);
        if self.correct == Some(id) {
            self.correct = None;
        }
        self.options.len() != before
    }

    /// Drop target for a dragged option
    pub fn move_option(&mut self, id: DraftId, to: usize) -> bool {
        match self.options.iter().position(|o| o.id == id) {
            Some(from) => reorder(&mut self.options, from, to),
            None => false,
        }
    }

    /// Up/down buttons; `delta` is -1 or 1
    pub fn shift_option(&mut self, id: DraftId, delta: isize) -> bool {
        let Some(from) = self.options.iter().position(|o| o.id == id) else {
            return false;
        };
        match from.checked_add_signed(delta) {
            Some(to) => reorder(&mut self.options, from, to),
            None => false,
        }
    }

    pub fn correct(&self) -> Option<DraftId> {
        self.correct
    }

    pub fn set_correct(&mut self, id: DraftId) -> bool {
        if self.options.iter().any(|o| o.id == id) {
            self.correct = Some(id);
            true
        } else {
            false
        }
    }

    pub fn section(&self) -> FormSection {
        self.section
    }

    pub fn set_section(&mut self, section: FormSection) {
        self.section = section;
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Check the form; failures are kept for display and the form jumps to
    /// the tab holding the first invalid field.
    pub fn validate(&mut self) -> Result<(), ValidationErrors> {
        let errors = validate_parts(&self.text, &self.options, self.correct);
        if let Some(section) = errors.first_section() {
            self.section = section;
        }
        self.errors = errors.clone();
        errors.into_result()
    }

    fn freeze(&self, id: DraftId, order: u32) -> DraftQuestion {
        DraftQuestion {
            id,
            text: self.text.trim().to_string(),
            question_type: self.question_type,
            options: self
                .options
                .iter()
                .map(|o| DraftOption { id: o.id, text: o.text.trim().to_string() })
                .collect(),
            correct_option_id: self.correct,
            order,
        }
    }
}

/// Ordered draft questions
#[derive(Debug, Clone, Default)]
pub struct DraftList {
    items: HashMap<DraftId, DraftQuestion>,
    order: Vec<DraftId>,
}

impl DraftList {
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn get(&self, id: DraftId) -> Option<&DraftQuestion> {
        self.items.get(&id)
    }

    pub fn position(&self, id: DraftId) -> Option<usize> {
        self.order.iter().position(|d| *d == id)
    }

    pub fn ids(&self) -> &[DraftId] {
        &self.order
    }

    pub fn iter(&self) -> impl Iterator<Item = &DraftQuestion> {
        self.order.iter().filter_map(|id| self.items.get(id))
    }

    /// Append at the end; `order` becomes the new length.
    pub fn push(&mut self, mut question: DraftQuestion) {
        self.order.retain(|id| *id != question.id);
        self.order.push(question.id);
        question.order = self.order.len() as u32;
        self.items.insert(question.id, question);
    }

    /// Swap in new content for an existing draft, keeping its position.
    pub fn replace(&mut self, mut question: DraftQuestion) -> bool {
        let Some(index) = self.position(question.id) else {
            return false;
        };
        question.order = index as u32 + 1;
        self.items.insert(question.id, question);
        true
    }

    pub fn remove(&mut self, id: DraftId) -> Option<DraftQuestion> {
        let removed = self.items.remove(&id)?;
        self.order.retain(|d| *d != id);
        self.renumber();
        Some(removed)
    }

    pub fn move_to(&mut self, id: DraftId, to: usize) -> bool {
        let Some(from) = self.position(id) else {
            return false;
        };
        let moved = reorder(&mut self.order, from, to);
        if moved {
            self.renumber();
        }
        moved
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.order.clear();
    }

    fn renumber(&mut self) {
        for (index, id) in self.order.iter().enumerate() {
            if let Some(item) = self.items.get_mut(id) {
                item.order = index as u32 + 1;
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionPayload {
    pub text: String,
    pub order: u32,
    pub is_correct: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionPayload {
    pub question: String,
    pub question_type: QuestionType,
    pub order: u32,
    pub options: Vec<OptionPayload>,
}

/// Body of the bulk create request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitPayload {
    pub quiz_id: String,
    pub questions: Vec<QuestionPayload>,
}

impl From<&DraftQuestion> for QuestionPayload {
    fn from(draft: &DraftQuestion) -> Self {
        QuestionPayload {
            question: draft.text.clone(),
            question_type: draft.question_type,
            order: draft.order,
            options: draft
                .options
                .iter()
                .enumerate()
                .map(|(index, option)| OptionPayload {
                    text: option.text.clone(),
                    order: index as u32 + 1,
                    is_correct: draft.correct_option_id == Some(option.id),
                })
                .collect(),
        }
    }
}

/// Why a submission never left the browser
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitBlocked {
    #[error("Add at least one question before submitting")]
    NoDrafts,

    #[error("A submission is already in progress")]
    InFlight,

    #[error("Question {position}: {errors}")]
    Invalid { position: usize, id: DraftId, errors: ValidationErrors },
}

impl SubmitBlocked {
    /// Tab to open when the blocked item is loaded for fixing
    pub fn section(&self) -> Option<FormSection> {
        match self {
            SubmitBlocked::Invalid { errors, .. } => errors.first_section(),
            _ => None,
        }
    }
}

impl From<SubmitBlocked> for AdminError {
    fn from(blocked: SubmitBlocked) -> Self {
        match blocked {
            SubmitBlocked::Invalid { errors, .. } => AdminError::Validation(errors),
            other => {
                let mut errors = ValidationErrors::new();
                errors.push("questions", FormSection::Details, other.to_string());
                AdminError::Validation(errors)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuilderPhase {
    /// Nothing appended yet
    Empty,
    Appended,
    Submitting,
}

/// Form plus draft list for one quiz
#[derive(Debug, Clone)]
pub struct QuestionBuilder {
    quiz_id: String,
    ids: IdAllocator,
    form: QuestionForm,
    drafts: DraftList,
    submitting: bool,
}

impl QuestionBuilder {
    pub fn new(quiz_id: impl Into<String>) -> Self {
        let mut ids = IdAllocator::default();
        let form = QuestionForm::blank(&mut ids);
        Self { quiz_id: quiz_id.into(), ids, form, drafts: DraftList::default(), submitting: false }
    }

    pub fn quiz_id(&self) -> &str {
        &self.quiz_id
    }

    pub fn phase(&self) -> BuilderPhase {
        if self.submitting {
            BuilderPhase::Submitting
        } else if self.drafts.is_empty() {
            BuilderPhase::Empty
        } else {
            BuilderPhase::Appended
        }
    }

    pub fn form(&self) -> &QuestionForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut QuestionForm {
        &mut self.form
    }

    pub fn drafts(&self) -> &DraftList {
        &self.drafts
    }

    pub fn drafts_mut(&mut self) -> &mut DraftList {
        &mut self.drafts
    }

    pub fn set_question_type(&mut self, question_type: QuestionType) {
        self.form.set_question_type(question_type, &mut self.ids);
    }

    pub fn add_option(&mut self) -> Option<DraftId> {
        self.form.add_option(&mut self.ids)
    }

    /// Validate the form and append it (or write it back when editing).
    /// On failure nothing is appended and the errors stay on the form.
    pub fn commit_form(&mut self) -> Result<DraftId, ValidationErrors> {
        if let Err(errors) = self.form.validate() {
            log::debug!("question form rejected: {}", errors);
            return Err(errors);
        }

        let id = match self.form.editing() {
            Some(id) if self.drafts.get(id).is_some() => {
                let order = self.drafts.get(id).map_or(0, |d| d.order);
                self.drafts.replace(self.form.freeze(id, order));
                id
            }
            _ => {
                let id = self.ids.next_id();
                self.drafts.push(self.form.freeze(id, 0));
                id
            }
        };
        log::debug!("draft {} saved, {} in list", id, self.drafts.len());
        self.reset_form();
        Ok(id)
    }

    /// Load an appended draft back into the form.
    pub fn edit_draft(&mut self, id: DraftId) -> bool {
        match self.drafts.get(id) {
            Some(draft) => {
                self.form = QuestionForm::from_draft(draft);
                true
            }
            None => false,
        }
    }

    pub fn reset_form(&mut self) {
        self.form = QuestionForm::blank(&mut self.ids);
    }

    pub fn remove_draft(&mut self, id: DraftId) -> bool {
        if self.form.editing() == Some(id) {
            self.reset_form();
        }
        self.drafts.remove(id).is_some()
    }

    pub fn move_draft(&mut self, id: DraftId, to: usize) -> bool {
        self.drafts.move_to(id, to)
    }

    /// Re-check every draft and build the request body. Marks the builder
    /// as submitting until [`finish_submit`](Self::finish_submit).
    pub fn begin_submit(&mut self) -> Result<SubmitPayload, SubmitBlocked> {
        if self.submitting {
            return Err(SubmitBlocked::InFlight);
        }
        if self.drafts.is_empty() {
            return Err(SubmitBlocked::NoDrafts);
        }
        for (index, draft) in self.drafts.iter().enumerate() {
            let errors = draft.validate();
            if !errors.is_empty() {
                return Err(SubmitBlocked::Invalid { position: index + 1, id: draft.id, errors });
            }
        }
        self.submitting = true;
        Ok(SubmitPayload {
            quiz_id: self.quiz_id.clone(),
            questions: self.drafts.iter().map(QuestionPayload::from).collect(),
        })
    }

    /// Success clears all draft state; failure keeps it for another try.
    pub fn finish_submit<T>(&mut self, result: &AdminResult<T>) {
        self.submitting = false;
        match result {
            Ok(_) => {
                log::info!("submitted {} questions for quiz {}", self.drafts.len(), self.quiz_id);
                self.drafts.clear();
                self.reset_form();
            }
            Err(err) => log::warn!("question submit failed, keeping {} drafts: {}", self.drafts.len(), err),
        }
    }

    pub async fn submit<T: Transport>(&mut self, api: &Api<T>) -> AdminResult<MessageResponse> {
        let payload = self.begin_submit()?;
        let result = api.create(BULK_QUESTIONS_PATH, &payload).await;
        self.finish_submit(&result);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::RecordingTransport;
    use crate::api::Method;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn fill(builder: &mut QuestionBuilder, text: &str, options: &[&str], correct: usize) {
        builder.form_mut().set_text(text);
        let ids: Vec<DraftId> = builder.form().options().iter().map(|o| o.id).collect();
        for (id, option) in ids.iter().zip(options) {
            builder.form_mut().set_option_text(*id, option);
        }
        builder.form_mut().set_correct(ids[correct]);
    }

    fn appended(builder: &mut QuestionBuilder, text: &str) -> DraftId {
        fill(builder, text, &["a", "b", "c", "d"], 0);
        builder.commit_form().expect("valid question")
    }

    #[test]
    fn test_empty_option_rejects_append() {
        let mut builder = QuestionBuilder::new("quiz-1");
        fill(&mut builder, "Capital of France?", &["Paris", "", "Rome", "Berlin"], 0);

        let errors = builder.commit_form().unwrap_err();
        assert_eq!(builder.drafts().len(), 0);
        assert_eq!(builder.phase(), BuilderPhase::Empty);
        assert_eq!(errors.for_field("options.1"), Some("Option 2 is empty"));
        assert_eq!(builder.form().section(), FormSection::Options);
        assert_eq!(builder.form().text(), "Capital of France?");
    }

    #[test]
    fn test_missing_text_focuses_details() {
        let mut builder = QuestionBuilder::new("quiz-1");
        builder.form_mut().set_section(FormSection::Options);
        fill(&mut builder, "  ", &["a", "b", "c", "d"], 2);

        let errors = builder.commit_form().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(builder.form().section(), FormSection::Details);
    }

    #[test]
    fn test_correct_option_required() {
        let mut builder = QuestionBuilder::new("quiz-1");
        builder.form_mut().set_text("Pick one");
        let ids: Vec<DraftId> = builder.form().options().iter().map(|o| o.id).collect();
        for id in ids {
            builder.form_mut().set_option_text(id, "x");
        }
        let errors = builder.commit_form().unwrap_err();
        assert_eq!(errors.for_field("correctOption"), Some("Choose the correct option"));
    }

    #[test]
    fn test_append_resets_form_and_numbers() {
        let mut builder = QuestionBuilder::new("quiz-1");
        let first = appended(&mut builder, "One");
        let second = appended(&mut builder, "Two");

        assert_eq!(builder.phase(), BuilderPhase::Appended);
        assert_eq!(builder.drafts().get(first).map(|d| d.order), Some(1));
        assert_eq!(builder.drafts().get(second).map(|d| d.order), Some(2));
        assert_eq!(builder.form().text(), "");
        assert_eq!(builder.form().options().len(), 4);
        assert!(builder.form().options().iter().all(|o| o.text.is_empty()));
    }

    #[test]
    fn test_remove_renumbers_survivors() {
        let mut builder = QuestionBuilder::new("quiz-1");
        let a = appended(&mut builder, "A");
        let b = appended(&mut builder, "B");
        let c = appended(&mut builder, "C");

        assert!(builder.remove_draft(a));
        assert_eq!(builder.drafts().ids(), &[b, c]);
        let orders: Vec<u32> = builder.drafts().iter().map(|d| d.order).collect();
        assert_eq!(orders, vec![1, 2]);
    }

    #[test]
    fn test_move_rewrites_every_order() {
        let mut builder = QuestionBuilder::new("quiz-1");
        let a = appended(&mut builder, "A");
        let b = appended(&mut builder, "B");
        let c = appended(&mut builder, "C");

        assert!(builder.move_draft(c, 0));
        let listed: Vec<(DraftId, u32)> = builder.drafts().iter().map(|d| (d.id, d.order)).collect();
        assert_eq!(listed, vec![(c, 1), (a, 2), (b, 3)]);
        assert!(!builder.move_draft(c, 0));
    }

    #[test]
    fn test_edit_replaces_in_place() {
        let mut builder = QuestionBuilder::new("quiz-1");
        let a = appended(&mut builder, "A");
        let b = appended(&mut builder, "B");

        assert!(builder.edit_draft(a));
        assert_eq!(builder.form().editing(), Some(a));
        builder.form_mut().set_text("A, revised");
        assert_eq!(builder.commit_form(), Ok(a));

        assert_eq!(builder.drafts().ids(), &[a, b]);
        let draft = builder.drafts().get(a).expect("draft");
        assert_eq!(draft.text, "A, revised");
        assert_eq!(draft.order, 1);
        assert_eq!(builder.form().editing(), None);
    }

    #[test]
    fn test_option_bounds() {
        let mut builder = QuestionBuilder::new("quiz-1");
        assert!(builder.add_option().is_some());
        assert!(builder.add_option().is_some());
        assert_eq!(builder.form().options().len(), MAX_OPTIONS);
        assert!(builder.add_option().is_none());

        let ids: Vec<DraftId> = builder.form().options().iter().map(|o| o.id).collect();
        builder.form_mut().set_correct(ids[0]);
        for id in &ids[..4] {
            assert!(builder.form_mut().remove_option(*id));
        }
        assert_eq!(builder.form().options().len(), MIN_OPTIONS);
        assert!(!builder.form_mut().remove_option(ids[4]));
        assert_eq!(builder.form().correct(), None);
    }

    #[test]
    fn test_true_false_options_are_fixed() {
        let mut builder = QuestionBuilder::new("quiz-1");
        builder.set_question_type(QuestionType::TrueFalse);
        let texts: Vec<&str> = builder.form().options().iter().map(|o| o.text.as_str()).collect();
        assert_eq!(texts, vec!["True", "False"]);
        assert!(builder.add_option().is_none());
        let first = builder.form().options()[0].id;
        assert!(!builder.form_mut().set_option_text(first, "Yes"));
    }

    #[test]
    fn test_reordered_options_keep_correct_identity() {
        let mut builder = QuestionBuilder::new("quiz-1");
        fill(&mut builder, "Largest planet?", &["Mars", "Jupiter", "Venus", "Earth"], 1);
        let ids: Vec<DraftId> = builder.form().options().iter().map(|o| o.id).collect();
        let jupiter = ids[1];

        assert!(builder.form_mut().move_option(jupiter, 3));
        assert!(builder.form_mut().shift_option(ids[0], 1));
        assert_eq!(builder.form().correct(), Some(jupiter));
        builder.commit_form().expect("valid");

        let payload = builder.begin_submit().expect("payload");
        let options = &payload.questions[0].options;
        let texts: Vec<&str> = options.iter().map(|o| o.text.as_str()).collect();
        assert_eq!(texts, vec!["Venus", "Mars", "Earth", "Jupiter"]);
        let orders: Vec<u32> = options.iter().map(|o| o.order).collect();
        assert_eq!(orders, vec![1, 2, 3, 4]);
        let correct: Vec<bool> = options.iter().map(|o| o.is_correct).collect();
        assert_eq!(correct, vec![false, false, false, true]);
    }

    #[test]
    fn test_invalid_item_blocks_batch() {
        let mut builder = QuestionBuilder::new("quiz-1");
        appended(&mut builder, "Fine");
        let broken = DraftQuestion {
            id: DraftId(99),
            text: "Broken".into(),
            question_type: QuestionType::MultipleChoice,
            options: vec![
                DraftOption { id: DraftId(100), text: "yes".into() },
                DraftOption { id: DraftId(101), text: String::new() },
            ],
            correct_option_id: Some(DraftId(100)),
            order: 0,
        };
        builder.drafts_mut().push(broken);

        let blocked = builder.begin_submit().unwrap_err();
        assert!(matches!(blocked, SubmitBlocked::Invalid { position: 2, id: DraftId(99), .. }));
        assert_eq!(blocked.section(), Some(FormSection::Options));
        assert_eq!(blocked.to_string(), "Question 2: Option 2 is empty");
        assert_eq!(builder.phase(), BuilderPhase::Appended);
    }

    #[test]
    fn test_nothing_to_submit() {
        let mut builder = QuestionBuilder::new("quiz-1");
        assert_eq!(builder.begin_submit(), Err(SubmitBlocked::NoDrafts));
    }

    #[tokio::test]
    async fn test_successful_submit_clears_drafts() {
        let mut builder = QuestionBuilder::new("quiz-7");
        fill(&mut builder, "2 + 2?", &["3", "4", "5", "22"], 1);
        builder.commit_form().expect("valid");

        let api = Api::new(RecordingTransport::default().respond(Ok(json!({
            "success": true,
            "message": "1 question created"
        }))));
        let response = builder.submit(&api).await.expect("submit");
        assert_eq!(response.message, "1 question created");
        assert_eq!(builder.phase(), BuilderPhase::Empty);

        let sent = api.transport().sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].method, Method::Post);
        assert_eq!(sent[0].path, BULK_QUESTIONS_PATH);
        assert_eq!(
            sent[0].body,
            Some(json!({
                "quizId": "quiz-7",
                "questions": [{
                    "question": "2 + 2?",
                    "questionType": "multiple-choice",
                    "order": 1,
                    "options": [
                        {"text": "3", "order": 1, "isCorrect": false},
                        {"text": "4", "order": 2, "isCorrect": true},
                        {"text": "5", "order": 3, "isCorrect": false},
                        {"text": "22", "order": 4, "isCorrect": false}
                    ]
                }]
            }))
        );
    }

    #[tokio::test]
    async fn test_failed_submit_preserves_drafts() {
        let mut builder = QuestionBuilder::new("quiz-7");
        let a = appended(&mut builder, "A");
        let b = appended(&mut builder, "B");

        let api = Api::new(
            RecordingTransport::default().respond(Err(AdminError::Http { status: 500, message: "boom".into() })),
        );
        let err = builder.submit(&api).await.unwrap_err();
        assert_eq!(err, AdminError::Http { status: 500, message: "boom".into() });
        assert_eq!(builder.phase(), BuilderPhase::Appended);
        assert_eq!(builder.drafts().ids(), &[a, b]);
    }

    #[test]
    fn test_question_type_round_trip_names() {
        assert_eq!(QuestionType::parse("true-false"), Some(QuestionType::TrueFalse));
        assert_eq!(serde_json::to_value(QuestionType::MultipleChoice).unwrap(), json!("multiple-choice"));
    }
}
