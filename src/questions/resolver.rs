use super::types::{
    AssignmentQuestion, QuestionKind, QuestionNumber, QuestionQuery, ResolvedQuestion,
};
use crate::dataset::{DatasetCatalog, DatasetKind};
use crate::error::{ServiceError, ServiceResult};

/// Loads the question bank and resolves `query` against it.
pub fn resolve_question(
    catalog: &DatasetCatalog,
    query: &QuestionQuery,
) -> ServiceResult<ResolvedQuestion> {
    let questions = catalog.load::<AssignmentQuestion>(DatasetKind::Questions)?;

    resolve(&questions, &query.assignment, query.question_number).ok_or_else(|| {
        ServiceError::QuestionNotFound {
            assignment: query.assignment.clone(),
            question_number: query.question_number,
        }
    })
}

/// Finds the first record of `assignment` whose number or range covers
/// `requested`.
///
/// A range hit is annotated with the requested number; for matching-type
/// questions the pair at `requested - start` is highlighted when it exists.
/// Later records that would also match are ignored (and logged).
pub fn resolve(
    questions: &[AssignmentQuestion],
    assignment: &str,
    requested: u32,
) -> Option<ResolvedQuestion> {
    let wanted = assignment.trim().to_lowercase();

    let mut candidates = questions
        .iter()
        .filter(|q| q.assignment.trim().to_lowercase() == wanted)
        .filter_map(|q| match QuestionNumber::parse(&q.question_number) {
            Some(number) => Some((q, number)),
            None => {
                tracing::warn!(
                    "Ignoring question with malformed number {:?} in assignment {:?}",
                    q.question_number,
                    q.assignment
                );
                None
            }
        })
        .filter(|(_, number)| number.contains(requested));

    let (question, number) = candidates.next()?;

    let duplicates = candidates.count();
    if duplicates > 0 {
        tracing::warn!(
            "{} further record(s) match {:?} question {}; using the first",
            duplicates,
            assignment,
            requested
        );
    }

    Some(annotate(question, number, requested))
}

fn annotate(
    question: &AssignmentQuestion,
    number: QuestionNumber,
    requested: u32,
) -> ResolvedQuestion {
    let mut resolved = ResolvedQuestion {
        question: question.clone(),
        requested_sub_question: None,
        highlighted_pair: None,
    };

    if let QuestionNumber::Range { start, .. } = number {
        resolved.requested_sub_question = Some(requested);
        if question.kind() == QuestionKind::Matching {
            let sub_index = (requested - start) as usize;
            resolved.highlighted_pair = question.matches.get(sub_index).cloned();
        }
    }

    resolved
}
