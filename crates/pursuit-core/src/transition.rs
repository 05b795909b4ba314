//! Stage status transitions.
//!
//! Any status may move to any other; the presentation layer decides which
//! moves make sense. The only side effect is the completion stamp: saving a
//! stage as `passed` or `failed` records today's date in `completed_at`.
//! Moving back to `pending` or `scheduled` keeps the recorded date.

use jiff::civil::Date;

use crate::{
    models::{Stage, StageStatus},
    params::StageForm,
};

/// Move `stage` to `status`, stamping `completed_at` with `today` whenever
/// the new status is terminal, including a re-save of a terminal stage.
pub fn transition(stage: &mut Stage, status: StageStatus, today: Date) {
    if status.is_terminal() {
        stage.completed_at = Some(today);
    }
    stage.status = status;
}

/// Apply an edited form to a stage, running the status through
/// [`transition`]. The id and any recorded completion date carry over.
pub fn apply_form(stage: &Stage, form: &StageForm, today: Date) -> Stage {
    let mut updated = Stage {
        id: stage.id.clone(),
        name: form.name.trim().to_string(),
        status: stage.status,
        date: form.date,
        time: form.time.clone(),
        location: form.location.clone(),
        feedback: form.feedback.clone(),
        interviewer: form.interviewer.clone(),
        notes: form.notes.clone(),
        preparation: form.preparation.clone(),
        rating: form.rating,
        completed_at: stage.completed_at,
    };
    transition(&mut updated, form.status, today);
    updated
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    const TODAY: Date = date(2024, 6, 1);

    #[test]
    fn test_entering_terminal_stamps_today() {
        for status in [StageStatus::Passed, StageStatus::Failed] {
            let mut stage = Stage::pending("s1", "Interview");
            transition(&mut stage, status, TODAY);
            assert_eq!(stage.status, status);
            assert_eq!(stage.completed_at, Some(TODAY));
        }
    }

    #[test]
    fn test_leaving_terminal_keeps_completion_date() {
        let earlier = date(2024, 5, 20);
        for status in [StageStatus::Pending, StageStatus::Scheduled] {
            let mut stage = Stage::pending("s1", "Interview");
            stage.status = StageStatus::Passed;
            stage.completed_at = Some(earlier);

            transition(&mut stage, status, TODAY);
            assert_eq!(stage.status, status);
            assert_eq!(stage.completed_at, Some(earlier));
        }
    }

    #[test]
    fn test_non_terminal_never_stamps() {
        let mut stage = Stage::pending("s1", "Interview");
        transition(&mut stage, StageStatus::Scheduled, TODAY);
        assert_eq!(stage.completed_at, None);
    }

    #[test]
    fn test_resaving_terminal_stamps_today() {
        let earlier = date(2024, 5, 20);
        for status in [StageStatus::Passed, StageStatus::Failed] {
            let mut stage = Stage::pending("s1", "Interview");
            stage.status = status;
            stage.completed_at = Some(earlier);

            transition(&mut stage, status, TODAY);
            assert_eq!(stage.status, status);
            assert_eq!(stage.completed_at, Some(TODAY));
        }
    }

    #[test]
    fn test_apply_form_resave_of_passed_stage_restamps() {
        let mut stage = Stage::pending("s3", "Interview");
        stage.status = StageStatus::Passed;
        stage.completed_at = Some(date(2024, 5, 20));
        let form = StageForm {
            feedback: Some("Strong system design round".to_string()),
            ..StageForm::from(&stage)
        };

        let updated = apply_form(&stage, &form, TODAY);
        assert_eq!(updated.completed_at, Some(TODAY));
        assert_eq!(updated.feedback, form.feedback);
    }

    #[test]
    fn test_apply_form_keeps_identity() {
        let stage = Stage::pending("s9", "Interview");
        let form = StageForm {
            name: "  Final interview ".to_string(),
            status: StageStatus::Passed,
            location: Some("https://meet.example.com/x".to_string()),
            ..StageForm::from(&stage)
        };

        let updated = apply_form(&stage, &form, TODAY);
        assert_eq!(updated.id, "s9");
        assert_eq!(updated.name, "Final interview");
        assert_eq!(updated.completed_at, Some(TODAY));
        assert_eq!(updated.location, form.location);
    }
}
