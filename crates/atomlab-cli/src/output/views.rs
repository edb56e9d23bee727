//! Plain-text panels for the interactive session in table mode.

use std::fmt::Write as _;

use atomlab_core::snapshots::{AtomSnapshot, QuizOutcome, QuizSnapshot};
use atomlab_core::{Feedback, Highlight, QuizStatus};

use super::table::colorize_word;

fn paint(word: &str, color: bool) -> String {
    if color {
        colorize_word(word)
    } else {
        word.to_string()
    }
}

/// Simulation view: element card, particle counts, shell layout.
#[must_use]
pub fn atom_panel(atom: &AtomSnapshot) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} ({})  Z={}  A={}",
        atom.name, atom.symbol, atom.atomic_number, atom.mass_number
    );
    let _ = writeln!(
        out,
        "{}  period {}  group {}",
        atom.category.label(),
        atom.period,
        atom.group
    );

    let marker = |kind: Highlight| if atom.highlight == kind { " *" } else { "" };
    let _ = writeln!(
        out,
        "protons {}{}  neutrons {}{}  electrons {}",
        atom.particles.protons,
        marker(Highlight::Protons),
        atom.particles.neutrons,
        marker(Highlight::Neutrons),
        atom.particles.electrons
    );

    for (index, count) in atom.shells.as_slice().iter().enumerate() {
        let _ = writeln!(out, "  shell {}: {}", index + 1, "e".repeat(*count as usize));
    }

    if atom.isotope_mode {
        let _ = writeln!(out, "isotope mode: on");
    }
    if let Some(fact) = atom.fact {
        let _ = writeln!(out, "fact: {fact}");
    }
    out.trim_end().to_string()
}

/// Quiz view: the question, the drop zones, the electron pool, feedback.
#[must_use]
pub fn quiz_panel(quiz: &QuizSnapshot, color: bool) -> String {
    if let Some(outcome) = quiz.outcome {
        return completion_panel(&outcome, color);
    }

    let mut out = String::new();
    let _ = writeln!(
        out,
        "Question {} of {}  score {}",
        quiz.question_number, quiz.total_questions, quiz.score
    );
    if let Some(element) = quiz.element {
        let _ = writeln!(
            out,
            "Place the electrons for {} ({}), {} electrons",
            element.name,
            element.symbol,
            element.electron_count()
        );
    }

    for slot in &quiz.shells {
        let _ = writeln!(out, "  {slot}");
    }

    if quiz.available.is_empty() {
        let _ = writeln!(out, "all electrons placed");
    } else {
        let pool = quiz
            .available
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        let _ = writeln!(out, "available: {pool}");
    }

    match &quiz.feedback {
        Feedback::None => {}
        Feedback::Correct { message } => {
            let _ = writeln!(out, "{}: {message}", paint("correct", color));
        }
        Feedback::Incorrect { message, .. } => {
            let _ = writeln!(out, "{}: {message}", paint("incorrect", color));
        }
    }
    if quiz.status == QuizStatus::AwaitingAdvance {
        let _ = writeln!(out, "next question shortly...");
    } else if quiz.can_check {
        let _ = writeln!(out, "ready to check");
    }
    out.trim_end().to_string()
}

fn completion_panel(outcome: &QuizOutcome, color: bool) -> String {
    format!(
        "Quiz complete: {}/{} ({:.0}%)  {}\n{}",
        outcome.score,
        outcome.total_questions,
        outcome.percentage.round(),
        paint(outcome.grade.as_str(), color),
        outcome.grade.message()
    )
}

#[cfg(test)]
mod tests {
    use atomlab_core::{AtomState, ElectronId, QuizSession};
    use pretty_assertions::assert_eq;

    use super::{atom_panel, quiz_panel};

    #[test]
    fn atom_panel_lists_shells_and_highlight() {
        let mut atom = AtomState::with_atomic_number(11).expect("sodium");
        atom.set_highlight(atomlab_core::Highlight::Protons);
        let panel = atom_panel(&atom.snapshot());

        assert!(panel.starts_with("Sodium (Na)  Z=11  A=23"));
        assert!(panel.contains("protons 11 *  neutrons 12  electrons 11"));
        assert!(panel.contains("  shell 2: eeeeeeee"));
        assert!(panel.contains("  shell 3: e\nfact: "));
    }

    #[test]
    fn quiz_panel_shows_slots_and_feedback() {
        let mut quiz = QuizSession::new();
        let panel = quiz_panel(&quiz.snapshot(), false);
        assert!(panel.starts_with("Question 1 of 10  score 0"));
        assert!(panel.contains("  Shell 1 (0/1)"));
        assert!(panel.contains("available: electron-0"));

        quiz.place_electron(ElectronId(0), 0).expect("placed");
        quiz.check_answer().expect("checked");
        let panel = quiz_panel(&quiz.snapshot(), false);
        assert!(panel.contains("  Shell 1 (1/1)"));
        assert!(panel.contains("correct: "));
        assert!(panel.ends_with("next question shortly..."));
    }

    #[test]
    fn completion_panel_rounds_percentage() {
        let mut quiz = QuizSession::with_question_count(3).expect("three questions");
        for index in 0..3 {
            let electron = quiz.available_electrons().iter().next().copied().expect("electron");
            // Only hydrogen is answered correctly; later ones skip shell 2.
            let shell = if index == 0 { 0 } else { 2 };
            quiz.place_electron(electron, shell).expect("placed");
            for rest in quiz.available_electrons().clone() {
                quiz.place_electron(rest, 0).expect("placed");
            }
            let ticket = quiz.check_answer().expect("checked").ticket;
            quiz.fire_advance(ticket).expect("advanced");
        }

        let panel = quiz_panel(&quiz.snapshot(), false);
        assert_eq!(
            panel,
            "Quiz complete: 1/3 (33%)  keep_studying\nKeep studying! Review the simulation for better understanding!"
        );
    }
}
