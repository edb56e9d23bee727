mod intent;
mod state;

use std::time::Duration;

use atomlab_config::AtomlabConfig;
use atomlab_core::{AdvanceTicket, Page};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::time::Instant;

use crate::cli::root_commands::SessionArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::output::{output, views};
use crate::ui;

use self::state::{Session, SessionView, Step};

/// Handle `atomlab simulate` and `atomlab quiz`.
///
/// Reads one command per line from stdin. After a quiz answer is checked the
/// next question arrives on its own once the feedback delay has passed,
/// unless a reset or restart disarms it first.
pub async fn handle(
    start: Page,
    args: &SessionArgs,
    config: &AtomlabConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let delay = args
        .delay_ms
        .map_or_else(|| config.quiz.feedback_delay(), Duration::from_millis);
    let session = Session::new(
        start,
        config.simulation.initial_atomic_number,
        config.quiz.question_count,
    )?;
    tracing::debug!(page = %start, ?delay, "session started");

    if flags.format == OutputFormat::Table && !flags.quiet {
        println!("{}\n", intent::HELP);
    }
    render(&session, flags)?;

    drive(session, BufReader::new(tokio::io::stdin()), delay, flags).await?;
    Ok(())
}

/// Run the session over `input` until `quit` or end of input, then hand it
/// back.
async fn drive<R>(
    mut session: Session,
    input: R,
    delay: Duration,
    flags: &GlobalFlags,
) -> anyhow::Result<Session>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = input.lines();
    let mut pending: Option<(AdvanceTicket, Instant)> = None;

    loop {
        let deadline = pending.map_or_else(Instant::now, |(_, at)| at);
        tokio::select! {
            biased;
            () = tokio::time::sleep_until(deadline), if pending.is_some() => {
                if let Some((ticket, _)) = pending.take() {
                    if session.advance(ticket) {
                        render(&session, flags)?;
                    }
                }
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    tracing::debug!("input closed");
                    break;
                };
                let step = intent::parse(&line)
                    .and_then(|parsed| parsed.map_or(Ok(Step::Render), |intent| session.apply(intent)));
                match step {
                    Ok(Step::Render) => render(&session, flags)?,
                    Ok(Step::Armed(ticket)) => {
                        pending = Some((ticket, Instant::now() + delay));
                        render(&session, flags)?;
                    }
                    Ok(Step::Help) => println!("{}", intent::HELP),
                    Ok(Step::Quit) => break,
                    Err(error) => {
                        if !flags.quiet {
                            eprintln!("ignored: {error:#}");
                        }
                    }
                }
                // Resets and restarts disarm the engine's ticket; drop our timer with it.
                if session.quiz().pending_advance().is_none() {
                    pending = None;
                }
            }
        }
    }
    Ok(session)
}

fn render(session: &Session, flags: &GlobalFlags) -> anyhow::Result<()> {
    let view = session.view();
    if flags.format != OutputFormat::Table {
        return output(&view, flags.format);
    }
    let panel = match &view {
        SessionView::Simulation(atom) => views::atom_panel(atom),
        SessionView::Quiz(quiz) => views::quiz_panel(quiz, ui::prefs().table_color),
    };
    println!("{panel}\n");
    Ok(())
}
