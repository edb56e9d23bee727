//! Line-oriented commands typed into an interactive session.

use anyhow::{Context, bail};
use atomlab_core::{ElectronId, Highlight};

/// One parsed line of session input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Intent {
    Show,
    Help,
    Quit,
    /// Switch between the simulation and the quiz.
    TogglePage,
    /// Reset whatever the current page resets.
    Reset,
    SetElement(String),
    Isotope(bool),
    Neutrons(i32),
    Highlight(Highlight),
    /// `shell` is 0-based; input is 1-based.
    Place { electron: ElectronId, shell: usize },
    /// Place the next `count` available electrons into one shell.
    Fill { shell: usize, count: u32 },
    Check,
    Restart,
}

pub const HELP: &str = "\
simulation:  z <number|symbol>   isotope on|off   n+ [k]   n- [k]
             highlight protons|neutrons   reset
quiz:        place <electron> <shell>   fill <shell> <count>   check
             reset   restart
anywhere:    quiz | sim (switch page)   show   help   quit";

/// Parse one input line. Blank lines yield `None`.
pub fn parse(line: &str) -> anyhow::Result<Option<Intent>> {
    let mut words = line.split_whitespace();
    let Some(command) = words.next() else {
        return Ok(None);
    };
    let args = words.collect::<Vec<_>>();

    let intent = match (command.to_ascii_lowercase().as_str(), args.as_slice()) {
        ("show" | "s", []) => Intent::Show,
        ("help" | "?", []) => Intent::Help,
        ("quit" | "exit" | "q", []) => Intent::Quit,
        ("quiz" | "sim" | "page", []) => Intent::TogglePage,
        ("reset", []) => Intent::Reset,
        ("z" | "element", [query]) => Intent::SetElement((*query).to_string()),
        ("isotope", [mode]) => Intent::Isotope(parse_switch(mode)?),
        ("n+", rest) => Intent::Neutrons(parse_step(rest)?),
        ("n-", rest) => Intent::Neutrons(-parse_step(rest)?),
        ("highlight" | "hl", [kind]) => Intent::Highlight(parse_highlight(kind)?),
        ("place" | "p", [electron, shell]) => Intent::Place {
            electron: electron
                .parse::<ElectronId>()
                .map_err(|error| anyhow::anyhow!("invalid electron '{electron}': {error}"))?,
            shell: parse_shell(shell)?,
        },
        ("fill", [shell, count]) => Intent::Fill {
            shell: parse_shell(shell)?,
            count: count
                .parse()
                .with_context(|| format!("invalid count '{count}'"))?,
        },
        ("check" | "c", []) => Intent::Check,
        ("restart", []) => Intent::Restart,
        (other, _) => bail!("unrecognized input '{other}' (try 'help')"),
    };
    Ok(Some(intent))
}

fn parse_switch(raw: &str) -> anyhow::Result<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "on" | "true" | "1" => Ok(true),
        "off" | "false" | "0" => Ok(false),
        _ => bail!("invalid isotope mode '{raw}': expected on or off"),
    }
}

fn parse_step(rest: &[&str]) -> anyhow::Result<i32> {
    match rest {
        [] => Ok(1),
        [raw] => raw
            .parse::<i32>()
            .ok()
            .filter(|step| *step > 0)
            .with_context(|| format!("invalid neutron step '{raw}'")),
        _ => bail!("expected at most one neutron step"),
    }
}

fn parse_highlight(raw: &str) -> anyhow::Result<Highlight> {
    match raw.to_ascii_lowercase().as_str() {
        "protons" | "proton" | "p" => Ok(Highlight::Protons),
        "neutrons" | "neutron" | "n" => Ok(Highlight::Neutrons),
        _ => bail!("invalid highlight '{raw}': expected protons or neutrons"),
    }
}

/// 1-based shell number in, 0-based index out.
fn parse_shell(raw: &str) -> anyhow::Result<usize> {
    raw.parse::<usize>()
        .ok()
        .and_then(|shell| shell.checked_sub(1))
        .with_context(|| format!("invalid shell '{raw}': shells are numbered from 1"))
}

#[cfg(test)]
mod tests {
    use atomlab_core::{ElectronId, Highlight};
    use pretty_assertions::assert_eq;

    use super::{Intent, parse};

    fn intent(line: &str) -> Intent {
        parse(line)
            .expect("line should parse")
            .expect("line should not be blank")
    }

    #[test]
    fn blank_lines_are_skipped() {
        assert_eq!(parse("   ").expect("blank parses"), None);
    }

    #[test]
    fn simulation_commands() {
        assert_eq!(intent("z Ca"), Intent::SetElement("Ca".into()));
        assert_eq!(intent("isotope ON"), Intent::Isotope(true));
        assert_eq!(intent("n+"), Intent::Neutrons(1));
        assert_eq!(intent("n- 3"), Intent::Neutrons(-3));
        assert_eq!(intent("highlight neutrons"), Intent::Highlight(Highlight::Neutrons));
        assert_eq!(intent("quiz"), Intent::TogglePage);
    }

    #[test]
    fn quiz_commands_use_one_based_shells() {
        assert_eq!(
            intent("place electron-4 2"),
            Intent::Place {
                electron: ElectronId(4),
                shell: 1
            }
        );
        assert_eq!(
            intent("p 0 1"),
            Intent::Place {
                electron: ElectronId(0),
                shell: 0
            }
        );
        assert_eq!(intent("fill 1 2"), Intent::Fill { shell: 0, count: 2 });
        assert_eq!(intent("check"), Intent::Check);
    }

    #[test]
    fn malformed_input_is_reported() {
        let err = parse("place electron-1 0").expect_err("shell 0 is invalid");
        assert!(err.to_string().contains("shells are numbered from 1"));

        let err = parse("isotope maybe").expect_err("bad switch");
        assert!(err.to_string().contains("expected on or off"));

        assert!(parse("n+ -2").is_err());
        assert!(parse("dance").is_err());
        assert!(parse("check now").is_err());
    }
}
