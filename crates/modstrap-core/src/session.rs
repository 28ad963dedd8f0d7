//! Session state machine: prompt for a project name, then install packages
//!
//! `Session::update` consumes one message and returns the effects the event
//! loop must perform, in order. It never touches the terminal, the file
//! system or child processes itself.

use crate::config::PackageList;
use crate::error::FetchError;
use crate::runtime::FetchOutcome;
use crate::widgets::{ProgressBar, Spinner, TextInput};

/// Keys the session reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Esc,
    CtrlC,
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
}

/// Inbound events
#[derive(Debug)]
pub enum Msg {
    Key(Key),
    /// The terminal changed size; the next draw adapts to it
    Resize,
    Tick,
    Installed(FetchOutcome),
}

/// A permanent line printed above the live view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// An attempt for this package finished, successfully or not
    Attempted(String),
    Failed { package: String, error: String },
    ManifestFailed(String),
}

/// Side effects requested by the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Write the manifest for the confirmed project
    WriteManifest,
    Print(Notice),
    StartTicks,
    Fetch(String),
    Quit,
}

/// Install progress for a confirmed project
#[derive(Debug)]
pub struct Install {
    project: String,
    index: usize,
    done: bool,
    last_error: Option<FetchError>,
    spinner: Spinner,
    progress: ProgressBar,
}

impl Install {
    fn new(project: String) -> Self {
        Self {
            project,
            index: 0,
            done: false,
            last_error: None,
            spinner: Spinner::new(),
            progress: ProgressBar::default(),
        }
    }

    pub fn project(&self) -> &str {
        &self.project
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn last_error(&self) -> Option<&FetchError> {
        self.last_error.as_ref()
    }

    pub fn spinner(&self) -> &Spinner {
        &self.spinner
    }

    pub fn progress(&self) -> &ProgressBar {
        &self.progress
    }
}

#[derive(Debug)]
pub enum Stage {
    Prompting(TextInput),
    Installing(Install),
}

#[derive(Debug)]
pub struct Session {
    stage: Stage,
    packages: PackageList,
}

impl Session {
    pub fn new(packages: PackageList, placeholder: &str) -> Self {
        Self {
            stage: Stage::Prompting(TextInput::new(placeholder)),
            packages,
        }
    }

    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    pub fn packages(&self) -> &PackageList {
        &self.packages
    }

    pub fn install(&self) -> Option<&Install> {
        match &self.stage {
            Stage::Installing(install) => Some(install),
            Stage::Prompting(_) => None,
        }
    }

    pub fn is_done(&self) -> bool {
        self.install().is_some_and(Install::is_done)
    }

    pub fn update(&mut self, msg: Msg) -> Vec<Effect> {
        match msg {
            Msg::Key(key) => self.handle_key(key),
            Msg::Resize => Vec::new(),
            Msg::Tick => {
                if let Stage::Installing(install) = &mut self.stage {
                    if !install.done {
                        install.spinner.tick();
                    }
                }
                Vec::new()
            }
            Msg::Installed(outcome) => self.handle_installed(outcome),
        }
    }

    /// Accept `project` as the project name and start installing.
    /// Does nothing once installation has started.
    pub fn confirm(&mut self, project: String) -> Vec<Effect> {
        if !matches!(self.stage, Stage::Prompting(_)) {
            return Vec::new();
        }

        let first = self.packages[0].to_string();
        self.stage = Stage::Installing(Install::new(project));

        vec![
            Effect::WriteManifest,
            Effect::Fetch(first),
            Effect::StartTicks,
        ]
    }

    fn handle_key(&mut self, key: Key) -> Vec<Effect> {
        match &mut self.stage {
            Stage::Prompting(input) => match key {
                Key::Enter => {
                    let project = input.value();
                    self.confirm(project)
                }
                Key::Esc | Key::CtrlC => vec![Effect::Quit],
                Key::Char(c) => {
                    input.insert_char(c);
                    Vec::new()
                }
                Key::Backspace => {
                    input.delete_char();
                    Vec::new()
                }
                Key::Delete => {
                    input.delete_forward();
                    Vec::new()
                }
                Key::Left => {
                    input.move_cursor_left();
                    Vec::new()
                }
                Key::Right => {
                    input.move_cursor_right();
                    Vec::new()
                }
                Key::Home => {
                    input.move_to_start();
                    Vec::new()
                }
                Key::End => {
                    input.move_to_end();
                    Vec::new()
                }
            },
            Stage::Installing(_) => match key {
                Key::Esc | Key::CtrlC | Key::Char('q') => vec![Effect::Quit],
                _ => Vec::new(),
            },
        }
    }

    fn handle_installed(&mut self, outcome: FetchOutcome) -> Vec<Effect> {
        let Stage::Installing(install) = &mut self.stage else {
            return Vec::new();
        };
        if install.done {
            return Vec::new();
        }

        let mut effects = Vec::new();
        let total = self.packages.len();
        let finished = self.packages[install.index].to_string();

        if let Err(err) = &outcome.result {
            effects.push(Effect::Print(Notice::Failed {
                package: outcome.package.clone(),
                error: err.to_string(),
            }));
        }
        install.last_error = outcome.result.err();
        effects.push(Effect::Print(Notice::Attempted(finished)));

        if install.index + 1 >= total {
            install.index = total;
            install.done = true;
            install.progress.set_percent(1.0);
            effects.push(Effect::Quit);
        } else {
            install.index += 1;
            install
                .progress
                .set_percent(install.index as f64 / total as f64);
            effects.push(Effect::Fetch(self.packages[install.index].to_string()));
        }

        effects
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn packages() -> PackageList {
        PackageList::new([
            "github.com/charmbracelet/bubbles",
            "github.com/charmbracelet/bubbles/textinput",
            "github.com/charmbracelet/bubbles/progress",
            "github.com/charmbracelet/bubbles/list",
            "github.com/charmbracelet/bubbles/textarea",
            "github.com/charmbracelet/lipgloss",
            "github.com/charmbracelet/bubbletea",
        ])
        .unwrap()
    }

    fn new_session() -> Session {
        Session::new(packages(), "github.com/username/project_name")
    }

    fn type_text(session: &mut Session, text: &str) {
        for c in text.chars() {
            assert!(session.update(Msg::Key(Key::Char(c))).is_empty());
        }
    }

    fn ok(package: &str) -> Msg {
        Msg::Installed(FetchOutcome {
            package: package.to_string(),
            result: Ok(()),
        })
    }

    fn failed(package: &str) -> Msg {
        Msg::Installed(FetchOutcome {
            package: package.to_string(),
            result: Err(FetchError::Exit {
                code: Some(1),
                stderr: String::new(),
            }),
        })
    }

    fn fetched_package(effects: &[Effect]) -> Option<String> {
        effects.iter().find_map(|e| match e {
            Effect::Fetch(package) => Some(package.clone()),
            _ => None,
        })
    }

    #[test]
    fn test_enter_writes_manifest_before_first_fetch() {
        let mut session = new_session();
        type_text(&mut session, "example.com/foo");

        let effects = session.update(Msg::Key(Key::Enter));
        assert_eq!(
            effects,
            vec![
                Effect::WriteManifest,
                Effect::Fetch("github.com/charmbracelet/bubbles".to_string()),
                Effect::StartTicks,
            ]
        );
        let install = session.install().unwrap();
        assert_eq!(install.project(), "example.com/foo");
        assert_eq!(install.index(), 0);
    }

    #[test]
    fn test_empty_name_is_accepted() {
        let mut session = new_session();
        let effects = session.update(Msg::Key(Key::Enter));
        assert_eq!(effects[0], Effect::WriteManifest);
        assert_eq!(session.install().unwrap().project(), "");
    }

    #[test]
    fn test_escape_while_prompting_quits() {
        let mut session = new_session();
        type_text(&mut session, "abc");
        assert_eq!(session.update(Msg::Key(Key::Esc)), vec![Effect::Quit]);
        assert!(session.install().is_none());

        let mut session = new_session();
        assert_eq!(session.update(Msg::Key(Key::CtrlC)), vec![Effect::Quit]);
    }

    #[test]
    fn test_q_is_text_while_prompting() {
        let mut session = new_session();
        assert!(session.update(Msg::Key(Key::Char('q'))).is_empty());
        match session.stage() {
            Stage::Prompting(input) => assert_eq!(input.value(), "q"),
            Stage::Installing(_) => panic!("should still be prompting"),
        }
    }

    #[test]
    fn test_index_advances_by_one_per_completion() {
        let mut session = new_session();
        session.update(Msg::Key(Key::Enter));
        let total = session.packages().len();

        for step in 0..total - 1 {
            let current = session.packages()[step].to_string();
            let effects = session.update(ok(&current));

            let install = session.install().unwrap();
            assert_eq!(install.index(), step + 1);
            assert!(install.index() <= total - 1);
            assert!(!install.is_done());
            assert_eq!(
                install.progress().percent(),
                (step + 1) as f64 / total as f64
            );
            assert!(install.progress().percent() < 1.0);
            assert_eq!(
                effects,
                vec![
                    Effect::Print(Notice::Attempted(current)),
                    Effect::Fetch(session.packages()[step + 1].to_string()),
                ]
            );
        }
    }

    #[test]
    fn test_final_completion_sets_done_and_quits() {
        let mut session = new_session();
        session.update(Msg::Key(Key::Enter));
        let names: Vec<String> = session.packages().iter().map(String::from).collect();

        let mut last = Vec::new();
        for name in &names {
            last = session.update(ok(name));
        }

        assert!(session.is_done());
        let install = session.install().unwrap();
        assert_eq!(install.index(), names.len());
        assert_eq!(install.progress().percent(), 1.0);
        assert_eq!(
            last,
            vec![
                Effect::Print(Notice::Attempted(
                    "github.com/charmbracelet/bubbletea".to_string()
                )),
                Effect::Quit,
            ]
        );
    }

    #[test]
    fn test_always_failing_fetch_visits_every_package_in_order() {
        let mut session = new_session();
        let mut attempted = vec![fetched_package(&session.update(Msg::Key(Key::Enter))).unwrap()];

        loop {
            let current = attempted.last().unwrap().clone();
            let effects = session.update(failed(&current));
            assert_eq!(
                effects[0],
                Effect::Print(Notice::Failed {
                    package: current.clone(),
                    error: "exit status 1".to_string(),
                })
            );
            assert_eq!(effects[1], Effect::Print(Notice::Attempted(current)));
            assert!(session.install().unwrap().last_error().is_some());
            match fetched_package(&effects) {
                Some(next) => attempted.push(next),
                None => {
                    assert_eq!(effects.last(), Some(&Effect::Quit));
                    break;
                }
            }
        }

        let expected: Vec<String> = session.packages().iter().map(String::from).collect();
        assert_eq!(attempted, expected);
        assert!(session.is_done());
    }

    #[test]
    fn test_success_clears_last_error() {
        let mut session = new_session();
        session.update(Msg::Key(Key::Enter));
        session.update(failed("github.com/charmbracelet/bubbles"));
        assert!(session.install().unwrap().last_error().is_some());

        session.update(ok("github.com/charmbracelet/bubbles/textinput"));
        assert!(session.install().unwrap().last_error().is_none());
    }

    #[test]
    fn test_quit_keys_while_installing() {
        for key in [Key::Esc, Key::CtrlC, Key::Char('q')] {
            let mut session = new_session();
            session.update(Msg::Key(Key::Enter));
            assert_eq!(session.update(Msg::Key(key)), vec![Effect::Quit]);
        }
    }

    #[test]
    fn test_typing_while_installing_is_ignored() {
        let mut session = new_session();
        session.update(Msg::Key(Key::Enter));
        assert!(session.update(Msg::Key(Key::Char('x'))).is_empty());
        assert!(session.update(Msg::Key(Key::Enter)).is_empty());
        assert_eq!(session.install().unwrap().index(), 0);
    }

    #[test]
    fn test_completion_while_prompting_is_ignored() {
        let mut session = new_session();
        assert!(session.update(ok("github.com/charmbracelet/bubbles")).is_empty());
        assert!(session.install().is_none());
    }

    #[test]
    fn test_completion_after_done_is_ignored() {
        let mut session = Session::new(PackageList::new(["only"]).unwrap(), "");
        session.update(Msg::Key(Key::Enter));
        session.update(ok("only"));
        assert!(session.is_done());

        assert!(session.update(ok("only")).is_empty());
        assert_eq!(session.install().unwrap().index(), 1);
    }

    #[test]
    fn test_confirm_twice_is_noop() {
        let mut session = new_session();
        assert_eq!(session.confirm("a".to_string()).len(), 3);
        assert!(session.confirm("b".to_string()).is_empty());
        assert_eq!(session.install().unwrap().project(), "a");
    }

    #[test]
    fn test_ticks_advance_spinner_only_while_installing() {
        let mut session = new_session();
        session.update(Msg::Tick);
        session.update(Msg::Key(Key::Enter));
        assert_eq!(session.install().unwrap().spinner().frame(), "|");

        session.update(Msg::Tick);
        assert_eq!(session.install().unwrap().spinner().frame(), "/");
    }

    #[test]
    fn test_resize_has_no_effects() {
        let mut session = new_session();
        session.update(Msg::Key(Key::Enter));
        assert!(session.update(Msg::Resize).is_empty());
    }
}
