//! Command pattern for key event handling.
//!
//! Key events are translated into [`AppCommand`]s by [`KeyMapper`], a pure
//! function of the key and the current [`InputContext`]. The app then
//! executes the command; nothing here touches state.
//!
//! # Example
//!
//! ```ignore
//! let context = app.get_input_context();
//! let command = KeyMapper::map_key(key_event, &context);
//! app.execute_command(command);
//! ```

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

// ============================================================================
// Input Context
// ============================================================================

/// Which set of keybindings is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// Browsing the ledger list.
    List,
    /// Editing the entry form. `picker` is set when the active field is a
    /// category or type picker rather than a text field.
    Form { picker: bool },
    /// A message popup is open.
    MessagePopup,
    /// The quit confirmation is open.
    ConfirmQuit,
}

// ============================================================================
// App Commands
// ============================================================================

/// Everything a key press can ask the app to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    // === Application Control ===
    /// Ask for confirmation before quitting.
    RequestQuit,
    /// Quit after confirmation.
    ConfirmQuit,
    /// Quit immediately (Ctrl-C).
    Quit,
    /// Re-fetch records from the service.
    Refresh,
    /// Flip between light and dark.
    ToggleTheme,

    // === Focus & Popups ===
    FocusForm,
    FocusList,
    /// Close the current popup.
    Dismiss,

    // === List Navigation ===
    MoveUp,
    MoveDown,
    GoToTop,
    GoToBottom,

    // === Form Editing ===
    TypeChar(char),
    Backspace,
    NextField,
    PrevField,
    CycleOptionNext,
    CycleOptionPrev,
    Submit,

    /// Unhandled key.
    Noop,
}

// ============================================================================
// Key Mapper
// ============================================================================

/// Maps key events to application commands based on the current input context.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyMapper;

impl KeyMapper {
    /// Maps a key event to a command. Ctrl-C quits from every context.
    #[must_use]
    pub fn map_key(key: KeyEvent, context: &InputContext) -> AppCommand {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return AppCommand::Quit;
        }

        match context {
            InputContext::List => Self::map_list_keys(key),
            InputContext::Form { picker } => Self::map_form_keys(key, *picker),
            InputContext::MessagePopup => Self::map_message_popup_keys(key),
            InputContext::ConfirmQuit => Self::map_confirm_quit_keys(key),
        }
    }

    fn map_list_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Char('q') => AppCommand::RequestQuit,
            KeyCode::Char('r') => AppCommand::Refresh,
            KeyCode::Char('t') => AppCommand::ToggleTheme,
            KeyCode::Char('a') | KeyCode::Tab => AppCommand::FocusForm,
            KeyCode::Up | KeyCode::Char('k') => AppCommand::MoveUp,
            KeyCode::Down | KeyCode::Char('j') => AppCommand::MoveDown,
            KeyCode::Char('g') | KeyCode::Home => AppCommand::GoToTop,
            KeyCode::Char('G') | KeyCode::End => AppCommand::GoToBottom,
            _ => AppCommand::Noop,
        }
    }

    fn map_form_keys(key: KeyEvent, picker: bool) -> AppCommand {
        match key.code {
            KeyCode::Esc => AppCommand::FocusList,
            KeyCode::Enter => AppCommand::Submit,
            KeyCode::Tab | KeyCode::Down => AppCommand::NextField,
            KeyCode::BackTab | KeyCode::Up => AppCommand::PrevField,
            KeyCode::Right | KeyCode::Char(' ') if picker => AppCommand::CycleOptionNext,
            KeyCode::Left if picker => AppCommand::CycleOptionPrev,
            KeyCode::Backspace if !picker => AppCommand::Backspace,
            KeyCode::Char(c) if !picker => AppCommand::TypeChar(c),
            _ => AppCommand::Noop,
        }
    }

    fn map_message_popup_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char(' ') => AppCommand::Dismiss,
            _ => AppCommand::Noop,
        }
    }

    fn map_confirm_quit_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Char('y' | 'Y') | KeyCode::Enter => AppCommand::ConfirmQuit,
            KeyCode::Char('n' | 'N') | KeyCode::Esc => AppCommand::Dismiss,
            _ => AppCommand::Noop,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState};
    use rstest::rstest;

    /// Helper to create a key event for testing.
    fn key_event(code: KeyCode) -> KeyEvent {
        key_event_with_modifiers(code, KeyModifiers::empty())
    }

    /// Helper to create a key event with modifiers.
    fn key_event_with_modifiers(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    const TEXT_FIELD: InputContext = InputContext::Form { picker: false };
    const PICKER: InputContext = InputContext::Form { picker: true };

    mod list_keys {
        use super::*;

        #[rstest]
        #[case::quit_asks(KeyCode::Char('q'), AppCommand::RequestQuit)]
        #[case::refresh(KeyCode::Char('r'), AppCommand::Refresh)]
        #[case::theme(KeyCode::Char('t'), AppCommand::ToggleTheme)]
        #[case::add(KeyCode::Char('a'), AppCommand::FocusForm)]
        #[case::tab(KeyCode::Tab, AppCommand::FocusForm)]
        #[case::up(KeyCode::Up, AppCommand::MoveUp)]
        #[case::k(KeyCode::Char('k'), AppCommand::MoveUp)]
        #[case::down(KeyCode::Down, AppCommand::MoveDown)]
        #[case::j(KeyCode::Char('j'), AppCommand::MoveDown)]
        #[case::top(KeyCode::Char('g'), AppCommand::GoToTop)]
        #[case::bottom(KeyCode::Char('G'), AppCommand::GoToBottom)]
        #[case::unknown(KeyCode::Char('z'), AppCommand::Noop)]
        fn test_list_bindings(#[case] code: KeyCode, #[case] expected: AppCommand) {
            assert_eq!(
                KeyMapper::map_key(key_event(code), &InputContext::List),
                expected
            );
        }
    }

    mod form_keys {
        use super::*;

        #[rstest]
        #[case::letter(KeyCode::Char('q'), AppCommand::TypeChar('q'))]
        #[case::space(KeyCode::Char(' '), AppCommand::TypeChar(' '))]
        #[case::cjk(KeyCode::Char('飲'), AppCommand::TypeChar('飲'))]
        #[case::backspace(KeyCode::Backspace, AppCommand::Backspace)]
        #[case::tab(KeyCode::Tab, AppCommand::NextField)]
        #[case::down(KeyCode::Down, AppCommand::NextField)]
        #[case::backtab(KeyCode::BackTab, AppCommand::PrevField)]
        #[case::up(KeyCode::Up, AppCommand::PrevField)]
        #[case::enter(KeyCode::Enter, AppCommand::Submit)]
        #[case::esc(KeyCode::Esc, AppCommand::FocusList)]
        #[case::arrows_ignored(KeyCode::Left, AppCommand::Noop)]
        fn test_text_field_bindings(#[case] code: KeyCode, #[case] expected: AppCommand) {
            assert_eq!(KeyMapper::map_key(key_event(code), &TEXT_FIELD), expected);
        }

        #[rstest]
        #[case::right(KeyCode::Right, AppCommand::CycleOptionNext)]
        #[case::space(KeyCode::Char(' '), AppCommand::CycleOptionNext)]
        #[case::left(KeyCode::Left, AppCommand::CycleOptionPrev)]
        #[case::typing_ignored(KeyCode::Char('x'), AppCommand::Noop)]
        #[case::backspace_ignored(KeyCode::Backspace, AppCommand::Noop)]
        #[case::enter(KeyCode::Enter, AppCommand::Submit)]
        fn test_picker_bindings(#[case] code: KeyCode, #[case] expected: AppCommand) {
            assert_eq!(KeyMapper::map_key(key_event(code), &PICKER), expected);
        }
    }

    mod popup_keys {
        use super::*;

        #[rstest]
        #[case(KeyCode::Esc)]
        #[case(KeyCode::Enter)]
        #[case(KeyCode::Char(' '))]
        fn test_message_dismiss(#[case] code: KeyCode) {
            assert_eq!(
                KeyMapper::map_key(key_event(code), &InputContext::MessagePopup),
                AppCommand::Dismiss
            );
        }

        #[rstest]
        #[case::yes(KeyCode::Char('y'), AppCommand::ConfirmQuit)]
        #[case::enter(KeyCode::Enter, AppCommand::ConfirmQuit)]
        #[case::no(KeyCode::Char('n'), AppCommand::Dismiss)]
        #[case::esc(KeyCode::Esc, AppCommand::Dismiss)]
        #[case::other(KeyCode::Char('x'), AppCommand::Noop)]
        fn test_confirm_quit(#[case] code: KeyCode, #[case] expected: AppCommand) {
            assert_eq!(
                KeyMapper::map_key(key_event(code), &InputContext::ConfirmQuit),
                expected
            );
        }
    }

    #[rstest]
    #[case(InputContext::List)]
    #[case(TEXT_FIELD)]
    #[case(PICKER)]
    #[case(InputContext::MessagePopup)]
    #[case(InputContext::ConfirmQuit)]
    fn test_ctrl_c_quits_everywhere(#[case] context: InputContext) {
        let key = key_event_with_modifiers(KeyCode::Char('c'), KeyModifiers::CONTROL);
        let command = KeyMapper::map_key(key, &context);
        assert_eq!(command, AppCommand::Quit);
    }
}
