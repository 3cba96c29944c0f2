//! Command execution and input handling.

use crossterm::event::KeyEvent;

use super::{App, Focus, PopupState};
use crate::commands::{AppCommand, InputContext, KeyMapper};

impl App {
    pub(crate) fn handle_key_event(&mut self, key_event: KeyEvent) {
        let context = self.get_input_context();
        let command = KeyMapper::map_key(key_event, &context);
        self.execute_command(command);
    }

    /// Determines which keybindings are active. Popups take precedence.
    #[must_use]
    pub fn get_input_context(&self) -> InputContext {
        match &self.ui.popup_state {
            PopupState::ConfirmQuit => InputContext::ConfirmQuit,
            PopupState::Message(_) => InputContext::MessagePopup,
            PopupState::None => match self.ui.focus {
                Focus::List => InputContext::List,
                Focus::Form => InputContext::Form {
                    picker: self.form.active_field.is_picker(),
                },
            },
        }
    }

    /// Executes an application command.
    pub(crate) fn execute_command(&mut self, command: AppCommand) {
        match command {
            // === Application Control ===
            AppCommand::RequestQuit => self.ui.popup_state = PopupState::ConfirmQuit,
            AppCommand::ConfirmQuit | AppCommand::Quit => self.exit = true,
            AppCommand::Refresh => self.refresh(),
            AppCommand::ToggleTheme => self.toggle_theme(),

            // === Focus & Popups ===
            AppCommand::FocusForm => self.ui.focus = Focus::Form,
            AppCommand::FocusList => self.ui.focus = Focus::List,
            AppCommand::Dismiss => self.ui.dismiss_popup(),

            // === List Navigation ===
            AppCommand::MoveUp => self.ui.select_previous(),
            AppCommand::MoveDown => self.ui.select_next(self.ledger.len()),
            AppCommand::GoToTop => self.ui.selected_index = 0,
            AppCommand::GoToBottom => self.ui.select_last(self.ledger.len()),

            // === Form Editing ===
            AppCommand::TypeChar(c) => self.form.push_char(c),
            AppCommand::Backspace => self.form.backspace(),
            AppCommand::NextField => self.form.next_field(),
            AppCommand::PrevField => self.form.prev_field(),
            AppCommand::CycleOptionNext => self.form.cycle_option(true),
            AppCommand::CycleOptionPrev => self.form.cycle_option(false),
            AppCommand::Submit => self.submit_entry(),

            AppCommand::Noop => {}
        }
    }
}
