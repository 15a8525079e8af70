use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEventKind};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::auth::AuthError;
use crate::components::component::{Component, ComponentAction};
use crate::ui::Screen;
use crate::utils::style::title_style;
use crate::utils::{centered_form, error_text_style, TextInput};
use crate::widgets::{TextInputWidget, TextInputWidgetExt};

const PASSWORD_MISMATCH: &str = "As senhas não correspondem.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RegisterField {
    Email,
    Password,
    ConfirmPassword,
}

/// Registration screen: email, password, and a local confirm-password
/// check that short-circuits before any provider call.
pub struct RegisterComponent {
    email: TextInput,
    password: TextInput,
    confirm_password: TextInput,
    focused_field: RegisterField,
    error_message: Option<String>,
}

impl RegisterComponent {
    pub fn new() -> Self {
        Self {
            email: TextInput::new(),
            password: TextInput::new(),
            confirm_password: TextInput::new(),
            focused_field: RegisterField::Email,
            error_message: None,
        }
    }

    pub fn email(&self) -> &str {
        self.email.text_trimmed()
    }

    pub fn password(&self) -> &str {
        self.password.text()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Local validation run before any network call. Returns the error to
    /// display when the passwords differ.
    pub fn local_validation_error(&self) -> Option<&'static str> {
        if self.password.text() == self.confirm_password.text() {
            None
        } else {
            Some(PASSWORD_MISMATCH)
        }
    }

    /// Record the local validation failure.
    pub fn apply_local_error(&mut self, message: &str) {
        self.error_message = Some(message.to_string());
    }

    /// Apply the sign-up outcome: success navigates back to Login; failure
    /// surfaces the provider's message.
    pub fn apply_sign_up(&mut self, result: &Result<(), AuthError>) -> ComponentAction {
        match result {
            Ok(()) => {
                self.error_message = None;
                ComponentAction::Navigate(Screen::Login)
            }
            Err(err) => {
                self.error_message = Some(format!("Erro ao registrar: {}", err));
                ComponentAction::None
            }
        }
    }

    fn next_field(&mut self) {
        self.focused_field = match self.focused_field {
            RegisterField::Email => RegisterField::Password,
            RegisterField::Password => RegisterField::ConfirmPassword,
            RegisterField::ConfirmPassword => RegisterField::Email,
        };
    }

    fn prev_field(&mut self) {
        self.focused_field = match self.focused_field {
            RegisterField::Email => RegisterField::ConfirmPassword,
            RegisterField::Password => RegisterField::Email,
            RegisterField::ConfirmPassword => RegisterField::Password,
        };
    }

    fn focused_input_mut(&mut self) -> &mut TextInput {
        match self.focused_field {
            RegisterField::Email => &mut self.email,
            RegisterField::Password => &mut self.password,
            RegisterField::ConfirmPassword => &mut self.confirm_password,
        }
    }
}

impl Default for RegisterComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for RegisterComponent {
    fn render(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let form = centered_form(area, 60, 17);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // title
                Constraint::Length(1), // error line
                Constraint::Length(3), // email
                Constraint::Length(3), // password
                Constraint::Length(3), // confirm password
                Constraint::Length(1), // spacer
                Constraint::Length(2), // key hints
            ])
            .split(form);

        let title = Paragraph::new("Registrar")
            .style(title_style())
            .alignment(Alignment::Center);
        frame.render_widget(title, chunks[0]);

        if let Some(error) = &self.error_message {
            let error_line = Paragraph::new(error.as_str())
                .style(error_text_style())
                .alignment(Alignment::Center);
            frame.render_widget(error_line, chunks[1]);
        }

        let email = TextInputWidget::new(&self.email)
            .title("Email")
            .placeholder("Email")
            .focused(self.focused_field == RegisterField::Email);
        frame.render_text_input(email, chunks[2]);

        let password = TextInputWidget::new(&self.password)
            .title("Senha")
            .placeholder("Senha")
            .masked(true)
            .focused(self.focused_field == RegisterField::Password);
        frame.render_text_input(password, chunks[3]);

        let confirm = TextInputWidget::new(&self.confirm_password)
            .title("Confirmar Senha")
            .placeholder("Confirmar Senha")
            .masked(true)
            .focused(self.focused_field == RegisterField::ConfirmPassword);
        frame.render_text_input(confirm, chunks[4]);

        let hints = Paragraph::new(
            "Enter: Registrar | Tab: Próximo campo\nEsc: Voltar ao login",
        )
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
        frame.render_widget(hints, chunks[6]);

        Ok(())
    }

    fn handle_event(&mut self, event: Event) -> Result<ComponentAction> {
        let Event::Key(key) = event else {
            return Ok(ComponentAction::None);
        };
        if key.kind != KeyEventKind::Press {
            return Ok(ComponentAction::None);
        }

        match key.code {
            KeyCode::Enter => Ok(ComponentAction::Submit),
            KeyCode::Esc => Ok(ComponentAction::Navigate(Screen::Login)),
            KeyCode::Tab | KeyCode::Down => {
                self.next_field();
                Ok(ComponentAction::Update)
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.prev_field();
                Ok(ComponentAction::Update)
            }
            code => {
                if self.focused_input_mut().handle_key(code) {
                    Ok(ComponentAction::Update)
                } else {
                    Ok(ComponentAction::None)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers};

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(component: &mut RegisterComponent, text: &str) {
        for c in text.chars() {
            component.handle_event(press(KeyCode::Char(c))).unwrap();
        }
    }

    #[test]
    fn mismatched_passwords_fail_local_validation() {
        let mut register = RegisterComponent::new();
        register.handle_event(press(KeyCode::Tab)).unwrap();
        type_text(&mut register, "abc");
        register.handle_event(press(KeyCode::Tab)).unwrap();
        type_text(&mut register, "abd");

        assert_eq!(
            register.local_validation_error(),
            Some("As senhas não correspondem.")
        );
    }

    #[test]
    fn matching_passwords_pass_local_validation() {
        let mut register = RegisterComponent::new();
        register.handle_event(press(KeyCode::Tab)).unwrap();
        type_text(&mut register, "abc");
        register.handle_event(press(KeyCode::Tab)).unwrap();
        type_text(&mut register, "abc");

        assert!(register.local_validation_error().is_none());
    }

    #[test]
    fn successful_sign_up_navigates_to_login() {
        let mut register = RegisterComponent::new();
        let action = register.apply_sign_up(&Ok(()));
        assert_eq!(action, ComponentAction::Navigate(Screen::Login));
        assert!(register.error_message().is_none());
    }

    #[test]
    fn failed_sign_up_surfaces_provider_message() {
        let mut register = RegisterComponent::new();
        let result = Err(AuthError::Service {
            message: "User already registered".to_string(),
        });

        let action = register.apply_sign_up(&result);

        assert_eq!(action, ComponentAction::None);
        assert_eq!(
            register.error_message(),
            Some("Erro ao registrar: User already registered")
        );
    }

    #[test]
    fn escape_goes_back_to_login() {
        let mut register = RegisterComponent::new();
        assert_eq!(
            register.handle_event(press(KeyCode::Esc)).unwrap(),
            ComponentAction::Navigate(Screen::Login)
        );
    }
}
