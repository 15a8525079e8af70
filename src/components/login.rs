use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEventKind};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::auth::{AuthError, Session};
use crate::components::component::{Component, ComponentAction};
use crate::ui::Screen;
use crate::utils::style::title_style;
use crate::utils::{centered_form, error_text_style, TextInput};
use crate::widgets::{TextInputWidget, TextInputWidgetExt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoginField {
    Email,
    Password,
}

/// Login screen: email + password, auth delegated to the provider.
pub struct LoginComponent {
    email: TextInput,
    password: TextInput,
    focused_field: LoginField,
    error_message: Option<String>,
}

impl LoginComponent {
    pub fn new() -> Self {
        Self {
            email: TextInput::new(),
            password: TextInput::new(),
            focused_field: LoginField::Email,
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

    /// Apply the sign-in outcome: success navigates to Home and clears any
    /// prior error; failure surfaces the provider's message and stays put.
    pub fn apply_sign_in(&mut self, result: &Result<Session, AuthError>) -> ComponentAction {
        match result {
            Ok(_) => {
                self.error_message = None;
                ComponentAction::Navigate(Screen::Home)
            }
            Err(err) => {
                self.error_message = Some(format!("Erro ao fazer login: {}", err));
                ComponentAction::None
            }
        }
    }

    fn next_field(&mut self) {
        self.focused_field = match self.focused_field {
            LoginField::Email => LoginField::Password,
            LoginField::Password => LoginField::Email,
        };
    }

    fn focused_input_mut(&mut self) -> &mut TextInput {
        match self.focused_field {
            LoginField::Email => &mut self.email,
            LoginField::Password => &mut self.password,
        }
    }
}

impl Default for LoginComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for LoginComponent {
    fn render(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let form = centered_form(area, 60, 14);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // title
                Constraint::Length(1), // error line
                Constraint::Length(3), // email
                Constraint::Length(3), // password
                Constraint::Length(1), // spacer
                Constraint::Length(2), // key hints
            ])
            .split(form);

        let title = Paragraph::new("Login")
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
            .focused(self.focused_field == LoginField::Email);
        frame.render_text_input(email, chunks[2]);

        let password = TextInputWidget::new(&self.password)
            .title("Senha")
            .placeholder("Senha")
            .masked(true)
            .focused(self.focused_field == LoginField::Password);
        frame.render_text_input(password, chunks[3]);

        let hints = Paragraph::new(
            "Enter: Entrar | Tab: Próximo campo\nF2: Registrar-se | F3: Esqueci minha senha | Esc: Sair",
        )
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
        frame.render_widget(hints, chunks[5]);

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
            KeyCode::Esc => Ok(ComponentAction::Quit),
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Down | KeyCode::Up => {
                self.next_field();
                Ok(ComponentAction::Update)
            }
            KeyCode::F(2) => Ok(ComponentAction::Navigate(Screen::Register)),
            KeyCode::F(3) => Ok(ComponentAction::Navigate(Screen::ForgotPassword)),
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
