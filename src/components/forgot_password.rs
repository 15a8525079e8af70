use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEventKind};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::auth::AuthError;
use crate::components::component::{Component, ComponentAction};
use crate::ui::Screen;
use crate::utils::style::title_style;
use crate::utils::{centered_form, error_text_style, success_text_style, TextInput};
use crate::widgets::{TextInputWidget, TextInputWidgetExt};

/// Password-reset screen: a single email field. Success keeps the user on
/// the screen with a confirmation; error and success are mutually
/// exclusive and both reset on each new attempt.
pub struct ForgotPasswordComponent {
    email: TextInput,
    error_message: Option<String>,
    success_message: Option<String>,
}

impl ForgotPasswordComponent {
    pub fn new() -> Self {
        Self {
            email: TextInput::new(),
            error_message: None,
            success_message: None,
        }
    }

    pub fn email(&self) -> &str {
        self.email.text_trimmed()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn success_message(&self) -> Option<&str> {
        self.success_message.as_deref()
    }

    /// Apply the reset-request outcome. Never navigates.
    pub fn apply_reset(&mut self, result: &Result<(), AuthError>) -> ComponentAction {
        match result {
            Ok(()) => {
                self.error_message = None;
                self.success_message =
                    Some("Email de recuperação enviado com sucesso!".to_string());
            }
            Err(err) => {
                self.success_message = None;
                self.error_message =
                    Some(format!("Erro ao enviar o email de recuperação: {}", err));
            }
        }
        ComponentAction::None
    }
}

impl Default for ForgotPasswordComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for ForgotPasswordComponent {
    fn render(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let form = centered_form(area, 60, 11);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // title
                Constraint::Length(1), // error/success line
                Constraint::Length(3), // email
                Constraint::Length(1), // spacer
                Constraint::Length(2), // key hints
            ])
            .split(form);

        let title = Paragraph::new("Recuperar Senha")
            .style(title_style())
            .alignment(Alignment::Center);
        frame.render_widget(title, chunks[0]);

        if let Some(error) = &self.error_message {
            let line = Paragraph::new(error.as_str())
                .style(error_text_style())
                .alignment(Alignment::Center);
            frame.render_widget(line, chunks[1]);
        } else if let Some(success) = &self.success_message {
            let line = Paragraph::new(success.as_str())
                .style(success_text_style())
                .alignment(Alignment::Center);
            frame.render_widget(line, chunks[1]);
        }

        let email = TextInputWidget::new(&self.email)
            .title("Email")
            .placeholder("Digite seu email")
            .focused(true);
        frame.render_text_input(email, chunks[2]);

        let hints = Paragraph::new(
            "Enter: Enviar email de recuperação\nEsc: Voltar ao login",
        )
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
        frame.render_widget(hints, chunks[4]);

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
            code => {
                if self.email.handle_key(code) {
                    Ok(ComponentAction::Update)
                } else {
                    Ok(ComponentAction::None)
                }
            }
        }
    }
}
