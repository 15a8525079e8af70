//! Text input widget for rendering `TextInput` instances.
//!
//! Centralizes input-field rendering: consistent borders, placeholder
//! text, password masking, and cursor placement when focused.

use crate::utils::text_input::TextInput;
use crate::utils::{
    focused_border_style, input_placeholder_style, input_text_style, unfocused_border_style,
};
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// A widget for rendering a `TextInput` with consistent styling.
pub struct TextInputWidget<'a> {
    input: &'a TextInput,
    title: Option<&'a str>,
    placeholder: Option<&'a str>,
    focused: bool,
    /// Mask the text with bullets (for passwords)
    masked: bool,
}

impl<'a> TextInputWidget<'a> {
    pub fn new(input: &'a TextInput) -> Self {
        Self {
            input,
            title: None,
            placeholder: None,
            focused: false,
            masked: false,
        }
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn masked(mut self, masked: bool) -> Self {
        self.masked = masked;
        self
    }

    /// The text actually drawn: masked text, placeholder, or the input.
    fn display_text(&self) -> String {
        let text = self.input.text();
        if text.is_empty() {
            self.placeholder.unwrap_or("").to_string()
        } else if self.masked {
            "•".repeat(text.chars().count())
        } else {
            text.to_string()
        }
    }

    fn text_style(&self) -> Style {
        if self.input.text().is_empty() {
            input_placeholder_style()
        } else {
            input_text_style()
        }
    }

    fn create_block(&self) -> Block<'a> {
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(if self.focused {
                focused_border_style()
            } else {
                unfocused_border_style()
            });

        if let Some(title) = self.title {
            block = block.title(format!(" {} ", title));
        }

        block
    }
}

impl Widget for TextInputWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = self.create_block();
        let paragraph = Paragraph::new(self.display_text())
            .block(block)
            .style(self.text_style());
        paragraph.render(area, buf);
    }
}

/// Extension trait for `Frame` to render a `TextInputWidget` with cursor
/// support.
///
/// The `Widget` trait has no access to the frame, so cursor placement for
/// the focused field goes through this extension instead.
pub trait TextInputWidgetExt {
    fn render_text_input(&mut self, widget: TextInputWidget, area: Rect);
}

impl TextInputWidgetExt for Frame<'_> {
    fn render_text_input(&mut self, widget: TextInputWidget, area: Rect) {
        let focused = widget.focused;
        let cursor = widget.input.cursor();
        let inner = widget.create_block().inner(area);

        self.render_widget(widget, area);

        if focused {
            let x = inner.x + cursor.min(inner.width as usize) as u16;
            self.set_cursor_position((x, inner.y));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_text_shows_placeholder_when_empty() {
        let input = TextInput::new();
        let widget = TextInputWidget::new(&input).placeholder("Email");
        assert_eq!(widget.display_text(), "Email");
    }

    #[test]
    fn display_text_shows_input() {
        let input = TextInput::with_text("a@x.com");
        let widget = TextInputWidget::new(&input);
        assert_eq!(widget.display_text(), "a@x.com");
    }

    #[test]
    fn masked_text_hides_password() {
        let input = TextInput::with_text("segredo");
        let widget = TextInputWidget::new(&input).masked(true);
        assert_eq!(widget.display_text(), "•••••••");
    }

    #[test]
    fn builder_flags() {
        let input = TextInput::new();
        let widget = TextInputWidget::new(&input)
            .title("Senha")
            .focused(true)
            .masked(true);
        assert!(widget.focused);
        assert!(widget.masked);
        assert_eq!(widget.title, Some("Senha"));
    }
}
