use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEventKind};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use std::collections::HashSet;
use tracing::error;

use crate::components::component::{Component, ComponentAction};
use crate::groups::{DataError, Group};
use crate::utils::style::title_style;
use crate::utils::error_text_style;

const FETCH_ERROR: &str = "Erro ao buscar grupos.";

/// Home screen: the group listing with expand/collapse detail rows.
///
/// Expansion is keyed by group id. The expansion set is always a subset of
/// the ids in the last successfully fetched collection, and is rebuilt
/// empty on every screen mount.
pub struct HomeComponent {
    groups: Vec<Group>,
    expanded: HashSet<i64>,
    fetch_error: Option<String>,
    list_state: ListState,
}

impl HomeComponent {
    pub fn new() -> Self {
        Self {
            groups: Vec::new(),
            expanded: HashSet::new(),
            fetch_error: None,
            list_state: ListState::default(),
        }
    }

    /// Reset to the mount state: no groups, nothing expanded, no error.
    pub fn reset(&mut self) {
        self.groups.clear();
        self.expanded.clear();
        self.fetch_error = None;
        self.list_state = ListState::default();
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn fetch_error(&self) -> Option<&str> {
        self.fetch_error.as_deref()
    }

    pub fn is_expanded(&self, group_id: i64) -> bool {
        self.expanded.contains(&group_id)
    }

    /// Apply the fetch outcome: success replaces the collection wholesale
    /// and clears the error; failure empties the collection and records
    /// the fetch error.
    pub fn apply_fetch(&mut self, result: Result<Vec<Group>, DataError>) {
        match result {
            Ok(groups) => {
                let ids: HashSet<i64> = groups.iter().map(|g| g.id).collect();
                self.expanded.retain(|id| ids.contains(id));
                self.groups = groups;
                self.fetch_error = None;
                if self.groups.is_empty() {
                    self.list_state.select(None);
                } else {
                    let selected = self.list_state.selected().unwrap_or(0);
                    self.list_state
                        .select(Some(selected.min(self.groups.len() - 1)));
                }
            }
            Err(err) => {
                error!("Group fetch failed: {}", err);
                self.groups.clear();
                self.expanded.clear();
                self.list_state.select(None);
                self.fetch_error = Some(FETCH_ERROR.to_string());
            }
        }
    }

    /// Toggle a group's disclosure state. Pure and its own inverse.
    pub fn toggle_expand(&mut self, group_id: i64) {
        if !self.expanded.remove(&group_id) {
            self.expanded.insert(group_id);
        }
    }

    fn select_next(&mut self) {
        if self.groups.is_empty() {
            return;
        }
        let next = match self.list_state.selected() {
            Some(i) => (i + 1).min(self.groups.len() - 1),
            None => 0,
        };
        self.list_state.select(Some(next));
    }

    fn select_previous(&mut self) {
        if self.groups.is_empty() {
            return;
        }
        let previous = self.list_state.selected().map_or(0, |i| i.saturating_sub(1));
        self.list_state.select(Some(previous));
    }

    fn toggle_selected(&mut self) {
        if let Some(index) = self.list_state.selected() {
            if let Some(group) = self.groups.get(index) {
                self.toggle_expand(group.id);
            }
        }
    }

    fn group_item(&self, group: &Group) -> ListItem<'static> {
        let mut lines = vec![
            Line::styled(group.name.clone(), Style::default().add_modifier(Modifier::BOLD)),
            Line::raw(group.description.clone()),
        ];
        if self.is_expanded(group.id) {
            lines.extend(detail_lines(group));
        }
        lines.push(Line::raw(""));
        ListItem::new(Text::from(lines))
    }
}

/// Build the expanded detail rows for a group: students and evaluations,
/// each with its own empty-state placeholder.
fn detail_lines(group: &Group) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    lines.push(Line::styled(
        "  Alunos:",
        Style::default().add_modifier(Modifier::BOLD),
    ));
    if group.students.is_empty() {
        lines.push(Line::raw("    Nenhum aluno neste grupo"));
    } else {
        for student in &group.students {
            lines.push(Line::raw(format!("    Nome: {}", student.name)));
            lines.push(Line::raw(format!("    Email: {}", student.email)));
        }
    }

    lines.push(Line::styled(
        "  Avaliações:",
        Style::default().add_modifier(Modifier::BOLD),
    ));
    if group.evaluations.is_empty() {
        lines.push(Line::raw("    Nenhuma avaliação neste grupo"));
    } else {
        for evaluation in &group.evaluations {
            lines.push(Line::raw(format!("    Nota: {}", evaluation.score)));
            lines.push(Line::raw(format!(
                "    Comentário: {}",
                evaluation.comment
            )));
        }
    }

    lines
}

impl Default for HomeComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for HomeComponent {
    fn render(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // title
                Constraint::Length(1), // error banner
                Constraint::Min(0),    // group list
                Constraint::Length(1), // key hints
            ])
            .split(area);

        let title = Paragraph::new("Grupos InovaWeek")
            .style(title_style())
            .alignment(Alignment::Center);
        frame.render_widget(title, chunks[0]);

        if let Some(error) = &self.fetch_error {
            let banner = Paragraph::new(error.as_str())
                .style(error_text_style())
                .alignment(Alignment::Center);
            frame.render_widget(banner, chunks[1]);
        }

        let items: Vec<ListItem> = self.groups.iter().map(|g| self.group_item(g)).collect();
        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL))
            .highlight_style(Style::default().bg(Color::DarkGray));
        frame.render_stateful_widget(list, chunks[2], &mut self.list_state);

        let hints = Paragraph::new("↑/↓: Navegar | Enter: Expandir/recolher | Esc: Sair")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(hints, chunks[3]);

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
            KeyCode::Esc | KeyCode::Char('q') => Ok(ComponentAction::Quit),
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_next();
                Ok(ComponentAction::Update)
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_previous();
                Ok(ComponentAction::Update)
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.toggle_selected();
                Ok(ComponentAction::Update)
            }
            _ => Ok(ComponentAction::None),
        }
    }
}
