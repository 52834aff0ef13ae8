use super::*;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};

const ACCENT: Color = Color::Rgb(0x38, 0x28, 0x69);
const MUTED: Color = Color::DarkGray;
const CONTROL_HEIGHT: u16 = 3;
const BUTTON_WIDTH: u16 = 14;
const UNIT_WIDTH: u16 = 24;

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        self.layout.calculate_layout(area);

        let panels = self.layout.get_panels().to_vec();

        for panel in panels {
            match panel.panel_type {
                PanelType::StepIndicator => self.render_step_indicator(frame),
                PanelType::Form => self.render_form(frame, panel.rect),
                PanelType::StatusBar => self.render_status_bar(frame, panel.rect),
            }
        }

        if let Some(ref picker) = self.picker {
            self.render_picker(frame, area, picker);
        }

        if self.show_submitted {
            self.render_submitted(frame, area);
        }

        if self.show_help {
            self.render_help(frame, area);
        }
    }

    fn render_step_indicator(&self, frame: &mut Frame) {
        for (step, rect) in self.layout.indicator_segments() {
            let active = *step == self.booking.step;
            let style = if active {
                Style::default()
                    .fg(Color::White)
                    .bg(ACCENT)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(MUTED)
            };
            let border_style = if active {
                Style::default().fg(ACCENT)
            } else {
                Style::default().fg(MUTED)
            };
            let line = Line::from(vec![
                Span::styled(format!(" {} ", step.number()), style),
                Span::raw(" "),
                Span::styled(step.title(), if active { border_style } else { style }),
            ]);
            frame.render_widget(
                Paragraph::new(line).alignment(Alignment::Center).block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(border_style),
                ),
                *rect,
            );
        }
    }

    fn render_form(&self, frame: &mut Frame, area: Rect) {
        let step = self.booking.step;
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" Step {} of 3 ", step.number()));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if step.is_review() {
            self.render_review(frame, inner);
            return;
        }

        let groups = Self::field_rows(step.fields());
        let mut constraints: Vec<Constraint> = groups
            .iter()
            .map(|_| Constraint::Length(CONTROL_HEIGHT))
            .collect();
        constraints.push(Constraint::Length(CONTROL_HEIGHT));
        constraints.push(Constraint::Min(0));

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(inner);

        for (group, rect) in groups.iter().zip(rows.iter()) {
            match group.as_slice() {
                [field] => self.render_field(frame, *rect, *field),
                [number, unit] => {
                    let cells = Layout::default()
                        .direction(Direction::Horizontal)
                        .constraints([Constraint::Min(1), Constraint::Length(UNIT_WIDTH)])
                        .split(*rect);
                    self.render_field(frame, cells[0], *number);
                    self.render_field(frame, cells[1], *unit);
                }
                _ => {}
            }
        }
        self.render_buttons(frame, rows[groups.len()]);
    }

    /// One row per field, except that a unit selector shares the row of the
    /// weight it qualifies.
    fn field_rows(fields: &[Field]) -> Vec<Vec<Field>> {
        let mut rows: Vec<Vec<Field>> = Vec::new();
        for field in fields {
            if *field == Field::WeightUnit {
                if let Some(last) = rows.last_mut().filter(|row| row.as_slice() == [Field::Weight]) {
                    last.push(*field);
                    continue;
                }
            }
            rows.push(vec![*field]);
        }
        rows
    }

    fn field_display(&self, field: Field) -> (String, Style) {
        let value = self.booking.form.get(field);
        let catalog = &self.booking.catalog;

        if field == Field::SelectedLocation && value.is_empty() && catalog.is_empty() {
            if catalog.is_loading {
                return ("Loading countries...".to_string(), Style::default().fg(MUTED));
            }
            if let Some(ref err) = catalog.error {
                return (
                    format!("Countries unavailable: {err}"),
                    Style::default().fg(Color::Red),
                );
            }
        }

        if value.is_empty() {
            return (field.placeholder().to_string(), Style::default().fg(MUTED));
        }

        let shown = field
            .choices()
            .into_iter()
            .find(|c| c.value == value)
            .map(|c| c.label)
            .unwrap_or_else(|| value.to_string());
        (shown, Style::default())
    }

    fn render_field(&self, frame: &mut Frame, area: Rect, field: Field) {
        let focused = self.focus.is_focused(Control::Field(field));
        let (mut text, style) = self.field_display(field);

        match field.kind() {
            FieldKind::Select => text.push_str("  ▾"),
            FieldKind::Text | FieldKind::Number if focused => {
                if self.booking.form.get(field).is_empty() {
                    text.clear();
                }
                text.push('▏');
            }
            _ => {}
        }

        let border_style = if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(MUTED)
        };

        frame.render_widget(
            Paragraph::new(Span::styled(text, style)).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style)
                    .title(format!(" {} ", field.label())),
            ),
            area,
        );
    }

    fn render_buttons(&self, frame: &mut Frame, area: Rect) {
        let buttons = self.booking.step.buttons();
        let mut constraints: Vec<Constraint> = Vec::new();
        for (i, _) in buttons.iter().enumerate() {
            if i > 0 {
                constraints.push(Constraint::Min(1));
            }
            constraints.push(Constraint::Length(BUTTON_WIDTH));
        }
        if buttons.len() == 1 {
            constraints.insert(0, Constraint::Min(1));
        }

        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(constraints)
            .split(area);

        // Buttons sit in every other cell, spacers in between.
        let button_cells = cells.iter().rev().step_by(2).rev();
        for (button, rect) in buttons.iter().zip(button_cells) {
            let focused = self.focus.is_focused(Control::Button(*button));
            let base = match button {
                StepButton::Previous => Style::default().fg(Color::Black).bg(Color::Gray),
                StepButton::Next | StepButton::Submit => Style::default().fg(Color::White).bg(ACCENT),
            };
            let style = if focused {
                base.add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                base
            };
            frame.render_widget(
                Paragraph::new(button.label())
                    .alignment(Alignment::Center)
                    .style(style)
                    .block(Block::default().borders(Borders::ALL)),
                *rect,
            );
        }
    }

    fn render_review(&self, frame: &mut Frame, area: Rect) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(1),
                Constraint::Length(CONTROL_HEIGHT),
            ])
            .split(area);

        let mut lines = vec![
            Line::styled(
                "Review Your Information",
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Line::raw(""),
        ];
        for row in self.booking.review() {
            lines.push(Line::styled(row.label, Style::default().fg(MUTED)));
            lines.push(Line::styled(
                row.value,
                Style::default().add_modifier(Modifier::BOLD),
            ));
        }

        frame.render_widget(Paragraph::new(lines), rows[0]);
        self.render_buttons(frame, rows[1]);
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let catalog = &self.booking.catalog;
        let line = if catalog.is_loading {
            Line::styled(" Loading countries...", Style::default().fg(MUTED))
        } else if let Some(ref err) = self.last_error {
            Line::styled(format!(" {err}"), Style::default().fg(Color::Red))
        } else if let Some(ref err) = catalog.error {
            Line::styled(
                format!(" Countries unavailable: {err}"),
                Style::default().fg(Color::Red),
            )
        } else if let Some(submission) = self.submission() {
            Line::styled(
                format!(
                    " Booking submitted at {}",
                    submission.submitted_at.format("%Y-%m-%d %H:%M:%S UTC")
                ),
                Style::default().fg(Color::Green),
            )
        } else {
            Line::styled(
                " Tab: move  Enter: select  F1-F3: jump  F12: help  Esc: quit",
                Style::default().fg(MUTED),
            )
        };
        frame.render_widget(Paragraph::new(line), area);
    }

    fn render_picker(&self, frame: &mut Frame, area: Rect, picker: &Picker) {
        let popup_area = self.centered_rect(60, 70, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", picker.field.placeholder()));
        let inner = block.inner(popup_area);
        frame.render_widget(block, popup_area);

        let list_area = if picker.is_searchable() {
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(2),
                    Constraint::Length(CONTROL_HEIGHT),
                    Constraint::Min(1),
                ])
                .split(inner);
            self.render_suggestions(frame, rows[0]);
            frame.render_widget(
                Paragraph::new(format!("{}▏", picker.query)).block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(Color::Yellow))
                        .title(" Search "),
                ),
                rows[1],
            );
            rows[2]
        } else {
            inner
        };

        let choices = self.picker_choices(picker);
        if choices.is_empty() {
            let catalog = &self.booking.catalog;
            let message = if picker.is_searchable() && catalog.is_loading {
                "Loading countries...".to_string()
            } else if let (true, Some(err)) = (picker.is_searchable(), catalog.error.as_ref()) {
                format!("Countries unavailable: {err}")
            } else {
                "No matches".to_string()
            };
            frame.render_widget(
                Paragraph::new(message)
                    .style(Style::default().fg(MUTED))
                    .wrap(Wrap { trim: true }),
                list_area,
            );
            return;
        }

        let items: Vec<ListItem> = choices
            .into_iter()
            .map(|choice| ListItem::new(choice.label))
            .collect();
        let mut state = ListState::default().with_selected(Some(picker.selected));
        frame.render_stateful_widget(
            List::new(items)
                .highlight_style(Style::default().fg(Color::White).bg(ACCENT))
                .highlight_symbol("> "),
            list_area,
            &mut state,
        );
    }

    fn render_suggestions(&self, frame: &mut Frame, area: Rect) {
        let suggested = &self.booking.catalog.suggested;
        let mut spans = vec![Span::styled("Suggested: ", Style::default().fg(MUTED))];
        if suggested.is_empty() {
            spans.push(Span::styled("none yet", Style::default().fg(MUTED)));
        }
        for (i, country) in suggested.iter().enumerate() {
            spans.push(Span::styled(
                format!("[{}]", i + 1),
                Style::default().fg(Color::Yellow),
            ));
            spans.push(Span::raw(format!(" {country}  ")));
        }
        frame.render_widget(
            Paragraph::new(Line::from(spans)).wrap(Wrap { trim: true }),
            area,
        );
    }

    fn render_submitted(&self, frame: &mut Frame, area: Rect) {
        let popup_area = self.centered_rect(50, 30, area);
        let location = self
            .submission()
            .map(|s| s.form.selected_location.as_str())
            .filter(|l| !l.is_empty())
            .unwrap_or(shipbook_booking::EMPTY_PLACEHOLDER);
        let text = format!(
            "\nYour booking has been recorded.\n\nOrigin: {location}\n\nThe summary is printed when you quit.\n\n[Enter] or [Esc] to close"
        );

        frame.render_widget(Clear, popup_area);
        frame.render_widget(
            Paragraph::new(text)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: false })
                .block(Block::default().borders(Borders::ALL).title(" Submitted ")),
            popup_area,
        );
    }

    fn render_help(&self, frame: &mut Frame, area: Rect) {
        let help_text = self.keybinds.help_text();
        let popup_area = self.centered_rect(60, 80, area);

        frame.render_widget(Clear, popup_area);
        frame.render_widget(
            Paragraph::new(help_text).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Help - Esc or F12 to close "),
            ),
            popup_area,
        );
    }

    fn centered_rect(&self, percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }
}
