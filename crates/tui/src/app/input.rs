use super::*;

impl App {
    pub fn handle_event(&mut self, event: Event) -> Result<bool> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key),
            Event::Mouse(mouse) => self.handle_mouse_event(mouse),
            _ => Ok(false),
        }
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<bool> {
        if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return Ok(true);
        }

        if self.show_help {
            if matches!(
                key.code,
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Enter | KeyCode::F(12)
            ) {
                self.show_help = false;
            }
            return Ok(false);
        }

        if self.show_submitted {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
                self.show_submitted = false;
            }
            return Ok(false);
        }

        if self.picker.is_some() {
            self.handle_picker_key(key);
            return Ok(false);
        }

        if key.code == KeyCode::F(12) {
            self.show_help = true;
            return Ok(false);
        }

        if let Some(step) = Self::step_shortcut(key) {
            self.go_to_step(step);
            return Ok(false);
        }

        match key.code {
            KeyCode::Tab | KeyCode::Down => self.focus.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.focus.focus_previous(),
            KeyCode::Enter => self.activate_focused(),
            KeyCode::Esc => {
                self.should_quit = true;
                return Ok(true);
            }
            KeyCode::Backspace => {
                if let Some(field) = self.focus.editing_field() {
                    self.booking.form.pop_char(field);
                }
            }
            KeyCode::Char(c) => {
                if let Some(field) = self.focus.editing_field() {
                    self.booking.form.push_char(field, c);
                } else if c == '?' {
                    self.show_help = true;
                }
            }
            _ => {}
        }
        Ok(false)
    }

    fn step_shortcut(key: KeyEvent) -> Option<Step> {
        match key.code {
            KeyCode::F(n) => Step::from_number(n as usize),
            KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::ALT) => {
                c.to_digit(10).and_then(|n| Step::from_number(n as usize))
            }
            _ => None,
        }
    }

    fn handle_picker_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.picker = None,
            KeyCode::Enter => self.choose_from_picker(),
            KeyCode::Up => self.move_picker_selection(-1),
            KeyCode::Down | KeyCode::Tab => self.move_picker_selection(1),
            KeyCode::PageUp => self.move_picker_selection(-10),
            KeyCode::PageDown => self.move_picker_selection(10),
            KeyCode::Backspace => self.edit_picker_query(|query| {
                query.pop();
            }),
            KeyCode::Char(c @ '1'..='4') => {
                let index = c as usize - '1' as usize;
                self.choose_suggestion(index);
            }
            KeyCode::Char(c) => self.edit_picker_query(|query| query.push(c)),
            _ => {}
        }
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<bool> {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if self.show_help || self.show_submitted {
                    return Ok(false);
                }
                if let Some(step) = self.layout.step_at(mouse.column, mouse.row) {
                    self.go_to_step(step);
                }
            }
            MouseEventKind::ScrollDown if self.picker.is_some() => self.move_picker_selection(1),
            MouseEventKind::ScrollUp if self.picker.is_some() => self.move_picker_selection(-1),
            _ => {}
        }
        Ok(false)
    }
}
