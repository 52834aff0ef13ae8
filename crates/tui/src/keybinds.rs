pub struct Keybinds;

impl Default for Keybinds {
    fn default() -> Self {
        Self
    }
}

impl Keybinds {
    pub fn help_text(&self) -> String {
        r#"Keyboard Shortcuts:

Form:
  Tab / ↓       Next control
  Shift+Tab / ↑ Previous control
  Enter         Open selector / press button
  Type          Edit the focused text field

Steps:
  F1 F2 F3      Jump to a step
  Alt + 1/2/3   Jump to a step
  Click         Jump via the step indicator

Country picker:
  Type          Filter countries
  1 - 4         Pick a suggested country
  ↑ / ↓         Move selection
  Enter         Choose
  Esc           Close

General:
  F12           Show this help
  ?             Show this help (outside text fields)
  Esc / Ctrl+Q  Quit
"#
        .to_string()
    }
}
