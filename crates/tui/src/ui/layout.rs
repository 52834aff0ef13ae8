use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};
use shipbook_booking::Step;

use super::panel::{Panel, PanelType};

const INDICATOR_HEIGHT: u16 = 3;
const STATUS_HEIGHT: u16 = 1;
const MAX_FORM_WIDTH: u16 = 100;

#[derive(Default)]
pub struct LayoutState {
    cached_panels: Vec<Panel>,
    indicator_segments: Vec<(Step, Rect)>,
}

impl LayoutState {
    pub fn calculate_layout(&mut self, area: Rect) -> &[Panel] {
        let width = area.width.min(MAX_FORM_WIDTH);
        let area = Rect {
            x: area.x + (area.width - width) / 2,
            width,
            ..area
        };

        let main_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(INDICATOR_HEIGHT),
                Constraint::Min(1),
                Constraint::Length(STATUS_HEIGHT),
            ])
            .split(area);

        let segments = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ])
            .split(main_layout[0]);

        self.indicator_segments = Step::ALL.into_iter().zip(segments.iter().copied()).collect();

        self.cached_panels = vec![
            Panel {
                panel_type: PanelType::StepIndicator,
                rect: main_layout[0],
            },
            Panel {
                panel_type: PanelType::Form,
                rect: main_layout[1],
            },
            Panel {
                panel_type: PanelType::StatusBar,
                rect: main_layout[2],
            },
        ];

        &self.cached_panels
    }

    pub fn get_panels(&self) -> &[Panel] {
        &self.cached_panels
    }

    pub fn indicator_segments(&self) -> &[(Step, Rect)] {
        &self.indicator_segments
    }

    /// Step whose indicator segment covers the given terminal cell.
    pub fn step_at(&self, column: u16, row: u16) -> Option<Step> {
        self.indicator_segments
            .iter()
            .find(|(_, rect)| rect.contains(Position::new(column, row)))
            .map(|(step, _)| *step)
    }
}
